//! Configuration management for Tripcraft server

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Upstream AI gateway settings
#[derive(Debug, Deserialize, Clone)]
pub struct GatewayConfig {
    /// Chat-completions endpoint URL
    pub url: String,
    /// Model identifier sent with every request
    pub model: String,
    /// Bearer token for the gateway. Absence is only an error once a
    /// generation request actually comes in.
    #[serde(default)]
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub gateway: GatewayConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default"))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (with prefix TRIPCRAFT_)
            .add_source(
                Environment::with_prefix("TRIPCRAFT")
                    .separator("_")
                    .try_parsing(true),
            )
            // Override gateway API key from GATEWAY_API_KEY env var if present
            .set_override_option("gateway.api_key", env::var("GATEWAY_API_KEY").ok())?
            // Override gateway model from GATEWAY_MODEL env var if present
            .set_override_option("gateway.model", env::var("GATEWAY_MODEL").ok())?
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            url: "https://ai.gateway.lovable.dev/v1/chat/completions".to_string(),
            model: "google/gemini-2.5-flash".to_string(),
            api_key: None,
            timeout_secs: 60,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
