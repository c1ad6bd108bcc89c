//! Tripcraft AI Trip Planning Server
//!
//! A REST JSON API that turns trip parameters into a fully normalized
//! itinerary by prompting a hosted model gateway and repairing its output.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod plan;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
