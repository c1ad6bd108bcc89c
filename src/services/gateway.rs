//! Upstream AI gateway client
//!
//! Chat-completion-style HTTP client. The gateway is abstracted behind
//! [`ModelGateway`] so the planner can be tested without network access.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::{
    config::GatewayConfig,
    error::{AppError, AppResult},
};

/// A black-box text generator: system and user instructions in, raw text
/// out.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ModelGateway: Send + Sync {
    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> AppResult<String>;
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    response_format: ResponseFormat,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// reqwest-backed gateway client
pub struct HttpModelGateway {
    client: reqwest::Client,
    config: GatewayConfig,
}

impl HttpModelGateway {
    pub fn new(config: GatewayConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl ModelGateway for HttpModelGateway {
    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> AppResult<String> {
        // The key is checked per request so a server without credentials
        // still starts and serves health checks
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| AppError::Configuration("GATEWAY_API_KEY".to_string()))?;

        let body = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt,
                },
            ],
            response_format: ResponseFormat {
                format_type: "json_object",
            },
        };

        let response = self
            .client
            .post(&self.config.url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!(status = %status, body = %error_text, "AI gateway error");
            return Err(match status {
                StatusCode::TOO_MANY_REQUESTS => AppError::UpstreamRateLimited,
                StatusCode::PAYMENT_REQUIRED => AppError::UpstreamQuotaExhausted,
                _ => AppError::Upstream(status.as_u16()),
            });
        }

        let payload: ChatResponse = response.json().await?;
        payload
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| AppError::Internal("AI gateway returned no completion".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_wire_format() {
        let body = ChatRequest {
            model: "google/gemini-2.5-flash",
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: "be helpful",
                },
                ChatMessage {
                    role: "user",
                    content: "plan a trip",
                },
            ],
            response_format: ResponseFormat {
                format_type: "json_object",
            },
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "google/gemini-2.5-flash");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "plan a trip");
        assert_eq!(json["response_format"]["type"], "json_object");
    }

    #[test]
    fn test_chat_response_content_extraction() {
        let payload: ChatResponse = serde_json::from_str(
            r#"{ "choices": [ { "message": { "content": "{\"places\": []}" } } ] }"#,
        )
        .unwrap();
        let content = payload
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content);
        assert_eq!(content.as_deref(), Some("{\"places\": []}"));
    }

    #[test]
    fn test_chat_response_empty_choices() {
        let payload: ChatResponse = serde_json::from_str("{}").unwrap();
        assert!(payload.choices.is_empty());
    }

    #[tokio::test]
    async fn test_missing_api_key_is_configuration_error() {
        let gateway = HttpModelGateway::new(GatewayConfig::default()).unwrap();
        let result = gateway.complete("system", "user").await;
        assert!(matches!(result, Err(AppError::Configuration(_))));
    }
}
