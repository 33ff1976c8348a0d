//! Completion client for the Anthropic Messages API.
//!
//! This module translates a single user message into a Messages API call
//! and extracts the first text content block of the reply. Model and token
//! limit are fixed; the client is built once at startup and shared
//! read-only across concurrent requests.

use crate::core::config::AppConfig;
use crate::core::error::{GatewayError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Constants for the Messages API integration.
pub mod constants {
    /// Fixed model identifier for all completions.
    pub const MODEL: &str = "claude-sonnet-4-5-20250929";

    /// Fixed output token limit for all completions.
    pub const MAX_TOKENS: u32 = 1000;

    /// Messages API version header value.
    pub const ANTHROPIC_VERSION: &str = "2023-06-01";

    // Role constants
    pub const ROLE_USER: &str = "user";

    // Content type constants
    pub const CONTENT_TEXT: &str = "text";
}

// ============================================================================
// Wire types
// ============================================================================

/// Single message in a Messages API request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

/// Messages API request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagesRequest {
    pub model: String,
    pub max_tokens: u32,
    pub messages: Vec<Message>,
}

impl MessagesRequest {
    /// Build a single-turn, user-role-only request for `message`.
    pub fn single_turn(message: &str) -> Self {
        Self {
            model: constants::MODEL.to_string(),
            max_tokens: constants::MAX_TOKENS,
            messages: vec![Message {
                role: constants::ROLE_USER.to_string(),
                content: message.to_string(),
            }],
        }
    }
}

/// Content block in a Messages API response.
///
/// Only `text` blocks are interpreted; other block types (e.g. `tool_use`)
/// deserialize with `text: None` and are skipped during extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub block_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Messages API response body (only the fields this service reads).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagesResponse {
    #[serde(default)]
    pub content: Vec<ContentBlock>,
}

/// Extract the text of the first `text` content block, if any.
pub fn first_text_block(response: &MessagesResponse) -> Option<&str> {
    response
        .content
        .iter()
        .find(|block| block.block_type == constants::CONTENT_TEXT)
        .and_then(|block| block.text.as_deref())
}

/// Extract a human-readable message from an upstream error body.
///
/// The Messages API wraps errors as `{"error": {"message": ...}}`; anything
/// else falls back to the raw body text.
fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .as_ref()
        .and_then(|v| v.get("error"))
        .and_then(|e| e.get("message"))
        .and_then(|m| m.as_str())
        .map(|s| s.to_string())
        .unwrap_or_else(|| body.to_string())
}

// ============================================================================
// Client
// ============================================================================

/// Client for the Anthropic Messages API.
///
/// Holds a shared pooled [`reqwest::Client`]; cheap to clone.
#[derive(Clone)]
pub struct CompletionClient {
    http_client: reqwest::Client,
    api_base: String,
    api_key: Option<String>,
}

impl CompletionClient {
    /// Create a client from configuration and a shared HTTP client.
    pub fn new(config: &AppConfig, http_client: reqwest::Client) -> Self {
        Self {
            http_client,
            api_base: config.anthropic.api_base.trim_end_matches('/').to_string(),
            api_key: config.anthropic.api_key.clone(),
        }
    }

    /// Send `message` as a single-turn completion and return the reply text.
    ///
    /// Errors are classified into the closed [`GatewayError`] set: missing
    /// key or upstream 401/403 as `Auth`, transport failures as
    /// `Network`/`Timeout`, other non-success statuses as `Upstream`, and
    /// uninterpretable 2xx replies as `Schema`.
    pub async fn complete(&self, message: &str) -> Result<String> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            GatewayError::Auth("ANTHROPIC_API_KEY is not configured".to_string())
        })?;

        let url = format!("{}/v1/messages", self.api_base);
        let request = MessagesRequest::single_turn(message);

        let response = self
            .http_client
            .post(&url)
            .header("x-api-key", api_key)
            .header("anthropic-version", constants::ANTHROPIC_VERSION)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = extract_error_message(&body);
            return Err(match status.as_u16() {
                401 | 403 => GatewayError::Auth(message),
                code => GatewayError::Upstream {
                    status: code,
                    message,
                },
            });
        }

        let body = response.text().await?;
        let parsed: MessagesResponse = serde_json::from_str(&body)
            .map_err(|e| GatewayError::Schema(format!("invalid response body: {}", e)))?;

        first_text_block(&parsed)
            .map(|text| text.to_string())
            .ok_or_else(|| {
                GatewayError::Schema("no text content block in response".to_string())
            })
    }
}
