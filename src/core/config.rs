//! Configuration management for the chat gateway.
//!
//! All configuration is read from environment variables once at startup
//! (with `.env` support via dotenvy in `main`). Handlers never read the
//! environment directly.

use anyhow::{Context, Result};

/// Main application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Server configuration (host, port)
    pub server: ServerConfig,

    /// Upstream Anthropic API configuration
    pub anthropic: AnthropicConfig,

    /// Request timeout in seconds for the upstream call
    pub request_timeout_secs: u64,
}

/// Server-specific configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,

    /// Port to bind to
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Upstream Anthropic API configuration.
#[derive(Debug, Clone)]
pub struct AnthropicConfig {
    /// API key. Absence is not a startup error; it surfaces as an
    /// authentication failure on the first `/chat` call.
    pub api_key: Option<String>,

    /// Base URL of the Messages API (overridable for tests)
    pub api_base: String,
}

impl Default for AnthropicConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: default_api_base(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_api_base() -> String {
    "https://api.anthropic.com".to_string()
}

fn default_request_timeout() -> u64 {
    300
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Every variable has a default except `ANTHROPIC_API_KEY`, which is
    /// optional here and checked at call time by the completion client.
    pub fn from_env() -> Result<Self> {
        let host = std::env::var("HOST").unwrap_or_else(|_| default_host());

        let port = match std::env::var("PORT") {
            Ok(s) => s
                .parse::<u16>()
                .with_context(|| format!("Invalid PORT value: {}", s))?,
            Err(_) => default_port(),
        };

        let request_timeout_secs = match std::env::var("REQUEST_TIMEOUT_SECS") {
            Ok(s) => s
                .parse::<u64>()
                .with_context(|| format!("Invalid REQUEST_TIMEOUT_SECS value: {}", s))?,
            Err(_) => default_request_timeout(),
        };

        let api_key = std::env::var("ANTHROPIC_API_KEY")
            .ok()
            .filter(|k| !k.is_empty());
        let api_base =
            std::env::var("ANTHROPIC_API_BASE").unwrap_or_else(|_| default_api_base());

        Ok(Self {
            server: ServerConfig { host, port },
            anthropic: AnthropicConfig { api_key, api_base },
            request_timeout_secs,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            anthropic: AnthropicConfig::default(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_server_config() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
    }

    #[test]
    fn test_default_anthropic_config() {
        let config = AnthropicConfig::default();
        assert!(config.api_key.is_none());
        assert_eq!(config.api_base, "https://api.anthropic.com");
    }

    #[test]
    fn test_default_request_timeout() {
        let config = AppConfig::default();
        assert_eq!(config.request_timeout_secs, 300);
    }
}
