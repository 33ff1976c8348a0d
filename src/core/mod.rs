//! Core functionality for the chat gateway.
//!
//! This module contains fundamental components used throughout the application:
//! - Configuration management
//! - Error handling
//! - Logging utilities

pub mod config;
pub mod error;
pub mod logging;

// Re-export commonly used types
pub use config::{AnthropicConfig, AppConfig, ServerConfig};
pub use error::{GatewayError, Result};
pub use logging::generate_request_id;
