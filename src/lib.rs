//! Chat Gateway - a minimal HTTP front for the Anthropic Messages API
//!
//! This library implements a small axum service with three endpoints:
//!
//! - `GET /` - fixed greeting payload
//! - `GET /health` - liveness probe for external orchestrators
//! - `POST /chat` - forwards a single user message to the Messages API and
//!   returns the generated text
//!
//! # Architecture
//!
//! The codebase is organized into three layers:
//!
//! - [`core`]: configuration, error types, logging utilities
//! - [`api`]: HTTP handlers, request/response models, OpenAPI docs
//! - [`services`]: the completion client talking to the upstream API
//!
//! # Configuration
//!
//! All configuration comes from environment variables (`.env` supported):
//!
//! - `ANTHROPIC_API_KEY`: upstream API key; absence surfaces as an
//!   authentication failure on `/chat`, not a startup error
//! - `ANTHROPIC_API_BASE`: upstream base URL (default: `https://api.anthropic.com`)
//! - `HOST`: bind address (default: 0.0.0.0)
//! - `PORT`: bind port (default: 8000)
//! - `REQUEST_TIMEOUT_SECS`: upstream request timeout (default: 300)

pub mod api;
pub mod core;
pub mod services;

// Re-export commonly used types for convenience
pub use api::{router, ApiDoc, AppState, ChatRequest, ChatResponse};
pub use core::{AppConfig, GatewayError, Result};
pub use services::CompletionClient;
