//! API layer for the chat gateway.
//!
//! This module contains the HTTP handlers, request/response models,
//! and OpenAPI documentation for the service endpoints.

pub mod docs;
pub mod handlers;
pub mod models;

// Re-export commonly used types
pub use docs::ApiDoc;
pub use handlers::{chat, health, root, router, AppState};
pub use models::{ChatRequest, ChatResponse};
