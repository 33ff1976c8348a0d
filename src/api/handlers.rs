//! HTTP request handlers for the chat gateway.
//!
//! Three endpoints: a root greeting, a liveness probe, and the chat
//! endpoint that forwards a message to the upstream completion API.

use crate::api::docs::ApiDoc;
use crate::api::models::{ChatRequest, ChatResponse};
use crate::core::logging::generate_request_id;
use crate::core::Result;
use crate::services::CompletionClient;
use axum::{
    extract::State,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Shared application state.
///
/// Built once at startup; everything in here is read-only per request.
#[derive(Clone)]
pub struct AppState {
    pub completion: CompletionClient,
}

/// Root greeting endpoint.
#[utoipa::path(
    get,
    path = "/",
    tag = "gateway",
    responses(
        (status = 200, description = "Fixed greeting payload")
    )
)]
pub async fn root() -> impl IntoResponse {
    Json(json!({
        "message": "Hello from your AI Agent!"
    }))
}

/// Health check endpoint for liveness probing.
#[utoipa::path(
    get,
    path = "/health",
    tag = "gateway",
    responses(
        (status = 200, description = "Service is running")
    )
)]
pub async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "healthy"
    }))
}

/// Chat endpoint.
///
/// Forwards the message to the upstream completion API and returns the
/// generated text. Malformed bodies are rejected by the `Json` extractor
/// before this handler runs.
#[utoipa::path(
    post,
    path = "/chat",
    tag = "gateway",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Model reply", body = ChatResponse),
        (status = 422, description = "Malformed request body"),
        (status = 500, description = "Authentication failure"),
        (status = 502, description = "Bad gateway - upstream error"),
        (status = 504, description = "Gateway timeout")
    )
)]
#[tracing::instrument(skip(state, request))]
pub async fn chat(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>> {
    let request_id = generate_request_id();

    tracing::debug!(
        request_id = %request_id,
        message_len = request.message.len(),
        "Processing chat request"
    );

    let reply = match state.completion.complete(&request.message).await {
        Ok(text) => text,
        Err(err) => {
            tracing::error!(
                request_id = %request_id,
                error = %err,
                "Chat completion failed"
            );
            return Err(err);
        }
    };

    tracing::debug!(
        request_id = %request_id,
        reply_len = reply.len(),
        "Chat request completed"
    );

    Ok(Json(ChatResponse { response: reply }))
}

/// Build the application router with all endpoints and middleware.
pub fn router(state: Arc<AppState>) -> Router {
    let swagger_ui =
        SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi());

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/chat", post(chat))
        .merge(swagger_ui)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
