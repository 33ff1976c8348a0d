//! OpenAPI documentation for the gateway endpoints.

use crate::api::models::{ChatRequest, ChatResponse};
use utoipa::OpenApi;

/// OpenAPI specification served at `/api-docs/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Chat Gateway",
        description = "Minimal HTTP gateway forwarding chat messages to the Anthropic Messages API"
    ),
    paths(
        crate::api::handlers::root,
        crate::api::handlers::health,
        crate::api::handlers::chat
    ),
    components(schemas(ChatRequest, ChatResponse)),
    tags(
        (name = "gateway", description = "Chat gateway endpoints")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_contains_all_paths() {
        let doc = ApiDoc::openapi();
        let paths = doc.paths.paths;
        assert!(paths.contains_key("/"));
        assert!(paths.contains_key("/health"));
        assert!(paths.contains_key("/chat"));
    }
}
