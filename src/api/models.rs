//! Request and response models for the chat API.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Chat request body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({"message": "Hello"}))]
pub struct ChatRequest {
    /// Free-text message forwarded to the model
    pub message: String,
}

/// Chat response body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({"response": "Hi! How can I help you today?"}))]
pub struct ChatResponse {
    /// Text of the model's reply
    pub response: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_deserialization() {
        let request: ChatRequest = serde_json::from_str(r#"{"message": "Hello"}"#).unwrap();
        assert_eq!(request.message, "Hello");
    }

    #[test]
    fn test_chat_request_missing_message_fails() {
        let result = serde_json::from_str::<ChatRequest>("{}");
        assert!(result.is_err());
    }

    #[test]
    fn test_chat_response_serialization() {
        let response = ChatResponse {
            response: "Hi".to_string(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, serde_json::json!({"response": "Hi"}));
    }
}
