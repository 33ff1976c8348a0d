//! Logging utilities with request correlation support.

/// Generate a new unique request ID using UUID v4.
///
/// Returns a string representation of the UUID.
pub fn generate_request_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_request_ids_are_unique() {
        let ids: HashSet<String> = (0..100).map(|_| generate_request_id()).collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn test_request_id_is_uuid() {
        let id = generate_request_id();
        assert!(uuid::Uuid::parse_str(&id).is_ok());
    }
}
