//! Error types for the Eloqua client
//!
//! Caller mistakes are reported synchronously as [`Error::InvalidArgument`]
//! before any network traffic; everything the transport produces is surfaced
//! to the caller unchanged. This layer never retries, wraps, or swallows.

use std::time::Duration;
use thiserror::Error;

/// Result type alias for operations that can fail with a client error.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the Eloqua client.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed caller input, detected before any network call: unknown
    /// resource name, unknown or ill-typed option, missing authentication
    /// field, unsupported search term.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Authentication failed (401), or credentials were rejected.
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Resource not found (404).
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Any other non-success status returned by the API.
    #[error("API error (status {status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message extracted from the response body
        message: String,
    },

    /// Network or connection error.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Request timeout.
    #[error("Request timeout after {0:?}")]
    Timeout(Duration),

    /// Invalid URL (bad base URL or path join failure).
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The response decoded, but is not shaped the way the endpoint promises.
    #[error("Failed to parse API response: {0}")]
    ResponseValidation(String),

    /// HTTP client configuration or initialization error.
    #[error("HTTP client error: {0}")]
    HttpClient(String),
}

impl Error {
    /// Map an unsuccessful HTTP response to an error variant.
    ///
    /// Eloqua error bodies are not uniform across endpoints; when the body
    /// carries a `message` or `failures` field it is used, otherwise a
    /// truncated body snippet stands in.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = extract_message(body);

        match status {
            401 => Error::Authentication(message),
            404 => Error::NotFound(message),
            _ => Error::Api { status, message },
        }
    }
}

fn extract_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(message) = value.get("message").and_then(|m| m.as_str()) {
            return message.to_string();
        }
        if let Some(failures) = value.get("failures").and_then(|f| f.as_array()) {
            let reasons: Vec<&str> = failures
                .iter()
                .filter_map(|f| f.get("type").and_then(|t| t.as_str()))
                .collect();
            if !reasons.is_empty() {
                return reasons.join(", ");
            }
        }
    }

    let snippet: String = body.chars().take(200).collect();
    if snippet.is_empty() {
        "no response body".to_string()
    } else {
        snippet
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_unauthorized_maps_to_authentication() {
        let err = Error::from_response(401, r#"{"message":"Not authenticated."}"#);
        assert_matches!(err, Error::Authentication(msg) if msg == "Not authenticated.");
    }

    #[test]
    fn test_not_found_maps_to_not_found() {
        let err = Error::from_response(404, "");
        assert_matches!(err, Error::NotFound(_));
    }

    #[test]
    fn test_validation_failures_are_joined() {
        let body = r#"{"failures":[{"type":"ObjectValidationError"},{"type":"FieldError"}]}"#;
        let err = Error::from_response(400, body);
        assert_matches!(
            err,
            Error::Api { status: 400, message } if message == "ObjectValidationError, FieldError"
        );
    }

    #[test]
    fn test_opaque_body_is_truncated() {
        let body = "x".repeat(500);
        let err = Error::from_response(500, &body);
        assert_matches!(err, Error::Api { status: 500, message } if message.len() == 200);
    }
}
