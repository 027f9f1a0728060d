//! Shared utility functions

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// JSON body used by every failed request.
///
/// ```
/// use import_server::util::ErrorResponse;
///
/// let body = serde_json::to_string(&ErrorResponse::new("Unauthorized")).unwrap();
/// assert_eq!(body, r#"{"success":false,"error":"Unauthorized"}"#);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// Always `false`.
    pub success: bool,
    /// Human-readable error message.
    pub error: String,
}

impl ErrorResponse {
    /// Build an error body from a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: message.into(),
        }
    }
}

/// Render a status code and message as an `ErrorResponse`.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorResponse::new(message))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_shape() {
        let body = serde_json::to_value(ErrorResponse::new("Invalid guild ID")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "success": false, "error": "Invalid guild ID" })
        );
    }

    #[test]
    fn test_error_response_status() {
        let response = error_response(StatusCode::PAYMENT_REQUIRED, "nope");
        assert_eq!(response.status(), StatusCode::PAYMENT_REQUIRED);
    }
}
