use thiserror::Error;

use crate::models::ErrorResponse;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unauthorized - api key may be invalid")]
    Unauthorized,

    #[error("Access denied: {0}")]
    AccessDenied(String),

    #[error("Rate limited - please wait before retrying")]
    RateLimited,

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

impl ApiError {
    /// Truncate a response body to avoid logging excessive data
    fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            return body.to_string();
        }
        let mut end = MAX_ERROR_BODY_LENGTH;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}... (truncated, {} total bytes)", &body[..end], body.len())
    }

    /// The backend reports failures as `{"result": "false", "error_type", "error_message"}`.
    /// Prefer its message, otherwise fall back to the raw body.
    fn message_from_body(body: &str) -> String {
        match serde_json::from_str::<ErrorResponse>(body) {
            Ok(err) => err.error_message,
            Err(_) => Self::truncate_body(body),
        }
    }

    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        let message = Self::message_from_body(body);
        match status.as_u16() {
            401 => ApiError::Unauthorized,
            403 => ApiError::AccessDenied(message),
            404 => ApiError::NotFound(message),
            422 => ApiError::Validation(message),
            429 => ApiError::RateLimited,
            500..=599 => ApiError::ServerError(message),
            _ => ApiError::InvalidResponse(format!("Status {}: {}", status, message)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_from_status_uses_backend_error_message() {
        let body = r#"{"result": "false", "error_type": "HTTPException", "error_message": "Invalid password"}"#;
        match ApiError::from_status(StatusCode::NOT_FOUND, body) {
            ApiError::NotFound(msg) => assert_eq!(msg, "Invalid password"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_from_status_validation() {
        let body = r#"{"result": "false", "error_type": "value_error", "error_message": "value is not a valid email address"}"#;
        assert!(matches!(
            ApiError::from_status(StatusCode::UNPROCESSABLE_ENTITY, body),
            ApiError::Validation(msg) if msg.contains("valid email")
        ));
    }

    #[test]
    fn test_from_status_plain_body() {
        assert!(matches!(
            ApiError::from_status(StatusCode::BAD_GATEWAY, "upstream down"),
            ApiError::ServerError(msg) if msg == "upstream down"
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::UNAUTHORIZED, ""),
            ApiError::Unauthorized
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::IM_A_TEAPOT, "tea"),
            ApiError::InvalidResponse(msg) if msg.starts_with("Status 418")
        ));
    }

    #[test]
    fn test_truncate_body() {
        let long = "x".repeat(MAX_ERROR_BODY_LENGTH + 20);
        let truncated = ApiError::truncate_body(&long);
        assert!(truncated.ends_with(&format!("(truncated, {} total bytes)", long.len())));

        // Never split a multi-byte character
        let wide = "é".repeat(MAX_ERROR_BODY_LENGTH);
        let truncated = ApiError::truncate_body(&wide);
        assert!(truncated.contains("truncated"));
    }
}
