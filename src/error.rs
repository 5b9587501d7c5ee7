// HTTP API error types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

/// HTTP API error with appropriate status codes and client-friendly messages
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request
    BadRequest(String),
    Validation(String),

    // 403 Forbidden
    Forbidden,

    // 404 Not Found
    NotFound(String),

    // 500 Internal Server Error (message plus raw underlying error text)
    Internal { message: String, error: String },
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// JSON response body. Every failure carries a human-readable `message`;
    /// validation and 500s additionally carry the underlying `error` text.
    pub fn to_json(&self) -> Value {
        match self {
            ApiError::BadRequest(message) => json!({ "message": message }),
            ApiError::Validation(detail) => {
                json!({ "message": "Validation failed", "error": detail })
            }
            ApiError::Forbidden => json!({ "message": "Forbidden" }),
            ApiError::NotFound(message) => json!({ "message": message }),
            ApiError::Internal { message, error } => {
                json!({ "message": message, "error": error })
            }
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn validation(detail: impl Into<String>) -> Self {
        ApiError::Validation(detail.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn internal(message: impl Into<String>, error: impl std::fmt::Display) -> Self {
        ApiError::Internal { message: message.into(), error: error.to_string() }
    }
}

impl From<crate::upload::UploadError> for ApiError {
    fn from(err: crate::upload::UploadError) -> Self {
        match err {
            crate::upload::UploadError::UnexpectedField(_)
            | crate::upload::UploadError::TooManyFiles { .. }
            | crate::upload::UploadError::Multipart(_) => ApiError::bad_request(err.to_string()),
            crate::upload::UploadError::Io(e) => {
                tracing::error!("upload storage error: {}", e);
                ApiError::internal("Error storing uploaded file", e)
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Internal { message, error } => write!(f, "{}: {}", message, error),
            other => write!(f, "{}", other.to_json()["message"].as_str().unwrap_or("error")),
        }
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status_code(), Json(self.to_json())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forbidden_uses_fixed_wire_shape() {
        let err = ApiError::Forbidden;
        assert_eq!(err.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(err.to_json(), json!({ "message": "Forbidden" }));
    }

    #[test]
    fn validation_is_a_client_error() {
        let err = ApiError::validation("missing required field: name");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            err.to_json(),
            json!({ "message": "Validation failed", "error": "missing required field: name" })
        );
    }

    #[test]
    fn internal_carries_underlying_error_text() {
        let err = ApiError::internal("Error creating project", "connection reset");
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            err.to_json(),
            json!({ "message": "Error creating project", "error": "connection reset" })
        );
    }
}
