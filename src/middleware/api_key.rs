use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::error::ApiError;
use crate::state::AppState;

/// Shared-secret guard applied to every create route. Compares the
/// `x-api-key` header byte-for-byte against the configured secret and
/// short-circuits with 403 before any side-effecting work (no file writes,
/// no inserts) when it is absent or mismatched. Stateless.
pub async fn require_api_key(
    State(state): State<AppState>,
    headers: HeaderMap,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let presented = headers.get("x-api-key").map(|value| value.as_bytes());

    match presented {
        Some(key) if key == state.config.api_key.as_bytes() => Ok(next.run(request).await),
        _ => {
            tracing::warn!("rejected write request: missing or mismatched api key");
            Err(ApiError::Forbidden)
        }
    }
}
