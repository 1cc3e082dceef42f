//! Authentication middleware
//!
//! Guards admin routes: extracts the bearer token, verifies its signature
//! and expiry, and makes the claims available to the handler.

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;
use tracing::warn;

use crate::state::AppState;
use crate::utils::errors::{AppError, Result};

/// Reject the request unless it carries a valid admin bearer token.
pub async fn require_admin(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response> {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or_else(|| {
            warn!(path = %request.uri().path(), "Admin request without bearer token");
            AppError::Auth("Missing bearer token".to_string())
        })?;

    let claims = state.services.auth_service.verify_token(token)?;
    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}
