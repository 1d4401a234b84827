use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Extension type to store authenticated user ID in request extensions
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

/// Middleware that validates JWT tokens and adds user info to request extensions.
///
/// Every rejection carries the same 401 body, so a caller cannot tell
/// which check failed.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    // Extract token from Authorization header
    let token = extract_token_from_header(&req)?;

    // Validate token and extract claims (from auth library)
    let claims: auth::Claims = state.authenticator.validate_token(token).map_err(|e| {
        tracing::warn!("JWT validation failed: {}", e);
        unauthorized()
    })?;

    // Extract user ID from claims
    let user_id = UserId::from_string(&claims.sub).map_err(|e| {
        tracing::warn!("Failed to parse user ID from token: {}", e);
        unauthorized()
    })?;

    // Add authenticated user info to request extensions
    req.extensions_mut().insert(AuthenticatedUser { user_id });

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<&str, Response> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            unauthorized()
        })?;

    let auth_str = auth_header.to_str().map_err(|_| {
        tracing::warn!("Authorization header is not valid UTF-8");
        unauthorized()
    })?;

    if !auth_str.starts_with("Bearer ") {
        tracing::warn!("Authorization header is not a bearer token");
        return Err(unauthorized());
    }

    Ok(auth_str.trim_start_matches("Bearer "))
}

fn unauthorized() -> Response {
    ApiError::Unauthorized("Unauthorized".to_string()).into_response()
}
