use axum::extract::Request;
use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;

use crate::domain::auth::errors::AuthError;
use crate::domain::user::models::UserId;
use crate::inbound::http::router::AppState;

const MISSING_HEADER: &str = "missing authorization header";
const INVALID_HEADER: &str = "invalid authorization header";
const INVALID_TOKEN: &str = "invalid token";

/// Extension type to store the authenticated user in request extensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

/// Middleware that verifies the bearer token and binds the caller's identity
/// to the request before the handler runs.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_bearer_token(&req)?;

    let user_id = state
        .auth_service
        .authenticate_token(token)
        .map_err(|e| {
            match e {
                AuthError::ExpiredToken => tracing::info!("Rejected expired token"),
                _ => tracing::warn!(error = %e, "Rejected invalid token"),
            }
            unauthorized(INVALID_TOKEN)
        })?;

    req.extensions_mut().insert(AuthenticatedUser { user_id });

    Ok(next.run(req).await)
}

fn extract_bearer_token(req: &Request) -> Result<&str, Response> {
    let header = req
        .headers()
        .get(AUTHORIZATION)
        .ok_or_else(|| unauthorized(MISSING_HEADER))?;

    let value = header.to_str().map_err(|_| unauthorized(INVALID_HEADER))?;

    match value.split_once(' ') {
        Some((scheme, token)) if scheme.eq_ignore_ascii_case("bearer") => Ok(token),
        _ => Err(unauthorized(INVALID_HEADER)),
    }
}

fn unauthorized(message: &str) -> Response {
    (StatusCode::UNAUTHORIZED, Json(json!({ "error": message }))).into_response()
}
