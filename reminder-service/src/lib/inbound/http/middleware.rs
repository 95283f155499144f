use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::domain::user::errors::AuthError;
use crate::domain::user::models::User;
use crate::domain::user::ports::AccountServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Extension type carrying the identity resolved for this request
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user: User,
}

/// Middleware gating every user-owned-resource route.
///
/// Extracts the bearer token, resolves it to a concrete identity, and stores
/// the identity in request extensions for the handler. A missing header, a
/// malformed header, and an unresolvable token all produce the same 401
/// response; callers learn nothing about which check failed.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_bearer_token(&req)?;

    let user = state
        .account_service
        .resolve(token)
        .await
        .map_err(|e| match e {
            AuthError::Database(_) | AuthError::Unknown(_) => {
                tracing::error!("Identity resolution failed: {}", e);
                ApiError::InternalServerError(e.to_string()).into_response()
            }
            _ => {
                tracing::warn!("Identity resolution failed: {}", e);
                unauthorized()
            }
        })?;

    req.extensions_mut().insert(CurrentUser { user });

    Ok(next.run(req).await)
}

fn unauthorized() -> Response {
    ApiError::Unauthorized("Could not validate credentials".to_string()).into_response()
}

fn extract_bearer_token(req: &Request) -> Result<&str, Response> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(unauthorized)?;

    let auth_str = auth_header.to_str().map_err(|_| unauthorized())?;

    auth_str.strip_prefix("Bearer ").ok_or_else(unauthorized)
}
