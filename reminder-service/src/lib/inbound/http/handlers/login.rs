use axum::extract::State;
use axum::Form;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::TokenResponseData;
use crate::domain::user::models::Credentials;
use crate::domain::user::ports::AccountServicePort;
use crate::inbound::http::router::AppState;

/// Login endpoint. Consumes a form-encoded body (OAuth2 password flow
/// convention); unknown-user and wrong-password failures are identical.
pub async fn login(
    State(state): State<AppState>,
    Form(body): Form<LoginRequestBody>,
) -> Result<Json<TokenResponseData>, ApiError> {
    let token = state
        .account_service
        .login(Credentials {
            username: body.username,
            password: body.password,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Json(TokenResponseData::bearer(token)))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    username: String,
    password: String,
}
