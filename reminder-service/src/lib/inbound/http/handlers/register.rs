use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::TokenResponseData;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::Username;
use crate::domain::user::ports::AccountServicePort;
use crate::inbound::http::router::AppState;

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequestBody>,
) -> Result<Json<TokenResponseData>, ApiError> {
    let username =
        Username::new(body.username).map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

    let token = state
        .account_service
        .register(RegisterUserCommand::new(username, body.password))
        .await
        .map_err(ApiError::from)?;

    Ok(Json(TokenResponseData::bearer(token)))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterRequestBody {
    username: String,
    password: String,
}
