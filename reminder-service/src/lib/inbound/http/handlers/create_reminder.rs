use axum::extract::State;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ReminderData;
use crate::domain::reminder::models::CreateReminderCommand;
use crate::domain::reminder::ports::ReminderServicePort;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn create_reminder(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Json(body): Json<CreateReminderRequestBody>,
) -> Result<Json<ReminderData>, ApiError> {
    let command = CreateReminderCommand::new(body.title, body.category);

    state
        .reminder_service
        .create_reminder(command, current_user.user.id)
        .await
        .map_err(ApiError::from)
        .map(|ref reminder| Json(reminder.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateReminderRequestBody {
    title: String,
    category: String,
}
