use axum::extract::Path;
use axum::extract::State;
use axum::Extension;
use axum::Json;
use serde::Serialize;

use super::ApiError;
use crate::domain::reminder::errors::ReminderError;
use crate::domain::reminder::models::ReminderId;
use crate::domain::reminder::ports::ReminderServicePort;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn delete_reminder(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(reminder_id): Path<String>,
) -> Result<Json<DeleteReminderResponseData>, ApiError> {
    // An unparseable id cannot match any reminder; report it exactly like a
    // missing one.
    let reminder_id = ReminderId::from_string(&reminder_id)
        .map_err(|_| ApiError::NotFound(ReminderError::NotFound.to_string()))?;

    state
        .reminder_service
        .delete_reminder(reminder_id, current_user.user.id)
        .await
        .map_err(ApiError::from)
        .map(|_| {
            Json(DeleteReminderResponseData {
                message: "Reminder deleted".to_string(),
            })
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteReminderResponseData {
    pub message: String,
}
