use axum::extract::State;
use axum::Extension;
use axum::Json;

use super::ApiError;
use super::ReminderData;
use crate::domain::reminder::ports::ReminderServicePort;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn list_reminders(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
) -> Result<Json<Vec<ReminderData>>, ApiError> {
    state
        .reminder_service
        .list_reminders(current_user.user.id)
        .await
        .map_err(ApiError::from)
        .map(|reminders| Json(reminders.iter().map(ReminderData::from).collect()))
}
