use axum::http::header;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::places::errors::PlacesError;
use crate::domain::places::models::Place;
use crate::domain::reminder::errors::ReminderError;
use crate::domain::reminder::models::Reminder;
use crate::domain::user::errors::AuthError;

pub mod create_reminder;
pub mod delete_reminder;
pub mod geocode;
pub mod list_reminders;
pub mod login;
pub mod nearby_places;
pub mod register;

/// Error surface of the HTTP layer.
///
/// Authentication failures carry no detail about which check failed, and
/// Unauthorized responses always advertise the Bearer scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    BadRequest(String),
    Unauthorized(String),
    NotFound(String),
    UnprocessableEntity(String),
    InternalServerError(String),
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        Self::InternalServerError(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorBody { message });

        if status == StatusCode::UNAUTHORIZED {
            (status, [(header::WWW_AUTHENTICATE, "Bearer")], body).into_response()
        } else {
            (status, body).into_response()
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::UsernameTaken(_) => ApiError::BadRequest(err.to_string()),
            AuthError::InvalidCredentials | AuthError::Unauthenticated => {
                ApiError::Unauthorized(err.to_string())
            }
            AuthError::InvalidUsername(_) => ApiError::UnprocessableEntity(err.to_string()),
            AuthError::Database(_) | AuthError::Unknown(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<ReminderError> for ApiError {
    fn from(err: ReminderError) -> Self {
        match err {
            ReminderError::NotFound => ApiError::NotFound(err.to_string()),
            ReminderError::Database(_) | ReminderError::Unknown(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<PlacesError> for ApiError {
    fn from(err: PlacesError) -> Self {
        // Every provider failure collapses to one generic upstream failure.
        ApiError::InternalServerError(err.to_string())
    }
}

/// Error response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

/// Issued-token response shape shared by registration and login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenResponseData {
    pub access_token: String,
    pub token_type: String,
}

impl TokenResponseData {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
        }
    }
}

/// Reminder response shape shared by create and list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReminderData {
    pub id: String,
    pub title: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Reminder> for ReminderData {
    fn from(reminder: &Reminder) -> Self {
        Self {
            id: reminder.id.to_string(),
            title: reminder.title.clone(),
            category: reminder.category.clone(),
            created_at: reminder.created_at,
        }
    }
}

/// Place response shape for the nearby search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaceData {
    pub place_id: String,
    pub name: String,
    pub vicinity: String,
    pub geometry: serde_json::Value,
    pub types: Vec<String>,
}

impl From<Place> for PlaceData {
    fn from(place: Place) -> Self {
        Self {
            place_id: place.place_id,
            name: place.name,
            vicinity: place.vicinity,
            geometry: place.geometry,
            types: place.types,
        }
    }
}
