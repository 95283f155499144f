use thiserror::Error;

/// Error for ReminderId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReminderIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for reminder operations.
///
/// `NotFound` covers both a nonexistent reminder and one owned by another
/// user; callers cannot tell the two apart.
#[derive(Debug, Clone, Error)]
pub enum ReminderError {
    #[error("Reminder not found")]
    NotFound,

    // Infrastructure errors
    #[error("Database error: {0}")]
    Database(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for ReminderError {
    fn from(err: anyhow::Error) -> Self {
        ReminderError::Unknown(err.to_string())
    }
}
