use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::reminder::errors::ReminderIdError;
use crate::domain::user::models::UserId;

/// Reminder record owned by a single user.
///
/// Every read, write, and delete is scoped by `owner_id`; the owning user is
/// supplied by identity resolution, never by the client.
#[derive(Debug, Clone)]
pub struct Reminder {
    pub id: ReminderId,
    pub owner_id: UserId,
    pub title: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

/// Reminder unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReminderId(pub Uuid);

impl ReminderId {
    /// Generate a new random reminder ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a reminder ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - string is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, ReminderIdError> {
        Uuid::parse_str(s)
            .map(ReminderId)
            .map_err(|e| ReminderIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for ReminderId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ReminderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to create a new reminder.
#[derive(Debug)]
pub struct CreateReminderCommand {
    pub title: String,
    pub category: String,
}

impl CreateReminderCommand {
    pub fn new(title: String, category: String) -> Self {
        Self { title, category }
    }
}
