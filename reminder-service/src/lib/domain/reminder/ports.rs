use async_trait::async_trait;

use crate::domain::reminder::errors::ReminderError;
use crate::domain::reminder::models::CreateReminderCommand;
use crate::domain::reminder::models::Reminder;
use crate::domain::reminder::models::ReminderId;
use crate::domain::user::models::UserId;

/// Port for reminder operations, always scoped to a resolved identity.
#[async_trait]
pub trait ReminderServicePort: Send + Sync + 'static {
    /// Create a new reminder owned by the given user.
    ///
    /// # Errors
    /// * `Database` - store operation failed
    async fn create_reminder(
        &self,
        command: CreateReminderCommand,
        owner_id: UserId,
    ) -> Result<Reminder, ReminderError>;

    /// List all reminders owned by the given user.
    ///
    /// # Errors
    /// * `Database` - store operation failed
    async fn list_reminders(&self, owner_id: UserId) -> Result<Vec<Reminder>, ReminderError>;

    /// Delete a reminder if and only if it is owned by the given user.
    ///
    /// # Errors
    /// * `NotFound` - no reminder with this id is owned by the user
    /// * `Database` - store operation failed
    async fn delete_reminder(&self, id: ReminderId, owner_id: UserId)
        -> Result<(), ReminderError>;
}

/// Persistence operations for reminders.
#[async_trait]
pub trait ReminderRepository: Send + Sync + 'static {
    /// Persist a new reminder.
    ///
    /// # Errors
    /// * `Database` - store operation failed
    async fn create(&self, reminder: Reminder) -> Result<Reminder, ReminderError>;

    /// Retrieve all reminders owned by a user.
    ///
    /// # Errors
    /// * `Database` - store operation failed
    async fn list_by_owner(&self, owner_id: UserId) -> Result<Vec<Reminder>, ReminderError>;

    /// Remove a reminder matching both id and owner.
    ///
    /// # Errors
    /// * `NotFound` - id does not exist or belongs to a different owner
    /// * `Database` - store operation failed
    async fn delete_owned(&self, id: ReminderId, owner_id: UserId) -> Result<(), ReminderError>;
}
