use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::reminder::errors::ReminderError;
use crate::domain::reminder::models::CreateReminderCommand;
use crate::domain::reminder::models::Reminder;
use crate::domain::reminder::models::ReminderId;
use crate::domain::reminder::ports::ReminderRepository;
use crate::domain::reminder::ports::ReminderServicePort;
use crate::domain::user::models::UserId;

/// Concrete implementation of ReminderServicePort.
///
/// Generic over the repository for testability.
pub struct ReminderService<R>
where
    R: ReminderRepository,
{
    repository: Arc<R>,
}

impl<R> ReminderService<R>
where
    R: ReminderRepository,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ReminderServicePort for ReminderService<R>
where
    R: ReminderRepository,
{
    async fn create_reminder(
        &self,
        command: CreateReminderCommand,
        owner_id: UserId,
    ) -> Result<Reminder, ReminderError> {
        let reminder = Reminder {
            id: ReminderId::new(),
            owner_id,
            title: command.title,
            category: command.category,
            created_at: Utc::now(),
        };

        self.repository.create(reminder).await
    }

    async fn list_reminders(&self, owner_id: UserId) -> Result<Vec<Reminder>, ReminderError> {
        self.repository.list_by_owner(owner_id).await
    }

    async fn delete_reminder(
        &self,
        id: ReminderId,
        owner_id: UserId,
    ) -> Result<(), ReminderError> {
        self.repository.delete_owned(id, owner_id).await
    }
}
