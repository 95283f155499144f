use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::reminder::errors::ReminderError;
use crate::domain::reminder::models::Reminder;
use crate::domain::reminder::models::ReminderId;
use crate::domain::reminder::ports::ReminderRepository;
use crate::domain::user::models::UserId;

pub struct PostgresReminderRepository {
    pool: PgPool,
}

impl PostgresReminderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_reminder(row: &sqlx::postgres::PgRow) -> Reminder {
        Reminder {
            id: ReminderId(row.get("id")),
            owner_id: UserId(row.get("user_id")),
            title: row.get("title"),
            category: row.get("category"),
            created_at: row.get("created_at"),
        }
    }
}

#[async_trait]
impl ReminderRepository for PostgresReminderRepository {
    async fn create(&self, reminder: Reminder) -> Result<Reminder, ReminderError> {
        sqlx::query(
            r#"
            INSERT INTO reminders (id, user_id, title, category, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(reminder.id.0)
        .bind(reminder.owner_id.0)
        .bind(&reminder.title)
        .bind(&reminder.category)
        .bind(reminder.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| ReminderError::Database(e.to_string()))?;

        Ok(reminder)
    }

    async fn list_by_owner(&self, owner_id: UserId) -> Result<Vec<Reminder>, ReminderError> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, title, category, created_at
            FROM reminders
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(owner_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ReminderError::Database(e.to_string()))?;

        Ok(rows.iter().map(Self::row_to_reminder).collect())
    }

    async fn delete_owned(&self, id: ReminderId, owner_id: UserId) -> Result<(), ReminderError> {
        // Ownership is part of the predicate: another user's reminder is
        // indistinguishable from a nonexistent one.
        let result = sqlx::query(
            r#"
            DELETE FROM reminders
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id.0)
        .bind(owner_id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| ReminderError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ReminderError::NotFound);
        }

        Ok(())
    }
}
