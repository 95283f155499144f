use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::user::errors::AuthError;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;

pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_user(row: &sqlx::postgres::PgRow) -> Result<User, AuthError> {
        Ok(User {
            id: UserId(row.get("id")),
            username: Username::new(row.get("username"))?,
            password_hash: row.get("password_hash"),
            created_at: row.get("created_at"),
        })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: User) -> Result<User, AuthError> {
        sqlx::query(
            r#"
            INSERT INTO users (id, username, password_hash, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(user.id.0)
        .bind(user.username.as_str())
        .bind(&user.password_hash)
        .bind(user.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            // Concurrent duplicate registrations are serialized here: the
            // UNIQUE constraint leaves exactly one winner.
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation()
                    && db_err.constraint() == Some("users_username_key")
                {
                    return AuthError::UsernameTaken(user.username.as_str().to_string());
                }
            }
            AuthError::Database(e.to_string())
        })?;

        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AuthError> {
        let row = sqlx::query(
            r#"
            SELECT id, username, password_hash, created_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AuthError::Database(e.to_string()))?;

        match row {
            Some(r) => Ok(Some(Self::row_to_user(&r)?)),
            None => Ok(None),
        }
    }
}
