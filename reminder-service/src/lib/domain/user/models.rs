use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::user::errors::UsernameError;

/// User identity aggregate.
///
/// Created on registration, never mutated. The password hash is the only
/// credential material ever stored; plaintext passwords exist only for the
/// duration of a hashing or verification call.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Generate a new random user ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Username value type
///
/// Case-sensitive, compared byte-for-byte; no normalization is applied.
/// Must be non-empty and at most 64 bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    const MAX_LENGTH: usize = 64;

    /// Create a new valid username.
    ///
    /// # Errors
    /// * `Empty` - username is empty
    /// * `TooLong` - username longer than 64 bytes
    pub fn new(username: String) -> Result<Self, UsernameError> {
        if username.is_empty() {
            return Err(UsernameError::Empty);
        }
        if username.len() > Self::MAX_LENGTH {
            return Err(UsernameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: username.len(),
            });
        }
        Ok(Self(username))
    }

    /// Get username as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to register a new identity.
#[derive(Debug)]
pub struct RegisterUserCommand {
    pub username: Username,
    pub password: String,
}

impl RegisterUserCommand {
    pub fn new(username: Username, password: String) -> Self {
        Self { username, password }
    }
}

/// Raw login credentials.
///
/// The username is deliberately unvalidated: a structurally invalid username
/// must fail exactly like an unknown one.
#[derive(Debug)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}
