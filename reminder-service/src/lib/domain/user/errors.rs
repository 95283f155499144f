use thiserror::Error;

/// Error for Username validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UsernameError {
    #[error("Username must not be empty")]
    Empty,

    #[error("Username too long: maximum {max} bytes, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error for authentication and identity operations.
///
/// `InvalidCredentials` covers both unknown-username and wrong-password
/// logins; `Unauthenticated` covers every token-resolution failure. Neither
/// exposes which underlying check failed.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("Invalid username: {0}")]
    InvalidUsername(#[from] UsernameError),

    #[error("Username already registered: {0}")]
    UsernameTaken(String),

    #[error("Incorrect username or password")]
    InvalidCredentials,

    #[error("Could not validate credentials")]
    Unauthenticated,

    // Infrastructure errors
    #[error("Database error: {0}")]
    Database(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for AuthError {
    fn from(err: anyhow::Error) -> Self {
        AuthError::Unknown(err.to_string())
    }
}
