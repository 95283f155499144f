use thiserror::Error;

/// Error type for password hashing.
///
/// Verification is infallible: a malformed digest is a mismatch, not an
/// error.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
}
