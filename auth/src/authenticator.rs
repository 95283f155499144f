use crate::jwt::AccessClaims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and token
/// issuance.
///
/// Holds the process-wide signing secret (via [`JwtHandler`]) and the
/// password work-factor configuration, both immutable after construction.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
}

/// Result of successful authentication.
pub struct AuthenticationResult {
    /// Signed access token
    pub access_token: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Token error: {0}")]
    Jwt(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `jwt_secret` - Secret key for token signing
    pub fn new(jwt_secret: &[u8]) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            jwt_handler: JwtHandler::new(jwt_secret),
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `Password` - hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify a plaintext password against a stored digest.
    pub fn verify_password(&self, password: &str, stored_hash: &str) -> bool {
        self.password_hasher.verify(password, stored_hash)
    }

    /// Issue a signed access token for a subject.
    ///
    /// The token carries the subject and the fixed validity window counted
    /// from now.
    ///
    /// # Errors
    /// * `JwtError` - token generation failed
    pub fn issue_token(&self, subject: &str) -> Result<AuthenticationResult, JwtError> {
        let claims = AccessClaims::for_subject(subject);
        let access_token = self.jwt_handler.encode(&claims)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Verify credentials and issue an access token.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password digest
    /// * `subject` - Token subject on success
    ///
    /// # Errors
    /// * `InvalidCredentials` - password does not match the stored digest
    /// * `Jwt` - token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        subject: &str,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        if !self.password_hasher.verify(password, stored_hash) {
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(self.issue_token(subject)?)
    }

    /// Validate and decode an access token.
    ///
    /// # Errors
    /// * `JwtError` - expired, tampered, or malformed token
    pub fn validate_token(&self, token: &str) -> Result<AccessClaims, JwtError> {
        self.jwt_handler.decode(token)
    }
}
