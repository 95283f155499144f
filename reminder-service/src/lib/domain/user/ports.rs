use async_trait::async_trait;

use crate::domain::user::errors::AuthError;
use crate::domain::user::models::Credentials;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;

/// Port for account operations: registration, login, and per-request
/// identity resolution.
#[async_trait]
pub trait AccountServicePort: Send + Sync + 'static {
    /// Register a new identity and issue an access token for it.
    ///
    /// # Returns
    /// Signed access token with subject = username
    ///
    /// # Errors
    /// * `UsernameTaken` - username is already registered
    /// * `Database` - store operation failed
    async fn register(&self, command: RegisterUserCommand) -> Result<String, AuthError>;

    /// Verify credentials and issue an access token.
    ///
    /// Unknown username and wrong password are reported identically.
    ///
    /// # Errors
    /// * `InvalidCredentials` - no such user, or password mismatch
    /// * `Database` - store operation failed
    async fn login(&self, credentials: Credentials) -> Result<String, AuthError>;

    /// Resolve a presented bearer token to a concrete identity.
    ///
    /// Performs exactly one token decode and at most one store lookup; no
    /// caching across requests. Every resolution failure (malformed,
    /// tampered, expired, or unresolvable subject) collapses to a single
    /// outcome.
    ///
    /// # Errors
    /// * `Unauthenticated` - token did not resolve to an identity
    /// * `Database` - store operation failed
    async fn resolve(&self, token: &str) -> Result<User, AuthError>;
}

/// Persistence operations for user identities.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new identity.
    ///
    /// Uniqueness is enforced by the storage layer, so concurrent
    /// registrations of the same username leave exactly one winner.
    ///
    /// # Errors
    /// * `UsernameTaken` - username is already registered
    /// * `Database` - store operation failed
    async fn create(&self, user: User) -> Result<User, AuthError>;

    /// Retrieve an identity by username.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `Database` - store operation failed
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AuthError>;
}
