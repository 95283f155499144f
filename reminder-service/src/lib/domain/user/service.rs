use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::user::errors::AuthError;
use crate::domain::user::models::Credentials;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::AccountServicePort;
use crate::domain::user::ports::UserRepository;

/// Concrete implementation of AccountServicePort.
///
/// Coordinates the credential store with the auth crate's password hashing
/// and token issuance. Generic over the repository for testability.
pub struct AccountService<R>
where
    R: UserRepository,
{
    repository: Arc<R>,
    authenticator: Arc<auth::Authenticator>,
}

impl<R> AccountService<R>
where
    R: UserRepository,
{
    /// Create a new account service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Identity persistence implementation
    /// * `authenticator` - Password hashing and token issuance
    pub fn new(repository: Arc<R>, authenticator: Arc<auth::Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }

    fn issue_token(&self, subject: &str) -> Result<String, AuthError> {
        self.authenticator
            .issue_token(subject)
            .map(|result| result.access_token)
            .map_err(|e| AuthError::Unknown(format!("Token generation failed: {}", e)))
    }
}

#[async_trait]
impl<R> AccountServicePort for AccountService<R>
where
    R: UserRepository,
{
    async fn register(&self, command: RegisterUserCommand) -> Result<String, AuthError> {
        let password_hash = self
            .authenticator
            .hash_password(&command.password)
            .map_err(|e| AuthError::Unknown(format!("Password hashing failed: {}", e)))?;

        let user = User {
            id: UserId::new(),
            username: command.username,
            password_hash,
            created_at: Utc::now(),
        };

        let created = self.repository.create(user).await?;

        self.issue_token(created.username.as_str())
    }

    async fn login(&self, credentials: Credentials) -> Result<String, AuthError> {
        // Unknown username and wrong password must be indistinguishable to
        // the caller.
        let user = self
            .repository
            .find_by_username(&credentials.username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let result = self
            .authenticator
            .authenticate(
                &credentials.password,
                &user.password_hash,
                user.username.as_str(),
            )
            .map_err(|e| match e {
                auth::AuthenticationError::InvalidCredentials => AuthError::InvalidCredentials,
                auth::AuthenticationError::Password(err) => {
                    AuthError::Unknown(format!("Password verification failed: {}", err))
                }
                auth::AuthenticationError::Jwt(err) => {
                    AuthError::Unknown(format!("Token generation failed: {}", err))
                }
            })?;

        Ok(result.access_token)
    }

    async fn resolve(&self, token: &str) -> Result<User, AuthError> {
        let claims = self.authenticator.validate_token(token).map_err(|e| {
            tracing::warn!("Token validation failed: {}", e);
            AuthError::Unauthenticated
        })?;

        // The identity may have been removed after the token was issued.
        self.repository
            .find_by_username(&claims.sub)
            .await?
            .ok_or(AuthError::Unauthenticated)
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;
    use crate::domain::user::models::Username;

    const SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn create(&self, user: User) -> Result<User, AuthError>;
            async fn find_by_username(&self, username: &str) -> Result<Option<User>, AuthError>;
        }
    }

    fn service(repository: MockTestUserRepository) -> AccountService<MockTestUserRepository> {
        AccountService::new(
            Arc::new(repository),
            Arc::new(auth::Authenticator::new(SECRET)),
        )
    }

    fn stored_user(username: &str, password: &str) -> User {
        let authenticator = auth::Authenticator::new(SECRET);
        User {
            id: UserId::new(),
            username: Username::new(username.to_string()).unwrap(),
            password_hash: authenticator.hash_password(password).unwrap(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_register_success_issues_resolvable_token() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_create()
            .withf(|user| {
                user.username.as_str() == "alice" && user.password_hash.starts_with("$argon2")
            })
            .times(1)
            .returning(|user| Ok(user));

        let service = service(repository);

        let command = RegisterUserCommand::new(
            Username::new("alice".to_string()).unwrap(),
            "pw123".to_string(),
        );
        let token = service.register(command).await.expect("register failed");

        let authenticator = auth::Authenticator::new(SECRET);
        let claims = authenticator.validate_token(&token).expect("invalid token");
        assert_eq!(claims.sub, "alice");
    }

    #[tokio::test]
    async fn test_register_duplicate_username() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_create()
            .times(1)
            .returning(|user| Err(AuthError::UsernameTaken(user.username.to_string())));

        let service = service(repository);

        let command = RegisterUserCommand::new(
            Username::new("alice".to_string()).unwrap(),
            "pw123".to_string(),
        );
        let result = service.register(command).await;

        assert!(matches!(result, Err(AuthError::UsernameTaken(_))));
    }

    #[tokio::test]
    async fn test_login_success() {
        let mut repository = MockTestUserRepository::new();
        let user = stored_user("alice", "pw123");

        repository
            .expect_find_by_username()
            .withf(|username| username == "alice")
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let service = service(repository);

        let token = service
            .login(Credentials {
                username: "alice".to_string(),
                password: "pw123".to_string(),
            })
            .await
            .expect("login failed");

        let authenticator = auth::Authenticator::new(SECRET);
        let claims = authenticator.validate_token(&token).expect("invalid token");
        assert_eq!(claims.sub, "alice");
    }

    #[tokio::test]
    async fn test_login_failures_are_indistinguishable() {
        let mut repository = MockTestUserRepository::new();
        let user = stored_user("alice", "pw123");

        repository
            .expect_find_by_username()
            .withf(|username| username == "alice")
            .returning(move |_| Ok(Some(user.clone())));
        repository
            .expect_find_by_username()
            .withf(|username| username == "nobody")
            .returning(|_| Ok(None));

        let service = service(repository);

        let wrong_password = service
            .login(Credentials {
                username: "alice".to_string(),
                password: "wrong".to_string(),
            })
            .await
            .unwrap_err();
        let unknown_user = service
            .login(Credentials {
                username: "nobody".to_string(),
                password: "pw123".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(wrong_password, AuthError::InvalidCredentials));
        assert!(matches!(unknown_user, AuthError::InvalidCredentials));
        assert_eq!(wrong_password.to_string(), unknown_user.to_string());
    }

    #[tokio::test]
    async fn test_resolve_success() {
        let mut repository = MockTestUserRepository::new();
        let user = stored_user("alice", "pw123");
        let user_id = user.id;

        repository
            .expect_find_by_username()
            .withf(|username| username == "alice")
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let service = service(repository);

        let authenticator = auth::Authenticator::new(SECRET);
        let token = authenticator.issue_token("alice").unwrap().access_token;

        let resolved = service.resolve(&token).await.expect("resolve failed");
        assert_eq!(resolved.id, user_id);
        assert_eq!(resolved.username.as_str(), "alice");
    }

    #[tokio::test]
    async fn test_resolve_garbage_token() {
        let mut repository = MockTestUserRepository::new();
        repository.expect_find_by_username().times(0);

        let service = service(repository);

        let result = service.resolve("not-even-a-token").await;
        assert!(matches!(result, Err(AuthError::Unauthenticated)));
    }

    #[tokio::test]
    async fn test_resolve_expired_token() {
        let mut repository = MockTestUserRepository::new();
        repository.expect_find_by_username().times(0);

        let service = service(repository);

        let now = Utc::now().timestamp();
        let claims = auth::AccessClaims {
            sub: "alice".to_string(),
            exp: now - 1,
            iat: now - 1801,
        };
        let token = auth::JwtHandler::new(SECRET).encode(&claims).unwrap();

        let result = service.resolve(&token).await;
        assert!(matches!(result, Err(AuthError::Unauthenticated)));
    }

    #[tokio::test]
    async fn test_resolve_unknown_subject() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_username()
            .withf(|username| username == "ghost")
            .times(1)
            .returning(|_| Ok(None));

        let service = service(repository);

        let authenticator = auth::Authenticator::new(SECRET);
        let token = authenticator.issue_token("ghost").unwrap().access_token;

        let result = service.resolve(&token).await;
        assert!(matches!(result, Err(AuthError::Unauthenticated)));
    }
}
