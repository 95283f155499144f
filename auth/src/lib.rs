//! Authentication utilities library
//!
//! Provides the credential primitives for the reminder backend:
//! - Password hashing (Argon2id, random salt, tunable work factor)
//! - Signed access tokens with a fixed validity window (HS256)
//! - Authentication coordination
//!
//! Everything here is pure computation: no I/O, no store access. The service
//! crate owns identity persistence and adapts these primitives.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let digest = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &digest));
//! assert!(!hasher.verify("not_my_password", &digest));
//! ```
//!
//! ## Access Tokens
//! ```
//! use auth::{AccessClaims, JwtHandler};
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!");
//! let claims = AccessClaims::for_subject("alice");
//! let token = handler.encode(&claims).unwrap();
//! let decoded = handler.decode(&token).unwrap();
//! assert_eq!(decoded.sub, "alice");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::Authenticator;
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//!
//! // Register: hash password
//! let digest = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue token
//! let result = auth.authenticate("password123", &digest, "alice").unwrap();
//!
//! // Validate token
//! let claims = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(claims.sub, "alice");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::AccessClaims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::ACCESS_TOKEN_VALIDITY_MINUTES;
pub use password::PasswordError;
pub use password::PasswordHasher;
