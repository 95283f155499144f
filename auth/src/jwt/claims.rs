use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Validity window of issued access tokens, counted from issuance.
pub const ACCESS_TOKEN_VALIDITY_MINUTES: i64 = 30;

/// Claim set sealed inside an access token.
///
/// A self-contained identity assertion: subject plus issuance and expiry
/// timestamps. Tokens are never persisted server-side; possession of a
/// validly signed, unexpired token is the sole authorization proof.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessClaims {
    /// Subject (username the token was issued to)
    pub sub: String,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issued at (Unix timestamp)
    pub iat: i64,
}

impl AccessClaims {
    /// Create claims for a subject with the standard validity window.
    pub fn for_subject(subject: impl Into<String>) -> Self {
        let now = Utc::now();
        let expiration = now + Duration::minutes(ACCESS_TOKEN_VALIDITY_MINUTES);

        Self {
            sub: subject.into(),
            exp: expiration.timestamp(),
            iat: now.timestamp(),
        }
    }

    /// Check whether the claims are expired at the given timestamp.
    ///
    /// A token is invalid the instant its expiry is reached: `exp` at or
    /// before the current time counts as expired.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp <= current_timestamp
    }
}
