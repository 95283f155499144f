use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::AccessClaims;
use super::errors::JwtError;

/// Token codec for signed access tokens.
///
/// Seals an [`AccessClaims`] set into an HS256-signed token string and
/// verifies it back. Decoding is a pure function of the secret key and the
/// current time; it never consults a store.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl JwtHandler {
    /// Create a new handler with a secret key.
    ///
    /// The secret is process-wide configuration loaded once at startup;
    /// rotating it invalidates every previously issued token.
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Encode claims into a signed token string.
    ///
    /// # Errors
    /// * `EncodingFailed` - serialization or signing failed
    pub fn encode(&self, claims: &AccessClaims) -> Result<String, JwtError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Decode and validate a token.
    ///
    /// Signature and expiry are both checked. `exp` is required and gets no
    /// leeway, so a token is rejected the instant its expiry is reached. Any
    /// single-bit tamper to header, claims, or signature fails verification.
    ///
    /// # Errors
    /// * `Expired` - expiry timestamp is at or before the current time
    /// * `InvalidSignature` - signature mismatch or structurally malformed input
    pub fn decode(&self, token: &str) -> Result<AccessClaims, JwtError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        let token_data = decode::<AccessClaims>(token, &self.decoding_key, &validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::Expired,
                _ => JwtError::InvalidSignature,
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    const SECRET: &[u8] = b"my_secret_key_at_least_32_bytes_long!";

    #[test]
    fn test_encode_and_decode_round_trip() {
        let handler = JwtHandler::new(SECRET);

        let claims = AccessClaims::for_subject("alice");
        let token = handler.encode(&claims).expect("Failed to encode token");
        assert!(!token.is_empty());

        let decoded = handler.decode(&token).expect("Failed to decode token");
        assert_eq!(decoded, claims);
    }

    #[test]
    fn test_decode_malformed_token() {
        let handler = JwtHandler::new(SECRET);

        assert_eq!(
            handler.decode("invalid.token.here"),
            Err(JwtError::InvalidSignature)
        );
        assert_eq!(handler.decode(""), Err(JwtError::InvalidSignature));
    }

    #[test]
    fn test_decode_with_wrong_secret() {
        let handler1 = JwtHandler::new(b"secret1_at_least_32_bytes_long_key!");
        let handler2 = JwtHandler::new(b"secret2_at_least_32_bytes_long_key!");

        let token = handler1
            .encode(&AccessClaims::for_subject("alice"))
            .expect("Failed to encode token");

        assert_eq!(handler2.decode(&token), Err(JwtError::InvalidSignature));
    }

    #[test]
    fn test_decode_expired_token() {
        let handler = JwtHandler::new(SECRET);

        let now = Utc::now().timestamp();
        let claims = AccessClaims {
            sub: "alice".to_string(),
            exp: now - 60,
            iat: now - 1860,
        };

        let token = handler.encode(&claims).expect("Failed to encode token");
        assert_eq!(handler.decode(&token), Err(JwtError::Expired));
    }

    #[test]
    fn test_decode_tampered_signature() {
        let handler = JwtHandler::new(SECRET);

        let token = handler
            .encode(&AccessClaims::for_subject("alice"))
            .expect("Failed to encode token");

        // Flip the last signature byte
        let mut tampered = token.clone();
        let last = tampered.pop().unwrap();
        tampered.push(if last == 'A' { 'B' } else { 'A' });

        assert_eq!(handler.decode(&tampered), Err(JwtError::InvalidSignature));
    }

    #[test]
    fn test_decode_tampered_claims() {
        let handler = JwtHandler::new(SECRET);

        let token = handler
            .encode(&AccessClaims::for_subject("alice"))
            .expect("Failed to encode token");

        // Flip one byte inside the claims segment
        let mut parts: Vec<String> = token.split('.').map(String::from).collect();
        let first = parts[1].remove(0);
        parts[1].insert(0, if first == 'A' { 'B' } else { 'A' });
        let tampered = parts.join(".");

        assert_eq!(handler.decode(&tampered), Err(JwtError::InvalidSignature));
    }

    #[test]
    fn test_token_without_exp_is_rejected() {
        // A token signed with the right key but missing the exp claim must
        // not validate.
        use serde::Serialize;

        #[derive(Serialize)]
        struct BareClaims {
            sub: String,
        }

        let token = encode(
            &Header::new(Algorithm::HS256),
            &BareClaims {
                sub: "alice".to_string(),
            },
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap();

        let handler = JwtHandler::new(SECRET);
        assert_eq!(handler.decode(&token), Err(JwtError::InvalidSignature));
    }
}
