use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Algorithm;
use argon2::Argon2;
use argon2::Params;
use argon2::Version;

use super::errors::PasswordError;

/// Password hashing implementation (Argon2id).
///
/// Every hash call draws a fresh random salt, so two hashes of the same
/// plaintext never match. The work factor is tunable at construction.
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl PasswordHasher {
    /// Default memory cost in KiB.
    const DEFAULT_MEMORY_KIB: u32 = 19 * 1024;

    /// Default number of passes over memory.
    const DEFAULT_ITERATIONS: u32 = 2;

    const PARALLELISM: u32 = 1;

    /// Create a hasher with the default work factor.
    pub fn new() -> Self {
        Self::with_work_factor(Self::DEFAULT_MEMORY_KIB, Self::DEFAULT_ITERATIONS)
    }

    /// Create a hasher with an explicit work factor.
    ///
    /// # Arguments
    /// * `memory_kib` - memory cost in KiB
    /// * `iterations` - number of passes over memory
    pub fn with_work_factor(memory_kib: u32, iterations: u32) -> Self {
        let params =
            Params::new(memory_kib, iterations, Self::PARALLELISM, None).unwrap_or_default();

        Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        }
    }

    /// Hash a plaintext password.
    ///
    /// # Returns
    /// PHC string format digest (algorithm, parameters, salt, and hash)
    ///
    /// # Errors
    /// * `HashingFailed` - hashing operation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a stored digest.
    ///
    /// Hashes the plaintext with the salt and parameters embedded in the
    /// digest and compares in constant time with respect to where a mismatch
    /// occurs. A malformed digest is a mismatch, never an error.
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        let Ok(parsed_hash) = PasswordHash::new(hash) else {
            return false;
        };

        self.argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}
