//! Password hashing capability.
//!
//! The domain only depends on [`PasswordHasher`]; [`Argon2Hasher`] is the
//! implementation wired in by the services.

use argon2::{
    password_hash::{
        rand_core::OsRng, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
    },
    Argon2,
};

use crate::error::{DomainError, DomainResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// One-way, salted transform from a plaintext secret to a storable hash.
///
/// Two calls with the same input may return different strings; both must
/// verify against the input under the same hashing family.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait PasswordHasher: Send + Sync {
    /// Hash `raw` for storage.
    fn encode(&self, raw: &str) -> DomainResult<String>;
}

/// Argon2id hasher producing PHC-format strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2Hasher;

impl Argon2Hasher {
    pub fn new() -> Self {
        Self
    }

    /// Check `raw` against a stored PHC hash. Malformed hashes never verify.
    pub fn verify(&self, raw: &str, hash: &str) -> bool {
        match PasswordHash::new(hash) {
            Ok(parsed) => Self::argon2()
                .verify_password(raw.as_bytes(), &parsed)
                .is_ok(),
            Err(_) => false,
        }
    }

    /// Get Argon2 instance with default config.
    #[inline]
    fn argon2() -> Argon2<'static> {
        Argon2::default()
    }
}

impl PasswordHasher for Argon2Hasher {
    fn encode(&self, raw: &str) -> DomainResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Self::argon2()
            .hash_password(raw.as_bytes(), &salt)
            .map_err(|e| DomainError::internal(format!("Password hash failed: {}", e)))?;
        Ok(hash.to_string())
    }
}
