//! Argon2id password hashing with legacy digest verification.

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{
        PasswordHash, PasswordHasher as ArgonHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use youthhub_core::config::AuthConfig;
use youthhub_core::error::AppError;
use youthhub_core::result::AppResult;

/// Prefix mixed into legacy SHA-256 digests.
const LEGACY_PREFIX: &str = "youth-affairs::";

/// Hashes new passwords with Argon2id and verifies both Argon2id PHC
/// strings and legacy hex digests.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    params: Params,
}

impl PasswordHasher {
    /// Creates a hasher using the cost parameters from auth configuration.
    pub fn new(config: &AuthConfig) -> AppResult<Self> {
        Self::with_cost(config.argon2_memory_kib, config.argon2_iterations)
    }

    /// Creates a hasher with explicit memory (KiB) and iteration costs.
    pub fn with_cost(memory_kib: u32, iterations: u32) -> AppResult<Self> {
        let params = Params::new(memory_kib, iterations, 1, None)
            .map_err(|e| AppError::configuration(format!("Invalid Argon2 parameters: {e}")))?;
        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    /// Hashes a plaintext password using Argon2id with a random salt.
    pub fn hash_password(&self, password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;

        Ok(hash.to_string())
    }

    /// Verifies a plaintext password against a stored digest.
    ///
    /// Returns `Ok(true)` if the password matches, `Ok(false)` if not.
    pub fn verify_password(&self, password: &str, stored: &str) -> AppResult<bool> {
        if is_legacy_digest(stored) {
            let computed = legacy_digest(password);
            return Ok(computed.as_bytes().ct_eq(stored.as_bytes()).into());
        }

        let parsed = PasswordHash::new(stored)
            .map_err(|e| AppError::internal(format!("Invalid password hash format: {e}")))?;

        match self.argon2().verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AppError::internal(format!(
                "Password verification failed: {e}"
            ))),
        }
    }

    /// Performs one Argon2id derivation at the configured cost and discards
    /// it. Used when there is no stored digest to check against.
    pub fn dummy_verify(&self, password: &str) {
        let salt = SaltString::generate(&mut OsRng);
        let _ = self.argon2().hash_password(password.as_bytes(), &salt);
    }

    /// Whether a stored digest should be replaced after a successful login.
    ///
    /// True for legacy digests and for Argon2 hashes made with other costs.
    pub fn needs_rehash(&self, stored: &str) -> bool {
        if is_legacy_digest(stored) {
            return true;
        }
        let Ok(parsed) = PasswordHash::new(stored) else {
            return true;
        };
        if parsed.algorithm != Algorithm::Argon2id.ident() {
            return true;
        }
        match Params::try_from(&parsed) {
            Ok(p) => p.m_cost() != self.params.m_cost() || p.t_cost() != self.params.t_cost(),
            Err(_) => true,
        }
    }
}

/// Legacy digest: lowercase hex SHA-256 of the prefixed password.
pub fn legacy_digest(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(LEGACY_PREFIX.as_bytes());
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

/// Whether `stored` has the shape of a legacy digest.
pub fn is_legacy_digest(stored: &str) -> bool {
    stored.len() == 64
        && stored
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
}
