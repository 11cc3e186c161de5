//! Password policy enforcement for new admin passwords.

use youthhub_core::config::AuthConfig;
use youthhub_core::error::AppError;

/// Validates password strength for newly set passwords.
///
/// Login and the bootstrap account are not subject to the policy.
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    /// Minimum password length in characters.
    min_length: usize,
}

impl PasswordValidator {
    /// Creates a new validator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length,
        }
    }

    /// Validates a password against the length floor and a zxcvbn score.
    pub fn validate(&self, password: &str) -> Result<(), AppError> {
        if password.trim().is_empty() {
            return Err(AppError::validation("Password is required"));
        }

        if password.chars().count() < self.min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters long",
                self.min_length
            )));
        }

        let estimate = zxcvbn::zxcvbn(password, &[]);
        if estimate.score() < zxcvbn::Score::Three {
            return Err(AppError::validation(
                "Password is too weak. Please use a longer or less predictable password.",
            ));
        }

        Ok(())
    }
}
