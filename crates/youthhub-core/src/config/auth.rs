//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication, token, and bootstrap-account configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for token signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Session token lifetime in seconds.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_seconds: i64,
    /// Minimum length for newly set passwords.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
    /// Argon2id memory cost in KiB.
    #[serde(default = "default_argon2_memory")]
    pub argon2_memory_kib: u32,
    /// Argon2id iteration count.
    #[serde(default = "default_argon2_iterations")]
    pub argon2_iterations: u32,
    /// Username of the superadmin created on first bootstrap.
    #[serde(default = "default_bootstrap_username")]
    pub bootstrap_username: String,
    /// Initial password of the bootstrap superadmin.
    #[serde(default = "default_bootstrap_password")]
    pub bootstrap_password: String,
    /// Display name of the bootstrap superadmin.
    #[serde(default = "default_bootstrap_display_name")]
    pub bootstrap_display_name: String,
}

impl AuthConfig {
    /// Whether the bootstrap password is still the shipped default.
    pub fn uses_default_bootstrap_password(&self) -> bool {
        self.bootstrap_password == default_bootstrap_password()
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            token_ttl_seconds: default_token_ttl(),
            password_min_length: default_password_min(),
            argon2_memory_kib: default_argon2_memory(),
            argon2_iterations: default_argon2_iterations(),
            bootstrap_username: default_bootstrap_username(),
            bootstrap_password: default_bootstrap_password(),
            bootstrap_display_name: default_bootstrap_display_name(),
        }
    }
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_token_ttl() -> i64 {
    28_800
}

fn default_password_min() -> usize {
    8
}

fn default_argon2_memory() -> u32 {
    19_456
}

fn default_argon2_iterations() -> u32 {
    2
}

fn default_bootstrap_username() -> String {
    "superadmin".to_string()
}

fn default_bootstrap_password() -> String {
    "admin123".to_string()
}

fn default_bootstrap_display_name() -> String {
    "مدير عام".to_string()
}
