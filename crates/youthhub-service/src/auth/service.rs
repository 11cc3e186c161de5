//! Credential verification and session token issuance.

use std::sync::Arc;

use tracing::{info, warn};

use youthhub_auth::jwt::{Principal, TokenCodec};
use youthhub_auth::password::PasswordHasher;
use youthhub_core::error::AppError;
use youthhub_core::result::AppResult;
use youthhub_database::repositories::UserRepository;
use youthhub_entity::user::User;

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// Signed session token.
    pub token: String,
    /// The authenticated account.
    pub user: User,
}

/// Verifies credentials and issues session tokens.
#[derive(Debug, Clone)]
pub struct AuthService {
    user_repo: Arc<UserRepository>,
    hasher: Arc<PasswordHasher>,
    codec: Arc<TokenCodec>,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        codec: Arc<TokenCodec>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            codec,
        }
    }

    /// Checks a username and password and issues a token.
    ///
    /// Unknown usernames and wrong passwords produce the same error. A
    /// digest with outdated parameters is replaced after a successful check.
    pub async fn login(&self, username: &str, password: &str) -> AppResult<LoginOutcome> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return Err(AppError::validation("Username and password are required"));
        }

        let Some(user) = self.user_repo.find_by_username(username).await? else {
            self.hasher.dummy_verify(password);
            warn!(username, "Login rejected: unknown username");
            return Err(AppError::unauthorized("Invalid credentials"));
        };

        if !self.hasher.verify_password(password, &user.password_hash)? {
            warn!(username, user_id = %user.id, "Login rejected: wrong password");
            return Err(AppError::unauthorized("Invalid credentials"));
        }

        if self.hasher.needs_rehash(&user.password_hash) {
            self.upgrade_digest(&user, password).await;
        }

        let token = self.codec.issue(&Principal::from(&user))?;
        info!(user_id = %user.id, username, role = %user.role, "User logged in");

        Ok(LoginOutcome { token, user })
    }

    async fn upgrade_digest(&self, user: &User, password: &str) {
        let result = match self.hasher.hash_password(password) {
            Ok(hash) => self.user_repo.update_password(user.id, &hash).await,
            Err(e) => Err(e),
        };
        match result {
            Ok(_) => info!(user_id = %user.id, "Password digest upgraded"),
            Err(e) => warn!(user_id = %user.id, error = %e, "Failed to upgrade password digest"),
        }
    }
}
