//! Startup wiring for the database bootstrap.

use sqlx::SqlitePool;
use tracing::warn;

use youthhub_auth::password::PasswordHasher;
use youthhub_core::config::AuthConfig;
use youthhub_core::result::AppResult;
use youthhub_database::bootstrap::{BootstrapAccount, DatabaseBootstrap};

/// Builds the bootstrap guard for the configured superadmin account.
///
/// The configured password is hashed here; it is only stored if no
/// superadmin exists yet.
pub fn database_bootstrap(
    pool: SqlitePool,
    auth: &AuthConfig,
    hasher: &PasswordHasher,
) -> AppResult<DatabaseBootstrap> {
    if auth.uses_default_bootstrap_password() {
        warn!(
            username = %auth.bootstrap_username,
            "Bootstrap superadmin uses the default password; set auth.bootstrap_password"
        );
    }

    let account = BootstrapAccount {
        username: auth.bootstrap_username.clone(),
        display_name: auth.bootstrap_display_name.clone(),
        password_hash: hasher.hash_password(&auth.bootstrap_password)?,
    };
    Ok(DatabaseBootstrap::new(pool, account))
}
