//! `init-db`: apply the schema and seed rows.

use youthhub_auth::password::PasswordHasher;
use youthhub_core::config::AppConfig;
use youthhub_core::error::AppError;

use crate::output;

/// Execute the init-db command
pub async fn execute(config: &AppConfig) -> Result<(), AppError> {
    let hasher = PasswordHasher::new(&config.auth)?;
    let (pool, report) = super::open_database(config, &hasher).await?;
    pool.close().await;

    output::print_success("Database initialized");
    output::print_kv("Database", &config.database.url);
    output::print_kv("Seed branches added", &report.branches_seeded.to_string());
    output::print_kv(
        "Superadmin created",
        if report.superadmin_created {
            config.auth.bootstrap_username.as_str()
        } else {
            "no (already present)"
        },
    );
    Ok(())
}
