//! CLI command definitions and dispatch.

pub mod admin;
pub mod branch;
pub mod db;

use clap::{Parser, Subcommand};
use sqlx::SqlitePool;

use youthhub_auth::password::PasswordHasher;
use youthhub_core::config::AppConfig;
use youthhub_core::error::AppError;
use youthhub_database::bootstrap::BootstrapReport;
use youthhub_database::connection::DatabasePool;
use youthhub_service::database_bootstrap;

use crate::output::OutputFormat;

/// YouthHub operator tool
#[derive(Debug, Parser)]
#[command(name = "youthhub-cli", version, about, long_about = None)]
pub struct Cli {
    /// Configuration overlay to load (`config/<ENV>.toml`)
    #[arg(short = 'e', long, default_value = "development")]
    pub config_env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create tables and seed rows that are missing
    InitDb,
    /// Admin account management
    Admin(admin::AdminArgs),
    /// Branch listing
    Branch(branch::BranchArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let config = AppConfig::load(&self.config_env)?;
        match &self.command {
            Commands::InitDb => db::execute(&config).await,
            Commands::Admin(args) => admin::execute(args, &config, self.format).await,
            Commands::Branch(args) => branch::execute(args, &config, self.format).await,
        }
    }
}

/// Helper: open the database and make sure the schema exists.
pub async fn open_database(
    config: &AppConfig,
    hasher: &PasswordHasher,
) -> Result<(SqlitePool, BootstrapReport), AppError> {
    let db = DatabasePool::connect(&config.database).await?;
    let bootstrap = database_bootstrap(db.pool().clone(), &config.auth, hasher)?;
    let report = bootstrap.ensure_initialized().await?;
    Ok((db.into_pool(), report))
}
