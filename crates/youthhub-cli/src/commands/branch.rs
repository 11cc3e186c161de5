//! Branch listing.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use youthhub_auth::password::PasswordHasher;
use youthhub_core::config::AppConfig;
use youthhub_core::error::AppError;
use youthhub_database::repositories::BranchRepository;
use youthhub_entity::branch::BranchSummary;

use crate::output::{self, OutputFormat};

/// Arguments for branch commands
#[derive(Debug, Args)]
pub struct BranchArgs {
    #[command(subcommand)]
    pub command: BranchCommand,
}

/// Branch subcommands
#[derive(Debug, Subcommand)]
pub enum BranchCommand {
    /// List branches with their admin and event counts
    List,
}

/// Branch display row for table output
#[derive(Debug, Serialize, Tabled)]
struct BranchRow {
    id: i64,
    name: String,
    governorate: String,
    phone: String,
    admins: i64,
    events: i64,
}

impl From<BranchSummary> for BranchRow {
    fn from(summary: BranchSummary) -> Self {
        Self {
            id: summary.branch.id.get(),
            name: summary.branch.name,
            governorate: summary.branch.governorate,
            phone: summary.branch.phone,
            admins: summary.admins_count,
            events: summary.events_count,
        }
    }
}

/// Execute branch commands
pub async fn execute(
    args: &BranchArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let hasher = PasswordHasher::new(&config.auth)?;
    let (pool, _) = super::open_database(config, &hasher).await?;

    match args.command {
        BranchCommand::List => {
            let rows: Vec<BranchRow> = BranchRepository::new(pool)
                .find_all_with_counts()
                .await?
                .into_iter()
                .map(BranchRow::from)
                .collect();
            output::print_list(&rows, format)?;
        }
    }

    Ok(())
}
