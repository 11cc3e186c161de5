//! Admin account management commands.

use std::sync::Arc;

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use youthhub_auth::password::{PasswordHasher, PasswordValidator};
use youthhub_core::config::AppConfig;
use youthhub_core::error::AppError;
use youthhub_core::types::BranchId;
use youthhub_database::repositories::{BranchRepository, UserRepository};
use youthhub_entity::user::AdminListing;
use youthhub_service::{AdminUserService, CreateAdminRequest};

use crate::output::{self, OutputFormat};

/// Arguments for admin commands
#[derive(Debug, Args)]
pub struct AdminArgs {
    /// Admin subcommand
    #[command(subcommand)]
    pub command: AdminCommand,
}

/// Admin subcommands
#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// Create a branch admin
    Create {
        /// Username
        #[arg(short, long)]
        username: Option<String>,
        /// Name shown in the dashboard
        #[arg(short, long)]
        display_name: Option<String>,
        /// Branch the admin manages
        #[arg(short, long)]
        branch_id: Option<i64>,
        /// Password (will prompt if not provided)
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Reset the password of any account
    ResetPassword {
        /// Username of the account
        #[arg(short, long)]
        username: String,
        /// New password (will prompt if not provided)
        #[arg(short, long)]
        password: Option<String>,
    },
    /// List all accounts
    List,
}

/// Account display row for table output
#[derive(Debug, Serialize, Tabled)]
struct AccountRow {
    id: i64,
    username: String,
    display_name: String,
    role: String,
    branch: String,
    created_at: String,
}

impl From<AdminListing> for AccountRow {
    fn from(account: AdminListing) -> Self {
        Self {
            id: account.id.get(),
            username: account.username,
            display_name: account.display_name,
            role: account.role.to_string(),
            branch: account.branch_name.unwrap_or_else(|| "-".to_string()),
            created_at: account.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

fn input_error(e: dialoguer::Error) -> AppError {
    AppError::internal(format!("Input error: {e}"))
}

fn prompt_text(value: &Option<String>, prompt: &str) -> Result<String, AppError> {
    match value {
        Some(v) => Ok(v.clone()),
        None => dialoguer::Input::new()
            .with_prompt(prompt)
            .interact_text()
            .map_err(input_error),
    }
}

fn prompt_password(value: &Option<String>, prompt: &str) -> Result<String, AppError> {
    match value {
        Some(p) => Ok(p.clone()),
        None => dialoguer::Password::new()
            .with_prompt(prompt)
            .with_confirmation("Confirm password", "Passwords do not match")
            .interact()
            .map_err(input_error),
    }
}

/// Execute admin commands
pub async fn execute(
    args: &AdminArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let hasher = Arc::new(PasswordHasher::new(&config.auth)?);
    let (pool, _) = super::open_database(config, &hasher).await?;
    let user_repo = Arc::new(UserRepository::new(pool.clone()));
    let service = AdminUserService::new(
        Arc::clone(&user_repo),
        Arc::new(BranchRepository::new(pool)),
        hasher,
        Arc::new(PasswordValidator::new(&config.auth)),
    );

    match &args.command {
        AdminCommand::Create {
            username,
            display_name,
            branch_id,
            password,
        } => {
            let username = prompt_text(username, "Admin username")?;
            let display_name = prompt_text(display_name, "Display name")?;
            let branch_id = match branch_id {
                Some(id) => *id,
                None => dialoguer::Input::<i64>::new()
                    .with_prompt("Branch id")
                    .interact_text()
                    .map_err(input_error)?,
            };
            let password = prompt_password(password, "Admin password")?;

            let user = service
                .create_admin(CreateAdminRequest {
                    username,
                    display_name,
                    password,
                    branch_id: BranchId(branch_id),
                })
                .await?;

            output::print_success(&format!(
                "Admin '{}' created (id: {}, branch: {})",
                user.username, user.id, branch_id
            ));
        }
        AdminCommand::ResetPassword { username, password } => {
            let password = prompt_password(password, "New password")?;
            service
                .reset_password_by_username(username, &password)
                .await?;
            output::print_success(&format!("Password reset for '{username}'"));
        }
        AdminCommand::List => {
            let rows: Vec<AccountRow> = service
                .list_accounts()
                .await?
                .into_iter()
                .map(AccountRow::from)
                .collect();
            output::print_list(&rows, format)?;
        }
    }

    Ok(())
}
