//! User entity model.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use youthhub_core::types::{BranchId, UserId};

use super::role::UserRole;

/// A dashboard account.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,
    /// Unique login name.
    pub username: String,
    /// Human-readable display name.
    pub display_name: String,
    /// Password digest (Argon2id PHC string or legacy hex digest).
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Account role.
    pub role: UserRole,
    /// Branch this account administers; `None` for superadmins.
    pub branch_id: Option<BranchId>,
    /// When the account was created.
    pub created_at: NaiveDateTime,
    /// When the account was last updated.
    pub updated_at: NaiveDateTime,
}

/// Account row as shown in the superadmin account list.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AdminListing {
    /// Account identifier.
    pub id: UserId,
    /// Login name.
    pub username: String,
    /// Display name.
    pub display_name: String,
    /// Account role.
    pub role: UserRole,
    /// Assigned branch, if any.
    pub branch_id: Option<BranchId>,
    /// Name of the assigned branch, if any.
    pub branch_name: Option<String>,
    /// When the account was created.
    pub created_at: NaiveDateTime,
}

/// Data required to create a new account.
#[derive(Debug, Clone)]
pub struct CreateUser {
    /// Desired username (already trimmed).
    pub username: String,
    /// Display name.
    pub display_name: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Assigned role.
    pub role: UserRole,
    /// Assigned branch.
    pub branch_id: Option<BranchId>,
}
