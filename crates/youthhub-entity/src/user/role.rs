//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles available to dashboard accounts.
///
/// A superadmin manages every branch and account; an admin is confined to
/// the single branch recorded on its account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Organization-wide administrator.
    SuperAdmin,
    /// Administrator of exactly one branch.
    Admin,
}

impl UserRole {
    /// Return the role as its stored lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SuperAdmin => "superadmin",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = youthhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "superadmin" => Ok(Self::SuperAdmin),
            "admin" => Ok(Self::Admin),
            _ => Err(youthhub_core::AppError::validation(format!(
                "Invalid user role: '{s}'. Expected one of: superadmin, admin"
            ))),
        }
    }
}
