//! Branch entity model.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use youthhub_core::types::BranchId;

/// A branch office of the organization.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Branch {
    /// Unique branch identifier.
    pub id: BranchId,
    /// Branch display name.
    pub name: String,
    /// Governorate the branch operates in.
    pub governorate: String,
    /// Street address.
    pub address: String,
    /// Contact phone number.
    pub phone: String,
    /// WhatsApp contact number.
    pub whatsapp: String,
    /// Facebook page URL.
    pub facebook: Option<String>,
    /// Telegram channel URL.
    pub telegram: Option<String>,
    /// Instagram profile URL.
    pub instagram: Option<String>,
    /// When the branch was created.
    pub created_at: NaiveDateTime,
    /// When the branch was last updated.
    pub updated_at: NaiveDateTime,
}

/// A branch together with its dependent-row counts.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BranchSummary {
    /// The branch row.
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub branch: Branch,
    /// Number of admin accounts assigned to the branch.
    pub admins_count: i64,
    /// Number of events owned by the branch.
    pub events_count: i64,
}

/// Dependent-row counts that block a branch deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct BranchRelations {
    /// Admin accounts referencing the branch.
    pub admins_count: i64,
    /// Events referencing the branch.
    pub events_count: i64,
}

impl BranchRelations {
    /// Whether nothing references the branch any more.
    pub fn is_empty(&self) -> bool {
        self.admins_count == 0 && self.events_count == 0
    }
}

/// Social links attached to a branch; empty strings are stored as `NULL`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SocialLinks {
    /// Facebook page URL.
    pub facebook: Option<String>,
    /// Telegram channel URL.
    pub telegram: Option<String>,
    /// Instagram profile URL.
    pub instagram: Option<String>,
}

/// Full branch payload used by superadmin create and update.
#[derive(Debug, Clone)]
pub struct BranchInput {
    /// Branch display name.
    pub name: String,
    /// Governorate.
    pub governorate: String,
    /// Contact details and social links.
    pub contact: BranchContact,
}

/// Contact payload a branch admin may edit on its own branch.
#[derive(Debug, Clone)]
pub struct BranchContact {
    /// Street address.
    pub address: String,
    /// Contact phone number.
    pub phone: String,
    /// WhatsApp contact number.
    pub whatsapp: String,
    /// Social links.
    pub socials: SocialLinks,
}
