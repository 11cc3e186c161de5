//! Session token claims.

use serde::{Deserialize, Serialize};

use youthhub_core::types::{BranchId, UserId};
use youthhub_entity::user::{User, UserRole};

/// The identity a token speaks for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Principal {
    /// Account id.
    pub sub: UserId,
    /// Login name.
    pub username: String,
    /// Account role at login time.
    pub role: UserRole,
    /// Assigned branch; `null` for superadmins.
    pub branch_id: Option<BranchId>,
}

impl From<&User> for Principal {
    fn from(user: &User) -> Self {
        Self {
            sub: user.id,
            username: user.username.clone(),
            role: user.role,
            branch_id: user.branch_id,
        }
    }
}

/// Token body: the principal plus an expiry instant.
///
/// Unknown fields are rejected so a body carrying extra keys never
/// verifies, even with a valid signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Claims {
    /// Account id.
    pub sub: UserId,
    /// Login name.
    pub username: String,
    /// Account role.
    pub role: UserRole,
    /// Assigned branch, always serialized (as `null` when absent).
    pub branch_id: Option<BranchId>,
    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,
}

impl Claims {
    /// Build claims for `principal` expiring at `exp`.
    pub fn new(principal: &Principal, exp: i64) -> Self {
        Self {
            sub: principal.sub,
            username: principal.username.clone(),
            role: principal.role,
            branch_id: principal.branch_id,
            exp,
        }
    }

    /// The principal without the expiry.
    pub fn principal(&self) -> Principal {
        Principal {
            sub: self.sub,
            username: self.username.clone(),
            role: self.role,
            branch_id: self.branch_id,
        }
    }

    /// Whether the token is expired at `now` (seconds since epoch).
    pub fn is_expired_at(&self, now: i64) -> bool {
        self.exp < now
    }
}
