//! Branch scoping applied to reads and writes.

use serde::{Deserialize, Serialize};

use youthhub_core::AppError;
use youthhub_core::result::AppResult;
use youthhub_core::types::BranchId;

/// The set of branches a query may touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BranchScope {
    /// No branch restriction.
    All,
    /// Exactly one branch.
    Branch(BranchId),
}

impl BranchScope {
    /// The restricting branch, or `None` when unscoped.
    pub fn branch(&self) -> Option<BranchId> {
        match self {
            Self::All => None,
            Self::Branch(id) => Some(*id),
        }
    }

    /// Demand a concrete branch for operations that cannot run unscoped.
    pub fn require_branch(&self) -> AppResult<BranchId> {
        self.branch()
            .ok_or_else(|| AppError::validation("Branch is required"))
    }
}
