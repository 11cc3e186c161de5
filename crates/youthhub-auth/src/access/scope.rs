//! Resolves the branch scope a request may read or write.

use youthhub_core::error::AppError;
use youthhub_core::types::BranchId;
use youthhub_entity::BranchScope;
use youthhub_entity::user::UserRole;

use crate::jwt::Principal;

/// Resolves the scope for `principal`, given the branch named in the request.
///
/// An admin is pinned to the branch in its token and the requested branch is
/// ignored. A superadmin gets the requested branch, or every branch when the
/// request names none.
pub fn resolve_scope(
    principal: &Principal,
    requested: Option<BranchId>,
) -> Result<BranchScope, AppError> {
    match principal.role {
        UserRole::SuperAdmin => Ok(requested.map_or(BranchScope::All, BranchScope::Branch)),
        UserRole::Admin => principal
            .branch_id
            .map(BranchScope::Branch)
            .ok_or_else(|| AppError::validation("Admin has no assigned branch")),
    }
}
