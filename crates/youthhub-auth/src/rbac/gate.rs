//! Role gate applied to route groups.

use youthhub_core::error::AppError;
use youthhub_entity::user::UserRole;

use crate::jwt::Principal;

/// Roles allowed on the branch dashboard.
pub const DASHBOARD_ROLES: &[UserRole] = &[UserRole::Admin, UserRole::SuperAdmin];

/// Roles allowed on organization-wide management.
pub const SUPERADMIN_ROLES: &[UserRole] = &[UserRole::SuperAdmin];

/// Checks that the caller holds one of `allowed`.
///
/// Returns `Err(AppError::Forbidden)` otherwise. Whether a valid token is
/// present at all is decided before this point.
pub fn require_role(principal: &Principal, allowed: &[UserRole]) -> Result<(), AppError> {
    if allowed.contains(&principal.role) {
        Ok(())
    } else {
        Err(AppError::forbidden("Forbidden"))
    }
}
