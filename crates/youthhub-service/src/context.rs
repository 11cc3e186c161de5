//! Request context carrying the authenticated principal.

use youthhub_auth::Principal;
use youthhub_auth::access::resolve_scope;
use youthhub_core::result::AppResult;
use youthhub_core::types::{BranchId, UserId};
use youthhub_entity::BranchScope;

/// Context for the current authenticated request.
///
/// Built from verified token claims and passed into service methods so
/// that every operation knows who is acting and which branches it may see.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// The verified principal.
    pub principal: Principal,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(principal: Principal) -> Self {
        Self { principal }
    }

    /// The acting account id.
    pub fn user_id(&self) -> UserId {
        self.principal.sub
    }

    /// Branch scope for this request given the branch the caller asked for.
    pub fn scope(&self, requested: Option<BranchId>) -> AppResult<BranchScope> {
        resolve_scope(&self.principal, requested)
    }
}
