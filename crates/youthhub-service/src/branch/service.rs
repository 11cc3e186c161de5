//! Branch reads, edits, and guarded deletion.

use std::sync::Arc;

use tracing::info;

use youthhub_core::error::AppError;
use youthhub_core::result::AppResult;
use youthhub_core::types::BranchId;
use youthhub_database::repositories::BranchRepository;
use youthhub_entity::branch::{Branch, BranchContact, BranchInput, BranchRelations, BranchSummary};

use crate::context::RequestContext;

/// Branch operations for the public site and both dashboards.
#[derive(Debug, Clone)]
pub struct BranchService {
    branch_repo: Arc<BranchRepository>,
}

impl BranchService {
    /// Creates a new branch service.
    pub fn new(branch_repo: Arc<BranchRepository>) -> Self {
        Self { branch_repo }
    }

    /// All branches for the public directory.
    pub async fn list_public(&self) -> AppResult<Vec<Branch>> {
        self.branch_repo.find_all().await
    }

    /// All branches with relation counts for the superadmin dashboard.
    pub async fn list_with_counts(&self) -> AppResult<Vec<BranchSummary>> {
        self.branch_repo.find_all_with_counts().await
    }

    /// The branch the caller is scoped to.
    pub async fn get_scoped(
        &self,
        ctx: &RequestContext,
        requested: Option<BranchId>,
    ) -> AppResult<Branch> {
        let branch_id = ctx.scope(requested)?.require_branch()?;
        self.branch_repo
            .find_by_id(branch_id)
            .await?
            .ok_or_else(|| AppError::not_found("Branch not found"))
    }

    /// Updates the contact details of the caller's branch.
    pub async fn update_contact(
        &self,
        ctx: &RequestContext,
        requested: Option<BranchId>,
        contact: &BranchContact,
    ) -> AppResult<()> {
        let branch_id = ctx.scope(requested)?.require_branch()?;
        self.branch_repo.update_contact(branch_id, contact).await?;
        info!(branch_id = %branch_id, user_id = %ctx.user_id(), "Branch contact updated");
        Ok(())
    }

    /// Creates a branch.
    pub async fn create(&self, ctx: &RequestContext, input: &BranchInput) -> AppResult<Branch> {
        let branch = self.branch_repo.create(input).await?;
        info!(branch_id = %branch.id, user_id = %ctx.user_id(), "Branch created");
        Ok(branch)
    }

    /// Replaces every field of a branch.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: BranchId,
        input: &BranchInput,
    ) -> AppResult<()> {
        let affected = self.branch_repo.update(id, input).await?;
        info!(branch_id = %id, affected, user_id = %ctx.user_id(), "Branch updated");
        Ok(())
    }

    /// Counts of admins and events that would block deletion.
    pub async fn relations(&self, id: BranchId) -> AppResult<BranchRelations> {
        if !self.branch_repo.exists(id).await? {
            return Err(AppError::not_found("Branch not found"));
        }
        self.branch_repo.relations(id).await
    }

    /// Deletes a branch that nothing references.
    ///
    /// When nothing was deleted the branch is re-read: a missing branch is
    /// `NotFound`, a referenced one is `Conflict` carrying both counts.
    pub async fn delete(&self, ctx: &RequestContext, id: BranchId) -> AppResult<()> {
        if self.branch_repo.delete_if_unreferenced(id).await? > 0 {
            info!(branch_id = %id, user_id = %ctx.user_id(), "Branch deleted");
            return Ok(());
        }

        if !self.branch_repo.exists(id).await? {
            return Err(AppError::not_found("Branch not found"));
        }
        let relations = self.branch_repo.relations(id).await?;
        Err(
            AppError::conflict("Branch still has linked admins or events")
                .with_details(serde_json::to_value(relations)?),
        )
    }
}
