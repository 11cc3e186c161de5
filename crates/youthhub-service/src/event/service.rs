//! Event listing and branch-scoped event management.

use std::sync::Arc;

use tracing::info;

use youthhub_core::error::AppError;
use youthhub_core::result::AppResult;
use youthhub_core::types::{BranchId, EventId};
use youthhub_database::repositories::{BranchRepository, EventRepository};
use youthhub_entity::event::{Event, EventFilter, EventInput, EventWithBranch};

use crate::context::RequestContext;

/// Event operations for the public site and the branch dashboard.
#[derive(Debug, Clone)]
pub struct EventService {
    event_repo: Arc<EventRepository>,
    branch_repo: Arc<BranchRepository>,
}

impl EventService {
    /// Creates a new event service.
    pub fn new(event_repo: Arc<EventRepository>, branch_repo: Arc<BranchRepository>) -> Self {
        Self {
            event_repo,
            branch_repo,
        }
    }

    /// Public event listing.
    pub async fn list_public(&self, filter: &EventFilter) -> AppResult<Vec<EventWithBranch>> {
        self.event_repo.list(filter).await
    }

    /// A single event for the public detail page.
    pub async fn get_public(&self, id: EventId) -> AppResult<EventWithBranch> {
        self.event_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Event not found"))
    }

    /// Events inside the caller's scope.
    pub async fn list_scoped(
        &self,
        ctx: &RequestContext,
        requested: Option<BranchId>,
    ) -> AppResult<Vec<EventWithBranch>> {
        let scope = ctx.scope(requested)?;
        let filter = EventFilter {
            branch_id: scope.branch(),
            ..EventFilter::default()
        };
        self.event_repo.list(&filter).await
    }

    /// Creates an event in the caller's branch, recording the caller as author.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        requested: Option<BranchId>,
        input: &EventInput,
    ) -> AppResult<Event> {
        let branch_id = ctx.scope(requested)?.require_branch()?;
        if !self.branch_repo.exists(branch_id).await? {
            return Err(AppError::not_found("Branch not found"));
        }

        let event = self
            .event_repo
            .create(branch_id, input, ctx.user_id())
            .await?;
        info!(event_id = %event.id, branch_id = %branch_id, user_id = %ctx.user_id(), "Event created");
        Ok(event)
    }

    /// Updates an event inside the caller's scope.
    ///
    /// An event owned by another branch is left untouched and the call still
    /// succeeds.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: EventId,
        input: &EventInput,
    ) -> AppResult<()> {
        let scope = ctx.scope(None)?;
        let affected = self.event_repo.update(id, scope, input).await?;
        info!(event_id = %id, affected, user_id = %ctx.user_id(), "Event update applied");
        Ok(())
    }

    /// Deletes an event inside the caller's scope.
    pub async fn delete(&self, ctx: &RequestContext, id: EventId) -> AppResult<()> {
        let scope = ctx.scope(None)?;
        let affected = self.event_repo.delete(id, scope).await?;
        info!(event_id = %id, affected, user_id = %ctx.user_id(), "Event delete applied");
        Ok(())
    }
}
