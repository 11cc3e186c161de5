//! Landing page content.

use std::sync::Arc;

use tracing::info;

use youthhub_core::error::AppError;
use youthhub_core::result::AppResult;
use youthhub_database::repositories::ContentRepository;
use youthhub_entity::content::{SiteContent, SiteContentInput};

use crate::context::RequestContext;

/// Reads and replaces the single site-content record.
#[derive(Debug, Clone)]
pub struct ContentService {
    content_repo: Arc<ContentRepository>,
}

impl ContentService {
    /// Creates a new content service.
    pub fn new(content_repo: Arc<ContentRepository>) -> Self {
        Self { content_repo }
    }

    /// Current site content.
    pub async fn get(&self) -> AppResult<SiteContent> {
        self.content_repo
            .get()
            .await?
            .ok_or_else(|| AppError::not_found("Site content not found"))
    }

    /// Replaces the site content.
    pub async fn update(&self, ctx: &RequestContext, input: &SiteContentInput) -> AppResult<()> {
        if self.content_repo.update(input).await? == 0 {
            return Err(AppError::not_found("Site content not found"));
        }
        info!(user_id = %ctx.user_id(), "Site content updated");
        Ok(())
    }
}
