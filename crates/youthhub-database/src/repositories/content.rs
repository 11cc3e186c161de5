//! Site content repository implementation.

use sqlx::SqlitePool;

use youthhub_core::error::{AppError, ErrorKind};
use youthhub_core::result::AppResult;
use youthhub_entity::content::{SiteContent, SiteContentInput};

/// Repository for the single site-content row.
#[derive(Debug, Clone)]
pub struct ContentRepository {
    pool: SqlitePool,
}

impl ContentRepository {
    /// Create a new content repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Fetch the site content, `None` before bootstrap has run.
    pub async fn get(&self) -> AppResult<Option<SiteContent>> {
        sqlx::query_as::<_, SiteContent>(
            "SELECT organization_name, slogan, definition_text, vision_text, mission_text, \
             goals_text, volunteer_form_url, updated_at FROM site_content WHERE id = 1",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load site content", e))
    }

    /// Overwrite the site content. Returns affected rows.
    pub async fn update(&self, input: &SiteContentInput) -> AppResult<u64> {
        sqlx::query(
            "UPDATE site_content SET organization_name = ?, slogan = ?, definition_text = ?, \
             vision_text = ?, mission_text = ?, goals_text = ?, volunteer_form_url = ?, \
             updated_at = CURRENT_TIMESTAMP WHERE id = 1",
        )
        .bind(&input.organization_name)
        .bind(&input.slogan)
        .bind(&input.definition_text)
        .bind(&input.vision_text)
        .bind(&input.mission_text)
        .bind(&input.goals_text)
        .bind(&input.volunteer_form_url)
        .execute(&self.pool)
        .await
        .map(|r| r.rows_affected())
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update site content", e)
        })
    }
}
