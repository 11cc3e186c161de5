//! Event repository implementation.

use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use youthhub_core::error::{AppError, ErrorKind};
use youthhub_core::result::AppResult;
use youthhub_core::types::{BranchId, EventId, UserId};
use youthhub_entity::BranchScope;
use youthhub_entity::event::{Event, EventFilter, EventInput, EventWithBranch};

const JOINED_SELECT: &str = "SELECT e.*, b.name AS branch_name, b.governorate AS branch_governorate \
     FROM events e JOIN branches b ON b.id = e.branch_id";

/// Repository for branch events.
#[derive(Debug, Clone)]
pub struct EventRepository {
    pool: SqlitePool,
}

impl EventRepository {
    /// Create a new event repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Events matching the filter, newest event date first.
    pub async fn list(&self, filter: &EventFilter) -> AppResult<Vec<EventWithBranch>> {
        let mut query: QueryBuilder<'_, Sqlite> = QueryBuilder::new(JOINED_SELECT);
        query.push(" WHERE 1 = 1");

        if let Some(branch_id) = filter.branch_id {
            query.push(" AND e.branch_id = ").push_bind(branch_id);
        }
        if let Some(year) = filter.year {
            query
                .push(" AND strftime('%Y', e.event_date) = ")
                .push_bind(format!("{year:04}"));
        }
        if let Some(month) = filter.month {
            query
                .push(" AND strftime('%m', e.event_date) = ")
                .push_bind(format!("{month:02}"));
        }
        query.push(" ORDER BY e.event_date DESC, e.id DESC");

        query
            .build_query_as::<EventWithBranch>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list events", e))
    }

    /// Find an event with its branch details.
    pub async fn find_by_id(&self, id: EventId) -> AppResult<Option<EventWithBranch>> {
        let sql = format!("{JOINED_SELECT} WHERE e.id = ?");
        sqlx::query_as::<_, EventWithBranch>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find event", e))
    }

    /// Insert an event owned by `branch_id`.
    pub async fn create(
        &self,
        branch_id: BranchId,
        input: &EventInput,
        created_by: UserId,
    ) -> AppResult<Event> {
        sqlx::query_as::<_, Event>(
            "INSERT INTO events \
             (branch_id, title, image_url, announcement, event_date, location, created_by) \
             VALUES (?, ?, ?, ?, ?, ?, ?) RETURNING *",
        )
        .bind(branch_id)
        .bind(&input.title)
        .bind(&input.image_url)
        .bind(&input.announcement)
        .bind(&input.event_date)
        .bind(&input.location)
        .bind(created_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create event", e))
    }

    /// Update an event inside `scope`. Returns affected rows; an event
    /// outside the scope is left untouched.
    pub async fn update(
        &self,
        id: EventId,
        scope: BranchScope,
        input: &EventInput,
    ) -> AppResult<u64> {
        let branch = scope.branch();
        sqlx::query(
            "UPDATE events SET title = ?, image_url = ?, announcement = ?, event_date = ?, \
             location = ?, updated_at = CURRENT_TIMESTAMP \
             WHERE id = ? AND (? IS NULL OR branch_id = ?)",
        )
        .bind(&input.title)
        .bind(&input.image_url)
        .bind(&input.announcement)
        .bind(&input.event_date)
        .bind(&input.location)
        .bind(id)
        .bind(branch)
        .bind(branch)
        .execute(&self.pool)
        .await
        .map(|r| r.rows_affected())
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update event", e))
    }

    /// Delete an event inside `scope`. Returns affected rows.
    pub async fn delete(&self, id: EventId, scope: BranchScope) -> AppResult<u64> {
        let branch = scope.branch();
        sqlx::query("DELETE FROM events WHERE id = ? AND (? IS NULL OR branch_id = ?)")
            .bind(id)
            .bind(branch)
            .bind(branch)
            .execute(&self.pool)
            .await
            .map(|r| r.rows_affected())
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete event", e))
    }
}
