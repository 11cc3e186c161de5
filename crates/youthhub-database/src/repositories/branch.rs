//! Branch repository implementation.

use sqlx::SqlitePool;

use youthhub_core::error::{AppError, ErrorKind};
use youthhub_core::result::AppResult;
use youthhub_core::types::BranchId;
use youthhub_entity::branch::{Branch, BranchContact, BranchInput, BranchRelations, BranchSummary};

const RELATION_COUNTS: &str = "(SELECT COUNT(*) FROM users u WHERE u.branch_id = b.id AND u.role = 'admin') AS admins_count, \
     (SELECT COUNT(*) FROM events e WHERE e.branch_id = b.id) AS events_count";

/// Repository for branch rows and their dependent-row counts.
#[derive(Debug, Clone)]
pub struct BranchRepository {
    pool: SqlitePool,
}

impl BranchRepository {
    /// Create a new branch repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All branches ordered by governorate.
    pub async fn find_all(&self) -> AppResult<Vec<Branch>> {
        sqlx::query_as::<_, Branch>("SELECT * FROM branches ORDER BY governorate ASC, id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list branches", e))
    }

    /// All branches with their admin and event counts.
    pub async fn find_all_with_counts(&self) -> AppResult<Vec<BranchSummary>> {
        let sql = format!(
            "SELECT b.*, {RELATION_COUNTS} FROM branches b ORDER BY b.governorate ASC, b.id ASC"
        );
        sqlx::query_as::<_, BranchSummary>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list branch summaries", e)
            })
    }

    /// Find a branch by primary key.
    pub async fn find_by_id(&self, id: BranchId) -> AppResult<Option<Branch>> {
        sqlx::query_as::<_, Branch>("SELECT * FROM branches WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find branch", e))
    }

    /// Whether a branch with this id exists.
    pub async fn exists(&self, id: BranchId) -> AppResult<bool> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM branches WHERE id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map(|n| n > 0)
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to check branch", e))
    }

    /// Insert a new branch.
    pub async fn create(&self, input: &BranchInput) -> AppResult<Branch> {
        let contact = &input.contact;
        sqlx::query_as::<_, Branch>(
            "INSERT INTO branches \
             (name, governorate, address, phone, whatsapp, facebook, telegram, instagram) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?) RETURNING *",
        )
        .bind(&input.name)
        .bind(&input.governorate)
        .bind(&contact.address)
        .bind(&contact.phone)
        .bind(&contact.whatsapp)
        .bind(&contact.socials.facebook)
        .bind(&contact.socials.telegram)
        .bind(&contact.socials.instagram)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create branch", e))
    }

    /// Replace every editable field of a branch. Returns affected rows.
    pub async fn update(&self, id: BranchId, input: &BranchInput) -> AppResult<u64> {
        let contact = &input.contact;
        sqlx::query(
            "UPDATE branches SET name = ?, governorate = ?, address = ?, phone = ?, whatsapp = ?, \
             facebook = ?, telegram = ?, instagram = ?, updated_at = CURRENT_TIMESTAMP \
             WHERE id = ?",
        )
        .bind(&input.name)
        .bind(&input.governorate)
        .bind(&contact.address)
        .bind(&contact.phone)
        .bind(&contact.whatsapp)
        .bind(&contact.socials.facebook)
        .bind(&contact.socials.telegram)
        .bind(&contact.socials.instagram)
        .bind(id)
        .execute(&self.pool)
        .await
        .map(|r| r.rows_affected())
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update branch", e))
    }

    /// Update only the contact details of a branch. Returns affected rows.
    pub async fn update_contact(&self, id: BranchId, contact: &BranchContact) -> AppResult<u64> {
        sqlx::query(
            "UPDATE branches SET address = ?, phone = ?, whatsapp = ?, \
             facebook = ?, telegram = ?, instagram = ?, updated_at = CURRENT_TIMESTAMP \
             WHERE id = ?",
        )
        .bind(&contact.address)
        .bind(&contact.phone)
        .bind(&contact.whatsapp)
        .bind(&contact.socials.facebook)
        .bind(&contact.socials.telegram)
        .bind(&contact.socials.instagram)
        .bind(id)
        .execute(&self.pool)
        .await
        .map(|r| r.rows_affected())
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update branch contact", e)
        })
    }

    /// Count admins and events referencing a branch.
    pub async fn relations(&self, id: BranchId) -> AppResult<BranchRelations> {
        let sql = format!("SELECT {RELATION_COUNTS} FROM (SELECT ? AS id) b");
        sqlx::query_as::<_, BranchRelations>(&sql)
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count branch relations", e)
            })
    }

    /// Delete a branch only if no admin or event references it.
    ///
    /// The reference check and the delete are one statement, so a
    /// concurrent insert cannot slip between them. Returns affected rows.
    pub async fn delete_if_unreferenced(&self, id: BranchId) -> AppResult<u64> {
        sqlx::query(
            "DELETE FROM branches WHERE id = ? \
             AND NOT EXISTS (SELECT 1 FROM users WHERE branch_id = ? AND role = 'admin') \
             AND NOT EXISTS (SELECT 1 FROM events WHERE branch_id = ?)",
        )
        .bind(id)
        .bind(id)
        .bind(id)
        .execute(&self.pool)
        .await
        .map(|r| r.rows_affected())
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete branch", e))
    }
}
