//! User repository implementation.

use sqlx::SqlitePool;

use youthhub_core::error::{AppError, ErrorKind};
use youthhub_core::result::AppResult;
use youthhub_core::types::{BranchId, UserId};
use youthhub_entity::user::{AdminListing, CreateUser, User};

/// Repository for dashboard accounts.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find a user by primary key.
    pub async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    /// Find a user by exact username.
    pub async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = ? LIMIT 1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by username", e)
            })
    }

    /// Every account with its branch name, superadmins first, newest first.
    pub async fn list_accounts(&self) -> AppResult<Vec<AdminListing>> {
        sqlx::query_as::<_, AdminListing>(
            "SELECT u.id, u.username, u.display_name, u.role, u.branch_id, \
             b.name AS branch_name, u.created_at \
             FROM users u LEFT JOIN branches b ON b.id = u.branch_id \
             ORDER BY u.role DESC, u.created_at DESC, u.id DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list accounts", e))
    }

    /// Insert a new account.
    pub async fn create(&self, data: &CreateUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (username, display_name, password_hash, role, branch_id) \
             VALUES (?, ?, ?, ?, ?) RETURNING *",
        )
        .bind(&data.username)
        .bind(&data.display_name)
        .bind(&data.password_hash)
        .bind(data.role)
        .bind(data.branch_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::conflict("Username already exists")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create user", e),
        })
    }

    /// Move an admin to another branch. Superadmins are never touched.
    pub async fn update_branch(&self, id: UserId, branch_id: BranchId) -> AppResult<u64> {
        sqlx::query(
            "UPDATE users SET branch_id = ?, updated_at = CURRENT_TIMESTAMP \
             WHERE id = ? AND role = 'admin'",
        )
        .bind(branch_id)
        .bind(id)
        .execute(&self.pool)
        .await
        .map(|r| r.rows_affected())
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update user branch", e))
    }

    /// Replace the stored password digest.
    pub async fn update_password(&self, id: UserId, password_hash: &str) -> AppResult<u64> {
        sqlx::query(
            "UPDATE users SET password_hash = ?, updated_at = CURRENT_TIMESTAMP WHERE id = ?",
        )
        .bind(password_hash)
        .bind(id)
        .execute(&self.pool)
        .await
        .map(|r| r.rows_affected())
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update password", e))
    }

    /// Delete an admin account. Superadmins are never deleted.
    pub async fn delete_admin(&self, id: UserId) -> AppResult<u64> {
        sqlx::query("DELETE FROM users WHERE id = ? AND role = 'admin'")
            .bind(id)
            .execute(&self.pool)
            .await
            .map(|r| r.rows_affected())
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete user", e))
    }
}
