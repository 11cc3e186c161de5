//! Admin account management: creation, branch moves, password resets.

use std::sync::Arc;

use tracing::info;

use youthhub_auth::password::{PasswordHasher, PasswordValidator};
use youthhub_core::error::AppError;
use youthhub_core::result::AppResult;
use youthhub_core::types::{BranchId, UserId};
use youthhub_database::repositories::{BranchRepository, UserRepository};
use youthhub_entity::user::{AdminListing, CreateUser, User, UserRole};

/// Request to create a branch admin.
#[derive(Debug, Clone)]
pub struct CreateAdminRequest {
    /// Username (unique, trimmed).
    pub username: String,
    /// Display name.
    pub display_name: String,
    /// Initial password.
    pub password: String,
    /// Branch the admin manages.
    pub branch_id: BranchId,
}

/// Handles superadmin account management operations.
#[derive(Debug, Clone)]
pub struct AdminUserService {
    user_repo: Arc<UserRepository>,
    branch_repo: Arc<BranchRepository>,
    hasher: Arc<PasswordHasher>,
    validator: Arc<PasswordValidator>,
}

impl AdminUserService {
    /// Creates a new admin user service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        branch_repo: Arc<BranchRepository>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
    ) -> Self {
        Self {
            user_repo,
            branch_repo,
            hasher,
            validator,
        }
    }

    /// Lists every account with its branch name.
    pub async fn list_accounts(&self) -> AppResult<Vec<AdminListing>> {
        self.user_repo.list_accounts().await
    }

    /// Creates a branch admin.
    pub async fn create_admin(&self, req: CreateAdminRequest) -> AppResult<User> {
        let username = req.username.trim();
        if username.is_empty() {
            return Err(AppError::validation("Username is required"));
        }
        self.ensure_branch(req.branch_id).await?;

        if self.user_repo.find_by_username(username).await?.is_some() {
            return Err(AppError::conflict("Username already exists"));
        }

        self.validator.validate(&req.password)?;
        let password_hash = self.hasher.hash_password(&req.password)?;

        let user = self
            .user_repo
            .create(&CreateUser {
                username: username.to_string(),
                display_name: req.display_name.trim().to_string(),
                password_hash,
                role: UserRole::Admin,
                branch_id: Some(req.branch_id),
            })
            .await?;

        info!(user_id = %user.id, username = %user.username, branch_id = %req.branch_id, "Admin created");
        Ok(user)
    }

    /// Moves an admin to another branch. Superadmins are left untouched.
    pub async fn reassign_branch(&self, user_id: UserId, branch_id: BranchId) -> AppResult<()> {
        self.ensure_branch(branch_id).await?;
        let affected = self.user_repo.update_branch(user_id, branch_id).await?;
        info!(user_id = %user_id, branch_id = %branch_id, affected, "Admin branch reassigned");
        Ok(())
    }

    /// Resets the password of a branch admin.
    pub async fn reset_admin_password(&self, user_id: UserId, password: &str) -> AppResult<()> {
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .filter(|u| u.role == UserRole::Admin)
            .ok_or_else(|| AppError::not_found("Admin not found"))?;
        self.set_password(&user, password).await
    }

    /// Resets the password of any account by username.
    pub async fn reset_password_by_username(&self, username: &str, password: &str) -> AppResult<()> {
        let user = self
            .user_repo
            .find_by_username(username.trim())
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;
        self.set_password(&user, password).await
    }

    async fn set_password(&self, user: &User, password: &str) -> AppResult<()> {
        self.validator.validate(password)?;
        let hash = self.hasher.hash_password(password)?;
        self.user_repo.update_password(user.id, &hash).await?;
        info!(user_id = %user.id, username = %user.username, "Password reset");
        Ok(())
    }

    /// Deletes a branch admin. Superadmins are never deleted.
    pub async fn delete_admin(&self, user_id: UserId) -> AppResult<()> {
        let affected = self.user_repo.delete_admin(user_id).await?;
        info!(user_id = %user_id, affected, "Admin delete applied");
        Ok(())
    }

    async fn ensure_branch(&self, branch_id: BranchId) -> AppResult<()> {
        if self.branch_repo.exists(branch_id).await? {
            Ok(())
        } else {
            Err(AppError::validation("Branch not found"))
        }
    }
}
