//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use youthhub_auth::jwt::TokenCodec;
use youthhub_core::config::AppConfig;
use youthhub_core::traits::StorageProvider;
use youthhub_database::DatabasePool;
use youthhub_service::{
    AdminUserService, AuthService, BranchService, ContentService, EventService, UploadService,
};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// SQLite connection pool
    pub db: DatabasePool,
    /// Media storage backend
    pub storage: Arc<dyn StorageProvider>,

    // ── Auth ─────────────────────────────────────────────────
    /// Session token codec
    pub token_codec: Arc<TokenCodec>,

    // ── Services ─────────────────────────────────────────────
    /// Login
    pub auth_service: Arc<AuthService>,
    /// Branch reads and writes
    pub branch_service: Arc<BranchService>,
    /// Event reads and writes
    pub event_service: Arc<EventService>,
    /// Admin account management
    pub admin_service: Arc<AdminUserService>,
    /// Site content
    pub content_service: Arc<ContentService>,
    /// Media uploads
    pub upload_service: Arc<UploadService>,
}
