//! Application builder: wires repositories, services, router, and middleware.

use std::sync::Arc;

use axum::Router;
use axum::middleware as axum_middleware;
use tower_http::trace::TraceLayer;

use youthhub_auth::jwt::TokenCodec;
use youthhub_auth::password::{PasswordHasher, PasswordValidator};
use youthhub_core::config::AppConfig;
use youthhub_core::result::AppResult;
use youthhub_core::traits::StorageProvider;
use youthhub_database::DatabasePool;
use youthhub_database::repositories::{
    BranchRepository, ContentRepository, EventRepository, UserRepository,
};
use youthhub_service::{
    AdminUserService, AuthService, BranchService, ContentService, EventService, UploadService,
};
use youthhub_storage::LocalStorageProvider;

use crate::middleware::compression::build_compression_layer;
use crate::middleware::cors::build_cors_layer;
use crate::middleware::logging::request_logging;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the shared state for a database and configuration.
///
/// The pool must already be bootstrapped.
pub async fn build_state(config: AppConfig, db: DatabasePool) -> AppResult<AppState> {
    let db_pool = db.pool().clone();

    // ── Repositories ─────────────────────────────────────────────
    let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
    let branch_repo = Arc::new(BranchRepository::new(db_pool.clone()));
    let event_repo = Arc::new(EventRepository::new(db_pool.clone()));
    let content_repo = Arc::new(ContentRepository::new(db_pool.clone()));

    // ── Auth ─────────────────────────────────────────────────────
    let hasher = Arc::new(PasswordHasher::new(&config.auth)?);
    let validator = Arc::new(PasswordValidator::new(&config.auth));
    let token_codec = Arc::new(TokenCodec::new(&config.auth));

    // ── Storage ──────────────────────────────────────────────────
    let storage: Arc<dyn StorageProvider> =
        Arc::new(LocalStorageProvider::new(&config.storage.root_path).await?);

    // ── Services ─────────────────────────────────────────────────
    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&user_repo),
        Arc::clone(&hasher),
        Arc::clone(&token_codec),
    ));
    let branch_service = Arc::new(BranchService::new(Arc::clone(&branch_repo)));
    let event_service = Arc::new(EventService::new(event_repo, Arc::clone(&branch_repo)));
    let admin_service = Arc::new(AdminUserService::new(
        user_repo,
        branch_repo,
        hasher,
        validator,
    ));
    let content_service = Arc::new(ContentService::new(content_repo));
    let upload_service = Arc::new(UploadService::new(Arc::clone(&storage), config.storage.clone()));

    Ok(AppState {
        config: Arc::new(config),
        db,
        storage,
        token_codec,
        auth_service,
        branch_service,
        event_service,
        admin_service,
        content_service,
        upload_service,
    })
}

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server.cors);

    build_router(state.clone())
        .layer(build_compression_layer())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(axum_middleware::from_fn_with_state(state, request_logging))
}
