//! Route definitions for the YouthHub HTTP API.
//!
//! Routes are grouped by audience and mounted under `/api`. The admin and
//! superadmin groups sit behind role guards; the public group is open.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};

use crate::handlers;
use crate::middleware::auth::{require_auth, require_dashboard, require_superadmin};
use crate::state::AppState;

/// Multipart framing on top of the largest accepted upload.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Build the Axum router with all routes and role guards.
pub fn build_router(state: AppState) -> Router {
    let max_upload = usize::try_from(state.config.storage.max_upload_size_bytes)
        .unwrap_or(usize::MAX)
        .saturating_add(MULTIPART_OVERHEAD_BYTES);

    let api_routes = Router::new()
        .merge(health_routes())
        .merge(auth_routes(state.clone()))
        .nest("/public", public_routes())
        .nest("/admin", admin_routes(state.clone()))
        .nest("/superadmin", superadmin_routes(state.clone()));

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(max_upload))
        .with_state(state)
}

/// Liveness and dependency checks
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/health/detailed", get(handlers::health::health_detailed))
}

/// Login and token introspection
fn auth_routes(state: AppState) -> Router<AppState> {
    let me = Router::new()
        .route("/auth/me", get(handlers::auth::me))
        .route_layer(axum_middleware::from_fn_with_state(state, require_auth));

    Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .merge(me)
}

/// Public site: branches, events, content, media
fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/branches", get(handlers::public::list_branches))
        .route("/events", get(handlers::public::list_events))
        .route("/events/{id}", get(handlers::public::get_event))
        .route("/content", get(handlers::public::get_content))
        .route("/media/{*key}", get(handlers::public::get_media))
}

/// Branch dashboard
fn admin_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/me", get(handlers::auth::me))
        .route(
            "/branch",
            get(handlers::admin::get_branch).put(handlers::admin::update_branch),
        )
        .route(
            "/events",
            get(handlers::admin::list_events).post(handlers::admin::create_event),
        )
        .route(
            "/events/{id}",
            put(handlers::admin::update_event).delete(handlers::admin::delete_event),
        )
        .route("/uploads", post(handlers::admin::upload))
        .route_layer(axum_middleware::from_fn_with_state(state, require_dashboard))
}

/// Organization-wide management
fn superadmin_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/branches",
            get(handlers::superadmin::list_branches).post(handlers::superadmin::create_branch),
        )
        .route(
            "/branches/{id}",
            put(handlers::superadmin::update_branch).delete(handlers::superadmin::delete_branch),
        )
        .route(
            "/branches/{id}/relations",
            get(handlers::superadmin::branch_relations),
        )
        .route(
            "/admins",
            get(handlers::superadmin::list_admins).post(handlers::superadmin::create_admin),
        )
        .route(
            "/admins/{id}/branch",
            put(handlers::superadmin::assign_branch),
        )
        .route(
            "/admins/{id}/password",
            put(handlers::superadmin::reset_password),
        )
        .route(
            "/admins/{id}",
            delete(handlers::superadmin::delete_admin),
        )
        .route("/content", put(handlers::superadmin::update_content))
        .route_layer(axum_middleware::from_fn_with_state(
            state,
            require_superadmin,
        ))
}
