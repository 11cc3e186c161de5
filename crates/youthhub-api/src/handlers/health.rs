//! Health check handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use youthhub_core::result::AppResult;

use crate::dto::response::{DetailedHealthResponse, HealthResponse};
use crate::state::AppState;

/// GET /api/health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /api/health/detailed
///
/// Answers 503 when either the database or the storage root is unusable.
pub async fn health_detailed(
    State(state): State<AppState>,
) -> (StatusCode, Json<DetailedHealthResponse>) {
    let database = describe(state.db.health_check().await, "connected", "unreachable");
    let storage = describe(
        state.storage.health_check().await,
        "available",
        "unavailable",
    );

    let ok = database.0 && storage.0;
    let status = if ok {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(DetailedHealthResponse {
            ok,
            database: database.1.to_string(),
            storage: storage.1.to_string(),
        }),
    )
}

fn describe(
    result: AppResult<bool>,
    up: &'static str,
    down: &'static str,
) -> (bool, &'static str) {
    match result {
        Ok(true) => (true, up),
        Ok(false) => (false, down),
        Err(err) => {
            tracing::warn!(error = %err, "Health check failed");
            (false, down)
        }
    }
}
