//! Auth handlers: login and me.

use axum::Json;
use axum::extract::State;

use crate::dto::request::LoginRequest;
use crate::dto::response::{LoginResponse, MeResponse, UserSummary};
use crate::error::ApiError;
use crate::extractors::{AuthUser, JsonBody};
use crate::state::AppState;

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let req = body.unwrap_or_default();
    let outcome = state
        .auth_service
        .login(&req.username, &req.password)
        .await?;

    Ok(Json(LoginResponse {
        token: outcome.token,
        user: UserSummary::from(&outcome.user),
    }))
}

/// GET /api/auth/me and GET /api/admin/me
pub async fn me(auth: AuthUser) -> Json<MeResponse> {
    Json(MeResponse {
        user: auth.principal.clone(),
    })
}
