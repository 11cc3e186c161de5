//! Organization-wide management handlers (`superadmin` only).

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use youthhub_core::types::{BranchId, UserId};
use youthhub_entity::branch::{BranchRelations, BranchSummary};
use youthhub_entity::user::AdminListing;

use crate::dto::request::{
    AssignBranchRequest, BranchRequest, CreateAdminRequest, ResetPasswordRequest,
    SiteContentRequest,
};
use crate::dto::response::{ItemResponse, ListResponse, OkResponse};
use crate::error::ApiError;
use crate::extractors::path::parse_id;
use crate::extractors::{AuthUser, JsonBody};
use crate::state::AppState;

// ── Branches ─────────────────────────────────────────────────────

/// GET /api/superadmin/branches
pub async fn list_branches(
    State(state): State<AppState>,
) -> Result<Json<ListResponse<BranchSummary>>, ApiError> {
    let branches = state.branch_service.list_with_counts().await?;
    Ok(Json(ListResponse::new(branches)))
}

/// POST /api/superadmin/branches
pub async fn create_branch(
    State(state): State<AppState>,
    auth: AuthUser,
    JsonBody(body): JsonBody<BranchRequest>,
) -> Result<(StatusCode, Json<OkResponse>), ApiError> {
    let input = body.unwrap_or_default().into_input()?;
    let branch = state.branch_service.create(&auth, &input).await?;
    Ok((StatusCode::CREATED, Json(OkResponse::created(branch.id))))
}

/// PUT /api/superadmin/branches/{id}
pub async fn update_branch(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    JsonBody(body): JsonBody<BranchRequest>,
) -> Result<Json<OkResponse>, ApiError> {
    let id: BranchId = parse_id(&id)?;
    let input = body.unwrap_or_default().into_input()?;
    state.branch_service.update(&auth, id, &input).await?;
    Ok(Json(OkResponse::ok()))
}

/// DELETE /api/superadmin/branches/{id}
pub async fn delete_branch(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<OkResponse>, ApiError> {
    let id: BranchId = parse_id(&id)?;
    state.branch_service.delete(&auth, id).await?;
    Ok(Json(OkResponse::ok()))
}

/// GET /api/superadmin/branches/{id}/relations
pub async fn branch_relations(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ItemResponse<BranchRelations>>, ApiError> {
    let id: BranchId = parse_id(&id)?;
    let relations = state.branch_service.relations(id).await?;
    Ok(Json(ItemResponse::new(relations)))
}

// ── Admin accounts ───────────────────────────────────────────────

/// GET /api/superadmin/admins
pub async fn list_admins(
    State(state): State<AppState>,
) -> Result<Json<ListResponse<AdminListing>>, ApiError> {
    let accounts = state.admin_service.list_accounts().await?;
    Ok(Json(ListResponse::new(accounts)))
}

/// POST /api/superadmin/admins
pub async fn create_admin(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CreateAdminRequest>,
) -> Result<(StatusCode, Json<OkResponse>), ApiError> {
    let command = body.unwrap_or_default().into_command()?;
    let user = state.admin_service.create_admin(command).await?;
    Ok((StatusCode::CREATED, Json(OkResponse::created(user.id))))
}

/// PUT /api/superadmin/admins/{id}/branch
pub async fn assign_branch(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody<AssignBranchRequest>,
) -> Result<Json<OkResponse>, ApiError> {
    let user_id: UserId = parse_id(&id)?;
    let branch_id = body.unwrap_or_default().branch()?;
    state
        .admin_service
        .reassign_branch(user_id, branch_id)
        .await?;
    Ok(Json(OkResponse::ok()))
}

/// PUT /api/superadmin/admins/{id}/password
pub async fn reset_password(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody<ResetPasswordRequest>,
) -> Result<Json<OkResponse>, ApiError> {
    let user_id: UserId = parse_id(&id)?;
    let req = body.unwrap_or_default();
    state
        .admin_service
        .reset_admin_password(user_id, &req.password)
        .await?;
    Ok(Json(OkResponse::ok()))
}

/// DELETE /api/superadmin/admins/{id}
pub async fn delete_admin(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<OkResponse>, ApiError> {
    let user_id: UserId = parse_id(&id)?;
    state.admin_service.delete_admin(user_id).await?;
    Ok(Json(OkResponse::ok()))
}

// ── Site content ─────────────────────────────────────────────────

/// PUT /api/superadmin/content
pub async fn update_content(
    State(state): State<AppState>,
    auth: AuthUser,
    JsonBody(body): JsonBody<SiteContentRequest>,
) -> Result<Json<OkResponse>, ApiError> {
    let input = body.unwrap_or_default().into_input()?;
    state.content_service.update(&auth, &input).await?;
    Ok(Json(OkResponse::ok()))
}
