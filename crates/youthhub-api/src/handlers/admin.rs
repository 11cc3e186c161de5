//! Branch dashboard handlers (`admin` and `superadmin`).
//!
//! Admins are always pinned to their own branch; a superadmin picks one
//! with `?branchId=`.

use axum::Json;
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use bytes::Bytes;

use youthhub_core::error::AppError;
use youthhub_core::types::EventId;
use youthhub_entity::branch::Branch;
use youthhub_entity::event::EventWithBranch;
use youthhub_service::StoredMedia;

use crate::dto::request::{BranchContactRequest, EventRequest};
use crate::dto::response::{ItemResponse, ListResponse, OkResponse};
use crate::error::ApiError;
use crate::extractors::path::parse_id;
use crate::extractors::{AuthUser, BranchQuery, JsonBody, QueryParams};
use crate::state::AppState;

/// GET /api/admin/branch
pub async fn get_branch(
    State(state): State<AppState>,
    auth: AuthUser,
    QueryParams(query): QueryParams<BranchQuery>,
) -> Result<Json<ItemResponse<Branch>>, ApiError> {
    let branch = state
        .branch_service
        .get_scoped(&auth, query.requested()?)
        .await?;
    Ok(Json(ItemResponse::new(branch)))
}

/// PUT /api/admin/branch
pub async fn update_branch(
    State(state): State<AppState>,
    auth: AuthUser,
    QueryParams(query): QueryParams<BranchQuery>,
    JsonBody(body): JsonBody<BranchContactRequest>,
) -> Result<Json<OkResponse>, ApiError> {
    let contact = body.unwrap_or_default().into_contact()?;
    state
        .branch_service
        .update_contact(&auth, query.requested()?, &contact)
        .await?;
    Ok(Json(OkResponse::ok()))
}

/// GET /api/admin/events
pub async fn list_events(
    State(state): State<AppState>,
    auth: AuthUser,
    QueryParams(query): QueryParams<BranchQuery>,
) -> Result<Json<ListResponse<EventWithBranch>>, ApiError> {
    let events = state
        .event_service
        .list_scoped(&auth, query.requested()?)
        .await?;
    Ok(Json(ListResponse::new(events)))
}

/// POST /api/admin/events
pub async fn create_event(
    State(state): State<AppState>,
    auth: AuthUser,
    QueryParams(query): QueryParams<BranchQuery>,
    JsonBody(body): JsonBody<EventRequest>,
) -> Result<(StatusCode, Json<OkResponse>), ApiError> {
    let requested = query.requested()?;
    // Scope problems are reported before body problems.
    auth.scope(requested)?;
    let input = body
        .unwrap_or_default()
        .into_input("Missing required event fields")?;

    let event = state.event_service.create(&auth, requested, &input).await?;
    Ok((StatusCode::CREATED, Json(OkResponse::created(event.id))))
}

/// PUT /api/admin/events/{id}
pub async fn update_event(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    JsonBody(body): JsonBody<EventRequest>,
) -> Result<Json<OkResponse>, ApiError> {
    auth.scope(None)?;
    let id: EventId = parse_id(&id).map_err(|_| AppError::validation("Invalid event data"))?;
    let input = body.unwrap_or_default().into_input("Invalid event data")?;

    state.event_service.update(&auth, id, &input).await?;
    Ok(Json(OkResponse::ok()))
}

/// DELETE /api/admin/events/{id}
pub async fn delete_event(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<OkResponse>, ApiError> {
    auth.scope(None)?;
    let id: EventId = parse_id(&id)?;
    state.event_service.delete(&auth, id).await?;
    Ok(Json(OkResponse::ok()))
}

/// POST /api/admin/uploads (multipart field `file`)
pub async fn upload(
    State(state): State<AppState>,
    auth: AuthUser,
    QueryParams(query): QueryParams<BranchQuery>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ItemResponse<StoredMedia>>), ApiError> {
    let requested = query.requested()?;
    auth.scope(requested)?.require_branch()?;

    let mut content_type: Option<String> = None;
    let mut data: Option<Bytes> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Multipart error: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }
        content_type = field.content_type().map(String::from);
        data = Some(
            field
                .bytes()
                .await
                .map_err(|e| AppError::validation(format!("Read error: {e}")))?,
        );
        break;
    }

    let data = data.ok_or_else(|| AppError::validation("File is required"))?;
    let stored = state
        .upload_service
        .upload(&auth, requested, content_type.as_deref(), data)
        .await?;

    Ok((StatusCode::CREATED, Json(ItemResponse::new(stored))))
}
