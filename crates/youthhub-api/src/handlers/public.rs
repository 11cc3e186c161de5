//! Unauthenticated handlers for the public site.

use axum::Json;
use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::Response;

use youthhub_core::error::AppError;
use youthhub_core::types::EventId;
use youthhub_entity::branch::Branch;
use youthhub_entity::content::SiteContent;
use youthhub_entity::event::EventWithBranch;

use crate::dto::response::{ItemResponse, ListResponse};
use crate::error::ApiError;
use crate::extractors::{EventQuery, QueryParams};
use crate::extractors::path::parse_id;
use crate::state::AppState;

/// GET /api/public/branches
pub async fn list_branches(
    State(state): State<AppState>,
) -> Result<Json<ListResponse<Branch>>, ApiError> {
    let branches = state.branch_service.list_public().await?;
    Ok(Json(ListResponse::new(branches)))
}

/// GET /api/public/events?branchId&month&year
pub async fn list_events(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<EventQuery>,
) -> Result<Json<ListResponse<EventWithBranch>>, ApiError> {
    let filter = query.to_filter()?;
    let events = state.event_service.list_public(&filter).await?;
    Ok(Json(ListResponse::new(events)))
}

/// GET /api/public/events/{id}
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ItemResponse<EventWithBranch>>, ApiError> {
    let id: EventId = parse_id(&id)?;
    let event = state.event_service.get_public(id).await?;
    Ok(Json(ItemResponse::new(event)))
}

/// GET /api/public/content
pub async fn get_content(
    State(state): State<AppState>,
) -> Result<Json<ItemResponse<SiteContent>>, ApiError> {
    let content = state.content_service.get().await?;
    Ok(Json(ItemResponse::new(content)))
}

/// GET /api/public/media/{*key}
pub async fn get_media(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Response, ApiError> {
    let (content_type, stream) = state.upload_service.open(&key).await?;

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type)
        .header(header::CACHE_CONTROL, "public, max-age=86400")
        .body(Body::from_stream(stream))
        .map_err(|e| AppError::internal(format!("Response build failed: {e}")))?;

    Ok(response)
}
