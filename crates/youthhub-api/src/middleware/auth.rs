//! Route-group guards: verify the bearer token, then check the role.
//!
//! On success the verified [`RequestContext`] is stored in the request
//! extensions, where the `AuthUser` extractor picks it up.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use youthhub_auth::rbac::{DASHBOARD_ROLES, SUPERADMIN_ROLES, require_role};
use youthhub_entity::user::UserRole;

use crate::error::ApiError;
use crate::extractors::auth::authenticate;
use crate::state::AppState;

async fn guard(
    state: &AppState,
    roles: Option<&[UserRole]>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let ctx = authenticate(request.headers(), &state.token_codec)?;
    if let Some(roles) = roles {
        require_role(&ctx.principal, roles)?;
    }
    request.extensions_mut().insert(ctx);
    Ok(next.run(request).await)
}

/// Any valid token.
pub async fn require_auth(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    guard(&state, None, request, next).await
}

/// `admin` or `superadmin`.
pub async fn require_dashboard(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    guard(&state, Some(DASHBOARD_ROLES), request, next).await
}

/// `superadmin` only.
pub async fn require_superadmin(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    guard(&state, Some(SUPERADMIN_ROLES), request, next).await
}
