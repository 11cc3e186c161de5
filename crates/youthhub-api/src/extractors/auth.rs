//! `AuthUser` extractor: resolves the bearer token into a request context.

use axum::extract::FromRequestParts;
use axum::http::HeaderMap;
use axum::http::request::Parts;
use axum_extra::headers::authorization::Bearer;
use axum_extra::headers::{Authorization, HeaderMapExt};

use youthhub_auth::jwt::TokenCodec;
use youthhub_core::error::AppError;
use youthhub_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated user context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Verifies the `Authorization: Bearer` header.
///
/// A missing or non-bearer header is `"Unauthorized"`; every token
/// rejection collapses to `"Invalid token"`.
pub fn authenticate(headers: &HeaderMap, codec: &TokenCodec) -> Result<RequestContext, AppError> {
    let Some(Authorization(bearer)) = headers.typed_get::<Authorization<Bearer>>() else {
        return Err(AppError::unauthorized("Unauthorized"));
    };

    let claims = codec.verify(bearer.token()).map_err(|rejection| {
        tracing::debug!(reason = %rejection, "Bearer token rejected");
        AppError::from(rejection)
    })?;

    Ok(RequestContext::new(claims.principal()))
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Route guards have already verified the token.
        if let Some(ctx) = parts.extensions.get::<RequestContext>() {
            return Ok(AuthUser(ctx.clone()));
        }

        let ctx = authenticate(&parts.headers, &state.token_codec)?;
        Ok(AuthUser(ctx))
    }
}
