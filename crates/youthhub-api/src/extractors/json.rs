//! Lenient JSON body extractor.

use std::convert::Infallible;

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

/// A JSON request body that may be absent.
///
/// A body that is missing, has the wrong content type, or fails to parse
/// becomes `None`; handlers answer that with their own field checks.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub Option<T>);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(Some(value))),
            Err(rejection) => {
                tracing::debug!(error = %rejection, "Ignoring unreadable JSON body");
                Ok(Self(None))
            }
        }
    }
}
