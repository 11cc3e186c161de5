//! Query string parameters.

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use youthhub_core::error::AppError;
use youthhub_core::types::BranchId;
use youthhub_entity::event::EventFilter;

use super::path::parse_id;
use crate::error::ApiError;

/// Query string deserialized into `T`.
///
/// Unlike `axum::extract::Query`, a structurally bad query string such as
/// a repeated key is answered with the JSON error body.
#[derive(Debug, Clone)]
pub struct QueryParams<T>(pub T);

impl<T, S> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::try_from_uri(&parts.uri) {
            Ok(Query(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!(error = %rejection, "Rejected query string");
                Err(AppError::validation("Invalid query string").into())
            }
        }
    }
}

/// `?branchId=` on dashboard routes.
///
/// Values stay raw strings so a malformed id becomes a JSON `400` instead
/// of a plain-text query rejection.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchQuery {
    /// Requested branch id.
    pub branch_id: Option<String>,
}

impl BranchQuery {
    /// The requested branch, if any.
    pub fn requested(&self) -> Result<Option<BranchId>, AppError> {
        parse_optional_branch(self.branch_id.as_deref())
    }
}

/// Filters on the public event listing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventQuery {
    pub branch_id: Option<String>,
    pub month: Option<String>,
    pub year: Option<String>,
}

impl EventQuery {
    /// Parses the raw parameters into a repository filter.
    pub fn to_filter(&self) -> Result<EventFilter, AppError> {
        let month = match non_empty(self.month.as_deref()) {
            None => None,
            Some(raw) => match raw.parse::<u32>() {
                Ok(m) if (1..=12).contains(&m) => Some(m),
                _ => return Err(AppError::validation("Invalid month")),
            },
        };
        let year = match non_empty(self.year.as_deref()) {
            None => None,
            Some(raw) => match raw.parse::<i32>() {
                Ok(y) if (1..=9999).contains(&y) => Some(y),
                _ => return Err(AppError::validation("Invalid year")),
            },
        };

        Ok(EventFilter {
            branch_id: parse_optional_branch(self.branch_id.as_deref())?,
            month,
            year,
        })
    }
}

fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}

fn parse_optional_branch(raw: Option<&str>) -> Result<Option<BranchId>, AppError> {
    non_empty(raw).map(parse_id::<BranchId>).transpose()
}
