//! Custom Axum extractors.

pub mod auth;
pub mod json;
pub mod path;
pub mod query;

pub use auth::AuthUser;
pub use json::JsonBody;
pub use query::{BranchQuery, EventQuery, QueryParams};
