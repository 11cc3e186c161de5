//! # youthhub-api
//!
//! HTTP API layer for YouthHub built on Axum.
//!
//! Provides the public, admin, and superadmin REST endpoints, the role
//! guard middleware, extractors, DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, build_state};
pub use error::ApiError;
pub use state::AppState;
