//! # youthhub-service
//!
//! Business logic service layer for YouthHub. Each service orchestrates
//! repositories, storage, and the auth core to implement one group of
//! use cases.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod auth;
pub mod branch;
pub mod content;
pub mod context;
pub mod event;
pub mod setup;
pub mod upload;
pub mod user;

pub use auth::{AuthService, LoginOutcome};
pub use branch::BranchService;
pub use content::ContentService;
pub use context::RequestContext;
pub use event::EventService;
pub use setup::database_bootstrap;
pub use upload::{StoredMedia, UploadService};
pub use user::{AdminUserService, CreateAdminRequest};
