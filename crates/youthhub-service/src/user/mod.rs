//! Account management.

pub mod admin;

pub use admin::{AdminUserService, CreateAdminRequest};
