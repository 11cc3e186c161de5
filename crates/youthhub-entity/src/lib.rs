//! # youthhub-entity
//!
//! Domain entity models for YouthHub. Every struct in this crate represents
//! a database row, a joined read model, or a write payload. Row models
//! derive `sqlx::FromRow` and serialize with their column names, which is
//! the shape the public site and dashboards consume.

pub mod branch;
pub mod content;
pub mod event;
pub mod scope;
pub mod user;

pub use scope::BranchScope;
