//! # youthhub-database
//!
//! SQLite connection management, schema bootstrap, and the repositories
//! backing every YouthHub table.

pub mod bootstrap;
pub mod connection;
pub mod repositories;

pub use bootstrap::{BootstrapAccount, BootstrapReport, DatabaseBootstrap};
pub use connection::DatabasePool;
