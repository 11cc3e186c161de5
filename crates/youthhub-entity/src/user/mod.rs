//! User account entities.

pub mod model;
pub mod role;

pub use model::{AdminListing, CreateUser, User};
pub use role::UserRole;
