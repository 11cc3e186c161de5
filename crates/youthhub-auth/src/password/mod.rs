//! Password hashing and policy enforcement.

pub mod hasher;
pub mod validator;

pub use hasher::{PasswordHasher, is_legacy_digest, legacy_digest};
pub use validator::PasswordValidator;
