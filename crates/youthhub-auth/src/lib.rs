//! # youthhub-auth
//!
//! Authentication and authorization core for YouthHub.
//!
//! ## Modules
//!
//! - `password`: Argon2id hashing with legacy digest support, password policy
//! - `jwt`: HS256 session token issue and verification
//! - `rbac`: role gate for route groups
//! - `access`: branch scope resolution for admins and superadmins

pub mod access;
pub mod jwt;
pub mod password;
pub mod rbac;

pub use access::resolve_scope;
pub use jwt::{Claims, Principal, TokenCodec, TokenRejection};
pub use password::{PasswordHasher, PasswordValidator};
pub use rbac::require_role;
