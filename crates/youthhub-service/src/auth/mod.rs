//! Login and token issuance.

pub mod service;

pub use service::{AuthService, LoginOutcome};
