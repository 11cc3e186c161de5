//! Branch use cases.

pub mod service;

pub use service::BranchService;
