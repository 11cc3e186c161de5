//! Branch-level data access rules.

pub mod scope;

pub use scope::resolve_scope;
