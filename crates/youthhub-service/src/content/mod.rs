//! Site content use cases.

pub mod service;

pub use service::ContentService;
