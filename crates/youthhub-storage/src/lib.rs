//! # youthhub-storage
//!
//! Object storage for uploaded event images. Objects are addressed by
//! `/`-separated keys namespaced per branch.

pub mod media;
pub mod providers;

pub use media::MediaType;
pub use providers::LocalStorageProvider;
