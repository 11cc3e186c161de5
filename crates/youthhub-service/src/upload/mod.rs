//! Image uploads for event posters.

pub mod service;

pub use service::{StoredMedia, UploadService};
