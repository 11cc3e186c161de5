//! Core traits defined in `youthhub-core` and implemented by other crates.

pub mod storage;

pub use storage::StorageProvider;
