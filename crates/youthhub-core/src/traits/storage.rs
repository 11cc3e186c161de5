//! Storage provider trait for pluggable object storage backends.

use std::pin::Pin;

use async_trait::async_trait;
use bytes::Bytes;
use futures::Stream;

use crate::result::AppResult;

/// A byte stream type used for reading object contents.
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, std::io::Error>> + Send>>;

/// Trait for object storage backends holding uploaded media.
///
/// Keys are `/`-separated relative paths such as
/// `branches/3/5f0c....png`. Implementations must refuse keys that would
/// resolve outside their root.
#[async_trait]
pub trait StorageProvider: Send + Sync + std::fmt::Debug + 'static {
    /// Return the provider type name (e.g., "local").
    fn provider_type(&self) -> &str;

    /// Check whether the provider is healthy and reachable.
    async fn health_check(&self) -> AppResult<bool>;

    /// Read an object and return its byte stream.
    ///
    /// Keys naming anything other than a regular file are not found.
    async fn read(&self, key: &str) -> AppResult<ByteStream>;

    /// Write bytes to the object at the given key, replacing any previous content.
    async fn write(&self, key: &str, data: Bytes) -> AppResult<()>;
}
