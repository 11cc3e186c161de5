//! Validated image uploads namespaced by branch.

use std::sync::Arc;

use bytes::Bytes;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use youthhub_core::config::StorageConfig;
use youthhub_core::error::AppError;
use youthhub_core::result::AppResult;
use youthhub_core::traits::storage::{ByteStream, StorageProvider};
use youthhub_core::types::BranchId;
use youthhub_storage::MediaType;

use crate::context::RequestContext;

/// Content type served for objects whose extension is not recognized.
const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Where an upload landed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredMedia {
    /// Storage key, `branches/{branch}/{uuid}.{ext}`.
    pub key: String,
    /// Public URL of the object.
    pub url: String,
    /// Canonical MIME type.
    pub content_type: String,
    /// Size in bytes.
    pub size: u64,
}

/// Accepts image uploads and serves stored media.
#[derive(Clone)]
pub struct UploadService {
    storage: Arc<dyn StorageProvider>,
    config: StorageConfig,
}

impl std::fmt::Debug for UploadService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadService")
            .field("provider", &self.storage.provider_type())
            .finish()
    }
}

impl UploadService {
    /// Creates a new upload service.
    pub fn new(storage: Arc<dyn StorageProvider>, config: StorageConfig) -> Self {
        Self { storage, config }
    }

    /// Validates and stores an image in the caller's branch namespace.
    ///
    /// Type and size are both checked before anything is written.
    pub async fn upload(
        &self,
        ctx: &RequestContext,
        requested: Option<BranchId>,
        content_type: Option<&str>,
        data: Bytes,
    ) -> AppResult<StoredMedia> {
        let branch_id = ctx.scope(requested)?.require_branch()?;

        if data.is_empty() {
            return Err(AppError::validation("File is required"));
        }
        let media = self.accept_type(content_type)?;
        let size = data.len() as u64;
        if size > self.config.max_upload_size_bytes {
            return Err(AppError::validation(format!(
                "File exceeds the maximum size of {} bytes",
                self.config.max_upload_size_bytes
            )));
        }

        let key = format!(
            "branches/{branch_id}/{}.{}",
            Uuid::new_v4(),
            media.extension()
        );
        self.storage.write(&key, data).await?;

        info!(key = %key, size, user_id = %ctx.user_id(), "Upload stored");
        Ok(StoredMedia {
            url: self.public_url(&key),
            key,
            content_type: media.mime().to_string(),
            size,
        })
    }

    /// Opens a stored object along with the content type to serve it with.
    pub async fn open(&self, key: &str) -> AppResult<(&'static str, ByteStream)> {
        let content_type = MediaType::from_key(key).map_or(FALLBACK_CONTENT_TYPE, |m| m.mime());
        let stream = self.storage.read(key).await?;
        Ok((content_type, stream))
    }

    /// Public URL for a storage key.
    pub fn public_url(&self, key: &str) -> String {
        format!("{}/{key}", self.config.public_base_url.trim_end_matches('/'))
    }

    fn accept_type(&self, content_type: Option<&str>) -> AppResult<MediaType> {
        let unsupported = || AppError::validation("Unsupported file type");
        let media = content_type
            .and_then(MediaType::from_mime)
            .ok_or_else(unsupported)?;
        let allowed = self
            .config
            .allowed_mime_types
            .iter()
            .any(|m| m.eq_ignore_ascii_case(media.mime()));
        if allowed { Ok(media) } else { Err(unsupported()) }
    }
}
