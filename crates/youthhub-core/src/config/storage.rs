//! Upload storage configuration.

use serde::{Deserialize, Serialize};

/// Object storage settings for branch media uploads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Root directory of the local storage provider.
    #[serde(default = "default_root_path")]
    pub root_path: String,
    /// URL prefix under which stored objects are served.
    #[serde(default = "default_public_base_url")]
    pub public_base_url: String,
    /// Maximum accepted upload size in bytes.
    #[serde(default = "default_max_upload_size")]
    pub max_upload_size_bytes: u64,
    /// MIME types accepted for upload.
    #[serde(default = "default_allowed_mime_types")]
    pub allowed_mime_types: Vec<String>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            root_path: default_root_path(),
            public_base_url: default_public_base_url(),
            max_upload_size_bytes: default_max_upload_size(),
            allowed_mime_types: default_allowed_mime_types(),
        }
    }
}

fn default_root_path() -> String {
    "data/uploads".to_string()
}

fn default_public_base_url() -> String {
    "/api/public/media".to_string()
}

fn default_max_upload_size() -> u64 {
    5_242_880
}

fn default_allowed_mime_types() -> Vec<String> {
    vec![
        "image/jpeg".to_string(),
        "image/png".to_string(),
        "image/webp".to_string(),
    ]
}
