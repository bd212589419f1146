//! Metadata describing a received upload

use serde::Serialize;
use utoipa::ToSchema;

/// Description of a file written by the upload reception endpoints.
/// Linking the stored path into a tourist record is the caller's job.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadedFile {
    /// Filename as sent by the client, when provided
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_name: Option<String>,
    /// Generated unique filename on disk
    pub filename: String,
    /// Full destination path, suitable for the record's `image`/`images` fields
    pub path: String,
    pub content_type: String,
    /// Size in bytes
    pub size: u64,
}
