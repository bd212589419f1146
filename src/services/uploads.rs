//! Upload reception and best-effort file discard

use axum::body::Bytes;
use uuid::Uuid;

use crate::{
    config::UploadsConfig,
    error::{AppError, AppResult},
    models::UploadedFile,
};

/// Accepted content types and their on-disk extensions
const MIME_TYPE_MAP: &[(&str, &str)] = &[
    ("image/png", "png"),
    ("image/jpeg", "jpeg"),
    ("image/jpg", "jpg"),
];

#[derive(Clone)]
pub struct UploadsService {
    config: UploadsConfig,
}

impl UploadsService {
    pub fn new(config: UploadsConfig) -> Self {
        Self { config }
    }

    /// Maximum number of files accepted by the multi-upload endpoint
    pub fn max_files(&self) -> usize {
        self.config.max_files
    }

    /// Create the destination directory if it does not exist yet
    pub async fn ensure_destination(&self) -> AppResult<()> {
        tokio::fs::create_dir_all(&self.config.dir)
            .await
            .map_err(|e| {
                AppError::Internal(format!(
                    "Failed to create upload directory {}: {}",
                    self.config.dir.display(),
                    e
                ))
            })
    }

    /// Write one received file under a generated unique filename.
    /// Files whose declared content type is not png/jpeg/jpg are
    /// rejected before anything touches the disk.
    pub async fn store(
        &self,
        original_name: Option<String>,
        content_type: &str,
        data: Bytes,
    ) -> AppResult<UploadedFile> {
        let ext = extension_for(content_type).ok_or_else(|| {
            AppError::UnsupportedMediaType(
                "Only .jpg, .jpeg and .png images are supported".to_string(),
            )
        })?;

        let filename = format!("{}.{}", Uuid::new_v4(), ext);
        let path = self.config.dir.join(&filename);
        tokio::fs::write(&path, &data)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to write upload {}: {}", filename, e)))?;

        Ok(UploadedFile {
            original_name,
            filename,
            path: path.to_string_lossy().into_owned(),
            content_type: content_type.to_string(),
            size: data.len() as u64,
        })
    }

    /// Best-effort deletion of a previously uploaded file. A failed
    /// unlink is logged and swallowed; the caller still sees success.
    pub async fn discard(&self, path: &str) {
        if let Err(e) = tokio::fs::remove_file(path).await {
            tracing::warn!("Failed to delete image {}: {}", path, e);
        }
    }
}

fn extension_for(content_type: &str) -> Option<&'static str> {
    MIME_TYPE_MAP
        .iter()
        .find(|(mime, _)| *mime == content_type)
        .map(|(_, ext)| *ext)
}
