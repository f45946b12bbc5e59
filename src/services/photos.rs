//! Equipment photo storage on the local filesystem

use std::path::PathBuf;

use crate::error::{AppError, AppResult};

/// Stores one photo per equipment item under the configured directory.
/// Files are served back under `/photos/`.
#[derive(Clone)]
pub struct PhotoStore {
    dir: PathBuf,
}

impl PhotoStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Write the uploaded bytes and return the public URL path.
    /// The stored name is derived from the equipment id, so re-uploading
    /// replaces the previous photo.
    pub async fn save(
        &self,
        equipment_id: &str,
        original_name: &str,
        bytes: &[u8],
    ) -> AppResult<String> {
        let ext: String = std::path::Path::new(original_name)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("jpg")
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .take(8)
            .collect();
        let ext = if ext.is_empty() { "jpg".to_string() } else { ext };

        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| AppError::Internal(format!("Cannot create photo directory: {}", e)))?;

        let file_name = format!("{}.{}", equipment_id, ext);
        tokio::fs::write(self.dir.join(&file_name), bytes)
            .await
            .map_err(|e| AppError::Internal(format!("Cannot store photo: {}", e)))?;

        Ok(format!("/photos/{}", file_name))
    }

    /// Remove the stored file behind a photo URL. A file that is already
    /// gone is not an error.
    pub async fn remove(&self, photo_url: &str) -> AppResult<()> {
        let Some(file_name) = photo_url.rsplit('/').next() else {
            return Ok(());
        };
        if file_name.is_empty() || file_name.contains("..") {
            return Ok(());
        }

        match tokio::fs::remove_file(self.dir.join(file_name)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::Internal(format!("Cannot remove photo: {}", e))),
        }
    }
}
