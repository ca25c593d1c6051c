//! Storage for uploaded news images.

use std::path::{Path, PathBuf};

use mylearn_core::uploads::accepted_image_name;

use crate::config::ServerConfig;

/// An image accepted for storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredImage {
    /// Where the file was written.
    pub file_path: PathBuf,
    /// Value recorded in `news.image_path`.
    pub public_path: String,
}

/// Write an uploaded image if its filename passes the upload policy.
///
/// Returns `Ok(None)` when the upload is silently dropped (disallowed
/// extension, or a name that sanitizes to nothing). An existing file with
/// the same sanitized name is overwritten.
pub async fn store_image(
    config: &ServerConfig,
    original_name: &str,
    data: &[u8],
) -> std::io::Result<Option<StoredImage>> {
    let Some(filename) = accepted_image_name(original_name) else {
        tracing::debug!(filename = %original_name, "Dropping upload with disallowed name");
        return Ok(None);
    };

    let dir = Path::new(&config.upload_dir);
    tokio::fs::create_dir_all(dir).await?;

    let file_path = dir.join(&filename);
    tokio::fs::write(&file_path, data).await?;

    let public_path = format!(
        "{}/{}",
        config.upload_url_prefix.trim_end_matches('/'),
        filename
    );
    tracing::info!(path = %file_path.display(), bytes = data.len(), "Stored uploaded image");

    Ok(Some(StoredImage {
        file_path,
        public_path,
    }))
}

/// Whether a file can be created in the upload directory right now.
///
/// Creates the directory if needed and writes then removes a marker file.
pub async fn upload_dir_writable(config: &ServerConfig) -> bool {
    let dir = Path::new(&config.upload_dir);
    let marker = dir.join(".write-check");

    let result = async {
        tokio::fs::create_dir_all(dir).await?;
        tokio::fs::write(&marker, b"").await?;
        tokio::fs::remove_file(&marker).await
    }
    .await;

    if let Err(e) = &result {
        tracing::warn!(dir = %dir.display(), error = %e, "Upload directory is not writable");
    }
    result.is_ok()
}

/// Remove an image whose news row was never stored.
pub async fn discard_image(image: &StoredImage) {
    match tokio::fs::remove_file(&image.file_path).await {
        Ok(()) => {
            tracing::debug!(path = %image.file_path.display(), "Removed orphaned upload");
        }
        Err(e) => {
            tracing::warn!(
                path = %image.file_path.display(),
                error = %e,
                "Failed to remove orphaned upload"
            );
        }
    }
}
