//! Review photos
//!
//! A photo is stored as a string: a remote URL, a bundled asset path, or a
//! `data:` URI embedding a local image file.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Used when a review is published without a photo.
pub const DEFAULT_PHOTO: &str = "images/tragos.jpg";

/// Larger files are refused rather than embedded in the store.
pub const MAX_EMBED_BYTES: u64 = 5 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum PhotoError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unsupported image type: {0}")]
    UnsupportedType(String),
    #[error("image too large ({0} bytes)")]
    TooLarge(u64),
}

/// Turn photo form input into the stored photo string.
pub async fn resolve(input: &str) -> Result<String, PhotoError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(DEFAULT_PHOTO.to_string());
    }
    if is_reference(input) {
        return Ok(input.to_string());
    }
    embed_file(Path::new(input)).await
}

/// Inputs stored as given instead of being read from disk.
fn is_reference(input: &str) -> bool {
    ["http://", "https://", "data:", "images/"]
        .iter()
        .any(|prefix| input.starts_with(prefix))
}

fn mime_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "svg" => Some("image/svg+xml"),
        _ => None,
    }
}

/// Read an image file and encode it as a `data:` URI.
pub async fn embed_file(path: &Path) -> Result<String, PhotoError> {
    let mime = mime_for(path)
        .ok_or_else(|| PhotoError::UnsupportedType(path.display().to_string()))?;

    let read_error = |source| PhotoError::Read {
        path: path.to_path_buf(),
        source,
    };
    let size = tokio::fs::metadata(path).await.map_err(read_error)?.len();
    if size > MAX_EMBED_BYTES {
        return Err(PhotoError::TooLarge(size));
    }
    let bytes = tokio::fs::read(path).await.map_err(read_error)?;

    tracing::debug!("Embedded photo {} ({} bytes)", path.display(), bytes.len());
    Ok(format!("data:{};base64,{}", mime, STANDARD.encode(bytes)))
}
