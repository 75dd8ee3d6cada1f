//! Persistent storage
//!
//! This module handles all data persistence: the key-value backends, the
//! record store built on top of them, and application settings.

pub mod backend;
pub mod records;
pub mod settings;

pub use backend::{FileBackend, KeyValueBackend, MemoryBackend};
pub use records::{Collection, RecordStore};

use std::path::PathBuf;
use thiserror::Error;

/// Key holding the logged-in user's email.
pub const CURRENT_USER_KEY: &str = "currentUser";
/// Key holding the theme preference (`"light"` or `"dark"`).
pub const THEME_KEY: &str = "theme";

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Could not determine a data directory for this platform")]
    NoDataDir,
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),
}

/// Get the application data directory
///
/// Linux: ~/.local/share/tragos
/// macOS: ~/Library/Application Support/com.Tragos.tragos
/// Windows: %APPDATA%\Tragos\tragos\data
pub fn get_data_dir() -> Result<PathBuf, StorageError> {
    directories::ProjectDirs::from("com", "Tragos", "tragos")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or(StorageError::NoDataDir)
}
