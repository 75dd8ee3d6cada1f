//! Settings storage
//!
//! Manages persistence of application settings. The theme preference is not
//! stored here; it lives in the record store under its own key.

use crate::storage::{get_data_dir, StorageError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_DRINK_API_URL: &str = "https://www.thecocktaildb.com/api/json/v1/1/random.php";

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    /// Endpoint returning a random drink
    #[serde(default = "default_drink_api_url")]
    pub drink_api_url: String,
    /// Timeout for the drink request, in seconds (1 - 60)
    #[serde(default = "default_drink_timeout_secs")]
    pub drink_timeout_secs: u64,
    /// How long notices stay on screen, in milliseconds (500 - 15000)
    #[serde(default = "default_notice_timeout_ms")]
    pub notice_timeout_ms: u64,
    /// Main window title
    #[serde(default = "default_window_title")]
    pub window_title: String,
}

fn default_drink_api_url() -> String {
    DEFAULT_DRINK_API_URL.to_string()
}

fn default_drink_timeout_secs() -> u64 {
    8
}

fn default_notice_timeout_ms() -> u64 {
    crate::notice::DEFAULT_NOTICE_TIMEOUT.as_millis() as u64
}

fn default_window_title() -> String {
    "Tragos".to_string()
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            drink_api_url: default_drink_api_url(),
            drink_timeout_secs: default_drink_timeout_secs(),
            notice_timeout_ms: default_notice_timeout_ms(),
            window_title: default_window_title(),
        }
    }
}

impl AppSettings {
    /// Validate settings values
    ///
    /// Clamps numeric values into range and restores defaults for blank strings.
    pub fn validate(&mut self) {
        self.drink_timeout_secs = self.drink_timeout_secs.clamp(1, 60);
        self.notice_timeout_ms = self.notice_timeout_ms.clamp(500, 15_000);

        let url = self.drink_api_url.trim();
        if url.is_empty() || !(url.starts_with("http://") || url.starts_with("https://")) {
            tracing::warn!("Invalid drink endpoint '{}', using default", self.drink_api_url);
            self.drink_api_url = default_drink_api_url();
        }

        if self.window_title.trim().is_empty() {
            self.window_title = default_window_title();
        }
    }
}

/// Get the settings file path
fn get_settings_path() -> Result<PathBuf, StorageError> {
    Ok(get_data_dir()?.join("settings.json"))
}

/// Load settings from disk
///
/// Returns default settings if the file doesn't exist or is corrupted
pub fn load_settings() -> AppSettings {
    match load_settings_internal() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!("Failed to load settings, using defaults: {}", e);
            AppSettings::default()
        }
    }
}

fn load_settings_internal() -> Result<AppSettings, StorageError> {
    let path = get_settings_path()?;

    if !path.exists() {
        tracing::info!("Settings file not found, writing defaults to {}", path.display());
        let settings = AppSettings::default();
        if let Err(e) = save_settings(&settings) {
            tracing::warn!("Failed to write default settings: {}", e);
        }
        return Ok(settings);
    }

    let json = fs::read_to_string(&path)?;
    let mut settings: AppSettings = serde_json::from_str(&json)?;
    settings.validate();

    tracing::debug!("Loaded settings from disk");
    Ok(settings)
}

/// Save settings to disk
pub fn save_settings(settings: &AppSettings) -> Result<(), StorageError> {
    let path = get_settings_path()?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;

    tracing::debug!("Saved settings to disk");
    Ok(())
}
