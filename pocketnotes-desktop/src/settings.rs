//! Application settings for PocketNotes.
//!
//! Preferences (theme, log level, field limits) are read from a JSON file at
//! an OS-appropriate location. Notes are never written here; they live only
//! in memory.

use pocketnotes_core::NoteLimits;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Colour scheme for the main window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Dark,
    Light,
}

/// Persisted application settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppSettings {
    pub theme: ThemeChoice,
    /// One of `trace`, `debug`, `info`, `warn`, `error`.
    pub log_level: String,
    /// Field-length bounds enforced when saving a note.
    pub limits: NoteLimits,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme: ThemeChoice::default(),
            log_level: default_log_level().to_string(),
            limits: NoteLimits::default(),
        }
    }
}

/// `debug` for debug builds, `info` for release builds.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

/// Returns the directory holding `settings.json` and the `logs/` folder.
///
/// - macOS / Linux: `~/.config/pocketnotes`
/// - Windows: `%APPDATA%/PocketNotes`
pub fn config_dir() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        base.join("PocketNotes")
    }
    #[cfg(not(target_os = "windows"))]
    {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.join(".config").join("pocketnotes")
    }
}

/// Returns the path to the settings JSON file.
pub fn settings_file_path() -> PathBuf {
    config_dir().join("settings.json")
}

/// Returns the directory rotating log files are written to.
pub fn log_directory() -> PathBuf {
    config_dir().join("logs")
}

/// Loads settings from the default location.
///
/// See [`load_settings_from`] for the meaning of the returned warning.
pub fn load_settings() -> (AppSettings, Option<String>) {
    load_settings_from(&settings_file_path())
}

/// Loads settings from `path`; returns defaults if the file is missing or corrupt.
///
/// Inverted title bounds are treated as corrupt and replaced by the default
/// limits. Anything that was discarded is described in the returned warning,
/// which the caller logs once logging is up.
pub fn load_settings_from(path: &Path) -> (AppSettings, Option<String>) {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(_) => return (AppSettings::default(), None),
    };

    let mut settings: AppSettings = match serde_json::from_str(&content) {
        Ok(settings) => settings,
        Err(e) => {
            return (
                AppSettings::default(),
                Some(format!("ignoring unreadable settings {}: {e}", path.display())),
            )
        }
    };

    if !settings.limits.is_consistent() {
        let warning = format!(
            "ignoring inconsistent limits in {}: {:?}",
            path.display(),
            settings.limits
        );
        settings.limits = NoteLimits::default();
        return (settings, Some(warning));
    }

    (settings, None)
}
