//! Application settings persistence
//!
//! Greeting text, display and window preferences. Interaction progress is
//! never stored here.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Card greeting text
    #[serde(default)]
    pub greeting: GreetingSettings,
    /// Display and interface settings
    #[serde(default)]
    pub display: DisplaySettings,
    /// Initial window geometry
    #[serde(default)]
    pub window: WindowSettings,
}

/// Text shown on the card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GreetingSettings {
    pub title: String,
    pub recipient: String,
    pub date: String,
    pub candles_heading: String,
    pub balloons_heading: String,
    pub celebrate_label: String,
}

/// Display-related settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DisplaySettings {
    /// Dark mode (the card defaults to a white page)
    pub dark_mode: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub width: f32,
    pub height: f32,
}

impl Default for GreetingSettings {
    fn default() -> Self {
        Self {
            title: "Happy 25th Birthday".to_string(),
            recipient: "Narmeen Asghar".to_string(),
            date: "November 22nd".to_string(),
            candles_heading: "Light the Candles:".to_string(),
            balloons_heading: "Pop the Balloons:".to_string(),
            celebrate_label: "Now Celebrate!".to_string(),
        }
    }
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

impl WindowSettings {
    /// Window size with a sane minimum so the card always fits
    pub fn size(&self) -> (f32, f32) {
        (self.width.max(320.0), self.height.max(480.0))
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "birthday-wish", "BirthdayWish")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = Self::file_path() else {
            tracing::warn!("Could not determine config directory, using default settings");
            return Self::default();
        };
        match Self::load_from_file(&path) {
            Ok(settings) => {
                tracing::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(SettingsError::Io(e)) => {
                tracing::debug!("No settings at {} ({}), writing defaults", path.display(), e);
                let settings = Self::default();
                if let Err(e) = settings.save_to_file(&path) {
                    tracing::warn!("Failed to write default settings: {}", e);
                }
                settings
            }
            Err(e) => {
                tracing::warn!("Ignoring settings at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SettingsError::Io(e.to_string()))?;
        Ok(())
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}
