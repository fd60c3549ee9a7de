use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::app::infrastructure::error::{AppError, Result};
use crate::app::infrastructure::platform::detect_system_dark_mode;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ThemeMode {
    Light,
    Dark,
    SystemDefault,
}

impl ThemeMode {
    /// Whether this mode renders dark, asking the OS for `SystemDefault`.
    pub fn is_dark(&self) -> bool {
        match self {
            Self::Light => false,
            Self::Dark => true,
            Self::SystemDefault => detect_system_dark_mode(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_theme_mode")]
    pub theme_mode: ThemeMode,

    #[serde(default = "default_font_size")]
    pub font_size: u32,

    /// Unit preselected in the unit box at start-up
    #[serde(default)]
    pub default_unit: String,

    #[serde(default = "default_window_width")]
    pub window_width: i32,

    #[serde(default = "default_window_height")]
    pub window_height: i32,
}

const MIN_FONT_SIZE: u32 = 8;
const MAX_FONT_SIZE: u32 = 32;

fn default_theme_mode() -> ThemeMode {
    ThemeMode::SystemDefault
}

fn default_font_size() -> u32 {
    14
}

fn default_window_width() -> i32 {
    360
}

fn default_window_height() -> i32 {
    240
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme_mode: default_theme_mode(),
            font_size: default_font_size(),
            default_unit: String::new(),
            window_width: default_window_width(),
            window_height: default_window_height(),
        }
    }
}

impl AppSettings {
    /// Load settings from disk, or create default if not exists
    pub fn load() -> Self {
        Self::load_from(&Self::get_config_path())
    }

    /// Load settings from `path`. A missing file is created with defaults;
    /// an unreadable one is ignored.
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => {
                let parsed = serde_json::from_str::<Self>(&contents)
                    .map_err(AppError::from)
                    .and_then(|settings| settings.validate().map(|_| settings));
                match parsed {
                    Ok(settings) => settings,
                    Err(e) => {
                        tracing::warn!(path = %path.display(), error = %e, "ignoring settings file, using defaults");
                        Self::default()
                    }
                }
            }
            Err(_) => {
                let default = Self::default();
                if let Err(e) = default.save_to(path) {
                    tracing::warn!(path = %path.display(), error = %e, "could not write default settings");
                }
                default
            }
        }
    }

    /// Reject values the window cannot be built with.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_FONT_SIZE..=MAX_FONT_SIZE).contains(&self.font_size) {
            return Err(AppError::Settings(format!(
                "font size {} is outside {}..={}",
                self.font_size, MIN_FONT_SIZE, MAX_FONT_SIZE
            )));
        }
        if self.window_width <= 0 || self.window_height <= 0 {
            return Err(AppError::Settings(format!(
                "window size {}x{} must be positive",
                self.window_width, self.window_height
            )));
        }
        Ok(())
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;

        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("area-calculator");
        path.push("settings.json");
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.theme_mode, ThemeMode::SystemDefault);
        assert_eq!(settings.font_size, 14);
        assert!(settings.default_unit.is_empty());
        assert_eq!(settings.window_width, 360);
        assert_eq!(settings.window_height, 240);
    }

    #[test]
    fn test_partial_config() {
        let json = r#"{"default_unit": "cm"}"#;
        let settings: AppSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.default_unit, "cm");
        assert_eq!(settings.font_size, 14);
        assert_eq!(settings.theme_mode, ThemeMode::SystemDefault);
    }

    #[test]
    fn test_theme_mode_serialization() {
        let settings = AppSettings {
            theme_mode: ThemeMode::Dark,
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("\"Dark\""));
    }

    #[test]
    fn test_explicit_theme_modes() {
        assert!(ThemeMode::Dark.is_dark());
        assert!(!ThemeMode::Light.is_dark());
    }

    #[test]
    fn test_validate() {
        assert!(AppSettings::default().validate().is_ok());

        let tiny = AppSettings { font_size: 2, ..Default::default() };
        assert!(matches!(tiny.validate(), Err(AppError::Settings(_))));

        let flat = AppSettings { window_height: 0, ..Default::default() };
        let err = flat.validate().unwrap_err();
        assert_eq!(err.to_string(), "Settings error: window size 360x0 must be positive");
    }

    #[test]
    fn test_load_invalid_values_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"font_size": 500, "default_unit": "m"}"#).unwrap();

        assert_eq!(AppSettings::load_from(&path), AppSettings::default());
    }

    #[test]
    fn test_save_and_load_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let settings = AppSettings {
            theme_mode: ThemeMode::Light,
            font_size: 18,
            default_unit: "ft".to_string(),
            window_width: 400,
            window_height: 300,
        };
        settings.save_to(&path).unwrap();

        assert_eq!(AppSettings::load_from(&path), settings);
    }

    #[test]
    fn test_load_missing_file_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let settings = AppSettings::load_from(&path);
        assert_eq!(settings, AppSettings::default());
        assert!(path.exists());
    }

    #[test]
    fn test_load_corrupt_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();

        assert_eq!(AppSettings::load_from(&path), AppSettings::default());
    }
}
