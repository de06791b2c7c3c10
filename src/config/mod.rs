// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[fonts]` - User-registered custom fonts
//! - `[storage]` - Storage directory override
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ICED_SETTINGS_CONFIG_DIR` environment variable (or `--config-dir`)
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_settings::config::{self, Config};
//!
//! let (mut config, _warning) = config::load();
//! config.general.language = Some("fr".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Warning key returned when an existing config file cannot be parsed.
pub const LOAD_ERROR_WARNING: &str = "notification-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode. `None` until the user picks one.
    #[serde(
        default,
        deserialize_with = "deserialize_theme_mode",
        skip_serializing_if = "Option::is_none"
    )]
    pub theme_mode: Option<ThemeMode>,
}

/// A font file registered by the user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomFont {
    /// Display name, the file stem of `path`.
    pub name: String,
    pub path: PathBuf,
}

impl CustomFont {
    /// Builds an entry from a font file path. Returns `None` when the path has
    /// no usable file stem.
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_stem()?.to_str()?.trim();
        if name.is_empty() {
            return None;
        }
        Some(Self {
            name: name.to_string(),
            path: path.to_path_buf(),
        })
    }
}

/// Custom fonts settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FontsConfig {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom: Vec<CustomFont>,
}

/// Storage location settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StorageConfig {
    /// User-selected storage directory. `None` means the platform data dir.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

// =============================================================================
// Main Config Struct
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub fonts: FontsConfig,

    #[serde(default)]
    pub storage: StorageConfig,
}

impl Config {
    /// Theme mode to start with: the stored one, else the OS preference.
    pub fn effective_theme_mode(&self) -> ThemeMode {
        self.general
            .theme_mode
            .unwrap_or_else(ThemeMode::from_system)
    }
}

// Unknown values, strings or not, fall back to light rather than rejecting
// the whole file.
fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<Option<ThemeMode>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<toml::Value>::deserialize(deserializer)?;
    Ok(raw.map(|raw| {
        let parsed = match &raw {
            toml::Value::String(token) => token.to_lowercase().parse::<ThemeMode>(),
            other => Err(Error::Config(format!("invalid theme_mode: {other}"))),
        };
        parsed.unwrap_or_else(|error| {
            tracing::warn!(%error, "unrecognized theme mode, using {}", FALLBACK_THEME_MODE);
            FALLBACK_THEME_MODE
        })
    }))
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => {
                    tracing::debug!(path = %path.display(), "loaded config");
                    return (config, None);
                }
                Err(error) => {
                    tracing::warn!(path = %path.display(), %error, "failed to load config, using defaults");
                    return (Config::default(), Some(LOAD_ERROR_WARNING.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_config() -> Config {
        Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: Some(ThemeMode::Dark),
            },
            fonts: FontsConfig {
                custom: vec![CustomFont {
                    name: "FiraCode".to_string(),
                    path: PathBuf::from("/fonts/FiraCode.ttf"),
                }],
            },
            storage: StorageConfig {
                path: Some(PathBuf::from("/data/elsewhere")),
            },
        }
    }

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = sample_config();
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert!(config.general.language.is_none());
        assert!(config.general.theme_mode.is_none());
        assert!(config.fonts.custom.is_empty());
        assert!(config.storage.path.is_none());
    }

    #[test]
    fn unknown_theme_mode_falls_back_to_light() {
        let config: Config = toml::from_str("[general]\ntheme_mode = \"sepia\"\n").expect("parse");
        assert_eq!(config.general.theme_mode, Some(ThemeMode::Light));
    }

    #[test]
    fn non_string_theme_mode_keeps_the_rest_of_the_file() {
        let content = "[general]\nlanguage = \"fr\"\ntheme_mode = 1\n\n[storage]\npath = \"/x\"\n";
        let config: Config = toml::from_str(content).expect("bad theme_mode must not reject the file");
        assert_eq!(config.general.language.as_deref(), Some("fr"));
        assert_eq!(config.general.theme_mode, Some(ThemeMode::Light));
        assert_eq!(config.storage.path, Some(PathBuf::from("/x")));

        let config: Config = toml::from_str("[general]\ntheme_mode = true\n").expect("parse");
        assert_eq!(config.general.theme_mode, Some(ThemeMode::Light));
    }

    #[test]
    fn theme_mode_is_case_insensitive_in_file() {
        let config: Config = toml::from_str("[general]\ntheme_mode = \"Dark\"\n").expect("parse");
        assert_eq!(config.general.theme_mode, Some(ThemeMode::Dark));
    }

    #[test]
    fn stored_theme_mode_wins_over_system() {
        let mut config = Config::default();
        config.general.theme_mode = Some(ThemeMode::Dark);
        assert_eq!(config.effective_theme_mode(), ThemeMode::Dark);
    }

    #[test]
    fn saved_config_uses_sectioned_format() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        save_to_path(&sample_config(), &config_path).expect("save");

        let content = fs::read_to_string(&config_path).expect("read");
        assert!(content.contains("[general]"));
        assert!(content.contains("theme_mode = \"dark\""));
        assert!(content.contains("[[fonts.custom]]"));
        assert!(content.contains("[storage]"));
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(base_dir.join(CONFIG_FILE), "not = valid = toml").expect("write file");

        let (config, warning) = load_with_override(Some(base_dir));
        assert_eq!(warning.as_deref(), Some(LOAD_ERROR_WARNING));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn save_with_override_and_load_with_override_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().join("deep").join("path");

        save_with_override(&sample_config(), Some(base_dir.clone())).expect("save");
        let (loaded, warning) = load_with_override(Some(base_dir));

        assert!(warning.is_none());
        assert_eq!(loaded, sample_config());
    }

    #[test]
    fn custom_font_name_comes_from_file_stem() {
        let font = CustomFont::from_path(Path::new("/fonts/Inter-Regular.otf")).expect("font");
        assert_eq!(font.name, "Inter-Regular");
        assert!(CustomFont::from_path(Path::new("/")).is_none());
    }
}
