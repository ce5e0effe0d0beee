// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! snackbar preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[snackbar]` - Dismiss behavior and layout
//! - `[colors]` - Hex overrides for the named background colors
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` or set `ICED_SNACKBAR_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_snackbar::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.snackbar.dismiss_after_secs = Some(8.0);
//!
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::snackbar::{parse_hex, Behavior, NamedColors};
use crate::ui::state::DismissDelay;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            theme_mode: default_theme_mode(),
        }
    }
}

/// Snackbar dismiss behavior and layout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SnackbarConfig {
    /// Whether tapping the surface hides the snackbar.
    #[serde(
        default = "default_dismiss_on_tap",
        skip_serializing_if = "Option::is_none"
    )]
    pub dismiss_on_tap: Option<bool>,

    /// Whether the snackbar hides itself after `dismiss_after_secs`.
    #[serde(
        default = "default_auto_dismiss",
        skip_serializing_if = "Option::is_none"
    )]
    pub auto_dismiss: Option<bool>,

    /// Auto-dismiss delay in seconds.
    #[serde(
        default = "default_dismiss_after_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub dismiss_after_secs: Option<f32>,

    /// Extra space below the content, for hosts with a bottom bar.
    #[serde(
        default = "default_extra_bottom_padding",
        skip_serializing_if = "Option::is_none"
    )]
    pub extra_bottom_padding: Option<f32>,
}

impl Default for SnackbarConfig {
    fn default() -> Self {
        Self {
            dismiss_on_tap: default_dismiss_on_tap(),
            auto_dismiss: default_auto_dismiss(),
            dismiss_after_secs: default_dismiss_after_secs(),
            extra_bottom_padding: default_extra_bottom_padding(),
        }
    }
}

/// Hex overrides (`#RRGGBB` or `#RRGGBBAA`) for the named colors.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ColorsConfig {
    /// Background of the default style. Unset means the theme's primary color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

// =============================================================================
// Main Config Struct
// =============================================================================

/// Application configuration with sectioned structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub snackbar: SnackbarConfig,

    #[serde(default)]
    pub colors: ColorsConfig,
}

impl Config {
    /// Dismiss behavior described by the `[snackbar]` section.
    ///
    /// The file's delay is clamped to the range accepted by [`DismissDelay`].
    #[must_use]
    pub fn behavior(&self) -> Behavior {
        let auto_dismiss = self.snackbar.auto_dismiss.unwrap_or(DEFAULT_AUTO_DISMISS);
        let delay = DismissDelay::new(
            self.snackbar
                .dismiss_after_secs
                .unwrap_or(DEFAULT_DISMISS_AFTER_SECS),
        );

        Behavior::default()
            .dismiss_on_tap(self.snackbar.dismiss_on_tap.unwrap_or(DEFAULT_DISMISS_ON_TAP))
            .dismiss_after(auto_dismiss.then_some(delay.as_duration()))
    }

    /// Named colors with invalid entries replaced by their defaults.
    #[must_use]
    pub fn named_colors(&self) -> NamedColors {
        let defaults = NamedColors::default();

        NamedColors {
            accent: self
                .colors
                .accent
                .as_deref()
                .and_then(|raw| parse_color("accent", raw)),
            warning: self
                .colors
                .warning
                .as_deref()
                .and_then(|raw| parse_color("warning", raw))
                .unwrap_or(defaults.warning),
            error: self
                .colors
                .error
                .as_deref()
                .and_then(|raw| parse_color("error", raw))
                .unwrap_or(defaults.error),
        }
    }

    /// Extra bottom padding clamped to the accepted range.
    #[must_use]
    pub fn extra_bottom_padding(&self) -> f32 {
        let padding = self
            .snackbar
            .extra_bottom_padding
            .unwrap_or(DEFAULT_EXTRA_BOTTOM_PADDING);

        if padding.is_nan() {
            DEFAULT_EXTRA_BOTTOM_PADDING
        } else {
            padding.clamp(0.0, MAX_EXTRA_BOTTOM_PADDING)
        }
    }
}

fn parse_color(name: &str, raw: &str) -> Option<iced::Color> {
    let color = parse_hex(raw);
    if color.is_none() {
        log::warn!("ignoring invalid {name} color {raw:?} in {CONFIG_FILE}");
    }
    color
}

// =============================================================================
// Default Value Functions (for serde)
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_dismiss_on_tap() -> Option<bool> {
    Some(DEFAULT_DISMISS_ON_TAP)
}

fn default_auto_dismiss() -> Option<bool> {
    Some(DEFAULT_AUTO_DISMISS)
}

fn default_dismiss_after_secs() -> Option<f32> {
    Some(DEFAULT_DISMISS_AFTER_SECS)
}

fn default_extra_bottom_padding() -> Option<f32> {
    Some(DEFAULT_EXTRA_BOTTOM_PADDING)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    raw.parse::<ThemeMode>().map_err(D::Error::custom)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
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
/// Returns a tuple of (config, optional warning message).
/// A missing file yields the defaults without a warning; an unreadable or
/// malformed file yields the defaults plus a warning for the user.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("falling back to default config: {err}");
                    return (
                        Config::default(),
                        Some(format!("Could not read {}", path.display())),
                    );
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
    use crate::ui::snackbar::to_hex;
    use tempfile::tempdir;

    #[test]
    fn default_config_matches_defaults() {
        let config = Config::default();
        let behavior = config.behavior();

        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert!(behavior.dismiss_on_tap);
        assert_eq!(
            behavior.dismiss_after.map(|delay| delay.as_secs_f32()),
            Some(DEFAULT_DISMISS_AFTER_SECS)
        );
        assert_eq!(config.extra_bottom_padding(), DEFAULT_EXTRA_BOTTOM_PADDING);
        assert_eq!(config.named_colors(), NamedColors::default());
    }

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                theme_mode: ThemeMode::Dark,
            },
            snackbar: SnackbarConfig {
                dismiss_on_tap: Some(false),
                auto_dismiss: Some(true),
                dismiss_after_secs: Some(7.5),
                extra_bottom_padding: Some(48.0),
            },
            colors: ColorsConfig {
                accent: Some("#336699".to_string()),
                warning: None,
                error: Some("#AA0000".to_string()),
            },
        };
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

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn invalid_theme_mode_is_a_config_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\ntheme_mode = \"sepia\"\n")
            .expect("failed to write config");

        match load_from_path(&config_path) {
            Err(Error::Config(message)) => assert!(message.contains("invalid theme_mode")),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn partial_file_fills_missing_fields_with_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[snackbar]\ndismiss_on_tap = false\n")
            .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.snackbar.dismiss_on_tap, Some(false));
        assert_eq!(
            loaded.snackbar.dismiss_after_secs,
            Some(DEFAULT_DISMISS_AFTER_SECS)
        );
        assert_eq!(loaded.general, GeneralConfig::default());
    }

    #[test]
    fn auto_dismiss_off_disables_timer() {
        let mut config = Config::default();
        config.snackbar.auto_dismiss = Some(false);
        assert!(config.behavior().dismiss_after.is_none());
    }

    #[test]
    fn dismiss_delay_is_clamped() {
        let mut config = Config::default();
        config.snackbar.dismiss_after_secs = Some(0.01);
        assert_eq!(
            config.behavior().dismiss_after.map(|delay| delay.as_secs_f32()),
            Some(MIN_DISMISS_AFTER_SECS)
        );

        config.snackbar.dismiss_after_secs = Some(600.0);
        assert_eq!(
            config.behavior().dismiss_after.map(|delay| delay.as_secs_f32()),
            Some(MAX_DISMISS_AFTER_SECS)
        );
    }

    #[test]
    fn extra_bottom_padding_is_clamped() {
        let mut config = Config::default();
        config.snackbar.extra_bottom_padding = Some(-10.0);
        assert_eq!(config.extra_bottom_padding(), 0.0);

        config.snackbar.extra_bottom_padding = Some(10_000.0);
        assert_eq!(config.extra_bottom_padding(), MAX_EXTRA_BOTTOM_PADDING);

        config.snackbar.extra_bottom_padding = Some(f32::NAN);
        assert_eq!(config.extra_bottom_padding(), DEFAULT_EXTRA_BOTTOM_PADDING);
    }

    #[test]
    fn invalid_colors_fall_back_to_defaults() {
        let mut config = Config::default();
        config.colors.accent = Some("blue".to_string());
        config.colors.warning = Some("#12345".to_string());
        config.colors.error = Some("#102030".to_string());

        let colors = config.named_colors();

        assert!(colors.accent.is_none());
        assert_eq!(colors.warning, NamedColors::default().warning);
        assert_eq!(to_hex(colors.error), "#102030");
    }

    #[test]
    fn load_with_override_missing_file_returns_defaults_silently() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn load_with_override_broken_file_warns() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[[[").expect("failed to write config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn save_with_override_writes_into_directory() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let mut config = Config::default();
        config.general.theme_mode = ThemeMode::Light;

        save_with_override(&config, Some(temp_dir.path().to_path_buf()))
            .expect("failed to save config");
        let (loaded, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert!(warning.is_none());
        assert_eq!(loaded.general.theme_mode, ThemeMode::Light);
    }
}
