// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[sticker]` - Nominal size, anchor offset, double-tap basis and spring
//! - `[export]` - Composite picture output
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` or set `STICKER_LENS_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use sticker_lens::app::config;
//!
//! let (mut config, _warning) = config::load();
//! config.general.language = Some("pt-BR".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::sticker::{SpringConfig, StickerOptions, ToggleBasis};
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
    /// UI language code (e.g., "en-US", "pt-BR").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

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
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Sticker placement and animation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StickerConfig {
    /// Nominal edge length in pixels.
    #[serde(default = "default_sticker_size", skip_serializing_if = "Option::is_none")]
    pub size: Option<f32>,

    /// Vertical offset of the sticker origin from the bottom of the photo.
    #[serde(
        default = "default_anchor_offset",
        skip_serializing_if = "Option::is_none"
    )]
    pub anchor_offset: Option<f32>,

    /// Value a double-tap compares against: `target` or `animated`.
    #[serde(default)]
    pub toggle_basis: ToggleBasis,

    /// Spring constants for the size easing.
    #[serde(default)]
    pub spring: SpringSection,
}

impl Default for StickerConfig {
    fn default() -> Self {
        Self {
            size: default_sticker_size(),
            anchor_offset: default_anchor_offset(),
            toggle_basis: ToggleBasis::default(),
            spring: SpringSection::default(),
        }
    }
}

impl StickerConfig {
    /// Nominal size, clamped to the supported range.
    #[must_use]
    pub fn size(&self) -> f32 {
        sanitize(
            self.size,
            DEFAULT_STICKER_SIZE,
            MIN_STICKER_SIZE,
            MAX_STICKER_SIZE,
        )
    }

    /// Anchor offset, clamped to the photo's height.
    #[must_use]
    pub fn anchor_offset(&self) -> f32 {
        sanitize(
            self.anchor_offset,
            DEFAULT_ANCHOR_OFFSET,
            MIN_ANCHOR_OFFSET,
            MAX_ANCHOR_OFFSET,
        )
    }

    /// Resolves the section into the parameters used to mount a sticker.
    #[must_use]
    pub fn options(&self) -> StickerOptions {
        StickerOptions {
            size: self.size(),
            spring: self.spring.resolve(),
            toggle_basis: self.toggle_basis,
        }
    }
}

/// `[sticker.spring]` table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SpringSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stiffness: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damping: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mass: Option<f32>,
}

impl SpringSection {
    #[must_use]
    pub fn resolve(&self) -> SpringConfig {
        SpringConfig {
            stiffness: sanitize(
                self.stiffness,
                DEFAULT_SPRING_STIFFNESS,
                MIN_SPRING_STIFFNESS,
                MAX_SPRING_STIFFNESS,
            ),
            damping: sanitize(
                self.damping,
                DEFAULT_SPRING_DAMPING,
                MIN_SPRING_DAMPING,
                MAX_SPRING_DAMPING,
            ),
            mass: sanitize(
                self.mass,
                DEFAULT_SPRING_MASS,
                MIN_SPRING_MASS,
                MAX_SPRING_MASS,
            ),
        }
    }
}

/// Composite export settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExportConfig {
    /// Height in pixels of the saved picture; width follows the photo ratio.
    #[serde(
        default = "default_export_height",
        skip_serializing_if = "Option::is_none"
    )]
    pub height: Option<u32>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            height: default_export_height(),
        }
    }
}

impl ExportConfig {
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
            .unwrap_or(DEFAULT_EXPORT_HEIGHT)
            .clamp(MIN_EXPORT_HEIGHT, MAX_EXPORT_HEIGHT)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub sticker: StickerConfig,

    #[serde(default)]
    pub export: ExportConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_sticker_size() -> Option<f32> {
    Some(DEFAULT_STICKER_SIZE)
}

fn default_anchor_offset() -> Option<f32> {
    Some(DEFAULT_ANCHOR_OFFSET)
}

fn default_export_height() -> Option<u32> {
    Some(DEFAULT_EXPORT_HEIGHT)
}

/// Falls back to `default` for missing or non-finite values, then clamps.
fn sanitize(value: Option<f32>, default: f32, min: f32, max: f32) -> f32 {
    match value {
        Some(v) if v.is_finite() => v.clamp(min, max),
        _ => default,
    }
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {other}"))),
    }
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
/// default config with the i18n key of a warning to show.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => {
                    log::info!("loaded settings from {}", path.display());
                    return (config, None);
                }
                Err(err) => {
                    log::warn!("ignoring unreadable settings {}: {err}", path.display());
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
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
