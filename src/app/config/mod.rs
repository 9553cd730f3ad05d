// SPDX-License-Identifier: MPL-2.0
//! Persisted preferences, stored as `settings.toml` in the directory chosen
//! by [`paths`](crate::app::paths).
//!
//! ```toml
//! [general]
//! theme_mode = "dark"
//!
//! [projects]
//! source = "https://example.test/projects.json"
//! carousel_interval_ms = 3000
//!
//! [profile]
//! resume_url = "https://example.test/cv.pdf"
//! ```
//!
//! Every key is optional. A file that fails to parse is ignored as a whole
//! and reported back to the caller as a warning.

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::projects::ProjectSource;
use crate::ui::state::{CarouselInterval, CloseDelay};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Resume shown by the navbar and banner buttons unless configured.
pub const DEFAULT_RESUME_URL: &str =
    "https://drive.google.com/file/d/akash-ahamed-resume/view";

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

/// Project gallery settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectsConfig {
    /// URL, file path, or `bundled`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    #[serde(
        default = "default_carousel_interval_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub carousel_interval_ms: Option<u64>,

    #[serde(
        default = "default_close_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub close_delay_ms: Option<u64>,

    #[serde(
        default = "default_image_cache_entries",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_cache_entries: Option<usize>,
}

impl Default for ProjectsConfig {
    fn default() -> Self {
        Self {
            source: None,
            carousel_interval_ms: default_carousel_interval_ms(),
            close_delay_ms: default_close_delay_ms(),
            image_cache_entries: default_image_cache_entries(),
        }
    }
}

impl ProjectsConfig {
    #[must_use]
    pub fn source(&self) -> ProjectSource {
        self.source
            .as_deref()
            .map(ProjectSource::parse)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn carousel_interval(&self) -> CarouselInterval {
        self.carousel_interval_ms
            .map(CarouselInterval::new)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn close_delay(&self) -> CloseDelay {
        self.close_delay_ms.map(CloseDelay::new).unwrap_or_default()
    }

    #[must_use]
    pub fn image_cache_entries(&self) -> usize {
        self.image_cache_entries
            .unwrap_or(DEFAULT_IMAGE_CACHE_ENTRIES)
            .clamp(MIN_IMAGE_CACHE_ENTRIES, MAX_IMAGE_CACHE_ENTRIES)
    }
}

/// Personal profile links.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ProfileConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_url: Option<String>,
}

impl ProfileConfig {
    #[must_use]
    pub fn resume_url(&self) -> &str {
        self.resume_url.as_deref().unwrap_or(DEFAULT_RESUME_URL)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub projects: ProjectsConfig,
    #[serde(default)]
    pub profile: ProfileConfig,
}

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_carousel_interval_ms() -> Option<u64> {
    Some(DEFAULT_CAROUSEL_INTERVAL_MS)
}

fn default_close_delay_ms() -> Option<u64> {
    Some(DEFAULT_CLOSE_DELAY_MS)
}

fn default_image_cache_entries() -> Option<usize> {
    Some(DEFAULT_IMAGE_CACHE_ENTRIES)
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
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

fn config_file(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|dir| dir.join(CONFIG_FILE))
}

/// Loads `settings.toml`, falling back to defaults. The second value explains
/// why a present file was ignored.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = config_file(base_dir).filter(|path| path.exists()) else {
        return (Config::default(), None);
    };
    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => (
            Config::default(),
            Some(format!("Ignoring {}: {err}", path.display())),
        ),
    }
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let raw = fs::read_to_string(path)?;
    Ok(toml::from_str(&raw)?)
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory. Without any resolvable
/// directory there is nowhere to write, and nothing happens.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    match config_file(base_dir) {
        Some(path) => save_to_path(config, &path),
        None => Ok(()),
    }
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, toml::to_string_pretty(config)?)?;
    Ok(())
}
