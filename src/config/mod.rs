// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, including loading and saving
//! overlay motion preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_sheets::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Slow down the enter transition
//! config.enter_duration_ms = Some(450.0);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use crate::overlay::animation::Timings;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod defaults;

pub use defaults::*;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedSheets";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub enter_duration_ms: Option<f32>,
    #[serde(default)]
    pub exit_duration_ms: Option<f32>,
    #[serde(default)]
    pub snap_back_duration_ms: Option<f32>,
    #[serde(default)]
    pub toast_duration_ms: Option<f32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enter_duration_ms: Some(ENTER_DURATION_MS),
            exit_duration_ms: Some(EXIT_DURATION_MS),
            snap_back_duration_ms: Some(SNAP_BACK_DURATION_MS),
            toast_duration_ms: Some(DEFAULT_TOAST_DURATION_MS),
        }
    }
}

impl Config {
    /// Resolves the motion timings, falling back to the defaults for any
    /// field left unset in the file.
    #[must_use]
    pub fn timings(&self) -> Timings {
        Timings {
            enter_ms: self.enter_duration_ms.unwrap_or(ENTER_DURATION_MS),
            exit_ms: self.exit_duration_ms.unwrap_or(EXIT_DURATION_MS),
            snap_back_ms: self.snap_back_duration_ms.unwrap_or(SNAP_BACK_DURATION_MS),
        }
    }

    /// Resolves the default toast display duration in milliseconds.
    #[must_use]
    pub fn toast_duration_ms(&self) -> f32 {
        self.toast_duration_ms.unwrap_or(DEFAULT_TOAST_DURATION_MS)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_durations() {
        let config = Config {
            enter_duration_ms: Some(200.0),
            exit_duration_ms: Some(350.0),
            snap_back_duration_ms: Some(500.0),
            toast_duration_ms: Some(2000.0),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.enter_duration_ms, config.enter_duration_ms);
        assert_eq!(loaded.exit_duration_ms, config.exit_duration_ms);
        assert_eq!(loaded.snap_back_duration_ms, config.snap_back_duration_ms);
        assert_eq!(loaded.toast_duration_ms, config.toast_duration_ms);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "this is { not toml").expect("failed to write file");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded.enter_duration_ms, Some(ENTER_DURATION_MS));
    }

    #[test]
    fn timings_fall_back_to_defaults_for_unset_fields() {
        let config = Config {
            enter_duration_ms: None,
            exit_duration_ms: Some(250.0),
            snap_back_duration_ms: None,
            toast_duration_ms: None,
        };

        let timings = config.timings();
        assert_eq!(timings.enter_ms, ENTER_DURATION_MS);
        assert_eq!(timings.exit_ms, 250.0);
        assert_eq!(timings.snap_back_ms, SNAP_BACK_DURATION_MS);
        assert_eq!(config.toast_duration_ms(), DEFAULT_TOAST_DURATION_MS);
    }
}
