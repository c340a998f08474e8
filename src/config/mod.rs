// SPDX-License-Identifier: MPL-2.0
//! This module handles the pipeline's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use snapsign::config::{self, Config};
//! use snapsign::media::ExportFormat;
//!
//! let mut config = config::load().unwrap_or_default();
//! config.export_format = Some(ExportFormat::Jpeg);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::media::ExportFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "SnapSign";

/// Composition canvas settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub background: [u8; 4],
    /// Bilinear sampling when true, nearest-neighbour otherwise.
    pub smooth_sampling: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            background: DEFAULT_CANVAS_BACKGROUND,
            smooth_sampling: true,
        }
    }
}

/// Signature pad settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignatureConfig {
    pub width: u32,
    pub height: u32,
    pub stroke_width: f32,
    pub ink: [u8; 4],
    pub background: [u8; 4],
}

impl Default for SignatureConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_SIGNATURE_WIDTH,
            height: DEFAULT_SIGNATURE_HEIGHT,
            stroke_width: DEFAULT_STROKE_WIDTH,
            ink: DEFAULT_INK_COLOR,
            background: DEFAULT_SIGNATURE_BACKGROUND,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    // Plain values must precede the tables in TOML output
    #[serde(default)]
    pub export_format: Option<ExportFormat>,
    #[serde(default)]
    pub editor: EditorConfig,
    #[serde(default)]
    pub signature: SignatureConfig,
}

impl Config {
    /// Export format to use, falling back to PNG.
    #[must_use]
    pub fn export_format(&self) -> ExportFormat {
        self.export_format.unwrap_or_default()
    }

    /// Checks the values that cannot be clamped silently.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] naming the first offending key.
    pub fn validate(&self) -> Result<()> {
        validate_edge("editor.canvas_width", self.editor.canvas_width)?;
        validate_edge("editor.canvas_height", self.editor.canvas_height)?;
        validate_edge("signature.width", self.signature.width)?;
        validate_edge("signature.height", self.signature.height)?;
        if !(self.signature.stroke_width.is_finite() && self.signature.stroke_width > 0.0) {
            return Err(Error::Config(format!(
                "signature.stroke_width must be positive, got {}",
                self.signature.stroke_width
            )));
        }
        Ok(())
    }
}

fn validate_edge(name: &str, value: u32) -> Result<()> {
    if value == 0 || value > MAX_CANVAS_EDGE {
        return Err(Error::Config(format!(
            "{name} must be within 1..={MAX_CANVAS_EDGE}, got {value}"
        )));
    }
    Ok(())
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
    match toml::from_str::<Config>(&content) {
        Ok(config) => match config.validate() {
            Ok(()) => Ok(config),
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    "out-of-range settings, using defaults"
                );
                Ok(Config::default())
            }
        },
        Err(err) => {
            tracing::warn!(
                path = %path.display(),
                error = %err,
                "invalid settings, using defaults"
            );
            Ok(Config::default())
        }
    }
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
    fn save_and_load_round_trip_preserves_sections() {
        let config = Config {
            editor: EditorConfig {
                canvas_width: 320,
                canvas_height: 240,
                background: [0, 0, 0, 255],
                smooth_sampling: false,
            },
            signature: SignatureConfig {
                stroke_width: 3.5,
                ..SignatureConfig::default()
            },
            export_format: Some(ExportFormat::WebP),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_keys() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[editor]\ncanvas_width = 640\n").expect("write");

        let loaded = load_from_path(&config_path).expect("load");
        assert_eq!(loaded.editor.canvas_width, 640);
        assert_eq!(loaded.editor.canvas_height, DEFAULT_CANVAS_HEIGHT);
        assert_eq!(loaded.signature, SignatureConfig::default());
        assert_eq!(loaded.export_format(), ExportFormat::Png);
    }

    #[test]
    fn validate_rejects_zero_sized_canvas() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.editor.canvas_width = 0;
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn validate_rejects_non_positive_stroke() {
        let mut config = Config::default();
        config.signature.stroke_width = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn out_of_range_file_falls_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[signature]\nheight = 0\n").expect("write");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded, Config::default());
    }
}
