use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Weekday;
use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;

use crate::{
    policy::StaticPolicy,
    style::{LabelFont, Rgba, SelectionShape},
};

/// Typed configuration errors. These surface at startup, never mid-session.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("unrecognized weekday name: '{0}'")]
    InvalidWeekday(String),
    #[error("color channel {channel} out of range: {value} (expected 0.0..=1.0)")]
    ColorChannelOutOfRange { channel: &'static str, value: f32 },
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub picker: PickerConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WindowConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Daygrid".to_string(),
            width: 420.0,
            height: 520.0,
        }
    }
}

/// A color as written in the config file.
#[derive(Debug, Deserialize, Clone, Copy)]
pub struct ColorConfig {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    #[serde(default = "default_alpha")]
    pub a: f32,
}

fn default_alpha() -> f32 {
    1.0
}

impl ColorConfig {
    fn to_rgba(self) -> Result<Rgba, ConfigError> {
        for (channel, value) in [("r", self.r), ("g", self.g), ("b", self.b), ("a", self.a)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ColorChannelOutOfRange { channel, value });
            }
        }
        Ok(Rgba::rgba(self.r, self.g, self.b, self.a))
    }
}

/// Picker behavior configured by the host.
#[derive(Debug, Deserialize, Clone)]
pub struct PickerConfig {
    /// Which weekday starts a week, e.g. "monday" or "sun".
    pub first_weekday: String,
    pub show_out_of_month_days: bool,
    /// Weekdays that can never be selected.
    pub unselectable_weekdays: Vec<String>,
    /// A weekday visually flagged with override colors.
    #[serde(default)]
    pub flagged_weekday: Option<String>,
    #[serde(default)]
    pub flagged_text: Option<ColorConfig>,
    #[serde(default)]
    pub flagged_background: Option<ColorConfig>,
    pub selection_shape: SelectionShape,
    #[serde(default)]
    pub font: LabelFont,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            first_weekday: "monday".to_string(),
            show_out_of_month_days: true,
            unselectable_weekdays: Vec::new(),
            flagged_weekday: None,
            flagged_text: None,
            flagged_background: None,
            selection_shape: SelectionShape::default(),
            font: LabelFont::default(),
        }
    }
}

/// Parse a weekday name; full names and three-letter abbreviations are
/// accepted, case-insensitively.
pub fn parse_weekday(name: &str) -> Result<Weekday, ConfigError> {
    name.parse::<Weekday>()
        .map_err(|_| ConfigError::InvalidWeekday(name.to_string()))
}

impl PickerConfig {
    /// Validate the configuration and build the policy it describes.
    pub fn to_policy(&self) -> Result<StaticPolicy, ConfigError> {
        let unselectable_weekdays = self
            .unselectable_weekdays
            .iter()
            .map(|name| parse_weekday(name))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(StaticPolicy {
            unselectable_weekdays,
            unselectable_dates: Vec::new(),
            flagged_weekday: self
                .flagged_weekday
                .as_deref()
                .map(parse_weekday)
                .transpose()?,
            flagged_text: self.flagged_text.map(ColorConfig::to_rgba).transpose()?,
            flagged_background: self
                .flagged_background
                .map(ColorConfig::to_rgba)
                .transpose()?,
            show_out_of_month_days: self.show_out_of_month_days,
            first_weekday: parse_weekday(&self.first_weekday)?,
            selection_shape: self.selection_shape,
            label_font: self.font.clone(),
        })
    }
}

impl AppConfig {
    /// Load configuration from defaults, config files and the environment.
    pub fn load() -> Result<Self> {
        Self::load_with_file(None)
    }

    /// Like [`AppConfig::load`], with an extra highest-priority config file
    /// (the `--config` CLI flag).
    pub fn load_with_file(explicit: Option<&Path>) -> Result<Self> {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("daygrid");

        let mut builder = Config::builder()
            // 1. Load default values
            // Window
            .set_default("window.title", "Daygrid")?
            .set_default("window.width", 420.0)?
            .set_default("window.height", 520.0)?
            // Picker
            .set_default("picker.first_weekday", "monday")?
            .set_default("picker.show_out_of_month_days", true)?
            .set_default("picker.unselectable_weekdays", Vec::<String>::new())?
            .set_default("picker.flagged_weekday", None::<String>)?
            .set_default("picker.selection_shape", "circle")?

            // 2. Load from local config file (optional, lowest priority)
            .add_source(File::from(PathBuf::from("config.toml")).required(false))

            // 3. Load from user config directory (optional, overrides local)
            .add_source(File::from(config_dir.join("config.toml")).required(false))

            // 4. Load from Environment variables (DAYGRID__PICKER__FIRST_WEEKDAY=...)
            .add_source(Environment::with_prefix("DAYGRID").separator("__"));

        // 5. An explicit --config file overrides everything
        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path.to_path_buf()).required(true));
        }

        let s = builder.build()?;
        let loaded: Self = s.try_deserialize()?;

        // Reject bad weekday names and colors at startup rather than when
        // the first grid is built.
        loaded
            .picker
            .to_policy()
            .context("invalid picker configuration")?;

        Ok(loaded)
    }
}
