//! Configuration file support for erdraw.
//!
//! Settings are read from `~/.config/erdraw/config.toml` (or a path given on
//! the command line) and cover label fonts, the weak-entity border gap, and
//! PNG output defaults.
//!
//! If no config file exists, defaults matching the classic canvas rendering
//! (10px/20px Arial labels, 1px lines, 2px weak-entity gap) are used.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{OutputConfig, StyleConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// # Example TOML
/// ```toml
/// [style]
/// font_family = "Arial"
/// attribute_font_size = 10.0
/// label_font_size = 20.0
/// weak_entity_inset = 2.0
///
/// [output]
/// line_width = 1.0
/// background = "white"
/// padding = 10.0
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Label fonts and shape geometry tweaks
    #[serde(default)]
    pub style: StyleConfig,

    /// PNG output defaults
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is
    /// logged.
    ///
    /// Validated ranges:
    /// - `attribute_font_size`, `label_font_size`: 6.0 - 72.0
    /// - `weak_entity_inset`: 1.0 - 20.0
    /// - `line_width`: 0.5 - 10.0
    /// - `padding`: 0.0 - 500.0
    fn validate_and_clamp(&mut self) {
        let style_defaults = StyleConfig::default();
        let output_defaults = OutputConfig::default();

        clamp_setting(
            "attribute_font_size",
            &mut self.style.attribute_font_size,
            style_defaults.attribute_font_size,
            6.0,
            72.0,
        );
        clamp_setting(
            "label_font_size",
            &mut self.style.label_font_size,
            style_defaults.label_font_size,
            6.0,
            72.0,
        );
        clamp_setting(
            "weak_entity_inset",
            &mut self.style.weak_entity_inset,
            style_defaults.weak_entity_inset,
            1.0,
            20.0,
        );
        clamp_setting(
            "line_width",
            &mut self.output.line_width,
            output_defaults.line_width,
            0.5,
            10.0,
        );
        clamp_setting(
            "padding",
            &mut self.output.padding,
            output_defaults.padding,
            0.0,
            500.0,
        );

        let valid_weight = matches!(
            self.style.font_weight.to_lowercase().as_str(),
            "normal" | "bold" | "light" | "ultralight" | "heavy" | "ultrabold"
        ) || self
            .style
            .font_weight
            .parse::<u32>()
            .is_ok_and(|w| (100..=900).contains(&w));

        if !valid_weight {
            log::warn!(
                "Invalid font_weight '{}', falling back to 'normal'",
                self.style.font_weight
            );
            self.style.font_weight = "normal".to_string();
        }

        if !matches!(
            self.style.font_style.to_lowercase().as_str(),
            "normal" | "italic" | "oblique"
        ) {
            log::warn!(
                "Invalid font_style '{}', falling back to 'normal'",
                self.style.font_style
            );
            self.style.font_style = "normal".to_string();
        }

        if !self.output.background.is_valid() {
            log::warn!(
                "Invalid background {:?}, falling back to 'white'",
                self.output.background
            );
            self.output.background = ColorSpec::Name("white".to_string());
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/erdraw/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("erdraw");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined, or the
    /// file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path. The file must exist.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config = Self::from_toml_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;
        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    fn from_toml_str(config_str: &str) -> Result<Self> {
        Ok(toml::from_str(config_str)?)
    }

    /// Creates a default configuration file with documentation comments.
    ///
    /// Writes `config.example.toml` to the user's config directory.
    ///
    /// # Errors
    /// Returns an error if a config file already exists at the target path,
    /// or the directory/file cannot be written.
    pub fn create_default_file() -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let default_config = include_str!("../../config.example.toml");
        fs::write(&config_path, default_config)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Created default config at {}", config_path.display());
        Ok(config_path)
    }

    /// JSON schema describing the config file format.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

/// Clamps a numeric setting into `min..=max`, logging a warning when it moves.
///
/// Non-finite values (TOML accepts `nan` and `inf`) are replaced by `default`.
fn clamp_setting(name: &str, value: &mut f64, default: f64, min: f64, max: f64) {
    if !value.is_finite() {
        log::warn!("Invalid {} {}, falling back to {:.1}", name, value, default);
        *value = default;
    } else if !(min..=max).contains(&*value) {
        log::warn!(
            "Invalid {} {:.1}, clamping to {:.1}-{:.1} range",
            name,
            value,
            min,
            max
        );
        *value = value.clamp(min, max);
    }
}
