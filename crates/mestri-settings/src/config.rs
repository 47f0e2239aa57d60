//! Configuration for Modern Mestri
//!
//! Supports JSON and TOML files. Configuration is organized into sections:
//! - Designer settings (canvas size, scale, room defaults, palette)
//! - Logging preferences

use crate::error::{SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Stagger pattern for newly added rooms.
///
/// The n-th room (0-based) starts at `origin + (n * step) % span` on both
/// axes, so successive rooms step diagonally and wrap back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaggerSettings {
    /// Offset of the first room from the canvas corner, in pixels
    pub origin: f64,
    /// Diagonal step between consecutive rooms, in pixels
    pub step: f64,
    /// Wrap length of the stagger cycle, in pixels
    pub span: f64,
}

impl Default for StaggerSettings {
    fn default() -> Self {
        Self {
            origin: 20.0,
            step: 40.0,
            span: 300.0,
        }
    }
}

/// Room designer settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignerSettings {
    /// Canvas width in pixels
    pub canvas_width: f64,
    /// Canvas height in pixels
    pub canvas_height: f64,
    /// Rendering scale
    pub pixels_per_foot: f64,
    /// Length of a new room in feet
    pub default_length: f64,
    /// Width of a new room in feet
    pub default_width: f64,
    /// Room categories offered by the add-room buttons
    pub palette: Vec<String>,
    pub stagger: StaggerSettings,
}

impl Default for DesignerSettings {
    fn default() -> Self {
        Self {
            canvas_width: 600.0,
            canvas_height: 400.0,
            pixels_per_foot: 10.0,
            default_length: 12.0,
            default_width: 10.0,
            palette: ["bedroom", "kitchen", "bathroom", "living", "dining", "study"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            stagger: StaggerSettings::default(),
        }
    }
}

/// Logging preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default level directive when `RUST_LOG` is unset
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub designer: DesignerSettings,
    pub logging: LoggingSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = match Format::of(path)? {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        if let Err(e) = config.validate() {
            tracing::warn!("Rejected config {}: {}", path.display(), e);
            return Err(e);
        }
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        let d = &self.designer;

        if !(d.canvas_width > 0.0 && d.canvas_height > 0.0) {
            return Err(SettingsError::invalid(
                "designer.canvas_width/canvas_height",
                "canvas dimensions must be > 0",
            ));
        }

        if !(d.pixels_per_foot > 0.0 && d.pixels_per_foot.is_finite()) {
            return Err(SettingsError::invalid(
                "designer.pixels_per_foot",
                "scale must be a positive number",
            ));
        }

        if !(d.default_length > 0.0 && d.default_width > 0.0) {
            return Err(SettingsError::invalid(
                "designer.default_length/default_width",
                "default room dimensions must be > 0",
            ));
        }

        let s = &d.stagger;
        let finite = s.span.is_finite() && s.step.is_finite() && s.origin.is_finite();
        if !finite || s.span <= 0.0 || s.step < 0.0 || s.origin < 0.0 {
            return Err(SettingsError::invalid(
                "designer.stagger",
                "span must be > 0, origin and step must be finite and >= 0",
            ));
        }

        if d.palette.iter().any(|c| c.trim().is_empty()) {
            return Err(SettingsError::invalid(
                "designer.palette",
                "room categories must not be empty",
            ));
        }

        Ok(())
    }
}

enum Format {
    Json,
    Toml,
}

impl Format {
    fn of(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(SettingsError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}
