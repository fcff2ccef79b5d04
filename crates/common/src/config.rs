//! On-disk configuration.
//!
//! The file format follows the extension: `.yaml`/`.yml` or `.json`.
//! Every section is optional; missing fields take their defaults.

use crate::keys::Bindings;
use crate::types::{CameraSettings, ProjectionSettings, Viewport};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Errors from loading, saving or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("unsupported config format: {0:?}")]
    UnsupportedFormat(String),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Serialization format chosen from a file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Json,
}

impl Format {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "yaml" | "yml" => Ok(Format::Yaml),
            "json" => Ok(Format::Json),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OriginsConfig {
    pub viewport: Viewport,
    pub projection: ProjectionSettings,
    pub camera: CameraSettings,
    pub bindings: Bindings,
}

impl OriginsConfig {
    /// Read, parse and validate a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let format = Format::from_path(path)?;
        let text = std::fs::read_to_string(path)?;
        let config = Self::parse(&text, format)?;
        tracing::info!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn parse(text: &str, format: Format) -> Result<Self, ConfigError> {
        let config: Self = match format {
            Format::Yaml => serde_yaml::from_str(text)?,
            Format::Json => serde_json::from_str(text)?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let text = self.render(Format::from_path(path)?)?;
        std::fs::write(path, text)?;
        tracing::debug!("saved config to {}", path.display());
        Ok(())
    }

    pub fn render(&self, format: Format) -> Result<String, ConfigError> {
        Ok(match format {
            Format::Yaml => serde_yaml::to_string(self)?,
            Format::Json => serde_json::to_string_pretty(self)?,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.viewport.is_empty() {
            return Err(ConfigError::Invalid(format!(
                "viewport must be non-empty, got {}x{}",
                self.viewport.width, self.viewport.height
            )));
        }
        let p = &self.projection;
        if !(p.fov_degrees > 0.0 && p.fov_degrees < 180.0) {
            return Err(ConfigError::Invalid(format!(
                "projection.fov_degrees must be in (0, 180), got {}",
                p.fov_degrees
            )));
        }
        if !(p.near > 0.0 && p.far > p.near && p.far.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "projection requires 0 < near < far < inf, got near={} far={}",
                p.near, p.far
            )));
        }
        let c = &self.camera;
        let (lo, hi) = (c.min_fov_degrees, c.max_fov_degrees);
        if !(lo > 0.0 && lo <= hi && hi < 180.0) {
            return Err(ConfigError::Invalid(format!(
                "camera zoom range requires 0 < min_fov_degrees <= max_fov_degrees < 180, \
                 got min={lo} max={hi}"
            )));
        }
        Ok(())
    }
}
