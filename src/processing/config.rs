use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::utils::error::Error;

/// Viewport fit parameters handed through to the rendering sink untouched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FitOptions {
    pub padding: u32,
    pub max_zoom: u32,
    /// Animation duration in milliseconds
    pub duration: u32,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            padding: 20,
            max_zoom: 15,
            duration: 500,
        }
    }
}

/// Styling defaults and record handling options for one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct PipelineConfig {
    pub default_fill_color: String,
    pub default_opacity: f64,
    pub default_stroke_width: f64,
    /// When set, records whose `active` flag is `false` are left out.
    pub active_field_present: bool,
    pub fit: FitOptions,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            default_fill_color: "#3388ff".to_string(),
            default_opacity: 0.5,
            default_stroke_width: 2.0,
            active_field_present: false,
            fit: FitOptions::default(),
        }
    }
}

impl PipelineConfig {
    /// Reads a config from a JSON file. Missing keys fall back to the defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, Error> {
        let config: PipelineConfig =
            serde_json::from_str(text).map_err(|e| Error::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), Error> {
        if !(0.0..=1.0).contains(&self.default_opacity) {
            return Err(Error::InvalidConfig(format!(
                "defaultOpacity must be within 0..=1, got {}",
                self.default_opacity
            )));
        }
        if !self.default_stroke_width.is_finite() || self.default_stroke_width < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "defaultStrokeWidth must be a non-negative number, got {}",
                self.default_stroke_width
            )));
        }
        Ok(())
    }
}
