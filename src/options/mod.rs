//! Controller configuration with TOML preset support.
//!
//! Orbit bounds, damping, per-source sensitivities and debug toggles are
//! consolidated here. Options serialize to/from TOML so a viewer can ship
//! tuned presets next to its assets.

mod camera;
mod debug;
mod input;

use std::path::Path;

pub use camera::CameraOptions;
pub use debug::DebugOptions;
pub use input::{InputOptions, InputSensitivities};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::OrbitLimits;
use crate::error::ArcamError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[input]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Orbit bounds, damping, and projection parameters.
    pub camera: CameraOptions,
    /// Input source sensitivities and arbitration.
    pub input: InputOptions,
    /// Debug overlay options.
    pub debug: DebugOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// The loaded options are validated before being returned.
    pub fn load(path: &Path) -> Result<Self, ArcamError> {
        let content = std::fs::read_to_string(path).map_err(ArcamError::Io)?;
        let opts = Self::from_toml(&content)?;
        log::info!("Loaded controller options from {}", path.display());
        Ok(opts)
    }

    /// Parse and validate options from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ArcamError> {
        let opts: Self = toml::from_str(content)
            .map_err(|e| ArcamError::OptionsParse(e.to_string()))?;
        opts.validate()?;
        Ok(opts)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), ArcamError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ArcamError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ArcamError::Io)?;
        }
        std::fs::write(path, content).map_err(ArcamError::Io)?;
        log::info!("Saved controller options to {}", path.display());
        Ok(())
    }

    /// Check the orbit invariants the controller relies on.
    ///
    /// Polar bounds must sit strictly inside `(0, π)`, radius bounds must
    /// be positive and ordered, and damping must lie in `(0, 1]`.
    pub fn validate(&self) -> Result<(), ArcamError> {
        let cam = &self.camera;
        let _ = OrbitLimits::from_options(cam)?;
        if !cam.max_radius.is_finite() || !cam.initial_radius.is_finite() {
            return Err(ArcamError::InvalidOptions(
                "radius values must be finite".into(),
            ));
        }
        if !(cam.damping_factor > 0.0 && cam.damping_factor <= 1.0) {
            return Err(ArcamError::InvalidOptions(format!(
                "damping factor {} must lie in (0, 1]",
                cam.damping_factor
            )));
        }
        if cam.target.iter().any(|c| !c.is_finite()) {
            return Err(ArcamError::InvalidOptions(
                "target must be finite".into(),
            ));
        }
        let s = &self.input.sensitivities;
        if [s.touch_drag, s.mouse_drag, s.wheel, s.motion_rate]
            .iter()
            .any(|v| !v.is_finite())
        {
            return Err(ArcamError::InvalidOptions(
                "sensitivities must be finite".into(),
            ));
        }
        Ok(())
    }
}
