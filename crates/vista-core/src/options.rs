//! Configuration options for newly created cameras.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::{validate_clipping_range, Result};

/// Initial parameters for a camera engine.
///
/// Missing fields fall back to their defaults when deserializing, so a
/// configuration file only needs to name what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraOptions {
    /// Camera position in world coordinates.
    pub position: Vec3,

    /// Point the camera looks at.
    pub focal_point: Vec3,

    /// View-up vector.
    pub view_up: Vec3,

    /// Vertical view angle in degrees.
    pub view_angle: f32,

    /// Near and far clipping distances.
    pub clipping_range: (f32, f32),

    /// Parallel projection half-height in world units.
    pub parallel_scale: f32,

    /// Whether to start in parallel projection.
    pub parallel_projection: bool,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 1.0),
            focal_point: Vec3::ZERO,
            view_up: Vec3::Y,
            view_angle: 30.0,
            clipping_range: (0.01, 1000.01),
            parallel_scale: 1.0,
            parallel_projection: false,
        }
    }
}

impl CameraOptions {
    /// Parses options from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Reads options from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("loading camera options from {}", path.display());
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Serializes the options as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks the clipping range ordering.
    pub fn validate(&self) -> Result<()> {
        validate_clipping_range(self.clipping_range.0, self.clipping_range.1)
    }
}
