//! Serializable snapshot of a camera's full configuration.

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::engine::CameraEngine;
use crate::error::{validate_clipping_range, Result};

/// Every engine-side camera parameter at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraState {
    /// Camera position.
    pub position: Vec3,
    /// Focal point.
    pub focal_point: Vec3,
    /// View-up vector.
    pub view_up: Vec3,
    /// Vertical view angle in degrees.
    pub view_angle: f32,
    /// Near and far clipping distances.
    pub clipping_range: (f32, f32),
    /// Parallel projection half-height.
    pub parallel_scale: f32,
    /// Whether parallel projection is active.
    pub parallel_projection: bool,
    /// Model transformation.
    pub model_transform: Mat4,
}

impl CameraState {
    /// Reads the current state of `engine`.
    pub fn capture<E: CameraEngine + ?Sized>(engine: &E) -> Self {
        Self {
            position: engine.position(),
            focal_point: engine.focal_point(),
            view_up: engine.view_up(),
            view_angle: engine.view_angle(),
            clipping_range: engine.clipping_range(),
            parallel_scale: engine.parallel_scale(),
            parallel_projection: engine.parallel_projection(),
            model_transform: engine.model_transform_matrix(),
        }
    }

    /// Writes this state into `engine`.
    ///
    /// The clipping range is validated first; on error the engine is untouched.
    pub fn apply<E: CameraEngine + ?Sized>(&self, engine: &mut E) -> Result<()> {
        let (near, far) = self.clipping_range;
        validate_clipping_range(near, far)?;

        engine.set_position(self.position);
        engine.set_focal_point(self.focal_point);
        engine.set_view_up(self.view_up);
        engine.set_view_angle(self.view_angle);
        engine.set_clipping_range(near, far);
        engine.set_parallel_scale(self.parallel_scale);
        engine.set_parallel_projection(self.parallel_projection);
        engine.set_model_transform_matrix(self.model_transform);
        Ok(())
    }

    /// Parses a state from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the state as JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
