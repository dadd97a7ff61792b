//! vista-rs: a typed camera descriptor for 3D visualization scenes.
//!
//! A [`Camera`] wraps an engine camera (any [`CameraEngine`], by default
//! [`RenderCamera`]) and exposes its position, focal point, clipping range,
//! projection mode and related parameters as plain accessors.
//!
//! # Quick Start
//!
//! ```
//! use vista_rs::*;
//!
//! fn main() -> Result<()> {
//!     let mut camera = Camera::new();
//!     camera.set_position([1.0, 2.0, 3.0]);
//!     camera.set_focal_point(Vec3::ZERO);
//!     camera.set_clipping_range(0.1, 100.0)?;
//!     camera.enable_parallel_projection();
//!
//!     assert!((camera.distance() - 14.0_f32.sqrt()).abs() < 1e-5);
//!     assert!(camera.is_parallel_projection());
//!     Ok(())
//! }
//! ```

#![allow(clippy::must_use_candidate)]

mod camera;
mod init;

pub use camera::{Camera, ParentId};
pub use init::init_logging;

// Re-export core types
pub use vista_core::{
    CameraEngine, CameraEvent, CameraOptions, CameraState, Mat4, ObserverCallback, ObserverTag,
    Result, Vec3, VistaError,
};

// Re-export engine types
pub use vista_render::{CameraUniforms, ProjectionMode, RenderCamera};
