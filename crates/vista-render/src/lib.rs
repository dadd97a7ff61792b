//! Camera engine for vista-rs.
//!
//! This crate provides the concrete [`CameraEngine`](vista_core::CameraEngine)
//! implementation:
//! - [`RenderCamera`], the camera model with view and projection matrices
//! - [`CameraUniforms`], its GPU upload layout

pub mod camera;
pub mod uniforms;

pub use camera::{ProjectionMode, RenderCamera, MIN_DISTANCE, MIN_THICKNESS};
pub use uniforms::CameraUniforms;
