//! Core abstractions for vista-rs.
//!
//! This crate provides the fundamental types shared by the camera engine and
//! the camera descriptor:
//! - [`CameraEngine`] trait, the capability interface a descriptor drives
//! - [`ObserverRegistry`] for change notifications
//! - [`CameraOptions`] configuration and the [`CameraState`] snapshot
//! - [`VistaError`] and the crate-wide [`Result`] alias

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod engine;
pub mod error;
pub mod observer;
pub mod options;
pub mod state;

pub use engine::CameraEngine;
pub use error::{validate_clipping_range, Result, VistaError};
pub use observer::{CameraEvent, ObserverCallback, ObserverRegistry, ObserverTag};
pub use options::CameraOptions;
pub use state::CameraState;

// Re-export glam types for convenience
pub use glam::{Mat4, Vec3};
