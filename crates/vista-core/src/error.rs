//! Error types for vista-rs.

use thiserror::Error;

/// The main error type for vista-rs operations.
#[derive(Error, Debug)]
pub enum VistaError {
    /// A clipping range whose near bound lies beyond its far bound.
    #[error("invalid clipping range: near ({near}) exceeds far ({far})")]
    InvalidClippingRange { near: f32, far: f32 },

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for vista-rs operations.
pub type Result<T> = std::result::Result<T, VistaError>;

/// Checks that `near <= far`.
///
/// NaN bounds compare false and therefore pass; the engine is left to deal
/// with them the same way it deals with any other non-finite input.
pub fn validate_clipping_range(near: f32, far: f32) -> Result<()> {
    if near > far {
        return Err(VistaError::InvalidClippingRange { near, far });
    }
    Ok(())
}
