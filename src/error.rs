//! Error type for the engine core
//!
//! The core is pure in-memory math, so every variant here is a rejected
//! precondition or a settings file that could not be read.

use thiserror::Error;

use crate::consts::MAX_RADIUS;

#[derive(Debug, Error)]
pub enum EngineError {
    /// Mass must be strictly positive and finite
    #[error("mass must be positive and finite, got {0}")]
    InvalidMass(f32),

    /// Radius must lie in `[0, MAX_RADIUS]`
    #[error("radius must be between 0 and {max}, got {0}", max = MAX_RADIUS)]
    InvalidRadius(f32),

    /// An object anchor was requested from a mesh with no vertices
    #[error("cannot anchor an object on an empty mesh")]
    EmptyMesh,

    /// `set_radius` on an object whose hull is not a circle
    #[error("object {0} does not have a circular hull")]
    NotACircle(u32),

    /// Shape and object lists handed to a collider differ in length
    #[error("collider needs one object per shape ({shapes} shapes, {objects} objects)")]
    MismatchedCollider { shapes: usize, objects: usize },

    /// A physics setting that would break the step
    #[error("invalid physics setting {name}: {value}")]
    InvalidPhysics { name: &'static str, value: f32 },

    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid settings: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;

/// Reject masses that would make `force / mass` non-finite
pub(crate) fn validate_mass(mass: f32) -> Result<f32> {
    if mass.is_finite() && mass > 0.0 {
        Ok(mass)
    } else {
        Err(EngineError::InvalidMass(mass))
    }
}

pub(crate) fn validate_radius(radius: f32) -> Result<f32> {
    if (0.0..=MAX_RADIUS).contains(&radius) {
        Ok(radius)
    } else {
        Err(EngineError::InvalidRadius(radius))
    }
}
