//! Caco Engine - a small 2D game engine core
//!
//! Core modules:
//! - `renderer`: Vertices, meshes, drawable objects and the draw-command seam
//! - `sim`: Rigid bodies, collision dispatch, the physics step and the world
//! - `settings`: JSON-backed engine settings
//! - `error`: Rejected preconditions and settings failures

pub mod error;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{EngineError, Result};
pub use renderer::{Canvas, Color, DrawCommand, FillMode, Mesh, Object, Rgba, TextureHandle, Vertex};
pub use settings::{FloorPolicy, PhysicsSettings, Settings};
pub use sim::{Collider, Hull, RigidBody, RigidObject, Shape, World};

/// 2D vector used throughout the engine
pub type Vector2D = glam::Vec2;

/// Engine configuration constants
pub mod consts {
    /// Objects below this Y are lifted back onto it
    pub const FLOOR_Y: f32 = 800.0;
    /// Per-frame linear force decay
    pub const FORCE_DECAY: f32 = 1.0;
    /// Largest circle radius accepted; keeps the generated ring bounded
    pub const MAX_RADIUS: f32 = 100_000.0;
    /// Mass of a freshly created rigid body
    pub const DEFAULT_MASS: f32 = 1.0;
    /// Default window size
    pub const DEFAULT_RESOLUTION: [u32; 2] = [800, 600];
}
