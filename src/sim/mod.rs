//! Simulation module
//!
//! Rigid bodies, collision primitives and dispatch, the per-frame physics
//! step and the world that owns everything:
//! - Single-threaded, one frame at a time
//! - Stable iteration order (insertion order of the object lists)
//! - No rendering backend dependencies

pub mod body;
pub mod collider;
pub mod collision;
pub mod rigid;
pub mod tick;
pub mod world;

pub use body::RigidBody;
pub use collider::{Collider, Resolution};
pub use collision::{Shape, circle_contains_point, circles_overlap, overlap};
pub use rigid::{Hull, RigidObject};
pub use tick::integrate;
pub use world::World;
