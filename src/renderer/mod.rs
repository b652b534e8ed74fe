//! Renderable side of the engine
//!
//! Vertices, meshes and drawable objects, plus the draw-command seam that a
//! host rendering backend plugs into.

pub mod canvas;
pub mod mesh;
pub mod object;
pub mod shapes;
pub mod vertex;

pub use canvas::{Canvas, DrawCommand, Recorder, draw_command};
pub use mesh::Mesh;
pub use object::{FillMode, Object, TextureHandle};
pub use shapes::{Circle, circle_mesh, midpoint_circle_offsets, rectangle, sprite};
pub use vertex::{Color, PALETTE, Rgba, Vertex};
