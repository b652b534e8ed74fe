//! Backend-agnostic draw commands
//!
//! The engine never talks to a graphics API directly. Each object is turned
//! into a `DrawCommand` according to its fill mode and handed to whatever
//! `Canvas` the host supplies.

use glam::Vec2;

use super::object::{FillMode, Object, TextureHandle};
use super::vertex::{Rgba, Vertex};

/// One object's worth of drawing
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand<'a> {
    /// Connected polyline through every vertex
    Lines { color: Rgba, points: Vec<Vec2> },
    /// One point per vertex
    Points { color: Rgba, points: Vec<Vec2> },
    /// Filled triangles, optionally textured
    Geometry {
        texture: Option<TextureHandle>,
        vertices: &'a [Vertex],
    },
}

impl DrawCommand<'_> {
    pub fn vertex_count(&self) -> usize {
        match self {
            DrawCommand::Lines { points, .. } | DrawCommand::Points { points, .. } => points.len(),
            DrawCommand::Geometry { vertices, .. } => vertices.len(),
        }
    }
}

/// Build the draw command for an object
pub fn draw_command(object: &Object) -> DrawCommand<'_> {
    match object.fill_mode {
        FillMode::WireFrame => DrawCommand::Lines {
            color: object.fill_color,
            points: object.mesh.point_sequence().collect(),
        },
        FillMode::Points => DrawCommand::Points {
            color: object.fill_color,
            points: object.mesh.point_sequence().collect(),
        },
        FillMode::SolidColor => DrawCommand::Geometry {
            texture: None,
            vertices: object.mesh.render_buffer(),
        },
        FillMode::Texture => DrawCommand::Geometry {
            texture: object.texture,
            vertices: object.mesh.render_buffer(),
        },
    }
}

/// Render target supplied by the host
pub trait Canvas {
    fn clear(&mut self) {}

    fn draw(&mut self, command: DrawCommand<'_>);

    fn present(&mut self) {}
}

/// Canvas that only counts what it was asked to draw
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recorder {
    pub frames: u64,
    pub commands: usize,
    pub lines: usize,
    pub points: usize,
    pub geometry: usize,
    pub textured: usize,
    pub vertices: usize,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Canvas for Recorder {
    fn draw(&mut self, command: DrawCommand<'_>) {
        self.commands += 1;
        self.vertices += command.vertex_count();
        match command {
            DrawCommand::Lines { .. } => self.lines += 1,
            DrawCommand::Points { .. } => self.points += 1,
            DrawCommand::Geometry { texture, .. } => {
                self.geometry += 1;
                if texture.is_some() {
                    self.textured += 1;
                }
            }
        }
    }

    fn present(&mut self) {
        self.frames += 1;
    }
}
