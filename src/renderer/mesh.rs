//! Vertex storage grouped implicitly in triangles

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::vertex::Vertex;

/// Ordered vertex list; every consecutive triple is one triangle
///
/// Insertion order is render order. Winding is whatever the caller supplied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    vertices: Vec<Vertex>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(capacity),
        }
    }

    /// Append one triangle, vertices kept in the given order
    pub fn add_triangle(&mut self, v0: Vertex, v1: Vertex, v2: Vertex) {
        self.vertices.extend([v0, v1, v2]);
    }

    /// Append a single vertex (point rings, polylines)
    pub fn push_vertex(&mut self, vertex: Vertex) {
        self.vertices.push(vertex);
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertex positions in render order, for wireframe and point drawing
    pub fn point_sequence(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.vertices.iter().map(|v| v.position)
    }

    /// Full vertices in render order, for filled and textured drawing
    pub fn render_buffer(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Complete triangles; a trailing partial triple is skipped
    pub fn triangles(&self) -> impl Iterator<Item = &[Vertex]> + '_ {
        self.vertices.chunks_exact(3)
    }

    pub fn first_position(&self) -> Option<Vec2> {
        self.vertices.first().map(|v| v.position)
    }

    /// Raw bytes of the render buffer for a GPU upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub(crate) fn vertices_mut(&mut self) -> &mut [Vertex] {
        &mut self.vertices
    }
}

impl FromIterator<Vertex> for Mesh {
    fn from_iter<I: IntoIterator<Item = Vertex>>(iter: I) -> Self {
        Self {
            vertices: iter.into_iter().collect(),
        }
    }
}
