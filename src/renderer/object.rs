//! Drawable entities

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::mesh::Mesh;
use super::vertex::Rgba;
use crate::error::{EngineError, Result};

/// How an object's mesh is rasterized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FillMode {
    /// Polyline through the vertices
    WireFrame,
    /// Filled triangles with per-vertex colour
    #[default]
    SolidColor,
    /// Filled triangles sampling the attached texture
    Texture,
    /// One point per vertex
    Points,
}

/// Opaque handle to a texture owned by the texture subsystem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextureHandle(pub u32);

/// A positioned, coloured mesh
///
/// `position` is a cached anchor, never recomputed from the mesh. Shapes
/// built from triangles anchor on their first vertex; circles anchor on their
/// centre. `translate` moves anchor and vertices together so whichever
/// relation was set up at construction survives.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Object {
    pub id: u32,
    pub position: Vec2,
    pub mesh: Mesh,
    pub fill_color: Rgba,
    pub fill_mode: FillMode,
    pub texture: Option<TextureHandle>,
}

impl Object {
    /// Empty object at the origin
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a mesh, anchoring on its first vertex
    pub fn from_mesh(mesh: Mesh, fill_color: Rgba, fill_mode: FillMode) -> Result<Self> {
        let position = mesh.first_position().ok_or(EngineError::EmptyMesh)?;
        Ok(Self {
            id: 0,
            position,
            mesh,
            fill_color,
            fill_mode,
            texture: None,
        })
    }

    pub fn with_texture(mut self, texture: TextureHandle) -> Self {
        self.texture = Some(texture);
        self
    }

    /// Shift the anchor and every vertex by `delta`
    pub fn translate(&mut self, delta: Vec2) {
        self.position += delta;
        for vertex in self.mesh.vertices_mut() {
            vertex.position += delta;
        }
    }

    /// Move the anchor to `position`, carrying the mesh along
    pub fn set_position(&mut self, position: Vec2) {
        self.translate(position - self.position);
    }

    /// Recolour every vertex; the fill mode is left alone
    pub fn set_fill_color(&mut self, color: Rgba) {
        self.fill_color = color;
        for vertex in self.mesh.vertices_mut() {
            vertex.color = color;
        }
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.position == other.position
            && self.fill_color == other.fill_color
            && self.fill_mode == other.fill_mode
            && self.mesh == other.mesh
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::vertex::{Color, Vertex};
    use proptest::prelude::*;

    fn triangle_object(origin: Vec2) -> Object {
        let mut mesh = Mesh::new();
        let white = Color::White.rgba();
        mesh.add_triangle(
            Vertex::colored(origin, white),
            Vertex::colored(origin + Vec2::new(10.0, 0.0), white),
            Vertex::colored(origin + Vec2::new(0.0, 10.0), white),
        );
        Object::from_mesh(mesh, white, FillMode::SolidColor).unwrap()
    }

    #[test]
    fn test_from_mesh_anchors_on_first_vertex() {
        let obj = triangle_object(Vec2::new(3.0, 4.0));
        assert_eq!(obj.position, Vec2::new(3.0, 4.0));
    }

    #[test]
    fn test_from_empty_mesh_is_rejected() {
        let result = Object::from_mesh(Mesh::new(), Rgba::default(), FillMode::Points);
        assert!(matches!(result, Err(EngineError::EmptyMesh)));
    }

    #[test]
    fn test_translate_moves_anchor_and_vertices() {
        let mut obj = triangle_object(Vec2::ZERO);
        obj.translate(Vec2::new(5.0, -2.0));

        assert_eq!(obj.position, Vec2::new(5.0, -2.0));
        assert_eq!(obj.mesh.first_position(), Some(obj.position));
        let points: Vec<Vec2> = obj.mesh.point_sequence().collect();
        assert_eq!(points[1], Vec2::new(15.0, -2.0));
        assert_eq!(points[2], Vec2::new(5.0, 8.0));
    }

    #[test]
    fn test_translate_empty_object() {
        let mut obj = Object::new();
        obj.translate(Vec2::new(1.0, 1.0));
        assert_eq!(obj.position, Vec2::new(1.0, 1.0));
        assert!(obj.mesh.is_empty());
    }

    #[test]
    fn test_set_position() {
        let mut obj = triangle_object(Vec2::new(1.0, 1.0));
        obj.set_position(Vec2::new(100.0, 50.0));
        assert_eq!(obj.position, Vec2::new(100.0, 50.0));
        assert_eq!(obj.mesh.first_position(), Some(Vec2::new(100.0, 50.0)));
    }

    #[test]
    fn test_set_fill_color_keeps_mode() {
        let mut obj = triangle_object(Vec2::ZERO);
        obj.fill_mode = FillMode::WireFrame;
        obj.set_fill_color(Color::Red.rgba());

        assert_eq!(obj.fill_mode, FillMode::WireFrame);
        assert_eq!(obj.fill_color, Color::Red.rgba());
        assert!(obj.mesh.render_buffer().iter().all(|v| v.color == Color::Red.rgba()));
    }

    #[test]
    fn test_equality_ignores_texture() {
        let a = triangle_object(Vec2::ZERO);
        let b = a.clone().with_texture(TextureHandle(7));
        assert_eq!(a, b);

        let mut c = a.clone();
        c.id = 2;
        assert_ne!(a, c);

        let mut d = a.clone();
        d.translate(Vec2::new(0.5, 0.0));
        assert_ne!(a, d);
    }

    proptest! {
        #[test]
        fn prop_translate_shifts_every_vertex(
            dx in -1000.0f32..1000.0,
            dy in -1000.0f32..1000.0,
        ) {
            let mut obj = triangle_object(Vec2::new(10.0, 20.0));
            let before: Vec<Vec2> = obj.mesh.point_sequence().collect();
            let anchor = obj.position;
            let delta = Vec2::new(dx, dy);

            obj.translate(delta);

            prop_assert_eq!(obj.position, anchor + delta);
            for (old, new) in before.iter().zip(obj.mesh.point_sequence()) {
                prop_assert_eq!(new, *old + delta);
            }
            prop_assert_eq!(obj.mesh.first_position(), Some(obj.position));
        }

        #[test]
        fn prop_translate_is_associative(
            a in (-100.0f32..100.0, -100.0f32..100.0),
            b in (-100.0f32..100.0, -100.0f32..100.0),
        ) {
            let d1 = Vec2::new(a.0, a.1);
            let d2 = Vec2::new(b.0, b.1);

            let mut stepwise = triangle_object(Vec2::ZERO);
            stepwise.translate(d1);
            stepwise.translate(d2);

            let mut combined = triangle_object(Vec2::ZERO);
            combined.translate(d1 + d2);

            prop_assert!(stepwise.position.abs_diff_eq(combined.position, 1e-3));
            for (p, q) in stepwise.mesh.point_sequence().zip(combined.mesh.point_sequence()) {
                prop_assert!(p.abs_diff_eq(q, 1e-3));
            }
        }
    }
}
