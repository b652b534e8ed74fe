//! Shape generation for 2D primitives

use glam::{IVec2, Vec2};

use super::mesh::Mesh;
use super::object::{FillMode, Object, TextureHandle};
use super::vertex::{Color, Rgba, Vertex};
use crate::consts::MAX_RADIUS;
use crate::error::{Result, validate_radius};

/// Two triangles covering the box `[position, position + dimensions]`
///
/// The first vertex is `position`, so the object anchors on that corner.
/// With a texture the fill mode is `Texture`, otherwise `SolidColor`.
pub fn rectangle(
    dimensions: Vec2,
    position: Vec2,
    color: Rgba,
    texture: Option<TextureHandle>,
) -> Object {
    let (x0, y0) = (position.x, position.y);
    let (x1, y1) = (position.x + dimensions.x, position.y + dimensions.y);

    let top_left = Vertex::new(Vec2::new(x0, y0), color, Vec2::new(0.0, 0.0));
    let bottom_left = Vertex::new(Vec2::new(x0, y1), color, Vec2::new(0.0, 1.0));
    let bottom_right = Vertex::new(Vec2::new(x1, y1), color, Vec2::new(1.0, 1.0));
    let top_right = Vertex::new(Vec2::new(x1, y0), color, Vec2::new(1.0, 0.0));

    let mut mesh = Mesh::with_capacity(6);
    mesh.add_triangle(top_left, bottom_left, bottom_right);
    mesh.add_triangle(bottom_right, top_right, top_left);

    Object {
        id: 0,
        position,
        mesh,
        fill_color: color,
        fill_mode: if texture.is_some() {
            FillMode::Texture
        } else {
            FillMode::SolidColor
        },
        texture,
    }
}

/// White textured rectangle
pub fn sprite(texture: TextureHandle, dimensions: Vec2, position: Vec2) -> Object {
    rectangle(dimensions, position, Color::White.rgba(), Some(texture))
}

/// Integer offsets of a midpoint-circle ring
///
/// Classic Bresenham stepping through one octant, mirrored 8 ways. Each step
/// emits all 8 reflections, so axis and diagonal points may repeat. The first
/// offset is always `(r, 0)`. The radius is capped at `MAX_RADIUS`.
pub fn midpoint_circle_offsets(radius: f32) -> Vec<IVec2> {
    let r = radius.min(MAX_RADIUS).round() as i32;
    let mut offsets = Vec::with_capacity(8 * (r.max(0) as usize + 1));

    let mut x = r;
    let mut y = 0;
    let mut err = 1 - r;

    while x >= y {
        offsets.extend([
            IVec2::new(x, y),
            IVec2::new(y, x),
            IVec2::new(-y, x),
            IVec2::new(-x, y),
            IVec2::new(-x, -y),
            IVec2::new(-y, -x),
            IVec2::new(y, -x),
            IVec2::new(x, -y),
        ]);

        y += 1;
        if err < 0 {
            err += 2 * y + 1;
        } else {
            x -= 1;
            err += 2 * (y - x) + 1;
        }
    }

    offsets
}

/// Point-ring mesh around `center`
pub fn circle_mesh(center: Vec2, radius: f32, color: Rgba) -> Mesh {
    midpoint_circle_offsets(radius)
        .into_iter()
        .map(|offset| Vertex::colored(center + offset.as_vec2(), color))
        .collect()
}

/// A circle drawn as a ring of points
///
/// The ring density follows the radius: larger circles get more points.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    object: Object,
    radius: f32,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32, color: Rgba) -> Result<Self> {
        let radius = validate_radius(radius)?;
        let mut object = Object {
            id: 0,
            position: center,
            mesh: Mesh::new(),
            fill_color: color,
            fill_mode: FillMode::Points,
            texture: None,
        };
        Self::regenerate(&mut object, radius);
        Ok(Self { object, radius })
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn center(&self) -> Vec2 {
        self.object.position
    }

    /// Change the radius and regenerate the ring
    pub fn set_radius(&mut self, radius: f32) -> Result<()> {
        self.radius = validate_radius(radius)?;
        self.sync();
        Ok(())
    }

    pub fn set_center(&mut self, center: Vec2) {
        self.object.position = center;
        self.sync();
    }

    pub fn object(&self) -> &Object {
        &self.object
    }

    pub fn into_object(self) -> Object {
        self.object
    }

    /// Rebuild `object`'s ring around its position in its fill colour
    pub(crate) fn regenerate(object: &mut Object, radius: f32) {
        object.mesh = circle_mesh(object.position, radius, object.fill_color);
    }

    fn sync(&mut self) {
        Self::regenerate(&mut self.object, self.radius);
    }
}
