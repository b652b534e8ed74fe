//! Rigid objects: a drawable object, a rigid body and a collision hull

use glam::Vec2;
use serde::Serialize;

use super::body::RigidBody;
use super::collision::{Shape, overlap};
use crate::error::{EngineError, Result, validate_radius};
use crate::renderer::object::{Object, TextureHandle};
use crate::renderer::shapes::{Circle, rectangle, sprite};
use crate::renderer::vertex::Rgba;

/// Collision geometry relative to the object's anchor
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub enum Hull {
    /// No geometry; collision queries always answer false
    #[default]
    None,
    /// Circle centred on the anchor
    Circle { radius: f32 },
    /// Box with its min corner on the anchor
    Rectangle { dimensions: Vec2 },
}

/// An object that takes part in the physics step
///
/// A rigid object with a circular hull is a rigid circle: its mesh is the
/// midpoint ring for the current radius and centre, regenerated whenever
/// either changes.
#[derive(Debug, Clone, Serialize)]
pub struct RigidObject {
    pub object: Object,
    pub body: RigidBody,
    hull: Hull,
}

impl RigidObject {
    /// Rigid object without collision geometry
    pub fn new(object: Object) -> Self {
        Self {
            object,
            body: RigidBody::new(),
            hull: Hull::None,
        }
    }

    pub fn with_body(mut self, body: RigidBody) -> Self {
        self.body = body;
        self
    }

    /// Rigid circle drawn as a point ring
    pub fn circle(center: Vec2, radius: f32, color: Rgba) -> Result<Self> {
        let circle = Circle::new(center, radius, color)?;
        Ok(Self {
            hull: Hull::Circle {
                radius: circle.radius(),
            },
            object: circle.into_object(),
            body: RigidBody::new(),
        })
    }

    /// Rigid box over `[position, position + dimensions]`
    pub fn rectangle(dimensions: Vec2, position: Vec2, color: Rgba) -> Self {
        Self {
            object: rectangle(dimensions, position, color, None),
            body: RigidBody::new(),
            hull: Hull::Rectangle { dimensions },
        }
    }

    /// Rigid textured box
    pub fn sprite(texture: TextureHandle, dimensions: Vec2, position: Vec2) -> Self {
        Self {
            object: sprite(texture, dimensions, position),
            body: RigidBody::new(),
            hull: Hull::Rectangle { dimensions },
        }
    }

    pub fn id(&self) -> u32 {
        self.object.id
    }

    pub fn position(&self) -> Vec2 {
        self.object.position
    }

    pub fn hull(&self) -> Hull {
        self.hull
    }

    pub fn radius(&self) -> Option<f32> {
        match self.hull {
            Hull::Circle { radius } => Some(radius),
            _ => None,
        }
    }

    /// Hull placed at the current anchor
    pub fn shape(&self) -> Shape {
        let anchor = self.object.position;
        match self.hull {
            Hull::None => Shape::Empty,
            Hull::Circle { radius } => Shape::circle(anchor, radius),
            Hull::Rectangle { dimensions } => Shape::rect(anchor, anchor + dimensions),
        }
    }

    pub fn collides_with(&self, other: &RigidObject) -> bool {
        overlap(&self.shape(), &other.shape())
    }

    pub fn collides_with_point(&self, point: Vec2) -> bool {
        self.shape().contains_point(point)
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.object.translate(delta);
        self.sync();
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.translate(position - self.object.position);
    }

    /// Change a circle's radius and regenerate its ring
    pub fn set_radius(&mut self, radius: f32) -> Result<()> {
        let radius = validate_radius(radius)?;
        match &mut self.hull {
            Hull::Circle { radius: current } => *current = radius,
            _ => return Err(EngineError::NotACircle(self.object.id)),
        }
        self.sync();
        Ok(())
    }

    pub fn set_fill_color(&mut self, color: Rgba) {
        self.object.set_fill_color(color);
    }

    /// Rebuild derived geometry from the hull and anchor
    ///
    /// Only circles carry generated geometry; box meshes follow `translate`.
    pub fn sync(&mut self) {
        if let Hull::Circle { radius } = self.hull {
            Circle::regenerate(&mut self.object, radius);
        }
    }
}

impl From<Object> for RigidObject {
    fn from(object: Object) -> Self {
        Self::new(object)
    }
}
