//! Broadcast collision dispatch
//!
//! A `Collider` pairs a list of collision shapes with a parallel list of
//! rigid objects and runs a resolution callback for every detected hit.
//!
//! The scan visits every *ordered* pair `(x, y)` with `x != y`. When shapes
//! `x` and `y` overlap the callback receives `objects[y]`; the pair comes up
//! again as `(y, x)` and the callback then receives `objects[x]`. Each
//! colliding pair therefore yields two calls, one per participant, and the
//! resolution logic only ever has to handle "the object on the receiving
//! end". Collapsing this into a symmetric half-scan would halve the number
//! of reactions and change game behaviour.

use super::collision::{Shape, overlap};
use super::rigid::RigidObject;
use crate::error::{EngineError, Result};

/// Resolution callback; the return value reports whether the hit was resolved
pub type Resolution<'a> = Box<dyn FnMut(&mut RigidObject) -> bool + 'a>;

pub struct Collider<'a> {
    shapes: Vec<Shape>,
    objects: Vec<&'a mut RigidObject>,
    callback: Option<Resolution<'a>>,
}

impl<'a> Collider<'a> {
    /// Shapes and objects must correspond index for index
    pub fn new(shapes: Vec<Shape>, objects: Vec<&'a mut RigidObject>) -> Result<Self> {
        if shapes.len() != objects.len() {
            return Err(EngineError::MismatchedCollider {
                shapes: shapes.len(),
                objects: objects.len(),
            });
        }
        Ok(Self {
            shapes,
            objects,
            callback: None,
        })
    }

    /// Use each object's own hull as its shape
    pub fn from_objects<I>(objects: I) -> Self
    where
        I: IntoIterator<Item = &'a mut RigidObject>,
    {
        let objects: Vec<&'a mut RigidObject> = objects.into_iter().collect();
        let shapes = objects.iter().map(|o| o.shape()).collect();
        Self {
            shapes,
            objects,
            callback: None,
        }
    }

    pub fn add_object(&mut self, shape: Shape, object: &'a mut RigidObject) {
        self.shapes.push(shape);
        self.objects.push(object);
    }

    pub fn set_callback<F>(&mut self, callback: F)
    where
        F: FnMut(&mut RigidObject) -> bool + 'a,
    {
        self.callback = Some(Box::new(callback));
    }

    pub fn with_callback<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&mut RigidObject) -> bool + 'a,
    {
        self.set_callback(callback);
        self
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Run the exhaustive ordered-pair scan
    ///
    /// Returns how many callback invocations reported a resolution.
    pub fn handle(&mut self) -> usize {
        let Some(callback) = self.callback.as_mut() else {
            log::warn!("Collider::handle called without a callback ({} shapes)", self.shapes.len());
            return 0;
        };

        let n = self.shapes.len();
        let mut resolved = 0;
        let mut hits = 0;

        for x in 0..n {
            for y in 0..n {
                if x == y || !overlap(&self.shapes[x], &self.shapes[y]) {
                    continue;
                }
                hits += 1;
                log::trace!("collision {} -> {}", x, y);
                if callback(&mut *self.objects[y]) {
                    resolved += 1;
                }
            }
        }

        log::debug!("collider scanned {} shapes: {} hits, {} resolved", n, hits, resolved);
        resolved
    }
}
