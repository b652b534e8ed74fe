//! Per-frame physics step
//!
//! Advances every rigid object by one variable timestep.

use glam::Vec2;

use super::rigid::RigidObject;
use crate::settings::{FloorPolicy, PhysicsSettings};

/// Integrate all rigid objects, in list order
///
/// The stored acceleration absorbs the timestep before it is added to the
/// velocity (`a *= dt; v += a`), then the object moves by `v * dt`. After the
/// move, objects below the floor are lifted back onto it, the force decays
/// linearly and the acceleration is re-derived from what is left.
pub fn integrate(objects: &mut [RigidObject], dt: f32, now: f64, settings: &PhysicsSettings) {
    for rigid in objects.iter_mut() {
        step_object(rigid, dt, now, settings);
    }
}

fn step_object(rigid: &mut RigidObject, dt: f32, now: f64, settings: &PhysicsSettings) {
    rigid.body.acceleration *= dt;
    rigid.body.velocity += rigid.body.acceleration;

    let displacement = rigid.body.velocity * dt;
    rigid.translate(displacement);

    let overshoot = rigid.position().y - settings.floor_y;
    if overshoot > 0.0 {
        rigid.translate(Vec2::new(0.0, -overshoot));
        if settings.floor == FloorPolicy::ClampAndStop {
            rigid.body.velocity = Vec2::ZERO;
        }
        log::trace!("object {} clamped to floor (overshoot {})", rigid.id(), overshoot);
    }

    rigid.body.decay_force(settings.force_decay);
    rigid.body.last_update = now;

    log::trace!(
        "object {}: pos={:?} vel={:?} force={:?}",
        rigid.id(),
        rigid.position(),
        rigid.body.velocity,
        rigid.body.force()
    );
}
