//! Rigid body state: velocity, force, mass and the derived acceleration

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_MASS;
use crate::error::{EngineError, Result, validate_mass};

/// Linear motion state of a rigid object
///
/// `acceleration` is never set directly: every force mutation recomputes it
/// as `force / mass`. Deserialized bodies go through the same mass check and
/// derive their acceleration instead of trusting a stored one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StoredBody")]
pub struct RigidBody {
    pub velocity: Vec2,
    pub(crate) acceleration: Vec2,
    force: Vec2,
    mass: f32,
    /// World clock (seconds) at the last integration step
    pub last_update: f64,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self {
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            force: Vec2::ZERO,
            mass: DEFAULT_MASS,
            last_update: 0.0,
        }
    }
}

/// Serialized form of a body; any stored acceleration is ignored
#[derive(Deserialize)]
#[serde(default)]
struct StoredBody {
    velocity: Vec2,
    force: Vec2,
    mass: f32,
    last_update: f64,
}

impl Default for StoredBody {
    fn default() -> Self {
        Self {
            velocity: Vec2::ZERO,
            force: Vec2::ZERO,
            mass: DEFAULT_MASS,
            last_update: 0.0,
        }
    }
}

impl TryFrom<StoredBody> for RigidBody {
    type Error = EngineError;

    fn try_from(stored: StoredBody) -> Result<Self> {
        let mut body = Self::with_mass(stored.mass)?.with_velocity(stored.velocity);
        body.last_update = stored.last_update;
        body.add_force(stored.force);
        Ok(body)
    }
}

impl RigidBody {
    /// Body at rest with unit mass
    pub fn new() -> Self {
        Self::default()
    }

    /// Body at rest with the given mass (must be positive and finite)
    pub fn with_mass(mass: f32) -> Result<Self> {
        Ok(Self {
            mass: validate_mass(mass)?,
            ..Self::default()
        })
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    pub fn force(&self) -> Vec2 {
        self.force
    }

    pub fn acceleration(&self) -> Vec2 {
        self.acceleration
    }

    pub fn set_mass(&mut self, mass: f32) -> Result<()> {
        self.mass = validate_mass(mass)?;
        self.update_acceleration();
        Ok(())
    }

    /// Accumulate a force and refresh the acceleration
    pub fn add_force(&mut self, force: Vec2) {
        self.force += force;
        self.update_acceleration();
    }

    pub fn clear_force(&mut self) {
        self.force = Vec2::ZERO;
        self.update_acceleration();
    }

    /// Linear decay toward rest
    ///
    /// If either axis would drop below zero the whole force is zeroed,
    /// otherwise both axes lose `step`.
    pub(crate) fn decay_force(&mut self, step: f32) {
        if self.force.x - step < 0.0 || self.force.y - step < 0.0 {
            self.force = Vec2::ZERO;
        } else {
            self.force -= step;
        }
        self.update_acceleration();
    }

    pub(crate) fn update_acceleration(&mut self) {
        self.acceleration = self.force / self.mass;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use proptest::prelude::*;

    #[test]
    fn test_default_body() {
        let body = RigidBody::new();
        assert_eq!(body.mass(), 1.0);
        assert_eq!(body.force(), Vec2::ZERO);
        assert_eq!(body.acceleration(), Vec2::ZERO);
        assert_eq!(body.velocity, Vec2::ZERO);
    }

    #[test]
    fn test_mass_must_be_positive() {
        assert!(matches!(RigidBody::with_mass(0.0), Err(EngineError::InvalidMass(_))));
        assert!(RigidBody::with_mass(-3.0).is_err());

        let mut body = RigidBody::with_mass(2.0).unwrap();
        assert!(body.set_mass(0.0).is_err());
        assert_eq!(body.mass(), 2.0);
    }

    #[test]
    fn test_add_force_updates_acceleration() {
        let mut body = RigidBody::with_mass(2.0).unwrap();
        body.add_force(Vec2::new(10.0, 4.0));
        assert_eq!(body.acceleration(), Vec2::new(5.0, 2.0));

        body.add_force(Vec2::new(-10.0, 0.0));
        assert_eq!(body.force(), Vec2::new(0.0, 4.0));
        assert_eq!(body.acceleration(), Vec2::new(0.0, 2.0));
    }

    #[test]
    fn test_set_mass_refreshes_acceleration() {
        let mut body = RigidBody::new();
        body.add_force(Vec2::new(8.0, 8.0));
        body.set_mass(4.0).unwrap();
        assert_eq!(body.acceleration(), Vec2::new(2.0, 2.0));
    }

    #[test]
    fn test_decay_counts_down_by_step() {
        let mut body = RigidBody::new();
        body.add_force(Vec2::new(3.0, 5.0));

        body.decay_force(1.0);
        assert_eq!(body.force(), Vec2::new(2.0, 4.0));
        body.decay_force(1.0);
        assert_eq!(body.force(), Vec2::new(1.0, 3.0));
        // x - 1 == 0 is not below the threshold
        body.decay_force(1.0);
        assert_eq!(body.force(), Vec2::new(0.0, 2.0));
        // x - 1 < 0 zeroes both axes
        body.decay_force(1.0);
        assert_eq!(body.force(), Vec2::ZERO);
        assert_eq!(body.acceleration(), Vec2::ZERO);
    }

    #[test]
    fn test_decay_zeroes_when_any_axis_is_small() {
        let mut body = RigidBody::new();
        body.add_force(Vec2::new(0.0, 100.0));
        body.decay_force(1.0);
        assert_eq!(body.force(), Vec2::ZERO);

        body.add_force(Vec2::new(50.0, -1.0));
        body.decay_force(1.0);
        assert_eq!(body.force(), Vec2::ZERO);
    }

    #[test]
    fn test_deserialize_rejects_bad_mass() {
        let json = r#"{"velocity":[0,0],"acceleration":[5,5],"force":[1,0],"mass":0.0,"last_update":0.0}"#;
        let err = serde_json::from_str::<RigidBody>(json).unwrap_err();
        assert!(err.to_string().contains("mass"));
        assert!(serde_json::from_str::<RigidBody>(r#"{"mass":-1.0}"#).is_err());
    }

    #[test]
    fn test_deserialize_rederives_acceleration() {
        let json = r#"{"velocity":[3,0],"acceleration":[5,5],"force":[4,2],"mass":2.0,"last_update":1.5}"#;
        let body: RigidBody = serde_json::from_str(json).unwrap();
        assert_eq!(body.acceleration(), Vec2::new(2.0, 1.0));
        assert_eq!(body.velocity, Vec2::new(3.0, 0.0));
        assert_eq!(body.last_update, 1.5);

        let back: RigidBody = serde_json::from_str(&serde_json::to_string(&body).unwrap()).unwrap();
        assert_eq!(back, body);
    }

    #[test]
    fn test_deserialize_defaults_missing_fields() {
        let body: RigidBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body, RigidBody::new());
    }

    proptest! {
        #[test]
        fn prop_acceleration_is_force_over_mass(
            mass in 0.01f32..1000.0,
            forces in prop::collection::vec((-1e4f32..1e4, -1e4f32..1e4), 1..20),
        ) {
            let mut body = RigidBody::with_mass(mass).unwrap();
            for (fx, fy) in forces {
                body.add_force(Vec2::new(fx, fy));
                let expected = body.force() / body.mass();
                prop_assert!(body.acceleration().abs_diff_eq(expected, 1e-3));
            }
        }
    }
}
