//! Engine settings
//!
//! Loaded from a JSON file; every field is optional and falls back to the
//! defaults below.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_RESOLUTION, FLOOR_Y, FORCE_DECAY};
use crate::error::{EngineError, Result};

/// What happens to an object's velocity when it is clamped to the floor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FloorPolicy {
    /// Lift the object back onto the floor and keep its velocity
    #[default]
    Clamp,
    /// Lift the object back onto the floor and zero its velocity
    ClampAndStop,
}

impl FloorPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            FloorPolicy::Clamp => "clamp",
            FloorPolicy::ClampAndStop => "clamp-and-stop",
        }
    }
}

/// Tunables for the physics step
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsSettings {
    /// Y coordinate objects are not allowed to sink below
    pub floor_y: f32,
    /// Amount subtracted from each force axis per frame
    pub force_decay: f32,
    pub floor: FloorPolicy,
}

impl PhysicsSettings {
    /// Reject values that would make the step diverge or skip the floor
    pub fn validate(&self) -> Result<()> {
        if !self.floor_y.is_finite() {
            return Err(EngineError::InvalidPhysics {
                name: "floor_y",
                value: self.floor_y,
            });
        }
        if !(self.force_decay.is_finite() && self.force_decay >= 0.0) {
            return Err(EngineError::InvalidPhysics {
                name: "force_decay",
                value: self.force_decay,
            });
        }
        Ok(())
    }
}

impl Default for PhysicsSettings {
    fn default() -> Self {
        Self {
            floor_y: FLOOR_Y,
            force_decay: FORCE_DECAY,
            floor: FloorPolicy::Clamp,
        }
    }
}

/// Top-level engine settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Window title handed to the host
    pub title: String,
    /// Window size in pixels
    pub resolution: [u32; 2],
    pub physics: PhysicsSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: "CacoEngine App".to_string(),
            resolution: DEFAULT_RESOLUTION,
            physics: PhysicsSettings::default(),
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.physics.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load from `path`, falling back to defaults if it is missing or invalid
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::info!("Using default settings ({}: {})", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.resolution, [800, 600]);
        assert_eq!(settings.physics.floor_y, 800.0);
        assert_eq!(settings.physics.force_decay, 1.0);
        assert_eq!(settings.physics.floor, FloorPolicy::Clamp);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{ "physics": { "floor": "clamp-and-stop" } }"#).unwrap();
        assert_eq!(settings.physics.floor, FloorPolicy::ClampAndStop);
        assert_eq!(settings.physics.floor_y, 800.0);
        assert_eq!(settings.title, "CacoEngine App");
    }

    #[test]
    fn test_json_round_trip() {
        let mut settings = Settings::default();
        settings.title = "Pong".into();
        settings.physics.floor_y = 600.0;
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(matches!(Settings::from_json("{ nope"), Err(EngineError::Json(_))));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let path = std::env::temp_dir().join("caco-engine-settings-does-not-exist.json");
        assert!(matches!(Settings::load(&path), Err(EngineError::Io(_))));
        assert_eq!(Settings::load_or_default(&path), Settings::default());
    }

    #[test]
    fn test_floor_policy_names_match_json() {
        for policy in [FloorPolicy::Clamp, FloorPolicy::ClampAndStop] {
            let json = serde_json::to_string(&policy).unwrap();
            assert_eq!(json, format!("\"{}\"", policy.as_str()));
        }
        assert!(Settings::from_json(r#"{ "physics": { "floor": "bounce" } }"#).is_err());
    }

    #[test]
    fn test_negative_decay_rejected() {
        let err = Settings::from_json(r#"{ "physics": { "force_decay": -1.0 } }"#).unwrap_err();
        assert!(matches!(err, EngineError::InvalidPhysics { name: "force_decay", .. }));
        assert!(Settings::from_json(r#"{ "physics": { "force_decay": 0.0 } }"#).is_ok());
    }

    #[test]
    fn test_non_finite_physics_rejected() {
        let mut physics = PhysicsSettings::default();
        physics.floor_y = f32::NAN;
        assert!(matches!(
            physics.validate(),
            Err(EngineError::InvalidPhysics { name: "floor_y", .. })
        ));

        physics.floor_y = 800.0;
        physics.force_decay = f32::INFINITY;
        assert!(physics.validate().is_err());
        assert!(PhysicsSettings::default().validate().is_ok());
    }

    #[test]
    fn test_bad_physics_file_falls_back() {
        let path = std::env::temp_dir().join("caco-engine-settings-negative-decay.json");
        std::fs::write(&path, r#"{ "title": "Broken", "physics": { "force_decay": -5.0 } }"#).unwrap();
        let settings = Settings::load_or_default(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(settings, Settings::default());
    }
}
