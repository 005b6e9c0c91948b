//! Scene-wide simulation parameters.

use nalgebra::Vector3;

/// Magnitude of gravitational acceleration used by [`SceneConfig::default`], in m/s².
pub const STANDARD_GRAVITY: f32 = 9.8;

/// Parameters shared by every body in a [`Scene`](crate::scene::Scene).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SceneConfig {
    /// Gravitational acceleration applied to every dynamic body.
    pub gravity: Vector3<f32>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            gravity: Vector3::new(0.0, -STANDARD_GRAVITY, 0.0),
        }
    }
}

impl SceneConfig {
    /// Builder: set the gravity vector (e.g., `Vector3::new(0.0, -9.81, 0.0)`).
    pub fn with_gravity(mut self, gravity: Vector3<f32>) -> Self {
        self.gravity = gravity;
        self
    }

    /// A configuration with gravity switched off.
    pub fn zero_gravity() -> Self {
        Self {
            gravity: Vector3::zeros(),
        }
    }
}
