//! Rigid bodies and the operations that act on a single body.

use nalgebra::{Matrix3, Quaternion, UnitQuaternion, Vector3};

// ComplexField provides sqrt() for f32 in no_std via libm
#[allow(unused_imports)]
use nalgebra::ComplexField;

use crate::error::PhysicsError;
use crate::shape::Shape;

/// Index of a body within a [`Scene`](crate::scene::Scene).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub(crate) usize);

impl BodyId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A rigid body: pose, linear velocity, inverse mass and a collision shape.
///
/// An inverse mass of zero means infinite mass. Such bodies are static: they
/// ignore impulses and never move during a step.
///
/// Orientation and angular velocity are carried for rendering and for a later
/// angular solver; the step does not integrate them.
#[derive(Debug, Clone)]
pub struct Body {
    /// World-space location of the body's local origin.
    pub position: Vector3<f32>,
    pub rotation: UnitQuaternion<f32>,
    pub linear_velocity: Vector3<f32>,
    /// World-space angular velocity in radians per second.
    pub angular_velocity: Vector3<f32>,
    inverse_mass: f32,
    restitution: f32,
    shape: Shape,
}

impl Body {
    /// Create a body at the origin, at rest, with identity rotation.
    ///
    /// Fails if `inverse_mass` is negative or not finite.
    pub fn new(shape: Shape, inverse_mass: f32) -> Result<Self, PhysicsError> {
        if !(inverse_mass >= 0.0 && inverse_mass.is_finite()) {
            return Err(PhysicsError::InvalidInverseMass(inverse_mass));
        }
        Ok(Self {
            position: Vector3::zeros(),
            rotation: UnitQuaternion::identity(),
            linear_velocity: Vector3::zeros(),
            angular_velocity: Vector3::zeros(),
            inverse_mass,
            restitution: 0.5,
            shape,
        })
    }

    /// Create an immovable body (infinite mass).
    pub fn new_static(shape: Shape) -> Self {
        Self {
            position: Vector3::zeros(),
            rotation: UnitQuaternion::identity(),
            linear_velocity: Vector3::zeros(),
            angular_velocity: Vector3::zeros(),
            inverse_mass: 0.0,
            restitution: 0.5,
            shape,
        }
    }

    /// Builder: set initial position.
    pub fn with_position(mut self, position: Vector3<f32>) -> Self {
        self.position = position;
        self
    }

    /// Builder: set orientation from a quaternion, normalizing it.
    ///
    /// Fails if the quaternion is (near) zero-length or has a non-finite
    /// component.
    pub fn with_rotation(mut self, rotation: Quaternion<f32>) -> Result<Self, PhysicsError> {
        if !rotation.coords.iter().all(|c| c.is_finite()) {
            return Err(PhysicsError::InvalidRotation);
        }
        self.rotation =
            UnitQuaternion::try_new(rotation, f32::EPSILON).ok_or(PhysicsError::InvalidRotation)?;
        Ok(self)
    }

    /// Builder: set initial linear velocity.
    pub fn with_linear_velocity(mut self, velocity: Vector3<f32>) -> Self {
        self.linear_velocity = velocity;
        self
    }

    /// Builder: set restitution (bounciness, 0.0..=1.0). Out-of-range values
    /// are clamped.
    ///
    /// # Panics
    /// Panics if `restitution` is NaN.
    pub fn with_restitution(mut self, restitution: f32) -> Self {
        assert!(!restitution.is_nan(), "restitution must not be NaN");
        self.restitution = restitution.clamp(0.0, 1.0);
        self
    }

    #[inline]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    #[inline]
    pub fn inverse_mass(&self) -> f32 {
        self.inverse_mass
    }

    #[inline]
    pub fn restitution(&self) -> f32 {
        self.restitution
    }

    #[inline]
    pub fn has_infinite_mass(&self) -> bool {
        self.inverse_mass == 0.0
    }

    /// Mass in kilograms, or `None` for a static body.
    #[inline]
    pub fn mass(&self) -> Option<f32> {
        if self.has_infinite_mass() {
            None
        } else {
            Some(1.0 / self.inverse_mass)
        }
    }

    pub fn center_of_mass_model_space(&self) -> Vector3<f32> {
        self.shape.center_of_mass()
    }

    pub fn center_of_mass_world_space(&self) -> Vector3<f32> {
        self.position + self.rotation * self.shape.center_of_mass()
    }

    /// Convert a world-space point into this body's local frame, which is
    /// centred on the center of mass.
    pub fn world_space_to_local_space(&self, point: &Vector3<f32>) -> Vector3<f32> {
        let offset = point - self.center_of_mass_world_space();
        self.rotation.inverse_transform_vector(&offset)
    }

    /// Inverse of [`world_space_to_local_space`](Self::world_space_to_local_space).
    pub fn local_space_to_world_space(&self, point: &Vector3<f32>) -> Vector3<f32> {
        self.center_of_mass_world_space() + self.rotation * point
    }

    /// Apply an instantaneous impulse (change in momentum) to this body.
    /// Directly modifies velocity: `delta_v = impulse * inverse_mass`.
    ///
    /// Static bodies ignore impulses.
    #[inline]
    pub fn apply_linear_impulse(&mut self, impulse: &Vector3<f32>) {
        if self.has_infinite_mass() {
            return;
        }
        self.linear_velocity += impulse * self.inverse_mass;
    }

    /// World-space inverse inertia tensor: `R * (m * I)⁻¹ * Rᵀ`.
    ///
    /// Zero for static bodies.
    pub fn inverse_inertia_tensor_world(&self) -> Matrix3<f32> {
        let Some(mass) = self.mass() else {
            return Matrix3::zeros();
        };
        let inverse_local = (self.shape.inertia_tensor() * mass)
            .try_inverse()
            .unwrap_or_else(Matrix3::zeros);
        let r = self.rotation.to_rotation_matrix();
        r.matrix() * inverse_local * r.matrix().transpose()
    }

    /// Returns the current speed (magnitude of linear velocity).
    #[inline]
    pub fn speed(&self) -> f32 {
        self.linear_velocity.norm()
    }

    /// Returns the linear kinetic energy `0.5 * m * v²`, or zero for a static body.
    pub fn kinetic_energy(&self) -> f32 {
        match self.mass() {
            Some(mass) => 0.5 * mass * self.linear_velocity.norm_squared(),
            None => 0.0,
        }
    }

    /// Explicit Euler position update. Rotation is left untouched.
    #[inline]
    pub(crate) fn integrate_position(&mut self, dt: f32) {
        self.position += self.linear_velocity * dt;
    }
}
