//! Collision shapes.
//!
//! Shapes are closed over [`Shape`]; supporting a new kind means adding a
//! variant here and a pair arm in [`crate::collision::intersect`].

use nalgebra::{Matrix3, Vector3};

use crate::error::PhysicsError;

/// Tag identifying which variant a [`Shape`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Sphere,
}

/// A solid sphere centred on its body's local origin.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "SphereRepr"))]
pub struct Sphere {
    radius: f32,
}

/// Unvalidated wire form of [`Sphere`]; deserialization goes through
/// [`Sphere::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct SphereRepr {
    radius: f32,
}

#[cfg(feature = "serde")]
impl TryFrom<SphereRepr> for Sphere {
    type Error = PhysicsError;

    fn try_from(repr: SphereRepr) -> Result<Self, Self::Error> {
        Sphere::new(repr.radius)
    }
}

impl Sphere {
    /// Create a sphere. Fails unless `radius` is positive and finite.
    pub fn new(radius: f32) -> Result<Self, PhysicsError> {
        if radius > 0.0 && radius.is_finite() {
            Ok(Self { radius })
        } else {
            Err(PhysicsError::InvalidRadius(radius))
        }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }
}

/// Geometry attached to a [`Body`](crate::body::Body).
///
/// Shapes are immutable once built and are cheap to copy, so the same shape
/// value can be handed to any number of bodies.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Shape {
    Sphere(Sphere),
}

impl Shape {
    /// Shorthand for `Shape::Sphere(Sphere::new(radius)?)`.
    pub fn sphere(radius: f32) -> Result<Self, PhysicsError> {
        Sphere::new(radius).map(Shape::Sphere)
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Sphere(_) => ShapeKind::Sphere,
        }
    }

    /// Center of mass in shape-local coordinates.
    pub fn center_of_mass(&self) -> Vector3<f32> {
        match self {
            Shape::Sphere(_) => Vector3::zeros(),
        }
    }

    /// Inertia tensor about the center of mass, per unit mass.
    ///
    /// Multiply by the body's mass to get the actual tensor. For a solid
    /// sphere this is `(2/5) * r²` on the diagonal.
    pub fn inertia_tensor(&self) -> Matrix3<f32> {
        match self {
            Shape::Sphere(sphere) => {
                let i = 0.4 * sphere.radius * sphere.radius;
                Matrix3::from_diagonal_element(i)
            }
        }
    }

    pub fn as_sphere(&self) -> Option<&Sphere> {
        match self {
            Shape::Sphere(sphere) => Some(sphere),
        }
    }
}

impl From<Sphere> for Shape {
    fn from(sphere: Sphere) -> Self {
        Shape::Sphere(sphere)
    }
}
