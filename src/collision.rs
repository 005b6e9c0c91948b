//! Narrow-phase intersection tests.

use nalgebra::Vector3;

// ComplexField provides sqrt() for f32 in no_std via libm
#[allow(unused_imports)]
use nalgebra::ComplexField;

use crate::body::{Body, BodyId};
use crate::shape::{Shape, Sphere};

/// A detected contact between two bodies.
///
/// Only meaningful for the step that produced it: the ids index into the
/// scene's body list and the points are snapshots of the bodies' poses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionPoint {
    pub body_a: BodyId,
    pub body_b: BodyId,
    /// Point on A's surface along the line of centers.
    pub a_world_space: Vector3<f32>,
    /// Point on B's surface along the line of centers.
    pub b_world_space: Vector3<f32>,
    /// Reserved for local-space contact caching. Zero on the sphere-sphere path.
    pub a_local_space: Vector3<f32>,
    pub b_local_space: Vector3<f32>,
    /// Unit vector pointing from A toward B.
    pub normal: Vector3<f32>,
    /// Reserved for continuous collision detection. Zero on the sphere-sphere path.
    pub collision_depth: f32,
    pub impact_time: f32,
}

impl CollisionPoint {
    /// Signed gap between the two surface points along the normal.
    ///
    /// Negative while the bodies interpenetrate.
    pub fn separation(&self) -> f32 {
        (self.b_world_space - self.a_world_space).dot(&self.normal)
    }
}

/// Test two bodies for intersection.
///
/// Returns `None` if they do not touch, or if no test exists for their pair of
/// shapes. Touching exactly counts as intersecting.
#[allow(unreachable_patterns)]
pub fn intersect(id_a: BodyId, a: &Body, id_b: BodyId, b: &Body) -> Option<CollisionPoint> {
    match (a.shape(), b.shape()) {
        (Shape::Sphere(sphere_a), Shape::Sphere(sphere_b)) => {
            intersect_sphere_sphere(id_a, a, sphere_a, id_b, b, sphere_b)
        }
        _ => None,
    }
}

#[allow(clippy::neg_cmp_op_on_partial_ord)]
fn intersect_sphere_sphere(
    id_a: BodyId,
    a: &Body,
    sphere_a: &Sphere,
    id_b: BodyId,
    b: &Body,
    sphere_b: &Sphere,
) -> Option<CollisionPoint> {
    let pos_a = a.center_of_mass_world_space();
    let pos_b = b.center_of_mass_world_space();
    let a_to_b = pos_b - pos_a;
    let dist_sq = a_to_b.norm_squared();
    let sum_r = sphere_a.radius() + sphere_b.radius();

    // Negated so a NaN distance reports no contact.
    if !(dist_sq <= sum_r * sum_r) {
        return None;
    }

    let normal = if dist_sq > 1e-12 {
        a_to_b / dist_sq.sqrt()
    } else {
        // Coincident centers: pick world up as the separation axis
        Vector3::y()
    };

    Some(CollisionPoint {
        body_a: id_a,
        body_b: id_b,
        a_world_space: pos_a + normal * sphere_a.radius(),
        b_world_space: pos_b - normal * sphere_b.radius(),
        a_local_space: Vector3::zeros(),
        b_local_space: Vector3::zeros(),
        normal,
        collision_depth: 0.0,
        impact_time: 0.0,
    })
}
