//! Contact resolution: impulse response followed by positional correction.

use crate::body::Body;
use crate::collision::CollisionPoint;

/// Resolve one contact produced by [`intersect`](crate::collision::intersect).
///
/// The normal impulse uses the product of both restitution coefficients:
/// `j = -(1 + e) * (v_a - v_b)·n / (w_a + w_b)`, applied as `+j·n` to A and
/// `-j·n` to B. Interpenetration is then removed by moving each body along the
/// line between the two surface points in proportion to its share of the
/// total inverse mass, so a static body never moves.
///
/// This is a single pass per contact, not an iterative solver: with several
/// simultaneous contacts some overlap may remain after a step.
///
/// # Panics
/// Panics if both bodies have infinite mass, if the contact refers to the
/// same body twice, or if an index is out of bounds for `bodies`.
pub fn resolve_contact(bodies: &mut [Body], contact: &CollisionPoint) {
    let (a, b) = pair_mut(bodies, contact.body_a.index(), contact.body_b.index());

    let inv_mass_a = a.inverse_mass();
    let inv_mass_b = b.inverse_mass();
    let inv_mass_sum = inv_mass_a + inv_mass_b;
    assert!(
        inv_mass_sum > 0.0,
        "cannot resolve a contact between two bodies of infinite mass"
    );

    // --- Impulse response ---
    let relative_velocity = a.linear_velocity - b.linear_velocity;
    let restitution = a.restitution() * b.restitution();
    let j = -(1.0 + restitution) * relative_velocity.dot(&contact.normal) / inv_mass_sum;

    let impulse = contact.normal * j;
    a.apply_linear_impulse(&impulse);
    b.apply_linear_impulse(&-impulse);

    // --- Positional correction ---
    let fraction_a = inv_mass_a / inv_mass_sum;
    let fraction_b = inv_mass_b / inv_mass_sum;
    let overlap = contact.b_world_space - contact.a_world_space;
    a.position += overlap * fraction_a;
    b.position -= overlap * fraction_b;
}

/// Borrow two distinct bodies mutably at once.
fn pair_mut(bodies: &mut [Body], a: usize, b: usize) -> (&mut Body, &mut Body) {
    assert_ne!(a, b, "a body cannot be in contact with itself");
    if a < b {
        let (head, tail) = bodies.split_at_mut(b);
        (&mut head[a], &mut tail[0])
    } else {
        let (head, tail) = bodies.split_at_mut(a);
        (&mut tail[0], &mut head[b])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::BodyId;
    use crate::collision::intersect;
    use crate::shape::Shape;
    use nalgebra::Vector3;
    use rstest::rstest;

    const EPSILON: f32 = 1e-4;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn approx_vec_eq(a: &Vector3<f32>, b: &Vector3<f32>) -> bool {
        approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
    }

    fn ball(inverse_mass: f32, position: Vector3<f32>, velocity: Vector3<f32>) -> Body {
        Body::new(Shape::sphere(1.0).unwrap(), inverse_mass)
            .unwrap()
            .with_position(position)
            .with_linear_velocity(velocity)
    }

    fn detect(bodies: &[Body]) -> CollisionPoint {
        intersect(BodyId(0), &bodies[0], BodyId(1), &bodies[1]).expect("bodies should overlap")
    }

    #[test]
    fn test_elastic_head_on_exchange() {
        let v = 3.0;
        let mut bodies = [
            ball(1.0, Vector3::zeros(), Vector3::new(v, 0.0, 0.0)).with_restitution(1.0),
            ball(1.0, Vector3::new(1.5, 0.0, 0.0), Vector3::new(-v, 0.0, 0.0))
                .with_restitution(1.0),
        ];
        let contact = detect(&bodies);
        resolve_contact(&mut bodies, &contact);

        assert!(approx_vec_eq(&bodies[0].linear_velocity, &Vector3::new(-v, 0.0, 0.0)));
        assert!(approx_vec_eq(&bodies[1].linear_velocity, &Vector3::new(v, 0.0, 0.0)));
    }

    #[test]
    fn test_perfectly_inelastic_moves_together() {
        let mut bodies = [
            ball(1.0, Vector3::zeros(), Vector3::new(2.0, 0.0, 0.0)).with_restitution(0.0),
            ball(1.0, Vector3::new(1.8, 0.0, 0.0), Vector3::zeros()).with_restitution(0.0),
        ];
        let contact = detect(&bodies);
        resolve_contact(&mut bodies, &contact);

        assert!(approx_vec_eq(&bodies[0].linear_velocity, &Vector3::new(1.0, 0.0, 0.0)));
        assert!(approx_vec_eq(&bodies[1].linear_velocity, &Vector3::new(1.0, 0.0, 0.0)));
    }

    #[rstest]
    #[case(0.0)]
    #[case(0.25)]
    #[case(0.5)]
    #[case(1.0)]
    fn test_restitution_scales_rebound_off_static(#[case] restitution: f32) {
        let mut bodies = [
            ball(1.0, Vector3::new(0.0, 1.9, 0.0), Vector3::new(0.0, -4.0, 0.0))
                .with_restitution(restitution),
            Body::new_static(Shape::sphere(1.0).unwrap()).with_restitution(1.0),
        ];
        let contact = detect(&bodies);
        resolve_contact(&mut bodies, &contact);

        assert!(approx_eq(bodies[0].linear_velocity.y, 4.0 * restitution));
        assert_eq!(bodies[1].linear_velocity, Vector3::zeros());
    }

    #[test]
    fn test_momentum_conserved_between_unequal_masses() {
        let mut bodies = [
            ball(0.5, Vector3::zeros(), Vector3::new(1.0, 0.5, 0.0)),
            ball(0.25, Vector3::new(1.2, 0.9, 0.0), Vector3::new(-2.0, 0.0, 1.0)),
        ];
        let momentum = |bodies: &[Body]| -> Vector3<f32> {
            bodies
                .iter()
                .map(|b| b.linear_velocity * b.mass().unwrap())
                .sum()
        };
        let before = momentum(&bodies[..]);
        let contact = detect(&bodies);
        resolve_contact(&mut bodies, &contact);
        assert!(approx_vec_eq(&momentum(&bodies[..]), &before));
    }

    #[test]
    fn test_positional_correction_removes_overlap() {
        let mut bodies = [
            ball(1.0, Vector3::zeros(), Vector3::zeros()),
            ball(1.0, Vector3::new(1.5, 0.0, 0.0), Vector3::zeros()),
        ];
        let before = detect(&bodies);
        resolve_contact(&mut bodies, &before);

        // Equal masses split the 0.5 overlap evenly.
        assert!(approx_vec_eq(&bodies[0].position, &Vector3::new(-0.25, 0.0, 0.0)));
        assert!(approx_vec_eq(&bodies[1].position, &Vector3::new(1.75, 0.0, 0.0)));

        let after = detect(&bodies);
        assert!(after.separation() >= before.separation());
        assert!(approx_eq(after.separation(), 0.0));
    }

    #[test]
    fn test_positional_correction_weighted_by_inverse_mass() {
        let mut bodies = [
            ball(3.0, Vector3::zeros(), Vector3::zeros()),
            ball(1.0, Vector3::new(0.0, 0.0, 1.2), Vector3::zeros()),
        ];
        let contact = detect(&bodies);
        resolve_contact(&mut bodies, &contact);

        // Overlap 0.8: the lighter body A takes 3/4 of it.
        assert!(approx_vec_eq(&bodies[0].position, &Vector3::new(0.0, 0.0, -0.6)));
        assert!(approx_vec_eq(&bodies[1].position, &Vector3::new(0.0, 0.0, 1.4)));
    }

    #[test]
    fn test_static_body_never_moves() {
        let ground = Body::new_static(Shape::sphere(1.0).unwrap());
        let mut bodies = [
            ground,
            ball(1.0, Vector3::new(0.5, 1.0, 0.0), Vector3::new(0.0, -1.0, 0.0)),
        ];
        let contact = detect(&bodies);
        resolve_contact(&mut bodies, &contact);

        assert_eq!(bodies[0].position, Vector3::zeros());
        assert_eq!(bodies[0].linear_velocity, Vector3::zeros());
        // The dynamic body took the whole correction and now just touches.
        assert!(approx_eq(bodies[1].position.norm(), 2.0));
    }

    #[test]
    fn test_reversed_ids_resolve_same_pair() {
        let mut bodies = [
            ball(1.0, Vector3::zeros(), Vector3::new(1.0, 0.0, 0.0)).with_restitution(1.0),
            ball(1.0, Vector3::new(1.5, 0.0, 0.0), Vector3::zeros()).with_restitution(1.0),
        ];
        let contact = intersect(BodyId(1), &bodies[1], BodyId(0), &bodies[0]).unwrap();
        resolve_contact(&mut bodies, &contact);

        assert!(approx_vec_eq(&bodies[0].linear_velocity, &Vector3::zeros()));
        assert!(approx_vec_eq(&bodies[1].linear_velocity, &Vector3::new(1.0, 0.0, 0.0)));
    }

    #[test]
    #[should_panic(expected = "infinite mass")]
    fn test_two_static_bodies_panics() {
        let mut bodies = [
            Body::new_static(Shape::sphere(1.0).unwrap()),
            Body::new_static(Shape::sphere(1.0).unwrap()).with_position(Vector3::new(1.0, 0.0, 0.0)),
        ];
        let contact = detect(&bodies);
        resolve_contact(&mut bodies, &contact);
    }

    #[test]
    #[should_panic]
    fn test_self_contact_panics() {
        let mut bodies = [ball(1.0, Vector3::zeros(), Vector3::zeros())];
        let contact = intersect(BodyId(0), &bodies[0], BodyId(0), &bodies[0]).unwrap();
        resolve_contact(&mut bodies, &contact);
    }
}
