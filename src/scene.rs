//! The scene: owns every body and advances them one step at a time.
//!
//! # Example
//! ```
//! use impulse3d::body::Body;
//! use impulse3d::config::SceneConfig;
//! use impulse3d::scene::Scene;
//! use impulse3d::shape::Shape;
//! use nalgebra::Vector3;
//!
//! let mut scene = Scene::<8>::new(SceneConfig::default());
//!
//! let ball = Body::new(Shape::sphere(0.5)?, 1.0)?
//!     .with_position(Vector3::new(0.0, 10.0, 0.0));
//! let id = scene.add_body(ball)?;
//! scene.add_body(Body::new_static(Shape::sphere(100.0)?).with_position(Vector3::new(0.0, -100.0, 0.0)))?;
//!
//! let stats = scene.update(1.0 / 60.0);
//! assert_eq!(stats.pairs_tested, 1);
//! assert!(scene.body(id).unwrap().linear_velocity.y < 0.0);
//! # Ok::<(), impulse3d::error::PhysicsError>(())
//! ```

use nalgebra::Vector3;

use crate::body::{Body, BodyId};
use crate::collision::intersect;
use crate::config::SceneConfig;
use crate::contact::resolve_contact;
use crate::error::PhysicsError;
use crate::shape::Shape;

/// Counters describing what one call to [`Scene::update`] did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepStats {
    /// Number of body pairs handed to the narrow phase.
    pub pairs_tested: usize,
    /// Number of those pairs that were touching and got resolved.
    pub contacts: usize,
}

/// A fixed-capacity collection of bodies stepped together.
///
/// # Type Parameters
/// * `N` - Maximum number of bodies (compile-time capacity).
#[derive(Debug)]
pub struct Scene<const N: usize> {
    bodies: heapless::Vec<Body, N>,
    config: SceneConfig,
    last_step: StepStats,
}

impl<const N: usize> Default for Scene<N> {
    fn default() -> Self {
        Self::new(SceneConfig::default())
    }
}

impl<const N: usize> Scene<N> {
    pub fn new(config: SceneConfig) -> Self {
        Self {
            bodies: heapless::Vec::new(),
            config,
            last_step: StepStats::default(),
        }
    }

    /// Replace the scene's contents with the demo layout: a dynamic sphere
    /// (radius 5) held 100 m above a large static ground sphere (radius 1000)
    /// whose top sits at the origin.
    pub fn initialize(&mut self) -> Result<(), PhysicsError> {
        self.clear();

        let ball = Body::new(Shape::sphere(5.0)?, 1.0)?
            .with_position(Vector3::new(0.0, 100.0, 0.0))
            .with_restitution(0.5);
        self.add_body(ball)?;

        let ground = Body::new_static(Shape::sphere(1000.0)?)
            .with_position(Vector3::new(0.0, -1000.0, 0.0))
            .with_restitution(1.0);
        self.add_body(ground)?;

        log::debug!("scene initialized with {} bodies", self.bodies.len());
        Ok(())
    }

    /// Add a body to the scene and return its id.
    pub fn add_body(&mut self, body: Body) -> Result<BodyId, PhysicsError> {
        let id = BodyId(self.bodies.len());
        self.bodies
            .push(body)
            .map_err(|_| PhysicsError::CapacityExceeded { capacity: N })?;
        log::debug!("added body {:?} at {:?}", id, self.bodies[id.0].position);
        Ok(id)
    }

    /// Remove every body. Previously returned ids become invalid.
    pub fn clear(&mut self) {
        self.bodies.clear();
        self.last_step = StepStats::default();
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id.0)
    }

    /// Iterate over all bodies in insertion order.
    pub fn bodies(&self) -> impl Iterator<Item = (BodyId, &Body)> {
        self.bodies.iter().enumerate().map(|(i, b)| (BodyId(i), b))
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Statistics from the most recent [`update`](Self::update).
    pub fn last_step(&self) -> StepStats {
        self.last_step
    }

    /// Advance the simulation by `dt` seconds.
    ///
    /// Runs, in order: a gravity impulse on every dynamic body, an all-pairs
    /// contact pass (pairs in ascending index order, each hit resolved
    /// immediately), then explicit Euler position integration.
    ///
    /// `dt` is used as given, with no clamping or sub-stepping, so large
    /// values can let fast bodies tunnel through each other.
    pub fn update(&mut self, dt: f32) -> StepStats {
        debug_assert!(dt.is_finite() && dt >= 0.0, "invalid time step {dt}");

        self.integrate_forces(dt);
        let stats = self.resolve_collisions();
        for body in self.bodies.iter_mut() {
            body.integrate_position(dt);
        }

        log::trace!(
            "step dt={}: {} pairs tested, {} contacts",
            dt,
            stats.pairs_tested,
            stats.contacts
        );
        self.last_step = stats;
        stats
    }

    fn integrate_forces(&mut self, dt: f32) {
        let gravity = self.config.gravity;
        for body in self.bodies.iter_mut() {
            // Static bodies have no finite mass to scale the impulse by.
            let Some(mass) = body.mass() else {
                continue;
            };
            body.apply_linear_impulse(&(gravity * (mass * dt)));
        }
    }

    fn resolve_collisions(&mut self) -> StepStats {
        let mut stats = StepStats::default();
        let len = self.bodies.len();

        for i in 0..len {
            for j in (i + 1)..len {
                let body_a = &self.bodies[i];
                let body_b = &self.bodies[j];

                if body_a.has_infinite_mass() && body_b.has_infinite_mass() {
                    continue;
                }

                stats.pairs_tested += 1;
                if let Some(contact) = intersect(BodyId(i), body_a, BodyId(j), body_b) {
                    log::trace!(
                        "contact {:?}-{:?} normal {:?}",
                        contact.body_a,
                        contact.body_b,
                        contact.normal
                    );
                    resolve_contact(&mut self.bodies, &contact);
                    stats.contacts += 1;
                }
            }
        }

        stats
    }
}
