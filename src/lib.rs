//! Minimal discrete-time rigid-body simulation.
//!
//! A [`Scene`](scene::Scene) owns a fixed-capacity set of [`Body`](body::Body)
//! values and advances them one step at a time: gravity is applied as an
//! impulse, every pair of bodies is tested for contact and resolved with an
//! impulse plus positional correction, then positions are integrated with
//! explicit Euler.
//!
//! Only spheres are implemented. There is no broad phase, no continuous
//! collision detection and no angular dynamics.
//!
//! The crate is `no_std` unless the `std` feature is enabled. `std` links the
//! standard library and turns on the `std` support of `log` and `thiserror`;
//! the simulation itself behaves identically either way. Diagnostics go
//! through the [`log`] facade and the crate never installs a logger itself.
//!
//! The `serde` feature derives `Serialize`/`Deserialize` for shapes and
//! [`SceneConfig`](config::SceneConfig). Deserialized spheres are validated
//! like ones built with [`Sphere::new`](shape::Sphere::new).
//!
//! # Example
//! ```
//! use impulse3d::scene::Scene;
//!
//! let mut scene = Scene::<4>::default();
//! scene.initialize()?;
//! for _ in 0..60 {
//!     scene.update(1.0 / 60.0);
//! }
//! for (id, body) in scene.bodies() {
//!     let radius = body.shape().as_sphere().map(|s| s.radius());
//!     let _ = (id, body.position, radius);
//! }
//! # Ok::<(), impulse3d::error::PhysicsError>(())
//! ```
#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod body;
pub mod collision;
pub mod config;
pub mod contact;
pub mod error;
pub mod scene;
pub mod shape;

pub use body::{Body, BodyId};
pub use collision::{intersect, CollisionPoint};
pub use config::SceneConfig;
pub use contact::resolve_contact;
pub use error::PhysicsError;
pub use scene::{Scene, StepStats};
pub use shape::{Shape, ShapeKind, Sphere};
