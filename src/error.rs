//! Recoverable errors raised while building a simulation.
//!
//! Contract violations inside a step (for example resolving a contact between
//! two immovable bodies) are not represented here; they panic.

/// Errors returned by shape, body and scene construction.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum PhysicsError {
    /// A sphere radius was zero, negative, or not finite.
    #[error("sphere radius must be positive and finite, got {0}")]
    InvalidRadius(f32),

    /// An inverse mass was negative or not finite. Zero is valid and means
    /// infinite mass.
    #[error("inverse mass must be non-negative and finite, got {0}")]
    InvalidInverseMass(f32),

    /// A rotation quaternion was zero-length or had a non-finite component,
    /// so it cannot be normalized.
    #[error("rotation quaternion must be finite and non-zero")]
    InvalidRotation,

    /// The scene already holds as many bodies as its capacity allows.
    #[error("scene is full ({capacity} bodies)")]
    CapacityExceeded { capacity: usize },
}
