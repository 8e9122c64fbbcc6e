//! 2D collision geometry
//!
//! All shapes live in a single caller-defined coordinate space (usually
//! world space). Nothing here converts between spaces; the scene layer hands
//! in positions and sizes that are already transformed.
//!
//! # Module Organization
//!
//! - [`collider`] - The [`Collider`] capability contract shared by every shape
//! - [`primitives`] - [`CircleCollider`], [`RectangleCollider`] and [`Size`]
//! - [`ray`] - [`Ray`] casting with analytic circle and slab-method box tests
//! - [`shape`] - [`Shape`], the closed sum over all collider variants
//! - [`error`] - [`GeometryError`] raised by validating constructors
//!
//! # Boundaries
//!
//! Every region is closed: a point on a circle's rim or a rectangle's edge is
//! inside, and shapes that merely touch are reported as colliding.

pub mod collider;
pub mod error;
pub mod primitives;
pub mod ray;
pub mod shape;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use collider::Collider;
pub use error::GeometryError;
pub use primitives::{CircleCollider, RectangleCollider, Size};
pub use ray::{Ray, RayHit};
pub use shape::Shape;
