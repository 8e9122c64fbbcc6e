//! Physics module for collision detection
//!
//! Provides narrow-phase overlap tests and ray casts for 2D circles and
//! axis-aligned rectangles. Broad-phase partitioning and collision response
//! belong to the caller.

pub mod collision;

pub use collision::{
    CircleCollider,
    Collider,
    GeometryError,
    Ray,
    RayHit,
    RectangleCollider,
    Shape,
    Size,
};
