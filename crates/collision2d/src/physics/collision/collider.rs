//! The capability contract every collision shape implements

use super::primitives::{CircleCollider, RectangleCollider};
use super::shape::Shape;
use crate::foundation::math::Vec2;

/// Overlap queries supported by every 2D collision shape
///
/// The three required methods have no default bodies, so a new shape that
/// forgets one fails to compile instead of answering wrongly at runtime.
/// All regions are closed: boundary contact counts as a collision.
pub trait Collider {
    /// True if `point` lies on or inside the shape
    fn collide_point(&self, point: Vec2) -> bool;

    /// True if the shape and `other` share at least one point
    fn collide_circle(&self, other: &CircleCollider) -> bool;

    /// True if the shape and `other` share at least one point
    fn collide_rectangle(&self, other: &RectangleCollider) -> bool;

    /// Dispatch to the query matching the variant of `other`
    fn collide_shape(&self, other: &Shape) -> bool {
        match other {
            Shape::Circle(circle) => self.collide_circle(circle),
            Shape::Rectangle(rect) => self.collide_rectangle(rect),
        }
    }
}
