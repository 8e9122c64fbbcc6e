//! Closed sum type over every collider variant
//!
//! Callers that store heterogeneous colliders (a scene's static geometry, a
//! probe scenario) hold [`Shape`] values; matching on it is exhaustive, so a
//! new variant cannot be added without every query handling it.

use serde::{Deserialize, Serialize};

use super::collider::Collider;
use super::primitives::{CircleCollider, RectangleCollider};
use super::ray::{Ray, RayHit};
use crate::foundation::math::Vec2;

/// Any supported collision shape
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Shape {
    /// A disc
    Circle(CircleCollider),
    /// An axis-aligned rectangle
    Rectangle(RectangleCollider),
}

impl Shape {
    /// Test if this shape overlaps another shape
    pub fn intersects(&self, other: &Shape) -> bool {
        self.collide_shape(other)
    }

    /// Nearest forward ray hit against this shape
    pub fn intersect_ray(&self, ray: &Ray) -> Option<RayHit> {
        ray.cast(self)
    }

    /// Reference position: the circle's center or the rectangle's min corner
    pub const fn position(&self) -> Vec2 {
        match self {
            Self::Circle(circle) => circle.position(),
            Self::Rectangle(rect) => rect.position(),
        }
    }

    /// Short variant name for logs
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Circle(_) => "circle",
            Self::Rectangle(_) => "rectangle",
        }
    }
}

impl Collider for Shape {
    fn collide_point(&self, point: Vec2) -> bool {
        match self {
            Self::Circle(circle) => circle.collide_point(point),
            Self::Rectangle(rect) => rect.collide_point(point),
        }
    }

    fn collide_circle(&self, other: &CircleCollider) -> bool {
        match self {
            Self::Circle(circle) => circle.collide_circle(other),
            Self::Rectangle(rect) => rect.collide_circle(other),
        }
    }

    fn collide_rectangle(&self, other: &RectangleCollider) -> bool {
        match self {
            Self::Circle(circle) => circle.collide_rectangle(other),
            Self::Rectangle(rect) => rect.collide_rectangle(other),
        }
    }
}

impl From<CircleCollider> for Shape {
    fn from(circle: CircleCollider) -> Self {
        Self::Circle(circle)
    }
}

impl From<RectangleCollider> for Shape {
    fn from(rect: RectangleCollider) -> Self {
        Self::Rectangle(rect)
    }
}
