//! Primitive collision shapes and overlap algorithms
//!
//! Provides the two concrete collider variants, circles and axis-aligned
//! rectangles, with closed-region overlap tests against points and each other.

use serde::{Deserialize, Serialize};

use super::collider::Collider;
use super::error::GeometryError;
use crate::foundation::math::{utils, Vec2};

/// Width and height of an axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    /// Extent along the x axis
    pub width: f32,
    /// Extent along the y axis
    pub height: f32,
}

impl Size {
    /// Creates a new size; validation happens when a rectangle is built from it
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Size as a vector, for adding to a corner position
    pub fn to_vec(self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// A disc collider
///
/// A radius of zero is allowed and behaves as a single point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CircleColliderData", into = "CircleColliderData")]
pub struct CircleCollider {
    position: Vec2,
    radius: f32,
}

impl CircleCollider {
    /// Creates a circle centered at `position`
    ///
    /// Fails with [`GeometryError::NegativeRadius`] for a radius below zero and
    /// [`GeometryError::NonFinite`] for NaN or infinite inputs.
    pub fn new(radius: f32, position: Vec2) -> Result<Self, GeometryError> {
        if !radius.is_finite() {
            log::debug!("Rejected circle with non-finite radius {}", radius);
            return Err(GeometryError::NonFinite("radius"));
        }
        if !utils::is_finite(position) {
            log::debug!("Rejected circle with non-finite center {:?}", position);
            return Err(GeometryError::NonFinite("position"));
        }
        if radius < 0.0 {
            log::debug!("Rejected circle with negative radius {}", radius);
            return Err(GeometryError::NegativeRadius(radius));
        }

        Ok(Self { position, radius })
    }

    /// Center of the circle
    pub const fn position(&self) -> Vec2 {
        self.position
    }

    /// Radius of the circle
    pub const fn radius(&self) -> f32 {
        self.radius
    }
}

impl Collider for CircleCollider {
    fn collide_point(&self, point: Vec2) -> bool {
        (point - self.position).norm() <= self.radius
    }

    fn collide_circle(&self, other: &CircleCollider) -> bool {
        (other.position - self.position).norm() <= self.radius + other.radius
    }

    fn collide_rectangle(&self, other: &RectangleCollider) -> bool {
        circle_rectangle_overlap(self, other)
    }
}

/// An axis-aligned rectangle collider
///
/// `position` is the minimum corner (top-left in y-down screen space); the
/// rectangle spans `[x, x + width] x [y, y + height]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RectangleColliderData", into = "RectangleColliderData")]
pub struct RectangleCollider {
    position: Vec2,
    size: Size,
}

impl RectangleCollider {
    /// Creates a rectangle with its minimum corner at `position`
    ///
    /// Fails with [`GeometryError::NegativeSize`] if either dimension is below
    /// zero and [`GeometryError::NonFinite`] for NaN or infinite inputs, or
    /// when the far corner `position + size` overflows.
    pub fn new(position: Vec2, size: Size) -> Result<Self, GeometryError> {
        if !utils::is_finite(position) {
            log::debug!("Rejected rectangle with non-finite corner {:?}", position);
            return Err(GeometryError::NonFinite("position"));
        }
        if !utils::is_finite(size.to_vec()) {
            log::debug!("Rejected rectangle with non-finite size {:?}", size);
            return Err(GeometryError::NonFinite("size"));
        }
        if size.width < 0.0 || size.height < 0.0 {
            log::debug!("Rejected rectangle with negative size {:?}", size);
            return Err(GeometryError::NegativeSize {
                width: size.width,
                height: size.height,
            });
        }
        if !utils::is_finite(position + size.to_vec()) {
            log::debug!("Rejected rectangle whose far corner overflows: {:?} + {:?}", position, size);
            return Err(GeometryError::NonFinite("size"));
        }

        Ok(Self { position, size })
    }

    /// Builds a rectangle spanning two opposite corners given in any order
    pub fn from_corners(a: Vec2, b: Vec2) -> Result<Self, GeometryError> {
        let min = a.inf(&b);
        let max = a.sup(&b);
        Self::new(min, Size::new(max.x - min.x, max.y - min.y))
    }

    /// Minimum corner
    pub const fn position(&self) -> Vec2 {
        self.position
    }

    /// Width and height
    pub const fn size(&self) -> Size {
        self.size
    }

    /// Minimum corner, same as [`position`](Self::position)
    pub const fn min(&self) -> Vec2 {
        self.position
    }

    /// Maximum corner
    pub fn max(&self) -> Vec2 {
        self.position + self.size.to_vec()
    }

    /// Center of the rectangle
    pub fn center(&self) -> Vec2 {
        self.position + self.size.to_vec() * 0.5
    }

    /// Closest point of the closed rectangle to `point`
    ///
    /// Returns `point` unchanged when it is already inside.
    pub fn closest_point(&self, point: Vec2) -> Vec2 {
        utils::clamp_to_box(point, self.min(), self.max())
    }
}

impl Collider for RectangleCollider {
    fn collide_point(&self, point: Vec2) -> bool {
        let min = self.min();
        let max = self.max();
        min.x <= point.x && point.x <= max.x && min.y <= point.y && point.y <= max.y
    }

    fn collide_circle(&self, other: &CircleCollider) -> bool {
        circle_rectangle_overlap(other, self)
    }

    fn collide_rectangle(&self, other: &RectangleCollider) -> bool {
        let (a_min, a_max) = (self.min(), self.max());
        let (b_min, b_max) = (other.min(), other.max());

        // Separated only if strictly apart on some axis; touching edges overlap
        let separated = a_max.x < b_min.x
            || a_min.x > b_max.x
            || a_max.y < b_min.y
            || a_min.y > b_max.y;
        !separated
    }
}

/// Circle versus rectangle, shared by both directions of the query
///
/// Both `CircleCollider::collide_rectangle` and
/// `RectangleCollider::collide_circle` route through here so the two always
/// agree bit for bit.
fn circle_rectangle_overlap(circle: &CircleCollider, rect: &RectangleCollider) -> bool {
    let closest = rect.closest_point(circle.position);
    (closest - circle.position).norm() <= circle.radius
}

#[derive(Serialize, Deserialize)]
struct CircleColliderData {
    radius: f32,
    position: Vec2,
}

impl TryFrom<CircleColliderData> for CircleCollider {
    type Error = GeometryError;

    fn try_from(data: CircleColliderData) -> Result<Self, Self::Error> {
        Self::new(data.radius, data.position)
    }
}

impl From<CircleCollider> for CircleColliderData {
    fn from(circle: CircleCollider) -> Self {
        Self {
            radius: circle.radius,
            position: circle.position,
        }
    }
}

#[derive(Serialize, Deserialize)]
struct RectangleColliderData {
    position: Vec2,
    size: Size,
}

impl TryFrom<RectangleColliderData> for RectangleCollider {
    type Error = GeometryError;

    fn try_from(data: RectangleColliderData) -> Result<Self, Self::Error> {
        Self::new(data.position, data.size)
    }
}

impl From<RectangleCollider> for RectangleColliderData {
    fn from(rect: RectangleCollider) -> Self {
        Self {
            position: rect.position,
            size: rect.size,
        }
    }
}
