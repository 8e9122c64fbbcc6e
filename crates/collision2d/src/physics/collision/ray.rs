//! Ray casting against collision shapes
//!
//! Circles are solved analytically through the ray/circle quadratic; boxes
//! use the slab method (per-axis parametric interval intersection).

use serde::{Deserialize, Serialize};

use super::error::GeometryError;
use super::primitives::{CircleCollider, RectangleCollider};
use super::shape::Shape;
use crate::foundation::math::{constants::DIRECTION_EPSILON, utils, Vec2};

/// A ray for casting against colliders
///
/// The direction is normalized on construction, so the ray parameter `t` of
/// a hit is also its distance from the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RayData", into = "RayData")]
pub struct Ray {
    origin: Vec2,
    direction: Vec2,
}

/// Result of a ray intersection test
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Ray parameter of the hit, equal to the distance from the origin
    pub distance: f32,
    /// The point of intersection
    pub point: Vec2,
    /// The ray started inside the shape
    ///
    /// For circles the hit is the exit point. For rectangles the hit is the
    /// origin itself at distance zero.
    pub origin_inside: bool,
}

impl Ray {
    /// Creates a new ray with the given origin and direction
    ///
    /// `direction` may have any non-zero length. A zero or non-finite
    /// direction has no meaningful normalization and is rejected.
    pub fn new(origin: Vec2, direction: Vec2) -> Result<Self, GeometryError> {
        if !utils::is_finite(origin) {
            log::debug!("Rejected ray with non-finite origin {:?}", origin);
            return Err(GeometryError::NonFinite("origin"));
        }
        if !utils::is_finite(direction) {
            log::debug!("Rejected ray with non-finite direction {:?}", direction);
            return Err(GeometryError::NonFinite("direction"));
        }

        // Scale by the largest component first so x^2 + y^2 cannot overflow
        let largest = direction.amax();
        let normalized = if largest > 0.0 {
            (direction / largest).try_normalize(DIRECTION_EPSILON)
        } else {
            None
        };
        let Some(direction) = normalized else {
            log::debug!("Rejected ray with degenerate direction {:?}", direction);
            return Err(GeometryError::DegenerateDirection {
                x: direction.x,
                y: direction.y,
            });
        };

        Ok(Self { origin, direction })
    }

    /// The origin point of the ray
    pub const fn origin(&self) -> Vec2 {
        self.origin
    }

    /// The unit-length direction of the ray
    pub const fn direction(&self) -> Vec2 {
        self.direction
    }

    /// Get a point along the ray at parameter t
    pub fn point_at(&self, t: f32) -> Vec2 {
        self.origin + self.direction * t
    }

    /// Nearest forward intersection with a circle
    ///
    /// Solves `|origin + t * direction - center|^2 = radius^2` and returns the
    /// smallest non-negative root. Returns `None` when the ray misses or the
    /// whole circle lies behind the origin.
    ///
    /// The discriminant is taken from the perpendicular offset of the center
    /// to the ray line, `radius^2 - |h|^2`, instead of `b^2 - 4ac`. Both give
    /// the same roots, but `|oc|^2 - radius^2` cancels catastrophically once
    /// the origin is far from a small circle.
    pub fn intersect_circle(&self, circle: &CircleCollider) -> Option<RayHit> {
        let oc = self.origin - circle.position();

        let a = self.direction.dot(&self.direction);
        let half_b = oc.dot(&self.direction);
        let h = oc - self.direction * (half_b / a);

        let discriminant = a * (circle.radius() * circle.radius() - h.dot(&h));
        if discriminant < 0.0 {
            return None;
        }

        let sqrt_discriminant = discriminant.sqrt();
        let t1 = (-half_b - sqrt_discriminant) / a;
        let t2 = (-half_b + sqrt_discriminant) / a;

        let (t, origin_inside) = if t1 >= 0.0 {
            (t1, false)
        } else if t2 >= 0.0 {
            (t2, true)
        } else {
            return None;
        };

        log::trace!("Ray hit circle at t = {} (roots {}, {})", t, t1, t2);
        Some(RayHit {
            distance: t,
            point: self.point_at(t),
            origin_inside,
        })
    }

    /// Entry intersection with an axis-aligned rectangle (slab method)
    ///
    /// Returns `None` when the box is entirely behind the origin or the
    /// per-axis intervals are disjoint. A ray starting inside the box reports
    /// its origin at distance zero with [`RayHit::origin_inside`] set.
    pub fn intersect_rectangle(&self, rect: &RectangleCollider) -> Option<RayHit> {
        let (min, max) = (rect.min(), rect.max());

        let (x_near, x_far) = slab(self.origin.x, self.direction.x, min.x, max.x)?;
        let (y_near, y_far) = slab(self.origin.y, self.direction.y, min.y, max.y)?;

        let t_min = x_near.max(y_near);
        let t_max = x_far.min(y_far);

        if t_max < 0.0 || t_min > t_max {
            return None;
        }

        log::trace!("Ray crosses rectangle over t in [{}, {}]", t_min, t_max);
        if t_min < 0.0 {
            return Some(RayHit {
                distance: 0.0,
                point: self.origin,
                origin_inside: true,
            });
        }

        Some(RayHit {
            distance: t_min,
            point: self.point_at(t_min),
            origin_inside: false,
        })
    }

    /// Cast against any shape variant
    pub fn cast(&self, shape: &Shape) -> Option<RayHit> {
        match shape {
            Shape::Circle(circle) => self.intersect_circle(circle),
            Shape::Rectangle(rect) => self.intersect_rectangle(rect),
        }
    }
}

/// Parametric interval over which a ray lies between two parallel planes
///
/// A zero direction component has an infinite inverse: the ray never crosses
/// either plane, so it is inside the slab for all `t` or for none.
fn slab(origin: f32, direction: f32, min: f32, max: f32) -> Option<(f32, f32)> {
    let inv_direction = direction.recip();

    if inv_direction.is_infinite() {
        return if origin < min || origin > max {
            None
        } else {
            Some((f32::NEG_INFINITY, f32::INFINITY))
        };
    }

    let t1 = (min - origin) * inv_direction;
    let t2 = (max - origin) * inv_direction;
    Some((t1.min(t2), t1.max(t2)))
}

#[derive(Serialize, Deserialize)]
struct RayData {
    origin: Vec2,
    direction: Vec2,
}

impl TryFrom<RayData> for Ray {
    type Error = GeometryError;

    fn try_from(data: RayData) -> Result<Self, Self::Error> {
        Self::new(data.origin, data.direction)
    }
}

impl From<Ray> for RayData {
    fn from(ray: Ray) -> Self {
        Self {
            origin: ray.origin,
            direction: ray.direction,
        }
    }
}
