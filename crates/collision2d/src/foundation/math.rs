//! Math utilities and types
//!
//! Provides the fundamental 2D math types used by the collision module.

pub use nalgebra::Vector2;

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 2D point type
pub type Point2 = nalgebra::Point2<f32>;

/// Math constants
pub mod constants {
    /// Smallest direction magnitude accepted when normalizing a ray direction
    pub const DIRECTION_EPSILON: f32 = 1.0e-12;
}

/// Math utility functions
pub mod utils {
    use super::Vec2;

    /// Clamp a value between min and max
    ///
    /// Unlike [`f32::clamp`] this never panics when `min > max`; the
    /// lower bound wins, which keeps degenerate boxes well-defined.
    pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
        if value < min {
            min
        } else if value > max {
            max
        } else {
            value
        }
    }

    /// Clamp each component of `point` into the box `[min, max]`
    pub fn clamp_to_box(point: Vec2, min: Vec2, max: Vec2) -> Vec2 {
        Vec2::new(clamp(point.x, min.x, max.x), clamp(point.y, min.y, max.y))
    }

    /// True when every component of `v` is finite
    pub fn is_finite(v: Vec2) -> bool {
        v.x.is_finite() && v.y.is_finite()
    }
}
