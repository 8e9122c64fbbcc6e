//! # Collision2D
//!
//! Narrow-phase 2D collision and ray-intersection geometry.
//!
//! ## Features
//!
//! - **Shapes**: Circles and axis-aligned rectangles behind one [`Collider`] contract
//! - **Overlap Queries**: Point, circle and rectangle tests with inclusive boundaries
//! - **Ray Casting**: Analytic ray-circle (quadratic) and ray-rectangle (slab) intersection
//! - **Validated Construction**: Degenerate geometry is rejected with a [`GeometryError`]
//! - **Serializable**: Shapes and rays load from TOML/RON through the [`config`] module
//!
//! ## Quick Start
//!
//! ```rust
//! use collision2d::prelude::*;
//!
//! fn main() -> Result<(), GeometryError> {
//!     let circle = CircleCollider::new(2.0, Vec2::new(0.0, 0.0))?;
//!     let wall = RectangleCollider::new(Vec2::new(1.5, -5.0), Size::new(1.0, 10.0))?;
//!     assert!(circle.collide_rectangle(&wall));
//!
//!     let ray = Ray::new(Vec2::new(-10.0, 0.0), Vec2::new(1.0, 0.0))?;
//!     let hit = ray.intersect_circle(&circle).expect("ray points at the circle");
//!     assert!((hit.distance - 8.0).abs() < 1e-5);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod config;
pub mod foundation;
pub mod physics;

pub use physics::collision::{
    CircleCollider, Collider, GeometryError, Ray, RayHit, RectangleCollider, Shape, Size,
};

/// Common imports for library users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError},
        foundation::math::{Point2, Vec2},
        physics::collision::{
            CircleCollider, Collider, GeometryError, Ray, RayHit, RectangleCollider, Shape, Size,
        },
    };
}
