//! Errors raised when constructing collision geometry

/// Precondition violations caught by the validating constructors
///
/// Absence of an intersection is never an error; ray casts return `None`
/// for a miss.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum GeometryError {
    /// Circle radius below zero
    #[error("Circle radius must be non-negative, got {0}")]
    NegativeRadius(f32),

    /// Rectangle width or height below zero
    #[error("Rectangle size must be non-negative, got {width}x{height}")]
    NegativeSize {
        /// Requested width
        width: f32,
        /// Requested height
        height: f32,
    },

    /// Ray direction too short to normalize
    #[error("Ray direction must have non-zero length, got ({x}, {y})")]
    DegenerateDirection {
        /// Requested x component
        x: f32,
        /// Requested y component
        y: f32,
    },

    /// NaN or infinite input for the named field
    #[error("Non-finite value for {0}")]
    NonFinite(&'static str),
}
