#![forbid(unsafe_code)]

//! Geometric primitives.

/// A content size in points.
///
/// Popover content reports its natural size through this type; the host
/// applies it to the popover's geometry. Fractional point sizes are normal
/// on scaled displays, so dimensions are `f32`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    /// Width in points.
    pub width: f32,
    /// Height in points.
    pub height: f32,
}

impl Size {
    /// The zero size.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Create a new size.
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Check if either dimension is zero or negative.
    ///
    /// Layout passes report zero sizes before content has been measured;
    /// callers treat those as "not laid out yet" rather than real geometry.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}
