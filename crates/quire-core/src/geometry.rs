#![forbid(unsafe_code)]

//! Geometric primitives in host coordinate space.
//!
//! Hosts report pointer positions and element bounds as floating-point
//! pixels (CSS pixels in a browser, logical pixels in a native shell). The
//! engine never assumes an origin; all that matters is that the pointer and
//! the anchor rectangle share one coordinate space.

use serde::{Deserialize, Serialize};

/// Bounding rectangle a drag is measured against.
///
/// Origin at top-left, `x` grows to the right and `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AnchorRect {
    /// Left edge.
    pub left: f64,
    /// Top edge.
    pub top: f64,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl AnchorRect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Create a rectangle at the origin with the given size.
    #[inline]
    pub const fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Right edge (exclusive).
    #[inline]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Whether the width can be used as a divisor.
    #[inline]
    pub fn has_usable_width(&self) -> bool {
        self.left.is_finite() && self.width.is_finite() && self.width > 0.0
    }

    /// Whether the height can be used as a divisor.
    #[inline]
    pub fn has_usable_height(&self) -> bool {
        self.top.is_finite() && self.height.is_finite() && self.height > 0.0
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub fn contains(&self, point: PointerPosition) -> bool {
        point.x >= self.left && point.x < self.right() && point.y >= self.top && point.y < self.bottom()
    }

    /// Horizontal pointer offset as an unclamped percentage of the width.
    ///
    /// Returns `None` when the width is unusable or `x` is not finite.
    pub fn horizontal_percent(&self, x: f64) -> Option<f64> {
        if !self.has_usable_width() || !x.is_finite() {
            return None;
        }
        Some((x - self.left) / self.width * 100.0)
    }

    /// Vertical pointer offset as an unclamped percentage of the height.
    ///
    /// Returns `None` when the height is unusable or `y` is not finite.
    pub fn vertical_percent(&self, y: f64) -> Option<f64> {
        if !self.has_usable_height() || !y.is_finite() {
            return None;
        }
        Some((y - self.top) / self.height * 100.0)
    }

    /// Distance from `x` to the right edge, in pixels.
    ///
    /// Negative when the pointer is past the right edge. Returns `None` when
    /// the width is unusable or `x` is not finite.
    pub fn distance_from_right(&self, x: f64) -> Option<f64> {
        if !self.has_usable_width() || !x.is_finite() {
            return None;
        }
        Some(self.width - (x - self.left))
    }
}

/// Pointer coordinates reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Whether both coordinates are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}
