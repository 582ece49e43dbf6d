// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integer pixel geometry shared by the snapping crates.
//!
//! Coordinates are device pixels in the host's virtual-screen space.
//! Rectangles are half-open: `right` and `bottom` are one past the last covered pixel.

/// A point in device pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct PixelPoint {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

impl PixelPoint {
    /// Create a point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Component-wise `self - other`, saturating.
    pub const fn offset_from(self, other: Self) -> Self {
        Self {
            x: self.x.saturating_sub(other.x),
            y: self.y.saturating_sub(other.y),
        }
    }
}

/// Axis-aligned rectangle in device pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct PixelRect {
    /// Left edge (inclusive).
    pub left: i32,
    /// Top edge (inclusive).
    pub top: i32,
    /// Right edge (exclusive).
    pub right: i32,
    /// Bottom edge (exclusive).
    pub bottom: i32,
}

impl PixelRect {
    /// Create a rectangle from its four edges.
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create a rectangle from origin and size.
    pub const fn from_xywh(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            left: x,
            top: y,
            right: x.saturating_add(w),
            bottom: y.saturating_add(h),
        }
    }

    /// Width; negative for inverted rectangles.
    pub const fn width(&self) -> i32 {
        self.right.saturating_sub(self.left)
    }

    /// Height; negative for inverted rectangles.
    pub const fn height(&self) -> i32 {
        self.bottom.saturating_sub(self.top)
    }

    /// Top-left corner.
    pub const fn origin(&self) -> PixelPoint {
        PixelPoint::new(self.left, self.top)
    }

    /// True if the rectangle covers no pixels.
    pub const fn is_empty(&self) -> bool {
        self.left >= self.right || self.top >= self.bottom
    }

    /// Whether the point lies inside (left/top inclusive, right/bottom exclusive).
    pub const fn contains_point(&self, p: PixelPoint) -> bool {
        self.left <= p.x && p.x < self.right && self.top <= p.y && p.y < self.bottom
    }

    /// Whether the two rectangles share at least one pixel.
    pub const fn intersects(&self, other: &Self) -> bool {
        self.left < other.right
            && self.right > other.left
            && self.top < other.bottom
            && self.bottom > other.top
    }

    /// Shrink by the given insets (used to go from window bounds to visible frame).
    pub const fn inset(&self, insets: Insets) -> Self {
        Self {
            left: self.left.saturating_add(insets.left),
            top: self.top.saturating_add(insets.top),
            right: self.right.saturating_sub(insets.right),
            bottom: self.bottom.saturating_sub(insets.bottom),
        }
    }

    /// Translate by `(dx, dy)`.
    pub const fn translate(&self, dx: i32, dy: i32) -> Self {
        Self {
            left: self.left.saturating_add(dx),
            top: self.top.saturating_add(dy),
            right: self.right.saturating_add(dx),
            bottom: self.bottom.saturating_add(dy),
        }
    }

    /// Coordinate of the given edge.
    pub const fn edge(&self, edge: Edge) -> i32 {
        match edge {
            Edge::Left => self.left,
            Edge::Top => self.top,
            Edge::Right => self.right,
            Edge::Bottom => self.bottom,
        }
    }

    /// The span an edge covers along the perpendicular axis, as `(start, end)`.
    pub const fn span(&self, edge: Edge) -> (i32, i32) {
        match edge {
            Edge::Left | Edge::Right => (self.top, self.bottom),
            Edge::Top | Edge::Bottom => (self.left, self.right),
        }
    }

    /// The rectangle's extent along the edge's primary axis, as `(start, end)`.
    pub const fn extent(&self, edge: Edge) -> (i32, i32) {
        match edge {
            Edge::Left | Edge::Right => (self.left, self.right),
            Edge::Top | Edge::Bottom => (self.top, self.bottom),
        }
    }
}

/// Distances between a window's outer bounds and its visible frame, per side.
///
/// Drop shadows and invisible resize borders make the outer bounds larger than what
/// the user sees; snapping aligns the visible frames.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Insets {
    /// Left inset.
    pub left: i32,
    /// Top inset.
    pub top: i32,
    /// Right inset.
    pub right: i32,
    /// Bottom inset.
    pub bottom: i32,
}

impl Insets {
    /// No insets.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Create insets.
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Insets that turn `outer` into `inner`.
    pub const fn between(outer: &PixelRect, inner: &PixelRect) -> Self {
        Self {
            left: inner.left.saturating_sub(outer.left),
            top: inner.top.saturating_sub(outer.top),
            right: outer.right.saturating_sub(inner.right),
            bottom: outer.bottom.saturating_sub(inner.bottom),
        }
    }
}

/// One of the four cardinal edges of a rectangle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Edge {
    /// Left edge; primary axis is x.
    Left,
    /// Top edge; primary axis is y.
    Top,
    /// Right edge; primary axis is x.
    Right,
    /// Bottom edge; primary axis is y.
    Bottom,
}

impl Edge {
    /// All four edges in index order.
    pub const ALL: [Self; 4] = [Self::Left, Self::Top, Self::Right, Self::Bottom];

    /// The edge facing this one across a gap (`Left` ↔ `Right`, `Top` ↔ `Bottom`).
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Top => Self::Bottom,
            Self::Right => Self::Left,
            Self::Bottom => Self::Top,
        }
    }

    /// True for edges whose coordinate is an x position.
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    pub(crate) const fn slot(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Top => 1,
            Self::Right => 2,
            Self::Bottom => 3,
        }
    }
}

/// Compute `value * numerator / denominator` with a 64-bit intermediate, rounding
/// halves away from zero.
///
/// A zero `denominator` returns `value` unchanged so that a missing DPI reading
/// degrades to unscaled geometry.
pub fn mul_div(value: i32, numerator: i32, denominator: i32) -> i32 {
    if denominator == 0 {
        return value;
    }
    let mut p = i64::from(value) * i64::from(numerator);
    let mut d = i64::from(denominator);
    if d < 0 {
        p = -p;
        d = -d;
    }
    let q = if p >= 0 {
        (p + d / 2) / d
    } else {
        -((-p + d / 2) / d)
    };
    i32::try_from(q).unwrap_or(if q < 0 { i32::MIN } else { i32::MAX })
}
