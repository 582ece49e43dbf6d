// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The snap target triple stored in each edge-set.

/// An exposed edge segment that another window's edge can align to.
///
/// `coord` is the position along the primary axis (x for left/right edge-sets,
/// y for top/bottom); `start..end` is the span along the perpendicular axis over which
/// the edge is visible.
///
/// Targets order lexicographically by `(coord, start, end)`, which lets backends seek to
/// the first target at or after a coordinate and scan outward.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SnapTarget {
    /// Edge position along the primary axis.
    pub coord: i32,
    /// Start of the exposed span on the perpendicular axis.
    pub start: i32,
    /// End of the exposed span on the perpendicular axis (exclusive).
    pub end: i32,
}

impl SnapTarget {
    /// Create a target.
    pub const fn new(coord: i32, start: i32, end: i32) -> Self {
        Self { coord, start, end }
    }

    /// The smallest target at `coord`; seeking to it visits every target at `coord`.
    pub const fn seek(coord: i32) -> Self {
        Self {
            coord,
            start: i32::MIN,
            end: i32::MIN,
        }
    }

    /// Whether the exposed span shares a positive length with `start..end`.
    pub const fn overlaps(&self, start: i32, end: i32) -> bool {
        start < self.end && end > self.start
    }

    /// Length of the exposed span.
    pub const fn len(&self) -> i32 {
        self.end.saturating_sub(self.start)
    }

    /// True if the span is empty.
    pub const fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}
