// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One direction's worth of snap targets, with interval punching and nearest-edge search.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::backend::Backend;
use crate::backends::ordered::OrderedSet;
use crate::target::SnapTarget;

/// Snap targets for one edge direction.
///
/// Within a set no two targets share a coordinate with overlapping spans:
/// [`EdgeSet::insert`] and [`EdgeSet::punch`] split existing targets rather than
/// stacking new ones on top of them.
#[derive(Clone, Debug, Default)]
pub struct EdgeSet<B: Backend = OrderedSet> {
    backend: B,
}

impl<B: Backend> EdgeSet<B> {
    /// Create an empty set.
    pub fn new() -> Self {
        Self {
            backend: B::default(),
        }
    }

    /// Number of stored targets.
    pub fn len(&self) -> usize {
        self.backend.len()
    }

    /// True if the set holds no targets.
    pub fn is_empty(&self) -> bool {
        self.backend.is_empty()
    }

    /// Remove every target.
    pub fn clear(&mut self) {
        self.backend.clear();
    }

    /// All targets in ascending `(coord, start, end)` order.
    pub fn iter(&self) -> Box<dyn Iterator<Item = SnapTarget> + '_> {
        self.backend.scan_from(SnapTarget::seek(i32::MIN))
    }

    /// Insert an exposed segment.
    ///
    /// Whatever part of an existing target at the same coordinate lies under the new
    /// span is replaced, so the set stays free of stacked duplicates. Empty spans are
    /// ignored.
    pub fn insert(&mut self, target: SnapTarget) {
        if target.is_empty() {
            return;
        }
        self.punch(target.coord, target.coord, target.start, target.end);
        self.backend.insert(target);
    }

    /// Erase the footprint of an occluding rectangle.
    ///
    /// Every target with `start <= coord <= end` whose span overlaps
    /// `other_start..other_end` is removed, and the parts of its span outside that
    /// range are put back. Returns how many targets were cut.
    pub fn punch(&mut self, start: i32, end: i32, other_start: i32, other_end: i32) -> usize {
        let cut: Vec<SnapTarget> = self
            .backend
            .scan_from(SnapTarget::seek(start))
            .take_while(|t| t.coord < end || (t.coord == end && t.start <= other_end))
            .filter(|t| t.overlaps(other_start, other_end))
            .collect();
        for t in &cut {
            self.backend.remove(t);
            if other_start > t.start {
                self.backend
                    .insert(SnapTarget::new(t.coord, t.start, other_start));
            }
            if other_end < t.end {
                self.backend.insert(SnapTarget::new(t.coord, other_end, t.end));
            }
        }
        cut.len()
    }

    /// Find the target coordinate nearest to `source`.
    ///
    /// Only targets with `|coord - source| <= within` whose span overlaps
    /// `other_start..other_end` qualify. Among equally distant coordinates the lower
    /// one wins. Returns `None` when nothing qualifies.
    pub fn closest(&self, source: i32, other_start: i32, other_end: i32, within: i32) -> Option<i32> {
        let lo = source.saturating_sub(within);
        let hi = source.saturating_add(within);
        let mut best: Option<i32> = None;
        for t in self.backend.scan_from(SnapTarget::seek(lo)) {
            if t.coord > hi || (t.coord == hi && t.start > other_end) {
                break;
            }
            if let Some(b) = best {
                if t.coord == b {
                    continue;
                }
                // Coordinates only grow from here on; once one is no closer, none will be.
                if source.abs_diff(t.coord) >= source.abs_diff(b) {
                    break;
                }
            }
            if t.overlaps(other_start, other_end) {
                best = Some(t.coord);
            }
        }
        best
    }
}
