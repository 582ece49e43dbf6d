// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The four edge-sets of a snapping session and their construction from a desktop snapshot.

use crate::backend::Backend;
use crate::backends::ordered::OrderedSet;
use crate::edge_set::EdgeSet;
use crate::target::SnapTarget;
use crate::types::{Edge, PixelRect};

/// Snap targets for all four directions, generic over the storage backend.
///
/// The set for [`Edge::Left`] holds positions a window's *right* edge can land on from
/// the left side of a neighbor: other windows' left edges and monitor work-area right
/// edges. The other three sets are symmetric. Use [`Edge::opposite`] to pick the set a
/// moving edge compares against when resizing.
#[derive(Clone, Debug, Default)]
pub struct TargetIndexGeneric<B: Backend> {
    sets: [EdgeSet<B>; 4],
}

/// Target index with the default ordered-set backend.
pub type TargetIndex = TargetIndexGeneric<OrderedSet>;

impl<B: Backend> TargetIndexGeneric<B> {
    /// Create an empty index.
    pub fn new() -> Self {
        Self {
            sets: [
                EdgeSet::new(),
                EdgeSet::new(),
                EdgeSet::new(),
                EdgeSet::new(),
            ],
        }
    }

    /// Build from a snapshot.
    ///
    /// `windows_front_to_back` are visible frame rectangles in z-order, topmost first;
    /// they are inserted back to front so nearer windows hide the edges they cover.
    /// `work_areas` are added afterwards and are never occluded.
    pub fn from_snapshot(windows_front_to_back: &[PixelRect], work_areas: &[PixelRect]) -> Self {
        let mut index = Self::new();
        for rect in windows_front_to_back.iter().rev() {
            index.insert_window(*rect);
        }
        for area in work_areas {
            index.insert_work_area(*area);
        }
        index
    }

    /// The set for one direction.
    pub fn set(&self, edge: Edge) -> &EdgeSet<B> {
        &self.sets[edge.slot()]
    }

    /// Total number of targets across all sets.
    pub fn len(&self) -> usize {
        self.sets.iter().map(EdgeSet::len).sum()
    }

    /// True if no set holds a target.
    pub fn is_empty(&self) -> bool {
        self.sets.iter().all(EdgeSet::is_empty)
    }

    /// Add a window above everything inserted so far.
    ///
    /// Edges of earlier windows lying within the rectangle's footprint are cut away
    /// before the window's own four edges are added. Empty rectangles are skipped.
    pub fn insert_window(&mut self, rect: PixelRect) {
        if rect.is_empty() {
            return;
        }
        for edge in Edge::ALL {
            let (start, end) = rect.extent(edge);
            let (other_start, other_end) = rect.span(edge);
            self.sets[edge.slot()].punch(start, end, other_start, other_end);
        }
        for edge in Edge::ALL {
            let (start, end) = rect.span(edge);
            self.sets[edge.slot()].insert(SnapTarget::new(rect.edge(edge), start, end));
        }
    }

    /// Add a monitor work area.
    ///
    /// Each boundary goes into the opposite set: the work area's right edge is a wall a
    /// window's right edge stops against, just like a neighbor's left edge.
    pub fn insert_work_area(&mut self, area: PixelRect) {
        if area.is_empty() {
            return;
        }
        for edge in Edge::ALL {
            let (start, end) = area.span(edge);
            self.sets[edge.opposite().slot()].insert(SnapTarget::new(area.edge(edge), start, end));
        }
    }

    /// Nearest target coordinate in `edge`'s set; see [`EdgeSet::closest`].
    pub fn closest(
        &self,
        edge: Edge,
        source: i32,
        other_start: i32,
        other_end: i32,
        within: i32,
    ) -> Option<i32> {
        self.set(edge).closest(source, other_start, other_end, within)
    }
}
