// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Which edges a resize is dragging.

use understory_glide::{Placement, ResizeEdges};
use understory_magnet::PixelRect;

/// Edge or corner reported by a live resize.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LiveEdge {
    /// Left edge.
    Left,
    /// Right edge.
    Right,
    /// Top edge.
    Top,
    /// Top-left corner.
    TopLeft,
    /// Top-right corner.
    TopRight,
    /// Bottom edge.
    Bottom,
    /// Bottom-left corner.
    BottomLeft,
    /// Bottom-right corner.
    BottomRight,
}

impl LiveEdge {
    /// Decode the conventional numbering `1..=8` (left, right, top, top-left,
    /// top-right, bottom, bottom-left, bottom-right).
    pub fn from_code(code: u32) -> Option<Self> {
        Some(match code {
            1 => Self::Left,
            2 => Self::Right,
            3 => Self::Top,
            4 => Self::TopLeft,
            5 => Self::TopRight,
            6 => Self::Bottom,
            7 => Self::BottomLeft,
            8 => Self::BottomRight,
            _ => return None,
        })
    }

    /// The edges this direction moves.
    pub fn edges(self) -> ResizeEdges {
        match self {
            Self::Left => ResizeEdges::LEFT,
            Self::Right => ResizeEdges::RIGHT,
            Self::Top => ResizeEdges::TOP,
            Self::TopLeft => ResizeEdges::TOP | ResizeEdges::LEFT,
            Self::TopRight => ResizeEdges::TOP | ResizeEdges::RIGHT,
            Self::Bottom => ResizeEdges::BOTTOM,
            Self::BottomLeft => ResizeEdges::BOTTOM | ResizeEdges::LEFT,
            Self::BottomRight => ResizeEdges::BOTTOM | ResizeEdges::RIGHT,
        }
    }
}

/// Edges for a raw live-resize code; unknown codes move nothing.
pub fn live_edges(code: u32) -> ResizeEdges {
    LiveEdge::from_code(code).map_or(ResizeEdges::empty(), LiveEdge::edges)
}

/// Guess the dragged edges of a resize that arrived without edge information.
///
/// An origin change is read as the left or top edge moving; a size change with a
/// fixed origin as the right or bottom edge. When the origin moved on one axis only,
/// a size change on the other axis falls back to the right or bottom edge.
pub fn infer_resize_edges(current: PixelRect, proposed: &Placement) -> ResizeEdges {
    let pos_changed = proposed.x != current.left || proposed.y != current.top;
    let width_changed = proposed.cx != current.width();
    let height_changed = proposed.cy != current.height();

    let mut edges = ResizeEdges::empty();
    edges.set(ResizeEdges::LEFT, pos_changed && proposed.x != current.left);
    edges.set(ResizeEdges::TOP, pos_changed && proposed.y != current.top);
    edges.set(ResizeEdges::RIGHT, !pos_changed && width_changed);
    edges.set(ResizeEdges::BOTTOM, !pos_changed && height_changed);

    if !edges.intersects(ResizeEdges::LEFT | ResizeEdges::RIGHT) {
        edges.set(ResizeEdges::RIGHT, width_changed);
    }
    if !edges.intersects(ResizeEdges::TOP | ResizeEdges::BOTTOM) {
        edges.set(ResizeEdges::BOTTOM, height_changed);
    }
    edges
}
