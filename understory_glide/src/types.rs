// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Window identity, placement, and the small flag sets used across the engine.

use understory_magnet::{Insets, PixelPoint, PixelRect};

/// Opaque host window handle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowId(pub u64);

/// The minimized/maximized/arranged classification of a window.
///
/// A change in any of these between two notifications means the window jumped for a
/// reason other than the user's drag; trackers drop their history when it happens.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct WindowState {
    /// Window is minimized (iconic).
    pub minimized: bool,
    /// Window is maximized.
    pub maximized: bool,
    /// Window is in an OS-arranged layout (e.g. edge-snapped half screen).
    pub arranged: bool,
}

/// Proposed outer position and size of a window.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Placement {
    /// Left of the outer bounds.
    pub x: i32,
    /// Top of the outer bounds.
    pub y: i32,
    /// Outer width.
    pub cx: i32,
    /// Outer height.
    pub cy: i32,
}

impl Placement {
    /// Create a placement.
    pub const fn new(x: i32, y: i32, cx: i32, cy: i32) -> Self {
        Self { x, y, cx, cy }
    }

    /// Placement covering `rect`.
    pub const fn from_rect(rect: PixelRect) -> Self {
        Self {
            x: rect.left,
            y: rect.top,
            cx: rect.width(),
            cy: rect.height(),
        }
    }

    /// Outer bounds.
    pub const fn rect(&self) -> PixelRect {
        PixelRect::from_xywh(self.x, self.y, self.cx, self.cy)
    }

    /// Top-left corner.
    pub const fn origin(&self) -> PixelPoint {
        PixelPoint::new(self.x, self.y)
    }

    /// Visible frame once `border` is stripped from the outer bounds.
    pub const fn frame(&self, border: Insets) -> PixelRect {
        self.rect().inset(border)
    }

    /// One-pixel-tall strip along the top of the visible frame.
    ///
    /// If this strip lands outside every work area the user can no longer grab the
    /// title bar, so adjustments that produce it are rejected.
    pub const fn title_probe(&self, border: Insets) -> PixelRect {
        let frame = self.frame(border);
        PixelRect::new(frame.left, frame.top, frame.right, frame.top.saturating_add(1))
    }
}

bitflags::bitflags! {
    /// Edges being dragged during a resize.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ResizeEdges: u8 {
        /// Left edge moves.
        const LEFT   = 0b0001;
        /// Top edge moves.
        const TOP    = 0b0010;
        /// Right edge moves.
        const RIGHT  = 0b0100;
        /// Bottom edge moves.
        const BOTTOM = 0b1000;
    }
}

bitflags::bitflags! {
    /// Keyboard modifiers that can be combined to temporarily disable snapping.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ModifierKeys: u8 {
        /// Control.
        const CTRL  = 0b001;
        /// Alt.
        const ALT   = 0b010;
        /// Shift.
        const SHIFT = 0b100;
    }
}
