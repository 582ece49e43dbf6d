// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Notification payloads delivered by the host plumbing.

use understory_glide::Placement;
use understory_magnet::PixelRect;

bitflags::bitflags! {
    /// Flags carried by position-changing and position-changed notifications.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct PositionFlags: u8 {
        /// The notification does not carry a position.
        const NO_MOVE        = 0b0001;
        /// The notification does not carry a size.
        const NO_SIZE        = 0b0010;
        /// Minimized, maximized or restored state changed.
        const STATE_CHANGED  = 0b0100;
        /// The OS re-arranged the window (edge snap layouts and similar).
        const SYSTEM_ARRANGE = 0b1000;
    }
}

/// A proposed position and size that may be rewritten before it is applied.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PositionChange {
    /// Proposed left; ignored with [`PositionFlags::NO_MOVE`].
    pub x: i32,
    /// Proposed top; ignored with [`PositionFlags::NO_MOVE`].
    pub y: i32,
    /// Proposed width; ignored with [`PositionFlags::NO_SIZE`].
    pub cx: i32,
    /// Proposed height; ignored with [`PositionFlags::NO_SIZE`].
    pub cy: i32,
    /// What the notification carries.
    pub flags: PositionFlags,
}

impl PositionChange {
    /// A move to `(x, y)` that keeps the current size.
    pub fn moved(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            flags: PositionFlags::NO_SIZE,
            ..Self::default()
        }
    }

    /// A change carrying both position and size.
    pub fn reshaped(rect: PixelRect) -> Self {
        Self {
            x: rect.left,
            y: rect.top,
            cx: rect.width(),
            cy: rect.height(),
            flags: PositionFlags::empty(),
        }
    }

    /// Complete the proposal with `current` for the fields it does not carry.
    pub(crate) fn resolve(&self, current: PixelRect) -> Placement {
        let (x, y) = if self.flags.contains(PositionFlags::NO_MOVE) {
            (current.left, current.top)
        } else {
            (self.x, self.y)
        };
        let (cx, cy) = if self.flags.contains(PositionFlags::NO_SIZE) {
            (current.width(), current.height())
        } else {
            (self.cx, self.cy)
        };
        Placement::new(x, y, cx, cy)
    }

    /// Write back only the fields the notification carries.
    pub(crate) fn apply(&mut self, placement: Placement) {
        if !self.flags.contains(PositionFlags::NO_MOVE) {
            self.x = placement.x;
            self.y = placement.y;
        }
        if !self.flags.contains(PositionFlags::NO_SIZE) {
            self.cx = placement.cx;
            self.cy = placement.cy;
        }
    }
}

/// A position change that has been applied.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct AppliedPosition {
    /// New left.
    pub x: i32,
    /// New top.
    pub y: i32,
    /// New width.
    pub cx: i32,
    /// New height.
    pub cy: i32,
    /// What changed.
    pub flags: PositionFlags,
}

impl AppliedPosition {
    /// A pure move.
    pub fn moved(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            flags: PositionFlags::NO_SIZE,
            ..Self::default()
        }
    }
}

/// High-level window commands that end a slide.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LifecycleCommand {
    /// Keyboard or menu resize.
    Size,
    /// Keyboard or menu move.
    Move,
    /// Minimize.
    Minimize,
    /// Maximize.
    Maximize,
    /// Close.
    Close,
    /// Window menu opened with the mouse.
    MouseMenu,
    /// Window menu opened with the keyboard.
    KeyMenu,
    /// Restore from minimized or maximized.
    Restore,
    /// Any other command; slides keep running.
    Other,
}

impl LifecycleCommand {
    /// Whether this command stops a running slide.
    pub fn cancels_slide(self) -> bool {
        !matches!(self, Self::Other)
    }
}

/// Whether the host should keep its per-window instrumentation after a call.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SessionEnd {
    /// More notifications are needed (a gesture or slide is live).
    Keep,
    /// Nothing is live for the window any more; release it.
    Release,
}
