// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cursor-locked move positions.
//!
//! Live-move notifications sometimes report a window position that trails the cursor
//! by a frame. Once a snap has shifted the window on an earlier frame, trusting that
//! stale position makes the window stutter. The smoother instead keeps the cursor to
//! window offset observed on the previous frame and re-derives the position from the
//! current cursor.

use understory_magnet::PixelPoint;

use crate::types::WindowState;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Frame {
    state: WindowState,
    cursor: PixelPoint,
    position: PixelPoint,
}

/// Per-window move smoothing state.
#[derive(Clone, Debug, Default)]
pub struct MoveSmoother {
    last: Option<Frame>,
}

impl MoveSmoother {
    /// Create an idle smoother.
    pub fn new() -> Self {
        Self::default()
    }

    /// Correct a reported position.
    ///
    /// If the window's classification matches the previous frame, the result keeps
    /// the previous cursor offset. Otherwise the reported position is taken as-is and
    /// becomes the new reference.
    pub fn smooth(
        &mut self,
        state: WindowState,
        cursor: PixelPoint,
        reported: PixelPoint,
    ) -> PixelPoint {
        let position = match self.last {
            Some(last) if last.state == state => {
                cursor.offset_from(last.cursor.offset_from(last.position))
            }
            _ => reported,
        };
        self.last = Some(Frame {
            state,
            cursor,
            position,
        });
        position
    }

    /// Drop tracking, e.g. when the gesture turns out to be a resize.
    pub fn forget(&mut self) {
        self.last = None;
    }

    /// Whether a reference frame is held.
    pub fn is_tracking(&self) -> bool {
        self.last.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NORMAL: WindowState = WindowState {
        minimized: false,
        maximized: false,
        arranged: false,
    };

    #[test]
    fn first_frame_passes_through() {
        let mut s = MoveSmoother::new();
        let p = s.smooth(NORMAL, PixelPoint::new(150, 20), PixelPoint::new(100, 10));
        assert_eq!(p, PixelPoint::new(100, 10));
        assert!(s.is_tracking());
    }

    #[test]
    fn lagging_report_follows_cursor() {
        let mut s = MoveSmoother::new();
        s.smooth(NORMAL, PixelPoint::new(150, 20), PixelPoint::new(100, 10));
        // Cursor moved 12px right but the reported position only moved 5px.
        let p = s.smooth(NORMAL, PixelPoint::new(162, 20), PixelPoint::new(105, 10));
        assert_eq!(p, PixelPoint::new(112, 10));
        let p = s.smooth(NORMAL, PixelPoint::new(170, 25), PixelPoint::new(112, 10));
        assert_eq!(p, PixelPoint::new(120, 15));
    }

    #[test]
    fn state_change_resets_reference() {
        let mut s = MoveSmoother::new();
        s.smooth(NORMAL, PixelPoint::new(150, 20), PixelPoint::new(100, 10));
        let maximized = WindowState {
            maximized: true,
            ..NORMAL
        };
        let p = s.smooth(maximized, PixelPoint::new(300, 5), PixelPoint::new(0, 0));
        assert_eq!(p, PixelPoint::new(0, 0));
        let p = s.smooth(maximized, PixelPoint::new(310, 5), PixelPoint::new(0, 0));
        assert_eq!(p, PixelPoint::new(10, 0));
    }

    #[test]
    fn forget_drops_reference() {
        let mut s = MoveSmoother::new();
        s.smooth(NORMAL, PixelPoint::new(150, 20), PixelPoint::new(100, 10));
        s.forget();
        assert!(!s.is_tracking());
        let p = s.smooth(NORMAL, PixelPoint::new(500, 20), PixelPoint::new(7, 7));
        assert_eq!(p, PixelPoint::new(7, 7));
    }
}
