// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inertial slide after a drag is released.
//!
//! The host calls [`SlideSimulator::tick`] from a periodic timer (see [`TICK_PERIOD`]).
//! Each tick integrates a fixed step, keeps the cursor anchor on some monitor's work
//! area (crossing monitors or bouncing softly off the outer edge), decays velocity,
//! optionally re-snaps, and moves the window. The slide ends on its own after
//! [`FRAME_BUDGET`] frames, when motion stalls, or as soon as anything else moves the
//! window.

use core::time::Duration;

use kurbo::{Point, Vec2};
use tracing::{debug, trace};
use understory_magnet::{Backend, OrderedSet, PixelPoint, PixelRect};

use crate::host::{Host, nearest_work_area};
use crate::magnet::WindowMagnet;
use crate::settings::Settings;
use crate::types::{Placement, WindowId};
use crate::velocity::Release;

/// Maximum number of frames a slide runs.
pub const FRAME_BUDGET: u32 = 50;

/// Timer period to request from the host.
pub const TICK_PERIOD: Duration = Duration::from_millis(10);

/// Time integrated per frame, in seconds.
///
/// Host timers coalesce to roughly 15.6 ms, so that is what one frame represents.
pub const FRAME_STEP_SECS: f64 = 0.0156;

/// Fraction of velocity kept, reversed, after hitting the outer work-area edge.
pub const BOUNCE: f64 = 0.05;

/// Why a slide stopped.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SlideEnd {
    /// Something else moved or resized the window.
    Interference,
    /// The integer position stopped changing.
    Idle,
    /// The frame budget ran out.
    FrameBudget,
    /// The window no longer exists.
    WindowGone,
    /// The slide was canceled from outside.
    Canceled,
}

/// Outcome of one tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SlideTick {
    /// Keep the timer running.
    Running,
    /// Stop the timer and discard the simulator.
    Finished(SlideEnd),
}

/// Physics and snapping state for one sliding window.
#[derive(Debug)]
pub struct SlideSimulator<B: Backend = OrderedSet> {
    window: WindowId,
    anchor: PixelPoint,
    position: Point,
    velocity: Vec2,
    work_area: Option<PixelRect>,
    magnet: Option<WindowMagnet<B>>,
    frame: u32,
    last_applied: Option<PixelRect>,
}

impl<B: Backend> SlideSimulator<B> {
    /// Start a slide from a release.
    ///
    /// `anchor` is the cursor position relative to the window origin at release; the
    /// bounding work area is the one under the cursor. Pass `None` for `magnet` to
    /// slide without snapping.
    pub fn start<H: Host + ?Sized>(
        host: &H,
        window: WindowId,
        anchor: PixelPoint,
        release: Release,
        magnet: Option<WindowMagnet<B>>,
    ) -> Self {
        let cursor = PixelPoint::new(
            release.position.x.saturating_add(anchor.x),
            release.position.y.saturating_add(anchor.y),
        );
        let work_area = nearest_work_area(&host.work_areas(), cursor);
        debug!(
            ?window,
            vx = release.velocity.x,
            vy = release.velocity.y,
            snapping = magnet.is_some(),
            "slide started"
        );
        Self {
            window,
            anchor,
            position: Point::new(f64::from(release.position.x), f64::from(release.position.y)),
            velocity: release.velocity,
            work_area,
            magnet,
            frame: 0,
            last_applied: None,
        }
    }

    /// The sliding window.
    pub fn window(&self) -> WindowId {
        self.window
    }

    /// Current velocity in pixels per second.
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Frames applied so far.
    pub fn frame(&self) -> u32 {
        self.frame
    }

    /// Work area currently bounding the anchor.
    pub fn work_area(&self) -> Option<PixelRect> {
        self.work_area
    }

    /// Advance one frame.
    pub fn tick<H: Host + ?Sized>(&mut self, host: &mut H, settings: &Settings) -> SlideTick {
        let end = match self.step(host, settings) {
            Ok(()) if self.frame < FRAME_BUDGET => return SlideTick::Running,
            Ok(()) => SlideEnd::FrameBudget,
            Err(end) => end,
        };
        debug!(window = ?self.window, frames = self.frame, ?end, "slide finished");
        SlideTick::Finished(end)
    }

    fn step<H: Host + ?Sized>(&mut self, host: &mut H, settings: &Settings) -> Result<(), SlideEnd> {
        let rect = host.bounds(self.window).ok_or(SlideEnd::WindowGone)?;
        if self.last_applied.is_some_and(|last| last != rect) {
            return Err(SlideEnd::Interference);
        }

        let prev = to_pixels(self.position);
        self.position += self.velocity * FRAME_STEP_SECS;
        let mut current = to_pixels(self.position);
        if current == prev {
            return Err(SlideEnd::Idle);
        }

        let anchor = PixelPoint::new(
            current.x.saturating_add(self.anchor.x),
            current.y.saturating_add(self.anchor.y),
        );
        if let Some(area) = self.work_area
            && !area.contains_point(anchor)
        {
            if let Some(next) = host.work_areas().into_iter().find(|a| a.contains_point(anchor)) {
                trace!(window = ?self.window, ?next, "slide crossed monitors");
                self.work_area = Some(next);
            } else {
                self.bounce(area, anchor);
                current = to_pixels(self.position);
            }
        }

        self.velocity *= settings.decay_factor();

        if let Some(magnet) = &mut self.magnet {
            let mut placement = Placement::new(current.x, current.y, rect.width(), rect.height());
            magnet.magnet_move(&*host, self.window, settings, &mut placement);
            if placement.x != current.x {
                self.position.x = f64::from(placement.x);
                current.x = placement.x;
                self.velocity.x = 0.0;
            }
            if placement.y != current.y {
                self.position.y = f64::from(placement.y);
                current.y = placement.y;
                self.velocity.y = 0.0;
            }
        }

        host.set_window_position(self.window, current);
        self.last_applied = Some(PixelRect::from_xywh(
            current.x,
            current.y,
            rect.width(),
            rect.height(),
        ));
        self.frame += 1;
        trace!(window = ?self.window, frame = self.frame, ?current, "slide frame");
        Ok(())
    }

    /// Clamp the violated axes to the work-area edge and reflect a sliver of velocity.
    fn bounce(&mut self, area: PixelRect, anchor: PixelPoint) {
        if anchor.x < area.left {
            self.position.x = f64::from(area.left - self.anchor.x);
            self.velocity.x = -self.velocity.x * BOUNCE;
        } else if anchor.x > area.right {
            self.position.x = f64::from(area.right - self.anchor.x);
            self.velocity.x = -self.velocity.x * BOUNCE;
        }
        if anchor.y < area.top {
            self.position.y = f64::from(area.top - self.anchor.y);
            self.velocity.y = -self.velocity.y * BOUNCE;
        } else if anchor.y > area.bottom {
            self.position.y = f64::from(area.bottom - self.anchor.y);
            self.velocity.y = -self.velocity.y * BOUNCE;
        }
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "positions truncate toward zero and saturate at the i32 range"
)]
fn to_pixels(p: Point) -> PixelPoint {
    PixelPoint::new(p.x as i32, p.y as i32)
}
