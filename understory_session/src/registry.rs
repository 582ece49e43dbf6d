// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-window session state machine.
//!
//! A [`SessionRegistry`] lives on the UI thread that owns the windows it serves. The
//! host's event handlers forward notifications to it:
//!
//! | Host event | Call |
//! |---|---|
//! | size/move loop entered | [`on_session_enter`](SessionRegistry::on_session_enter) |
//! | live resize with edge information | [`on_live_resize`](SessionRegistry::on_live_resize) |
//! | position about to change | [`on_position_changing`](SessionRegistry::on_position_changing) |
//! | position changed | [`on_position_changed`](SessionRegistry::on_position_changed) |
//! | size/move loop exited | [`on_session_exit`](SessionRegistry::on_session_exit) |
//! | slide timer fired | [`on_slide_tick`](SessionRegistry::on_slide_tick) |
//! | window command | [`on_lifecycle_command`](SessionRegistry::on_lifecycle_command) |
//! | window destroyed | [`on_window_destroyed`](SessionRegistry::on_window_destroyed) |
//!
//! Calls that can end the last live activity for a window return [`SessionEnd`] so
//! the host knows when to drop its per-window instrumentation.

use std::collections::HashMap;

use tracing::debug;
use understory_glide::host::window_state;
use understory_glide::{
    Host, MoveGesture, Placement, Settings, SlideEnd, SlideSimulator, SlideTick, VelocityTracker,
    WindowId, WindowMagnet,
};
use understory_magnet::{Backend, OrderedSet, PixelPoint, PixelRect};

use crate::edges::{LiveEdge, infer_resize_edges};
use crate::lifetime::CancellationToken;
use crate::notify::{AppliedPosition, LifecycleCommand, PositionChange, PositionFlags, SessionEnd};

/// Gestures, velocity trackers and slides keyed by window.
#[derive(Debug)]
pub struct SessionRegistry<B: Backend = OrderedSet> {
    settings: Settings,
    gestures: HashMap<WindowId, MoveGesture<B>>,
    trackers: HashMap<WindowId, VelocityTracker>,
    slides: HashMap<WindowId, SlideSimulator<B>>,
    cancel: CancellationToken,
}

impl<B: Backend> SessionRegistry<B> {
    /// Create an empty registry.
    pub fn new(settings: Settings) -> Self {
        Self::with_cancellation(settings, CancellationToken::new())
    }

    /// Create an empty registry that stops all work once `cancel` fires.
    pub fn with_cancellation(settings: Settings, cancel: CancellationToken) -> Self {
        Self {
            settings,
            gestures: HashMap::new(),
            trackers: HashMap::new(),
            slides: HashMap::new(),
            cancel,
        }
    }

    /// Current settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Replace the settings.
    ///
    /// Magnets already built keep their cached distance until the window's DPI or
    /// maximized state changes.
    pub fn set_settings(&mut self, settings: Settings) {
        debug!(?settings, "settings replaced");
        self.settings = settings;
    }

    /// Whether a move/resize gesture is live for the window.
    pub fn is_dragging(&self, window: WindowId) -> bool {
        self.gestures.contains_key(&window)
    }

    /// Whether the window is sliding.
    pub fn is_sliding(&self, window: WindowId) -> bool {
        self.slides.contains_key(&window)
    }

    /// Windows with a running slide.
    pub fn sliding_windows(&self) -> impl Iterator<Item = WindowId> + '_ {
        self.slides.keys().copied()
    }

    /// A size/move loop started.
    ///
    /// Any running slide for the window stops, and the desktop is snapshotted for the
    /// gesture. Velocity is tracked only when slides are enabled.
    pub fn on_session_enter<H: Host + ?Sized>(&mut self, host: &H, window: WindowId) {
        if self.cancel.is_canceled() {
            return;
        }
        if self.slides.remove(&window).is_some() {
            debug!(?window, end = ?SlideEnd::Canceled, "slide finished");
        }
        let settings = self.settings;
        self.gestures
            .entry(window)
            .or_insert_with(|| MoveGesture::begin(host, window, &settings));
        if settings.slide_enabled {
            self.trackers.entry(window).or_default();
        }
        debug!(?window, slide = settings.slide_enabled, "session entered");
    }

    /// The size/move loop ended.
    ///
    /// If the tracker yields a release velocity a slide starts, reusing the gesture's
    /// magnet when snapping while sliding is on. Returns [`SessionEnd::Keep`] while a
    /// slide runs.
    pub fn on_session_exit<H: Host + ?Sized>(&mut self, host: &H, window: WindowId) -> SessionEnd {
        let gesture = self.gestures.remove(&window);
        let Some(tracker) = self.trackers.remove(&window) else {
            debug!(?window, "session exited");
            return SessionEnd::Release;
        };
        let release = if self.cancel.is_canceled() {
            None
        } else {
            tracker.complete(host.now())
        };
        let Some(release) = release else {
            debug!(?window, "session exited without velocity");
            return SessionEnd::Release;
        };

        let anchor = host.cursor_position().offset_from(release.position);
        let magnet = self.settings.slide_with_snap.then(|| match gesture {
            Some(g) => g.into_magnet(),
            None => WindowMagnet::build(host, window, &self.settings),
        });
        let slide = SlideSimulator::start(host, window, anchor, release, magnet);
        self.slides.insert(window, slide);
        SessionEnd::Keep
    }

    /// A live resize is about to apply `rect`; snap the dragged edges in place.
    pub fn on_live_resize<H: Host + ?Sized>(
        &mut self,
        host: &H,
        window: WindowId,
        edge: LiveEdge,
        rect: &mut PixelRect,
    ) {
        if !self.settings.snap_enabled || self.cancel.is_canceled() {
            return;
        }
        let Some(gesture) = self.gestures.get_mut(&window) else {
            return;
        };
        let mut placement = Placement::from_rect(*rect);
        if gesture
            .magnet_mut()
            .magnet_resize(host, window, &self.settings, &mut placement, edge.edges())
        {
            *rect = placement.rect();
        }
    }

    /// A position or size change is about to apply; snap it in place.
    ///
    /// Pure moves go through the move smoother and move adjuster. Anything that
    /// changes size goes through the resize adjuster with inferred edges.
    pub fn on_position_changing<H: Host + ?Sized>(
        &mut self,
        host: &H,
        window: WindowId,
        change: &mut PositionChange,
    ) {
        if change
            .flags
            .contains(PositionFlags::NO_MOVE | PositionFlags::NO_SIZE)
        {
            return;
        }
        let Some(current) = host.bounds(window) else {
            return;
        };
        let mut placement = change.resolve(current);
        let pos_changed = placement.x != current.left || placement.y != current.top;
        let size_changed = placement.cx != current.width() || placement.cy != current.height();
        if !pos_changed && !size_changed {
            return;
        }
        if !self.settings.snap_enabled || self.cancel.is_canceled() {
            return;
        }
        let Some(gesture) = self.gestures.get_mut(&window) else {
            return;
        };

        if size_changed {
            let edges = infer_resize_edges(current, &placement);
            gesture.resize(host, window, &self.settings, &mut placement, edges);
        } else {
            gesture.pre_process_pos(host, window, &self.settings, &mut placement);
        }
        change.apply(placement);
    }

    /// A position change was applied.
    ///
    /// During a gesture, pure moves feed the velocity tracker and anything else resets
    /// it. Outside a gesture, a state change or OS re-arrangement stops any slide.
    pub fn on_position_changed<H: Host + ?Sized>(
        &mut self,
        host: &H,
        window: WindowId,
        applied: &AppliedPosition,
    ) -> SessionEnd {
        let Some(tracker) = self.trackers.get_mut(&window) else {
            if applied
                .flags
                .intersects(PositionFlags::STATE_CHANGED | PositionFlags::SYSTEM_ARRANGE)
            {
                return self.cancel_slide(window);
            }
            return SessionEnd::Keep;
        };
        if applied.flags.contains(PositionFlags::NO_MOVE)
            || !applied.flags.contains(PositionFlags::NO_SIZE)
        {
            tracker.reset();
        } else {
            tracker.update(
                host.now(),
                window_state(host, window),
                PixelPoint::new(applied.x, applied.y),
            );
        }
        SessionEnd::Keep
    }

    /// A window command arrived; commands that take over the window stop its slide.
    pub fn on_lifecycle_command(&mut self, window: WindowId, command: LifecycleCommand) -> SessionEnd {
        if command.cancels_slide() {
            self.cancel_slide(window)
        } else {
            SessionEnd::Keep
        }
    }

    /// The window is gone; drop everything held for it.
    pub fn on_window_destroyed(&mut self, window: WindowId) {
        self.gestures.remove(&window);
        self.trackers.remove(&window);
        if self.slides.remove(&window).is_some() {
            debug!(?window, end = ?SlideEnd::WindowGone, "slide finished");
        }
    }

    /// Advance the window's slide by one frame.
    ///
    /// Any `Finished` result means the host should stop the timer and release the
    /// window.
    pub fn on_slide_tick<H: Host + ?Sized>(&mut self, host: &mut H, window: WindowId) -> SlideTick {
        if self.cancel.is_canceled() {
            self.slides.remove(&window);
            return SlideTick::Finished(SlideEnd::Canceled);
        }
        let Some(slide) = self.slides.get_mut(&window) else {
            return SlideTick::Finished(SlideEnd::Canceled);
        };
        let tick = slide.tick(host, &self.settings);
        if matches!(tick, SlideTick::Finished(_)) {
            self.slides.remove(&window);
        }
        tick
    }

    /// Drop all state. Returns every window that had any, sorted, so the host can
    /// stop timers and release instrumentation.
    pub fn cancel_all(&mut self) -> Vec<WindowId> {
        let mut windows: Vec<WindowId> = self
            .gestures
            .keys()
            .chain(self.trackers.keys())
            .chain(self.slides.keys())
            .copied()
            .collect();
        windows.sort_unstable();
        windows.dedup();
        self.gestures.clear();
        self.trackers.clear();
        self.slides.clear();
        debug!(windows = windows.len(), "all sessions canceled");
        windows
    }

    fn cancel_slide(&mut self, window: WindowId) -> SessionEnd {
        if self.slides.remove(&window).is_some() {
            debug!(?window, end = ?SlideEnd::Canceled, "slide finished");
            SessionEnd::Release
        } else {
            SessionEnd::Keep
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use understory_glide::{SimDesktop, WindowState};

    fn desk() -> (SimDesktop, WindowId) {
        let mut desk = SimDesktop::new();
        desk.add_monitor(PixelRect::new(0, 0, 1920, 1080), PixelRect::new(0, 0, 1920, 1040));
        desk.add_window(PixelRect::new(0, 0, 100, 100));
        let me = desk.add_window(PixelRect::new(300, 50, 400, 150));
        (desk, me)
    }

    /// Drag `window` horizontally by `dx` per 16 ms frame, applying each change.
    fn drag(
        reg: &mut SessionRegistry,
        desk: &mut SimDesktop,
        window: WindowId,
        frames: usize,
        dx: i32,
    ) {
        for _ in 0..frames {
            desk.advance(Duration::from_millis(16));
            let cur = desk.bounds(window).unwrap();
            let cursor = desk.cursor_position();
            desk.set_cursor(PixelPoint::new(cursor.x + dx, cursor.y));
            let mut change = PositionChange::moved(cur.left + dx, cur.top);
            reg.on_position_changing(&*desk, window, &mut change);
            desk.set_bounds(
                window,
                PixelRect::from_xywh(change.x, change.y, cur.width(), cur.height()),
            );
            reg.on_position_changed(&*desk, window, &AppliedPosition::moved(change.x, change.y));
        }
    }

    #[test]
    fn move_snaps_through_position_changing() {
        let (desk, me) = desk();
        let mut reg: SessionRegistry = SessionRegistry::new(Settings::default());
        reg.on_session_enter(&desk, me);
        assert!(reg.is_dragging(me));

        let mut change = PositionChange::moved(105, 50);
        reg.on_position_changing(&desk, me, &mut change);
        assert_eq!((change.x, change.y), (100, 50));
    }

    #[test]
    fn no_op_changes_are_ignored() {
        let (desk, me) = desk();
        let mut reg: SessionRegistry = SessionRegistry::new(Settings::default());
        reg.on_session_enter(&desk, me);

        let mut change = PositionChange::moved(105, 50);
        change.flags |= PositionFlags::NO_MOVE;
        reg.on_position_changing(&desk, me, &mut change);
        assert_eq!((change.x, change.y), (105, 50));

        let mut change = PositionChange::moved(300, 50);
        reg.on_position_changing(&desk, me, &mut change);
        assert_eq!((change.x, change.y), (300, 50));
    }

    #[test]
    fn snap_toggle_off_leaves_moves_alone() {
        let (desk, me) = desk();
        let settings = Settings {
            snap_enabled: false,
            ..Settings::default()
        };
        let mut reg: SessionRegistry = SessionRegistry::new(settings);
        reg.on_session_enter(&desk, me);
        let mut change = PositionChange::moved(105, 50);
        reg.on_position_changing(&desk, me, &mut change);
        assert_eq!(change.x, 105);
    }

    #[test]
    fn inferred_resize_snaps_right_edge() {
        let mut desk = SimDesktop::new();
        desk.add_monitor(PixelRect::new(0, 0, 1920, 1080), PixelRect::new(0, 0, 1920, 1040));
        desk.add_window(PixelRect::new(200, 250, 400, 450));
        let me = desk.add_window(PixelRect::new(0, 300, 50, 400));
        let mut reg: SessionRegistry = SessionRegistry::new(Settings::default());
        reg.on_session_enter(&desk, me);

        let mut change = PositionChange {
            cx: 190,
            cy: 100,
            flags: PositionFlags::NO_MOVE,
            ..PositionChange::default()
        };
        reg.on_position_changing(&desk, me, &mut change);
        assert_eq!((change.cx, change.cy), (200, 100));
    }

    #[test]
    fn live_resize_uses_reported_edge() {
        let mut desk = SimDesktop::new();
        desk.add_monitor(PixelRect::new(0, 0, 1920, 1080), PixelRect::new(0, 0, 1920, 1040));
        desk.add_window(PixelRect::new(0, 200, 300, 500));
        let me = desk.add_window(PixelRect::new(320, 250, 700, 450));
        let mut reg: SessionRegistry = SessionRegistry::new(Settings::default());
        reg.on_session_enter(&desk, me);

        let mut rect = PixelRect::new(310, 250, 700, 450);
        reg.on_live_resize(&desk, me, LiveEdge::Left, &mut rect);
        assert_eq!(rect, PixelRect::new(300, 250, 700, 450));

        let mut rect = PixelRect::new(310, 250, 700, 450);
        reg.on_live_resize(&desk, me, LiveEdge::Right, &mut rect);
        assert_eq!(rect, PixelRect::new(310, 250, 700, 450), "left edge not dragged");
    }

    #[test]
    fn release_with_velocity_starts_slide() {
        let (mut desk, me) = desk();
        desk.set_cursor(PixelPoint::new(350, 60));
        let mut reg: SessionRegistry = SessionRegistry::new(Settings::default());
        reg.on_session_enter(&desk, me);
        drag(&mut reg, &mut desk, me, 4, 20);
        assert_eq!(desk.window_position(me), Some(PixelPoint::new(380, 50)));

        assert_eq!(reg.on_session_exit(&desk, me), SessionEnd::Keep);
        assert!(!reg.is_dragging(me));
        assert_eq!(reg.sliding_windows().collect::<Vec<_>>(), vec![me]);

        let mut ticks = 0;
        let end = loop {
            ticks += 1;
            if let SlideTick::Finished(end) = reg.on_slide_tick(&mut desk, me) {
                break end;
            }
        };
        assert!(ticks > 1);
        assert_eq!(end, SlideEnd::Idle);
        assert!(!reg.is_sliding(me));
        assert!(desk.window_position(me).unwrap().x > 380, "kept moving right");
    }

    #[test]
    fn pause_before_release_means_no_slide() {
        let (mut desk, me) = desk();
        let mut reg: SessionRegistry = SessionRegistry::new(Settings::default());
        reg.on_session_enter(&desk, me);
        drag(&mut reg, &mut desk, me, 4, 20);
        desk.advance(Duration::from_millis(150));
        assert_eq!(reg.on_session_exit(&desk, me), SessionEnd::Release);
        assert!(!reg.is_sliding(me));
    }

    #[test]
    fn slides_disabled_means_no_tracking() {
        let (mut desk, me) = desk();
        let settings = Settings {
            slide_enabled: false,
            ..Settings::default()
        };
        let mut reg: SessionRegistry = SessionRegistry::new(settings);
        reg.on_session_enter(&desk, me);
        drag(&mut reg, &mut desk, me, 4, 20);
        assert_eq!(reg.on_session_exit(&desk, me), SessionEnd::Release);
    }

    #[test]
    fn resize_during_gesture_resets_velocity() {
        let (mut desk, me) = desk();
        let mut reg: SessionRegistry = SessionRegistry::new(Settings::default());
        reg.on_session_enter(&desk, me);
        drag(&mut reg, &mut desk, me, 4, 20);
        reg.on_position_changed(
            &desk,
            me,
            &AppliedPosition {
                x: 380,
                y: 50,
                cx: 150,
                cy: 100,
                flags: PositionFlags::empty(),
            },
        );
        assert_eq!(reg.on_session_exit(&desk, me), SessionEnd::Release);
    }

    #[test]
    fn commands_and_state_changes_stop_slides() {
        let (mut desk, me) = desk();
        desk.set_cursor(PixelPoint::new(350, 60));
        let mut reg: SessionRegistry = SessionRegistry::new(Settings::default());

        reg.on_session_enter(&desk, me);
        drag(&mut reg, &mut desk, me, 4, 20);
        reg.on_session_exit(&desk, me);
        assert_eq!(reg.on_lifecycle_command(me, LifecycleCommand::Other), SessionEnd::Keep);
        assert_eq!(
            reg.on_lifecycle_command(me, LifecycleCommand::Minimize),
            SessionEnd::Release
        );
        assert!(!reg.is_sliding(me));

        reg.on_session_enter(&desk, me);
        drag(&mut reg, &mut desk, me, 4, 20);
        reg.on_session_exit(&desk, me);
        assert!(reg.is_sliding(me));
        desk.set_state(
            me,
            WindowState {
                maximized: true,
                ..WindowState::default()
            },
        );
        let applied = AppliedPosition {
            flags: PositionFlags::STATE_CHANGED,
            ..AppliedPosition::default()
        };
        assert_eq!(reg.on_position_changed(&desk, me, &applied), SessionEnd::Release);
        assert!(!reg.is_sliding(me));
    }

    #[test]
    fn enter_stops_running_slide() {
        let (mut desk, me) = desk();
        let mut reg: SessionRegistry = SessionRegistry::new(Settings::default());
        reg.on_session_enter(&desk, me);
        drag(&mut reg, &mut desk, me, 4, 20);
        reg.on_session_exit(&desk, me);
        assert!(reg.is_sliding(me));
        reg.on_session_enter(&desk, me);
        assert!(!reg.is_sliding(me));
        assert!(reg.is_dragging(me));
    }

    #[test]
    fn destroy_and_cancel_all_drop_state() {
        let (mut desk, me) = desk();
        let other = desk.add_window(PixelRect::new(900, 900, 1000, 1000));
        let mut reg: SessionRegistry = SessionRegistry::new(Settings::default());
        reg.on_session_enter(&desk, me);
        reg.on_session_enter(&desk, other);
        reg.on_window_destroyed(me);
        assert!(!reg.is_dragging(me));
        assert_eq!(reg.cancel_all(), vec![other]);
        assert!(!reg.is_dragging(other));
    }

    #[test]
    fn cancellation_stops_in_flight_snapping() {
        let (desk, me) = desk();
        let token = CancellationToken::new();
        let mut reg: SessionRegistry =
            SessionRegistry::with_cancellation(Settings::default(), token.clone());
        reg.on_session_enter(&desk, me);

        let mut change = PositionChange::reshaped(PixelRect::new(110, 50, 400, 150));
        reg.on_position_changing(&desk, me, &mut change);
        assert_eq!((change.x, change.cx), (100, 300), "left edge snapped before cancel");

        token.cancel();
        let mut change = PositionChange::reshaped(PixelRect::new(110, 50, 400, 150));
        reg.on_position_changing(&desk, me, &mut change);
        assert_eq!((change.x, change.cx), (110, 290));

        let mut change = PositionChange::moved(105, 50);
        reg.on_position_changing(&desk, me, &mut change);
        assert_eq!(change.x, 105);

        let mut rect = PixelRect::new(110, 50, 400, 150);
        reg.on_live_resize(&desk, me, LiveEdge::Left, &mut rect);
        assert_eq!(rect.left, 110);
    }

    #[test]
    fn canceled_token_stops_ticks() {
        let (mut desk, me) = desk();
        let token = CancellationToken::new();
        let mut reg: SessionRegistry =
            SessionRegistry::with_cancellation(Settings::default(), token.clone());
        reg.on_session_enter(&desk, me);
        drag(&mut reg, &mut desk, me, 4, 20);
        reg.on_session_exit(&desk, me);
        assert!(reg.is_sliding(me));
        token.cancel();
        assert_eq!(
            reg.on_slide_tick(&mut desk, me),
            SlideTick::Finished(SlideEnd::Canceled)
        );
        assert!(!reg.is_sliding(me));
    }
}
