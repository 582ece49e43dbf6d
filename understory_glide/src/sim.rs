// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An in-memory desktop implementing [`Host`].
//!
//! `SimDesktop` keeps windows in z-order with optional drop-shadow insets, monitors
//! with work areas and DPI, a virtual clock, a cursor and held modifier keys. It is
//! what the tests and demos drive sessions against.

use core::time::Duration;

use understory_magnet::{Insets, PixelPoint, PixelRect};

use crate::host::{Host, MonitorInfo, PlatformCaps};
use crate::types::{ModifierKeys, WindowId, WindowState};

#[derive(Clone, Debug)]
struct SimWindow {
    id: WindowId,
    bounds: PixelRect,
    shadow: Insets,
    state: WindowState,
    visible: bool,
}

#[derive(Copy, Clone, Debug)]
struct SimMonitor {
    bounds: PixelRect,
    work_area: PixelRect,
    dpi: u32,
}

/// In-memory windowing host.
#[derive(Clone, Debug)]
pub struct SimDesktop {
    /// Topmost first.
    windows: Vec<SimWindow>,
    monitors: Vec<SimMonitor>,
    held: ModifierKeys,
    cursor: PixelPoint,
    now: Duration,
    min_track: (i32, i32),
    per_monitor_aware: bool,
    system_dpi: Option<u32>,
    next_id: u64,
    position_writes: usize,
}

impl Default for SimDesktop {
    fn default() -> Self {
        Self::new()
    }
}

impl SimDesktop {
    /// An empty desktop with no monitors, a clock at one second, and a 136x39 minimum
    /// track size.
    pub fn new() -> Self {
        Self {
            windows: Vec::new(),
            monitors: Vec::new(),
            held: ModifierKeys::empty(),
            cursor: PixelPoint::default(),
            now: Duration::from_secs(1),
            min_track: (136, 39),
            per_monitor_aware: true,
            system_dpi: None,
            next_id: 1,
            position_writes: 0,
        }
    }

    /// Add a 96 DPI monitor and return its index.
    pub fn add_monitor(&mut self, bounds: PixelRect, work_area: PixelRect) -> usize {
        self.monitors.push(SimMonitor {
            bounds,
            work_area,
            dpi: 96,
        });
        self.monitors.len() - 1
    }

    /// Change a monitor's DPI.
    pub fn set_monitor_dpi(&mut self, monitor: usize, dpi: u32) {
        if let Some(m) = self.monitors.get_mut(monitor) {
            m.dpi = dpi;
        }
    }

    /// Switch the simulated caller between per-monitor and system DPI awareness.
    pub fn set_dpi_awareness(&mut self, per_monitor_aware: bool, system_dpi: Option<u32>) {
        self.per_monitor_aware = per_monitor_aware;
        self.system_dpi = system_dpi;
    }

    /// Open a visible window above all others.
    pub fn add_window(&mut self, bounds: PixelRect) -> WindowId {
        let id = WindowId(self.next_id);
        self.next_id += 1;
        self.windows.insert(
            0,
            SimWindow {
                id,
                bounds,
                shadow: Insets::ZERO,
                state: WindowState::default(),
                visible: true,
            },
        );
        id
    }

    /// Close a window.
    pub fn remove_window(&mut self, window: WindowId) {
        self.windows.retain(|w| w.id != window);
    }

    /// Set the invisible border between outer bounds and visible frame.
    pub fn set_shadow(&mut self, window: WindowId, shadow: Insets) {
        if let Some(w) = self.window_mut(window) {
            w.shadow = shadow;
        }
    }

    /// Move or resize a window as another program would.
    pub fn set_bounds(&mut self, window: WindowId, bounds: PixelRect) {
        if let Some(w) = self.window_mut(window) {
            w.bounds = bounds;
        }
    }

    /// Change a window's classification.
    pub fn set_state(&mut self, window: WindowId, state: WindowState) {
        if let Some(w) = self.window_mut(window) {
            w.state = state;
        }
    }

    /// Show or hide a window.
    pub fn set_visible(&mut self, window: WindowId, visible: bool) {
        if let Some(w) = self.window_mut(window) {
            w.visible = visible;
        }
    }

    /// Replace the set of held modifier keys.
    pub fn hold(&mut self, keys: ModifierKeys) {
        self.held = keys;
    }

    /// Move the cursor.
    pub fn set_cursor(&mut self, cursor: PixelPoint) {
        self.cursor = cursor;
    }

    /// Advance the clock.
    pub fn advance(&mut self, by: Duration) {
        self.now += by;
    }

    /// Override the minimum track size.
    pub fn set_min_track(&mut self, width: i32, height: i32) {
        self.min_track = (width, height);
    }

    /// Top-left of a window's outer bounds.
    pub fn window_position(&self, window: WindowId) -> Option<PixelPoint> {
        self.bounds(window).map(|b| b.origin())
    }

    /// Number of [`Host::set_window_position`] calls so far.
    pub fn position_writes(&self) -> usize {
        self.position_writes
    }

    fn window(&self, window: WindowId) -> Option<&SimWindow> {
        self.windows.iter().find(|w| w.id == window)
    }

    fn window_mut(&mut self, window: WindowId) -> Option<&mut SimWindow> {
        self.windows.iter_mut().find(|w| w.id == window)
    }

    fn monitor_for(&self, rect: PixelRect) -> Option<&SimMonitor> {
        let center = PixelPoint::new(
            rect.left + rect.width() / 2,
            rect.top + rect.height() / 2,
        );
        self.monitors
            .iter()
            .find(|m| m.bounds.contains_point(center))
            .or_else(|| self.monitors.first())
    }
}

impl PlatformCaps for SimDesktop {
    fn window_dpi(&self, window: WindowId) -> Option<u32> {
        self.monitor_of_window(window).map(|m| m.dpi)
    }

    fn is_arranged(&self, window: WindowId) -> bool {
        self.window(window).is_some_and(|w| w.state.arranged)
    }

    fn per_monitor_aware(&self) -> bool {
        self.per_monitor_aware
    }

    fn system_dpi(&self) -> Option<u32> {
        self.system_dpi
    }

    fn monitor_of_window(&self, window: WindowId) -> Option<MonitorInfo> {
        let w = self.window(window)?;
        self.monitor_for(w.bounds).map(|m| MonitorInfo {
            bounds: m.bounds,
            dpi: m.dpi,
        })
    }
}

impl Host for SimDesktop {
    fn caps(&self) -> &dyn PlatformCaps {
        self
    }

    fn bounds(&self, window: WindowId) -> Option<PixelRect> {
        self.window(window).map(|w| w.bounds)
    }

    fn extended_frame_bounds(&self, window: WindowId) -> Option<PixelRect> {
        self.window(window).map(|w| w.bounds.inset(w.shadow))
    }

    fn is_minimized(&self, window: WindowId) -> bool {
        self.window(window).is_some_and(|w| w.state.minimized)
    }

    fn is_maximized(&self, window: WindowId) -> bool {
        self.window(window).is_some_and(|w| w.state.maximized)
    }

    fn minimum_track_size(&self) -> (i32, i32) {
        self.min_track
    }

    fn visible_windows(&self, exclude: WindowId) -> Vec<WindowId> {
        self.windows
            .iter()
            .filter(|w| w.id != exclude && w.visible && !w.state.minimized)
            .map(|w| w.id)
            .collect()
    }

    fn work_areas(&self) -> Vec<PixelRect> {
        self.monitors.iter().map(|m| m.work_area).collect()
    }

    fn is_key_held(&self, key: ModifierKeys) -> bool {
        self.held.contains(key)
    }

    fn cursor_position(&self) -> PixelPoint {
        self.cursor
    }

    fn now(&self) -> Duration {
        self.now
    }

    fn set_window_position(&mut self, window: WindowId, position: PixelPoint) {
        self.position_writes += 1;
        if let Some(w) = self.window_mut(window) {
            let (width, height) = (w.bounds.width(), w.bounds.height());
            w.bounds = PixelRect::from_xywh(position.x, position.y, width, height);
        }
    }
}
