// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interfaces the engine needs from the windowing host.
//!
//! The engine never talks to a window system directly. Everything it reads (window
//! rectangles, DPI, work areas, key state, the clock) and the one thing it writes (a
//! window's position during a slide) goes through [`Host`].
//!
//! Optional platform features (per-window DPI, per-monitor DPI awareness, the
//! "arranged" query) live behind [`PlatformCaps`], whose methods all default to "not
//! available". Hosts pick an implementation once at startup; [`NoCaps`] is the
//! implementation for platforms where probing found nothing.

use core::time::Duration;

use understory_magnet::{Insets, PixelPoint, PixelRect, mul_div};

use crate::types::{ModifierKeys, WindowId, WindowState};

/// DPI at which one logical pixel equals one device pixel.
pub const BASE_DPI: i32 = 96;

/// A monitor's full bounds and effective DPI.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MonitorInfo {
    /// Monitor bounds in the caller's coordinate space.
    pub bounds: PixelRect,
    /// Effective DPI of the monitor.
    pub dpi: u32,
}

/// Optional platform capabilities.
pub trait PlatformCaps {
    /// DPI of the monitor the window is on, if the platform reports it.
    fn window_dpi(&self, _window: WindowId) -> Option<u32> {
        None
    }

    /// Whether the window is in an OS-arranged layout. `false` when unsupported.
    fn is_arranged(&self, _window: WindowId) -> bool {
        false
    }

    /// Whether the calling context sees per-monitor DPI coordinates.
    ///
    /// When it does not, frame bounds reported in physical pixels are rescaled to the
    /// system DPI before use.
    fn per_monitor_aware(&self) -> bool {
        true
    }

    /// System DPI, if available.
    fn system_dpi(&self) -> Option<u32> {
        None
    }

    /// Monitor nearest to the window, in physical coordinates.
    fn monitor_of_window(&self, _window: WindowId) -> Option<MonitorInfo> {
        None
    }
}

/// Capabilities for a platform without any of the optional features.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoCaps;

impl PlatformCaps for NoCaps {}

/// The windowing host.
pub trait Host {
    /// Optional platform capabilities.
    fn caps(&self) -> &dyn PlatformCaps;

    /// Outer bounds of the window, or `None` if it no longer exists.
    fn bounds(&self, window: WindowId) -> Option<PixelRect>;

    /// Visible frame bounds (excluding shadows and invisible borders), if the host
    /// can tell them apart from the outer bounds.
    fn extended_frame_bounds(&self, _window: WindowId) -> Option<PixelRect> {
        None
    }

    /// Whether the window is minimized.
    fn is_minimized(&self, window: WindowId) -> bool;

    /// Whether the window is maximized.
    fn is_maximized(&self, window: WindowId) -> bool;

    /// Smallest width and height a user can resize a window to.
    fn minimum_track_size(&self) -> (i32, i32);

    /// Candidate snap neighbors, topmost first.
    ///
    /// Hosts leave out `exclude`, invisible, cloaked and minimized windows, and tool
    /// or non-activating windows.
    fn visible_windows(&self, exclude: WindowId) -> Vec<WindowId>;

    /// Work areas of all monitors.
    fn work_areas(&self) -> Vec<PixelRect>;

    /// Whether a single modifier key is currently held.
    fn is_key_held(&self, key: ModifierKeys) -> bool;

    /// Cursor position associated with the notification being processed.
    fn cursor_position(&self) -> PixelPoint;

    /// Monotonic time.
    fn now(&self) -> Duration;

    /// Move a window without resizing, activating, or reordering it.
    fn set_window_position(&mut self, window: WindowId, position: PixelPoint);
}

/// Current classification of a window.
pub fn window_state<H: Host + ?Sized>(host: &H, window: WindowId) -> WindowState {
    WindowState {
        minimized: host.is_minimized(window),
        maximized: host.is_maximized(window),
        arranged: host.caps().is_arranged(window),
    }
}

/// Visible frame of a window in the caller's coordinate space.
///
/// Falls back to the outer bounds when the host has no separate frame rectangle. When
/// the caller is not per-monitor DPI aware and both monitor and system DPI are known,
/// the frame is rescaled relative to its monitor's origin.
pub fn frame_bounds<H: Host + ?Sized>(host: &H, window: WindowId) -> Option<PixelRect> {
    let frame = host
        .extended_frame_bounds(window)
        .or_else(|| host.bounds(window))?;
    let caps = host.caps();
    if caps.per_monitor_aware() {
        return Some(frame);
    }
    let (Some(monitor), Some(system_dpi)) = (caps.monitor_of_window(window), caps.system_dpi())
    else {
        return Some(frame);
    };
    let (Ok(from), Ok(to)) = (i32::try_from(monitor.dpi), i32::try_from(system_dpi)) else {
        return Some(frame);
    };
    let origin = monitor.bounds.origin();
    let local = frame.translate(-origin.x, -origin.y);
    let scaled = PixelRect::new(
        mul_div(local.left, to, from),
        mul_div(local.top, to, from),
        mul_div(local.right, to, from),
        mul_div(local.bottom, to, from),
    );
    Some(scaled.translate(origin.x, origin.y))
}

/// Distance from the window's outer bounds to its visible frame on each side.
pub fn border_insets<H: Host + ?Sized>(host: &H, window: WindowId) -> Option<Insets> {
    let outer = host.bounds(window)?;
    let frame = frame_bounds(host, window)?;
    Some(Insets::between(&outer, &frame))
}

/// Whether `rect` overlaps at least one monitor's work area.
pub fn is_rect_in_work_area<H: Host + ?Sized>(host: &H, rect: &PixelRect) -> bool {
    host.work_areas().iter().any(|area| rect.intersects(area))
}

/// The work area containing `p`, else the one closest to it.
pub fn nearest_work_area(areas: &[PixelRect], p: PixelPoint) -> Option<PixelRect> {
    if let Some(area) = areas.iter().find(|a| a.contains_point(p)) {
        return Some(*area);
    }
    areas
        .iter()
        .min_by_key(|a| {
            let dx = i64::from((a.left - p.x).max(0).max(p.x - (a.right - 1)));
            let dy = i64::from((a.top - p.y).max(0).max(p.y - (a.bottom - 1)));
            dx * dx + dy * dy
        })
        .copied()
}
