// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Move and resize adjusters over a per-session [`TargetIndexGeneric`].

use tracing::trace;
use understory_magnet::{Backend, Edge, Insets, OrderedSet, PixelRect, TargetIndexGeneric, mul_div};

use crate::host::{BASE_DPI, Host, border_insets, frame_bounds, is_rect_in_work_area};
use crate::settings::Settings;
use crate::types::{Placement, ResizeEdges, WindowId};

/// Move-snap passes allowed before an unsettled result is dropped.
pub const SETTLE_PASSES: usize = 4;

/// Inputs that invalidate the cached border insets and magnet distance.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct MetricsKey {
    dpi: Option<u32>,
    maximized: bool,
}

/// Snap targets for one drag, resize or slide, plus the metrics used to query them.
///
/// The target snapshot is taken once when the magnet is built. Border insets and the
/// DPI-scaled magnet distance are recomputed only when the window's DPI or maximized
/// state differs from the last call.
#[derive(Debug)]
pub struct WindowMagnet<B: Backend = OrderedSet> {
    index: TargetIndexGeneric<B>,
    metrics: Option<MetricsKey>,
    border: Insets,
    magnet_px: i32,
}

impl<B: Backend> WindowMagnet<B> {
    /// Snapshot every candidate neighbor and work area for `window`.
    pub fn build<H: Host + ?Sized>(host: &H, window: WindowId, settings: &Settings) -> Self {
        let frames: Vec<PixelRect> = host
            .visible_windows(window)
            .into_iter()
            .filter(|w| *w != window)
            .filter_map(|w| frame_bounds(host, w))
            .filter(|r| !r.is_empty())
            .collect();
        let index = TargetIndexGeneric::from_snapshot(&frames, &host.work_areas());
        trace!(?window, neighbors = frames.len(), targets = index.len(), "magnet snapshot");
        let mut magnet = Self::with_index(index);
        magnet.refresh_metrics(host, window, settings);
        magnet
    }

    /// Wrap a prebuilt index. Metrics are computed on first use.
    pub fn with_index(index: TargetIndexGeneric<B>) -> Self {
        Self {
            index,
            metrics: None,
            border: Insets::ZERO,
            magnet_px: 0,
        }
    }

    /// The target snapshot.
    pub fn index(&self) -> &TargetIndexGeneric<B> {
        &self.index
    }

    /// Border insets currently applied to the window's outer bounds.
    pub fn border(&self) -> Insets {
        self.border
    }

    /// Magnet distance in device pixels.
    pub fn magnet_distance(&self) -> i32 {
        self.magnet_px
    }

    /// Recompute border insets and magnet distance if DPI or maximized state moved.
    pub fn refresh_metrics<H: Host + ?Sized>(
        &mut self,
        host: &H,
        window: WindowId,
        settings: &Settings,
    ) {
        let key = MetricsKey {
            dpi: host.caps().window_dpi(window),
            maximized: host.is_maximized(window),
        };
        if self.metrics == Some(key) {
            return;
        }
        self.metrics = Some(key);
        if let Some(border) = border_insets(host, window) {
            self.border = border;
        }
        self.magnet_px = match key.dpi.and_then(|d| i32::try_from(d).ok()) {
            Some(dpi) if dpi != 0 => mul_div(settings.snap_distance, dpi, BASE_DPI),
            _ => settings.snap_distance,
        };
    }

    /// Snap a moving window's visible frame to the nearest targets.
    ///
    /// Horizontally the frame's right edge is tested against the left-edge set and its
    /// left edge against the right-edge set; the strictly closer hit wins and the
    /// right-edge set wins ties. Vertical is symmetric.
    ///
    /// Snapping one axis shifts the span the other axis is matched over, so the snap is
    /// repeated until it settles. A result that does not settle within
    /// [`SETTLE_PASSES`] passes, or whose title strip lands outside every work area, is
    /// discarded. A settled result snaps to itself, so calling again is a no-op.
    /// Returns whether `placement` changed.
    pub fn magnet_move<H: Host + ?Sized>(
        &mut self,
        host: &H,
        window: WindowId,
        settings: &Settings,
        placement: &mut Placement,
    ) -> bool {
        if snapping_disabled(host, settings) {
            return false;
        }
        self.refresh_metrics(host, window, settings);

        let mut snapped = *placement;
        let mut settled = false;
        for _ in 0..SETTLE_PASSES {
            let next = self.snap_once(&snapped);
            if next == snapped {
                settled = true;
                break;
            }
            snapped = next;
        }
        if !settled {
            trace!(?window, from = ?placement.origin(), "move snap rejected: did not settle");
            return false;
        }
        if snapped == *placement {
            return false;
        }
        if !is_rect_in_work_area(host, &snapped.title_probe(self.border)) {
            trace!(?window, ?snapped, "move snap rejected: title bar off screen");
            return false;
        }
        trace!(?window, from = ?placement.origin(), to = ?snapped.origin(), "move snap");
        *placement = snapped;
        true
    }

    /// One move-snap pass with both axes matched against the unsnapped frame.
    fn snap_once(&self, placement: &Placement) -> Placement {
        let b = self.border;
        let source = placement.frame(b);
        let mut snapped = *placement;

        let toward_left = self.closest(Edge::Left, source.right, source.span(Edge::Right));
        let toward_right = self.closest(Edge::Right, source.left, source.span(Edge::Left));
        match (toward_left, toward_right) {
            (Some(l), Some(r)) if l.abs_diff(source.right) < r.abs_diff(source.left) => {
                snapped.x = l - placement.cx + b.right;
            }
            (_, Some(r)) => snapped.x = r - b.left,
            (Some(l), None) => snapped.x = l - placement.cx + b.right,
            (None, None) => {}
        }

        let toward_top = self.closest(Edge::Top, source.bottom, source.span(Edge::Bottom));
        let toward_bottom = self.closest(Edge::Bottom, source.top, source.span(Edge::Top));
        match (toward_top, toward_bottom) {
            (Some(t), Some(bt)) if t.abs_diff(source.bottom) < bt.abs_diff(source.top) => {
                snapped.y = t - placement.cy + b.bottom;
            }
            (_, Some(bt)) => snapped.y = bt - b.top,
            (Some(t), None) => snapped.y = t - placement.cy + b.bottom,
            (None, None) => {}
        }
        snapped
    }

    /// Snap the dragged edges of a resizing window.
    ///
    /// Each active edge is tested against the opposite set. A hit is applied only if
    /// the resulting dimension stays at or above the host's minimum track size. The
    /// whole adjustment is reverted if the title strip leaves every work area.
    /// Returns whether `placement` changed.
    pub fn magnet_resize<H: Host + ?Sized>(
        &mut self,
        host: &H,
        window: WindowId,
        settings: &Settings,
        placement: &mut Placement,
        edges: ResizeEdges,
    ) -> bool {
        if snapping_disabled(host, settings) {
            return false;
        }
        self.refresh_metrics(host, window, settings);

        let b = self.border;
        let source = placement.frame(b);
        let (min_w, min_h) = host.minimum_track_size();
        let mut next = *placement;

        if edges.contains(ResizeEdges::LEFT)
            && let Some(target) = self.closest(Edge::Right, source.left, source.span(Edge::Left))
        {
            let desired = target - b.left;
            let delta = next.x - desired;
            if next.cx + delta >= min_w {
                next.x = desired;
                next.cx += delta;
            }
        }
        if edges.contains(ResizeEdges::RIGHT)
            && let Some(target) = self.closest(Edge::Left, source.right, source.span(Edge::Right))
        {
            let width = target + b.right - next.x;
            if width >= min_w {
                next.cx = width;
            }
        }
        if edges.contains(ResizeEdges::TOP)
            && let Some(target) = self.closest(Edge::Bottom, source.top, source.span(Edge::Top))
        {
            let desired = target - b.top;
            let delta = next.y - desired;
            if next.cy + delta >= min_h {
                next.y = desired;
                next.cy += delta;
            }
        }
        if edges.contains(ResizeEdges::BOTTOM)
            && let Some(target) = self.closest(Edge::Top, source.bottom, source.span(Edge::Bottom))
        {
            let height = target + b.bottom - next.y;
            if height >= min_h {
                next.cy = height;
            }
        }

        if next == *placement {
            return false;
        }
        if !is_rect_in_work_area(host, &next.title_probe(b)) {
            trace!(?window, ?next, "resize snap rejected: title bar off screen");
            return false;
        }
        trace!(?window, from = ?placement, to = ?next, ?edges, "resize snap");
        *placement = next;
        true
    }

    fn closest(&self, set: Edge, source: i32, (start, end): (i32, i32)) -> Option<i32> {
        self.index.closest(set, source, start, end, self.magnet_px)
    }
}

/// Whether the configured disable combination is fully held.
///
/// With no keys configured the feature is off and this is always `false`.
pub fn snapping_disabled<H: Host + ?Sized>(host: &H, settings: &Settings) -> bool {
    let keys = settings.disable_modifiers();
    !keys.is_empty() && keys.iter().all(|k| host.is_key_held(k))
}
