// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Release velocity from the last moments of a drag.

use core::time::Duration;

use kurbo::Vec2;
use tracing::trace;
use understory_magnet::PixelPoint;

use crate::types::WindowState;

/// Samples older than this are stale.
pub const HISTORY_WINDOW: Duration = Duration::from_millis(100);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Sample {
    at: Duration,
    position: PixelPoint,
}

/// Where and how fast a window was moving when the user let go.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Release {
    /// Last sampled position.
    pub position: PixelPoint,
    /// Velocity in pixels per second.
    pub velocity: Vec2,
}

/// Three-slot position history for one window.
///
/// Slot 0 always holds the newest sample. Slot 1 is the baseline and is only shifted
/// into slot 2 once it is older than [`HISTORY_WINDOW`], so the estimate spans a
/// sliding window of roughly one to two history windows rather than a single frame.
#[derive(Clone, Debug, Default)]
pub struct VelocityTracker {
    samples: [Option<Sample>; 3],
    last_state: Option<WindowState>,
}

impl VelocityTracker {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard all history.
    pub fn reset(&mut self) {
        self.samples = [None; 3];
        self.last_state = None;
    }

    /// Number of samples held.
    pub fn len(&self) -> usize {
        self.samples.iter().flatten().count()
    }

    /// True if no samples are held.
    pub fn is_empty(&self) -> bool {
        self.samples[0].is_none()
    }

    /// Record a position applied at `now`.
    ///
    /// History is dropped first if the newest sample is stale or the window's
    /// classification changed since the previous call.
    pub fn update(&mut self, now: Duration, state: WindowState, position: PixelPoint) {
        if let Some(newest) = self.samples[0]
            && now.saturating_sub(newest.at) >= HISTORY_WINDOW
        {
            self.reset();
        }
        if self.last_state.is_some_and(|s| s != state) {
            self.reset();
        }
        self.last_state = Some(state);

        match (self.samples[0], self.samples[1]) {
            (None, _) => {}
            (Some(newest), None) => self.samples[1] = Some(newest),
            (Some(newest), Some(baseline)) => {
                if now.saturating_sub(baseline.at) >= HISTORY_WINDOW {
                    self.samples[2] = Some(baseline);
                    self.samples[1] = Some(newest);
                }
            }
        }
        self.samples[0] = Some(Sample { at: now, position });
        trace!(?position, samples = self.len(), "velocity sample");
    }

    /// Estimate the release velocity.
    ///
    /// Needs two samples, a fresh newest sample, and a positive time span between the
    /// newest sample and the oldest one held.
    pub fn complete(&self, now: Duration) -> Option<Release> {
        let newest = self.samples[0]?;
        let baseline = self.samples[1]?;
        if now.saturating_sub(newest.at) >= HISTORY_WINDOW {
            return None;
        }
        let prev = self.samples[2].unwrap_or(baseline);
        let dt = newest.at.checked_sub(prev.at)?;
        if dt.is_zero() {
            return None;
        }
        let secs = dt.as_secs_f64();
        let velocity = Vec2::new(
            f64::from(newest.position.x - prev.position.x) / secs,
            f64::from(newest.position.y - prev.position.y) / secs,
        );
        Some(Release {
            position: newest.position,
            velocity,
        })
    }
}
