// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! User-facing configuration.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::types::ModifierKeys;

/// Errors produced while loading or validating [`Settings`].
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// The settings document is not valid JSON or has fields of the wrong type.
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    /// Snap distance must be zero or positive.
    #[error("snap distance must not be negative, got {0}")]
    InvalidDistance(i32),
}

/// Which modifier keys must all be held to suspend snapping.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisableKeys {
    /// Control must be held.
    pub ctrl: bool,
    /// Alt must be held.
    pub alt: bool,
    /// Shift must be held.
    pub shift: bool,
}

impl Default for DisableKeys {
    fn default() -> Self {
        Self {
            ctrl: false,
            alt: true,
            shift: false,
        }
    }
}

/// Snapping and sliding settings.
///
/// Deserializes from kebab-case keys; any missing key takes its default.
///
/// ```rust
/// use understory_glide::Settings;
///
/// let s = Settings::from_json(r#"{ "snap-distance": 10, "slide-slowdown": 40 }"#).unwrap();
/// assert_eq!(s.snap_distance, 10);
/// assert_eq!(s.slowdown(), 40);
/// assert!(s.slide_enabled);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Settings {
    /// Snap while dragging or resizing.
    pub snap_enabled: bool,
    /// Magnet distance in pixels at 96 DPI.
    pub snap_distance: i32,
    /// Modifier combination that suspends snapping while held.
    pub disable_keys: DisableKeys,
    /// Keep the window moving after release.
    pub slide_enabled: bool,
    /// Snap while sliding.
    pub slide_with_snap: bool,
    /// Per-frame velocity loss in percent; clamped to `1..=99` when used.
    pub slide_slowdown: i32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            snap_enabled: true,
            snap_distance: 25,
            disable_keys: DisableKeys::default(),
            slide_enabled: true,
            slide_with_snap: true,
            slide_slowdown: 15,
        }
    }
}

impl Settings {
    /// Parse and validate a JSON settings document.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check values that cannot be repaired by clamping.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.snap_distance < 0 {
            return Err(SettingsError::InvalidDistance(self.snap_distance));
        }
        if !(1..=99).contains(&self.slide_slowdown) {
            warn!(
                slowdown = self.slide_slowdown,
                clamped = self.slowdown(),
                "slide slowdown out of range"
            );
        }
        Ok(())
    }

    /// Slowdown clamped to `1..=99`.
    pub fn slowdown(&self) -> i32 {
        self.slide_slowdown.clamp(1, 99)
    }

    /// Factor velocity is multiplied by on every slide frame.
    pub fn decay_factor(&self) -> f64 {
        f64::from(100 - self.slowdown()) / 100.0
    }

    /// The disable combination as a flag set; empty means the feature is off.
    pub fn disable_modifiers(&self) -> ModifierKeys {
        let mut keys = ModifierKeys::empty();
        keys.set(ModifierKeys::CTRL, self.disable_keys.ctrl);
        keys.set(ModifierKeys::ALT, self.disable_keys.alt);
        keys.set(ModifierKeys::SHIFT, self.disable_keys.shift);
        keys
    }
}
