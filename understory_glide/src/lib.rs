// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_glide --heading-base-level=0

//! Understory Glide: magnetic window moves and resizes, and inertial slides.
//!
//! This crate turns the edge index from [`understory_magnet`] into window behavior:
//!
//! - [`WindowMagnet`] snapshots a desktop through a [`Host`], caches DPI-dependent
//!   metrics, and adjusts proposed moves ([`WindowMagnet::magnet_move`]) and resizes
//!   ([`WindowMagnet::magnet_resize`]) so visible frames line up with nearby edges.
//! - [`MoveGesture`] pairs a magnet with a [`MoveSmoother`] for one size/move loop.
//! - [`VelocityTracker`] keeps a short position history and yields a [`Release`].
//! - [`SlideSimulator`] coasts a released window with decay, monitor crossing, soft
//!   bounces and optional re-snapping.
//! - [`Settings`] holds the user configuration and loads it from JSON.
//! - [`SimDesktop`] is an in-memory [`Host`] for tests and demos.
//!
//! The host owns message delivery and timers; everything here is synchronous and
//! driven by calls from the host's event handlers.
//!
//! # Example
//!
//! ```rust
//! use understory_glide::{Placement, Settings, SimDesktop, WindowMagnet};
//! use understory_magnet::PixelRect;
//!
//! let mut desk = SimDesktop::new();
//! desk.add_monitor(PixelRect::new(0, 0, 1920, 1080), PixelRect::new(0, 0, 1920, 1040));
//! desk.add_window(PixelRect::new(0, 0, 100, 100));
//! let me = desk.add_window(PixelRect::new(300, 50, 400, 150));
//!
//! let settings = Settings::default();
//! let mut magnet: WindowMagnet = WindowMagnet::build(&desk, me, &settings);
//! let mut p = Placement::new(105, 50, 100, 100);
//! magnet.magnet_move(&desk, me, &settings, &mut p);
//! assert_eq!(p.x, 100);
//! ```

pub mod gesture;
pub mod host;
pub mod magnet;
pub mod settings;
pub mod sim;
pub mod slide;
pub mod smoother;
pub mod types;
pub mod velocity;

pub use gesture::MoveGesture;
pub use host::{Host, MonitorInfo, NoCaps, PlatformCaps};
pub use magnet::{WindowMagnet, snapping_disabled};
pub use settings::{DisableKeys, Settings, SettingsError};
pub use sim::SimDesktop;
pub use slide::{SlideEnd, SlideSimulator, SlideTick};
pub use smoother::MoveSmoother;
pub use types::{ModifierKeys, Placement, ResizeEdges, WindowId, WindowState};
pub use velocity::{Release, VelocityTracker};
