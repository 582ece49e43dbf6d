// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_session --heading-base-level=0

//! Understory Session: drive snapping and sliding from host window notifications.
//!
//! Hosts forward the notifications of their windowing system to a [`SessionRegistry`],
//! which runs the per-window state machine:
//!
//! - entering a size/move loop snapshots the desktop into a gesture;
//! - position-changing notifications are smoothed and snapped in place;
//! - position-changed notifications feed the release-velocity tracker;
//! - exiting the loop with enough velocity starts a slide that the host ticks on a
//!   timer until it reports [`SlideTick::Finished`](understory_glide::SlideTick).
//!
//! Resize notifications that arrive without edge information have their edges
//! guessed by [`infer_resize_edges`]. Live resizes that do carry an edge decode it with
//! [`LiveEdge`].
//!
//! [`Plumbing`] is the process-wide bookkeeping a host keeps alongside the registry:
//! which windows it instrumented, which hooks it installed, and how many callbacks
//! are in flight, so teardown can release everything and wait for callbacks to drain.
//!
//! # Example
//!
//! ```rust
//! use understory_glide::{Settings, SimDesktop};
//! use understory_magnet::PixelRect;
//! use understory_session::{PositionChange, SessionRegistry};
//!
//! let mut desk = SimDesktop::new();
//! desk.add_monitor(PixelRect::new(0, 0, 1920, 1080), PixelRect::new(0, 0, 1920, 1040));
//! desk.add_window(PixelRect::new(0, 0, 100, 100));
//! let me = desk.add_window(PixelRect::new(300, 50, 400, 150));
//!
//! let mut sessions: SessionRegistry = SessionRegistry::new(Settings::default());
//! sessions.on_session_enter(&desk, me);
//! let mut change = PositionChange::moved(110, 50);
//! sessions.on_position_changing(&desk, me, &mut change);
//! assert_eq!(change.x, 100);
//! ```

pub mod edges;
pub mod lifetime;
pub mod notify;
pub mod registry;
pub mod shared;

pub use edges::{LiveEdge, infer_resize_edges, live_edges};
pub use lifetime::{ActivityCounter, ActivityGuard, CancellationToken, Plumbing, Teardown};
pub use notify::{AppliedPosition, LifecycleCommand, PositionChange, PositionFlags, SessionEnd};
pub use registry::SessionRegistry;
pub use shared::SharedSet;
