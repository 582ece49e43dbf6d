// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_magnet --heading-base-level=0

//! Understory Magnet: edge-indexed snap targets for window magnetism.
//!
//! A snapping session needs to answer one question many times per second: "is there an
//! exposed edge within N pixels of this edge, overlapping it on the other axis?"
//! This crate answers it over a snapshot of the desktop.
//!
//! - [`SnapTarget`] is an edge coordinate plus the perpendicular span over which it is exposed.
//! - [`EdgeSet`] holds one direction's targets in `(coord, start, end)` order.
//!   [`EdgeSet::punch`] cuts the footprint of an occluding rectangle out of existing
//!   targets (splitting them, not deleting them), and [`EdgeSet::closest`] seeks to the
//!   start of the distance window and scans outward with an early exit.
//! - [`TargetIndex`] owns four edge-sets and builds them from visible window frames
//!   (back to front, so the frontmost edge wins on shared spans) and monitor work areas.
//!
//! Storage is pluggable via [`Backend`]: a `BTreeSet` ([`OrderedSet`], the default) or a
//! sorted `Vec` ([`SortedVec`]).
//!
//! # Example
//!
//! ```rust
//! use understory_magnet::{Edge, PixelRect, TargetIndex};
//!
//! // One window at the origin, one monitor.
//! let idx = TargetIndex::from_snapshot(
//!     &[PixelRect::new(0, 0, 100, 100)],
//!     &[PixelRect::new(0, 0, 1920, 1040)],
//! );
//!
//! // A dragged window's left edge at x=105 finds the neighbor's right edge.
//! assert_eq!(idx.closest(Edge::Right, 105, 20, 80, 25), Some(100));
//! // Nothing within 25 px of x=500.
//! assert_eq!(idx.closest(Edge::Right, 500, 20, 80, 25), None);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod backend;
pub mod backends;
pub mod edge_set;
pub mod index;
pub mod target;
pub mod types;

pub use backend::Backend;
pub use backends::ordered::OrderedSet;
pub use backends::sorted_vec::SortedVec;
pub use edge_set::EdgeSet;
pub use index::{TargetIndex, TargetIndexGeneric};
pub use target::SnapTarget;
pub use types::{Edge, Insets, PixelPoint, PixelRect, mul_div};
