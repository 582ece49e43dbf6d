// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend trait for ordered snap-target storage.

use alloc::boxed::Box;
use core::fmt::Debug;

use crate::target::SnapTarget;

/// Ordered set of [`SnapTarget`]s used by [`EdgeSet`](crate::EdgeSet).
///
/// Backends only need set semantics and an ascending scan from a lower bound;
/// interval punching and nearest-target search are written once on top of this.
pub trait Backend: Default + Debug {
    /// Insert a target. Returns false if an identical target was already present.
    fn insert(&mut self, target: SnapTarget) -> bool;

    /// Remove a target. Returns false if it was not present.
    fn remove(&mut self, target: &SnapTarget) -> bool;

    /// Remove every target.
    fn clear(&mut self);

    /// Number of stored targets.
    fn len(&self) -> usize;

    /// True if no targets are stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Targets `>= from`, in ascending order.
    fn scan_from<'a>(&'a self, from: SnapTarget) -> Box<dyn Iterator<Item = SnapTarget> + 'a>;
}
