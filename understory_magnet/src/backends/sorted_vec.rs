// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sorted vector backend. Small and simple; good for tiny sets.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt::Debug;

use crate::backend::Backend;
use crate::target::SnapTarget;

/// Sorted, deduplicated vector of targets.
#[derive(Clone, Default)]
pub struct SortedVec {
    targets: Vec<SnapTarget>,
}

impl Debug for SortedVec {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SortedVec")
            .field("len", &self.targets.len())
            .field("capacity", &self.targets.capacity())
            .finish_non_exhaustive()
    }
}

impl Backend for SortedVec {
    fn insert(&mut self, target: SnapTarget) -> bool {
        match self.targets.binary_search(&target) {
            Ok(_) => false,
            Err(pos) => {
                self.targets.insert(pos, target);
                true
            }
        }
    }
    fn remove(&mut self, target: &SnapTarget) -> bool {
        match self.targets.binary_search(target) {
            Ok(pos) => {
                self.targets.remove(pos);
                true
            }
            Err(_) => false,
        }
    }
    fn clear(&mut self) {
        self.targets.clear();
    }
    fn len(&self) -> usize {
        self.targets.len()
    }
    fn scan_from<'a>(&'a self, from: SnapTarget) -> Box<dyn Iterator<Item = SnapTarget> + 'a> {
        let first = self.targets.partition_point(|t| *t < from);
        Box::new(self.targets[first..].iter().copied())
    }
}
