// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `BTreeSet` backend.

use alloc::boxed::Box;
use alloc::collections::BTreeSet;

use crate::backend::Backend;
use crate::target::SnapTarget;

/// Ordered-set backend built on `BTreeSet`.
#[derive(Clone, Debug, Default)]
pub struct OrderedSet {
    targets: BTreeSet<SnapTarget>,
}

impl Backend for OrderedSet {
    fn insert(&mut self, target: SnapTarget) -> bool {
        self.targets.insert(target)
    }
    fn remove(&mut self, target: &SnapTarget) -> bool {
        self.targets.remove(target)
    }
    fn clear(&mut self) {
        self.targets.clear();
    }
    fn len(&self) -> usize {
        self.targets.len()
    }
    fn scan_from<'a>(&'a self, from: SnapTarget) -> Box<dyn Iterator<Item = SnapTarget> + 'a> {
        Box::new(self.targets.range(from..).copied())
    }
}
