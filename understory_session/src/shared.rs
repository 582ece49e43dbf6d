// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A mutex-guarded set for bookkeeping shared across UI threads.

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Thread-safe set of handles.
///
/// Contents are only ever handed out as copies, so callers never iterate while another
/// thread mutates.
pub struct SharedSet<T> {
    inner: Mutex<HashSet<T>>,
}

impl<T> Default for SharedSet<T> {
    fn default() -> Self {
        Self {
            inner: Mutex::new(HashSet::new()),
        }
    }
}

impl<T: Eq + Hash + Clone> SharedSet<T> {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value. Returns `false` if it was already present.
    pub fn insert(&self, value: T) -> bool {
        self.lock().insert(value)
    }

    /// Insert a value if `allow` returns `true`; `allow` runs under the lock.
    pub fn insert_if(&self, value: T, allow: impl FnOnce() -> bool) -> bool {
        let mut set = self.lock();
        allow() && set.insert(value)
    }

    /// Remove a value. Returns `false` if it was absent.
    pub fn remove(&self, value: &T) -> bool {
        self.lock().remove(value)
    }

    /// Whether the value is present.
    pub fn contains(&self, value: &T) -> bool {
        self.lock().contains(value)
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// True if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Copy of the current contents.
    pub fn snapshot(&self) -> Vec<T> {
        self.lock().iter().cloned().collect()
    }

    /// Take all values, leaving the set empty.
    pub fn drain(&self) -> Vec<T> {
        self.lock().drain().collect()
    }

    // Bookkeeping stays usable after a panic elsewhere.
    fn lock(&self) -> MutexGuard<'_, HashSet<T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: fmt::Debug> fmt::Debug for SharedSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let len = self
            .inner
            .lock()
            .map_or_else(|e| e.into_inner().len(), |set| set.len());
        f.debug_struct("SharedSet")
            .field("len", &len)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn insert_remove_snapshot() {
        let set = SharedSet::new();
        assert!(set.insert(3_u64));
        assert!(!set.insert(3));
        assert!(set.insert(5));
        let mut snap = set.snapshot();
        snap.sort_unstable();
        assert_eq!(snap, vec![3, 5]);
        assert!(set.remove(&3));
        assert!(!set.contains(&3));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn drain_empties() {
        let set = SharedSet::new();
        set.insert(1_u32);
        set.insert(2);
        assert_eq!(set.drain().len(), 2);
        assert!(set.is_empty());
    }

    #[test]
    fn insert_if_respects_gate() {
        let set = SharedSet::new();
        assert!(!set.insert_if(1_u8, || false));
        assert!(set.is_empty());
        assert!(set.insert_if(1, || true));
    }

    #[test]
    fn concurrent_inserts_are_all_kept() {
        let set = Arc::new(SharedSet::new());
        let handles: Vec<_> = (0..4_u32)
            .map(|t| {
                let set = Arc::clone(&set);
                thread::spawn(move || {
                    for i in 0..100 {
                        set.insert(t * 1000 + i);
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(set.len(), 400);
    }
}
