// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-flight activity tracking, cancellation, and teardown of host instrumentation.
//!
//! The host instruments windows (to receive their notifications) and installs
//! per-thread hooks. Both are recorded in a [`Plumbing`] so teardown can release them
//! from any thread. Callbacks hold an [`ActivityGuard`] while they run, and teardown
//! waits for the count to drain before shared state goes away.

use std::fmt;
use std::hash::Hash;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

use tracing::{debug, warn};

use crate::shared::SharedSet;

/// Counts callbacks currently running.
#[derive(Clone, Debug, Default)]
pub struct ActivityCounter {
    count: Arc<AtomicUsize>,
}

impl ActivityCounter {
    /// Create a counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a callback as running until the guard drops.
    pub fn enter(&self) -> ActivityGuard {
        self.count.fetch_add(1, Ordering::SeqCst);
        ActivityGuard {
            count: Arc::clone(&self.count),
        }
    }

    /// Callbacks currently running.
    pub fn active(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Poll until no callback is running, sleeping `interval` between checks.
    ///
    /// Gives up after `max_polls` sleeps and returns `false`.
    pub fn wait_drained(&self, interval: Duration, max_polls: usize) -> bool {
        for _ in 0..max_polls {
            if self.active() == 0 {
                return true;
            }
            thread::sleep(interval);
        }
        self.active() == 0
    }
}

/// Keeps an [`ActivityCounter`] raised while alive.
pub struct ActivityGuard {
    count: Arc<AtomicUsize>,
}

impl Drop for ActivityGuard {
    fn drop(&mut self) {
        self.count.fetch_sub(1, Ordering::SeqCst);
    }
}

impl fmt::Debug for ActivityGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActivityGuard")
            .field("active", &self.count.load(Ordering::Relaxed))
            .finish()
    }
}

/// A flag that long-lived timers and callbacks check before doing work.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    canceled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// A token that is not canceled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel every clone of this token.
    pub fn cancel(&self) {
        self.canceled.store(true, Ordering::SeqCst);
    }

    /// Whether [`cancel`](Self::cancel) has been called on any clone.
    pub fn is_canceled(&self) -> bool {
        self.canceled.load(Ordering::SeqCst)
    }
}

/// Handles the host must release after [`Plumbing::begin_teardown`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Teardown<W, K> {
    /// Windows that were instrumented.
    pub windows: Vec<W>,
    /// Hooks that were installed.
    pub hooks: Vec<K>,
}

/// Process-wide bookkeeping of instrumented windows and installed hooks.
///
/// `W` is the host's window handle type and `K` its hook handle type.
pub struct Plumbing<W, K> {
    uninitializing: AtomicBool,
    windows: SharedSet<W>,
    hooks: SharedSet<K>,
    activity: ActivityCounter,
    cancel: CancellationToken,
}

impl<W, K> Default for Plumbing<W, K> {
    fn default() -> Self {
        Self {
            uninitializing: AtomicBool::new(false),
            windows: SharedSet::default(),
            hooks: SharedSet::default(),
            activity: ActivityCounter::default(),
            cancel: CancellationToken::default(),
        }
    }
}

impl<W: Eq + Hash + Clone, K: Eq + Hash + Clone> Plumbing<W, K> {
    /// Create empty bookkeeping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an instrumented window. Refused once teardown has begun.
    pub fn instrument(&self, window: W) -> bool {
        self.windows
            .insert_if(window, || !self.uninitializing.load(Ordering::SeqCst))
    }

    /// Forget an instrumented window.
    pub fn release(&self, window: &W) -> bool {
        self.windows.remove(window)
    }

    /// Whether a window is instrumented.
    pub fn is_instrumented(&self, window: &W) -> bool {
        self.windows.contains(window)
    }

    /// Record an installed hook. Refused once teardown has begun.
    pub fn register_hook(&self, hook: K) -> bool {
        self.hooks
            .insert_if(hook, || !self.uninitializing.load(Ordering::SeqCst))
    }

    /// Forget a hook, e.g. when its thread exits. Returns `false` if teardown already
    /// took it.
    pub fn unregister_hook(&self, hook: &K) -> bool {
        self.hooks.remove(hook)
    }

    /// Mark a callback as running.
    pub fn enter(&self) -> ActivityGuard {
        self.activity.enter()
    }

    /// Token canceled by teardown.
    pub fn cancellation(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Whether teardown has begun.
    pub fn is_uninitializing(&self) -> bool {
        self.uninitializing.load(Ordering::SeqCst)
    }

    /// Stop accepting instrumentation, cancel the token, and hand back everything the
    /// host still has to release.
    pub fn begin_teardown(&self) -> Teardown<W, K> {
        self.uninitializing.store(true, Ordering::SeqCst);
        self.cancel.cancel();
        let teardown = Teardown {
            windows: self.windows.drain(),
            hooks: self.hooks.drain(),
        };
        debug!(
            windows = teardown.windows.len(),
            hooks = teardown.hooks.len(),
            "teardown started"
        );
        teardown
    }

    /// Wait for running callbacks to finish; see [`ActivityCounter::wait_drained`].
    pub fn wait_drained(&self, interval: Duration, max_polls: usize) -> bool {
        let drained = self.activity.wait_drained(interval, max_polls);
        if !drained {
            warn!(active = self.activity.active(), "callbacks still running after teardown wait");
        }
        drained
    }
}

impl<W, K> fmt::Debug for Plumbing<W, K>
where
    W: fmt::Debug,
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Plumbing")
            .field("uninitializing", &self.uninitializing.load(Ordering::Relaxed))
            .field("windows", &self.windows)
            .field("hooks", &self.hooks)
            .field("activity", &self.activity)
            .field("cancel", &self.cancel)
            .finish()
    }
}
