// SPDX-License-Identifier: MPL-2.0
//! Page scroll locking.
//!
//! Overlays that must freeze the page underneath hold a [`ScrollLock`]. The
//! page scrollable stops reacting to the wheel while at least one lock is
//! alive. Releasing is tied to `Drop`, so scrolling comes back however the
//! owner goes away.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Shared scroll state of the page. Cheap to clone; clones observe the same
/// lock count.
#[derive(Debug, Clone, Default)]
pub struct PageScroll {
    locks: Arc<AtomicUsize>,
}

impl PageScroll {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquires a lock that lasts until the returned guard is dropped.
    #[must_use = "the page unlocks as soon as the guard is dropped"]
    pub fn lock(&self) -> ScrollLock {
        let previous = self.locks.fetch_add(1, Ordering::AcqRel);
        if previous == 0 {
            tracing::trace!("page scroll locked");
        }
        ScrollLock {
            locks: Arc::clone(&self.locks),
        }
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locks.load(Ordering::Acquire) > 0
    }
}

/// Guard keeping the page scroll frozen.
#[derive(Debug)]
pub struct ScrollLock {
    locks: Arc<AtomicUsize>,
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        let previous = self.locks.fetch_sub(1, Ordering::AcqRel);
        if previous == 1 {
            tracing::trace!("page scroll restored");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lock_and_release() {
        let page = PageScroll::new();
        assert!(!page.is_locked());

        let guard = page.lock();
        assert!(page.is_locked());

        drop(guard);
        assert!(!page.is_locked());
    }

    #[test]
    fn nested_locks_release_on_last_drop() {
        let page = PageScroll::new();
        let first = page.lock();
        let second = page.clone().lock();

        drop(first);
        assert!(page.is_locked());
        drop(second);
        assert!(!page.is_locked());
    }

    #[test]
    fn guard_inside_dropped_owner_releases() {
        struct Owner {
            _lock: ScrollLock,
        }

        let page = PageScroll::new();
        let owner = Some(Owner { _lock: page.lock() });
        assert!(page.is_locked());

        let mut owner = owner;
        owner.take();
        assert!(!page.is_locked());
    }

    #[test]
    fn release_happens_during_unwind() {
        let page = PageScroll::new();
        let shared = page.clone();
        let result = std::panic::catch_unwind(move || {
            let _guard = shared.lock();
            panic!("owner failed");
        });
        assert!(result.is_err());
        assert!(!page.is_locked());
    }
}
