//! Shared, reference-counted scroll lock.
//!
//! The mobile menu and the lightbox both freeze page scrolling while they are
//! open. Each holds a [`ScrollLockGuard`]; the page is unlocked only when the
//! last guard is dropped, whichever overlay closes first.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Applies the lock state to the page.
pub trait LockSink {
    /// `true` when the first guard is taken, `false` when the last one drops.
    fn apply(&self, locked: bool);
}

impl<F: Fn(bool)> LockSink for F {
    fn apply(&self, locked: bool) {
        self(locked)
    }
}

struct LockInner {
    holders: Cell<usize>,
    sink: Box<dyn LockSink>,
}

/// Cloneable handle to the page's single scroll lock.
#[derive(Clone)]
pub struct ScrollLock {
    inner: Rc<LockInner>,
}

impl ScrollLock {
    /// A lock that reports body state changes to `sink`.
    pub fn new(sink: impl LockSink + 'static) -> Self {
        Self {
            inner: Rc::new(LockInner {
                holders: Cell::new(0),
                sink: Box::new(sink),
            }),
        }
    }

    /// Take a hold on the lock. The sink sees `true` only on the first hold.
    #[must_use = "dropping the guard releases the lock immediately"]
    pub fn acquire(&self) -> ScrollLockGuard {
        let holders = self.inner.holders.get();
        self.inner.holders.set(holders + 1);
        if holders == 0 {
            tracing::debug!("scroll lock engaged");
            self.inner.sink.apply(true);
        }
        ScrollLockGuard {
            inner: Rc::clone(&self.inner),
        }
    }

    /// Whether any guard is alive.
    pub fn is_locked(&self) -> bool {
        self.holders() > 0
    }

    /// Number of live guards.
    pub fn holders(&self) -> usize {
        self.inner.holders.get()
    }
}

impl fmt::Debug for ScrollLock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollLock")
            .field("holders", &self.holders())
            .finish()
    }
}

/// One hold on the [`ScrollLock`]; released on drop.
pub struct ScrollLockGuard {
    inner: Rc<LockInner>,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        let holders = self.inner.holders.get().saturating_sub(1);
        self.inner.holders.set(holders);
        if holders == 0 {
            tracing::debug!("scroll lock released");
            self.inner.sink.apply(false);
        }
    }
}

impl fmt::Debug for ScrollLockGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollLockGuard").finish_non_exhaustive()
    }
}
