//! Header navigation: compact header on scroll, mobile menu, active section.

use crate::config::NavConfig;
use crate::lock::{ScrollLock, ScrollLockGuard};
use crate::observer::{Intersection, ObserverPolicy, ViewportObserver};

/// Decides when the header switches to its compact "scrolled" style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollHeader {
    offset_px: f64,
}

impl ScrollHeader {
    /// A header that switches style past the configured offset.
    pub fn new(config: &NavConfig) -> Self {
        Self {
            offset_px: config.scrolled_offset_px,
        }
    }

    /// Whether the header should switch to its scrolled style at `scroll_y`.
    pub fn is_scrolled(&self, scroll_y: f64) -> bool {
        scroll_y > self.offset_px
    }
}

/// Open/closed state of the mobile menu.
///
/// While open the menu holds the shared scroll lock.
#[derive(Debug, Default)]
pub struct MobileMenu {
    scroll_lock: Option<ScrollLock>,
    guard: Option<ScrollLockGuard>,
    open: bool,
}

impl MobileMenu {
    /// A closed menu with no scroll lock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hold `lock` while the menu is open.
    pub fn with_scroll_lock(mut self, lock: ScrollLock) -> Self {
        self.scroll_lock = Some(lock);
        self
    }

    /// Whether the menu is open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the menu and return the new open state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.guard = if self.open {
            self.scroll_lock.as_ref().map(ScrollLock::acquire)
        } else {
            None
        };
        tracing::debug!(open = self.open, "mobile menu toggled");
        self.open
    }

    /// Close if open. Returns whether anything changed.
    pub fn close(&mut self) -> bool {
        if self.open {
            self.toggle();
            true
        } else {
            false
        }
    }
}

/// Tracks which page section is under the reading line.
#[derive(Debug, Clone)]
pub struct SectionTracker {
    observer: ViewportObserver<String>,
    active: Option<String>,
}

impl Default for SectionTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionTracker {
    /// Tracker with no sections.
    pub fn new() -> Self {
        Self {
            observer: ViewportObserver::new(ObserverPolicy::nav_section()),
            active: None,
        }
    }

    /// Policy for the platform observer.
    pub fn policy(&self) -> &ObserverPolicy {
        self.observer.policy()
    }

    /// Start tracking the section with id `section_id`.
    pub fn track(&mut self, section_id: impl Into<String>) {
        self.observer.observe(section_id.into());
    }

    /// Id of the section whose link is highlighted.
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Apply one batch of section reports. The last intersecting section wins;
    /// returns its id if any section became active in this batch.
    pub fn on_batch<I>(&mut self, batch: I) -> Option<&str>
    where
        I: IntoIterator<Item = Intersection<String>>,
    {
        let last = self.observer.dispatch(batch).pop()?;
        self.active = Some(last);
        self.active.as_deref()
    }
}

/// In-page link target for a section id.
pub fn section_href(section_id: &str) -> String {
    format!("#{section_id}")
}
