//! Viewport observation policies and subscription bookkeeping.
//!
//! The browser reports intersection changes in batches. [`ViewportObserver`]
//! decides which of those reports are relevant transitions for a policy and
//! drops one-shot targets from its observed set as soon as they fire, so a
//! target that scrolls out and back in is never reported twice.

use std::fmt;

use crate::config::{CounterConfig, RevealConfig};

/// A single edge of an intersection root margin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Inset {
    /// Pixels.
    Px(f64),
    /// Percentage of the root's size.
    Percent(f64),
}

impl Inset {
    /// No inset.
    pub const ZERO: Inset = Inset::Px(0.0);
}

impl fmt::Display for Inset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Inset::Px(v) => write!(f, "{v}px"),
            Inset::Percent(v) => write!(f, "{v}%"),
        }
    }
}

/// Root margin applied around the viewport, in CSS shorthand order.
///
/// Negative values shrink the effective viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootMargin {
    /// Top edge.
    pub top: Inset,
    /// Right edge.
    pub right: Inset,
    /// Bottom edge.
    pub bottom: Inset,
    /// Left edge.
    pub left: Inset,
}

impl RootMargin {
    /// No margin on any edge.
    pub const NONE: RootMargin = RootMargin {
        top: Inset::ZERO,
        right: Inset::ZERO,
        bottom: Inset::ZERO,
        left: Inset::ZERO,
    };
}

impl Default for RootMargin {
    fn default() -> Self {
        Self::NONE
    }
}

impl fmt::Display for RootMargin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.top, self.right, self.bottom, self.left)
    }
}

/// Whether a target keeps being observed after it first becomes visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Fire once, then stop observing the target.
    Once,
    /// Fire on every transition into view; never unobserve.
    Continuous,
}

/// Visibility policy handed to the platform intersection observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverPolicy {
    /// Visible fraction at which a target counts as intersecting.
    pub threshold: f64,
    /// Margin applied to the viewport before testing.
    pub root_margin: RootMargin,
    /// Whether targets stop being observed after firing.
    pub trigger: Trigger,
}

impl ObserverPolicy {
    /// Scroll reveal: small visible fraction, viewport bottom pulled in.
    pub fn reveal(config: &RevealConfig) -> Self {
        Self {
            threshold: config.threshold,
            root_margin: RootMargin {
                bottom: Inset::Px(-config.bottom_inset_px),
                ..RootMargin::NONE
            },
            trigger: Trigger::Once,
        }
    }

    /// Stat counters start once half the number is on screen.
    pub fn counter(config: &CounterConfig) -> Self {
        Self {
            threshold: config.threshold,
            root_margin: RootMargin::NONE,
            trigger: Trigger::Once,
        }
    }

    /// Active section tracking: a section counts while it crosses the line 30% down the viewport.
    pub fn nav_section() -> Self {
        Self {
            threshold: 0.0,
            root_margin: RootMargin {
                top: Inset::Percent(-30.0),
                bottom: Inset::Percent(-70.0),
                ..RootMargin::NONE
            },
            trigger: Trigger::Continuous,
        }
    }

    /// Whether targets are dropped after their first firing.
    pub fn is_one_shot(&self) -> bool {
        self.trigger == Trigger::Once
    }
}

/// One intersection report for an observed target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Intersection<K> {
    /// Observed target.
    pub target: K,
    /// Whether it now intersects the root.
    pub is_intersecting: bool,
}

impl<K> Intersection<K> {
    /// A report that `target` came into view.
    pub fn entering(target: K) -> Self {
        Self {
            target,
            is_intersecting: true,
        }
    }

    /// A report that `target` left the view.
    pub fn leaving(target: K) -> Self {
        Self {
            target,
            is_intersecting: false,
        }
    }
}

/// Tracks which targets a policy still observes and filters batches of reports.
#[derive(Debug, Clone)]
pub struct ViewportObserver<K> {
    policy: ObserverPolicy,
    observed: Vec<K>,
}

impl<K: PartialEq + Clone> ViewportObserver<K> {
    /// No targets observed yet.
    pub fn new(policy: ObserverPolicy) -> Self {
        Self {
            policy,
            observed: Vec::new(),
        }
    }

    /// Policy for the platform observer.
    pub fn policy(&self) -> &ObserverPolicy {
        &self.policy
    }

    /// Start observing `target`. Observing twice is a no-op.
    pub fn observe(&mut self, target: K) {
        if !self.observed.contains(&target) {
            self.observed.push(target);
        }
    }

    /// Stop observing `target`. Returns `false` if it was not observed.
    pub fn unobserve(&mut self, target: &K) -> bool {
        let before = self.observed.len();
        self.observed.retain(|k| k != target);
        self.observed.len() != before
    }

    /// Whether `target` is still observed.
    pub fn is_observed(&self, target: &K) -> bool {
        self.observed.contains(target)
    }

    /// Number of targets still observed.
    pub fn observed_count(&self) -> usize {
        self.observed.len()
    }

    /// Filter one batch of reports down to the targets that fired, in report order.
    ///
    /// Reports for targets no longer observed are ignored. One-shot targets are
    /// unobserved before this returns; the caller must mirror that on the
    /// platform observer.
    pub fn dispatch<I>(&mut self, batch: I) -> Vec<K>
    where
        I: IntoIterator<Item = Intersection<K>>,
    {
        let mut fired = Vec::new();
        for entry in batch {
            if !entry.is_intersecting || !self.is_observed(&entry.target) {
                continue;
            }
            if self.policy.is_one_shot() {
                self.unobserve(&entry.target);
            }
            fired.push(entry.target);
        }
        fired
    }
}
