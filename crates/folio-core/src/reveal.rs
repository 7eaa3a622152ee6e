//! Staggered scroll reveal.

use crate::config::RevealConfig;
use crate::observer::{Intersection, ObserverPolicy, ViewportObserver};

/// A reveal scheduled for one target, relative to the batch's detection instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealStep<K> {
    /// Target to reveal.
    pub target: K,
    /// Delay after the batch was detected.
    pub delay_ms: u32,
}

/// Owns the reveal policy and the set of already revealed targets.
#[derive(Debug, Clone)]
pub struct RevealCoordinator<K> {
    observer: ViewportObserver<K>,
    stagger_ms: u32,
    revealed: Vec<K>,
}

impl<K: PartialEq + Clone> RevealCoordinator<K> {
    /// Coordinator with nothing tracked yet.
    pub fn new(config: &RevealConfig) -> Self {
        Self {
            observer: ViewportObserver::new(ObserverPolicy::reveal(config)),
            stagger_ms: config.stagger_ms,
            revealed: Vec::new(),
        }
    }

    /// Policy for the platform observer.
    pub fn policy(&self) -> &ObserverPolicy {
        self.observer.policy()
    }

    /// Observe `target` unless it was already revealed.
    pub fn track(&mut self, target: K) {
        if !self.is_revealed(&target) {
            self.observer.observe(target);
        }
    }

    /// Whether `target` has been revealed.
    pub fn is_revealed(&self, target: &K) -> bool {
        self.revealed.contains(target)
    }

    /// Targets still waiting to be revealed.
    pub fn pending(&self) -> usize {
        self.observer.observed_count()
    }

    /// Schedule reveals for one intersection batch.
    ///
    /// The n-th target that fires in this batch is delayed by `n * stagger`.
    /// Every returned target is already unobserved and marked revealed.
    pub fn on_batch<I>(&mut self, batch: I) -> Vec<RevealStep<K>>
    where
        I: IntoIterator<Item = Intersection<K>>,
    {
        let fired = self.observer.dispatch(batch);
        let mut steps = Vec::with_capacity(fired.len());
        for target in fired {
            if self.is_revealed(&target) {
                continue;
            }
            self.revealed.push(target.clone());
            steps.push(RevealStep {
                target,
                delay_ms: steps.len() as u32 * self.stagger_ms,
            });
        }
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coordinator(targets: &[u32]) -> RevealCoordinator<u32> {
        let mut reveal = RevealCoordinator::new(&RevealConfig::default());
        for &t in targets {
            reveal.track(t);
        }
        reveal
    }

    #[test]
    fn staggers_within_a_batch() {
        let mut reveal = coordinator(&[1, 2, 3]);
        let steps = reveal.on_batch([
            Intersection::entering(3),
            Intersection::entering(1),
            Intersection::entering(2),
        ]);
        let delays: Vec<_> = steps.iter().map(|s| (s.target, s.delay_ms)).collect();
        assert_eq!(delays, vec![(3, 0), (1, 80), (2, 160)]);
    }

    #[test]
    fn stagger_index_restarts_per_batch() {
        let mut reveal = coordinator(&[1, 2]);
        reveal.on_batch([Intersection::entering(1)]);
        let steps = reveal.on_batch([Intersection::entering(2)]);
        assert_eq!(steps, vec![RevealStep { target: 2, delay_ms: 0 }]);
    }

    #[test]
    fn stagger_counts_only_visible_targets() {
        let mut reveal = coordinator(&[1, 2]);
        let steps = reveal.on_batch([Intersection::leaving(1), Intersection::entering(2)]);
        assert_eq!(steps, vec![RevealStep { target: 2, delay_ms: 0 }]);
        assert!(!reveal.is_revealed(&1));
        assert_eq!(reveal.pending(), 1);
    }

    #[test]
    fn reveals_each_target_once() {
        let mut reveal = coordinator(&[1]);
        assert_eq!(reveal.on_batch([Intersection::entering(1)]).len(), 1);
        for _ in 0..3 {
            assert!(reveal
                .on_batch([Intersection::leaving(1), Intersection::entering(1)])
                .is_empty());
        }
        assert!(reveal.is_revealed(&1));

        reveal.track(1);
        assert_eq!(reveal.pending(), 0);
    }
}
