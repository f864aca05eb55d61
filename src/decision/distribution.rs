//! Multiset of decisions.

use super::types::Decision;
use std::collections::HashMap;

/// Counts of decisions.
///
/// Enumeration follows the order in which decisions were first added, so
/// distributions built from the same object sequence list their decisions
/// identically.
#[derive(Debug, Clone, Default)]
pub struct DecisionDistribution {
    counts: HashMap<Decision, usize>,
    order: Vec<Decision>,
}

impl DecisionDistribution {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a distribution counting every decision yielded by the iterator.
    pub fn from_decisions<'a, I>(decisions: I) -> Self
    where
        I: IntoIterator<Item = &'a Decision>,
    {
        let mut distribution = Self::new();
        for decision in decisions {
            distribution.increase_count(decision);
        }
        distribution
    }

    /// Occurrences of `decision`, zero if absent.
    pub fn count(&self, decision: &Decision) -> usize {
        self.counts.get(decision).copied().unwrap_or(0)
    }

    /// Increments the count of `decision` by one.
    pub fn increase_count(&mut self, decision: &Decision) {
        match self.counts.get_mut(decision) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(decision.clone(), 1);
                self.order.push(decision.clone());
            }
        }
    }

    /// Distinct decisions in first-seen order.
    pub fn decisions(&self) -> &[Decision] {
        &self.order
    }

    /// `(decision, count)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&Decision, usize)> + '_ {
        self.order.iter().map(move |d| (d, self.count(d)))
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Sum of counts of decisions accepted by `predicate`.
    pub fn count_where<F>(&self, mut predicate: F) -> usize
    where
        F: FnMut(&Decision) -> bool,
    {
        self.iter()
            .filter(|(d, _)| predicate(*d))
            .map(|(_, count)| count)
            .sum()
    }

    /// Number of distinct decisions.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl PartialEq for DecisionDistribution {
    fn eq(&self, other: &Self) -> bool {
        self.counts == other.counts
    }
}

impl Eq for DecisionDistribution {}
