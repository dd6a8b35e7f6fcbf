//! Smooth weighted round-robin strategy.
//!
//! On each pick every eligible candidate's current weight grows by its
//! effective weight; the candidate with the greatest current weight wins and
//! gives back the total handed out in that round. Weights {5, 1, 1} yield
//! `a, a, b, a, c, a, a`: same proportions as classic round-robin, without
//! long bursts of one candidate.
//!
//! Same scheme as nginx's upstream round-robin peer selection.

use std::collections::HashMap;
use std::hash::Hash;

use crate::error::SelectError;
use crate::load_balancer::{snapshot, Selector, Strategy};

/// Per-candidate bookkeeping.
#[derive(Debug, Clone)]
struct SmoothEntry<T> {
    item: T,
    weight: i64,
    current_weight: i64,
    /// Can lag behind `weight` after a penalty; recovers by one per round.
    effective_weight: i64,
}

/// Smooth weighted round-robin selector.
#[derive(Debug, Clone)]
pub struct SmoothWeighted<T> {
    items: Vec<SmoothEntry<T>>,
}

impl<T> Default for SmoothWeighted<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> SmoothWeighted<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a candidate.
    ///
    /// A zero weight is accepted and never wins while any positive candidate
    /// is eligible. Negative weights are rejected: they would shrink each
    /// round's total and let the leader outrun everyone else for good.
    pub fn add(&mut self, item: T, weight: i64) -> Result<(), SelectError> {
        if weight < 0 {
            return Err(SelectError::InvalidWeight { weight });
        }
        self.items.push(SmoothEntry {
            item,
            weight,
            current_weight: 0,
            effective_weight: weight,
        });
        Ok(())
    }

    pub fn remove_all(&mut self) {
        self.items.clear();
    }

    /// Zero every current weight and restore effective weights.
    pub fn reset(&mut self) {
        for entry in &mut self.items {
            entry.effective_weight = entry.weight;
            entry.current_weight = 0;
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Clone + PartialEq> SmoothWeighted<T> {
    /// Pick the next candidate.
    pub fn next(&mut self) -> Option<T> {
        if self.items.len() == 1 {
            return Some(self.items[0].item.clone());
        }
        self.pick(&[])
    }

    /// Pick the next candidate, skipping `exclusions` for this call.
    ///
    /// Excluded candidates keep their bookkeeping untouched.
    pub fn next_excluding(&mut self, exclusions: &[T]) -> Option<T> {
        if exclusions.is_empty() {
            return self.next();
        }
        self.pick(exclusions)
    }

    fn pick(&mut self, exclusions: &[T]) -> Option<T> {
        let mut total = 0i64;
        // (index, current weight) of the leader; ties keep the earlier one
        let mut best: Option<(usize, i64)> = None;

        for (idx, entry) in self.items.iter_mut().enumerate() {
            if exclusions.contains(&entry.item) {
                continue;
            }

            entry.current_weight += entry.effective_weight;
            total += entry.effective_weight;
            if entry.effective_weight < entry.weight {
                entry.effective_weight += 1;
            }

            match best {
                Some((_, cw)) if entry.current_weight <= cw => {}
                _ => best = Some((idx, entry.current_weight)),
            }
        }

        let (idx, _) = best?;
        let winner = &mut self.items[idx];
        winner.current_weight -= total;
        tracing::trace!(index = idx, current_weight = winner.current_weight, "smooth pick");
        Some(winner.item.clone())
    }
}

impl<T: Clone + Eq + Hash> Selector<T> for SmoothWeighted<T> {
    fn strategy(&self) -> Strategy {
        Strategy::Smooth
    }

    fn add(&mut self, item: T, weight: i64) -> Result<(), SelectError> {
        SmoothWeighted::add(self, item, weight)
    }

    fn next(&mut self) -> Option<T> {
        SmoothWeighted::next(self)
    }

    fn all(&self) -> HashMap<T, i64> {
        snapshot(self.items.iter().map(|e| (&e.item, e.weight)))
    }

    fn remove_all(&mut self) {
        SmoothWeighted::remove_all(self)
    }

    fn reset(&mut self) {
        SmoothWeighted::reset(self)
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}
