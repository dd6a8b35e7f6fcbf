//! Weighted random strategy.
//!
//! Stateless between picks apart from the private random source: a draw in
//! `[1, total_weight]` is walked down the candidate list, subtracting each
//! weight, and the candidate that brings it to zero or below wins.

use std::collections::HashMap;
use std::hash::Hash;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::SelectError;
use crate::load_balancer::{snapshot, Selector, Strategy, WeightedItem};

/// Weighted random selector with its own PRNG.
#[derive(Debug, Clone)]
pub struct RandomWeighted<T> {
    items: Vec<WeightedItem<T>>,
    total_weight: i64,
    rng: StdRng,
}

impl<T> Default for RandomWeighted<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RandomWeighted<T> {
    /// Create an empty selector seeded from the clock.
    pub fn new() -> Self {
        Self::with_seed(time_seed())
    }

    /// Create an empty selector with a fixed seed, for reproducible draws.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            items: Vec::new(),
            total_weight: 0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Register a candidate.
    ///
    /// Negative weights would corrupt the running total and are rejected, as
    /// is any weight that would overflow it. A zero weight is accepted and
    /// carries no probability mass.
    pub fn add(&mut self, item: T, weight: i64) -> Result<(), SelectError> {
        if weight < 0 {
            return Err(SelectError::InvalidWeight { weight });
        }
        let total_weight = self
            .total_weight
            .checked_add(weight)
            .ok_or(SelectError::InvalidWeight { weight })?;
        self.items.push(WeightedItem::new(item, weight));
        self.total_weight = total_weight;
        Ok(())
    }

    /// Clear membership and reseed.
    pub fn remove_all(&mut self) {
        self.items.clear();
        self.total_weight = 0;
        self.reset();
    }

    /// Reseed the random source from the clock; membership is kept.
    pub fn reset(&mut self) {
        self.rng = StdRng::seed_from_u64(time_seed());
    }

    pub fn total_weight(&self) -> i64 {
        self.total_weight
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Clone> RandomWeighted<T> {
    /// Draw a candidate with probability proportional to its weight.
    pub fn next(&mut self) -> Option<T> {
        if self.items.is_empty() || self.total_weight <= 0 {
            return None;
        }

        let mut remaining = self.rng.gen_range(1..=self.total_weight);
        for entry in &self.items {
            remaining -= entry.weight;
            if remaining <= 0 {
                return Some(entry.item.clone());
            }
        }

        // unreachable while total_weight is the sum of the weights
        self.items.last().map(|entry| entry.item.clone())
    }
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

impl<T: Clone + Eq + Hash> Selector<T> for RandomWeighted<T> {
    fn strategy(&self) -> Strategy {
        Strategy::Random
    }

    fn add(&mut self, item: T, weight: i64) -> Result<(), SelectError> {
        RandomWeighted::add(self, item, weight)
    }

    fn next(&mut self) -> Option<T> {
        RandomWeighted::next(self)
    }

    fn all(&self) -> HashMap<T, i64> {
        snapshot(self.items.iter().map(|w| (&w.item, w.weight)))
    }

    fn remove_all(&mut self) {
        RandomWeighted::remove_all(self)
    }

    fn reset(&mut self) {
        RandomWeighted::reset(self)
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}
