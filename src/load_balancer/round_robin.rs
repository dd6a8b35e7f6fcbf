//! Classic (LVS) weighted round-robin strategy.
//!
//! Walks the candidate list in order, lowering a weight threshold by the gcd
//! of all weights on every wraparound and restarting it at the max weight
//! once it runs out. A candidate is picked when its weight reaches the
//! threshold. Coarser than the smooth variant: weights {5, 1, 1} yield
//! `a, a, a, a, a, b, c`.
//!
//! See http://kb.linuxvirtualserver.org/wiki/Weighted_Round-Robin_Scheduling

use std::collections::HashMap;
use std::hash::Hash;

use crate::error::SelectError;
use crate::load_balancer::{snapshot, Selector, Strategy, WeightedItem};

/// Position in the scheduling cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Cycle {
    /// Last visited index; `None` before the first pick.
    index: Option<usize>,
    /// Current weight threshold.
    current_weight: i64,
}

/// LVS weighted round-robin selector.
#[derive(Debug, Clone)]
pub struct ClassicWeighted<T> {
    items: Vec<WeightedItem<T>>,
    gcd: i64,
    max_weight: i64,
    cycle: Cycle,
}

impl<T> Default for ClassicWeighted<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            gcd: 0,
            max_weight: 0,
            cycle: Cycle::default(),
        }
    }
}

impl<T> ClassicWeighted<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a candidate.
    ///
    /// Non-positive weights still take a slot in the cycle but never count
    /// towards the gcd or the max weight, so they are never picked once a
    /// second candidate exists.
    pub fn add(&mut self, item: T, weight: i64) {
        if weight > 0 {
            if self.gcd == 0 {
                self.gcd = weight;
                self.max_weight = weight;
                self.cycle = Cycle::default();
            } else {
                self.gcd = gcd(self.gcd, weight);
                self.max_weight = self.max_weight.max(weight);
            }
        } else {
            tracing::debug!(weight, "non-positive weight registered, candidate will not be scheduled");
        }
        self.items.push(WeightedItem::new(item, weight));
    }

    pub fn remove_all(&mut self) {
        self.items.clear();
        self.gcd = 0;
        self.max_weight = 0;
        self.cycle = Cycle::default();
    }

    /// Restart the cycle; membership and weights are untouched.
    pub fn reset(&mut self) {
        self.cycle = Cycle::default();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Clone + PartialEq> ClassicWeighted<T> {
    /// Pick the next candidate.
    pub fn next(&mut self) -> Option<T> {
        match self.items.len() {
            0 => None,
            1 => Some(self.items[0].item.clone()),
            _ => {
                let all: Vec<usize> = (0..self.items.len()).collect();
                let idx = run_cycle(&self.items, &all, self.gcd, self.max_weight, &mut self.cycle)?;
                Some(self.items[idx].item.clone())
            }
        }
    }

    /// Pick a candidate outside `exclusions`.
    ///
    /// The remaining candidates are scheduled as a fresh pool of their own,
    /// starting a new cycle on every call; the main cycle is not advanced.
    /// In practice this returns the first remaining candidate carrying the
    /// largest remaining weight.
    pub fn next_excluding(&mut self, exclusions: &[T]) -> Option<T> {
        if exclusions.is_empty() {
            return self.next();
        }

        let view: Vec<usize> = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, w)| !exclusions.contains(&w.item))
            .map(|(idx, _)| idx)
            .collect();

        match view.as_slice() {
            [] => None,
            [only] => Some(self.items[*only].item.clone()),
            _ => {
                let (gcd, max_weight) = view
                    .iter()
                    .map(|&idx| self.items[idx].weight)
                    .filter(|&w| w > 0)
                    .fold((0, 0), |(g, m), w| {
                        (if g == 0 { w } else { gcd(g, w) }, m.max(w))
                    });
                let mut cycle = Cycle::default();
                let idx = run_cycle(&self.items, &view, gcd, max_weight, &mut cycle)?;
                Some(self.items[idx].item.clone())
            }
        }
    }
}

/// Advance `cycle` over the candidates in `view` until one qualifies.
///
/// Returns an index into `items`, or `None` when no candidate in the view
/// has a positive weight; the cycle is left untouched in that case.
/// Terminates within two passes when `max_weight > 0` since the max-weight
/// candidate always reaches the threshold.
fn run_cycle<T>(
    items: &[WeightedItem<T>],
    view: &[usize],
    gcd: i64,
    max_weight: i64,
    cycle: &mut Cycle,
) -> Option<usize> {
    if max_weight <= 0 {
        return None;
    }

    let n = view.len();
    loop {
        let pos = cycle.index.map_or(0, |i| (i + 1) % n);
        cycle.index = Some(pos);
        if pos == 0 {
            cycle.current_weight -= gcd;
            if cycle.current_weight <= 0 {
                cycle.current_weight = max_weight;
            }
        }

        let idx = view[pos];
        if items[idx].weight >= cycle.current_weight {
            return Some(idx);
        }
    }
}

fn gcd(mut x: i64, mut y: i64) -> i64 {
    while y != 0 {
        let t = x % y;
        x = y;
        y = t;
    }
    x
}

impl<T: Clone + Eq + Hash> Selector<T> for ClassicWeighted<T> {
    fn strategy(&self) -> Strategy {
        Strategy::Classic
    }

    fn add(&mut self, item: T, weight: i64) -> Result<(), SelectError> {
        ClassicWeighted::add(self, item, weight);
        Ok(())
    }

    fn next(&mut self) -> Option<T> {
        ClassicWeighted::next(self)
    }

    fn all(&self) -> HashMap<T, i64> {
        snapshot(self.items.iter().map(|w| (&w.item, w.weight)))
    }

    fn remove_all(&mut self) {
        ClassicWeighted::remove_all(self)
    }

    fn reset(&mut self) {
        ClassicWeighted::reset(self)
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}
