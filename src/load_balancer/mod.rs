//! Weighted selection subsystem.
//!
//! # Data Flow
//! ```text
//! caller registers candidates
//!     → add(item, weight), insertion order preserved
//!     → next() / next_excluding(..) once per scheduling decision
//!         - smooth.rs (nginx smooth weighted round-robin)
//!         - round_robin.rs (LVS classic weighted round-robin)
//!         - random.rs (weighted random, private PRNG)
//!     → Some(item), or None when nothing is eligible
//! ```
//!
//! # Design Decisions
//! - Selectors are plain values; `next` takes `&mut self`, callers that
//!   dispatch concurrently go through `pool.rs` (one lock per group)
//! - Weights are immutable once added; changing one means `remove_all`
//!   followed by re-adding the full set
//! - `reset` clears fairness state only, membership is kept

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::error::SelectError;

pub mod pool;
pub mod random;
pub mod round_robin;
pub mod smooth;

pub use pool::SelectorPool;
pub use random::RandomWeighted;
pub use round_robin::ClassicWeighted;
pub use smooth::SmoothWeighted;

/// Selection algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Smooth weighted round-robin (maximally interleaved).
    #[default]
    Smooth,
    /// LVS weighted round-robin (gcd/max-weight cycle).
    Classic,
    /// Weighted random.
    Random,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Smooth => "smooth",
            Strategy::Classic => "classic",
            Strategy::Random => "random",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Common interface of the weighted selectors.
pub trait Selector<T> {
    /// Algorithm implemented by this selector.
    fn strategy(&self) -> Strategy;

    /// Register a candidate. Insertion order is significant.
    fn add(&mut self, item: T, weight: i64) -> Result<(), SelectError>;

    /// Pick the next candidate, or `None` if no candidate is eligible.
    fn next(&mut self) -> Option<T>;

    /// Snapshot of membership: item → weight.
    fn all(&self) -> HashMap<T, i64>;

    /// Drop every candidate and all derived bookkeeping.
    fn remove_all(&mut self);

    /// Restore fairness (or randomness) state without touching membership.
    fn reset(&mut self);

    /// Number of registered candidates, including non-positive weights.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A registered candidate and its nominal weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedItem<T> {
    pub item: T,
    pub weight: i64,
}

impl<T> WeightedItem<T> {
    pub fn new(item: T, weight: i64) -> Self {
        Self { item, weight }
    }
}

/// Build the item → weight snapshot. Later duplicates overwrite earlier ones.
pub(crate) fn snapshot<'a, T, I>(entries: I) -> HashMap<T, i64>
where
    T: Clone + Eq + Hash + 'a,
    I: IntoIterator<Item = (&'a T, i64)>,
{
    entries
        .into_iter()
        .map(|(item, weight)| (item.clone(), weight))
        .collect()
}

/// A selector whose strategy is chosen at runtime.
#[derive(Debug)]
pub enum Balancer<T> {
    Smooth(SmoothWeighted<T>),
    Classic(ClassicWeighted<T>),
    Random(RandomWeighted<T>),
}

impl<T> Balancer<T> {
    /// Create an empty balancer for `strategy`.
    pub fn new(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Smooth => Balancer::Smooth(SmoothWeighted::new()),
            Strategy::Classic => Balancer::Classic(ClassicWeighted::new()),
            Strategy::Random => Balancer::Random(RandomWeighted::new()),
        }
    }
}

impl<T: Clone + Eq + Hash> Balancer<T> {
    /// Pick the next candidate while skipping `exclusions` for this call only.
    ///
    /// Weighted random has no exclusion-aware pick; asking it to exclude
    /// anything is an error rather than a silent fallback.
    pub fn next_excluding(&mut self, exclusions: &[T]) -> Result<Option<T>, SelectError> {
        match self {
            Balancer::Smooth(s) => Ok(s.next_excluding(exclusions)),
            Balancer::Classic(c) => Ok(c.next_excluding(exclusions)),
            Balancer::Random(r) if exclusions.is_empty() => Ok(r.next()),
            Balancer::Random(_) => Err(SelectError::ExclusionsUnsupported {
                strategy: Strategy::Random,
            }),
        }
    }

    fn as_selector(&self) -> &dyn Selector<T> {
        match self {
            Balancer::Smooth(s) => s,
            Balancer::Classic(c) => c,
            Balancer::Random(r) => r,
        }
    }

    fn as_selector_mut(&mut self) -> &mut dyn Selector<T> {
        match self {
            Balancer::Smooth(s) => s,
            Balancer::Classic(c) => c,
            Balancer::Random(r) => r,
        }
    }
}

impl<T: Clone + Eq + Hash> Selector<T> for Balancer<T> {
    fn strategy(&self) -> Strategy {
        self.as_selector().strategy()
    }

    fn add(&mut self, item: T, weight: i64) -> Result<(), SelectError> {
        self.as_selector_mut().add(item, weight)
    }

    fn next(&mut self) -> Option<T> {
        self.as_selector_mut().next()
    }

    fn all(&self) -> HashMap<T, i64> {
        self.as_selector().all()
    }

    fn remove_all(&mut self) {
        self.as_selector_mut().remove_all()
    }

    fn reset(&mut self) {
        self.as_selector_mut().reset()
    }

    fn len(&self) -> usize {
        self.as_selector().len()
    }
}
