//! Shared utilities for selector integration tests.

use std::collections::HashMap;
use std::hash::Hash;

use weighted_select::Selector;

/// Register `(item, weight)` pairs in order.
pub fn fill<T, S>(selector: &mut S, items: &[(T, i64)])
where
    T: Clone,
    S: Selector<T> + ?Sized,
{
    for (item, weight) in items {
        selector
            .add(item.clone(), *weight)
            .expect("weight accepted");
    }
}

/// Run `n` picks and count how often each item came back.
#[allow(dead_code)]
pub fn tally<T, S>(selector: &mut S, n: usize) -> HashMap<T, usize>
where
    T: Eq + Hash,
    S: Selector<T> + ?Sized,
{
    let mut counts = HashMap::new();
    for _ in 0..n {
        if let Some(item) = selector.next() {
            *counts.entry(item).or_insert(0) += 1;
        }
    }
    counts
}

/// Run `n` picks and collect them in order.
#[allow(dead_code)]
pub fn sequence<T, S>(selector: &mut S, n: usize) -> Vec<Option<T>>
where
    S: Selector<T> + ?Sized,
{
    (0..n).map(|_| selector.next()).collect()
}
