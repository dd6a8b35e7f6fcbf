//! Pick simulation over a configured pool.
//!
//! Drives a group for a fixed number of picks and reports the resulting
//! sequence and per-member counts, so a weight layout can be inspected
//! before it is deployed.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::SelectError;
use crate::load_balancer::{SelectorPool, Strategy};

/// Outcome of a simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulationReport {
    pub group: String,
    pub strategy: Strategy,
    pub picks: usize,
    /// Picked members in order; `None` for picks with no eligible member.
    pub sequence: Vec<Option<String>>,
    pub counts: BTreeMap<String, usize>,
    /// Picks that returned nothing.
    pub misses: usize,
}

/// Run `picks` selections against `group`, excluding `exclusions` on each.
pub fn run(
    pool: &SelectorPool,
    group: &str,
    picks: usize,
    exclusions: &[String],
) -> Result<SimulationReport, SelectError> {
    let strategy = pool.strategy(group)?;
    let mut sequence = Vec::with_capacity(picks);
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    let mut misses = 0;

    for _ in 0..picks {
        let picked = pool.pick_excluding(group, exclusions)?;
        match &picked {
            Some(name) => *counts.entry(name.clone()).or_default() += 1,
            None => misses += 1,
        }
        sequence.push(picked);
    }

    tracing::info!(group = %group, %strategy, picks, misses, "Simulation finished");

    Ok(SimulationReport {
        group: group.to_string(),
        strategy,
        picks,
        sequence,
        counts,
        misses,
    })
}
