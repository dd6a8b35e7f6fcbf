//! Metrics collection.
//!
//! # Metrics
//! - `weighted_select_picks_total` (counter): picks by group, strategy, outcome
//!
//! # Design Decisions
//! - Emitted through the `metrics` facade; exposition is left to the host
//! - Outcome label is `hit` when a candidate was returned, `miss` otherwise

use crate::load_balancer::Strategy;

pub const PICKS_TOTAL: &str = "weighted_select_picks_total";

/// Record a single pick attempt.
pub fn record_pick(group: &str, strategy: Strategy, hit: bool) {
    let outcome = if hit { "hit" } else { "miss" };
    metrics::counter!(
        PICKS_TOTAL,
        "group" => group.to_owned(),
        "strategy" => strategy.as_str(),
        "outcome" => outcome
    )
    .increment(1);
}
