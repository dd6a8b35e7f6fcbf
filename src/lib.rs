//! Weighted candidate selection.
//!
//! Three interchangeable strategies pick the next candidate out of a
//! weighted set so that, over time, each is chosen in proportion to its
//! weight:
//!
//! - [`SmoothWeighted`]: smooth weighted round-robin, maximally interleaved
//! - [`ClassicWeighted`]: LVS weighted round-robin, gcd/max-weight cycle
//! - [`RandomWeighted`]: weighted random draw from a private PRNG
//!
//! [`SelectorPool`] groups selectors by name for callers that dispatch from
//! several threads.

pub mod config;
pub mod error;
pub mod load_balancer;
pub mod observability;
pub mod simulate;

pub use config::PoolConfig;
pub use error::SelectError;
pub use load_balancer::{
    Balancer, ClassicWeighted, RandomWeighted, Selector, SelectorPool, SmoothWeighted, Strategy,
    WeightedItem,
};
