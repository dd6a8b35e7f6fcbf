//! Error definitions for selector and pool operations.
//!
//! "No eligible candidate" is never an error: every `next` returns `None`
//! for that case. Errors are reserved for caller mistakes.

use thiserror::Error;

use crate::load_balancer::Strategy;

/// Errors that can occur while registering candidates or dispatching picks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectError {
    /// Weight rejected by a strategy that cannot give it a meaning.
    #[error("invalid weight {weight}: must not be negative")]
    InvalidWeight { weight: i64 },

    /// Pool has no group registered under this name.
    #[error("unknown group: {0}")]
    UnknownGroup(String),

    /// Strategy has no exclusion-aware pick.
    #[error("{strategy} selection does not support exclusions")]
    ExclusionsUnsupported { strategy: Strategy },
}
