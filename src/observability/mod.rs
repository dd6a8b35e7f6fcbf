//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Selectors and pool produce:
//!     → tracing events (trace/debug, structured fields)
//!     → metrics.rs (pick counters per group and outcome)
//!
//! Consumers:
//!     → logging.rs subscriber (stderr, stdout is left to program output), installed by the binary
//!     → any `metrics` recorder the embedding application installs
//! ```
//!
//! # Design Decisions
//! - The library never installs a subscriber or recorder itself
//! - Counter updates are no-ops until a recorder exists

pub mod logging;
pub mod metrics;
