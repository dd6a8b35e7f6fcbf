//! Configuration schema definitions.
//!
//! A pool file names selection groups and the weighted members inside them.
//! All types derive Serde traits for deserialization from TOML.

use serde::{Deserialize, Serialize};

use crate::load_balancer::Strategy;

/// Root configuration for a selector pool.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct PoolConfig {
    /// Logging settings for the simulator binary.
    pub logging: LoggingConfig,

    /// Selection groups.
    pub groups: Vec<GroupConfig>,

    /// Candidates, each belonging to one group.
    pub members: Vec<MemberConfig>,
}

impl PoolConfig {
    /// Members of `group`, in declaration order.
    pub fn members_of<'a>(&'a self, group: &'a str) -> impl Iterator<Item = &'a MemberConfig> + 'a {
        self.members.iter().filter(move |m| m.group == group)
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` takes precedence.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// A named group with its own selector.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GroupConfig {
    /// Group identifier.
    pub name: String,

    /// Selection algorithm (default: smooth).
    #[serde(default)]
    pub strategy: Strategy,
}

/// A weighted candidate.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MemberConfig {
    /// Candidate identifier, unique within its group.
    pub name: String,

    /// Group this candidate belongs to.
    pub group: String,

    /// Relative selection weight (default: 1).
    #[serde(default = "default_weight")]
    pub weight: i64,
}

fn default_weight() -> i64 {
    1
}
