//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! pool file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → PoolConfig (validated, immutable)
//!     → SelectorPool::from_config
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; weight changes rebuild a group
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::GroupConfig;
pub use schema::LoggingConfig;
pub use schema::MemberConfig;
pub use schema::PoolConfig;
