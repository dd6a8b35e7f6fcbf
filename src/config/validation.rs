//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check referential integrity (members reference existing groups)
//! - Validate value ranges (weights >= 0, names non-empty)
//! - Detect duplicate groups and duplicate members within a group
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: PoolConfig → Result<(), Vec<ValidationError>>
//! - Zero weights and groups without members are legal

use std::collections::HashSet;
use std::fmt;

use crate::config::schema::PoolConfig;

/// A single semantic problem in a pool configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    EmptyGroupName,
    DuplicateGroup(String),
    EmptyMemberName { group: String },
    UnknownGroup { member: String, group: String },
    DuplicateMember { member: String, group: String },
    NegativeWeight { member: String, weight: i64 },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyGroupName => write!(f, "group with empty name"),
            ValidationError::DuplicateGroup(name) => write!(f, "duplicate group '{}'", name),
            ValidationError::EmptyMemberName { group } => {
                write!(f, "member with empty name in group '{}'", group)
            }
            ValidationError::UnknownGroup { member, group } => {
                write!(f, "member '{}' references unknown group '{}'", member, group)
            }
            ValidationError::DuplicateMember { member, group } => {
                write!(f, "member '{}' declared twice in group '{}'", member, group)
            }
            ValidationError::NegativeWeight { member, weight } => {
                write!(f, "member '{}' has negative weight {}", member, weight)
            }
        }
    }
}

/// Check a parsed configuration, collecting every error found.
pub fn validate_config(config: &PoolConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let mut groups = HashSet::new();
    for group in &config.groups {
        if group.name.is_empty() {
            errors.push(ValidationError::EmptyGroupName);
        } else if !groups.insert(group.name.as_str()) {
            errors.push(ValidationError::DuplicateGroup(group.name.clone()));
        }
    }

    let mut seen = HashSet::new();
    for member in &config.members {
        if member.name.is_empty() {
            errors.push(ValidationError::EmptyMemberName {
                group: member.group.clone(),
            });
        }
        if !groups.contains(member.group.as_str()) {
            errors.push(ValidationError::UnknownGroup {
                member: member.name.clone(),
                group: member.group.clone(),
            });
        }
        if !member.name.is_empty() && !seen.insert((member.group.as_str(), member.name.as_str())) {
            errors.push(ValidationError::DuplicateMember {
                member: member.name.clone(),
                group: member.group.clone(),
            });
        }
        if member.weight < 0 {
            errors.push(ValidationError::NegativeWeight {
                member: member.name.clone(),
                weight: member.weight,
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
