//! Selector pool management.
//!
//! # Responsibilities
//! - Manage named groups of weighted candidates, one selector per group
//! - Serialize picks per group so selectors can be shared across threads
//! - Rebuild a group when its membership or weights change

use std::collections::HashMap;

use dashmap::DashMap;

use crate::config::PoolConfig;
use crate::error::SelectError;
use crate::load_balancer::{Balancer, Selector, Strategy};
use crate::observability::metrics;

/// Named groups of candidates, each behind its own selector.
///
/// A pick takes the group's shard lock for the duration of one `next`, so
/// concurrent callers never interleave updates to a fairness sequence.
#[derive(Debug, Default)]
pub struct SelectorPool {
    groups: DashMap<String, Balancer<String>>,
}

impl SelectorPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a pool from a validated configuration.
    pub fn from_config(config: &PoolConfig) -> Result<Self, SelectError> {
        let pool = Self::new();

        for group in &config.groups {
            let members: Vec<(String, i64)> = config
                .members_of(&group.name)
                .map(|m| (m.name.clone(), m.weight))
                .collect();

            if members.is_empty() {
                tracing::warn!(group = %group.name, "Group has no members");
            }
            for (name, weight) in &members {
                if *weight == 0 {
                    tracing::warn!(group = %group.name, member = %name, "Member has zero weight and will not be selected");
                }
            }

            pool.replace_group(&group.name, group.strategy, members)?;
        }

        tracing::debug!(groups = pool.groups.len(), "Selector pool built");
        Ok(pool)
    }

    /// Create or replace `group` with a fresh selector holding `members`.
    ///
    /// This is the only way to change a member's weight.
    pub fn replace_group<I>(&self, group: &str, strategy: Strategy, members: I) -> Result<(), SelectError>
    where
        I: IntoIterator<Item = (String, i64)>,
    {
        let mut balancer = Balancer::new(strategy);
        for (name, weight) in members {
            balancer.add(name, weight)?;
        }
        tracing::debug!(group = %group, strategy = %strategy, members = balancer.len(), "Group installed");
        self.groups.insert(group.to_string(), balancer);
        Ok(())
    }

    /// Append a member to an existing group.
    pub fn add_member(&self, group: &str, name: impl Into<String>, weight: i64) -> Result<(), SelectError> {
        let mut balancer = self.group_mut(group)?;
        balancer.add(name.into(), weight)
    }

    /// Select the next member of `group`.
    pub fn pick(&self, group: &str) -> Result<Option<String>, SelectError> {
        self.pick_excluding(group, &[])
    }

    /// Select the next member of `group`, skipping `exclusions` for this call.
    pub fn pick_excluding(&self, group: &str, exclusions: &[String]) -> Result<Option<String>, SelectError> {
        let mut balancer = self.group_mut(group)?;
        let picked = balancer.next_excluding(exclusions)?;
        let strategy = balancer.strategy();
        drop(balancer);

        metrics::record_pick(group, strategy, picked.is_some());
        if picked.is_none() {
            tracing::debug!(
                group = %group,
                strategy = %strategy,
                excluded = exclusions.len(),
                "No eligible member in group"
            );
        }
        Ok(picked)
    }

    /// Restore fairness state of `group`; members are kept.
    pub fn reset(&self, group: &str) -> Result<(), SelectError> {
        self.group_mut(group)?.reset();
        Ok(())
    }

    /// Remove every member of `group`; the group itself stays registered.
    pub fn remove_all(&self, group: &str) -> Result<(), SelectError> {
        self.group_mut(group)?.remove_all();
        Ok(())
    }

    /// Snapshot of `group`'s members and weights.
    pub fn members(&self, group: &str) -> Result<HashMap<String, i64>, SelectError> {
        self.groups
            .get(group)
            .map(|b| b.all())
            .ok_or_else(|| SelectError::UnknownGroup(group.to_string()))
    }

    pub fn strategy(&self, group: &str) -> Result<Strategy, SelectError> {
        self.groups
            .get(group)
            .map(|b| b.strategy())
            .ok_or_else(|| SelectError::UnknownGroup(group.to_string()))
    }

    /// Registered group names, sorted.
    pub fn groups(&self) -> Vec<String> {
        let mut names: Vec<String> = self.groups.iter().map(|e| e.key().clone()).collect();
        names.sort();
        names
    }

    fn group_mut(
        &self,
        group: &str,
    ) -> Result<dashmap::mapref::one::RefMut<'_, String, Balancer<String>>, SelectError> {
        self.groups
            .get_mut(group)
            .ok_or_else(|| SelectError::UnknownGroup(group.to_string()))
    }
}
