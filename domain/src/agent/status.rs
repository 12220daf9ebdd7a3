//! Agent status registry

use crate::core::error::DomainError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Stable identifier for one cooperating agent (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentId(String);

impl AgentId {
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DomainError::EmptyAgentId);
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AgentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for AgentId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AgentId::new(s)
    }
}

/// Activity state of an agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentActivity {
    Idle,
    Thinking,
    Active,
    Error,
}

impl AgentActivity {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentActivity::Idle => "idle",
            AgentActivity::Thinking => "thinking",
            AgentActivity::Active => "active",
            AgentActivity::Error => "error",
        }
    }
}

impl std::fmt::Display for AgentActivity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Current status of one agent
///
/// `last_activity_at` is the timestamp of the most recent event referencing
/// this agent — not the last state *change* — and is absent until the agent
/// is referenced for the first time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentStatus {
    pub activity: AgentActivity,
    pub last_activity_at: Option<DateTime<Utc>>,
}

impl Default for AgentStatus {
    fn default() -> Self {
        Self {
            activity: AgentActivity::Idle,
            last_activity_at: None,
        }
    }
}

/// Registry of agent statuses, keyed by agent identifier (Entity)
///
/// Entries are created lazily on first reference and never removed for the
/// life of the session. Iteration order is stable (sorted by id) so renders
/// are deterministic.
#[derive(Debug, Clone, Default)]
pub struct AgentRegistry {
    agents: BTreeMap<AgentId, AgentStatus>,
}

impl AgentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-register a roster of agents as idle, so a round-start sweep covers
    /// agents that have not spoken yet. Existing entries are left untouched.
    pub fn with_roster(roster: impl IntoIterator<Item = AgentId>) -> Self {
        let mut registry = Self::new();
        for id in roster {
            registry.agents.entry(id).or_default();
        }
        registry
    }

    /// Upsert the status of one agent.
    ///
    /// Refreshes `last_activity_at` on every call, including when `activity`
    /// is unchanged.
    pub fn set_status(&mut self, id: AgentId, activity: AgentActivity) {
        let status = self.agents.entry(id).or_default();
        status.activity = activity;
        status.last_activity_at = Some(Utc::now());
    }

    /// Apply the same status update to every known agent.
    ///
    /// Runs to completion under `&mut self`, so no reader ever observes a
    /// partial sweep.
    pub fn set_all_status(&mut self, activity: AgentActivity) {
        let now = Utc::now();
        for status in self.agents.values_mut() {
            status.activity = activity;
            status.last_activity_at = Some(now);
        }
    }

    pub fn status(&self, id: &AgentId) -> Option<&AgentStatus> {
        self.agents.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&AgentId, &AgentStatus)> {
        self.agents.iter()
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> AgentId {
        AgentId::new(s).unwrap()
    }

    #[test]
    fn test_empty_agent_id_rejected() {
        assert!(AgentId::new("").is_err());
        assert!(AgentId::new("   ").is_err());
        assert!(AgentId::new("manus").is_ok());
    }

    #[test]
    fn test_lazy_creation_on_first_reference() {
        let mut registry = AgentRegistry::new();
        assert!(registry.status(&id("manus")).is_none());

        registry.set_status(id("manus"), AgentActivity::Active);
        let status = registry.status(&id("manus")).unwrap();
        assert_eq!(status.activity, AgentActivity::Active);
        assert!(status.last_activity_at.is_some());
    }

    #[test]
    fn test_roster_preseeds_idle_with_no_activity() {
        let registry = AgentRegistry::with_roster([id("manus"), id("aiin")]);
        assert_eq!(registry.len(), 2);
        for (_, status) in registry.iter() {
            assert_eq!(status.activity, AgentActivity::Idle);
            assert!(status.last_activity_at.is_none());
        }
    }

    #[test]
    fn test_unchanged_activity_still_refreshes_last_activity() {
        let mut registry = AgentRegistry::new();
        registry.set_status(id("aiin"), AgentActivity::Active);
        let first = registry.status(&id("aiin")).unwrap().last_activity_at;

        registry.set_status(id("aiin"), AgentActivity::Active);
        let second = registry.status(&id("aiin")).unwrap().last_activity_at;
        assert!(second >= first);
        assert!(second.is_some());
    }

    #[test]
    fn test_set_all_status_sweeps_every_agent() {
        let mut registry = AgentRegistry::with_roster([id("manus"), id("aiin")]);
        registry.set_status(id("manus"), AgentActivity::Active);

        registry.set_all_status(AgentActivity::Idle);
        for (_, status) in registry.iter() {
            assert_eq!(status.activity, AgentActivity::Idle);
            assert!(status.last_activity_at.is_some());
        }
    }

    #[test]
    fn test_entries_never_removed() {
        let mut registry = AgentRegistry::new();
        registry.set_status(id("manus"), AgentActivity::Thinking);
        registry.set_all_status(AgentActivity::Idle);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_iteration_order_is_sorted() {
        let mut registry = AgentRegistry::new();
        registry.set_status(id("zeta"), AgentActivity::Idle);
        registry.set_status(id("alpha"), AgentActivity::Idle);
        let names: Vec<_> = registry.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
    }
}
