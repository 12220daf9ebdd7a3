//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file and
//! are deserialized directly.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Server endpoints
    pub server: FileServerConfig,
    /// Agent roster
    pub agents: FileAgentsConfig,
    /// Transcript log settings
    pub log: FileLogConfig,
    /// Simulated backend settings
    pub simulator: FileSimulatorConfig,
}

impl FileConfig {
    /// Validate the configuration, returning human-readable issues.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();
        if self.agents.roster.is_empty() {
            issues.push("agents.roster is empty; no agent will join the discussion".to_string());
        }
        for name in &self.agents.roster {
            if name.trim().is_empty() {
                issues.push("agents.roster contains an empty name".to_string());
            }
        }
        if self.server.api_url.trim().is_empty() {
            issues.push("server.api_url is empty".to_string());
        }
        issues
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// Base URL of the discussion channel endpoint
    pub chat_url: String,
    /// Base URL of the booking REST service
    pub api_url: String,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            chat_url: "http://localhost:8080".to_string(),
            api_url: "http://localhost:5000/api".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAgentsConfig {
    /// Agent identifiers expected to participate in each round
    pub roster: Vec<String>,
}

impl Default for FileAgentsConfig {
    fn default() -> Self {
        Self {
            roster: vec!["manus".to_string(), "aiin".to_string()],
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLogConfig {
    /// Where to write the JSONL transcript log; unset disables it
    pub transcript: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSimulatorConfig {
    /// Pause between simulated events, in milliseconds
    pub latency_ms: u64,
}

impl Default for FileSimulatorConfig {
    fn default() -> Self {
        Self { latency_ms: 400 }
    }
}
