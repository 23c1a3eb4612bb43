//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

use ensemble_application::ExecutionConfig;
use ensemble_domain::{OutputFormat, validate_agent_key};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, HashSet};
use std::time::Duration;
use thiserror::Error;

// Re-export OutputFormat from domain for convenience
pub use ensemble_domain::OutputFormat as FileOutputFormat;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("{0} cannot be 0")]
    InvalidTimeout(&'static str),

    #[error("invalid agent key {0:?}")]
    InvalidAgentKey(String),

    #[error("agent {0:?} is defined more than once")]
    DuplicateAgentKey(String),

    #[error("agent {0:?} has no kind")]
    EmptyAgentKind(String),
}

/// Raw execution configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileExecutionConfig {
    /// Run agents concurrently
    pub parallel: bool,
    /// Deadline for a whole run, in seconds
    pub timeout_seconds: Option<u64>,
    /// Upper bound for a single agent, in seconds
    pub agent_timeout_seconds: Option<u64>,
}

impl Default for FileExecutionConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            timeout_seconds: None,
            agent_timeout_seconds: None,
        }
    }
}

impl FileExecutionConfig {
    pub fn run_timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }

    pub fn to_execution_config(&self) -> ExecutionConfig {
        ExecutionConfig::default()
            .with_parallel(self.parallel)
            .with_agent_timeout(self.agent_timeout_seconds.map(Duration::from_secs))
    }
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format (uses domain type)
    pub format: Option<OutputFormat>,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

/// One configured agent
///
/// `kind` selects the adapter; `settings` are handed to it verbatim.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileAgentConfig {
    /// Key the agent's result is stored under
    pub key: String,
    /// Adapter kind (e.g. "echo")
    pub kind: String,
    /// Adapter-specific settings
    #[serde(default)]
    pub settings: BTreeMap<String, Value>,
}

impl FileAgentConfig {
    pub fn new(key: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            kind: kind.into(),
            settings: BTreeMap::new(),
        }
    }

    pub fn with_setting(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.settings.insert(name.into(), value.into());
        self
    }
}

/// Complete configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub execution: FileExecutionConfig,
    pub output: FileOutputConfig,
    /// Agents in execution order
    pub agents: Vec<FileAgentConfig>,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if let Some(0) = self.execution.timeout_seconds {
            return Err(ConfigValidationError::InvalidTimeout("timeout_seconds"));
        }
        if let Some(0) = self.execution.agent_timeout_seconds {
            return Err(ConfigValidationError::InvalidTimeout(
                "agent_timeout_seconds",
            ));
        }

        let mut seen = HashSet::new();
        for agent in &self.agents {
            if validate_agent_key(&agent.key).is_err() {
                return Err(ConfigValidationError::InvalidAgentKey(agent.key.clone()));
            }
            if !seen.insert(agent.key.as_str()) {
                return Err(ConfigValidationError::DuplicateAgentKey(agent.key.clone()));
            }
            if agent.kind.trim().is_empty() {
                return Err(ConfigValidationError::EmptyAgentKind(agent.key.clone()));
            }
        }

        Ok(())
    }

    /// Agents whose key is in `keys`, keeping file order. Empty `keys` keeps all.
    pub fn select_agents(&self, keys: &[String]) -> Vec<FileAgentConfig> {
        self.agents
            .iter()
            .filter(|agent| keys.is_empty() || keys.contains(&agent.key))
            .cloned()
            .collect()
    }
}
