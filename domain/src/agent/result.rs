//! Agent result value object

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Outcome of one agent invocation
///
/// Produced exactly once per invocation, either by the agent itself or by
/// the orchestrator when the agent errored, was cancelled or never reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentResult {
    /// Name the agent reported for itself
    pub agent_name: String,
    /// Agent output (empty on failure)
    pub output: String,
    /// Whether the invocation succeeded
    pub success: bool,
    /// Wall-clock duration of the invocation in milliseconds
    pub duration_ms: u64,
    /// Error detail if failed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AgentResult {
    /// Creates a successful result.
    ///
    /// # Arguments
    /// * `agent_name` - Name of the agent that produced the output
    /// * `output` - The agent's answer
    pub fn success(agent_name: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            agent_name: agent_name.into(),
            output: output.into(),
            success: true,
            duration_ms: 0,
            error: None,
        }
    }

    /// Creates a failed result.
    ///
    /// # Arguments
    /// * `agent_name` - Name of the agent
    /// * `error` - Description of why the agent failed
    pub fn failure(agent_name: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            agent_name: agent_name.into(),
            output: String::new(),
            success: false,
            duration_ms: 0,
            error: Some(error.into()),
        }
    }

    /// Records how long the invocation took (saturating at `u64::MAX` ms).
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration_ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Returns `true` if this invocation succeeded.
    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}
