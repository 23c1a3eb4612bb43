//! Execution configuration: how a strategy runs its agents.
//!
//! Read once when a strategy is built and never re-read during a run.

use std::time::Duration;

/// Execution control for an orchestration strategy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionConfig {
    /// Run agents concurrently (`true`) or one at a time in configured order
    pub parallel: bool,
    /// Upper bound for a single agent invocation
    pub agent_timeout: Option<Duration>,
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            agent_timeout: None,
        }
    }
}

impl ExecutionConfig {
    // ==================== Builder Methods ====================

    pub fn parallel() -> Self {
        Self::default()
    }

    pub fn sequential() -> Self {
        Self::default().with_parallel(false)
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_agent_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.agent_timeout = timeout;
        self
    }
}
