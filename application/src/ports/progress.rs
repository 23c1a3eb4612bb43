//! Progress notification port
//!
//! Defines the interface for reporting progress during an orchestration run.

use ensemble_domain::{AgentResult, ReasoningResult};

/// Callback for progress updates during a run
///
/// Implementations live in the presentation layer. Agent completions are
/// reported in configuration order, as results are collected, not in the
/// order agents actually finish.
pub trait ProgressNotifier: Send + Sync {
    /// Called once agents are about to start
    fn on_run_start(&self, strategy: &str, total_agents: usize);

    /// Called when an agent's result has been collected
    fn on_agent_complete(&self, key: &str, result: &AgentResult);

    /// Called after the summary has been written
    fn on_run_complete(&self, _result: &ReasoningResult) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_run_start(&self, _strategy: &str, _total_agents: usize) {}
    fn on_agent_complete(&self, _key: &str, _result: &AgentResult) {}
}
