//! Run Reasoning use case
//!
//! Dispatches one reasoning input to every configured agent, in parallel or
//! one at a time, and collects the results into a [`ReasoningResult`].
//!
//! Each agent runs as its own task in a [`JoinSet`] owned by the run and
//! hands exactly one outcome back over a dedicated `oneshot` channel.
//! Dropping the run aborts every task still in flight. Handoffs are drained in configuration
//! order, so the accumulator's order never depends on which agent finished
//! first. Agent failures are recorded as data; the run itself only fails
//! when the context is already done on entry.

use crate::config::ExecutionConfig;
use crate::context::{ContextError, RunContext};
use crate::ports::agent::{Agent, AgentBinding, AgentError};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use async_trait::async_trait;
use ensemble_domain::{
    AgentResult, DomainError, PROVISIONAL_MESSAGE, ReasoningInput, ReasoningResult, aggregate,
    validate_agent_key,
};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::oneshot;
use tokio::task::JoinSet;
use tokio::time::Instant;
use tracing::{debug, info, warn};

/// Name of the [`AdvancedStrategy`] workflow
pub const ADVANCED_STRATEGY_NAME: &str = "advanced";

/// Error recorded for an agent whose task ended without reporting back
pub const AGENT_TASK_TERMINATED: &str = "agent task terminated unexpectedly";

/// Errors that end a run without a result
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunReasoningError {
    #[error("Run cancelled before any agent started")]
    Cancelled,

    #[error("Run deadline exceeded before any agent started")]
    DeadlineExceeded,
}

impl RunReasoningError {
    /// Check if this error represents a cancellation
    pub fn is_cancelled(&self) -> bool {
        matches!(self, RunReasoningError::Cancelled)
    }
}

impl From<ContextError> for RunReasoningError {
    fn from(err: ContextError) -> Self {
        match err {
            ContextError::Cancelled => RunReasoningError::Cancelled,
            ContextError::DeadlineExceeded => RunReasoningError::DeadlineExceeded,
        }
    }
}

/// Errors raised while building a strategy
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StrategyBuildError {
    #[error("Agent {key:?} is not available: {reason}")]
    AgentUnavailable { key: String, reason: String },

    #[error("Agent key {0:?} is configured more than once")]
    DuplicateAgentKey(String),

    #[error(transparent)]
    InvalidAgentKey(#[from] DomainError),
}

/// An orchestration strategy over a fixed set of agents
#[async_trait]
pub trait ExecutionStrategy: Send + Sync {
    /// Stable identifier of this strategy
    fn name(&self) -> &str;

    /// Run every configured agent against `input`
    async fn execute(
        &self,
        ctx: &RunContext,
        input: ReasoningInput,
    ) -> Result<ReasoningResult, RunReasoningError>;
}

/// Outcome a per-agent task hands back to the orchestrator
#[derive(Debug)]
enum AgentOutcome {
    Completed {
        result: Result<AgentResult, AgentError>,
        elapsed: Duration,
    },
    Cancelled {
        reason: ContextError,
        elapsed: Duration,
    },
}

struct AgentSlot {
    key: String,
    agent: Arc<dyn Agent>,
}

/// Default strategy: every agent gets the same input, results are summarized
pub struct AdvancedStrategy {
    agents: Vec<AgentSlot>,
    config: ExecutionConfig,
}

impl AdvancedStrategy {
    /// Build a strategy over agents in the given order.
    ///
    /// Fails if any key is invalid or repeated, or if any key is bound to
    /// [`AgentBinding::NotConfigured`].
    pub fn new(
        bindings: impl IntoIterator<Item = (String, AgentBinding)>,
        config: ExecutionConfig,
    ) -> Result<Self, StrategyBuildError> {
        let mut seen = HashSet::new();
        let mut agents = Vec::new();

        for (key, binding) in bindings {
            validate_agent_key(&key)?;
            if !seen.insert(key.clone()) {
                return Err(StrategyBuildError::DuplicateAgentKey(key));
            }
            match binding {
                AgentBinding::Ready(agent) => agents.push(AgentSlot { key, agent }),
                AgentBinding::NotConfigured { reason } => {
                    return Err(StrategyBuildError::AgentUnavailable { key, reason });
                }
            }
        }

        Ok(Self { agents, config })
    }

    pub fn config(&self) -> &ExecutionConfig {
        &self.config
    }

    /// Agent keys in execution order
    pub fn agent_keys(&self) -> impl Iterator<Item = &str> {
        self.agents.iter().map(|slot| slot.key.as_str())
    }

    /// Execute with progress callbacks
    pub async fn execute_with_progress(
        &self,
        ctx: &RunContext,
        input: ReasoningInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<ReasoningResult, RunReasoningError> {
        ctx.check()?;

        let mode = if self.config.parallel {
            "parallel"
        } else {
            "sequential"
        };
        info!(
            "Starting {} run with {} agents ({})",
            ADVANCED_STRATEGY_NAME,
            self.agents.len(),
            mode
        );

        let input = Arc::new(input);
        let mut result = ReasoningResult::new(ADVANCED_STRATEGY_NAME, PROVISIONAL_MESSAGE);
        progress.on_run_start(ADVANCED_STRATEGY_NAME, self.agents.len());

        if self.config.parallel {
            self.run_parallel(ctx, &input, &mut result, progress).await;
        } else {
            self.run_sequential(ctx, &input, &mut result, progress).await;
        }

        result.set_message(aggregate(&result));

        let failed = result.failed_results().count();
        if failed > 0 {
            warn!("{} of {} agents failed", failed, result.agent_results().len());
        } else {
            info!("All {} agents succeeded", result.agent_results().len());
        }

        progress.on_run_complete(&result);
        Ok(result)
    }

    /// Start every agent, then drain handoffs in configuration order
    async fn run_parallel(
        &self,
        ctx: &RunContext,
        input: &Arc<ReasoningInput>,
        result: &mut ReasoningResult,
        progress: &dyn ProgressNotifier,
    ) {
        let mut join_set = JoinSet::new();
        let handoffs: Vec<_> = self
            .agents
            .iter()
            .map(|slot| self.spawn_agent(&mut join_set, slot, ctx, input))
            .collect();

        for (slot, handoff) in self.agents.iter().zip(handoffs) {
            let agent_result = Self::receive(slot, handoff).await;
            progress.on_agent_complete(&slot.key, &agent_result);
            result.add_agent_result(slot.key.clone(), agent_result);
        }
    }

    /// Start each agent only after the previous one reported back
    async fn run_sequential(
        &self,
        ctx: &RunContext,
        input: &Arc<ReasoningInput>,
        result: &mut ReasoningResult,
        progress: &dyn ProgressNotifier,
    ) {
        let mut join_set = JoinSet::new();
        for slot in &self.agents {
            let handoff = self.spawn_agent(&mut join_set, slot, ctx, input);
            let agent_result = Self::receive(slot, handoff).await;
            progress.on_agent_complete(&slot.key, &agent_result);
            result.add_agent_result(slot.key.clone(), agent_result);
        }
    }

    fn spawn_agent(
        &self,
        join_set: &mut JoinSet<()>,
        slot: &AgentSlot,
        ctx: &RunContext,
        input: &Arc<ReasoningInput>,
    ) -> oneshot::Receiver<AgentOutcome> {
        let (tx, rx) = oneshot::channel();
        let agent = Arc::clone(&slot.agent);
        let ctx = ctx.clone();
        let input = Arc::clone(input);
        let timeout = self.config.agent_timeout;

        debug!("Starting agent {}", slot.key);
        join_set.spawn(async move {
            let outcome = Self::invoke(agent.as_ref(), &ctx, &input, timeout).await;
            // Receiver is gone only if the run itself was dropped
            let _ = tx.send(outcome);
        });
        rx
    }

    /// Run one agent, racing it against the context
    async fn invoke(
        agent: &dyn Agent,
        ctx: &RunContext,
        input: &ReasoningInput,
        timeout: Option<Duration>,
    ) -> AgentOutcome {
        let started = Instant::now();
        let call = async {
            match timeout {
                Some(limit) => tokio::time::timeout(limit, agent.execute(ctx, input))
                    .await
                    .unwrap_or(Err(AgentError::Timeout(limit))),
                None => agent.execute(ctx, input).await,
            }
        };

        tokio::select! {
            biased;
            reason = ctx.done() => AgentOutcome::Cancelled {
                reason,
                elapsed: started.elapsed(),
            },
            result = call => AgentOutcome::Completed {
                result,
                elapsed: started.elapsed(),
            },
        }
    }

    async fn receive(slot: &AgentSlot, handoff: oneshot::Receiver<AgentOutcome>) -> AgentResult {
        let name = slot.agent.name();
        match handoff.await {
            Ok(AgentOutcome::Completed {
                result: Ok(agent_result),
                ..
            }) => {
                if agent_result.success {
                    info!("Agent {} completed in {}ms", slot.key, agent_result.duration_ms);
                } else {
                    warn!(
                        "Agent {} reported failure: {}",
                        slot.key,
                        agent_result.error.as_deref().unwrap_or("unknown")
                    );
                }
                agent_result
            }
            Ok(AgentOutcome::Completed {
                result: Err(e),
                elapsed,
            }) => {
                warn!("Agent {} failed: {}", slot.key, e);
                AgentResult::failure(name, e.to_string()).with_duration(elapsed)
            }
            Ok(AgentOutcome::Cancelled { reason, elapsed }) => {
                warn!("Agent {} stopped: {}", slot.key, reason);
                AgentResult::failure(name, reason.to_string()).with_duration(elapsed)
            }
            Err(_) => {
                warn!("Agent {} task ended without a result", slot.key);
                AgentResult::failure(name, AGENT_TASK_TERMINATED)
            }
        }
    }
}

#[async_trait]
impl ExecutionStrategy for AdvancedStrategy {
    fn name(&self) -> &str {
        ADVANCED_STRATEGY_NAME
    }

    async fn execute(
        &self,
        ctx: &RunContext,
        input: ReasoningInput,
    ) -> Result<ReasoningResult, RunReasoningError> {
        self.execute_with_progress(ctx, input, &NoProgress).await
    }
}
