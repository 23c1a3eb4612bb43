//! Agent capability port
//!
//! Defines the interface every agent implementation (subprocess-backed,
//! hosted-model-backed, ...) exposes to the orchestrator.

use crate::context::{ContextError, RunContext};
use async_trait::async_trait;
use ensemble_domain::{AgentResult, ReasoningInput};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Errors an agent invocation can end with
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AgentError {
    #[error("Agent failed: {0}")]
    Failed(String),

    #[error("Agent unavailable: {0}")]
    Unavailable(String),

    #[error("cancelled")]
    Cancelled,

    #[error("deadline exceeded")]
    DeadlineExceeded,

    #[error("Timed out after {}ms", .0.as_millis())]
    Timeout(Duration),
}

impl From<ContextError> for AgentError {
    fn from(err: ContextError) -> Self {
        match err {
            ContextError::Cancelled => AgentError::Cancelled,
            ContextError::DeadlineExceeded => AgentError::DeadlineExceeded,
        }
    }
}

/// A unit of work that answers a reasoning input
///
/// Implementations live in the infrastructure layer. An implementation may
/// report failure either as `Err` or as an `AgentResult` with
/// `success = false`; the orchestrator records both as data.
#[async_trait]
pub trait Agent: Send + Sync {
    /// Name reported in results produced for this agent
    fn name(&self) -> &str;

    /// Answer the input. Implementations should stop early once `ctx` is done.
    async fn execute(
        &self,
        ctx: &RunContext,
        input: &ReasoningInput,
    ) -> Result<AgentResult, AgentError>;
}

/// What a configured agent key is bound to
#[derive(Clone)]
pub enum AgentBinding {
    /// A usable agent capability
    Ready(Arc<dyn Agent>),
    /// No capability could be wired for this key
    NotConfigured { reason: String },
}

impl AgentBinding {
    pub fn ready(agent: impl Agent + 'static) -> Self {
        AgentBinding::Ready(Arc::new(agent))
    }

    pub fn not_configured(reason: impl Into<String>) -> Self {
        AgentBinding::NotConfigured {
            reason: reason.into(),
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, AgentBinding::Ready(_))
    }
}

impl fmt::Debug for AgentBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgentBinding::Ready(agent) => f.debug_tuple("Ready").field(&agent.name()).finish(),
            AgentBinding::NotConfigured { reason } => f
                .debug_struct("NotConfigured")
                .field("reason", reason)
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NamedAgent;

    #[async_trait]
    impl Agent for NamedAgent {
        fn name(&self) -> &str {
            "named"
        }

        async fn execute(
            &self,
            _ctx: &RunContext,
            input: &ReasoningInput,
        ) -> Result<AgentResult, AgentError> {
            Ok(AgentResult::success(self.name(), input.query()))
        }
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            AgentError::Timeout(Duration::from_millis(1500)).to_string(),
            "Timed out after 1500ms"
        );
        assert_eq!(AgentError::Cancelled.to_string(), "cancelled");
        assert_eq!(
            AgentError::Failed("exit status 2".to_string()).to_string(),
            "Agent failed: exit status 2"
        );
    }

    #[test]
    fn test_context_error_conversion() {
        assert_eq!(AgentError::from(ContextError::Cancelled), AgentError::Cancelled);
        assert_eq!(
            AgentError::from(ContextError::DeadlineExceeded),
            AgentError::DeadlineExceeded
        );
    }

    #[test]
    fn test_binding_debug_and_readiness() {
        let ready = AgentBinding::ready(NamedAgent);
        assert!(ready.is_ready());
        assert_eq!(format!("{:?}", ready), "Ready(\"named\")");

        let missing = AgentBinding::not_configured("no adapter");
        assert!(!missing.is_ready());
        assert!(format!("{:?}", missing).contains("no adapter"));
    }

    #[tokio::test]
    async fn test_agent_trait_object() {
        let agent: Arc<dyn Agent> = Arc::new(NamedAgent);
        let result = agent
            .execute(&RunContext::new(), &ReasoningInput::new("ping"))
            .await
            .unwrap();
        assert_eq!(result.output, "ping");
        assert_eq!(result.agent_name, "named");
    }
}
