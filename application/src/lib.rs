//! Application layer for agent-ensemble
//!
//! This crate contains use cases, port definitions, the run context and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod context;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ExecutionConfig;
pub use context::{ContextError, RunContext};
pub use ports::{
    agent::{Agent, AgentBinding, AgentError},
    progress::{NoProgress, ProgressNotifier},
};
pub use use_cases::collect_stream::{
    CollectStreamError, CollectedStream, collect_chunks, collect_chunks_with,
};
pub use use_cases::run_reasoning::{
    ADVANCED_STRATEGY_NAME, AdvancedStrategy, ExecutionStrategy, RunReasoningError,
    StrategyBuildError,
};
