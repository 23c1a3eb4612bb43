//! Domain layer for agent-ensemble
//!
//! This crate contains the data model of an orchestration run and of
//! streamed agent output. It has no dependencies on an async runtime,
//! infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Orchestration run
//!
//! One reasoning request is handed to every configured agent. Each agent
//! produces an [`AgentResult`]; the results are collected into a
//! [`ReasoningResult`] keyed by agent key, and [`aggregate`] renders the
//! final summary.
//!
//! ## Chunk streams
//!
//! A single agent may stream its answer as [`CompletionChunk`]s. A
//! [`ChunkAccumulator`] assembles the text and detects the end of the
//! stream.

pub mod agent;
pub mod config;
pub mod core;
pub mod orchestration;
pub mod session;

// Re-export commonly used types
pub use agent::{key::validate_agent_key, result::AgentResult};
pub use config::OutputFormat;
pub use core::{error::DomainError, input::ReasoningInput};
pub use orchestration::{
    aggregate::{NO_AGENTS_MESSAGE, PARTIAL_FAILURE_MESSAGE, PROVISIONAL_MESSAGE, aggregate},
    reasoning_result::{AgentResults, ReasoningResult},
};
pub use session::{
    chunk::{CHAT_COMPLETION_CHUNK_OBJECT, ChunkChoice, ChunkDelta, CompletionChunk},
    stream::{ChunkAccumulator, StreamError, StreamState},
};
