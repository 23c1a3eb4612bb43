//! Infrastructure layer for agent-ensemble
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod agents;
pub mod config;

// Re-export commonly used types
pub use agents::{AgentRegistry, EchoAgent, SettingsError};
pub use config::{
    ConfigLoader, ConfigValidationError, FileAgentConfig, FileConfig, FileExecutionConfig,
    FileOutputConfig, FileOutputFormat,
};
