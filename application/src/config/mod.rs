//! Application-level configuration.
//!
//! - [`ExecutionConfig`]: parallel vs sequential execution, per-agent timeout

pub mod execution_config;

pub use execution_config::ExecutionConfig;
