//! Use cases (application services)
//!
//! - [`run_reasoning`]: run all configured agents and aggregate their results
//! - [`collect_stream`]: assemble a chunk stream into text

pub mod collect_stream;
pub mod run_reasoning;
