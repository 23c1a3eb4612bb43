//! Orchestration domain
//!
//! The per-run accumulator and the pure aggregation that turns it into
//! a summary message.

pub mod aggregate;
pub mod reasoning_result;
