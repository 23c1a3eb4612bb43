//! Agent domain module
//!
//! Agents themselves live behind the application-layer port; the domain
//! only knows what an invocation produces and how results are keyed.

pub mod key;
pub mod result;

pub use key::validate_agent_key;
pub use result::AgentResult;
