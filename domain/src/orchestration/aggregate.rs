//! Aggregation of a finished run into its summary message

use crate::orchestration::reasoning_result::ReasoningResult;

/// Message written into a result while its agents are still running
pub const PROVISIONAL_MESSAGE: &str = "running";

/// Message for a run in which at least one agent failed
pub const PARTIAL_FAILURE_MESSAGE: &str =
    "One or more agents failed; inspect the individual agent results for details.";

/// Message for a run with no configured agents
pub const NO_AGENTS_MESSAGE: &str = "No agents configured; nothing was executed.";

/// Renders the summary message for a populated accumulator.
///
/// Any failure collapses the summary to [`PARTIAL_FAILURE_MESSAGE`]; the
/// per-agent detail stays available in the structured results. Otherwise
/// one line per agent is emitted in accumulator order.
pub fn aggregate(result: &ReasoningResult) -> String {
    if result.has_error() {
        return PARTIAL_FAILURE_MESSAGE.to_string();
    }

    let results = result.agent_results();
    if results.is_empty() {
        return NO_AGENTS_MESSAGE.to_string();
    }

    let mut lines = Vec::with_capacity(results.len() + 1);
    lines.push(format!("Reasoning completed by {} agent(s):", results.len()));
    for (key, agent_result) in result.successful_results() {
        lines.push(format!(
            "- {}: {} ({}ms)",
            key, agent_result.output, agent_result.duration_ms
        ));
    }
    lines.join("\n")
}
