//! Console output formatter for reasoning results

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use ensemble_domain::ReasoningResult;

/// Formats reasoning results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete result
    pub fn format(result: &ReasoningResult) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Agent Ensemble Results"));
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n",
            "Workflow:".cyan().bold(),
            result.workflow_name()
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Agents:".cyan().bold(),
            result.agent_results().keys().collect::<Vec<_>>().join(", ")
        ));

        output.push_str(&Self::section_header("Agent Results"));
        for (key, agent_result) in result.agent_results().iter() {
            let title = format!("── {} ({}ms) ──", key, agent_result.duration_ms);
            if agent_result.success {
                output.push_str(&format!(
                    "\n{}\n{}\n",
                    title.yellow().bold(),
                    agent_result.output
                ));
            } else {
                output.push_str(&format!(
                    "\n{}\nError: {}\n",
                    title.red().bold(),
                    agent_result.error.as_deref().unwrap_or("Unknown")
                ));
            }
        }

        output.push_str(&Self::section_header("Summary"));
        output.push_str(&format!("\n{}\n", result.message()));

        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    pub fn format_json(result: &ReasoningResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the aggregated summary only (concise output)
    pub fn format_summary(result: &ReasoningResult) -> String {
        let status = if result.has_error() {
            "=== Partial failure ===".red().bold()
        } else {
            "=== Summary ===".cyan().bold()
        };
        format!("{}\n\n{}\n", status, result.message())
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, result: &ReasoningResult) -> String {
        Self::format(result)
    }

    fn format_json(&self, result: &ReasoningResult) -> String {
        Self::format_json(result)
    }

    fn format_summary(&self, result: &ReasoningResult) -> String {
        Self::format_summary(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ensemble_domain::{AgentResult, OutputFormat, PARTIAL_FAILURE_MESSAGE, aggregate};

    fn sample(with_failure: bool) -> ReasoningResult {
        let mut result = ReasoningResult::new("advanced", "running");
        result.add_agent_result(
            "adk_agent",
            AgentResult::success("adk", "ok").with_duration_ms(100),
        );
        let second = if with_failure {
            AgentResult::failure("openai", "connection reset").with_duration_ms(12)
        } else {
            AgentResult::success("openai", "fine").with_duration_ms(50)
        };
        result.add_agent_result("openai_agent", second);
        result.set_message(aggregate(&result));
        result
    }

    #[test]
    fn test_full_lists_agents_in_order() {
        let output = ConsoleFormatter::format(&sample(false));
        assert!(output.contains("adk_agent (100ms)"));
        assert!(output.contains("openai_agent (50ms)"));
        assert!(output.find("adk_agent (100ms)") < output.find("openai_agent (50ms)"));
        assert!(output.contains("- openai_agent: fine (50ms)"));
    }

    #[test]
    fn test_full_shows_failure_detail() {
        let output = ConsoleFormatter::format(&sample(true));
        assert!(output.contains("Error: connection reset"));
        assert!(output.contains(PARTIAL_FAILURE_MESSAGE));
    }

    #[test]
    fn test_summary_contains_message() {
        let output = ConsoleFormatter::format_summary(&sample(false));
        assert!(output.contains("Reasoning completed by 2 agent(s):"));
    }

    #[test]
    fn test_json_exposes_structured_breakdown() {
        let output = ConsoleFormatter.render(&sample(true), OutputFormat::Json);
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["workflow_name"], "advanced");
        assert_eq!(json["message"], PARTIAL_FAILURE_MESSAGE);
        assert_eq!(json["agent_results"]["openai_agent"]["success"], false);
        assert_eq!(json["agent_results"]["adk_agent"]["duration_ms"], 100);
    }
}
