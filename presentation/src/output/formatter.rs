//! Output formatter trait

use ensemble_domain::{OutputFormat, ReasoningResult};

/// Trait for formatting reasoning results
pub trait OutputFormatter {
    /// Per-agent breakdown followed by the summary
    fn format(&self, result: &ReasoningResult) -> String;

    /// Format as JSON
    fn format_json(&self, result: &ReasoningResult) -> String;

    /// Aggregated summary only
    fn format_summary(&self, result: &ReasoningResult) -> String;

    /// Dispatch on an output format
    fn render(&self, result: &ReasoningResult, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => self.format(result),
            OutputFormat::Summary => self.format_summary(result),
            OutputFormat::Json => self.format_json(result),
        }
    }
}
