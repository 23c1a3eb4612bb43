//! Output format value object

use serde::{Deserialize, Serialize};

/// How a reasoning result is rendered for the caller
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Per-agent breakdown followed by the summary
    Full,
    /// Only the aggregated summary (default)
    #[default]
    Summary,
    /// JSON output
    Json,
}
