//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for reasoning results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Per-agent breakdown followed by the summary
    Full,
    /// Only the aggregated summary
    Summary,
    /// JSON output
    Json,
}

impl From<OutputFormat> for ensemble_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => ensemble_domain::OutputFormat::Full,
            OutputFormat::Summary => ensemble_domain::OutputFormat::Summary,
            OutputFormat::Json => ensemble_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for agent-ensemble
#[derive(Parser, Debug)]
#[command(name = "agent-ensemble")]
#[command(author, version, about = "Run one reasoning request across several agents")]
#[command(long_about = r#"
agent-ensemble hands one reasoning request to every configured agent,
runs them in parallel (or one after another with --sequential), and
prints an aggregated summary with a per-agent breakdown.

Agents are declared in configuration files, loaded from (in priority order):
1. AGENT_ENSEMBLE_* environment variables
2. --config <path>     Explicit config file
3. ./ensemble.toml     Project-level config
4. ~/.config/agent-ensemble/config.toml   Global config

Example:
  agent-ensemble "Which cache eviction policy fits this workload?"
  agent-ensemble --agent adk_agent --sequential -o full "Explain the trade-offs"
  agent-ensemble --replay-chunks stream.jsonl
"#)]
pub struct Cli {
    /// The reasoning request to send to every agent
    pub query: Option<String>,

    /// Only run these configured agents (can be specified multiple times)
    #[arg(short, long, value_name = "KEY")]
    pub agent: Vec<String>,

    /// Run agents one at a time in configured order
    #[arg(long)]
    pub sequential: bool,

    /// Deadline for the whole run, in seconds
    #[arg(long, value_name = "SECONDS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Upper bound for each agent, in seconds
    #[arg(long, value_name = "SECONDS", value_parser = clap::value_parser!(u64).range(1..))]
    pub agent_timeout: Option<u64>,

    /// Output format (defaults to the configured format, then summary)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Assemble a JSONL file of completion chunks and print the text
    #[arg(long, value_name = "PATH")]
    pub replay_chunks: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
