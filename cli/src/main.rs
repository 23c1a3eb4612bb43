//! CLI entrypoint for agent-ensemble
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use ensemble_application::{
    AdvancedStrategy, ExecutionStrategy, NoProgress, ProgressNotifier, RunContext,
    collect_chunks_with,
};
use ensemble_domain::{CompletionChunk, OutputFormat, ReasoningInput};
use ensemble_infrastructure::{AgentRegistry, ConfigLoader, FileConfig};
use ensemble_presentation::{Cli, ConsoleFormatter, OutputFormatter, ProgressReporter};
use std::io::Write;
use std::path::Path;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).map_err(|e| anyhow::anyhow!("{}", e))?
    };
    config.validate()?;

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    // Ctrl-C cancels whatever is running
    let ctx = run_context(&cli, &config);
    let interrupt = ctx.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, cancelling run");
            interrupt.cancel();
        }
    });

    if let Some(path) = &cli.replay_chunks {
        return replay_chunks(&ctx, path).await;
    }

    let query = match cli.query.clone() {
        Some(q) => q,
        None => bail!("A query is required. Use --replay-chunks to assemble a chunk stream."),
    };
    let input = ReasoningInput::try_new(query)?;

    // === Dependency Injection ===
    let agents = config.select_agents(&cli.agent);
    for key in &cli.agent {
        if !agents.iter().any(|agent| &agent.key == key) {
            bail!("Agent {:?} is not configured", key);
        }
    }

    let mut execution = config.execution.to_execution_config();
    if cli.sequential {
        execution = execution.with_parallel(false);
    }
    if let Some(seconds) = cli.agent_timeout {
        execution = execution.with_agent_timeout(Some(Duration::from_secs(seconds)));
    }

    let strategy = AdvancedStrategy::new(AgentRegistry::build(&agents), execution)?;
    info!(
        "Running strategy {} with agents: {}",
        strategy.name(),
        strategy.agent_keys().collect::<Vec<_>>().join(", ")
    );

    let reporter;
    let progress: &dyn ProgressNotifier = if cli.quiet {
        &NoProgress
    } else {
        reporter = ProgressReporter::new();
        &reporter
    };

    let result = strategy
        .execute_with_progress(&ctx, input, progress)
        .await?;

    let format = cli
        .output
        .map(OutputFormat::from)
        .or(config.output.format)
        .unwrap_or_default();
    println!("{}", ConsoleFormatter.render(&result, format));

    Ok(())
}

/// Combine the run deadline from the command line or config
fn run_context(cli: &Cli, config: &FileConfig) -> RunContext {
    let timeout = cli
        .timeout
        .map(Duration::from_secs)
        .or_else(|| config.execution.run_timeout());

    match timeout {
        Some(timeout) => RunContext::new().with_timeout(timeout),
        None => RunContext::new(),
    }
}

/// Read JSONL completion chunks and print the assembled text as it arrives
async fn replay_chunks(ctx: &RunContext, path: &Path) -> Result<()> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let chunks = content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(n, line)| {
            serde_json::from_str::<CompletionChunk>(line)
                .with_context(|| format!("Invalid chunk on line {}", n + 1))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut stdout = std::io::stdout();
    let collected = collect_chunks_with(ctx, futures::stream::iter(chunks), |delta| {
        let _ = write!(stdout, "{}", delta);
        let _ = stdout.flush();
    })
    .await?;
    println!();

    match collected.finish_reason {
        Some(reason) => info!("Stream finished ({}) after {} chunks", reason, collected.chunks),
        None => warn!("Stream ended without a finish reason after {} chunks", collected.chunks),
    }
    Ok(())
}
