//! Progress reporting for orchestration runs

use colored::Colorize;
use ensemble_application::ProgressNotifier;
use ensemble_domain::{AgentResult, ReasoningResult};
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::Mutex;

/// Reports progress during a run with a progress bar
pub struct ProgressReporter {
    multi: MultiProgress,
    run_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self::with_draw_target(ProgressDrawTarget::stderr())
    }

    /// Draw somewhere other than stderr (e.g. hidden)
    pub fn with_draw_target(target: ProgressDrawTarget) -> Self {
        Self {
            multi: MultiProgress::with_draw_target(target),
            run_bar: Mutex::new(None),
        }
    }

    fn run_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_run_start(&self, strategy: &str, total_agents: usize) {
        let pb = self.multi.add(ProgressBar::new(total_agents as u64));
        pb.set_style(Self::run_style());
        pb.set_prefix(format!("Strategy {}", strategy));
        pb.set_message("Starting...");

        if let Ok(mut slot) = self.run_bar.lock() {
            *slot = Some(pb);
        }
    }

    fn on_agent_complete(&self, key: &str, result: &AgentResult) {
        if let Ok(slot) = self.run_bar.lock()
            && let Some(pb) = slot.as_ref()
        {
            let status = if result.success {
                format!("{} {}", "v".green(), key)
            } else {
                format!("{} {}", "x".red(), key)
            };
            pb.set_message(status);
            pb.inc(1);
        }
    }

    fn on_run_complete(&self, result: &ReasoningResult) {
        if let Ok(mut slot) = self.run_bar.lock()
            && let Some(pb) = slot.take()
        {
            let message = if result.has_error() {
                "completed with failures".yellow()
            } else {
                "complete!".green()
            };
            pb.finish_with_message(message.to_string());
        }
    }
}
