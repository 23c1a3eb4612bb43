//! Echo agent: answers with the query it was given.
//!
//! Useful for wiring checks and demos: it exercises the full orchestration
//! path without any external process or network dependency.

use super::settings::{SettingsError, string_setting, u64_setting};
use async_trait::async_trait;
use ensemble_application::{Agent, AgentError, RunContext};
use ensemble_domain::{AgentResult, ReasoningInput};
use serde_json::Value;
use std::collections::BTreeMap;
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

/// Agent that returns `prefix + query` after an optional delay
#[derive(Debug, Clone)]
pub struct EchoAgent {
    name: String,
    prefix: String,
    delay: Duration,
}

impl EchoAgent {
    /// Kind name used in configuration files
    pub const KIND: &'static str = "echo";

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prefix: String::new(),
            delay: Duration::ZERO,
        }
    }

    /// Build from a `settings` table (`prefix`, `delay_ms`)
    pub fn from_settings(
        name: impl Into<String>,
        settings: &BTreeMap<String, Value>,
    ) -> Result<Self, SettingsError> {
        let mut agent = Self::new(name);
        if let Some(prefix) = string_setting(settings, "prefix")? {
            agent = agent.with_prefix(prefix);
        }
        if let Some(delay_ms) = u64_setting(settings, "delay_ms")? {
            agent = agent.with_delay(Duration::from_millis(delay_ms));
        }
        Ok(agent)
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[async_trait]
impl Agent for EchoAgent {
    fn name(&self) -> &str {
        &self.name
    }

    async fn execute(
        &self,
        ctx: &RunContext,
        input: &ReasoningInput,
    ) -> Result<AgentResult, AgentError> {
        let started = Instant::now();

        if !self.delay.is_zero() {
            tokio::select! {
                biased;
                reason = ctx.done() => return Err(reason.into()),
                _ = tokio::time::sleep(self.delay) => {}
            }
        }

        debug!("{} echoing {} bytes", self.name, input.query().len());
        Ok(
            AgentResult::success(&self.name, format!("{}{}", self.prefix, input.query()))
                .with_duration(started.elapsed()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_echoes_with_prefix() {
        let agent = EchoAgent::new("echo").with_prefix("> ");
        let result = agent
            .execute(&RunContext::new(), &ReasoningInput::new("hello"))
            .await
            .unwrap();

        assert!(result.success);
        assert_eq!(result.agent_name, "echo");
        assert_eq!(result.output, "> hello");
    }

    #[tokio::test(start_paused = true)]
    async fn test_delay_is_reported_as_duration() {
        let agent = EchoAgent::new("echo").with_delay(Duration::from_millis(40));
        let result = agent
            .execute(&RunContext::new(), &ReasoningInput::new("hi"))
            .await
            .unwrap();
        assert!(result.duration_ms >= 40);
    }

    #[tokio::test(start_paused = true)]
    async fn test_delay_honours_cancellation() {
        let agent = EchoAgent::new("echo").with_delay(Duration::from_secs(60));
        let ctx = RunContext::new();
        ctx.cancel();

        let err = agent
            .execute(&ctx, &ReasoningInput::new("hi"))
            .await
            .unwrap_err();
        assert_eq!(err, AgentError::Cancelled);
    }

    #[test]
    fn test_from_settings() {
        let mut settings = BTreeMap::new();
        settings.insert("prefix".to_string(), Value::from("adk: "));
        settings.insert("delay_ms".to_string(), Value::from(100));

        let agent = EchoAgent::from_settings("adk", &settings).unwrap();
        assert_eq!(agent.prefix, "adk: ");
        assert_eq!(agent.delay, Duration::from_millis(100));

        settings.insert("delay_ms".to_string(), Value::from("soon"));
        assert!(EchoAgent::from_settings("adk", &settings).is_err());
    }
}
