//! Agent registry: binds configured agents to adapters.
//!
//! Every configured key gets a binding. Kinds without an adapter in this
//! build, and adapters whose settings don't parse, are bound as
//! [`AgentBinding::NotConfigured`] so that building a strategy fails
//! instead of running with a stand-in.

use super::echo::EchoAgent;
use crate::config::FileAgentConfig;
use ensemble_application::AgentBinding;
use tracing::{debug, warn};

pub struct AgentRegistry;

impl AgentRegistry {
    /// Bind every configured agent, keeping configuration order
    pub fn build(configs: &[FileAgentConfig]) -> Vec<(String, AgentBinding)> {
        configs
            .iter()
            .map(|config| (config.key.clone(), Self::bind(config)))
            .collect()
    }

    pub fn bind(config: &FileAgentConfig) -> AgentBinding {
        match config.kind.as_str() {
            EchoAgent::KIND => match EchoAgent::from_settings(&config.key, &config.settings) {
                Ok(agent) => {
                    debug!("Bound agent {} to the echo adapter", config.key);
                    AgentBinding::ready(agent)
                }
                Err(e) => {
                    warn!("Agent {} has invalid settings: {}", config.key, e);
                    AgentBinding::not_configured(format!("invalid echo settings: {}", e))
                }
            },
            other => {
                warn!("No adapter for agent {} (kind {:?})", config.key, other);
                AgentBinding::not_configured(format!(
                    "no adapter available for agent kind {:?}",
                    other
                ))
            }
        }
    }

    /// Kinds this build can bind
    pub fn supported_kinds() -> &'static [&'static str] {
        &[EchoAgent::KIND]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ensemble_application::{AdvancedStrategy, ExecutionConfig, StrategyBuildError};

    #[test]
    fn test_build_keeps_order_and_binds_echo() {
        let bindings = AgentRegistry::build(&[
            FileAgentConfig::new("second", "echo"),
            FileAgentConfig::new("first", "echo").with_setting("prefix", "1: "),
        ]);

        let keys: Vec<_> = bindings.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["second", "first"]);
        assert!(bindings.iter().all(|(_, b)| b.is_ready()));
    }

    #[test]
    fn test_unknown_kind_is_not_configured() {
        let binding = AgentRegistry::bind(&FileAgentConfig::new("py", "subprocess"));
        match binding {
            AgentBinding::NotConfigured { reason } => {
                assert_eq!(reason, "no adapter available for agent kind \"subprocess\"");
            }
            AgentBinding::Ready(_) => panic!("subprocess kind should not bind"),
        }
    }

    #[test]
    fn test_invalid_settings_are_not_configured() {
        let binding = AgentRegistry::bind(
            &FileAgentConfig::new("adk", "echo").with_setting("delay_ms", "later"),
        );
        assert!(!binding.is_ready());
    }

    #[test]
    fn test_missing_adapter_fails_strategy_construction() {
        let bindings = AgentRegistry::build(&[
            FileAgentConfig::new("adk_agent", "echo"),
            FileAgentConfig::new("openai_agent", "hosted_model"),
        ]);

        let err = AdvancedStrategy::new(bindings, ExecutionConfig::default())
            .err()
            .unwrap();
        assert!(matches!(
            err,
            StrategyBuildError::AgentUnavailable { ref key, .. } if key == "openai_agent"
        ));
    }

    #[test]
    fn test_supported_kinds() {
        assert_eq!(AgentRegistry::supported_kinds(), &["echo"]);
    }
}
