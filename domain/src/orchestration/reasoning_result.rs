//! Reasoning result accumulator
//!
//! [`ReasoningResult`] is created at the start of a run, filled by the
//! orchestrator one agent at a time, finalized with the aggregated message
//! and then handed to the caller. Its per-agent map keeps insertion order
//! explicitly so that rendering is deterministic.

use crate::agent::result::AgentResult;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// Agent results keyed by agent key, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgentResults {
    entries: Vec<(String, AgentResult)>,
    index: HashMap<String, usize>,
}

impl AgentResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a result under `key`.
    ///
    /// Re-inserting an existing key replaces the stored result but keeps
    /// the key's original position.
    pub fn insert(&mut self, key: impl Into<String>, result: AgentResult) {
        let key = key.into();
        match self.index.get(&key) {
            Some(&position) => self.entries[position].1 = result,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, result));
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&AgentResult> {
        self.index.get(key).map(|&position| &self.entries[position].1)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Iterate `(key, result)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AgentResult)> {
        self.entries
            .iter()
            .map(|(key, result)| (key.as_str(), result))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for AgentResults {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, result) in &self.entries {
            map.serialize_entry(key, result)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for AgentResults {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AgentResultsVisitor;

        impl<'de> Visitor<'de> for AgentResultsVisitor {
            type Value = AgentResults;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of agent keys to agent results")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut results = AgentResults::new();
                while let Some((key, result)) = access.next_entry::<String, AgentResult>()? {
                    results.insert(key, result);
                }
                Ok(results)
            }
        }

        deserializer.deserialize_map(AgentResultsVisitor)
    }
}

/// Complete result of one orchestration run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReasoningResult {
    workflow_name: String,
    message: String,
    agent_results: AgentResults,
}

impl ReasoningResult {
    /// Creates an empty accumulator tagged with the workflow that owns it.
    pub fn new(workflow_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            workflow_name: workflow_name.into(),
            message: message.into(),
            agent_results: AgentResults::new(),
        }
    }

    pub fn add_agent_result(&mut self, key: impl Into<String>, result: AgentResult) {
        self.agent_results.insert(key, result);
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    pub fn workflow_name(&self) -> &str {
        &self.workflow_name
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn agent_results(&self) -> &AgentResults {
        &self.agent_results
    }

    pub fn agent_result(&self, key: &str) -> Option<&AgentResult> {
        self.agent_results.get(key)
    }

    /// Returns `true` if at least one agent failed.
    pub fn has_error(&self) -> bool {
        self.agent_results.iter().any(|(_, result)| !result.success)
    }

    /// Returns an iterator over only the successful agent results.
    pub fn successful_results(&self) -> impl Iterator<Item = (&str, &AgentResult)> {
        self.agent_results.iter().filter(|(_, r)| r.success)
    }

    /// Returns an iterator over only the failed agent results.
    pub fn failed_results(&self) -> impl Iterator<Item = (&str, &AgentResult)> {
        self.agent_results.iter().filter(|(_, r)| !r.success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(name: &str) -> AgentResult {
        AgentResult::success(name, "ok")
    }

    fn failed(name: &str) -> AgentResult {
        AgentResult::failure(name, "boom")
    }

    #[test]
    fn test_has_error_with_no_results() {
        let result = ReasoningResult::new("advanced", "running");
        assert!(!result.has_error());
        assert!(result.agent_results().is_empty());
    }

    #[test]
    fn test_has_error_tracks_any_failure() {
        let mut all_ok = ReasoningResult::new("advanced", "");
        all_ok.add_agent_result("a", ok("a"));
        all_ok.add_agent_result("b", ok("b"));
        assert!(!all_ok.has_error());

        let mut one_failed = ReasoningResult::new("advanced", "");
        one_failed.add_agent_result("a", ok("a"));
        one_failed.add_agent_result("b", failed("b"));
        assert!(one_failed.has_error());

        let mut all_failed = ReasoningResult::new("advanced", "");
        all_failed.add_agent_result("a", failed("a"));
        all_failed.add_agent_result("b", failed("b"));
        assert!(all_failed.has_error());
        assert_eq!(all_failed.failed_results().count(), 2);
        assert_eq!(all_failed.successful_results().count(), 0);
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut result = ReasoningResult::new("advanced", "");
        for key in ["zeta", "alpha", "mid"] {
            result.add_agent_result(key, ok(key));
        }
        let keys: Vec<_> = result.agent_results().keys().collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_reinsert_replaces_in_place() {
        let mut result = ReasoningResult::new("advanced", "");
        result.add_agent_result("a", ok("a"));
        result.add_agent_result("b", ok("b"));
        result.add_agent_result("a", failed("a"));

        let keys: Vec<_> = result.agent_results().keys().collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(result.agent_results().len(), 2);
        assert!(!result.agent_result("a").unwrap().success);
        assert!(result.has_error());
    }

    #[test]
    fn test_serialization_keeps_order_and_field_names() {
        let mut result = ReasoningResult::new("advanced", "done");
        result.add_agent_result("openai_agent", ok("openai"));
        result.add_agent_result("adk_agent", ok("adk"));

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.starts_with(r#"{"workflow_name":"advanced","message":"done","agent_results":{"openai_agent""#));
        assert!(json.find("openai_agent").unwrap() < json.find("adk_agent").unwrap());

        let parsed: ReasoningResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, result);
        let keys: Vec<_> = parsed.agent_results().keys().collect();
        assert_eq!(keys, vec!["openai_agent", "adk_agent"]);
    }
}
