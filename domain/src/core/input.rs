//! Reasoning input value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// The request handed uniformly to every agent of a run (Value Object)
///
/// Agents treat the payload as opaque: the orchestrator never inspects it,
/// it only shares it read-only for the duration of one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReasoningInput {
    query: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    parameters: BTreeMap<String, Value>,
}

impl ReasoningInput {
    /// Create an input carrying only a query
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            parameters: BTreeMap::new(),
        }
    }

    /// Create an input, rejecting a blank query
    pub fn try_new(query: impl Into<String>) -> Result<Self, DomainError> {
        let query = query.into();
        if query.trim().is_empty() {
            return Err(DomainError::InvalidInput(
                "query cannot be empty".to_string(),
            ));
        }
        Ok(Self::new(query))
    }

    /// Attach an agent-specific parameter
    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.parameters.insert(key.into(), value.into());
        self
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn parameter(&self, key: &str) -> Option<&Value> {
        self.parameters.get(key)
    }

    pub fn parameters(&self) -> &BTreeMap<String, Value> {
        &self.parameters
    }
}

impl std::fmt::Display for ReasoningInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.query)
    }
}

impl From<&str> for ReasoningInput {
    fn from(s: &str) -> Self {
        ReasoningInput::new(s)
    }
}

impl From<String> for ReasoningInput {
    fn from(s: String) -> Self {
        ReasoningInput::new(s)
    }
}
