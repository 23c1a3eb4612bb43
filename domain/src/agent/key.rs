//! Agent key validation

use crate::core::error::DomainError;

/// Validates the key an agent's result is stored under.
///
/// Keys must be non-blank and carry no surrounding whitespace, since they
/// are rendered verbatim in summaries and used as JSON object keys.
pub fn validate_agent_key(key: &str) -> Result<(), DomainError> {
    if key.trim().is_empty() || key.trim() != key {
        return Err(DomainError::InvalidAgentKey(key.to_string()));
    }
    Ok(())
}
