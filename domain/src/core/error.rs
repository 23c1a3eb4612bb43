//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid agent key: {0:?}")]
    InvalidAgentKey(String),

    #[error("Invalid reasoning input: {0}")]
    InvalidInput(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let error = DomainError::InvalidInput("query cannot be empty".to_string());
        assert_eq!(error.to_string(), "Invalid reasoning input: query cannot be empty");
    }

    #[test]
    fn test_invalid_agent_key_display_quotes_key() {
        let error = DomainError::InvalidAgentKey(" ".to_string());
        assert_eq!(error.to_string(), "Invalid agent key: \" \"");
    }
}
