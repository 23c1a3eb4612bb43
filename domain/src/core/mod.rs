//! Core domain concepts shared across all subdomains.
//!
//! - [`input::ReasoningInput`]: the request every agent of a run receives
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod input;
