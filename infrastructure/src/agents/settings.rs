//! Typed access to an agent's free-form `settings` table

use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

/// A setting was present but had the wrong shape
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("setting {name:?} must be {expected}")]
pub struct SettingsError {
    pub name: String,
    pub expected: &'static str,
}

pub(crate) fn string_setting(
    settings: &BTreeMap<String, Value>,
    name: &str,
) -> Result<Option<String>, SettingsError> {
    match settings.get(name) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(SettingsError {
            name: name.to_string(),
            expected: "a string",
        }),
    }
}

pub(crate) fn u64_setting(
    settings: &BTreeMap<String, Value>,
    name: &str,
) -> Result<Option<u64>, SettingsError> {
    match settings.get(name) {
        None => Ok(None),
        Some(value) => value.as_u64().map(Some).ok_or_else(|| SettingsError {
            name: name.to_string(),
            expected: "a non-negative integer",
        }),
    }
}
