//! Error type for strategy lookup.

use std::fmt;

/// Returned when a strategy name is not in the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStrategyError {
    /// The name that was requested
    pub name: String,
}

impl UnknownStrategyError {
    /// Create an error for the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for UnknownStrategyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown processor: {}", self.name)
    }
}

impl std::error::Error for UnknownStrategyError {}
