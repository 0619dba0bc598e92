//! Forecast error types

use thiserror::Error;

/// Errors raised while building or validating an engine configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Unknown locale identifier
    #[error("Unknown locale: {0}")]
    UnknownLocale(String),

    /// Unknown scenario name
    #[error("Unknown scenario: {0}")]
    UnknownScenario(String),
}

impl ForecastError {
    pub fn invalid(name: impl Into<String>, reason: impl Into<String>) -> Self {
        ForecastError::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
