use thiserror::Error;

/// Configuration errors raised when resolving sender options or
/// validating the application configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is unset or empty
    #[error("Missing configuration: environment variable {var} is not set or empty")]
    MissingConfiguration {
        /// Variable name
        var: String,
    },

    /// Unknown log level
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// Unknown log format
    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    /// Any other rejected setting
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

impl ConfigError {
    /// Build a `MissingConfiguration` error for the given variable name
    pub fn missing(var: impl Into<String>) -> Self {
        Self::MissingConfiguration { var: var.into() }
    }
}
