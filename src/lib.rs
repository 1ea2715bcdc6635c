//! Sender options for a transactional-email client
//!
//! Provides the sender display name and the API key, read from the
//! `SENDGRID_API_KEY` environment variable, that an email client uses to
//! authenticate.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): sender and application configuration models, environment port
//! - **Service Layer** (`services`): key-policy aware resolution
//! - **Infrastructure Layer** (`infrastructure`): environment adapters, config loading, logging
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```no_run
//! use sender_options::SenderConfiguration;
//!
//! let sender = SenderConfiguration::create();
//! println!("{} ({} key)", sender.display_name(), if sender.has_api_key() { "with" } else { "no" });
//! ```

/// Command-line interface
pub mod cli;
/// Domain models, errors and ports
pub mod domain;
/// Adapters for environment, configuration and logging
pub mod infrastructure;
/// Service layer
pub mod services;

// Re-export commonly used types for convenience
pub use domain::models::{
    Config, KeyPolicy, LoggingConfig, SenderConfiguration, API_KEY_ENV_VAR, SENDER_DISPLAY_NAME,
};
pub use domain::ports::EnvironmentPort;
pub use domain::ConfigError;
pub use infrastructure::config::ConfigLoader;
pub use infrastructure::credentials::{ProcessEnvironment, StaticEnvironment};
pub use services::SenderService;
