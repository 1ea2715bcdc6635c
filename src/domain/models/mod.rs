//! Domain models: the sender configuration and the application configuration.

/// Application configuration model
pub mod config;
/// Sender display name and API key
pub mod sender;

pub use config::{Config, KeyPolicy, LoggingConfig, RotationPolicy};
pub use sender::{SenderConfiguration, API_KEY_ENV_VAR, SENDER_DISPLAY_NAME};
