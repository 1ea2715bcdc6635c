//! Sender configuration: the display name and API key handed to the
//! transactional-email client.

use serde::Serialize;

use crate::domain::error::ConfigError;
use crate::domain::ports::EnvironmentPort;

/// Display name every message is sent under. Change it here.
pub const SENDER_DISPLAY_NAME: &str = "BitsRUs";

/// Environment variable holding the API key.
pub const API_KEY_ENV_VAR: &str = "SENDGRID_API_KEY";

/// Immutable sender display name and API key.
///
/// The key is read once at construction. An unset variable yields an empty
/// key rather than an error; use [`SenderConfiguration::require_api_key`]
/// when the key must be present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SenderConfiguration {
    display_name: String,
    api_key: String,
}

impl SenderConfiguration {
    /// Build from an explicitly supplied environment.
    ///
    /// `SenderConfiguration::create` is the process-environment shorthand.
    pub fn from_environment<E: EnvironmentPort + ?Sized>(env: &E) -> Self {
        Self {
            display_name: SENDER_DISPLAY_NAME.to_string(),
            api_key: env.get_var_or(API_KEY_ENV_VAR, ""),
        }
    }

    /// The fixed sender display name.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// The API key, empty when the variable was unset.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Whether a non-empty key was found.
    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// The API key, or `MissingConfiguration` when it is empty.
    pub fn require_api_key(&self) -> Result<&str, ConfigError> {
        if self.has_api_key() {
            Ok(&self.api_key)
        } else {
            Err(ConfigError::missing(API_KEY_ENV_VAR))
        }
    }
}
