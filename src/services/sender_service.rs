use tracing::{debug, instrument, warn};

use crate::domain::error::ConfigError;
use crate::domain::models::config::KeyPolicy;
use crate::domain::models::sender::{SenderConfiguration, API_KEY_ENV_VAR};
use crate::domain::ports::EnvironmentPort;
use crate::infrastructure::credentials::ProcessEnvironment;

/// Resolves sender options from an environment under a key policy.
pub struct SenderService<E: EnvironmentPort> {
    env: E,
    policy: KeyPolicy,
}

impl SenderService<ProcessEnvironment> {
    /// Service reading the process environment.
    pub const fn from_process(policy: KeyPolicy) -> Self {
        Self::new(ProcessEnvironment, policy)
    }
}

impl<E: EnvironmentPort> SenderService<E> {
    /// Service over `env` applying `policy`.
    pub const fn new(env: E, policy: KeyPolicy) -> Self {
        Self { env, policy }
    }

    /// The policy applied by `resolve`.
    pub const fn policy(&self) -> KeyPolicy {
        self.policy
    }

    /// Build a fresh `SenderConfiguration`.
    ///
    /// With `KeyPolicy::Required` an empty key is an error; with
    /// `KeyPolicy::Optional` it is logged and returned as-is.
    #[instrument(skip(self), fields(policy = ?self.policy))]
    pub fn resolve(&self) -> Result<SenderConfiguration, ConfigError> {
        let config = SenderConfiguration::from_environment(&self.env);

        debug!(
            display_name = config.display_name(),
            api_key_present = config.has_api_key(),
            "resolved sender configuration"
        );

        if !config.has_api_key() {
            match self.policy {
                KeyPolicy::Required => return Err(ConfigError::missing(API_KEY_ENV_VAR)),
                KeyPolicy::Optional => {
                    warn!(variable = API_KEY_ENV_VAR, "API key not set, continuing with empty key");
                }
            }
        }

        Ok(config)
    }
}
