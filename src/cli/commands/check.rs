//! Implementation of the `sender-options check` command.

use anyhow::{Context, Result};
use clap::Args;
use console::style;
use serde::Serialize;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::config::KeyPolicy;
use crate::domain::models::sender::API_KEY_ENV_VAR;
use crate::domain::ports::EnvironmentPort;
use crate::infrastructure::credentials::ProcessEnvironment;
use crate::services::SenderService;

/// Arguments for `check`
#[derive(Args, Debug, Default)]
pub struct CheckArgs {}

/// Result of a passing `check`
#[derive(Debug, Serialize)]
pub struct CheckOutput {
    /// Always true; failures are reported as errors
    pub success: bool,
    /// Sender display name
    pub display_name: String,
    /// Name of the variable the key was read from
    pub api_key_variable: String,
}

impl CommandOutput for CheckOutput {
    fn to_human(&self) -> String {
        format!(
            "{} {} is set, sending as {}",
            style("ok:").green().bold(),
            self.api_key_variable,
            self.display_name
        )
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Resolve with the key required, regardless of the configured policy
pub fn run<E: EnvironmentPort>(env: E) -> Result<CheckOutput> {
    let sender = SenderService::new(env, KeyPolicy::Required)
        .resolve()
        .context("Sender configuration is incomplete")?;

    Ok(CheckOutput {
        success: true,
        display_name: sender.display_name().to_string(),
        api_key_variable: API_KEY_ENV_VAR.to_string(),
    })
}

/// Run `check` against the process environment and print the result
pub fn execute(_args: &CheckArgs, json_mode: bool) -> Result<()> {
    let result = run(ProcessEnvironment)?;
    output(&result, json_mode);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::ConfigError;
    use crate::infrastructure::credentials::StaticEnvironment;

    #[test]
    fn test_check_passes_with_key() {
        let env = StaticEnvironment::new().with_var(API_KEY_ENV_VAR, "abc123");

        let out = run(env).unwrap();
        assert!(out.success);
        assert_eq!(out.display_name, "BitsRUs");
        assert!(out.to_human().contains(API_KEY_ENV_VAR));
    }

    #[test]
    fn test_check_fails_without_key() {
        let err = run(StaticEnvironment::new()).unwrap_err();

        assert_eq!(err.to_string(), "Sender configuration is incomplete");
        assert_eq!(
            err.downcast_ref::<ConfigError>(),
            Some(&ConfigError::missing(API_KEY_ENV_VAR))
        );
    }
}
