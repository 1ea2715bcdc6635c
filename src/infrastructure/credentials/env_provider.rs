use std::collections::HashMap;
use std::env::{self, VarError};

use tracing::warn;

use crate::domain::models::sender::SenderConfiguration;
use crate::domain::ports::EnvironmentPort;

/// Process environment adapter backed by `std::env`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl EnvironmentPort for ProcessEnvironment {
    fn get_var(&self, key: &str) -> Option<String> {
        match env::var(key) {
            Ok(value) => Some(value),
            Err(VarError::NotPresent) => None,
            Err(VarError::NotUnicode(_)) => {
                warn!(variable = key, "environment variable is not valid unicode, ignoring");
                None
            }
        }
    }
}

impl SenderConfiguration {
    /// Build from the process environment.
    pub fn create() -> Self {
        Self::from_environment(&ProcessEnvironment)
    }
}

/// In-memory environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticEnvironment {
    vars: HashMap<String, String>,
}

impl StaticEnvironment {
    /// Empty environment; every lookup returns `None`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a variable, replacing any previous value.
    #[must_use]
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StaticEnvironment {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl EnvironmentPort for StaticEnvironment {
    fn get_var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_environment_reads_set_variable() {
        temp_env::with_var("SENDER_OPTIONS_TEST_SET", Some("value"), || {
            assert_eq!(
                ProcessEnvironment.get_var("SENDER_OPTIONS_TEST_SET").as_deref(),
                Some("value")
            );
        });
    }

    #[test]
    fn test_process_environment_unset_is_none() {
        temp_env::with_var_unset("SENDER_OPTIONS_TEST_UNSET", || {
            assert_eq!(ProcessEnvironment.get_var("SENDER_OPTIONS_TEST_UNSET"), None);
        });
    }

    #[cfg(unix)]
    #[test]
    fn test_non_unicode_key_is_treated_as_unset() {
        use crate::domain::models::sender::API_KEY_ENV_VAR;
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        let invalid = OsString::from_vec(vec![0x66, 0xff, 0x6f]);
        temp_env::with_var(API_KEY_ENV_VAR, Some(invalid), || {
            assert_eq!(ProcessEnvironment.get_var(API_KEY_ENV_VAR), None);

            let config = SenderConfiguration::create();
            assert_eq!(config.api_key(), "");
            assert!(!config.has_api_key());
        });
    }

    #[test]
    fn test_create_reads_process_environment() {
        use crate::domain::models::sender::{API_KEY_ENV_VAR, SENDER_DISPLAY_NAME};

        temp_env::with_var(API_KEY_ENV_VAR, Some("abc123"), || {
            let config = SenderConfiguration::create();
            assert_eq!(config.api_key(), "abc123");
            assert_eq!(config.display_name(), SENDER_DISPLAY_NAME);
        });
    }

    #[test]
    fn test_static_environment_with_var_overwrites() {
        let env = StaticEnvironment::new()
            .with_var("KEY", "first")
            .with_var("KEY", "second");
        assert_eq!(env.get_var("KEY").as_deref(), Some("second"));
        assert_eq!(env.get_var("OTHER"), None);
    }

    #[test]
    fn test_static_environment_from_iter() {
        let env: StaticEnvironment = [("A", "1"), ("B", "2")].into_iter().collect();
        assert_eq!(env.get_var("A").as_deref(), Some("1"));
        assert_eq!(env.get_var_or("C", "3"), "3");
    }
}
