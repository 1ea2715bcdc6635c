/// Port for environment variable access.
///
/// Implementations can read the OS environment or an in-memory map, which
/// lets callers build sender options deterministically in tests.
pub trait EnvironmentPort: Send + Sync {
    /// Get an environment variable value.
    /// Returns None if the variable is not set.
    fn get_var(&self, key: &str) -> Option<String>;

    /// Get an environment variable or return a default value.
    fn get_var_or(&self, key: &str, default: &str) -> String {
        self.get_var(key).unwrap_or_else(|| default.to_string())
    }
}

impl<E: EnvironmentPort + ?Sized> EnvironmentPort for &E {
    fn get_var(&self, key: &str) -> Option<String> {
        (**self).get_var(key)
    }
}
