//! Configuration management infrastructure
//!
//! Hierarchical configuration using figment:
//! - YAML file loading
//! - Environment variable overrides
//! - Configuration validation

/// Layered loader and validation
pub mod loader;

pub use loader::{ConfigLoader, CONFIG_DIR, ENV_PREFIX};
