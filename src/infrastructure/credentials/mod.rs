//! Credentials management infrastructure
//!
//! Environment adapters backing the `EnvironmentPort`:
//! - Process environment (`std::env`)
//! - In-memory environment for explicit injection and tests

/// Process and in-memory environments
pub mod env_provider;

pub use env_provider::{ProcessEnvironment, StaticEnvironment};
