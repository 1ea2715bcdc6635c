//! Infrastructure layer module
//!
//! This module contains the adapters behind the domain ports:
//! - Credentials (environment access)
//! - Configuration management
//! - Logging infrastructure

/// figment-based configuration loading
pub mod config;
/// Environment adapters
pub mod credentials;
/// tracing setup
pub mod logging;
