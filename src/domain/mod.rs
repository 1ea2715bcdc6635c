//! Domain layer for sender options
//!
//! This module contains the sender configuration model, the application
//! configuration model and the environment port.

/// Error types
pub mod error;
/// Domain models
pub mod models;
/// Port traits
pub mod ports;

// Re-export error types for convenient access
pub use error::ConfigError;
