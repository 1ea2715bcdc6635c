//! Port trait definitions (Hexagonal Architecture)
//!
//! - EnvironmentPort: read access to environment variables
//!
//! Infrastructure adapters implement these so the domain never touches
//! `std::env` directly.

/// Environment variable access
pub mod environment;

pub use environment::EnvironmentPort;
