//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - Pretty or JSON output on stderr
//! - Optional rolling JSON log files

/// Logger settings
pub mod config;
/// Subscriber installation
pub mod logger;

pub use config::{LogConfig, LogFormat, RotationPolicy};
pub use logger::{parse_log_level, LoggerImpl, LOG_FILE_NAME};

// Re-export tracing macros for convenience
pub use tracing::{debug, error, info, instrument, trace, warn};
