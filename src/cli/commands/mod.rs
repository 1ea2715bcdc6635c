//! CLI command implementations.

/// `check` command
pub mod check;
/// `show` command
pub mod show;
