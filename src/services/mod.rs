//! Service layer
//!
//! Coordinates domain models with infrastructure adapters.

/// Sender configuration resolution
pub mod sender_service;

pub use sender_service::SenderService;
