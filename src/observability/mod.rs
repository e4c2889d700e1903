//! # Observability
//!
//! Structured logging for boot and request-rejection events.

pub mod logger;

pub use logger::{Logger, Severity};
