//! Core domain types: configuration and error handling.

pub mod config;
pub mod error;

pub use config::{ReporterConfig, TimeUnit};
pub use error::{MetricsinkError, Result};
