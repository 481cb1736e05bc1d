//! The reporting pipeline: per-kind transformers, the cycle driver, and the
//! periodic scheduler.

pub mod driver;
pub mod scheduler;
pub mod transform;

pub use driver::{CycleDriver, CycleReport, WriteFailure};
pub use scheduler::Reporter;
