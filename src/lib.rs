//! Metricsink - document-store reporter for metric instrument snapshots.
//!
//! Metricsink takes a point-in-time snapshot of an application's metric
//! instruments once per reporting cycle and appends one flat document per
//! metric into a collection-partitioned document sink. Instrumentation call
//! sites stay untouched; the reporter only reads.
//!
//! # Features
//!
//! - **Five metric kinds**: gauges, counters, histograms, meters, and timers,
//!   each written to its own collection
//! - **Deterministic output**: ascending-name iteration and one shared
//!   timestamp per cycle
//! - **Failure isolation**: a rejected write is logged and skipped, never
//!   aborting the rest of the cycle
//! - **Pluggable sinks**: bring your own [`sink::DocumentSink`], or use the
//!   bundled in-memory and JSON-lines implementations
//!
//! # Architecture
//!
//! - `registry`: the consumed-side contract of the metric registry
//! - `document`: typed per-kind records and the flat wire document
//! - `report`: per-kind transformers, the cycle driver, and the scheduler
//! - `sink`: the destination-store boundary and bundled implementations
//! - `core`: configuration and error types
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//! use metricsink::registry::{Counter, MetricRegistry, MetricSnapshot};
//! use metricsink::sink::JsonLinesSink;
//! use metricsink::{Reporter, ReporterConfig};
//!
//! struct Requests;
//!
//! impl Counter for Requests {
//!     fn count(&self) -> i64 {
//!         42
//!     }
//! }
//!
//! struct AppRegistry;
//!
//! impl MetricRegistry for AppRegistry {
//!     fn snapshot(&self) -> MetricSnapshot {
//!         let mut snapshot = MetricSnapshot::default();
//!         snapshot.counters.insert("requests".to_owned(), Arc::new(Requests));
//!         snapshot
//!     }
//! }
//!
//! fn main() -> metricsink::Result<()> {
//!     let sink = Arc::new(JsonLinesSink::new("./metrics")?);
//!     let mut reporter = Reporter::new(Arc::new(AppRegistry), sink, ReporterConfig::default())?;
//!     reporter.start(Duration::from_secs(5))?;
//!     // ... application runs ...
//!     reporter.stop();
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod core;
pub mod document;
pub mod registry;
pub mod report;
pub mod sink;

// Re-export the types most embedders need
pub use crate::core::{MetricsinkError, ReporterConfig, Result, TimeUnit};
pub use crate::report::{CycleDriver, CycleReport, Reporter};
pub use crate::sink::{Collection, DocumentSink};
