//! Periodic reporter driving cycles on a background thread.
//!
//! One thread, one loop: each tick snapshots the registry, applies the
//! metric filter, and runs a single cycle to completion before the next
//! tick is considered. Cycles are never re-entered concurrently; a slow
//! sink stretches the current tick instead of overlapping it.

use crate::core::{MetricsinkError, ReporterConfig, Result};
use crate::registry::{accept_all, MetricFilter, MetricRegistry};
use crate::report::driver::{CycleDriver, CycleReport};
use crate::sink::DocumentSink;
use chrono::Utc;
use crossbeam_channel::{bounded, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;
use tracing::info;

struct Worker {
    shutdown: Sender<()>,
    handle: JoinHandle<()>,
}

/// Periodic metrics reporter.
///
/// Owns the cycle driver and a handle to the registry. `start` spawns the
/// reporting thread; `stop` (or drop) shuts it down and joins it.
pub struct Reporter {
    driver: Arc<CycleDriver>,
    registry: Arc<dyn MetricRegistry>,
    filter: MetricFilter,
    worker: Option<Worker>,
}

impl Reporter {
    /// Create a reporter that accepts every metric.
    pub fn new(
        registry: Arc<dyn MetricRegistry>,
        sink: Arc<dyn DocumentSink>,
        config: ReporterConfig,
    ) -> Result<Self> {
        Self::with_filter(registry, sink, config, accept_all())
    }

    /// Create a reporter with a metric filter, applied at the registry
    /// boundary before any metric enters a cycle.
    pub fn with_filter(
        registry: Arc<dyn MetricRegistry>,
        sink: Arc<dyn DocumentSink>,
        config: ReporterConfig,
        filter: MetricFilter,
    ) -> Result<Self> {
        let driver = Arc::new(CycleDriver::new(config, sink)?);
        Ok(Self {
            driver,
            registry,
            filter,
            worker: None,
        })
    }

    /// Run one cycle synchronously on the caller's thread.
    pub fn report_now(&self) -> CycleReport {
        let snapshot = self.registry.snapshot().filtered(&self.filter);
        self.driver.run_cycle(&snapshot, Utc::now())
    }

    /// Start reporting every `interval` on a background thread.
    ///
    /// Ticks are fixed-delay: the next wait begins only after the previous
    /// cycle finished.
    pub fn start(&mut self, interval: Duration) -> Result<()> {
        if self.worker.is_some() {
            return Err(MetricsinkError::AlreadyRunning);
        }
        if interval.is_zero() {
            return Err(MetricsinkError::config("report interval must be non-zero"));
        }

        let config = self.driver.config();
        info!(
            interval_ms = interval.as_millis() as u64,
            rate_unit = %config.rate_unit,
            duration_unit = %config.duration_unit,
            "starting metricsink reporter"
        );

        let driver = Arc::clone(&self.driver);
        let registry = Arc::clone(&self.registry);
        let filter = Arc::clone(&self.filter);
        let (shutdown, ticks) = bounded::<()>(1);

        let handle = std::thread::Builder::new()
            .name("metricsink-reporter".to_owned())
            .spawn(move || loop {
                match ticks.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => {
                        let snapshot = registry.snapshot().filtered(&filter);
                        driver.run_cycle(&snapshot, Utc::now());
                    }
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            })?;

        self.worker = Some(Worker { shutdown, handle });
        Ok(())
    }

    /// Whether the background thread is running.
    pub fn is_running(&self) -> bool {
        self.worker.is_some()
    }

    /// Stop the background thread and wait for it to finish. Safe to call
    /// when the reporter was never started.
    pub fn stop(&mut self) {
        if let Some(worker) = self.worker.take() {
            let _ = worker.shutdown.send(());
            let _ = worker.handle.join();
            info!("metricsink reporter stopped");
        }
    }
}

impl Drop for Reporter {
    fn drop(&mut self) {
        self.stop();
    }
}
