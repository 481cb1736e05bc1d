//! The cycle driver: one pass over a metric snapshot.
//!
//! `run_cycle` is the write pipeline's entry point. It never fails outward;
//! every failure is absorbed per metric, logged, and surfaced in the
//! returned [`CycleReport`].

use crate::core::ReporterConfig;
use crate::document::{augment, prefixed, MetricDocument};
use crate::registry::MetricSnapshot;
use crate::report::transform;
use crate::sink::{Collection, DocumentSink};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{info, warn};

/// One failed document write, recorded at single-metric granularity.
#[derive(Debug, Clone)]
pub struct WriteFailure {
    /// Registry name of the metric, without prefix.
    pub name: String,
    /// Destination collection of the failed write.
    pub collection: Collection,
    /// Rendered underlying cause.
    pub error: String,
}

/// Outcome summary of one reporting cycle.
#[derive(Debug, Clone, Default)]
pub struct CycleReport {
    /// Documents successfully written.
    pub written: usize,
    /// Gauges skipped because their value was absent.
    pub skipped_gauges: usize,
    /// Writes that failed, one entry per metric.
    pub failed: Vec<WriteFailure>,
}

impl CycleReport {
    /// Number of writes attempted this cycle.
    pub fn attempted(&self) -> usize {
        self.written + self.failed.len()
    }
}

/// Converts a metric snapshot into documents and writes them to the sink.
pub struct CycleDriver {
    config: ReporterConfig,
    sink: Arc<dyn DocumentSink>,
}

impl CycleDriver {
    /// Create a driver. The configuration is validated eagerly; an invalid
    /// configuration never produces a driver.
    pub fn new(config: ReporterConfig, sink: Arc<dyn DocumentSink>) -> crate::Result<Self> {
        config.validate()?;
        Ok(Self { config, sink })
    }

    /// Run one reporting cycle over the snapshot, stamping every document
    /// with `now`.
    ///
    /// If all five mappings are empty the sink is never contacted. A write
    /// failure for one metric is logged as a warning and recorded in the
    /// report; the remaining metrics are still written.
    pub fn run_cycle(&self, snapshot: &MetricSnapshot, now: DateTime<Utc>) -> CycleReport {
        let mut report = CycleReport::default();

        if snapshot.is_empty() {
            info!("all metrics empty, nothing to report");
            return report;
        }

        for (name, gauge) in &snapshot.gauges {
            match gauge.value() {
                Some(value) => {
                    let doc = transform::gauge(self.display_name(name), now, value);
                    self.write(doc, name, &mut report);
                }
                None => report.skipped_gauges += 1,
            }
        }

        for (name, counter) in &snapshot.counters {
            let doc = transform::counter(self.display_name(name), now, counter.as_ref());
            self.write(doc, name, &mut report);
        }

        for (name, histogram) in &snapshot.histograms {
            let doc = transform::histogram(self.display_name(name), now, histogram.as_ref());
            self.write(doc, name, &mut report);
        }

        for (name, meter) in &snapshot.meters {
            let doc = transform::metered(self.display_name(name), now, meter.as_ref());
            self.write(doc, name, &mut report);
        }

        for (name, timer) in &snapshot.timers {
            let doc = transform::timer(self.display_name(name), now, timer.as_ref());
            self.write(doc, name, &mut report);
        }

        report
    }

    /// The reporter's configuration.
    pub fn config(&self) -> &ReporterConfig {
        &self.config
    }

    fn display_name(&self, name: &str) -> String {
        prefixed(self.config.prefix.as_deref(), name)
    }

    fn write(&self, doc: MetricDocument, registry_name: &str, report: &mut CycleReport) {
        let collection = doc.collection();
        let result = doc
            .into_document()
            .map(|d| augment(d, &self.config.static_fields))
            .and_then(|d| self.sink.insert(collection, &d));

        match result {
            Ok(()) => report.written += 1,
            Err(e) => {
                warn!(
                    metric = registry_name,
                    collection = %collection,
                    error = %e,
                    "unable to report metric"
                );
                report.failed.push(WriteFailure {
                    name: registry_name.to_owned(),
                    collection,
                    error: e.to_string(),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{Counter, Gauge, GaugeValue};
    use crate::sink::MemorySink;
    use chrono::TimeZone;

    struct FixedCounter(i64);

    impl Counter for FixedCounter {
        fn count(&self) -> i64 {
            self.0
        }
    }

    struct AbsentGauge;

    impl Gauge for AbsentGauge {
        fn value(&self) -> Option<GaugeValue> {
            None
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 4, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_empty_snapshot_is_a_no_op() {
        let sink = Arc::new(MemorySink::new());
        let driver = CycleDriver::new(ReporterConfig::default(), sink.clone()).unwrap();

        let report = driver.run_cycle(&MetricSnapshot::default(), now());

        assert_eq!(report.attempted(), 0);
        assert_eq!(sink.total(), 0);
    }

    #[test]
    fn test_absent_gauge_is_skipped_not_failed() {
        let sink = Arc::new(MemorySink::new());
        let driver = CycleDriver::new(ReporterConfig::default(), sink.clone()).unwrap();

        let mut snapshot = MetricSnapshot::default();
        snapshot.gauges.insert("idle".to_owned(), Arc::new(AbsentGauge));
        let report = driver.run_cycle(&snapshot, now());

        assert_eq!(report.skipped_gauges, 1);
        assert_eq!(report.written, 0);
        assert!(report.failed.is_empty());
        assert_eq!(sink.total(), 0);
    }

    #[test]
    fn test_counters_written_in_name_order() {
        let sink = Arc::new(MemorySink::new());
        let driver = CycleDriver::new(ReporterConfig::default(), sink.clone()).unwrap();

        let mut snapshot = MetricSnapshot::default();
        snapshot.counters.insert("zeta".to_owned(), Arc::new(FixedCounter(2)));
        snapshot.counters.insert("alpha".to_owned(), Arc::new(FixedCounter(1)));
        driver.run_cycle(&snapshot, now());

        let docs = sink.documents(Collection::Counter);
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0]["name"], serde_json::json!("alpha"));
        assert_eq!(docs[1]["name"], serde_json::json!("zeta"));
    }

    #[test]
    fn test_invalid_config_rejected_at_construction() {
        let config = ReporterConfig {
            prefix: Some(String::new()),
            ..ReporterConfig::default()
        };
        assert!(CycleDriver::new(config, Arc::new(MemorySink::new())).is_err());
    }
}
