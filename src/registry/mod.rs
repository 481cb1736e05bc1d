//! Consumed-side contract of the external metric registry.
//!
//! The reporter does not own any instruments. Once per cycle it asks the
//! registry for a [`MetricSnapshot`]: five name-sorted mappings, one per
//! metric kind. Instruments are read-only and thread-safe from the
//! reporter's perspective; no locking happens here.

pub mod instrument;
pub mod types;

pub use instrument::{Counter, Gauge, Histogram, Metered, Timer};
pub use types::{GaugeValue, MetricKind, StatSnapshot};

use std::collections::BTreeMap;
use std::sync::Arc;

/// Predicate deciding whether a metric enters the reporting cycle at all.
///
/// Applied at the registry boundary, before the cycle driver ever sees the
/// metric.
pub type MetricFilter = Arc<dyn Fn(&str, MetricKind) -> bool + Send + Sync>;

/// A filter that accepts every metric.
pub fn accept_all() -> MetricFilter {
    Arc::new(|_, _| true)
}

/// Source of per-cycle metric snapshots.
pub trait MetricRegistry: Send + Sync {
    /// Produce the five name-sorted instrument mappings for the current
    /// cycle.
    fn snapshot(&self) -> MetricSnapshot;
}

/// One cycle's worth of instruments, keyed by metric name.
///
/// `BTreeMap` keys iterate in ascending order, which keeps the reporter's
/// output reproducible for equal inputs.
#[derive(Default, Clone)]
pub struct MetricSnapshot {
    /// Gauges, by name.
    pub gauges: BTreeMap<String, Arc<dyn Gauge>>,
    /// Counters, by name.
    pub counters: BTreeMap<String, Arc<dyn Counter>>,
    /// Histograms, by name.
    pub histograms: BTreeMap<String, Arc<dyn Histogram>>,
    /// Meters, by name.
    pub meters: BTreeMap<String, Arc<dyn Metered>>,
    /// Timers, by name.
    pub timers: BTreeMap<String, Arc<dyn Timer>>,
}

impl MetricSnapshot {
    /// True when all five mappings are empty.
    pub fn is_empty(&self) -> bool {
        self.gauges.is_empty()
            && self.counters.is_empty()
            && self.histograms.is_empty()
            && self.meters.is_empty()
            && self.timers.is_empty()
    }

    /// Total number of instruments across all kinds.
    pub fn len(&self) -> usize {
        self.gauges.len()
            + self.counters.len()
            + self.histograms.len()
            + self.meters.len()
            + self.timers.len()
    }

    /// Drop every metric the filter rejects.
    pub fn filtered(mut self, filter: &MetricFilter) -> Self {
        self.gauges.retain(|name, _| filter(name, MetricKind::Gauge));
        self.counters.retain(|name, _| filter(name, MetricKind::Counter));
        self.histograms
            .retain(|name, _| filter(name, MetricKind::Histogram));
        self.meters.retain(|name, _| filter(name, MetricKind::Meter));
        self.timers.retain(|name, _| filter(name, MetricKind::Timer));
        self
    }
}
