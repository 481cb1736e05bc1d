//! Per-kind instrument-to-document transformers.
//!
//! Each transformer reads its instrument exactly once and copies values
//! verbatim. No unit conversion and no recomputation happens here; rate
//! and duration values are stored in whatever unit the registry produced.
//!
//! The gauge transformer takes the already-read value: absence is decided
//! at the intake stage, so an absent gauge never reaches this module.

use crate::document::{
    CounterDoc, GaugeDoc, HistogramDoc, MeteredDoc, MetricDocument, TimerDoc,
};
use crate::registry::{Counter, GaugeValue, Histogram, Metered, Timer};
use chrono::{DateTime, Utc};

/// Build a gauge document from a value read at intake.
pub fn gauge(name: String, timestamp: DateTime<Utc>, value: GaugeValue) -> MetricDocument {
    MetricDocument::Gauge(GaugeDoc {
        name,
        timestamp,
        value,
    })
}

/// Build a counter document.
pub fn counter(name: String, timestamp: DateTime<Utc>, counter: &dyn Counter) -> MetricDocument {
    MetricDocument::Counter(CounterDoc {
        name,
        timestamp,
        count: counter.count(),
    })
}

/// Build a histogram document: the count plus one statistical snapshot,
/// copied field for field.
pub fn histogram(
    name: String,
    timestamp: DateTime<Utc>,
    histogram: &dyn Histogram,
) -> MetricDocument {
    MetricDocument::Histogram(HistogramDoc {
        name,
        timestamp,
        count: histogram.count(),
        snapshot: histogram.snapshot().into(),
    })
}

/// Build a meter document: the count plus the four rate fields.
pub fn metered(name: String, timestamp: DateTime<Utc>, meter: &dyn Metered) -> MetricDocument {
    MetricDocument::Metered(MeteredDoc {
        name,
        timestamp,
        count: meter.count(),
        m1_rate: meter.one_minute_rate(),
        m5_rate: meter.five_minute_rate(),
        m15_rate: meter.fifteen_minute_rate(),
        mean_rate: meter.mean_rate(),
    })
}

/// Build a timer document: the meter fields plus a nested duration
/// snapshot.
pub fn timer(name: String, timestamp: DateTime<Utc>, timer: &dyn Timer) -> MetricDocument {
    MetricDocument::Timer(TimerDoc {
        name,
        timestamp,
        count: timer.count(),
        m1_rate: timer.one_minute_rate(),
        m5_rate: timer.five_minute_rate(),
        m15_rate: timer.fifteen_minute_rate(),
        mean_rate: timer.mean_rate(),
        snapshot: timer.snapshot().into(),
    })
}
