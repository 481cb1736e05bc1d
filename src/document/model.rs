//! Typed per-kind document records and their wire serialization.

use crate::core::{MetricsinkError, Result};
use crate::document::Document;
use crate::registry::{GaugeValue, StatSnapshot};
use crate::sink::Collection;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Gauge document: the sampled value.
#[derive(Debug, Clone, Serialize)]
pub struct GaugeDoc {
    /// Stored metric name, prefix already applied.
    pub name: String,
    /// Cycle timestamp, UTC.
    pub timestamp: DateTime<Utc>,
    /// Sampled value.
    pub value: GaugeValue,
}

/// Counter document: the current count.
#[derive(Debug, Clone, Serialize)]
pub struct CounterDoc {
    /// Stored metric name, prefix already applied.
    pub name: String,
    /// Cycle timestamp, UTC.
    pub timestamp: DateTime<Utc>,
    /// Current count.
    pub count: i64,
}

/// The ten statistical snapshot fields, in wire naming.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SnapshotDoc {
    /// Largest sample.
    pub max: i64,
    /// Arithmetic mean.
    pub mean: f64,
    /// Smallest sample.
    pub min: i64,
    /// Standard deviation.
    #[serde(rename = "stdDev")]
    pub std_dev: f64,
    /// 50th percentile.
    pub median: f64,
    /// 75th percentile.
    pub p75: f64,
    /// 95th percentile.
    pub p95: f64,
    /// 98th percentile.
    pub p98: f64,
    /// 99th percentile.
    pub p99: f64,
    /// 99.9th percentile.
    pub p999: f64,
}

impl From<StatSnapshot> for SnapshotDoc {
    fn from(snapshot: StatSnapshot) -> Self {
        SnapshotDoc {
            max: snapshot.max,
            mean: snapshot.mean,
            min: snapshot.min,
            std_dev: snapshot.std_dev,
            median: snapshot.median,
            p75: snapshot.p75,
            p95: snapshot.p95,
            p98: snapshot.p98,
            p99: snapshot.p99,
            p999: snapshot.p999,
        }
    }
}

/// Histogram document: count plus the snapshot fields, flattened.
#[derive(Debug, Clone, Serialize)]
pub struct HistogramDoc {
    /// Stored metric name, prefix already applied.
    pub name: String,
    /// Cycle timestamp, UTC.
    pub timestamp: DateTime<Utc>,
    /// Number of samples recorded.
    pub count: i64,
    /// Statistical snapshot, flattened into the document.
    #[serde(flatten)]
    pub snapshot: SnapshotDoc,
}

/// Meter document: count plus the four rate fields.
#[derive(Debug, Clone, Serialize)]
pub struct MeteredDoc {
    /// Stored metric name, prefix already applied.
    pub name: String,
    /// Cycle timestamp, UTC.
    pub timestamp: DateTime<Utc>,
    /// Number of events observed.
    pub count: i64,
    /// One-minute rate.
    #[serde(rename = "m1Rate")]
    pub m1_rate: f64,
    /// Five-minute rate.
    #[serde(rename = "m5Rate")]
    pub m5_rate: f64,
    /// Fifteen-minute rate.
    #[serde(rename = "m15Rate")]
    pub m15_rate: f64,
    /// Mean rate.
    #[serde(rename = "meanRate")]
    pub mean_rate: f64,
}

/// Timer document: the meter fields plus a nested duration snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct TimerDoc {
    /// Stored metric name, prefix already applied.
    pub name: String,
    /// Cycle timestamp, UTC.
    pub timestamp: DateTime<Utc>,
    /// Number of timed events.
    pub count: i64,
    /// One-minute rate.
    #[serde(rename = "m1Rate")]
    pub m1_rate: f64,
    /// Five-minute rate.
    #[serde(rename = "m5Rate")]
    pub m5_rate: f64,
    /// Fifteen-minute rate.
    #[serde(rename = "m15Rate")]
    pub m15_rate: f64,
    /// Mean rate.
    #[serde(rename = "meanRate")]
    pub mean_rate: f64,
    /// Duration snapshot, nested.
    pub snapshot: SnapshotDoc,
}

/// One metric's document for the current cycle, tagged by kind.
#[derive(Debug, Clone)]
pub enum MetricDocument {
    /// Gauge document.
    Gauge(GaugeDoc),
    /// Counter document.
    Counter(CounterDoc),
    /// Histogram document.
    Histogram(HistogramDoc),
    /// Meter document.
    Metered(MeteredDoc),
    /// Timer document.
    Timer(TimerDoc),
}

impl MetricDocument {
    /// Destination collection for this document.
    pub fn collection(&self) -> Collection {
        match self {
            MetricDocument::Gauge(_) => Collection::Gauge,
            MetricDocument::Counter(_) => Collection::Counter,
            MetricDocument::Histogram(_) => Collection::Histogram,
            MetricDocument::Metered(_) => Collection::Metered,
            MetricDocument::Timer(_) => Collection::Timer,
        }
    }

    /// Serialize into the flat wire document. This is the only path from
    /// the typed records to the sink format.
    pub fn into_document(self) -> Result<Document> {
        let value = match self {
            MetricDocument::Gauge(doc) => serde_json::to_value(doc)?,
            MetricDocument::Counter(doc) => serde_json::to_value(doc)?,
            MetricDocument::Histogram(doc) => serde_json::to_value(doc)?,
            MetricDocument::Metered(doc) => serde_json::to_value(doc)?,
            MetricDocument::Timer(doc) => serde_json::to_value(doc)?,
        };
        match value {
            serde_json::Value::Object(map) => Ok(map),
            other => Err(MetricsinkError::SerializationError(format!(
                "metric document serialized to non-object value: {}",
                other
            ))),
        }
    }
}
