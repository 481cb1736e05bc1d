//! Value types read from instruments.

use serde::Serialize;

/// The five metric kinds, matching the five destination collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricKind {
    /// Sampled value
    Gauge,
    /// Monotonic count
    Counter,
    /// Sample distribution
    Histogram,
    /// Rate meter
    Meter,
    /// Meter plus duration distribution
    Timer,
}

impl MetricKind {
    /// Lowercase kind name for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricKind::Gauge => "gauge",
            MetricKind::Counter => "counter",
            MetricKind::Histogram => "histogram",
            MetricKind::Meter => "meter",
            MetricKind::Timer => "timer",
        }
    }
}

impl std::fmt::Display for MetricKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A gauge reading.
///
/// Numeric values are normalized at construction: every integer type widens
/// to `i64` and every float to `f64`, so a narrow value can never reach the
/// wire as a narrow type. A `u64` above `i64::MAX` saturates.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GaugeValue {
    /// Boolean reading.
    Bool(bool),
    /// Integer reading, widened to 64-bit.
    Int(i64),
    /// Floating-point reading, widened to 64-bit.
    Float(f64),
    /// String reading.
    Str(String),
}

macro_rules! gauge_int_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for GaugeValue {
                fn from(value: $ty) -> Self {
                    GaugeValue::Int(i64::from(value))
                }
            }
        )*
    };
}

gauge_int_from!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for GaugeValue {
    fn from(value: u64) -> Self {
        GaugeValue::Int(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<f32> for GaugeValue {
    fn from(value: f32) -> Self {
        GaugeValue::Float(f64::from(value))
    }
}

impl From<f64> for GaugeValue {
    fn from(value: f64) -> Self {
        GaugeValue::Float(value)
    }
}

impl From<bool> for GaugeValue {
    fn from(value: bool) -> Self {
        GaugeValue::Bool(value)
    }
}

impl From<&str> for GaugeValue {
    fn from(value: &str) -> Self {
        GaugeValue::Str(value.to_owned())
    }
}

impl From<String> for GaugeValue {
    fn from(value: String) -> Self {
        GaugeValue::Str(value)
    }
}

/// Point-in-time statistical summary of a sample reservoir.
///
/// Values are taken verbatim from the instrument; the reporter never
/// recomputes them. For a non-empty reservoir,
/// min <= median <= p75 <= p95 <= p98 <= p99 <= p999 <= max.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatSnapshot {
    /// Largest sample.
    pub max: i64,
    /// Arithmetic mean.
    pub mean: f64,
    /// Smallest sample.
    pub min: i64,
    /// Standard deviation.
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
