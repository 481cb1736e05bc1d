//! Instrument traits exposed by the registry.
//!
//! Each trait is the minimal read surface the reporter needs. Counts are
//! signed 64-bit to match the wire format's long fields; counters are
//! monotonic within a process lifetime but may reset across restarts.

use crate::registry::types::{GaugeValue, StatSnapshot};

/// An instantaneous, externally-computed value sampled at read time.
pub trait Gauge: Send + Sync {
    /// Current value, or `None` when the gauge has nothing to report this
    /// cycle. Absent gauges are skipped entirely.
    fn value(&self) -> Option<GaugeValue>;
}

/// A monotonic integer count.
pub trait Counter: Send + Sync {
    /// Current count.
    fn count(&self) -> i64;
}

/// A running statistical summary of a numeric sample stream.
pub trait Histogram: Send + Sync {
    /// Number of samples recorded.
    fn count(&self) -> i64;

    /// Point-in-time statistical summary of the sample reservoir.
    fn snapshot(&self) -> StatSnapshot;
}

/// A count plus exponentially-weighted moving-average rates.
///
/// Rates are events per the configured rate unit.
pub trait Metered: Send + Sync {
    /// Number of events observed.
    fn count(&self) -> i64;

    /// One-minute exponentially-weighted rate.
    fn one_minute_rate(&self) -> f64;

    /// Five-minute exponentially-weighted rate.
    fn five_minute_rate(&self) -> f64;

    /// Fifteen-minute exponentially-weighted rate.
    fn fifteen_minute_rate(&self) -> f64;

    /// Mean rate since the instrument was created.
    fn mean_rate(&self) -> f64;
}

/// A meter over event occurrences combined with a histogram over event
/// durations. Duration samples are raw nanoseconds unless the registry is
/// configured otherwise.
pub trait Timer: Metered {
    /// Point-in-time summary of the duration reservoir.
    fn snapshot(&self) -> StatSnapshot;
}
