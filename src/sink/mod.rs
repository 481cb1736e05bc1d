//! Destination-store boundary.
//!
//! The reporter treats the destination as a stateless, thread-safe write
//! sink holding five fixed collections, one per metric kind. It only ever
//! issues inserts; no updates, deletes, or reads. Connection setup,
//! pooling, and per-write timeouts belong to the sink implementation.

pub mod jsonl;
pub mod memory;

pub use jsonl::JsonLinesSink;
pub use memory::MemorySink;

use crate::core::Result;
use crate::document::Document;

/// The five fixed destination collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    /// Gauge documents.
    Gauge,
    /// Counter documents.
    Counter,
    /// Histogram documents.
    Histogram,
    /// Meter documents.
    Metered,
    /// Timer documents.
    Timer,
}

impl Collection {
    /// All collections, in reporting order.
    pub const ALL: [Collection; 5] = [
        Collection::Gauge,
        Collection::Counter,
        Collection::Histogram,
        Collection::Metered,
        Collection::Timer,
    ];

    /// Collection name in the destination store.
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Gauge => "gauge",
            Collection::Counter => "counter",
            Collection::Histogram => "histogram",
            Collection::Metered => "metered",
            Collection::Timer => "timer",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A document store the reporter can append to.
///
/// Implementations must be safe to share across cycles without external
/// locking. An `Err` from [`insert`](DocumentSink::insert) marks only that
/// one document as failed; the reporter continues with the next metric.
pub trait DocumentSink: Send + Sync {
    /// Append one document to the given collection.
    fn insert(&self, collection: Collection, document: &Document) -> Result<()>;
}
