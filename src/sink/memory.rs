//! In-memory sink for tests and embedded use.

use crate::core::Result;
use crate::document::Document;
use crate::sink::{Collection, DocumentSink};
use parking_lot::Mutex;
use std::collections::HashMap;

/// A sink that keeps every inserted document in memory, partitioned by
/// collection. Insertion order is preserved per collection.
#[derive(Default)]
pub struct MemorySink {
    collections: Mutex<HashMap<Collection, Vec<Document>>>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Documents inserted into the given collection, in insertion order.
    pub fn documents(&self, collection: Collection) -> Vec<Document> {
        self.collections
            .lock()
            .get(&collection)
            .cloned()
            .unwrap_or_default()
    }

    /// Number of documents in the given collection.
    pub fn count(&self, collection: Collection) -> usize {
        self.collections
            .lock()
            .get(&collection)
            .map_or(0, Vec::len)
    }

    /// Total number of documents across all collections.
    pub fn total(&self) -> usize {
        self.collections.lock().values().map(Vec::len).sum()
    }

    /// Drop all stored documents.
    pub fn clear(&self) {
        self.collections.lock().clear();
    }
}

impl DocumentSink for MemorySink {
    fn insert(&self, collection: Collection, document: &Document) -> Result<()> {
        self.collections
            .lock()
            .entry(collection)
            .or_default()
            .push(document.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(name: &str) -> Document {
        let mut doc = Document::new();
        doc.insert("name".to_owned(), serde_json::json!(name));
        doc
    }

    #[test]
    fn test_insert_and_read_back() {
        let sink = MemorySink::new();
        sink.insert(Collection::Counter, &doc("a")).unwrap();
        sink.insert(Collection::Counter, &doc("b")).unwrap();

        let docs = sink.documents(Collection::Counter);
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0]["name"], serde_json::json!("a"));
        assert_eq!(docs[1]["name"], serde_json::json!("b"));
    }

    #[test]
    fn test_collections_are_independent() {
        let sink = MemorySink::new();
        sink.insert(Collection::Gauge, &doc("g")).unwrap();
        sink.insert(Collection::Timer, &doc("t")).unwrap();

        assert_eq!(sink.count(Collection::Gauge), 1);
        assert_eq!(sink.count(Collection::Timer), 1);
        assert_eq!(sink.count(Collection::Histogram), 0);
        assert_eq!(sink.total(), 2);
    }

    #[test]
    fn test_clear() {
        let sink = MemorySink::new();
        sink.insert(Collection::Gauge, &doc("g")).unwrap();
        sink.clear();
        assert_eq!(sink.total(), 0);
    }
}
