//! Output documents.
//!
//! In memory each metric is a typed record per kind; the flat wire document
//! the sink receives exists only at the serialization boundary, produced by
//! [`model::MetricDocument::into_document`]. The record never doubles as
//! the wire format.

pub mod model;

pub use model::{CounterDoc, GaugeDoc, HistogramDoc, MeteredDoc, MetricDocument, SnapshotDoc, TimerDoc};

use std::collections::BTreeMap;

/// Flat wire document: field name to JSON value.
pub type Document = serde_json::Map<String, serde_json::Value>;

/// Compose the stored metric name from the configured prefix and the
/// registry name. A missing or empty prefix leaves the name unchanged.
pub fn prefixed(prefix: Option<&str>, name: &str) -> String {
    match prefix {
        Some(prefix) if !prefix.is_empty() => format!("{}.{}", prefix, name),
        _ => name.to_owned(),
    }
}

/// Merge configured static fields into a document.
///
/// Only absent keys are filled in; fields already produced by the
/// transformer, including `name` and `timestamp`, always win.
pub fn augment(mut document: Document, static_fields: &BTreeMap<String, serde_json::Value>) -> Document {
    for (key, value) in static_fields {
        document.entry(key.clone()).or_insert_with(|| value.clone());
    }
    document
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixed_joins_with_dot() {
        assert_eq!(prefixed(Some("junit"), "counter"), "junit.counter");
        assert_eq!(prefixed(Some("app"), "server.status"), "app.server.status");
    }

    #[test]
    fn test_prefixed_without_prefix() {
        assert_eq!(prefixed(None, "counter"), "counter");
        assert_eq!(prefixed(Some(""), "counter"), "counter");
    }

    #[test]
    fn test_augment_fills_absent_keys() {
        let mut doc = Document::new();
        doc.insert("name".to_owned(), serde_json::json!("app.requests"));

        let mut fields = BTreeMap::new();
        fields.insert("region".to_owned(), serde_json::json!("eu-west-1"));
        let doc = augment(doc, &fields);

        assert_eq!(doc["region"], serde_json::json!("eu-west-1"));
    }

    #[test]
    fn test_augment_never_overwrites() {
        let mut doc = Document::new();
        doc.insert("name".to_owned(), serde_json::json!("app.requests"));
        doc.insert("count".to_owned(), serde_json::json!(100));

        let mut fields = BTreeMap::new();
        fields.insert("name".to_owned(), serde_json::json!("shadowed"));
        fields.insert("count".to_owned(), serde_json::json!(999));
        fields.insert("host".to_owned(), serde_json::json!("node-1"));
        let doc = augment(doc, &fields);

        assert_eq!(doc["name"], serde_json::json!("app.requests"));
        assert_eq!(doc["count"], serde_json::json!(100));
        assert_eq!(doc["host"], serde_json::json!("node-1"));
    }
}
