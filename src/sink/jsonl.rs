//! Append-only JSON-lines sink.
//!
//! Each collection maps to one `<name>.jsonl` file in the sink directory;
//! every insert appends one JSON document per line. Writes are synchronous
//! and unbuffered, matching the reporter's blocking cycle model.

use crate::core::{MetricsinkError, Result};
use crate::document::Document;
use crate::sink::{Collection, DocumentSink};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// File-backed document sink, one JSON-lines file per collection.
pub struct JsonLinesSink {
    dir: PathBuf,
}

impl JsonLinesSink {
    /// Create a sink rooted at `dir`, creating the directory if needed.
    pub fn new<P: Into<PathBuf>>(dir: P) -> Result<Self> {
        let dir = dir.into();
        if dir.as_os_str().is_empty() {
            return Err(MetricsinkError::config("sink directory must not be empty"));
        }
        std::fs::create_dir_all(&dir).map_err(|e| {
            MetricsinkError::sink(format!("Failed to create {}: {}", dir.display(), e))
        })?;
        Ok(Self { dir })
    }

    /// Path of the file backing the given collection.
    pub fn path(&self, collection: Collection) -> PathBuf {
        self.dir.join(format!("{}.jsonl", collection.as_str()))
    }

    /// Directory the collection files live in.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DocumentSink for JsonLinesSink {
    fn insert(&self, collection: Collection, document: &Document) -> Result<()> {
        let path = self.path(collection);
        let mut line = serde_json::to_string(document)?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                MetricsinkError::sink(format!("Failed to open {}: {}", path.display(), e))
            })?;
        file.write_all(line.as_bytes()).map_err(|e| {
            MetricsinkError::sink(format!("Failed to append to {}: {}", path.display(), e))
        })
    }
}
