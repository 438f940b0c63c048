//! Core data types flowing through the harvest pipeline.

use std::path::PathBuf;

/// A metadata record: field name → scalar or list value.
///
/// The source vocabulary is open-ended, so records stay schemaless maps
/// end to end; unknown fields round-trip into the stored payload unchanged.
pub type Record = serde_json::Map<String, serde_json::Value>;

/// One harvested document before normalization.
#[derive(Debug, Clone)]
pub struct HarvestedDoc {
    /// Corpus file the record was read from, relative to the harvest root.
    pub path: PathBuf,
    pub fields: Record,
}

impl HarvestedDoc {
    /// Identifier for log messages: the record's `@id` when present,
    /// otherwise the source path.
    pub fn display_id(&self) -> String {
        self.fields
            .get("@id")
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Counters reported after an ingest run.
#[derive(Debug, Default, Clone, Copy)]
pub struct IngestReport {
    pub fetched: u64,
    pub inserted: u64,
    pub skipped: u64,
}
