//! # Audit Log
//!
//! Append-only CSV trail of processed records.

use crate::error::Result;
use crate::pipeline::NormalizedRecord;
use csv::{Reader, WriterBuilder};
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use tracing::info;

const HEADER: [&str; 6] = [
    "run_id",
    "position",
    "raw_text",
    "cleaned_text",
    "language",
    "sentiment",
];

/// One audit row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditRow {
    pub run_id: String,
    /// Index of the record in its run
    pub position: usize,
    pub raw_text: String,
    pub cleaned_text: String,
    pub language: String,
    pub sentiment: String,
}

impl AuditRow {
    fn from_record(run_id: &str, position: usize, record: &NormalizedRecord) -> Self {
        Self {
            run_id: run_id.to_string(),
            position,
            raw_text: record.text().to_string(),
            cleaned_text: record.cleaned_text().to_string(),
            language: record.language().as_str().to_string(),
            sentiment: record.sentiment().as_str().to_string(),
        }
    }
}

/// CSV audit log
#[derive(Debug, Clone)]
pub struct AuditLog {
    path: PathBuf,
}

impl AuditLog {
    /// Use the file at `path`, created on first append
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Log file location
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one row per record, in input order
    ///
    /// Returns the number of rows written.
    pub fn append(&self, run_id: &str, records: &[NormalizedRecord]) -> Result<usize> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let needs_header = file.metadata()?.len() == 0;

        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        if needs_header {
            writer.write_record(HEADER)?;
        }
        for (position, record) in records.iter().enumerate() {
            writer.serialize(AuditRow::from_record(run_id, position, record))?;
        }
        writer.flush()?;

        info!(
            "Appended {} audit rows for run {} to {}",
            records.len(),
            run_id,
            self.path.display()
        );
        Ok(records.len())
    }

    /// Read every row back
    pub fn read_all(&self) -> Result<Vec<AuditRow>> {
        let file = File::open(&self.path)?;
        let mut reader = Reader::from_reader(file);

        let mut rows = Vec::new();
        for result in reader.deserialize() {
            rows.push(result?);
        }
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Item;
    use crate::pipeline::RecordUnifier;

    #[test]
    fn test_append_and_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let log = AuditLog::open(dir.path().join("audit.csv"));

        let records = RecordUnifier::new().unify(&[
            Item::tweet("I love this product!! https://x.co"),
            Item::comment("यह बहुत बुरा है"),
        ]);
        assert_eq!(log.append("run-1", &records).unwrap(), 2);

        let rows = log.read_all().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].run_id, "run-1");
        assert_eq!(rows[0].position, 0);
        assert_eq!(rows[0].cleaned_text, "i love this product");
        assert_eq!(rows[0].language, "English");
        assert_eq!(rows[0].sentiment, "Positive");
        assert_eq!(rows[1].raw_text, "यह बहुत बुरा है");
        assert_eq!(rows[1].sentiment, "Negative");
    }

    #[test]
    fn test_header_written_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("audit.csv");
        let log = AuditLog::open(&path);

        let records = RecordUnifier::new().unify(&[Item::tweet("nice day, really great")]);
        log.append("a", &records).unwrap();
        log.append("b", &records).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.matches("run_id").count(), 1);

        let rows = log.read_all().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].run_id, "b");
        assert_eq!(rows[1].position, 0);
    }

    #[test]
    fn test_empty_run_writes_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let log = AuditLog::open(dir.path().join("audit.csv"));

        assert_eq!(log.append("empty", &[]).unwrap(), 0);
        assert!(log.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_missing_directory_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let log = AuditLog::open(dir.path().join("missing").join("audit.csv"));
        assert!(log.append("x", &[]).is_err());
    }
}
