//! Core data models for ACE telemetry processing
//!
//! Defines the parsing configuration attached to each file-type key, the
//! in-memory row produced by the loader, and the per-file outcome used for
//! the final success tally.

use crate::{Error, Result};
use serde::Serialize;
use std::collections::HashSet;
use std::path::PathBuf;

/// Parsing configuration for one ACE file type.
///
/// Immutable once registered: entries are defined at process start and only
/// read afterwards. `columns` is order-significant and matches the number of
/// whitespace-delimited tokens expected per data line.
#[derive(Debug, Clone, Serialize)]
pub struct FileTypeConfig {
    /// Filename fragment the input path must contain (loose substring check)
    pub suffix: String,

    /// Number of leading header lines to discard unconditionally
    pub skip_rows: usize,

    /// Ordered column names for the data section
    pub columns: Vec<String>,

    /// Input-specific missing-value markers, normalized on output
    pub na_values: Vec<String>,
}

impl FileTypeConfig {
    /// Create a validated configuration.
    ///
    /// Column names must be non-empty and unique; the suffix must be
    /// non-empty for the substring check to mean anything.
    pub fn new(
        suffix: impl Into<String>,
        skip_rows: usize,
        columns: Vec<String>,
        na_values: Vec<String>,
    ) -> Result<Self> {
        let suffix = suffix.into();
        if suffix.is_empty() {
            return Err(Error::configuration("File-type suffix cannot be empty"));
        }
        if columns.is_empty() {
            return Err(Error::configuration("Column list cannot be empty"));
        }

        let mut seen = HashSet::new();
        for column in &columns {
            if column.is_empty() {
                return Err(Error::configuration("Column names cannot be empty"));
            }
            if !seen.insert(column.as_str()) {
                return Err(Error::configuration(format!(
                    "Duplicate column name: {}",
                    column
                )));
            }
        }

        Ok(Self {
            suffix,
            skip_rows,
            columns,
            na_values,
        })
    }

    /// Check whether a token is one of this type's missing-value markers
    pub fn is_missing_value(&self, value: &str) -> bool {
        self.na_values.iter().any(|na| na == value)
    }
}

/// One parsed telemetry row.
///
/// `values` holds at most `columns.len()` entries for the owning config and
/// may be shorter when the input line was truncated; it is never shorter
/// than the four fields needed for the timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataRow {
    /// Column values as strings, aligned to the configured column order
    pub values: Vec<String>,

    /// Canonical YYYYMMDDHHMM timestamp derived from the first four values
    pub datetime: String,

    /// Basename of the file this row came from
    pub source_file: String,
}

/// Outcome of processing a single configured file-type/path pair
#[derive(Debug, Clone, Serialize)]
pub struct FileOutcome {
    /// File-type key the pair was registered under
    pub file_type: String,

    /// Number of rows loaded and written
    pub rows_loaded: usize,

    /// Path of the CSV that was written
    pub output_path: PathBuf,
}
