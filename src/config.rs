//! Configuration for a conversion run
//!
//! Holds the externally supplied paths and file-type selection. Built once
//! by the CLI layer from arguments and passed by reference into the
//! pipeline; there is no ambient global configuration.

use crate::constants::{input_filename, DEFAULT_DATE_STAMP, DEFAULT_FILE_TYPES, DEFAULT_OUTPUT_DIR};
use crate::{Error, Result};
use std::path::PathBuf;

/// Run configuration for the ACE processor
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the daily ACE telemetry files
    pub input_dir: PathBuf,

    /// Directory the per-type CSV files are written into
    pub output_dir: PathBuf,

    /// Date stamp used to build daily input filenames (YYYYMMDD)
    pub date_stamp: String,

    /// File-type keys to process, in order
    pub file_types: Vec<String>,

    /// Validate and report without writing any output
    pub dry_run: bool,
}

impl Config {
    /// Create a configuration with default date stamp and file types
    pub fn new(input_dir: PathBuf, output_dir: PathBuf) -> Self {
        Self {
            input_dir,
            output_dir,
            date_stamp: DEFAULT_DATE_STAMP.to_string(),
            file_types: DEFAULT_FILE_TYPES.iter().map(|s| s.to_string()).collect(),
            dry_run: false,
        }
    }

    /// Set the date stamp for input filenames
    pub fn with_date_stamp(mut self, date_stamp: impl Into<String>) -> Self {
        self.date_stamp = date_stamp.into();
        self
    }

    /// Set the file types to process
    pub fn with_file_types(mut self, file_types: Vec<String>) -> Self {
        self.file_types = file_types;
        self
    }

    /// Enable dry-run mode
    pub fn with_dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }

    /// Validate the configured input location.
    ///
    /// This is the one fatal check of a run: if the input directory is
    /// unreachable, nothing can proceed and the process exits nonzero.
    pub fn validate(&self) -> Result<()> {
        if !self.input_dir.exists() {
            return Err(Error::configuration(format!(
                "Input directory not found: {}",
                self.input_dir.display()
            )));
        }
        if !self.input_dir.is_dir() {
            return Err(Error::configuration(format!(
                "Input path is not a directory: {}",
                self.input_dir.display()
            )));
        }
        Ok(())
    }

    /// Create the output directory if it does not exist yet
    pub fn ensure_output_directory(&self) -> Result<()> {
        if !self.output_dir.exists() {
            std::fs::create_dir_all(&self.output_dir).map_err(|e| {
                Error::configuration(format!(
                    "Failed to create output directory '{}': {}",
                    self.output_dir.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }

    /// Build the ordered (file-type, input-path) pairs for this run.
    ///
    /// Daily ACE files are named `<date><key>.txt`, so the expected suffix
    /// check in the pipeline falls out of the naming scheme.
    pub fn file_pairs(&self) -> Vec<(String, PathBuf)> {
        self.file_types
            .iter()
            .map(|file_type| {
                let filename = input_filename(&self.date_stamp, file_type);
                (file_type.clone(), self.input_dir.join(filename))
            })
            .collect()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(PathBuf::from("."), PathBuf::from(DEFAULT_OUTPUT_DIR))
    }
}
