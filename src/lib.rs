//! ACE Processor Library
//!
//! A Rust library for converting NOAA SWPC ACE space-weather telemetry
//! files from fixed-format text into CSV files.
//!
//! This library provides tools for:
//! - Looking up per-instrument parsing configurations in an immutable registry
//! - Parsing whitespace-delimited data lines with missing-value normalization
//! - Deriving canonical YYYYMMDDHHMM timestamps from the leading date columns
//! - Writing one CSV file per input file-type with a fixed header
//! - Recovering from per-file and per-line failures without aborting a run

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod csv_writer;
        pub mod datetime;
        pub mod line_parser;
        pub mod loader;
        pub mod pipeline;
        pub mod registry;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{DataRow, FileOutcome, FileTypeConfig};
pub use app::services::registry::TypeRegistry;
pub use config::Config;

/// Result type alias for the ACE processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for ACE file processing operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Input file missing or unreadable
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// Input path does not contain the expected file-type suffix
    #[error("Incorrect suffix for '{path}': expected '{expected}'")]
    SuffixMismatch { path: String, expected: String },

    /// Loader produced zero rows for a file
    #[error("No data loaded from '{path}'")]
    EmptyResult { path: String },

    /// Output CSV could not be opened or written
    #[error("CSV write error for '{path}': {message}")]
    CsvWrite {
        path: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// File-type key not present in the registry
    #[error("Unknown file type: {key}")]
    UnknownFileType { key: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a suffix mismatch error
    pub fn suffix_mismatch(path: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::SuffixMismatch {
            path: path.into(),
            expected: expected.into(),
        }
    }

    /// Create an empty result error
    pub fn empty_result(path: impl Into<String>) -> Self {
        Self::EmptyResult { path: path.into() }
    }

    /// Create a CSV write error with context
    pub fn csv_write(
        path: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvWrite {
            path: path.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an unknown file type error
    pub fn unknown_file_type(key: impl Into<String>) -> Self {
        Self::UnknownFileType { key: key.into() }
    }

    /// Whether this error is recoverable at per-file granularity.
    ///
    /// Everything except configuration problems is: the pipeline skips the
    /// affected file and continues with the next configured pair. Only an
    /// unreachable input location aborts a run.
    pub fn is_per_file(&self) -> bool {
        !matches!(self, Error::Configuration { .. })
    }
}


// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvWrite {
            path: "unknown".to_string(),
            message: "CSV writing failed".to_string(),
            source: Some(error),
        }
    }
}
