//! Application constants for ACE processor
//!
//! Configuration constants and default values used throughout the
//! ACE processor application.

// =============================================================================
// File-Type Keys and Naming
// =============================================================================

/// Supported ACE file-type keys
pub const FILE_TYPE_KEYS: &[&str] = &[
    "_ace_epam_5m",
    "_ace_mag_1m",
    "_ace_sis_5m",
    "_ace_swepam_1m",
];

/// Default file types to process if none specified
pub const DEFAULT_FILE_TYPES: &[&str] = FILE_TYPE_KEYS;

/// Extension carried by daily ACE telemetry files
pub const ACE_FILE_EXTENSION: &str = ".txt";

/// Default date stamp used to build daily input filenames (YYYYMMDD)
pub const DEFAULT_DATE_STAMP: &str = "20250101";

// =============================================================================
// Parsing Constants
// =============================================================================

/// Universal missing-value marker emitted on output.
///
/// Distinct per-type NA markers in the input are collapsed into this single
/// sentinel so downstream consumers only have one value to filter on.
pub const MISSING_VALUE_SENTINEL: &str = "-9999.9";

/// Minimum number of tokens a data line must yield to be usable.
///
/// Four values (YR, MO, DA, HHMM) are needed to derive the canonical
/// timestamp; shorter lines are skipped regardless of the configured
/// column count.
pub const MIN_ROW_TOKENS: usize = 4;

// =============================================================================
// Output Constants
// =============================================================================

/// Name of the derived timestamp column, emitted first in every CSV
pub const DATETIME_COLUMN: &str = "datetime";

/// Name of the trailing provenance column
pub const SOURCE_FILE_COLUMN: &str = "source_file";

/// Default output directory when none is supplied
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Build the expected output filename for a file-type key
pub fn output_filename(file_type: &str) -> String {
    format!("{}.csv", file_type)
}

/// Build the expected daily input filename for a file-type key
pub fn input_filename(date_stamp: &str, file_type: &str) -> String {
    format!("{}{}{}", date_stamp, file_type, ACE_FILE_EXTENSION)
}
