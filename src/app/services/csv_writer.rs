//! CSV output for parsed telemetry rows
//!
//! Serializes rows (derived timestamp first, source filename last) to a
//! comma-delimited file with a fixed header. Quoting is disabled: ACE field
//! values are simple numeric tokens, and the upstream consumers of these
//! files expect raw comma-joined lines.

use std::fs::File;
use std::path::Path;
use tracing::info;

use crate::app::models::DataRow;
use crate::constants::{DATETIME_COLUMN, SOURCE_FILE_COLUMN};
use crate::{Error, Result};

/// Write rows to a CSV file with the header
/// `datetime,<columns...>,source_file`.
///
/// Rows truncated by the line parser produce ragged CSV lines by design; the
/// writer does not pad them out to the configured column count.
pub fn write_csv(rows: &[DataRow], output_path: &Path, columns: &[String]) -> Result<()> {
    let file = File::create(output_path).map_err(|e| {
        Error::csv_write(
            output_path.display().to_string(),
            format!("Could not open output file: {}", e),
            None,
        )
    })?;

    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Never)
        .flexible(true)
        .from_writer(file);

    let mut header: Vec<&str> = Vec::with_capacity(columns.len() + 2);
    header.push(DATETIME_COLUMN);
    header.extend(columns.iter().map(String::as_str));
    header.push(SOURCE_FILE_COLUMN);
    writer
        .write_record(&header)
        .map_err(|e| wrap(output_path, "Failed to write header", e))?;

    for row in rows {
        let mut record: Vec<&str> = Vec::with_capacity(row.values.len() + 2);
        record.push(&row.datetime);
        record.extend(row.values.iter().map(String::as_str));
        record.push(&row.source_file);
        writer
            .write_record(&record)
            .map_err(|e| wrap(output_path, "Failed to write row", e))?;
    }

    writer
        .flush()
        .map_err(|e| Error::csv_write(output_path.display().to_string(), e.to_string(), None))?;

    info!("CSV file written to {}", output_path.display());
    Ok(())
}

fn wrap(path: &Path, message: &str, source: csv::Error) -> Error {
    Error::csv_write(path.display().to_string(), message, Some(source))
}
