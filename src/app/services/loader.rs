//! File loading for ACE telemetry files
//!
//! Drives header skipping and line-by-line parsing for one input file,
//! producing the in-memory row sequence consumed by the CSV writer. A bad
//! line never aborts a load; it is logged and skipped.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info, warn};

use super::datetime::format_datetime;
use super::line_parser::{parse_line, ParsedLine};
use crate::app::models::{DataRow, FileTypeConfig};
use crate::{Error, Result};

/// Result of loading one telemetry file
#[derive(Debug, Clone)]
pub struct LoadResult {
    /// Successfully parsed rows, in file order
    pub rows: Vec<DataRow>,

    /// Loading statistics
    pub stats: LoadStats,
}

/// Statistics for one file load
#[derive(Debug, Clone, Default)]
pub struct LoadStats {
    /// Header lines discarded
    pub headers_skipped: usize,

    /// Data lines encountered after the header section
    pub data_lines: usize,

    /// Data lines skipped for having too few tokens
    pub lines_skipped: usize,
}

/// Load one ACE telemetry file according to its file-type configuration.
///
/// Skips exactly `config.skip_rows` leading lines, then parses every
/// remaining line. Rows receive their canonical timestamp from the first
/// four values and the basename of `file_path` as provenance.
pub fn load_file(file_path: &Path, config: &FileTypeConfig) -> Result<LoadResult> {
    let file = File::open(file_path).map_err(|e| {
        Error::io(
            format!("Could not open file {}", file_path.display()),
            e,
        )
    })?;
    let mut reader = BufReader::new(file);

    let source_file = basename(file_path);
    let mut rows = Vec::new();
    let mut stats = LoadStats::default();
    let mut buf = Vec::new();

    // Discard the fixed header section
    for header_index in 1..=config.skip_rows {
        match read_line_lossy(&mut reader, &mut buf)? {
            Some(line) => {
                debug!("Skipped header line {}: {}", header_index, line);
                stats.headers_skipped += 1;
            }
            None => break,
        }
    }

    // Parse the data section
    while let Some(line) = read_line_lossy(&mut reader, &mut buf)? {
        stats.data_lines += 1;

        match parse_line(&line, config) {
            ParsedLine::Row(values) => {
                let datetime =
                    format_datetime(&values[0], &values[1], &values[2], &values[3]);
                rows.push(DataRow {
                    values,
                    datetime,
                    source_file: source_file.clone(),
                });
            }
            ParsedLine::Short(tokens_read) => {
                warn!(
                    "Line {} in {} has fewer columns than expected ({} < 4)",
                    stats.data_lines,
                    file_path.display(),
                    tokens_read
                );
                stats.lines_skipped += 1;
            }
        }
    }

    info!(
        "Processed {} data lines from {}",
        stats.data_lines,
        file_path.display()
    );

    Ok(LoadResult { rows, stats })
}

/// Read one line as raw bytes and convert it lossily to UTF-8.
///
/// Upstream feeds occasionally carry stray non-UTF-8 bytes (degree signs
/// in header comments, transmission glitches). Reading byte-wise keeps a
/// single bad byte from aborting the whole load. Returns `None` at EOF.
fn read_line_lossy<R: BufRead>(reader: &mut R, buf: &mut Vec<u8>) -> Result<Option<String>> {
    buf.clear();
    let bytes_read = reader.read_until(b'\n', buf)?;
    if bytes_read == 0 {
        return Ok(None);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
    }
    if buf.last() == Some(&b'\r') {
        buf.pop();
    }
    Ok(Some(String::from_utf8_lossy(buf).into_owned()))
}

/// Extract the basename of a path, falling back to the whole path when it
/// has no file component.
fn basename(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::services::registry::TypeRegistry;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    fn mag_config() -> FileTypeConfig {
        TypeRegistry::builtin()
            .unwrap()
            .lookup("_ace_mag_1m")
            .unwrap()
            .clone()
    }

    fn mag_file_content() -> String {
        let mut content = String::new();
        for i in 1..=12 {
            content.push_str(&format!("# header line {}\n", i));
        }
        content.push_str("2025 01 01 0000 1 0 0 1.2 -3.4 0.5 3.7 10.1 250.3\n");
        content.push_str("2025 01 01 0001 1 60 0 -999.9 -3.3 0.6 3.6 10.0 250.1\n");
        content
    }

    #[test]
    fn test_load_skips_headers_and_parses_rows() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "20250101_ace_mag_1m.txt", &mag_file_content());

        let result = load_file(&path, &mag_config()).unwrap();
        assert_eq!(result.stats.headers_skipped, 12);
        assert_eq!(result.stats.data_lines, 2);
        assert_eq!(result.rows.len(), 2);
    }

    #[test]
    fn test_rows_carry_datetime_and_source_file() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "20250101_ace_mag_1m.txt", &mag_file_content());

        let result = load_file(&path, &mag_config()).unwrap();
        let row = &result.rows[0];
        assert_eq!(row.datetime, "202501010000");
        assert_eq!(row.source_file, "20250101_ace_mag_1m.txt");
        // Marker in the second row normalized to the universal sentinel
        assert_eq!(result.rows[1].values[7], "-9999.9");
    }

    #[test]
    fn test_short_lines_are_skipped_not_fatal() {
        let dir = TempDir::new().unwrap();
        let mut content = mag_file_content();
        content.push_str("2025 01\n");
        content.push_str("2025 01 01 0002 1 120 0 1.1 -3.2 0.7 3.5 9.9 249.8\n");
        let path = write_file(&dir, "20250101_ace_mag_1m.txt", &content);

        let result = load_file(&path, &mag_config()).unwrap();
        assert_eq!(result.stats.data_lines, 4);
        assert_eq!(result.stats.lines_skipped, 1);
        assert_eq!(result.rows.len(), 3);
    }

    #[test]
    fn test_non_utf8_bytes_do_not_abort_load() {
        let dir = TempDir::new().unwrap();
        let mut content: Vec<u8> = Vec::new();
        for i in 1..=12 {
            content.extend_from_slice(format!("# header line {}\n", i).as_bytes());
        }
        content.extend_from_slice(b"2025 01 01 0000 1 0 0 1.2 -3.4 0.5 3.7 10.1 250.3\n");
        // Data line ending in a stray Latin-1 degree sign
        content.extend_from_slice(b"2025 01 01 0001 1 60 0 1.3 -3.3 0.6 3.6 10.0 250.1\xB0\n");
        content.extend_from_slice(b"2025 01 01 0002 1 120 0 1.1 -3.2 0.7 3.5 9.9 249.8\n");
        let path = dir.path().join("20250101_ace_mag_1m.txt");
        std::fs::write(&path, &content).unwrap();

        let result = load_file(&path, &mag_config()).unwrap();
        assert_eq!(result.stats.headers_skipped, 12);
        assert_eq!(result.stats.data_lines, 3);
        assert_eq!(result.rows.len(), 3);
        // Lines around the corrupt one survive untouched
        assert_eq!(result.rows[0].datetime, "202501010000");
        assert_eq!(result.rows[2].datetime, "202501010002");
        assert_eq!(result.rows[2].values[12], "249.8");
    }

    #[test]
    fn test_file_shorter_than_header_count() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "20250101_ace_mag_1m.txt", "# only\n# two\n");

        let result = load_file(&path, &mag_config()).unwrap();
        assert_eq!(result.stats.headers_skipped, 2);
        assert!(result.rows.is_empty());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope_ace_mag_1m.txt");
        assert!(load_file(&path, &mag_config()).is_err());
    }

    #[test]
    fn test_basename_extraction() {
        assert_eq!(
            basename(Path::new("/data/ace/20250101_ace_sis_5m.txt")),
            "20250101_ace_sis_5m.txt"
        );
        assert_eq!(basename(Path::new("bare.txt")), "bare.txt");
    }
}
