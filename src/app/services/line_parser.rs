//! Data-line tokenization and missing-value normalization
//!
//! Turns one raw telemetry line into a row of string values aligned to the
//! configured column list. Splitting is on runs of whitespace; there are no
//! fixed column widths in the ACE feed.

use crate::app::models::FileTypeConfig;
use crate::constants::{MIN_ROW_TOKENS, MISSING_VALUE_SENTINEL};

/// Result of parsing one raw line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    /// Line yielded enough tokens to derive a timestamp
    Row(Vec<String>),

    /// Line yielded fewer than [`MIN_ROW_TOKENS`] tokens and must be
    /// skipped; carries the number of tokens that were read
    Short(usize),
}

/// Parse a raw data line against a file-type configuration.
///
/// Consumes at most `config.columns.len()` whitespace-delimited tokens; a
/// line with fewer tokens produces a truncated row rather than a padded one,
/// so downstream CSV lines can be ragged. Tokens matching any configured
/// missing-value marker are replaced with the universal output sentinel.
pub fn parse_line(raw_line: &str, config: &FileTypeConfig) -> ParsedLine {
    let values: Vec<String> = raw_line
        .split_whitespace()
        .take(config.columns.len())
        .map(|token| {
            if config.is_missing_value(token) {
                MISSING_VALUE_SENTINEL.to_string()
            } else {
                token.to_string()
            }
        })
        .collect();

    if values.len() < MIN_ROW_TOKENS {
        ParsedLine::Short(values.len())
    } else {
        ParsedLine::Row(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::FileTypeConfig;

    fn test_config() -> FileTypeConfig {
        FileTypeConfig::new(
            "_ace_swepam_1m.txt",
            12,
            vec![
                "YR", "MO", "DA", "HHMM", "Julian Day", "Seconds of the Day", "S",
                "Proton Density", "Bulk Speed", "Ion Temperature",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            vec!["-9999.9".to_string(), "-1.00e+05".to_string()],
        )
        .unwrap()
    }

    #[test]
    fn test_full_line_parses() {
        let line = "2025 01 01 0000   1   0  0    4.5   370.4  8.9e+04";
        match parse_line(line, &test_config()) {
            ParsedLine::Row(values) => {
                assert_eq!(values.len(), 10);
                assert_eq!(values[0], "2025");
                assert_eq!(values[3], "0000");
                assert_eq!(values[8], "370.4");
            }
            ParsedLine::Short(_) => panic!("expected a full row"),
        }
    }

    #[test]
    fn test_missing_markers_are_normalized() {
        let line = "2025 01 01 0000   1   0  9  -9999.9  -1.00e+05  1.2e+04";
        match parse_line(line, &test_config()) {
            ParsedLine::Row(values) => {
                assert_eq!(values[7], "-9999.9");
                assert_eq!(values[8], "-9999.9");
                assert_eq!(values[9], "1.2e+04");
            }
            ParsedLine::Short(_) => panic!("expected a full row"),
        }
    }

    #[test]
    fn test_short_line_is_skipped() {
        assert_eq!(
            parse_line("2025 01 01", &test_config()),
            ParsedLine::Short(3)
        );
        assert_eq!(parse_line("", &test_config()), ParsedLine::Short(0));
    }

    #[test]
    fn test_exactly_four_tokens_is_a_row() {
        match parse_line("2025 01 01 0000", &test_config()) {
            ParsedLine::Row(values) => assert_eq!(values.len(), 4),
            ParsedLine::Short(_) => panic!("four tokens are enough for a timestamp"),
        }
    }

    #[test]
    fn test_extra_tokens_are_ignored() {
        let line = "2025 01 01 0000 1 0 0 4.5 370.4 8.9e+04 EXTRA TRAILING";
        match parse_line(line, &test_config()) {
            ParsedLine::Row(values) => assert_eq!(values.len(), 10),
            ParsedLine::Short(_) => panic!("expected a full row"),
        }
    }

    #[test]
    fn test_marker_must_match_exactly() {
        // Substrings of a marker are real data
        let line = "2025 01 01 0000 1 0 0 -999.9 370.4 8.9e+04";
        match parse_line(line, &test_config()) {
            ParsedLine::Row(values) => assert_eq!(values[7], "-999.9"),
            ParsedLine::Short(_) => panic!("expected a full row"),
        }
    }
}
