//! Canonical timestamp derivation
//!
//! Builds the YYYYMMDDHHMM string that keys every output row from the four
//! leading date columns of a telemetry line.

/// Concatenate year, month, day and time-of-day into a canonical timestamp.
///
/// Month and day are zero-padded to 2 digits and the time-of-day to 4; the
/// year is emitted as-is. No numeric validation is performed here: malformed
/// fields pass through padding at whatever width they naturally have, the
/// same as the upstream instrument feed behaves.
pub fn format_datetime(year: &str, month: &str, day: &str, hhmm: &str) -> String {
    format!("{}{:0>2}{:0>2}{:0>4}", year, month, day, hhmm)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pads_month_day_and_time() {
        assert_eq!(format_datetime("2025", "1", "1", "5"), "202501010005");
    }

    #[test]
    fn test_already_wide_fields_unchanged() {
        assert_eq!(format_datetime("2025", "12", "31", "2359"), "202512312359");
    }

    #[test]
    fn test_year_is_not_padded() {
        assert_eq!(format_datetime("25", "3", "7", "130"), "2503070130");
    }

    #[test]
    fn test_overlong_fields_pass_through() {
        // Padding widens, never truncates
        assert_eq!(format_datetime("2025", "013", "01", "12345"), "20250130112345");
    }

    #[test]
    fn test_non_numeric_fields_pass_through() {
        assert_eq!(format_datetime("yyyy", "m", "d", "t"), "yyyy0m0d000t");
    }
}
