//! Shared utility functions for Weather Explorer crates.

/// Date utility functions
pub mod dates {
    use chrono::{DateTime, NaiveDate};

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    /// Parse a date string in "YYYY-MM-DD" format (what `<input type="date">` yields)
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")?)
    }

    /// Parse an RFC 3339 timestamp (e.g. S3 `LastModified`) into its calendar date.
    pub fn parse_timestamp_date(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(DateTime::parse_from_rfc3339(s.trim())?.date_naive())
    }

    /// Calendar date of a backend timestamp for display.
    /// Falls back to the raw string when it is not RFC 3339.
    pub fn timestamp_label(s: &str) -> String {
        match parse_timestamp_date(s) {
            Ok(date) => format_date(&date),
            Err(_) => s.to_string(),
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_format_and_parse() {
            let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
            let formatted = format_date(&date);
            assert_eq!(formatted, "2024-01-05");
            let parsed = parse_date(&formatted).unwrap();
            assert_eq!(parsed, date);
        }

        #[test]
        fn test_parse_date_rejects_garbage() {
            assert!(parse_date("").is_err());
            assert!(parse_date("2024-13-01").is_err());
            assert!(parse_date("01/05/2024").is_err());
        }

        #[test]
        fn test_timestamp_label() {
            assert_eq!(timestamp_label("2024-03-09T17:45:02+00:00"), "2024-03-09");
            assert_eq!(timestamp_label("2024-03-09T23:10:00Z"), "2024-03-09");
            // Offset is kept, not converted to UTC
            assert_eq!(timestamp_label("2024-03-09T23:10:00-08:00"), "2024-03-09");
            assert_eq!(timestamp_label("yesterday"), "yesterday");
        }
    }
}

/// Byte size formatting
pub mod sizes {
    /// Render a byte count as kilobytes with one decimal, e.g. `1.5 KB`.
    pub fn kilobytes_label(bytes: u64) -> String {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    }

    #[cfg(test)]
    mod tests {
        use super::kilobytes_label;

        #[test]
        fn test_kilobytes_label() {
            assert_eq!(kilobytes_label(0), "0.0 KB");
            assert_eq!(kilobytes_label(1536), "1.5 KB");
            assert_eq!(kilobytes_label(2_097_152), "2048.0 KB");
        }
    }
}
