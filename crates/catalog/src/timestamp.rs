//! Lenient ISO-8601 timestamp parsing.

use chrono::{DateTime, Utc};

/// Parse an ISO-8601 timestamp, yielding `None` on malformed input.
///
/// Catalog timestamps are best-effort metadata: an unparseable value must
/// degrade to "no timestamp", never to an error. Only genuinely malformed
/// strings are dropped; this is a typed optional, not a failure suppressor.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|ts| ts.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_utc_z_suffix() {
        let ts = parse_timestamp("2025-06-01T12:00:00Z").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap());
    }

    #[test]
    fn parses_explicit_offset() {
        let ts = parse_timestamp("2025-06-01T14:00:00+02:00").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap());
    }

    #[test]
    fn malformed_input_yields_none() {
        assert!(parse_timestamp("not a date").is_none());
        assert!(parse_timestamp("").is_none());
        assert!(parse_timestamp("2025-13-99T00:00:00Z").is_none());
    }
}
