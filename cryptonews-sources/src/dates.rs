//! Timestamp parsing for source payloads
//!
//! Accepted inputs:
//! - RFC 2822, as used by RSS `pubDate`: `Tue, 10 Jun 2025 14:03:00 +0000`
//!   (obsolete zone names such as `GMT` are accepted)
//! - RFC 3339 / ISO 8601 with an explicit offset: `2025-06-10T14:03:00+02:00`
//! - ISO 8601 with a `Z` suffix: `2025-06-10T14:03:00Z`, rewritten to
//!   `+00:00` before parsing
//! - ISO 8601 without offset: `2025-06-10T14:03:00`, read as UTC
//!
//! Fractional seconds are allowed in the ISO forms.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Parse an RFC 2822 date
pub fn parse_rfc2822(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc2822(value.trim())
        .ok()
        .map(|d| d.with_timezone(&Utc))
}

/// Parse an ISO 8601 timestamp
pub fn parse_iso8601(value: &str) -> Option<DateTime<Utc>> {
    let normalized = normalize_utc_suffix(value.trim());

    if let Ok(d) = DateTime::parse_from_rfc3339(&normalized) {
        return Some(d.with_timezone(&Utc));
    }

    if let Ok(d) = DateTime::parse_from_str(&normalized, "%Y-%m-%d %H:%M:%S%.f%:z") {
        return Some(d.with_timezone(&Utc));
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(&normalized, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// Parse a feed entry date, trying RFC 2822 first
pub fn parse_feed_date(value: &str) -> Option<DateTime<Utc>> {
    parse_rfc2822(value).or_else(|| parse_iso8601(value))
}

/// Rewrite a trailing `Z`/`z` UTC designator as `+00:00`
fn normalize_utc_suffix(value: &str) -> String {
    match value.strip_suffix('Z').or_else(|| value.strip_suffix('z')) {
        Some(stripped) => format!("{stripped}+00:00"),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn test_z_suffix_normalized() {
        assert_eq!(normalize_utc_suffix("2025-06-10T14:03:00Z"), "2025-06-10T14:03:00+00:00");
        assert_eq!(
            parse_iso8601("2025-06-10T14:03:00Z"),
            Some(utc(2025, 6, 10, 14, 3, 0))
        );
    }

    #[test]
    fn test_iso_with_offset() {
        assert_eq!(
            parse_iso8601("2025-06-10T16:03:00+02:00"),
            Some(utc(2025, 6, 10, 14, 3, 0))
        );
    }

    #[test]
    fn test_iso_fractional_seconds() {
        let parsed = parse_iso8601("2025-06-10T14:03:00.123Z").unwrap();
        assert_eq!(parsed.timestamp(), utc(2025, 6, 10, 14, 3, 0).timestamp());
    }

    #[test]
    fn test_iso_without_offset_is_utc() {
        assert_eq!(
            parse_iso8601("2025-06-10T14:03:00"),
            Some(utc(2025, 6, 10, 14, 3, 0))
        );
    }

    #[test]
    fn test_rfc2822() {
        assert_eq!(
            parse_rfc2822("Tue, 10 Jun 2025 14:03:00 +0000"),
            Some(utc(2025, 6, 10, 14, 3, 0))
        );
        assert_eq!(
            parse_rfc2822("Tue, 10 Jun 2025 14:03:00 GMT"),
            Some(utc(2025, 6, 10, 14, 3, 0))
        );
    }

    #[test]
    fn test_feed_date_falls_back_to_iso() {
        assert_eq!(
            parse_feed_date("2025-06-10T14:03:00Z"),
            Some(utc(2025, 6, 10, 14, 3, 0))
        );
    }

    #[test]
    fn test_garbage_rejected() {
        assert_eq!(parse_feed_date("yesterday"), None);
        assert_eq!(parse_iso8601(""), None);
    }
}
