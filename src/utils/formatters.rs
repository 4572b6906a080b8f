//! Display formatting for timestamps, URLs and click counters
//!
//! Timestamps arrive as ISO-8601 strings from the backend. Naive values
//! (no offset) are UTC.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};

/// Default truncation length for URLs in tables
pub const URL_TRUNCATE_LENGTH: usize = 50;

const NEVER: &str = "Never";
const INVALID_DATE: &str = "Invalid date";

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
];

const OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%dT%H:%M%z"];

/// A parsed timestamp together with the offset text to echo back
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTimestamp {
    pub datetime: DateTime<FixedOffset>,
    pub offset_label: String,
}

/// Offset suffix exactly as written in the input, if any
fn offset_suffix(value: &str) -> Option<&str> {
    if value.ends_with('Z') || value.ends_with('z') {
        return Some(&value[value.len() - 1..]);
    }
    let time_start = value.find(['T', 't', ' '])?;
    let time_part = &value[time_start + 1..];
    time_part
        .rfind(['+', '-'])
        .map(|idx| &time_part[idx..])
}

/// Parse an ISO-8601 timestamp
pub fn parse_timestamp(value: &str) -> Option<ParsedTimestamp> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    match offset_suffix(value) {
        Some(suffix) => {
            let datetime = DateTime::parse_from_rfc3339(value)
                .ok()
                .or_else(|| {
                    OFFSET_FORMATS
                        .iter()
                        .find_map(|fmt| DateTime::parse_from_str(value, fmt).ok())
                })?;
            let offset_label = if suffix.eq_ignore_ascii_case("z") {
                "+00".to_string()
            } else {
                suffix.to_string()
            };
            Some(ParsedTimestamp {
                datetime,
                offset_label,
            })
        }
        None => {
            let naive = NAIVE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
                .or_else(|| {
                    NaiveDate::parse_from_str(value, "%Y-%m-%d")
                        .ok()
                        .and_then(|d| d.and_hms_opt(0, 0, 0))
                })?;
            Some(ParsedTimestamp {
                datetime: naive.and_utc().fixed_offset(),
                offset_label: "+00".to_string(),
            })
        }
    }
}

/// Absolute date: `MMM dd, yyyy HH:mm <offset>`
pub fn format_date(value: Option<&str>) -> String {
    let Some(value) = value else {
        return NEVER.to_string();
    };
    match parse_timestamp(value) {
        Some(parsed) => format!(
            "{} {}",
            parsed.datetime.format("%b %d, %Y %H:%M"),
            parsed.offset_label
        ),
        None => INVALID_DATE.to_string(),
    }
}

/// Relative date against the current clock
pub fn format_relative_date(value: Option<&str>) -> String {
    format_relative_date_at(value, Utc::now())
}

/// Relative date against an explicit `now`
pub fn format_relative_date_at(value: Option<&str>, now: DateTime<Utc>) -> String {
    let Some(value) = value else {
        return NEVER.to_string();
    };
    let Some(parsed) = parse_timestamp(value) else {
        return INVALID_DATE.to_string();
    };

    let diff_ms = (now - parsed.datetime.with_timezone(&Utc)).num_milliseconds();
    if (0..60_000).contains(&diff_ms) {
        return "Just now".to_string();
    }

    let distance = strict_distance(diff_ms.unsigned_abs());
    if diff_ms > 0 {
        format!("{} ago", distance)
    } else {
        format!("in {}", distance)
    }
}

const MINUTES_IN_DAY: f64 = 1440.0;
const MINUTES_IN_MONTH: f64 = 43_200.0;
const MINUTES_IN_YEAR: f64 = 525_600.0;

/// Largest whole unit describing `millis`, rounded to nearest
fn strict_distance(millis: u64) -> String {
    let seconds = millis as f64 / 1000.0;
    let minutes = seconds / 60.0;

    let (count, unit) = if minutes < 1.0 {
        (seconds.round(), "second")
    } else if minutes < 60.0 {
        (minutes.round(), "minute")
    } else if minutes < MINUTES_IN_DAY {
        ((minutes / 60.0).round(), "hour")
    } else if minutes < MINUTES_IN_MONTH {
        ((minutes / MINUTES_IN_DAY).round(), "day")
    } else if minutes < MINUTES_IN_YEAR {
        ((minutes / MINUTES_IN_MONTH).round(), "month")
    } else {
        ((minutes / MINUTES_IN_YEAR).round(), "year")
    };

    let count = count as u64;
    if count == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", count, unit)
    }
}

/// Whether a non-permanent URL is past its expiry
pub fn is_expired(expires_at: Option<&str>, is_permanent: bool) -> bool {
    is_expired_at(expires_at, is_permanent, Utc::now())
}

pub fn is_expired_at(expires_at: Option<&str>, is_permanent: bool, now: DateTime<Utc>) -> bool {
    if is_permanent {
        return false;
    }
    match expires_at.and_then(parse_timestamp) {
        Some(parsed) => now > parsed.datetime.with_timezone(&Utc),
        None => false,
    }
}

/// Shorten `url` to at most `max_length` characters, ending in `...`
pub fn truncate_url(url: &str, max_length: usize) -> String {
    if url.chars().count() <= max_length {
        return url.to_string();
    }
    let keep = max_length.saturating_sub(3);
    let mut truncated: String = url.chars().take(keep).collect();
    truncated.push_str("...");
    truncated
}

pub fn format_click_count(count: u64) -> String {
    match count {
        0 => "No clicks".to_string(),
        1 => "1 click".to_string(),
        n if n < 1_000 => format!("{} clicks", n),
        n if n < 1_000_000 => format!("{:.1}k clicks", n as f64 / 1_000.0),
        n => format!("{:.1}M clicks", n as f64 / 1_000_000.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
    }

    fn iso(dt: DateTime<Utc>) -> String {
        dt.to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
    }

    #[test]
    fn test_format_date_never_and_invalid() {
        assert_eq!(format_date(None), "Never");
        assert_eq!(format_date(Some("not-a-date")), "Invalid date");
        assert_eq!(format_date(Some("")), "Invalid date");
    }

    #[test]
    fn test_format_date_utc() {
        assert_eq!(
            format_date(Some("2025-12-31T23:59:59.999Z")),
            "Dec 31, 2025 23:59 +00"
        );
    }

    #[test]
    fn test_format_date_keeps_explicit_offset() {
        assert_eq!(
            format_date(Some("2025-12-31T23:59:59+02:00")),
            "Dec 31, 2025 23:59 +02:00"
        );
        assert_eq!(
            format_date(Some("2025-12-31T23:59:59-05:00")),
            "Dec 31, 2025 23:59 -05:00"
        );
    }

    #[test]
    fn test_format_date_naive_is_utc() {
        assert_eq!(
            format_date(Some("2025-12-31T23:59:59")),
            "Dec 31, 2025 23:59 +00"
        );
        assert_eq!(
            format_date(Some("2025-03-04T05:06:07.123456")),
            "Mar 04, 2025 05:06 +00"
        );
        assert_eq!(format_date(Some("2025-12-31")), "Dec 31, 2025 00:00 +00");
    }

    #[test]
    fn test_relative_just_now() {
        let now = fixed_now();
        assert_eq!(format_relative_date_at(Some(&iso(now)), now), "Just now");
        let half_minute = iso(now - Duration::seconds(30));
        assert_eq!(format_relative_date_at(Some(&half_minute), now), "Just now");
    }

    #[test]
    fn test_relative_past() {
        let now = fixed_now();
        let cases = [
            (Duration::minutes(1), "1 minute ago"),
            (Duration::minutes(5), "5 minutes ago"),
            (Duration::hours(3), "3 hours ago"),
            (Duration::days(2), "2 days ago"),
            (Duration::days(90), "3 months ago"),
            (Duration::days(800), "2 years ago"),
        ];
        for (offset, expected) in cases {
            let value = iso(now - offset);
            assert_eq!(format_relative_date_at(Some(&value), now), expected);
        }
    }

    #[test]
    fn test_relative_future_is_never_just_now() {
        let now = fixed_now();
        let soon = iso(now + Duration::seconds(20));
        assert_eq!(format_relative_date_at(Some(&soon), now), "in 20 seconds");

        let in_five_days = iso(now + Duration::days(5));
        let result = format_relative_date_at(Some(&in_five_days), now);
        assert_eq!(result, "in 5 days");
        assert!(result.contains("in") && result.contains("day"));
    }

    #[test]
    fn test_relative_against_real_clock() {
        let value = iso(Utc::now() - Duration::minutes(5));
        let result = format_relative_date(Some(&value));
        assert!(result.contains('5'));
        assert!(result.ends_with("minutes ago"));
        assert_eq!(format_relative_date(None), "Never");
        assert_eq!(format_relative_date(Some("garbage")), "Invalid date");
    }

    #[test]
    fn test_is_expired() {
        let now = fixed_now();
        let past = iso(now - Duration::days(1));
        let future = iso(now + Duration::days(1));
        assert!(is_expired_at(Some(&past), false, now));
        assert!(!is_expired_at(Some(&future), false, now));
        assert!(!is_expired_at(Some(&past), true, now));
        assert!(!is_expired_at(None, false, now));
        assert!(!is_expired_at(Some("bogus"), false, now));
    }

    #[test]
    fn test_truncate_url() {
        let long = "a".repeat(60);
        let truncated = truncate_url(&long, 50);
        assert_eq!(truncated.chars().count(), 50);
        assert!(truncated.ends_with("..."));

        assert_eq!(truncate_url("https://x.io", 50), "https://x.io");
        let exact = "b".repeat(50);
        assert_eq!(truncate_url(&exact, 50), exact);

        let unicode = "é".repeat(20);
        assert_eq!(truncate_url(&unicode, 10), format!("{}...", "é".repeat(7)));
    }

    #[test]
    fn test_format_click_count() {
        assert_eq!(format_click_count(0), "No clicks");
        assert_eq!(format_click_count(1), "1 click");
        assert_eq!(format_click_count(999), "999 clicks");
        assert_eq!(format_click_count(1500), "1.5k clicks");
        assert_eq!(format_click_count(2_500_000), "2.5M clicks");
    }
}
