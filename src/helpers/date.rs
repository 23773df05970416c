//! Date helper functions

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};

/// Shown for dates that cannot be parsed, matching what browsers print
pub const INVALID_DATE: &str = "Invalid Date";

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y/%m/%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%B %d, %Y",
    "%b %d, %Y",
    "%d %B %Y",
    "%d %b %Y",
];

/// Parse a date string in various formats.
///
/// Strings carrying an offset are converted to UTC; naive ones are read
/// as UTC.
pub fn parse_date_string(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    // RFC 3339 / ISO 8601 with offset
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.and_utc());
        }
    }

    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
        }
    }

    None
}

/// Format a date using Moment.js-compatible format string
///
/// # Examples
/// ```ignore
/// format_date(&date, "MMM D, YYYY") // -> "Jun 1, 2024"
/// ```
pub fn format_date(date: &DateTime<Utc>, format: &str) -> String {
    let chrono_format = moment_to_chrono_format(format, date.day());
    date.format(&chrono_format).to_string()
}

/// Display form of an optional raw date string.
///
/// Missing dates and dates that do not parse both render as
/// [`INVALID_DATE`].
pub fn display_date(raw: Option<&str>, format: &str) -> String {
    raw.and_then(parse_date_string)
        .map(|dt| format_date(&dt, format))
        .unwrap_or_else(|| INVALID_DATE.to_string())
}

/// English ordinal of a day of the month (`1st`, `2nd`, `11th`, `23rd`)
fn ordinal(day: u32) -> String {
    let suffix = match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", day, suffix)
}

/// Format a date in ISO 8601 form for `<time datetime="...">`
pub fn date_xml(date: &DateTime<Utc>) -> String {
    date.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// Convert Moment.js format to chrono format.
///
/// Tokens are matched longest first while scanning left to right, so
/// `MMM` never turns into `%m` followed by a stray `M`. Characters outside
/// any token are copied through, with `%` escaped. chrono has no ordinal
/// specifier, so `Do` is written out literally from `day`.
fn moment_to_chrono_format(format: &str, day: u32) -> String {
    const TOKENS: &[(&str, &str)] = &[
        ("YYYY", "%Y"),
        ("YY", "%y"),
        ("MMMM", "%B"),
        ("MMM", "%b"),
        ("MM", "%m"),
        ("M", "%-m"),
        ("DDDD", "%j"),
        ("DD", "%d"),
        ("D", "%-d"),
        ("dddd", "%A"),
        ("ddd", "%a"),
        ("HH", "%H"),
        ("H", "%-H"),
        ("hh", "%I"),
        ("h", "%-I"),
        ("mm", "%M"),
        ("ss", "%S"),
        ("SSS", "%3f"),
        ("ZZ", "%z"),
        ("A", "%p"),
    ];

    let mut result = String::with_capacity(format.len() * 2);
    let mut rest = format;

    'scan: while let Some(c) = rest.chars().next() {
        if let Some(tail) = rest.strip_prefix("Do") {
            result.push_str(&ordinal(day));
            rest = tail;
            continue;
        }
        for (from, to) in TOKENS {
            if let Some(tail) = rest.strip_prefix(from) {
                result.push_str(to);
                rest = tail;
                continue 'scan;
            }
        }
        if c == '%' {
            result.push_str("%%");
        } else {
            result.push(c);
        }
        rest = &rest[c.len_utf8()..];
    }

    result
}
