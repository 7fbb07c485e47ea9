// ABOUTME: Compact human-readable duration formatting and parsing ("2m 5s", "1h 30m")
// ABOUTME: Formatting keeps only the two largest nonzero units, so round trips are lossy

//! Duration codec
//!
//! [`format_duration`] renders years, months, days, hours, minutes and seconds
//! as lowercase unit letters (`y`, `m`, `d`, `h`, `m`, `s`) and keeps the two
//! largest nonzero units. [`parse_duration`] accepts a bare integer number of
//! seconds or the unit-letter form. Months and minutes share the letter `m`;
//! the parser reads `m` as minutes, so formatting then parsing is not an exact
//! round trip whenever a unit was dropped or months were rendered.
//!
//! Calendar units are fixed lengths: a year is 365 days and a month is 30 days.

use omphalos_core::errors::DurationParseError;
use regex::Regex;
use std::sync::LazyLock;

/// Rendered for zero, negative or non-finite durations
pub const EMPTY_DURATION: &str = "---";

const MS_PER_SECOND: u64 = 1000;
const MS_PER_MINUTE: u64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: u64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: u64 = 24 * MS_PER_HOUR;
const MS_PER_MONTH: u64 = 30 * MS_PER_DAY;
const MS_PER_YEAR: u64 = 365 * MS_PER_DAY;

/// Number of units kept by [`format_duration`]
const UNITS_KEPT: usize = 2;

/// Unit-letter body: optional years, days, hours, minutes, seconds in that order
static DURATION_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"^(?:(\d+(?:\.\d+)?)Y)?(?:(\d+(?:\.\d+)?)D)?(?:(\d+(?:\.\d+)?)H)?(?:(\d+(?:\.\d+)?)M)?(?:(\d+(?:\.\d+)?)S)?$",
    )
    .ok()
});

/// Seconds per unit, aligned with the capture groups of [`DURATION_PATTERN`]
const PATTERN_UNIT_SECONDS: [f64; 5] = [
    (MS_PER_YEAR / MS_PER_SECOND) as f64,
    (MS_PER_DAY / MS_PER_SECOND) as f64,
    (MS_PER_HOUR / MS_PER_SECOND) as f64,
    (MS_PER_MINUTE / MS_PER_SECOND) as f64,
    1.0,
];

/// Format `seconds` as its two largest nonzero units, e.g. `125.0` → `"2m 5s"`
///
/// Sub-millisecond precision is truncated. Zero, negative and non-finite
/// inputs render [`EMPTY_DURATION`].
#[must_use]
pub fn format_duration(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return EMPTY_DURATION.to_owned();
    }
    let mut remaining = (seconds * MS_PER_SECOND as f64).trunc() as u64;
    if remaining == 0 {
        return "0s".to_owned();
    }

    let mut units = Vec::with_capacity(6);
    for (size, letter) in [
        (MS_PER_YEAR, 'y'),
        (MS_PER_MONTH, 'm'),
        (MS_PER_DAY, 'd'),
        (MS_PER_HOUR, 'h'),
        (MS_PER_MINUTE, 'm'),
    ] {
        let count = remaining / size;
        remaining %= size;
        if count > 0 {
            units.push(format!("{count}{letter}"));
        }
    }
    if remaining > 0 {
        units.push(format_seconds(remaining));
    }

    units.truncate(UNITS_KEPT);
    units.join(" ")
}

/// Seconds with up to three decimals and no trailing zeros
fn format_seconds(ms: u64) -> String {
    let whole = ms / MS_PER_SECOND;
    let frac = ms % MS_PER_SECOND;
    let mut out = whole.to_string();
    if frac > 0 {
        let digits = format!("{frac:03}");
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }
    out.push('s');
    out
}

/// Parse a duration in seconds from a bare integer or unit-letter text
///
/// Whitespace is ignored and letters are case-insensitive: `"2m5s"`,
/// `"2m 5s"` and `"125"` all parse to `125.0`.
///
/// # Errors
///
/// Returns `DurationParseError::Empty` for blank input, and
/// `DurationParseError::Malformed` when the text matches neither form.
pub fn parse_duration(text: &str) -> Result<f64, DurationParseError> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return Err(DurationParseError::Empty);
    }

    if compact.bytes().all(|b| b.is_ascii_digit()) {
        return compact
            .parse::<u64>()
            .map(|s| s as f64)
            .map_err(|_| DurationParseError::InvalidNumber { token: compact });
    }

    let body = compact.to_uppercase();
    let malformed = || DurationParseError::Malformed {
        input: compact.clone(),
    };
    let pattern = DURATION_PATTERN.as_ref().ok_or_else(malformed)?;
    let captures = pattern.captures(&body).ok_or_else(malformed)?;

    let mut total = 0.0;
    for (index, unit_seconds) in PATTERN_UNIT_SECONDS.iter().enumerate() {
        if let Some(group) = captures.get(index + 1) {
            let value: f64 = group
                .as_str()
                .parse()
                .map_err(|_| DurationParseError::InvalidNumber {
                    token: group.as_str().to_owned(),
                })?;
            total += value * unit_seconds;
        }
    }
    Ok(total)
}
