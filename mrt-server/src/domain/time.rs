//! Departure time handling.
//!
//! The upstream schedule carries departures as comma-separated "HH:MM"
//! lists. Times are 24-hour and zero-padded, and always refer to the
//! current service day.

use chrono::{NaiveTime, Timelike};
use std::fmt;

/// Error returned when a time token is not a strict "HH:MM" value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time format: {token} ({reason})")]
pub struct TimeFormatError {
    token: String,
    reason: &'static str,
}

impl TimeFormatError {
    fn new(token: &str, reason: &'static str) -> Self {
        Self {
            token: token.to_string(),
            reason,
        }
    }

    /// The offending token, after trimming.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Why the token was rejected.
    pub fn reason(&self) -> &'static str {
        self.reason
    }
}

/// A scheduled departure, minute precision.
///
/// # Examples
///
/// ```
/// use mrt_server::domain::DepartureTime;
///
/// let time = DepartureTime::parse_hhmm("05:07").unwrap();
/// assert_eq!(time.to_string(), "05:07");
///
/// assert!(DepartureTime::parse_hhmm("5:07").is_err());
/// assert!(DepartureTime::parse_hhmm("24:00").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DepartureTime(NaiveTime);

impl DepartureTime {
    /// Parse a strict "HH:MM" string.
    pub fn parse_hhmm(s: &str) -> Result<Self, TimeFormatError> {
        // Must be exactly 5 characters: HH:MM
        if s.len() != 5 {
            return Err(TimeFormatError::new(s, "expected HH:MM format"));
        }

        let bytes = s.as_bytes();

        if bytes[2] != b':' {
            return Err(TimeFormatError::new(s, "expected colon at position 2"));
        }

        let hour = parse_two_digits(&bytes[0..2])
            .ok_or_else(|| TimeFormatError::new(s, "invalid hour digits"))?;
        if hour > 23 {
            return Err(TimeFormatError::new(s, "hour must be 0-23"));
        }

        let minute = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| TimeFormatError::new(s, "invalid minute digits"))?;
        if minute > 59 {
            return Err(TimeFormatError::new(s, "minute must be 0-59"));
        }

        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(Self)
            .ok_or_else(|| TimeFormatError::new(s, "invalid time"))
    }

    /// Truncate a wall-clock time to the minute.
    ///
    /// Departures are compared against the current time at minute
    /// precision, so "now" at 10:15:42 compares equal to a 10:15 departure.
    pub fn from_clock(now: NaiveTime) -> Self {
        Self(
            now.with_second(0)
                .and_then(|t| t.with_nanosecond(0))
                .unwrap_or(now),
        )
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }
}

impl fmt::Display for DepartureTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Parse exactly two ASCII digits.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    match bytes {
        [a, b] if a.is_ascii_digit() && b.is_ascii_digit() => {
            Some(u32::from(a - b'0') * 10 + u32::from(b - b'0'))
        }
        _ => None,
    }
}

/// Parse a comma-separated list of "HH:MM" times.
///
/// Tokens are trimmed; empty tokens are skipped. The first malformed
/// token fails the whole list, so callers never see a partial result.
/// Upstream order is preserved.
///
/// # Examples
///
/// ```
/// use mrt_server::domain::parse_time_list;
///
/// let times = parse_time_list("05:00,, 23:50").unwrap();
/// let shown: Vec<String> = times.iter().map(|t| t.to_string()).collect();
/// assert_eq!(shown, ["05:00", "23:50"]);
///
/// assert!(parse_time_list("05:00,garbage").is_err());
/// ```
pub fn parse_time_list(raw: &str) -> Result<Vec<DepartureTime>, TimeFormatError> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(DepartureTime::parse_hhmm)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clock(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn parse_valid_times() {
        assert_eq!(DepartureTime::parse_hhmm("00:00").unwrap().to_string(), "00:00");
        assert_eq!(DepartureTime::parse_hhmm("23:59").unwrap().to_string(), "23:59");

        let t = DepartureTime::parse_hhmm("14:30").unwrap();
        assert_eq!(t.hour(), 14);
        assert_eq!(t.minute(), 30);
    }

    #[test]
    fn parse_rejects_malformed() {
        for bad in ["1430", "14:3", "4:30", "25:00", "14:60", "ab:cd", "14-30", "14:30:00", ""] {
            assert!(DepartureTime::parse_hhmm(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn parse_rejects_non_ascii_without_panicking() {
        assert!(DepartureTime::parse_hhmm("1é:0").is_err());
    }

    #[test]
    fn error_names_token() {
        let err = DepartureTime::parse_hhmm("garbage").unwrap_err();
        assert_eq!(err.token(), "garbage");
        assert_eq!(err.reason(), "expected HH:MM format");
        assert_eq!(
            err.to_string(),
            "invalid time format: garbage (expected HH:MM format)"
        );
    }

    #[test]
    fn error_explains_rejection() {
        let err = DepartureTime::parse_hhmm("25:00").unwrap_err();
        assert_eq!(err.to_string(), "invalid time format: 25:00 (hour must be 0-23)");

        let err = DepartureTime::parse_hhmm("12:7a").unwrap_err();
        assert_eq!(err.reason(), "invalid minute digits");
    }

    #[test]
    fn from_clock_drops_seconds() {
        let t = DepartureTime::from_clock(clock(10, 15, 42));
        assert_eq!(t, DepartureTime::parse_hhmm("10:15").unwrap());
    }

    #[test]
    fn list_skips_empty_tokens() {
        let times = parse_time_list("05:00,, 23:50").unwrap();
        let shown: Vec<String> = times.iter().map(ToString::to_string).collect();
        assert_eq!(shown, ["05:00", "23:50"]);
    }

    #[test]
    fn list_of_only_separators_is_empty() {
        assert!(parse_time_list("").unwrap().is_empty());
        assert!(parse_time_list(" , ,,").unwrap().is_empty());
    }

    #[test]
    fn list_preserves_upstream_order() {
        let times = parse_time_list("23:00, 05:00, 12:00").unwrap();
        let shown: Vec<String> = times.iter().map(ToString::to_string).collect();
        assert_eq!(shown, ["23:00", "05:00", "12:00"]);
    }

    #[test]
    fn list_fails_fast_on_bad_token() {
        let err = parse_time_list("05:00,garbage, 06:00").unwrap_err();
        assert_eq!(err.token(), "garbage");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn hhmm() -> impl Strategy<Value = (u32, u32)> {
        (0u32..24, 0u32..60)
    }

    proptest! {
        #[test]
        fn formatted_times_parse_back((h, m) in hhmm()) {
            let s = format!("{h:02}:{m:02}");
            let t = DepartureTime::parse_hhmm(&s).unwrap();
            prop_assert_eq!(t.to_string(), s);
        }

        #[test]
        fn ordering_matches_string_ordering(a in hhmm(), b in hhmm()) {
            let sa = format!("{:02}:{:02}", a.0, a.1);
            let sb = format!("{:02}:{:02}", b.0, b.1);
            let ta = DepartureTime::parse_hhmm(&sa).unwrap();
            let tb = DepartureTime::parse_hhmm(&sb).unwrap();
            prop_assert_eq!(ta.cmp(&tb), sa.cmp(&sb));
        }

        #[test]
        fn padding_and_blank_tokens_are_ignored(
            times in prop::collection::vec(hhmm(), 0..12),
            pad in "[ \t]{0,3}",
        ) {
            let raw = times
                .iter()
                .map(|(h, m)| format!("{pad}{h:02}:{m:02}{pad}"))
                .collect::<Vec<_>>()
                .join(&format!(",{pad},"));
            let parsed = parse_time_list(&raw).unwrap();
            prop_assert_eq!(parsed.len(), times.len());
        }
    }
}
