//! Minute-of-day arithmetic for schedule comparison.
//!
//! Catalog activities carry wall-clock times as `"HH:MM"` strings. Everything
//! downstream works on integer minute offsets so that interval comparison is
//! a pair of integer comparisons.

use thiserror::Error;

/// A malformed `"HH:MM"` time string.
///
/// Extraction treats this as "drop the activity", never as a request failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid time '{input}': expected HH:MM")]
pub struct TimeParseError {
    pub input: String,
}

/// Parses an `"HH:MM"` string into a minute-of-day offset (0..=1439).
pub fn parse_time(s: &str) -> Result<u16, TimeParseError> {
    let err = || TimeParseError {
        input: s.to_string(),
    };

    let (hours, minutes) = s.trim().split_once(':').ok_or_else(&err)?;
    let hours: u16 = hours.parse().map_err(|_| err())?;
    let minutes: u16 = minutes.parse().map_err(|_| err())?;

    if hours > 23 || minutes > 59 {
        return Err(err());
    }

    Ok(hours * 60 + minutes)
}

/// Formats a minute-of-day offset back into a zero-padded `"HH:MM"` string.
pub fn format_minute(minute: u16) -> String {
    format!("{:02}:{:02}", minute / 60, minute % 60)
}

/// Half-open interval intersection test.
///
/// Intervals that merely touch (`a_end == b_start`) do not overlap, so a
/// course ending at 10:30 never collides with one starting at 10:30.
pub fn overlaps(a_start: u16, a_end: u16, b_start: u16, b_end: u16) -> bool {
    a_start < b_end && b_start < a_end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_time_valid() {
        assert_eq!(parse_time("08:30"), Ok(8 * 60 + 30));
        assert_eq!(parse_time("00:00"), Ok(0));
        assert_eq!(parse_time("23:59"), Ok(23 * 60 + 59));
        assert_eq!(parse_time(" 9:05 "), Ok(9 * 60 + 5));
    }

    #[test]
    fn test_parse_time_malformed() {
        for input in ["", "0830", "8h30", "ab:cd", "08:", ":30", "08:30:00"] {
            assert!(parse_time(input).is_err(), "'{input}' should not parse");
        }
    }

    #[test]
    fn test_parse_time_out_of_range() {
        assert!(parse_time("24:00").is_err());
        assert!(parse_time("12:60").is_err());
    }

    #[test]
    fn test_format_minute_round_trip() {
        assert_eq!(format_minute(8 * 60 + 30), "08:30");
        assert_eq!(format_minute(0), "00:00");
        assert_eq!(format_minute(23 * 60 + 59), "23:59");
    }

    #[test]
    fn test_overlaps_half_open() {
        // Proper overlap
        assert!(overlaps(510, 630, 570, 690));
        // Containment
        assert!(overlaps(510, 690, 540, 600));
        // Touching boundaries do not overlap
        assert!(!overlaps(510, 630, 630, 690));
        assert!(!overlaps(630, 690, 510, 630));
        // Disjoint
        assert!(!overlaps(510, 540, 600, 660));
    }
}
