use crate::date_time::{DateTimeError, InvalidTimezoneError};
use std::fmt;
use std::str;

/// The kind of value a decoder was not able to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Date,
    Time,
    Timestamp,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Date => "date",
            Self::Time => "time",
            Self::Timestamp => "timestamp",
        })
    }
}

/// An error returned by the date, time and timestamp decoders.
///
/// The interval decoder never fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The input does not contain enough fields for the requested type.
    #[error("unable to parse {0}")]
    Parse(ValueKind),
    /// The fields have been read but do not make a valid value.
    #[error(transparent)]
    Construction(#[from] DateTimeError),
}

impl From<InvalidTimezoneError> for DecodeError {
    #[inline]
    fn from(error: InvalidTimezoneError) -> Self {
        Self::Construction(error.into())
    }
}

/// The two open-ended values the database prints for dates and timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Infinity {
    Negative,
    Positive,
}

pub(crate) fn infinity(input: &[u8]) -> Option<Infinity> {
    match input.trim_ascii() {
        b"infinity" => Some(Infinity::Positive),
        b"-infinity" => Some(Infinity::Negative),
        _ => None,
    }
}

/// Reads an unsigned decimal integer, skipping the ASCII whitespaces before it.
///
/// Returns `None` if there is no digit or if the value does not fit in an `i64`.
pub(crate) fn integer_frag(input: &[u8]) -> Option<(i64, &[u8])> {
    let (digits, input) = integer_prefix(input.trim_ascii_start());
    if digits.is_empty() {
        return None;
    }
    Some((str::from_utf8(digits).ok()?.parse().ok()?, input))
}

/// Reads a number of seconds like `06`, `06.789` or `.5`, skipping the ASCII whitespaces before it.
pub(crate) fn seconds_frag(input: &[u8]) -> Option<(f64, &[u8])> {
    let (number, input) = decimal_prefix(input.trim_ascii_start());
    // "." alone is rejected by the float parser
    Some((str::from_utf8(number).ok()?.parse().ok()?, input))
}

pub(crate) fn expect_byte(input: &[u8], constant: u8) -> Option<&[u8]> {
    input.strip_prefix(&[constant])
}

fn integer_prefix(input: &[u8]) -> (&[u8], &[u8]) {
    let end = input
        .iter()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(input.len());
    input.split_at(end)
}

fn decimal_prefix(input: &[u8]) -> (&[u8], &[u8]) {
    let mut end = input.len();
    let mut dot_seen = false;
    for (i, b) in input.iter().enumerate() {
        if b.is_ascii_digit() {
            // Ok
        } else if *b == b'.' && !dot_seen {
            dot_seen = true;
        } else {
            end = i;
            break;
        }
    }
    input.split_at(end)
}

/// Splits a number of seconds into whole seconds and rounded microseconds.
///
/// The microseconds are rounded half away from zero and may reach 1 000 000.
#[expect(clippy::cast_possible_truncation)]
pub(crate) fn split_seconds(seconds: f64) -> (i64, i64) {
    let whole = seconds.floor();
    (
        whole as i64,
        ((seconds - whole) * 1_000_000.).round() as i64,
    )
}

/// Carries a 60th second into the minutes.
///
/// There is no further carry: minute 60 is left to the constructors to reject.
pub(crate) fn fold_leap_second(minute: i64, second: i64) -> (i64, i64) {
    if second > 59 {
        (minute.saturating_add(1), second - 60)
    } else {
        (minute, second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer() {
        assert_eq!(integer_frag(b"2001-02"), Some((2001, b"-02".as_slice())));
        assert_eq!(integer_frag(b"  42"), Some((42, b"".as_slice())));
        assert_eq!(integer_frag(b"007:"), Some((7, b":".as_slice())));
        assert_eq!(integer_frag(b"-1"), None);
        assert_eq!(integer_frag(b""), None);
        assert_eq!(integer_frag(b"x1"), None);
        assert_eq!(integer_frag(b"99999999999999999999"), None);
    }

    #[test]
    fn seconds() {
        assert_eq!(seconds_frag(b"06"), Some((6., b"".as_slice())));
        assert_eq!(seconds_frag(b"06.5+02"), Some((6.5, b"+02".as_slice())));
        assert_eq!(seconds_frag(b".25"), Some((0.25, b"".as_slice())));
        assert_eq!(seconds_frag(b"7."), Some((7., b"".as_slice())));
        assert_eq!(seconds_frag(b"1.2.3"), Some((1.2, b".3".as_slice())));
        assert_eq!(seconds_frag(b"."), None);
        assert_eq!(seconds_frag(b"+1"), None);
    }

    #[test]
    fn infinities() {
        assert_eq!(infinity(b"infinity"), Some(Infinity::Positive));
        assert_eq!(infinity(b" -infinity\n"), Some(Infinity::Negative));
        assert_eq!(infinity(b"Infinity"), None);
        assert_eq!(infinity(b"infinityx"), None);
    }

    #[test]
    fn split() {
        assert_eq!(split_seconds(6.), (6, 0));
        assert_eq!(split_seconds(60.5), (60, 500_000));
        assert_eq!(split_seconds(6.789), (6, 789_000));
        assert_eq!(split_seconds(0.000_000_4), (0, 0));
        assert_eq!(split_seconds(59.999_999_9), (59, 1_000_000));
        assert_eq!(split_seconds(-14_706.789), (-14_707, 211_000));
    }

    #[test]
    fn fold() {
        assert_eq!(fold_leap_second(0, 60), (1, 0));
        assert_eq!(fold_leap_second(59, 61), (60, 1));
        assert_eq!(fold_leap_second(5, 59), (5, 59));
        assert_eq!(fold_leap_second(i64::MAX, 60), (i64::MAX, 0));
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            DecodeError::Parse(ValueKind::Date).to_string(),
            "unable to parse date"
        );
        assert_eq!(
            DecodeError::Parse(ValueKind::Timestamp).to_string(),
            "unable to parse timestamp"
        );
        assert_eq!(
            DecodeError::from(DateTimeError::MonthOutOfRange(13)).to_string(),
            "month must be in 1..12, got 13"
        );
    }
}
