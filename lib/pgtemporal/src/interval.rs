use crate::duration::Duration;
use tracing::trace;

/// Where the interval scanner is in `[-]Y years [-]M mons [-]D days [-]HH:MM:SS.f`.
///
/// States are ordered: a unit is only read while the scanner has not gone past it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum IntervalState {
    Start,
    AfterYears,
    AfterMonths,
    AfterDays,
    AfterHours,
    AfterMinutes,
    Fraction,
}

/// Accumulates the fields of an interval, one byte at a time.
#[derive(Debug, Clone, Copy)]
struct IntervalScanner {
    state: IntervalState,
    value: f64,
    sign: f64,
    denominator: f64,
    years: i64,
    months: i64,
    days: i64,
    hours: f64,
    minutes: f64,
    seconds: f64,
    fraction: f64,
}

impl IntervalScanner {
    fn new() -> Self {
        Self {
            state: IntervalState::Start,
            value: 0.,
            sign: 1.,
            denominator: 1.,
            years: 0,
            months: 0,
            days: 0,
            hours: 0.,
            minutes: 0.,
            seconds: 0.,
            fraction: 0.,
        }
    }

    fn scan(mut self, mut input: &[u8]) -> Self {
        while let Some((byte, rest)) = input.split_first() {
            input = rest;
            match *byte {
                b'-' => self.sign = -1.,
                digit @ b'0'..=b'9' => {
                    self.value = self.value * 10. + f64::from(digit - b'0');
                    if self.state == IntervalState::Fraction {
                        self.denominator *= 10.;
                    }
                }
                b'y' if self.state < IntervalState::AfterYears => {
                    self.years = self.commit_unit();
                    self.state = IntervalState::AfterYears;
                    input = skip_unit(input);
                }
                b'm' if self.state < IntervalState::AfterMonths => {
                    self.months = self.commit_unit();
                    self.state = IntervalState::AfterMonths;
                    input = skip_unit(input);
                }
                b'd' if self.state < IntervalState::AfterDays => {
                    self.days = self.commit_unit();
                    self.state = IntervalState::AfterDays;
                    input = skip_unit(input);
                }
                b':' if self.state < IntervalState::AfterHours => {
                    self.hours = self.commit_clock();
                    self.state = IntervalState::AfterHours;
                }
                b':' if self.state == IntervalState::AfterHours => {
                    self.minutes = self.commit_clock();
                    self.state = IntervalState::AfterMinutes;
                }
                b'.' if self.state == IntervalState::AfterMinutes => {
                    self.seconds = self.commit_clock();
                    self.state = IntervalState::Fraction;
                }
                _ => (),
            }
        }
        self
    }

    /// Years, months and days take the sign in effect and reset it.
    #[expect(clippy::cast_possible_truncation)]
    fn commit_unit(&mut self) -> i64 {
        let value = (self.value * self.sign) as i64;
        self.value = 0.;
        self.sign = 1.;
        value
    }

    /// Clock fields are unsigned: the sign applies to the whole clock at the end.
    fn commit_clock(&mut self) -> f64 {
        let value = self.value;
        self.value = 0.;
        value
    }

    #[expect(clippy::cast_possible_truncation)]
    fn finish(mut self) -> Duration {
        match self.state {
            IntervalState::AfterHours => self.minutes = self.value,
            IntervalState::AfterMinutes => self.seconds = self.value,
            IntervalState::Fraction => self.fraction = self.value / self.denominator,
            IntervalState::Start
            | IntervalState::AfterYears
            | IntervalState::AfterMonths
            | IntervalState::AfterDays => (),
        }
        // summation order matters for the rounding of the microseconds
        let clock = if self.sign < 0. {
            -(self.fraction + self.seconds + self.minutes * 60. + self.hours * 3600.)
        } else {
            self.seconds + (self.fraction + self.minutes * 60. + self.hours * 3600.)
        };
        let days = self
            .years
            .saturating_mul(365)
            .saturating_add(self.months.saturating_mul(30))
            .saturating_add(self.days);
        let seconds = clock.floor();
        Duration::new(
            days,
            seconds as i64,
            ((clock - seconds) * 1_000_000.).round() as i64,
        )
    }
}

/// Skips the rest of a unit word, up to and including the next whitespace.
fn skip_unit(input: &[u8]) -> &[u8] {
    match input.iter().position(u8::is_ascii_whitespace) {
        Some(end) => &input[end + 1..],
        None => &[],
    }
}

/// Decodes the textual output of an `interval` column.
///
/// Years are counted as 365 days and months as 30 days.
/// This decoder never fails: unknown bytes are skipped and missing units are zero.
///
/// ```
/// use pgtemporal::{Duration, decode_interval};
///
/// assert_eq!(
///     decode_interval(Some(b"1 year 2 mons 3 days 04:05:06".as_slice())),
///     Some(Duration::new(428, 14_706, 0))
/// );
/// assert_eq!(
///     decode_interval(Some(b"-04:05:06".as_slice())),
///     Some(Duration::new(0, -14_706, 0))
/// );
/// assert_eq!(decode_interval(None), None);
/// ```
pub fn decode_interval(input: Option<&[u8]>) -> Option<Duration> {
    let input = input?;
    let duration = IntervalScanner::new().scan(input).finish();
    trace!("interval parsed, {duration}");
    Some(duration)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interval(input: &str) -> Option<Duration> {
        decode_interval(Some(input.as_bytes()))
    }

    fn raw(input: &str) -> (i64, i64, i64) {
        let duration = IntervalScanner::new().scan(input.as_bytes()).finish();
        (duration.days(), duration.seconds(), duration.microseconds())
    }

    #[test]
    fn absent() {
        assert_eq!(decode_interval(None), None);
    }

    #[test]
    fn full() {
        assert_eq!(raw("1 year 2 mons 3 days 04:05:06"), (428, 14_706, 0));
        assert_eq!(raw("2 years 1 mon 00:00:00"), (760, 0, 0));
        assert_eq!(raw("1 day 01:00:00.5"), (1, 3600, 500_000));
    }

    #[test]
    fn negative_clock() {
        assert_eq!(raw("-04:05:06"), (0, -14_706, 0));
        assert_eq!(raw("-00:00:00.25"), (0, -1, 750_000));
        assert_eq!(interval("-04:05:06"), Some(Duration::new(-1, 71_694, 0)));
    }

    #[test]
    fn signed_units() {
        assert_eq!(raw("-1 years -2 mons"), (-425, 0, 0));
        assert_eq!(raw("1 year -2 mons +3 days"), (308, 0, 0));
        assert_eq!(raw("-3 days 04:00:00"), (-3, 14_400, 0));
        assert_eq!(raw("3 days -04:00:00"), (3, -14_400, 0));
    }

    #[test]
    fn units_only() {
        assert_eq!(raw("3 days"), (3, 0, 0));
        assert_eq!(raw("1 mon"), (30, 0, 0));
        assert_eq!(raw("10 years"), (3650, 0, 0));
        assert_eq!(raw("1 year 1 day"), (366, 0, 0));
    }

    #[test]
    fn clock_only() {
        assert_eq!(raw("00:00:00"), (0, 0, 0));
        assert_eq!(raw("12:34"), (0, 45_240, 0));
        assert_eq!(raw("12:34:56"), (0, 45_296, 0));
        assert_eq!(raw("00:00:01.5"), (0, 1, 500_000));
        assert_eq!(raw("00:00:00.000001"), (0, 0, 1));
        assert_eq!(raw("00:00:00.123456789"), (0, 0, 123_457));
        assert_eq!(raw("100:00:00"), (0, 360_000, 0));
    }

    #[test]
    fn units_out_of_order_are_skipped() {
        // "years" after the months is ignored but its digits stay in the accumulator
        assert_eq!(raw("1 mon 2 years 3 days"), (53, 0, 0));
        // days after the clock are never read
        assert_eq!(raw("01:00:00 3 days"), (0, 3603, 0));
    }

    #[test]
    fn garbage() {
        assert_eq!(raw(""), (0, 0, 0));
        assert_eq!(raw("nothing"), (0, 0, 0));
        assert_eq!(raw("@ 1 day"), (1, 0, 0));
        assert_eq!(raw("1 d"), (1, 0, 0));
        assert_eq!(raw("5"), (0, 0, 0));
        assert_eq!(raw("-"), (0, 0, 0));
        assert_eq!(raw(".5"), (0, 0, 0));
    }

    #[test]
    fn fraction_rounding() {
        assert_eq!(raw("0:05:06.0082515"), (0, 306, 8251));
        assert_eq!(raw("-0:05:06.0082515"), (0, -307, 991_748));
        assert_eq!(raw("1 day 04:05:06.0000005"), (1, 14_706, 1));
    }

    #[test]
    fn huge() {
        assert_eq!(raw("99999999999999999999 years").0, i64::MAX);
        assert_eq!(raw("-99999999999999999999 days").0, i64::MIN);
        assert!(interval(&"9".repeat(400)).is_some());
        assert!(interval(&format!("0:0:0.{}", "9".repeat(400))).is_some());
    }

    #[test]
    fn skip_unit_word() {
        assert_eq!(skip_unit(b"ears 2 mons"), b"2 mons");
        assert_eq!(skip_unit(b"ays"), b"");
        assert_eq!(skip_unit(b"ays\t04:00"), b"04:00");
    }

    #[test]
    fn states_are_ordered() {
        assert!(IntervalState::Start < IntervalState::AfterYears);
        assert!(IntervalState::AfterDays < IntervalState::AfterHours);
        assert!(IntervalState::AfterMinutes < IntervalState::Fraction);
    }
}
