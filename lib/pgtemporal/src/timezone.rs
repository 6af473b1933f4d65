use crate::date_time::{Date, DateTime, InvalidTimezoneError, Time, TimezoneOffset};
use crate::decoder::{decode_date, decode_time, decode_timestamp};
use crate::duration::Duration;
use crate::interval::decode_interval;
use crate::parser::DecodeError;

/// Builds the timezone attached to decoded timestamps from their UTC offset.
///
/// It is called at most once per decoded timestamp, and only when the input carries an offset.
/// The factory is only borrowed for the duration of the decoding call.
///
/// Any closure `Fn(i32) -> Result<Tz, InvalidTimezoneError>` is a factory:
///
/// ```
/// use pgtemporal::{InvalidTimezoneError, decode_timestamp};
///
/// let in_seconds = |minutes: i32| Ok::<_, InvalidTimezoneError>(minutes * 60);
/// let date_time = decode_timestamp(Some(b"2001-01-01 12:00:00-02".as_slice()), Some(&in_seconds))?
///     .expect("not null");
/// assert_eq!(date_time.timezone(), Some(&-7200));
/// # Ok::<_, pgtemporal::DecodeError>(())
/// ```
pub trait TimezoneFactory {
    type Timezone;

    /// Builds the timezone of a signed offset in minutes east of UTC.
    fn timezone(&self, offset_in_minutes: i32) -> Result<Self::Timezone, InvalidTimezoneError>;
}

impl<F, Tz> TimezoneFactory for F
where
    F: Fn(i32) -> Result<Tz, InvalidTimezoneError>,
{
    type Timezone = Tz;

    #[inline]
    fn timezone(&self, offset_in_minutes: i32) -> Result<Tz, InvalidTimezoneError> {
        self(offset_in_minutes)
    }
}

/// The default [`TimezoneFactory`], building [`TimezoneOffset`]s.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedOffsetFactory;

impl TimezoneFactory for FixedOffsetFactory {
    type Timezone = TimezoneOffset;

    #[inline]
    fn timezone(&self, offset_in_minutes: i32) -> Result<TimezoneOffset, InvalidTimezoneError> {
        TimezoneOffset::new(offset_in_minutes)
    }
}

/// What the decoders get from the driver: for now only the timezone factory, if any.
///
/// Without factory, the offsets of timestamps are dropped and naive values are returned.
///
/// ```
/// use pgtemporal::DecodeContext;
///
/// let aware = DecodeContext::new();
/// let naive = DecodeContext::naive();
/// let input = Some(b"2001-01-01 12:00:00+05:30".as_slice());
/// assert_eq!(
///     aware.decode_timestamp(input)?.and_then(|v| v.into_timezone()).map(|tz| tz.in_minutes()),
///     Some(330)
/// );
/// assert!(naive.decode_timestamp(input)?.is_some_and(|v| v.is_naive()));
/// # Ok::<_, pgtemporal::DecodeError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeContext<F = FixedOffsetFactory> {
    timezone_factory: Option<F>,
}

impl DecodeContext {
    /// A context attaching [`TimezoneOffset`]s to timestamps.
    #[inline]
    pub fn new() -> Self {
        Self {
            timezone_factory: Some(FixedOffsetFactory),
        }
    }

    /// A context producing only naive timestamps.
    #[inline]
    pub fn naive() -> Self {
        Self {
            timezone_factory: None,
        }
    }
}

impl Default for DecodeContext {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<F: TimezoneFactory> DecodeContext<F> {
    /// A context attaching the timezones built by the given factory.
    #[inline]
    pub fn with_timezone_factory(timezone_factory: F) -> Self {
        Self {
            timezone_factory: Some(timezone_factory),
        }
    }

    /// Disables the timezone factory.
    #[inline]
    #[must_use]
    pub fn without_timezones(self) -> Self {
        Self {
            timezone_factory: None,
        }
    }

    #[inline]
    pub fn timezone_factory(&self) -> Option<&F> {
        self.timezone_factory.as_ref()
    }

    /// See [`decode_date`].
    #[inline]
    pub fn decode_date(&self, input: Option<&[u8]>) -> Result<Option<Date>, DecodeError> {
        decode_date(input)
    }

    /// See [`decode_time`].
    #[inline]
    pub fn decode_time(&self, input: Option<&[u8]>) -> Result<Option<Time>, DecodeError> {
        decode_time(input)
    }

    /// See [`decode_timestamp`].
    #[inline]
    pub fn decode_timestamp(
        &self,
        input: Option<&[u8]>,
    ) -> Result<Option<DateTime<F::Timezone>>, DecodeError> {
        decode_timestamp(input, self.timezone_factory.as_ref())
    }

    /// See [`decode_interval`].
    #[inline]
    pub fn decode_interval(&self, input: Option<&[u8]>) -> Option<Duration> {
        decode_interval(input)
    }
}
