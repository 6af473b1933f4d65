//! Conversions to the [`chrono`] types, behind the `chrono` feature.
#![expect(clippy::expect_used)]

use crate::date_time::{Date, DateTime, InvalidTimezoneError, Time, TimezoneOffset};
use crate::duration::{Duration, DurationOverflowError};
use crate::timezone::TimezoneFactory;
use chrono::{FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone};

impl From<Date> for NaiveDate {
    #[inline]
    fn from(value: Date) -> Self {
        Self::from_ymd_opt(
            value.year().into(),
            value.month().into(),
            value.day().into(),
        )
        .expect("years 1 to 9999 are all supported by chrono")
    }
}

impl From<Time> for NaiveTime {
    #[inline]
    fn from(value: Time) -> Self {
        Self::from_hms_micro_opt(
            value.hour().into(),
            value.minute().into(),
            value.second().into(),
            value.microsecond(),
        )
        .expect("fields are already validated")
    }
}

impl<Tz> From<DateTime<Tz>> for NaiveDateTime {
    /// Drops the timezone.
    #[inline]
    fn from(value: DateTime<Tz>) -> Self {
        Self::new(value.date().into(), value.time().into())
    }
}

impl From<TimezoneOffset> for FixedOffset {
    #[inline]
    fn from(value: TimezoneOffset) -> Self {
        Self::east_opt(value.in_seconds()).expect("offsets are strictly within a day")
    }
}

impl TryFrom<DateTime<TimezoneOffset>> for chrono::DateTime<FixedOffset> {
    type Error = MissingTimezoneError;

    /// Fails on naive values.
    #[inline]
    fn try_from(value: DateTime<TimezoneOffset>) -> Result<Self, MissingTimezoneError> {
        let offset = FixedOffset::from(value.into_timezone().ok_or(MissingTimezoneError)?);
        Ok(offset
            .from_local_datetime(&value.into())
            .single()
            .expect("fixed offsets have a single mapping"))
    }
}

impl TryFrom<Duration> for TimeDelta {
    type Error = DurationOverflowError;

    #[inline]
    fn try_from(value: Duration) -> Result<Self, DurationOverflowError> {
        let microseconds =
            i64::try_from(value.as_microseconds()).map_err(|_| DurationOverflowError)?;
        Ok(Self::microseconds(microseconds))
    }
}

/// A [`TimezoneFactory`] building [`chrono::FixedOffset`]s.
///
/// ```
/// use chrono::FixedOffset;
/// use pgtemporal::{ChronoOffsetFactory, DecodeContext};
///
/// let context = DecodeContext::with_timezone_factory(ChronoOffsetFactory);
/// let value = context
///     .decode_timestamp(Some(b"2001-01-01 12:00:00-08".as_slice()))?
///     .expect("not null");
/// assert_eq!(value.into_timezone(), FixedOffset::west_opt(8 * 3600));
/// # Ok::<_, pgtemporal::DecodeError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChronoOffsetFactory;

impl TimezoneFactory for ChronoOffsetFactory {
    type Timezone = FixedOffset;

    #[inline]
    fn timezone(&self, offset_in_minutes: i32) -> Result<FixedOffset, InvalidTimezoneError> {
        offset_in_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or(InvalidTimezoneError::new(offset_in_minutes))
    }
}

/// A naive [`DateTime`] converted into a type that requires a timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("the date time has no timezone")]
pub struct MissingTimezoneError;
