use std::fmt;

/// Smallest year accepted by [`Date`].
pub const MIN_YEAR: i64 = 1;
/// Largest year accepted by [`Date`].
pub const MAX_YEAR: i64 = 9999;

/// A calendar date of the proleptic Gregorian calendar, between `0001-01-01` and `9999-12-31`.
///
/// [`Date::MIN`] and [`Date::MAX`] also stand for the `-infinity` and `infinity` values of the database.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Clone, Copy, Hash)]
pub struct Date {
    year: u16,
    month: u8,
    day: u8,
}

impl Date {
    /// `0001-01-01`, also used for `-infinity`.
    pub const MIN: Self = Self {
        year: 1,
        month: 1,
        day: 1,
    };
    /// `9999-12-31`, also used for `infinity`.
    pub const MAX: Self = Self {
        year: 9999,
        month: 12,
        day: 31,
    };

    /// Builds a date from its fields, checking each of them.
    ///
    /// ```
    /// use pgtemporal::{Date, DateTimeError};
    ///
    /// assert_eq!(Date::new(2001, 2, 3)?.to_string(), "2001-02-03");
    /// assert!(Date::new(2001, 13, 3).is_err());
    /// assert!(Date::new(2001, 2, 29).is_err());
    /// # Ok::<_, DateTimeError>(())
    /// ```
    pub fn new(year: i64, month: i64, day: i64) -> Result<Self, DateTimeError> {
        let year = u16::try_from(year)
            .ok()
            .filter(|y| (MIN_YEAR..=MAX_YEAR).contains(&i64::from(*y)))
            .ok_or(DateTimeError::YearOutOfRange(year))?;
        let month = u8::try_from(month)
            .ok()
            .filter(|m| (1..=12).contains(m))
            .ok_or(DateTimeError::MonthOutOfRange(month))?;
        let day = u8::try_from(day)
            .ok()
            .filter(|d| (1..=days_in_month(year, month)).contains(d))
            .ok_or(DateTimeError::DayOutOfRange { day, month })?;
        Ok(Self { year, month, day })
    }

    #[inline]
    #[must_use]
    pub fn year(self) -> u16 {
        self.year
    }

    #[inline]
    #[must_use]
    pub fn month(self) -> u8 {
        self.month
    }

    #[inline]
    #[must_use]
    pub fn day(self) -> u8 {
        self.day
    }

    #[inline]
    #[must_use]
    pub fn is_leap_year(self) -> bool {
        is_leap_year(self.year)
    }

    /// Combines this date with a time, without timezone.
    #[inline]
    #[must_use]
    pub fn and_time<Tz>(self, time: Time) -> DateTime<Tz> {
        DateTime::new(self, time, None)
    }
}

impl fmt::Display for Date {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// A time of the day with a microsecond precision, without timezone.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Clone, Copy, Hash, Default)]
pub struct Time {
    hour: u8,
    minute: u8,
    second: u8,
    microsecond: u32,
}

impl Time {
    /// `00:00:00`
    pub const MIN: Self = Self {
        hour: 0,
        minute: 0,
        second: 0,
        microsecond: 0,
    };
    /// `23:59:59.999999`
    pub const MAX: Self = Self {
        hour: 23,
        minute: 59,
        second: 59,
        microsecond: 999_999,
    };

    /// Builds a time from its fields, checking each of them.
    ///
    /// Leap seconds are not representable: `second` must be lower than 60.
    pub fn new(
        hour: i64,
        minute: i64,
        second: i64,
        microsecond: i64,
    ) -> Result<Self, DateTimeError> {
        Ok(Self {
            hour: u8::try_from(hour)
                .ok()
                .filter(|h| *h < 24)
                .ok_or(DateTimeError::HourOutOfRange(hour))?,
            minute: u8::try_from(minute)
                .ok()
                .filter(|m| *m < 60)
                .ok_or(DateTimeError::MinuteOutOfRange(minute))?,
            second: u8::try_from(second)
                .ok()
                .filter(|s| *s < 60)
                .ok_or(DateTimeError::SecondOutOfRange(second))?,
            microsecond: u32::try_from(microsecond)
                .ok()
                .filter(|us| *us < 1_000_000)
                .ok_or(DateTimeError::MicrosecondOutOfRange(microsecond))?,
        })
    }

    #[inline]
    #[must_use]
    pub fn hour(self) -> u8 {
        self.hour
    }

    #[inline]
    #[must_use]
    pub fn minute(self) -> u8 {
        self.minute
    }

    #[inline]
    #[must_use]
    pub fn second(self) -> u8 {
        self.second
    }

    #[inline]
    #[must_use]
    pub fn microsecond(self) -> u32 {
        self.microsecond
    }
}

impl fmt::Display for Time {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)?;
        if self.microsecond != 0 {
            write!(f, ".{:06}", self.microsecond)?;
        }
        Ok(())
    }
}

/// A [`Date`] and a [`Time`], optionally attached to a timezone.
///
/// The timezone type is whatever the [`TimezoneFactory`](crate::TimezoneFactory) used while decoding produces,
/// [`TimezoneOffset`] by default.
/// A `DateTime` without timezone is said to be naive.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub struct DateTime<Tz = TimezoneOffset> {
    date: Date,
    time: Time,
    timezone: Option<Tz>,
}

impl<Tz> DateTime<Tz> {
    /// The naive `0001-01-01 00:00:00`, also used for `-infinity`.
    pub const MIN: Self = Self {
        date: Date::MIN,
        time: Time::MIN,
        timezone: None,
    };
    /// The naive `9999-12-31 23:59:59.999999`, also used for `infinity`.
    pub const MAX: Self = Self {
        date: Date::MAX,
        time: Time::MAX,
        timezone: None,
    };

    #[inline]
    pub const fn new(date: Date, time: Time, timezone: Option<Tz>) -> Self {
        Self {
            date,
            time,
            timezone,
        }
    }

    #[inline]
    pub fn date(&self) -> Date {
        self.date
    }

    #[inline]
    pub fn time(&self) -> Time {
        self.time
    }

    #[inline]
    pub fn timezone(&self) -> Option<&Tz> {
        self.timezone.as_ref()
    }

    #[inline]
    pub fn into_timezone(self) -> Option<Tz> {
        self.timezone
    }

    /// Drops the timezone, keeping the date and time fields as they are.
    #[inline]
    pub fn naive(self) -> DateTime<Tz> {
        Self {
            timezone: None,
            ..self
        }
    }

    /// Replaces the timezone, keeping the date and time fields as they are.
    #[inline]
    pub fn with_timezone<Tz2>(self, timezone: Option<Tz2>) -> DateTime<Tz2> {
        DateTime {
            date: self.date,
            time: self.time,
            timezone,
        }
    }

    #[inline]
    pub fn is_naive(&self) -> bool {
        self.timezone.is_none()
    }
}

impl<Tz: fmt::Display> fmt::Display for DateTime<Tz> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.date, self.time)?;
        if let Some(timezone) = &self.timezone {
            write!(f, "{timezone}")?;
        }
        Ok(())
    }
}

/// A fixed timezone offset with respect to UTC.
///
/// It is encoded as a number of minutes strictly between -24 and +24 hours.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Clone, Copy, Hash)]
pub struct TimezoneOffset {
    offset: i16, // in minute with respect to UTC
}

impl TimezoneOffset {
    /// `+23:59`
    pub const MAX: Self = Self {
        offset: 24 * 60 - 1,
    };
    /// `-23:59`
    pub const MIN: Self = Self {
        offset: -24 * 60 + 1,
    };
    /// `+00`
    pub const UTC: Self = Self { offset: 0 };

    /// From offset in minute with respect to UTC
    #[inline]
    pub fn new(offset_in_minutes: i32) -> Result<Self, InvalidTimezoneError> {
        i16::try_from(offset_in_minutes)
            .ok()
            .map(|offset| Self { offset })
            .filter(|value| Self::MIN <= *value && *value <= Self::MAX)
            .ok_or(InvalidTimezoneError {
                offset_in_minutes: offset_in_minutes.into(),
            })
    }

    #[inline]
    #[must_use]
    pub fn in_minutes(self) -> i32 {
        self.offset.into()
    }

    #[inline]
    #[must_use]
    pub fn in_seconds(self) -> i32 {
        i32::from(self.offset) * 60
    }
}

impl fmt::Display for TimezoneOffset {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (sign, offset) = if self.offset < 0 {
            ('-', -self.offset)
        } else {
            ('+', self.offset)
        };
        write!(f, "{sign}{:02}", offset / 60)?;
        if offset % 60 != 0 {
            write!(f, ":{:02}", offset % 60)?;
        }
        Ok(())
    }
}

fn is_leap_year(year: u16) -> bool {
    year.is_multiple_of(4) && (!year.is_multiple_of(100) || year.is_multiple_of(400))
}

fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// A field given to a [`Date`], [`Time`] or timezone constructor is out of its range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DateTimeError {
    #[error("year {0} is out of range")]
    YearOutOfRange(i64),
    #[error("month must be in 1..12, got {0}")]
    MonthOutOfRange(i64),
    #[error("day {day} is out of range for month {month}")]
    DayOutOfRange { day: i64, month: u8 },
    #[error("hour must be in 0..23, got {0}")]
    HourOutOfRange(i64),
    #[error("minute must be in 0..59, got {0}")]
    MinuteOutOfRange(i64),
    #[error("second must be in 0..59, got {0}")]
    SecondOutOfRange(i64),
    #[error("microsecond must be in 0..999999, got {0}")]
    MicrosecondOutOfRange(i64),
    #[error(transparent)]
    InvalidTimezone(#[from] InvalidTimezoneError),
}

/// The value provided as timezone offset is not valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid timezone offset {}{}:{:02}",
        if self.offset_in_minutes < 0 { "-" } else { "" },
        self.offset_in_minutes.unsigned_abs() / 60,
        self.offset_in_minutes.unsigned_abs() % 60)]
pub struct InvalidTimezoneError {
    offset_in_minutes: i64,
}

impl InvalidTimezoneError {
    /// Wraps an offset a [`TimezoneFactory`](crate::TimezoneFactory) is not able to represent.
    #[inline]
    pub fn new(offset_in_minutes: impl Into<i64>) -> Self {
        Self {
            offset_in_minutes: offset_in_minutes.into(),
        }
    }

    #[inline]
    pub fn offset_in_minutes(&self) -> i64 {
        self.offset_in_minutes
    }
}
