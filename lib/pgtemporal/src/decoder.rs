use crate::date_time::{Date, DateTime, InvalidTimezoneError, Time};
use crate::parser::{
    DecodeError, Infinity, ValueKind, expect_byte, fold_leap_second, infinity, integer_frag,
    seconds_frag, split_seconds,
};
use crate::timezone::TimezoneFactory;
use tracing::{debug, trace};

/// Decodes the textual output of a `date` column.
///
/// `None` stands for SQL `NULL` and is decoded to `None`.
/// `infinity` and `-infinity` are mapped to [`Date::MAX`] and [`Date::MIN`].
/// Anything after the day (like ` BC`) is ignored.
///
/// ```
/// use pgtemporal::{Date, decode_date};
///
/// assert_eq!(decode_date(Some(b"2001-02-03".as_slice()))?, Some(Date::new(2001, 2, 3)?));
/// assert_eq!(decode_date(Some(b"-infinity".as_slice()))?, Some(Date::MIN));
/// assert_eq!(decode_date(None)?, None);
/// assert!(decode_date(Some(b"not-a-date".as_slice())).is_err());
/// # Ok::<_, Box<dyn std::error::Error>>(())
/// ```
pub fn decode_date(input: Option<&[u8]>) -> Result<Option<Date>, DecodeError> {
    let Some(input) = input else {
        return Ok(None);
    };
    if let Some(infinity) = infinity(input) {
        return Ok(Some(match infinity {
            Infinity::Negative => Date::MIN,
            Infinity::Positive => Date::MAX,
        }));
    }
    let fields = TimestampFields::bind(input);
    trace!("date parsed, {} components", fields.bound);
    if fields.bound < 3 {
        return Err(DecodeError::Parse(ValueKind::Date));
    }
    Ok(Some(Date::new(fields.year, fields.month, fields.day)?))
}

/// Decodes the textual output of a `time` column.
///
/// Seconds are rounded to the microsecond and a 60th second is carried into the minutes.
///
/// ```
/// use pgtemporal::{Time, decode_time};
///
/// assert_eq!(
///     decode_time(Some(b"04:05:06.789".as_slice()))?,
///     Some(Time::new(4, 5, 6, 789_000)?)
/// );
/// assert_eq!(
///     decode_time(Some(b"12:00:60.5".as_slice()))?,
///     Some(Time::new(12, 1, 0, 500_000)?)
/// );
/// # Ok::<_, Box<dyn std::error::Error>>(())
/// ```
pub fn decode_time(input: Option<&[u8]>) -> Result<Option<Time>, DecodeError> {
    let Some(input) = input else {
        return Ok(None);
    };
    let Some((hour, minute, second, input)) = clock_frag(input) else {
        return Err(DecodeError::Parse(ValueKind::Time));
    };
    trace!(
        remaining = input.len(),
        "time parsed, {hour}:{minute}:{second}"
    );
    let (second, microsecond) = split_seconds(second);
    let (minute, second) = fold_leap_second(minute, second);
    Ok(Some(Time::new(hour, minute, second, microsecond)?))
}

/// Decodes the textual output of a `timestamp` or `timestamptz` column.
///
/// The offset, if any, is given to `timezone_factory` and the built timezone is attached to the result.
/// If `timezone_factory` is `None`, the offset is dropped and a naive value is returned.
///
/// ```
/// use pgtemporal::{FixedOffsetFactory, decode_timestamp};
///
/// let input = Some(b"2001-01-01 12:00:00+05:30".as_slice());
/// let aware = decode_timestamp(input, Some(&FixedOffsetFactory))?.expect("not null");
/// assert_eq!(aware.timezone().map(|tz| tz.in_minutes()), Some(330));
/// let naive = decode_timestamp::<FixedOffsetFactory>(input, None)?.expect("not null");
/// assert!(naive.is_naive());
/// assert_eq!((naive.date(), naive.time()), (aware.date(), aware.time()));
/// # Ok::<_, pgtemporal::DecodeError>(())
/// ```
pub fn decode_timestamp<F: TimezoneFactory>(
    input: Option<&[u8]>,
    timezone_factory: Option<&F>,
) -> Result<Option<DateTime<F::Timezone>>, DecodeError> {
    let Some(input) = input else {
        return Ok(None);
    };
    if let Some(infinity) = infinity(input) {
        return Ok(Some(match infinity {
            Infinity::Negative => DateTime::MIN,
            Infinity::Positive => DateTime::MAX,
        }));
    }
    let fields = TimestampFields::bind(input);
    trace!("timestamp parsed, {} components", fields.bound);
    match fields.bound {
        3 | 6..=9 => (),
        _ => return Err(DecodeError::Parse(ValueKind::Timestamp)),
    }
    let date = Date::new(fields.year, fields.month, fields.day)?;
    let (second, microsecond) = split_seconds(fields.second);
    let (minute, second) = fold_leap_second(fields.minute, second);
    let time = Time::new(fields.hour, minute, second, microsecond)?;
    let timezone = match (fields.offset_sign, timezone_factory) {
        (Some(sign), Some(timezone_factory)) => {
            let offset = fields
                .offset_hour
                .saturating_mul(60)
                .saturating_add(fields.offset_minute)
                .saturating_mul(sign);
            debug!("UTC offset = {offset}m");
            let offset = i32::try_from(offset).map_err(|_| InvalidTimezoneError::new(offset))?;
            Some(timezone_factory.timezone(offset)?)
        }
        _ => None,
    };
    Ok(Some(DateTime::new(date, time, timezone)))
}

/// `hour ':' minute ':' seconds`
fn clock_frag(input: &[u8]) -> Option<(i64, i64, f64, &[u8])> {
    let (hour, input) = integer_frag(input)?;
    let input = expect_byte(input, b':')?;
    let (minute, input) = integer_frag(input)?;
    let input = expect_byte(input, b':')?;
    let (second, input) = seconds_frag(input)?;
    Some((hour, minute, second, input))
}

/// The fields of `year '-' month '-' day hour ':' minute ':' seconds sign offset_hour ':' offset_minute`.
///
/// Fields are bound from left to right until one is missing: `bound` is the number of fields read,
/// the other fields are left to zero.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
struct TimestampFields {
    bound: usize,
    year: i64,
    month: i64,
    day: i64,
    hour: i64,
    minute: i64,
    second: f64,
    offset_sign: Option<i64>,
    offset_hour: i64,
    offset_minute: i64,
}

impl TimestampFields {
    fn bind(input: &[u8]) -> Self {
        let mut fields = Self::default();
        let Some((year, input)) = integer_frag(input) else {
            return fields;
        };
        fields.year = year;
        fields.bound = 1;
        let Some((month, input)) = expect_byte(input, b'-').and_then(integer_frag) else {
            return fields;
        };
        fields.month = month;
        fields.bound = 2;
        let Some((day, input)) = expect_byte(input, b'-').and_then(integer_frag) else {
            return fields;
        };
        fields.day = day;
        fields.bound = 3;
        // the integer parser skips the whitespaces between the date and the time
        let Some((hour, input)) = integer_frag(input) else {
            return fields;
        };
        fields.hour = hour;
        fields.bound = 4;
        let Some((minute, input)) = expect_byte(input, b':').and_then(integer_frag) else {
            return fields;
        };
        fields.minute = minute;
        fields.bound = 5;
        let Some((second, input)) = expect_byte(input, b':').and_then(seconds_frag) else {
            return fields;
        };
        fields.second = second;
        fields.bound = 6;
        let (sign, input) = match input.split_first() {
            Some((b'+', input)) => (1, input),
            Some((b'-', input)) => (-1, input),
            _ => return fields,
        };
        fields.offset_sign = Some(sign);
        fields.bound = 7;
        let Some((offset_hour, input)) = integer_frag(input) else {
            return fields;
        };
        fields.offset_hour = offset_hour;
        fields.bound = 8;
        let Some((offset_minute, _)) = expect_byte(input, b':').and_then(integer_frag) else {
            return fields;
        };
        fields.offset_minute = offset_minute;
        fields.bound = 9;
        fields
    }
}
