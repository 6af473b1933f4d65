#![doc = include_str!("../README.md")]
#![doc(test(attr(deny(warnings))))]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![allow(clippy::return_self_not_must_use)]

#[cfg(feature = "chrono")]
mod chrono_conversions;
mod date_time;
mod decoder;
mod duration;
mod interval;
mod parser;
mod timezone;

#[cfg(feature = "chrono")]
pub use self::chrono_conversions::{ChronoOffsetFactory, MissingTimezoneError};
pub use self::date_time::{
    Date, DateTime, DateTimeError, InvalidTimezoneError, MAX_YEAR, MIN_YEAR, Time, TimezoneOffset,
};
pub use self::decoder::{decode_date, decode_time, decode_timestamp};
pub use self::duration::{Duration, DurationOverflowError};
pub use self::interval::decode_interval;
pub use self::parser::{DecodeError, ValueKind};
pub use self::timezone::{DecodeContext, FixedOffsetFactory, TimezoneFactory};
