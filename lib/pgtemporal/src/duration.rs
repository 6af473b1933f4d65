use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::time::Duration as StdDuration;

const MICROSECONDS_PER_SECOND: i128 = 1_000_000;
const MICROSECONDS_PER_DAY: i128 = 86_400 * MICROSECONDS_PER_SECOND;

/// A signed length of time, as decoded from an `interval` column.
///
/// The three components are kept as given and may have different signs:
/// `1 day -01:00:00` is stored as `(1, -3600, 0)`.
/// Comparisons and hashing use the total length, so `(0, -14706, 0)` equals `(-1, 71694, 0)`.
///
/// ```
/// use pgtemporal::Duration;
///
/// let duration = Duration::new(0, -14_706, 0);
/// assert_eq!(duration, Duration::new(-1, 71_694, 0));
/// assert_eq!(duration.to_string(), "-1 day, 19:54:54");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Duration {
    days: i64,
    seconds: i64,
    microseconds: i64,
}

impl Duration {
    #[inline]
    pub const fn new(days: i64, seconds: i64, microseconds: i64) -> Self {
        Self {
            days,
            seconds,
            microseconds,
        }
    }

    #[inline]
    pub const fn days(self) -> i64 {
        self.days
    }

    #[inline]
    pub const fn seconds(self) -> i64 {
        self.seconds
    }

    #[inline]
    pub const fn microseconds(self) -> i64 {
        self.microseconds
    }

    /// The total length in microseconds.
    ///
    /// It can't overflow: each component is at most 2^63 times 86 400 000 000.
    #[inline]
    pub fn as_microseconds(self) -> i128 {
        i128::from(self.days) * MICROSECONDS_PER_DAY
            + i128::from(self.seconds) * MICROSECONDS_PER_SECOND
            + i128::from(self.microseconds)
    }

    /// The same length with `0 <= seconds < 86400` and `0 <= microseconds < 1000000`.
    ///
    /// Returns `None` if the number of days does not fit in an `i64`.
    ///
    /// ```
    /// use pgtemporal::Duration;
    ///
    /// let normalized = Duration::new(0, -14_706, 0).normalized().expect("small enough");
    /// assert_eq!(
    ///     (normalized.days(), normalized.seconds(), normalized.microseconds()),
    ///     (-1, 71_694, 0)
    /// );
    /// ```
    #[inline]
    pub fn normalized(self) -> Option<Self> {
        let (days, seconds, microseconds) = split_total(self.as_microseconds());
        Some(Self {
            days: days.try_into().ok()?,
            seconds: seconds.try_into().ok()?,
            microseconds: microseconds.try_into().ok()?,
        })
    }

    #[inline]
    pub fn is_negative(self) -> bool {
        self.as_microseconds() < 0
    }
}

/// Canonical days, seconds in the day, and microseconds in the second of a total.
fn split_total(total: i128) -> (i128, i128, i128) {
    let days = total.div_euclid(MICROSECONDS_PER_DAY);
    let rest = total.rem_euclid(MICROSECONDS_PER_DAY);
    (
        days,
        rest / MICROSECONDS_PER_SECOND,
        rest % MICROSECONDS_PER_SECOND,
    )
}

impl PartialEq for Duration {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.as_microseconds() == other.as_microseconds()
    }
}

impl Eq for Duration {}

impl PartialOrd for Duration {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Duration {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_microseconds().cmp(&other.as_microseconds())
    }
}

impl Hash for Duration {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_microseconds().hash(state);
    }
}

impl fmt::Display for Duration {
    /// Writes `[D day[s], ]H:MM:SS[.ffffff]` from the normalized components.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (days, seconds, microseconds) = split_total(self.as_microseconds());
        if days != 0 {
            let plural = if days.abs() == 1 { "" } else { "s" };
            write!(f, "{days} day{plural}, ")?;
        }
        write!(
            f,
            "{}:{:02}:{:02}",
            seconds / 3600,
            seconds % 3600 / 60,
            seconds % 60
        )?;
        if microseconds != 0 {
            write!(f, ".{microseconds:06}")?;
        }
        Ok(())
    }
}

impl TryFrom<Duration> for StdDuration {
    type Error = DurationOverflowError;

    /// Fails if the duration is negative.
    #[inline]
    fn try_from(value: Duration) -> Result<Self, DurationOverflowError> {
        let total = u128::try_from(value.as_microseconds()).map_err(|_| DurationOverflowError)?;
        Ok(Self::new(
            u64::try_from(total / 1_000_000).map_err(|_| DurationOverflowError)?,
            u32::try_from(total % 1_000_000).map_err(|_| DurationOverflowError)? * 1000,
        ))
    }
}

/// An overflow during [`Duration`] conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("overflow during duration conversion")]
pub struct DurationOverflowError;

#[cfg(test)]
#[expect(clippy::panic_in_result_fn)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn equality_uses_the_total() {
        assert_eq!(Duration::new(0, -14_706, 0), Duration::new(-1, 71_694, 0));
        assert_eq!(Duration::new(1, 0, 0), Duration::new(0, 86_400, 0));
        assert_eq!(Duration::new(0, 1, 0), Duration::new(0, 0, 1_000_000));
        assert_ne!(Duration::new(0, 1, 0), Duration::new(0, 1, 1));
        assert!(Duration::new(0, -1, 0) < Duration::default());
        assert!(Duration::new(1, -1, 0) > Duration::new(0, 86_398, 999_999));
    }

    #[test]
    fn hash_is_consistent_with_equality() {
        let set = [Duration::new(0, -14_706, 0), Duration::new(-1, 71_694, 0)]
            .into_iter()
            .collect::<HashSet<_>>();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn normalized() -> Result<(), DurationOverflowError> {
        let normalized = Duration::new(0, -14_706, 0)
            .normalized()
            .ok_or(DurationOverflowError)?;
        assert_eq!(
            (
                normalized.days(),
                normalized.seconds(),
                normalized.microseconds()
            ),
            (-1, 71_694, 0)
        );
        let normalized = Duration::new(428, 14_706, 1_500_000)
            .normalized()
            .ok_or(DurationOverflowError)?;
        assert_eq!(
            (
                normalized.days(),
                normalized.seconds(),
                normalized.microseconds()
            ),
            (428, 14_707, 500_000)
        );
        assert_eq!(Duration::new(i64::MAX, i64::MAX, 0).normalized(), None);
        Ok(())
    }

    #[test]
    fn as_microseconds() {
        assert_eq!(Duration::new(1, 1, 1).as_microseconds(), 86_401_000_001);
        assert_eq!(Duration::new(0, -1, 500_000).as_microseconds(), -500_000);
        assert!(Duration::new(0, -1, 500_000).is_negative());
        assert!(!Duration::default().is_negative());
    }

    #[test]
    fn to_string() {
        assert_eq!(Duration::default().to_string(), "0:00:00");
        assert_eq!(Duration::new(3, 0, 0).to_string(), "3 days, 0:00:00");
        assert_eq!(Duration::new(1, 3600, 0).to_string(), "1 day, 1:00:00");
        assert_eq!(
            Duration::new(428, 14_706, 0).to_string(),
            "428 days, 4:05:06"
        );
        assert_eq!(Duration::new(0, -14_706, 0).to_string(), "-1 day, 19:54:54");
        assert_eq!(Duration::new(0, 0, 500_000).to_string(), "0:00:00.500000");
        assert_eq!(Duration::new(0, -1, 0).to_string(), "-1 day, 23:59:59");
        assert_eq!(Duration::new(-2, 0, 0).to_string(), "-2 days, 0:00:00");
    }

    #[test]
    fn to_std() -> Result<(), DurationOverflowError> {
        assert_eq!(
            StdDuration::try_from(Duration::new(1, 10, 500))?,
            StdDuration::new(86_410, 500_000)
        );
        assert_eq!(
            StdDuration::try_from(Duration::new(1, -86_400, 0))?,
            StdDuration::ZERO
        );
        assert_eq!(
            StdDuration::try_from(Duration::new(0, -1, 0)),
            Err(DurationOverflowError)
        );
        Ok(())
    }
}
