use crate::{error::ErrorMessage, CalendarError, CalendarResult, TICKS_PER_DAY};

/// Max `TimePoint` tick constant: 9999-12-31T23:59:59.9999999
#[doc(hidden)]
pub(crate) const MAX_TICKS: i64 = DAYS_TO_YEAR_10000 * TICKS_PER_DAY - 1;
/// Number of days between 0001-01-01 and 10000-01-01.
pub(crate) const DAYS_TO_YEAR_10000: i64 = 3_652_059;

/// A `TimePoint` is the count of 100-nanosecond ticks elapsed since
/// 0001-01-01T00:00:00 in the proleptic Gregorian calendar.
///
/// A `TimePoint` may be built from any tick count. Whether it lies in
/// the supported range is checked with [`TimePoint::check_validity`] and
/// by every calendar operation that consumes one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TimePoint(pub(crate) i64);

impl From<i64> for TimePoint {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl TimePoint {
    /// 0001-01-01T00:00:00.0000000
    pub const MIN: Self = Self(0);
    /// 9999-12-31T23:59:59.9999999
    pub const MAX: Self = Self(MAX_TICKS);

    /// Creates a `TimePoint` from a raw tick count without validation.
    #[inline]
    #[must_use]
    pub const fn from_ticks(ticks: i64) -> Self {
        Self(ticks)
    }

    #[inline]
    #[must_use]
    pub const fn as_ticks(&self) -> i64 {
        self.0
    }

    pub fn check_validity(&self) -> CalendarResult<()> {
        if !is_valid_ticks(self.0) {
            return Err(CalendarError::out_of_range().with_enum(ErrorMessage::TimePointOutOfRange));
        }
        Ok(())
    }

    /// Returns the number of whole days since the epoch.
    #[inline]
    #[must_use]
    pub const fn day_number(&self) -> i64 {
        self.0.div_euclid(TICKS_PER_DAY)
    }

    /// Returns the ticks elapsed since midnight.
    #[inline]
    #[must_use]
    pub const fn time_of_day(&self) -> i64 {
        self.0.rem_euclid(TICKS_PER_DAY)
    }

    /// Adds `ticks`, returning an error if the result leaves the supported range.
    pub fn checked_add_ticks(&self, ticks: i64) -> CalendarResult<Self> {
        let result = self
            .0
            .checked_add(ticks)
            .ok_or(CalendarError::out_of_range().with_enum(ErrorMessage::ArithmeticOverflow))?;
        let result = Self(result);
        result.check_validity()?;
        Ok(result)
    }
}

/// Utility for determining if the ticks are within a valid range.
#[inline]
#[must_use]
pub(crate) const fn is_valid_ticks(ticks: i64) -> bool {
    0 <= ticks && ticks <= MAX_TICKS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds() {
        assert_eq!(TimePoint::MAX.as_ticks(), 3_155_378_975_999_999_999);
        assert!(TimePoint::MIN.check_validity().is_ok());
        assert!(TimePoint::MAX.check_validity().is_ok());
        assert!(TimePoint::from_ticks(-1).check_validity().is_err());
        assert!(TimePoint::from_ticks(MAX_TICKS + 1).check_validity().is_err());
    }

    #[test]
    fn day_split() {
        let t = TimePoint::from_ticks(3 * TICKS_PER_DAY + 42);
        assert_eq!(t.day_number(), 3);
        assert_eq!(t.time_of_day(), 42);
        assert_eq!(TimePoint::MAX.day_number(), DAYS_TO_YEAR_10000 - 1);
        assert_eq!(TimePoint::MAX.time_of_day(), TICKS_PER_DAY - 1);
    }

    #[test]
    fn checked_add() {
        let t = TimePoint::MAX.checked_add_ticks(-1).unwrap();
        assert_eq!(t.as_ticks(), MAX_TICKS - 1);
        assert!(TimePoint::MAX.checked_add_ticks(1).is_err());
        assert!(TimePoint::MIN.checked_add_ticks(-1).is_err());
        assert!(TimePoint::MAX.checked_add_ticks(i64::MAX).is_err());
    }
}
