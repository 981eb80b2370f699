//! This module implements the internal ISO field records.
//!
//! The three record types are:
//!   - `IsoDateTime`
//!   - `IsoDate`
//!   - `IsoTime`
//!
//! An `IsoDate` holds a year, month and day. An `IsoTime` holds the hour,
//! minute, second and the fractional second in ticks. An `IsoDateTime` has
//! the fields of both, and is the intermediate form between a `TimePoint`
//! and `CalendarFields`.

use crate::{
    error::ErrorMessage, options::ArithmeticOverflow, time_point::TimePoint, utils, CalendarError,
    CalendarResult, TICKS_PER_DAY, TICKS_PER_HOUR, TICKS_PER_MINUTE, TICKS_PER_SECOND,
};

/// `IsoDateTime` is the record of the `IsoDate` and `IsoTime` fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct IsoDateTime {
    pub(crate) date: IsoDate,
    pub(crate) time: IsoTime,
}

impl IsoDateTime {
    /// Creates a new `IsoDateTime` without any validation.
    pub(crate) const fn new_unchecked(date: IsoDate, time: IsoTime) -> Self {
        Self { date, time }
    }

    /// Decomposes a `TimePoint` into its ISO fields.
    pub(crate) fn from_time_point(t: TimePoint) -> CalendarResult<Self> {
        t.check_validity()?;
        let date = IsoDate::from_day_number(t.day_number());
        let time = IsoTime::from_ticks(t.time_of_day());
        Ok(Self::new_unchecked(date, time))
    }

    /// Returns this `IsoDateTime` as a `TimePoint`.
    ///
    /// The fields must already be valid, which makes the result in range.
    pub(crate) fn to_time_point(self) -> TimePoint {
        TimePoint(self.date.to_day_number() * TICKS_PER_DAY + self.time.to_ticks())
    }
}

// ==== `IsoDate` section ====

/// `IsoDate` serves as a record for the year, month and day fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct IsoDate {
    pub(crate) year: i32,
    pub(crate) month: u8,
    pub(crate) day: u8,
}

impl IsoDate {
    /// Creates a new `IsoDate` without determining the validity.
    pub(crate) const fn new_unchecked(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Creates a new `IsoDate`, regulating month and day with `overflow`.
    ///
    /// The year is never regulated.
    pub(crate) fn new_with_overflow(
        year: i32,
        month: i64,
        day: i64,
        overflow: ArithmeticOverflow,
    ) -> CalendarResult<Self> {
        if !utils::is_valid_year(year.into()) {
            return Err(CalendarError::invalid_field().with_enum(ErrorMessage::InvalidYear));
        }
        match overflow {
            ArithmeticOverflow::Constrain => {
                // NOTE: Values are clamped in a u8 range.
                let month = month.clamp(1, 12) as u8;
                let day = constrain_iso_day(year, month, day);
                Ok(Self::new_unchecked(year, month, day))
            }
            ArithmeticOverflow::Reject => {
                if !utils::is_valid_month(month) {
                    return Err(CalendarError::invalid_field().with_enum(ErrorMessage::InvalidMonth));
                }
                // NOTE: Month has been verified to be in a u8 range.
                let month = month as u8;
                if !is_valid_iso_day(year, month, day) {
                    return Err(CalendarError::invalid_field().with_enum(ErrorMessage::InvalidDay));
                }
                Ok(Self::new_unchecked(year, month, day as u8))
            }
        }
    }

    /// Creates an `IsoDate` from a day number within the supported range.
    pub(crate) fn from_day_number(day_number: i64) -> Self {
        let (year, month, day) = utils::date_for_day_number(day_number);
        Self::new_unchecked(year, month, day)
    }

    /// Returns the days elapsed since 0001-01-01.
    #[inline]
    pub(crate) fn to_day_number(self) -> i64 {
        utils::day_number_for_date(self.year, self.month, self.day)
    }

    /// Returns the 1-based ordinal day of the year.
    pub(crate) fn day_of_year(self) -> u16 {
        let jan_first = utils::day_number_for_date(self.year, 1, 1);
        // NOTE: A day of year is at most 366.
        (self.to_day_number() - jan_first + 1) as u16
    }

    /// Returns this date moved to `year` and `month`, clamping the day to
    /// the last day of the resulting month.
    ///
    /// Fails if the year is outside the supported range.
    pub(crate) fn with_year_month_constrained(self, year: i64, month: u8) -> CalendarResult<Self> {
        if !utils::is_valid_year(year) {
            return Err(CalendarError::out_of_range().with_enum(ErrorMessage::ArithmeticOutOfRange));
        }
        // NOTE: `year` has been verified to be in the supported range.
        let year = year as i32;
        let day = constrain_iso_day(year, month, self.day.into());

        #[cfg(feature = "log")]
        if day != self.day {
            log::trace!(
                "constrained day {} to {} for {:04}-{:02}",
                self.day,
                day,
                year,
                month
            );
        }

        Ok(Self::new_unchecked(year, month, day))
    }
}

// ==== `IsoTime` section ====

/// An `IsoTime` record that contains the time of day fields.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct IsoTime {
    pub(crate) hour: u8,       // 0..=23
    pub(crate) minute: u8,     // 0..=59
    pub(crate) second: u8,     // 0..=59
    pub(crate) subsecond: u32, // 0..=9_999_999
}

impl IsoTime {
    /// Creates a new `IsoTime` without any validation.
    pub(crate) const fn new_unchecked(hour: u8, minute: u8, second: u8, subsecond: u32) -> Self {
        Self {
            hour,
            minute,
            second,
            subsecond,
        }
    }

    /// Creates a new regulated `IsoTime`.
    pub(crate) fn new(
        hour: i64,
        minute: i64,
        second: i64,
        subsecond: i64,
        overflow: ArithmeticOverflow,
    ) -> CalendarResult<IsoTime> {
        match overflow {
            ArithmeticOverflow::Constrain => {
                let h = hour.clamp(0, 23) as u8;
                let min = minute.clamp(0, 59) as u8;
                let sec = second.clamp(0, 59) as u8;
                let sub = subsecond.clamp(0, TICKS_PER_SECOND - 1) as u32;
                Ok(Self::new_unchecked(h, min, sec, sub))
            }
            ArithmeticOverflow::Reject => {
                if !is_valid_time(hour, minute, second, subsecond) {
                    return Err(CalendarError::invalid_field().with_enum(ErrorMessage::InvalidTime));
                };
                Ok(Self::new_unchecked(
                    hour as u8,
                    minute as u8,
                    second as u8,
                    subsecond as u32,
                ))
            }
        }
    }

    /// Splits the ticks elapsed since midnight into time fields.
    pub(crate) fn from_ticks(ticks: i64) -> Self {
        debug_assert!((0..TICKS_PER_DAY).contains(&ticks));
        let hour = ticks / TICKS_PER_HOUR;
        let minute = (ticks / TICKS_PER_MINUTE) % 60;
        let second = (ticks / TICKS_PER_SECOND) % 60;
        let subsecond = ticks % TICKS_PER_SECOND;
        Self::new_unchecked(hour as u8, minute as u8, second as u8, subsecond as u32)
    }

    /// Returns the ticks elapsed since midnight.
    pub(crate) fn to_ticks(self) -> i64 {
        i64::from(self.hour) * TICKS_PER_HOUR
            + i64::from(self.minute) * TICKS_PER_MINUTE
            + i64::from(self.second) * TICKS_PER_SECOND
            + i64::from(self.subsecond)
    }
}

// ==== `IsoDate` specific utiltiy functions ====

#[inline]
pub(crate) fn constrain_iso_day(year: i32, month: u8, day: i64) -> u8 {
    let days_in_month = utils::iso_days_in_month(year, month);
    day.clamp(1, i64::from(days_in_month)) as u8
}

#[inline]
pub(crate) fn is_valid_iso_day(year: i32, month: u8, day: i64) -> bool {
    let days_in_month = utils::iso_days_in_month(year, month);
    (1..=i64::from(days_in_month)).contains(&day)
}

// ==== `IsoTime` specific utilities ====

#[inline]
fn is_valid_time(hour: i64, minute: i64, second: i64, subsecond: i64) -> bool {
    if !(0..=23).contains(&hour) {
        return false;
    }

    let min_sec = 0..=59;
    if !min_sec.contains(&minute) || !min_sec.contains(&second) {
        return false;
    }

    (0..TICKS_PER_SECOND).contains(&subsecond)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_ticks_round_trip() {
        let time = IsoTime::new_unchecked(23, 59, 59, 9_999_999);
        assert_eq!(time.to_ticks(), TICKS_PER_DAY - 1);
        assert_eq!(IsoTime::from_ticks(TICKS_PER_DAY - 1), time);
        assert_eq!(IsoTime::from_ticks(0), IsoTime::default());
    }

    #[test]
    fn regulate_date() {
        let date = IsoDate::new_with_overflow(2023, 2, 31, ArithmeticOverflow::Constrain).unwrap();
        assert_eq!(date, IsoDate::new_unchecked(2023, 2, 28));

        let date = IsoDate::new_with_overflow(2024, 14, 0, ArithmeticOverflow::Constrain).unwrap();
        assert_eq!(date, IsoDate::new_unchecked(2024, 12, 1));

        let err = IsoDate::new_with_overflow(2023, 2, 29, ArithmeticOverflow::Reject);
        assert!(err.is_err());

        let err = IsoDate::new_with_overflow(0, 1, 1, ArithmeticOverflow::Constrain);
        assert!(err.is_err());
    }

    #[test]
    fn regulate_time() {
        let time = IsoTime::new(24, -1, 60, 10_000_000, ArithmeticOverflow::Constrain).unwrap();
        assert_eq!(time, IsoTime::new_unchecked(23, 0, 59, 9_999_999));

        assert!(IsoTime::new(24, 0, 0, 0, ArithmeticOverflow::Reject).is_err());
        assert!(IsoTime::new(0, 0, 0, -1, ArithmeticOverflow::Reject).is_err());
    }

    #[test]
    fn ordinal_day() {
        assert_eq!(IsoDate::new_unchecked(2023, 1, 1).day_of_year(), 1);
        assert_eq!(IsoDate::new_unchecked(2023, 12, 31).day_of_year(), 365);
        assert_eq!(IsoDate::new_unchecked(2024, 12, 31).day_of_year(), 366);
        assert_eq!(IsoDate::new_unchecked(2024, 3, 1).day_of_year(), 61);
    }

    #[test]
    fn time_point_round_trip() {
        let dt = IsoDateTime::new_unchecked(
            IsoDate::new_unchecked(2000, 2, 29),
            IsoTime::new_unchecked(10, 30, 12, 1_234_567),
        );
        assert_eq!(IsoDateTime::from_time_point(dt.to_time_point()).unwrap(), dt);
    }
}
