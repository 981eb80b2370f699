//! This module implements the proleptic Gregorian `GregorianCalendar`.
//!
//! The calendar converts between a [`TimePoint`] and [`CalendarFields`],
//! answers queries about years and months, and performs calendar-aware
//! arithmetic. Every method is a pure function of its arguments and the
//! calendar's configuration.

use num_traits::ToPrimitive;
use tinystr::{tinystr, TinyAsciiStr};

use crate::{
    calendar_assert,
    error::ErrorMessage,
    fields::CalendarFields,
    iso::IsoDateTime,
    options::{ArithmeticOverflow, WeekRule, Weekday},
    time_point::{TimePoint, DAYS_TO_YEAR_10000},
    utils, CalendarError, CalendarResult, AD_ERA, MAX_YEAR, MS_PER_DAY, TICKS_PER_DAY,
    TICKS_PER_HOUR, TICKS_PER_MILLISECOND, TICKS_PER_MINUTE, TICKS_PER_SECOND,
};

/// The default upper bound of the century window used to expand two-digit years.
pub const DEFAULT_TWO_DIGIT_YEAR_MAX: u16 = 2049;

const SUPPORTED_ERAS: [u8; 1] = [AD_ERA];

const MS_PER_HOUR: i64 = 3_600_000;
const MS_PER_MINUTE: i64 = 60_000;
const MS_PER_SECOND: i64 = 1_000;

/// The proleptic Gregorian calendar engine.
///
/// ```rust
/// use gregorian_rs::{CalendarFields, GregorianCalendar};
///
/// let calendar = GregorianCalendar::new();
///
/// let jan_31 = calendar.compose(&CalendarFields::new(2023, 1, 31)).unwrap();
/// let feb = calendar.add_months(jan_31, 1).unwrap();
///
/// assert_eq!(calendar.decompose(feb).unwrap(), CalendarFields::new(2023, 2, 28));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GregorianCalendar {
    two_digit_year_max: u16,
}

impl Default for GregorianCalendar {
    fn default() -> Self {
        Self::new()
    }
}

// ==== Configuration ====

impl GregorianCalendar {
    /// Creates a `GregorianCalendar` with the default configuration.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            two_digit_year_max: DEFAULT_TWO_DIGIT_YEAR_MAX,
        }
    }

    /// Returns a copy of this calendar with a different two-digit year window.
    ///
    /// `max` is the last year of the 100-year window that two-digit years are
    /// expanded into, and must be in 99..=9999.
    pub fn with_two_digit_year_max(self, max: u16) -> CalendarResult<Self> {
        if !(99..=MAX_YEAR as u16).contains(&max) {
            return Err(CalendarError::invalid_argument()
                .with_enum(ErrorMessage::TwoDigitYearMaxOutOfRange));
        }
        Ok(Self {
            two_digit_year_max: max,
        })
    }

    /// Returns the last year of the two-digit year window.
    #[inline]
    #[must_use]
    pub const fn two_digit_year_max(&self) -> u16 {
        self.two_digit_year_max
    }

    /// Returns the earliest supported `TimePoint`.
    #[inline]
    #[must_use]
    pub const fn min_supported(&self) -> TimePoint {
        TimePoint::MIN
    }

    /// Returns the latest supported `TimePoint`.
    #[inline]
    #[must_use]
    pub const fn max_supported(&self) -> TimePoint {
        TimePoint::MAX
    }

    /// Returns the eras supported by this calendar.
    #[inline]
    #[must_use]
    pub const fn eras(&self) -> &'static [u8] {
        &SUPPORTED_ERAS
    }

    /// Returns the code of `era`.
    pub fn era_code(&self, era: u8) -> CalendarResult<TinyAsciiStr<16>> {
        validate_era(era)?;
        Ok(tinystr!(16, "ce"))
    }
}

// ==== Conversion ====

impl GregorianCalendar {
    /// Decomposes `t` into its calendar fields.
    pub fn decompose(&self, t: TimePoint) -> CalendarResult<CalendarFields> {
        IsoDateTime::from_time_point(t).map(CalendarFields::from_iso)
    }

    /// Composes validated calendar fields into a `TimePoint`.
    ///
    /// Fields are never clamped: a day past the end of its month, or any
    /// other out-of-bounds field, is an `InvalidField` error.
    pub fn compose(&self, fields: &CalendarFields) -> CalendarResult<TimePoint> {
        self.compose_with_overflow(fields, ArithmeticOverflow::Reject)
    }

    /// Composes calendar fields into a `TimePoint`, regulating the month,
    /// day and time fields with `overflow`.
    ///
    /// The era and year are never regulated.
    pub fn compose_with_overflow(
        &self,
        fields: &CalendarFields,
        overflow: ArithmeticOverflow,
    ) -> CalendarResult<TimePoint> {
        let t = fields.to_iso(overflow)?.to_time_point();
        calendar_assert!(
            t.check_validity().is_ok(),
            "composed time point {} is outside the supported range",
            t.as_ticks()
        );
        Ok(t)
    }
}

// ==== Year and month queries ====

impl GregorianCalendar {
    /// Returns whether `year` is a leap year.
    pub fn is_leap_year(&self, year: i32) -> CalendarResult<bool> {
        validate_year(year)?;
        Ok(utils::mathematical_in_leap_year(year))
    }

    /// Returns the number of days in `month` of `year`.
    pub fn days_in_month(&self, year: i32, month: u8) -> CalendarResult<u8> {
        validate_year_month(year, month)?;
        Ok(utils::iso_days_in_month(year, month))
    }

    /// Returns the number of days in `year`.
    pub fn days_in_year(&self, year: i32) -> CalendarResult<u16> {
        validate_year(year)?;
        Ok(utils::mathematical_days_in_year(year))
    }

    /// Returns the number of months in `year`, which is always 12.
    pub fn months_in_year(&self, year: i32) -> CalendarResult<u8> {
        validate_year(year)?;
        Ok(12)
    }

    /// Returns whether the date is the leap day, February 29.
    pub fn is_leap_day(&self, year: i32, month: u8, day: u8) -> CalendarResult<bool> {
        validate_year_month(year, month)?;
        if day == 0 || day > utils::iso_days_in_month(year, month) {
            return Err(CalendarError::invalid_argument().with_enum(ErrorMessage::DayOutOfRange));
        }
        Ok(month == 2 && day == 29)
    }

    /// Returns whether `month` is a leap month. The Gregorian calendar has none.
    pub fn is_leap_month(&self, year: i32, month: u8) -> CalendarResult<bool> {
        validate_year_month(year, month)?;
        Ok(false)
    }

    /// Returns the leap month of `year`. The Gregorian calendar has none.
    pub fn leap_month(&self, year: i32) -> CalendarResult<Option<u8>> {
        validate_year(year)?;
        Ok(None)
    }

    /// Expands a two-digit year into a four-digit year using
    /// [`two_digit_year_max`](Self::two_digit_year_max).
    ///
    /// Years of 100 and above are returned unchanged.
    pub fn to_four_digit_year(&self, year: i32) -> CalendarResult<i32> {
        if year < 0 {
            return Err(CalendarError::invalid_argument().with_enum(ErrorMessage::NegativeYear));
        }
        if year > MAX_YEAR {
            return Err(CalendarError::invalid_argument().with_enum(ErrorMessage::YearOutOfRange));
        }
        if year >= 100 {
            return Ok(year);
        }
        let max = i32::from(self.two_digit_year_max);
        let century = max / 100 - i32::from(year > max % 100);
        Ok(century * 100 + year)
    }
}

// ==== Field projections ====

impl GregorianCalendar {
    /// Returns the year of `t`.
    pub fn year(&self, t: TimePoint) -> CalendarResult<i32> {
        Ok(IsoDateTime::from_time_point(t)?.date.year)
    }

    /// Returns the month of `t`, 1..=12.
    pub fn month(&self, t: TimePoint) -> CalendarResult<u8> {
        Ok(IsoDateTime::from_time_point(t)?.date.month)
    }

    /// Returns the day of the month of `t`.
    pub fn day_of_month(&self, t: TimePoint) -> CalendarResult<u8> {
        Ok(IsoDateTime::from_time_point(t)?.date.day)
    }

    /// Returns the era of `t`, which is always 1.
    pub fn era(&self, t: TimePoint) -> CalendarResult<u8> {
        t.check_validity()?;
        Ok(AD_ERA)
    }

    /// Returns the day of the week of `t`.
    pub fn day_of_week(&self, t: TimePoint) -> CalendarResult<Weekday> {
        t.check_validity()?;
        // 0001-01-01 is a Monday.
        Ok(Weekday::from_days_after_monday(t.day_number()))
    }

    /// Returns the day of the year of `t`, 1..=366.
    pub fn day_of_year(&self, t: TimePoint) -> CalendarResult<u16> {
        Ok(IsoDateTime::from_time_point(t)?.date.day_of_year())
    }

    /// Returns the week of the year of `t`.
    ///
    /// `rule` selects which week is the first week of a year, and
    /// `first_day` the day that weeks begin on. Under the full-week rules a
    /// date before the first week of its year belongs to the last week of
    /// the previous year, so the result ranges over 1..=54.
    pub fn week_of_year(
        &self,
        t: TimePoint,
        rule: WeekRule,
        first_day: Weekday,
    ) -> CalendarResult<u8> {
        let iso = IsoDateTime::from_time_point(t)?;
        let day_of_year = i32::from(iso.date.day_of_year()) - 1;
        let weekday = i32::from(Weekday::from_days_after_monday(t.day_number()).days_from_sunday());
        let first_day = i32::from(first_day.days_from_sunday());

        let week = match rule.full_days() {
            None => first_day_week_of_year(day_of_year, weekday, first_day),
            Some(full_days) => {
                week_of_year_full_days(iso.date.year, day_of_year, weekday, first_day, full_days)
            }
        };
        // NOTE: A week of year is at most 54.
        Ok(week as u8)
    }
}

// ==== Arithmetic ====

impl GregorianCalendar {
    /// Adds `delta` years to `t`, keeping the month, day and time of day.
    ///
    /// February 29 becomes February 28 when the resulting year is not a
    /// leap year.
    pub fn add_years(&self, t: TimePoint, delta: i32) -> CalendarResult<TimePoint> {
        let iso = IsoDateTime::from_time_point(t)?;
        let year = i64::from(iso.date.year) + i64::from(delta);
        let date = iso.date.with_year_month_constrained(year, iso.date.month)?;
        Ok(IsoDateTime::new_unchecked(date, iso.time).to_time_point())
    }

    /// Adds `delta` months to `t`, rolling over the year every 12 months and
    /// keeping the time of day.
    ///
    /// A day that does not exist in the resulting month is clamped to that
    /// month's last day.
    pub fn add_months(&self, t: TimePoint, delta: i32) -> CalendarResult<TimePoint> {
        let iso = IsoDateTime::from_time_point(t)?;
        let (year, month) = utils::balance_year_month(
            i64::from(iso.date.year),
            i64::from(iso.date.month) + i64::from(delta),
        );
        // NOTE: A balanced month is in 1..=12.
        let date = iso.date.with_year_month_constrained(year, month as u8)?;
        Ok(IsoDateTime::new_unchecked(date, iso.time).to_time_point())
    }

    /// Adds `delta` weeks to `t`.
    pub fn add_weeks(&self, t: TimePoint, delta: i64) -> CalendarResult<TimePoint> {
        self.add_scaled_ticks(t, delta, TICKS_PER_DAY * 7)
    }

    /// Adds `delta` days to `t`.
    pub fn add_days(&self, t: TimePoint, delta: i64) -> CalendarResult<TimePoint> {
        self.add_scaled_ticks(t, delta, TICKS_PER_DAY)
    }

    /// Adds `delta` hours to `t`, rounded to the nearest millisecond.
    pub fn add_hours(&self, t: TimePoint, delta: f64) -> CalendarResult<TimePoint> {
        self.add_scaled_millis(t, delta, MS_PER_HOUR)
    }

    /// Adds `delta` minutes to `t`, rounded to the nearest millisecond.
    pub fn add_minutes(&self, t: TimePoint, delta: f64) -> CalendarResult<TimePoint> {
        self.add_scaled_millis(t, delta, MS_PER_MINUTE)
    }

    /// Adds `delta` seconds to `t`, rounded to the nearest millisecond.
    pub fn add_seconds(&self, t: TimePoint, delta: f64) -> CalendarResult<TimePoint> {
        self.add_scaled_millis(t, delta, MS_PER_SECOND)
    }

    /// Adds `delta` milliseconds to `t`, rounded to the nearest millisecond.
    pub fn add_milliseconds(&self, t: TimePoint, delta: f64) -> CalendarResult<TimePoint> {
        self.add_scaled_millis(t, delta, 1)
    }

    /// Adds `delta` ticks to `t`.
    pub fn add_ticks(&self, t: TimePoint, delta: i64) -> CalendarResult<TimePoint> {
        self.add_scaled_ticks(t, delta, 1)
    }

    fn add_scaled_ticks(&self, t: TimePoint, delta: i64, scale: i64) -> CalendarResult<TimePoint> {
        t.check_validity()?;
        let ticks = delta
            .checked_mul(scale)
            .ok_or(CalendarError::out_of_range().with_enum(ErrorMessage::ArithmeticOverflow))?;
        t.checked_add_ticks(ticks)
    }

    fn add_scaled_millis(&self, t: TimePoint, value: f64, scale: i64) -> CalendarResult<TimePoint> {
        t.check_validity()?;
        // Round half away from zero to a whole millisecond.
        let millis = value * scale as f64 + if value >= 0.0 { 0.5 } else { -0.5 };
        let max_millis = (DAYS_TO_YEAR_10000 * i64::from(MS_PER_DAY)) as f64;
        if !(millis > -max_millis && millis < max_millis) {
            return Err(CalendarError::out_of_range().with_enum(ErrorMessage::ArithmeticOverflow));
        }
        let millis = millis
            .to_i64()
            .ok_or(CalendarError::out_of_range().with_enum(ErrorMessage::ArithmeticOverflow))?;
        t.checked_add_ticks(millis * TICKS_PER_MILLISECOND)
    }
}

// ==== Validation utilities ====

#[inline]
fn validate_era(era: u8) -> CalendarResult<()> {
    if era != AD_ERA {
        return Err(CalendarError::invalid_argument().with_enum(ErrorMessage::EraNotSupported));
    }
    Ok(())
}

#[inline]
fn validate_year(year: i32) -> CalendarResult<()> {
    if !utils::is_valid_year(year.into()) {
        return Err(CalendarError::invalid_argument().with_enum(ErrorMessage::YearOutOfRange));
    }
    Ok(())
}

#[inline]
fn validate_year_month(year: i32, month: u8) -> CalendarResult<()> {
    validate_year(year)?;
    if !utils::is_valid_month(month.into()) {
        return Err(CalendarError::invalid_argument().with_enum(ErrorMessage::MonthOutOfRange));
    }
    Ok(())
}

// ==== Week of year utilities ====
//
// Days of the week are counted from Sunday (0) to Saturday (6), and days of
// the year from 0.

/// Week number when the first week begins on January 1.
fn first_day_week_of_year(day_of_year: i32, weekday: i32, first_day: i32) -> i32 {
    let weekday_of_jan_first = weekday - day_of_year % 7;
    let offset = (weekday_of_jan_first - first_day + 14) % 7;
    (day_of_year + offset) / 7 + 1
}

/// Week number when the first week must have at least `full_days` days in
/// the year.
fn week_of_year_full_days(
    year: i32,
    day_of_year: i32,
    weekday: i32,
    first_day: i32,
    full_days: i32,
) -> i32 {
    let day = days_since_first_week(day_of_year, weekday, first_day, full_days);
    if day >= 0 {
        return day / 7 + 1;
    }

    // The date falls in the last week of the previous year; count from
    // December 31 of that year. The year before year 1 is the proleptic
    // year 0.
    let last_day_of_previous = i32::from(utils::mathematical_days_in_year(year - 1)) - 1;
    let weekday_of_previous = (weekday - day_of_year - 1).rem_euclid(7);
    let day = days_since_first_week(
        last_day_of_previous,
        weekday_of_previous,
        first_day,
        full_days,
    );
    day / 7 + 1
}

fn days_since_first_week(day_of_year: i32, weekday: i32, first_day: i32, full_days: i32) -> i32 {
    let weekday_of_jan_first = weekday - day_of_year % 7;
    let mut offset = (first_day - weekday_of_jan_first + 14) % 7;
    if offset != 0 && offset >= full_days {
        offset -= 7;
    }
    day_of_year - offset
}

// ==== Tests =====

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn compose(year: i32, month: u8, day: u8) -> TimePoint {
        GregorianCalendar::new()
            .compose(&CalendarFields::new(year, month, day))
            .unwrap()
    }

    #[test]
    fn epoch_is_monday() {
        let calendar = GregorianCalendar::new();
        assert_eq!(calendar.day_of_week(TimePoint::MIN).unwrap(), Weekday::Monday);
        assert_eq!(
            calendar.day_of_week(compose(2000, 1, 1)).unwrap(),
            Weekday::Saturday
        );
        assert_eq!(
            calendar.day_of_week(TimePoint::MAX).unwrap(),
            Weekday::Friday
        );
    }

    #[test]
    fn leap_year_rule() {
        let calendar = GregorianCalendar::new();
        for (year, expected) in [
            (1896, true),
            (1900, false),
            (1996, true),
            (2000, true),
            (2004, true),
            (2100, false),
            (2400, true),
        ] {
            assert_eq!(calendar.is_leap_year(year).unwrap(), expected, "{year}");
        }
        assert_eq!(
            calendar.is_leap_year(0).unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            calendar.is_leap_year(10_000).unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
    }

    #[test]
    fn year_and_month_queries() {
        let calendar = GregorianCalendar::new();
        assert_eq!(calendar.days_in_year(1900).unwrap(), 365);
        assert_eq!(calendar.days_in_year(2000).unwrap(), 366);
        assert_eq!(calendar.months_in_year(9999).unwrap(), 12);
        assert_eq!(calendar.leap_month(2024).unwrap(), None);
        assert!(!calendar.is_leap_month(2024, 2).unwrap());
        assert!(calendar.is_leap_day(2024, 2, 29).unwrap());
        assert!(!calendar.is_leap_day(2024, 2, 28).unwrap());
        assert!(calendar.is_leap_day(2023, 2, 29).is_err());
        assert!(calendar.days_in_month(2023, 13).is_err());
        assert!(calendar.days_in_month(2023, 0).is_err());
    }

    #[test]
    fn ordinal_days() {
        let calendar = GregorianCalendar::new();
        assert_eq!(calendar.day_of_year(compose(2023, 12, 31)).unwrap(), 365);
        assert_eq!(calendar.day_of_year(compose(2024, 12, 31)).unwrap(), 366);
        assert_eq!(calendar.day_of_year(compose(1, 1, 1)).unwrap(), 1);
    }

    #[test]
    fn weeks_of_year() {
        let calendar = GregorianCalendar::new();
        let four_day = WeekRule::FirstFourDayWeek;

        // Days at the end of December are never moved into the next year,
        // so 2019-12-30 is week 53 rather than ISO 8601's week 1.
        let cases = [
            ((2021, 1, 1), 53),
            ((2021, 1, 4), 1),
            ((2020, 12, 31), 53),
            ((2019, 12, 30), 53),
            ((2026, 1, 1), 1),
            ((2027, 1, 1), 53),
        ];
        for ((y, m, d), expected) in cases {
            assert_eq!(
                calendar
                    .week_of_year(compose(y, m, d), four_day, Weekday::Monday)
                    .unwrap(),
                expected,
                "{y}-{m}-{d}"
            );
        }

        // 2021-01-01 is a Friday.
        let jan_first = compose(2021, 1, 1);
        let jan_third = compose(2021, 1, 3);
        assert_eq!(
            calendar
                .week_of_year(jan_first, WeekRule::FirstDay, Weekday::Sunday)
                .unwrap(),
            1
        );
        assert_eq!(
            calendar
                .week_of_year(jan_third, WeekRule::FirstDay, Weekday::Sunday)
                .unwrap(),
            2
        );
        assert_eq!(
            calendar
                .week_of_year(jan_third, WeekRule::FirstFullWeek, Weekday::Sunday)
                .unwrap(),
            1
        );
        assert_eq!(
            calendar
                .week_of_year(jan_first, WeekRule::FirstFullWeek, Weekday::Sunday)
                .unwrap(),
            52
        );
    }

    #[test]
    fn week_before_year_one() {
        let calendar = GregorianCalendar::new();
        // 0001-01-01 is a Monday, so it is part of the last full week of year 0.
        assert_eq!(
            calendar
                .week_of_year(TimePoint::MIN, WeekRule::FirstFullWeek, Weekday::Sunday)
                .unwrap(),
            53
        );
        assert_eq!(
            calendar
                .week_of_year(TimePoint::MIN, WeekRule::FirstFourDayWeek, Weekday::Monday)
                .unwrap(),
            1
        );
    }

    #[test]
    fn two_digit_years() {
        let calendar = GregorianCalendar::new();
        assert_eq!(calendar.to_four_digit_year(49).unwrap(), 2049);
        assert_eq!(calendar.to_four_digit_year(50).unwrap(), 1950);
        assert_eq!(calendar.to_four_digit_year(0).unwrap(), 2000);
        assert_eq!(calendar.to_four_digit_year(100).unwrap(), 100);
        assert!(calendar.to_four_digit_year(-1).is_err());
        assert!(calendar.to_four_digit_year(10_000).is_err());

        let calendar = calendar.with_two_digit_year_max(2029).unwrap();
        assert_eq!(calendar.to_four_digit_year(29).unwrap(), 2029);
        assert_eq!(calendar.to_four_digit_year(30).unwrap(), 1930);

        assert!(calendar.with_two_digit_year_max(98).is_err());
        assert!(calendar.with_two_digit_year_max(10_000).is_err());
    }

    #[test]
    fn eras() {
        let calendar = GregorianCalendar::new();
        assert_eq!(calendar.eras(), &[1]);
        assert_eq!(calendar.era(TimePoint::MAX).unwrap(), 1);
        assert_eq!(calendar.era_code(1).unwrap(), tinystr!(16, "ce"));
        assert!(calendar.era_code(2).is_err());
        assert!(calendar.era(TimePoint::from_ticks(-1)).is_err());
    }

    #[test]
    fn clock_arithmetic() {
        let calendar = GregorianCalendar::new();
        let t = compose(2023, 12, 31);

        let next = calendar.add_hours(t, 24.0).unwrap();
        assert_eq!(next, compose(2024, 1, 1));

        let half = calendar.add_minutes(t, 0.5).unwrap();
        assert_eq!(half.as_ticks() - t.as_ticks(), 30 * TICKS_PER_SECOND);

        let rounded = calendar.add_milliseconds(t, 1.6).unwrap();
        assert_eq!(rounded.as_ticks() - t.as_ticks(), 2 * TICKS_PER_MILLISECOND);

        let back = calendar.add_seconds(t, -1.0).unwrap();
        assert_eq!(
            calendar.decompose(back).unwrap(),
            CalendarFields::new(2023, 12, 30).with_time(23, 59, 59)
        );

        assert_eq!(calendar.add_weeks(t, 1).unwrap(), compose(2024, 1, 7));
        assert_eq!(calendar.add_ticks(t, TICKS_PER_HOUR).unwrap().time_of_day(), TICKS_PER_HOUR);
        assert_eq!(
            calendar.add_ticks(t, TICKS_PER_MINUTE).unwrap().time_of_day(),
            TICKS_PER_MINUTE
        );

        assert!(calendar.add_hours(t, f64::NAN).is_err());
        assert!(calendar.add_hours(t, f64::INFINITY).is_err());
        assert!(calendar.add_seconds(TimePoint::MAX, 1.0).is_err());
        assert!(calendar.add_weeks(t, i64::MAX).is_err());
    }

    #[test]
    fn compose_constrained() {
        let calendar = GregorianCalendar::new();
        let fields = CalendarFields::new(2023, 2, 30).with_time(25, 0, 0);
        assert_eq!(
            calendar.compose(&fields).unwrap_err().kind(),
            ErrorKind::InvalidField
        );
        let t = calendar
            .compose_with_overflow(&fields, ArithmeticOverflow::Constrain)
            .unwrap();
        assert_eq!(
            calendar.decompose(t).unwrap(),
            CalendarFields::new(2023, 2, 28).with_time(23, 0, 0)
        );
    }
}
