//! Utility date and time equations for the Gregorian calendar

use date_equations::gregorian;

use crate::{MAX_YEAR, MIN_YEAR};

// ==== Begin Date Equations ====

/// Returns whether `year` is within the supported year range.
#[inline]
pub(crate) fn is_valid_year(year: i64) -> bool {
    (i64::from(MIN_YEAR)..=i64::from(MAX_YEAR)).contains(&year)
}

/// Returns whether `month` is a month of the year.
#[inline]
pub(crate) fn is_valid_month(month: i64) -> bool {
    (1..=12).contains(&month)
}

/// Mathematically determine whether a year is a leap year.
///
/// Unlike the calendar method this accepts years outside the supported
/// range, which week counting needs for the proleptic year 0.
#[inline]
pub(crate) fn mathematical_in_leap_year(year: i32) -> bool {
    gregorian::is_leap_year(year)
}

/// Mathematically determine the days in a year.
#[inline]
pub(crate) fn mathematical_days_in_year(year: i32) -> u16 {
    365 + u16::from(mathematical_in_leap_year(year))
}

/// `ISODaysInMonth ( year, month )`
///
/// `month` must be in 1..=12.
#[inline]
pub(crate) fn iso_days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    gregorian::days_in_month(year, month)
}

/// Returns the day number (days since 0001-01-01) of a valid date.
#[inline]
pub(crate) fn day_number_for_date(year: i32, month: u8, day: u8) -> i64 {
    i64::from(gregorian::day_number_from_ymd(year, month, day))
}

/// Returns the `(year, month, day)` of a day number within the supported range.
#[inline]
pub(crate) fn date_for_day_number(day_number: i64) -> (i32, u8, u8) {
    debug_assert!((0..crate::time_point::DAYS_TO_YEAR_10000).contains(&day_number));
    gregorian::ymd_from_day_number(day_number as u32)
}

/// `BalanceISOYearMonth ( year, month )`
#[inline]
pub(crate) fn balance_year_month(year: i64, month: i64) -> (i64, i64) {
    // 1. Set year to year + floor((month - 1) / 12).
    let y = year + (month - 1).div_euclid(12);
    // 2. Set month to ((month - 1) modulo 12) + 1.
    let m = (month - 1).rem_euclid(12) + 1;
    (y, m)
}

// ==== End Date Equations ====

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balance_months() {
        assert_eq!(balance_year_month(2020, 13), (2021, 1));
        assert_eq!(balance_year_month(2020, 12), (2020, 12));
        assert_eq!(balance_year_month(2020, 0), (2019, 12));
        assert_eq!(balance_year_month(2020, -11), (2019, 1));
        assert_eq!(balance_year_month(2020, -12), (2018, 12));
        assert_eq!(balance_year_month(2020, 25), (2022, 1));
    }

    #[test]
    fn year_lengths() {
        assert_eq!(mathematical_days_in_year(0), 366);
        assert_eq!(mathematical_days_in_year(1900), 365);
        assert_eq!(mathematical_days_in_year(2000), 366);
        assert_eq!(mathematical_days_in_year(2023), 365);
    }

    #[test]
    fn day_numbers_round_trip() {
        for (year, month, day) in [(1, 1, 1), (1900, 2, 28), (2000, 2, 29), (9999, 12, 31)] {
            let day_number = day_number_for_date(year, month, day);
            assert_eq!(date_for_day_number(day_number), (year, month, day));
        }
    }
}
