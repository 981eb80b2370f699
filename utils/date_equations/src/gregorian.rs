/// Gregorian Date Calculations
///
/// This module contains the logic for Gregorian Date Calculations.
///
/// ## Day numbers
///
/// A day number is the count of days elapsed since January 1 of year 1
/// in the proleptic Gregorian calendar. The computational calendar of
/// Neri-Schneider begins on March 1 of year 0, so the two are related by
/// a fixed offset.
///
/// | Significant Date | Day Number | Computational Rata Die |
/// | -----------------|------------|------------------------|
/// | March 1, 0 | -306 | 0 |
/// | January 1, 1 | 0 | 306 |
/// | January 1, 1970 | 719,162 | 719,468 |
/// | December 31, 9999 | 3,652,058 | 3,652,364 |
///
pub mod neri_schneider;

pub use neri_schneider::{
    day_number_from_gregorian_date as day_number_from_ymd, days_in_month, gregorian_day as day,
    gregorian_month as month, gregorian_year as year,
    gregorian_ymd_from_day_number as ymd_from_day_number, is_leap_year,
    rata_die_for_day_number, DAYS_IN_A_400Y_CYCLE,
};
