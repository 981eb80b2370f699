//! Gregorian Date Calculations
//!
//! This module contains the logic for Gregorian Date Calculations based
//! off Cassio Neri and Lorenz Schneider's paper, [Euclidean affine functions
//! and their application to calendar algorithms][eaf-calendar-algorithms].
//!
//! ## General Usage Note
//!
//! Unless specified, Rata Die refers to the computational rata die as referenced
//! in the paper, i.e. the number of days since March 1 of year 0.
//!
//! ## Shift window
//!
//! The supported range of the calendar engine is [0001-01-01, 9999-12-31],
//! which maps onto computational rata die values of [306, 3_652_364]. Every
//! value in that window is non-negative, so unlike wider-range
//! implementations no cycle shift is required and all of the equations
//! below operate on unsigned integers.
//!
//! The equations are exact for any computational rata die below
//! `MAX_COMPUTATIONAL_RATA_DIE`, which comfortably covers the supported range.
//!
//! [eaf-calendar-algorithms]: https://onlinelibrary.wiley.com/doi/full/10.1002/spe.3172

/// The computational rata die of January 1, year 1 (day number zero).
pub const EPOCH_COMPUTATIONAL_RATA_DIE: u32 = 306;
pub const DAYS_IN_A_400Y_CYCLE: u32 = 146_097;

/// The largest rata die for which `4 * rata_die + 3` does not overflow.
pub const MAX_COMPUTATIONAL_RATA_DIE: u32 = (u32::MAX - 3) / 4;

const TWO_POWER_THIRTY_NINE: u64 = 549_755_813_888; // 2^39 constant
const TWO_POWER_SIXTEEN: u32 = 65_536; // 2^16 constant

// ==== Gregorian YMD to computational days ====

/// Returns the day number (days since 0001-01-01) for a Gregorian date.
///
/// `year` must be at least 1, `month` in 1..=12, and `day` a valid day of
/// that month; the result is unspecified otherwise.
pub const fn day_number_from_gregorian_date(year: i32, month: u8, day: u8) -> u32 {
    let (comp_year, comp_month, comp_day, century) = rata_die_first_equations(year, month, day);
    let y_star = 1461 * comp_year / 4 - century + century / 4;
    let m_star = (979 * comp_month - 2919) / 32;
    (y_star + m_star + comp_day) - EPOCH_COMPUTATIONAL_RATA_DIE
}

// Returns Y, M, D, C
const fn rata_die_first_equations(year: i32, month: u8, day: u8) -> (u32, u32, u32, u32) {
    let j = (month <= 2) as u32;
    let computational_year = year as u32 - j;
    let computation_month = month as u32 + 12 * j;
    let computation_day = day as u32 - 1;
    (
        computational_year,
        computation_month,
        computation_day,
        computational_year / 100,
    )
}

// ==== Computational days to Gregorian YMD ====

// Determine j
const fn j(rata_die: u32) -> u32 {
    (computational_day_of_year(rata_die) >= 306) as u32
}

const fn n_one(rata_die: u32) -> u32 {
    4 * rata_die + 3
}

const fn n_two(rata_die: u32) -> u32 {
    century_rem(rata_die) | 3
}

const fn n_three(rata_die: u32) -> u32 {
    2141 * computational_day_of_year(rata_die) + 197_913
}

const fn century_rem(rata_die: u32) -> u32 {
    n_one(rata_die).rem_euclid(DAYS_IN_A_400Y_CYCLE)
}

pub const fn century_number(rata_die: u32) -> u32 {
    n_one(rata_die).div_euclid(DAYS_IN_A_400Y_CYCLE)
}

// Z
pub const fn computational_year_of_century(rata_die: u32) -> u64 {
    (376_287_347 * n_two(rata_die) as u64).div_euclid(TWO_POWER_THIRTY_NINE)
}

// N_y
pub const fn computational_day_of_year(rata_die: u32) -> u32 {
    (n_two(rata_die) - 1461 * computational_year_of_century(rata_die) as u32).div_euclid(4)
}

// Y
pub const fn computational_year(rata_die: u32) -> u32 {
    100 * century_number(rata_die) + computational_year_of_century(rata_die) as u32
}

pub const fn computational_month(rata_die: u32) -> u32 {
    n_three(rata_die).div_euclid(TWO_POWER_SIXTEEN)
}

pub const fn computational_day(rata_die: u32) -> u32 {
    n_three(rata_die).rem_euclid(TWO_POWER_SIXTEEN).div_euclid(2141)
}

pub const fn gregorian_year(rata_die: u32) -> i32 {
    (computational_year(rata_die) + j(rata_die)) as i32
}

pub const fn gregorian_month(rata_die: u32) -> u8 {
    (computational_month(rata_die) - 12 * j(rata_die)) as u8
}

pub const fn gregorian_day(rata_die: u32) -> u8 {
    computational_day(rata_die) as u8 + 1
}

/// Get the computational Rata Die for a given day number.
pub const fn rata_die_for_day_number(day_number: u32) -> u32 {
    day_number + EPOCH_COMPUTATIONAL_RATA_DIE
}

/// Returns the Gregorian `(year, month, day)` for a day number.
pub const fn gregorian_ymd_from_day_number(day_number: u32) -> (i32, u8, u8) {
    let rata_die = rata_die_for_day_number(day_number);
    (
        gregorian_year(rata_die),
        gregorian_month(rata_die),
        gregorian_day(rata_die),
    )
}

// ==== Year and month lengths ====

/// Returns whether `year` is a Gregorian leap year.
///
/// A year divisible by 100 is divisible by 400 exactly when it is
/// divisible by 16.
pub const fn is_leap_year(year: i32) -> bool {
    if year % 100 == 0 {
        year % 16 == 0
    } else {
        year % 4 == 0
    }
}

/// Returns the number of days in `month` of `year`.
///
/// `month` must be in 1..=12.
pub const fn days_in_month(year: i32, month: u8) -> u8 {
    if month == 2 {
        28 + is_leap_year(year) as u8
    } else {
        30 | (month ^ (month >> 3))
    }
}
