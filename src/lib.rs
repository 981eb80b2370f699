//! The `gregorian_rs` crate is a proleptic Gregorian calendar engine.
//!
//! ```rust
//! use gregorian_rs::{CalendarFields, GregorianCalendar};
//!
//! let calendar = GregorianCalendar::new();
//!
//! // Compose a leap day into a `TimePoint`
//! let leap_day = calendar
//!     .compose(&CalendarFields::new(2024, 2, 29).with_time(10, 30, 12))
//!     .unwrap();
//!
//! // Adding a year lands on a common year, so the day is clamped.
//! let next_year = calendar.add_years(leap_day, 1).unwrap();
//! assert_eq!(calendar.month(next_year).unwrap(), 2);
//! assert_eq!(calendar.day_of_month(next_year).unwrap(), 28);
//! ```
//!
//! A [`TimePoint`] counts 100-nanosecond ticks elapsed since
//! 0001-01-01T00:00:00, and [`CalendarFields`] is its decomposition into
//! era, year, month, day and time of day. The supported range is
//! 0001-01-01T00:00:00 through 9999-12-31T23:59:59.9999999; conversion in
//! both directions is a bijection over that range and runs in constant
//! time.
//!
//! The engine is stateless: every [`GregorianCalendar`] method is a pure
//! function and may be called from any thread.
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/boa-dev/boa/main/assets/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/boa-dev/boa/main/assets/logo.svg"
)]
#![no_std]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    clippy::module_name_repetitions,
    clippy::redundant_pub_crate,
    clippy::missing_errors_doc,

    // It may be worth to look if we can fix the issues highlighted by these lints.
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    clippy::cast_possible_wrap,
)]

pub mod calendar;
pub mod error;
pub mod fields;
pub mod options;

mod iso;
mod time_point;

#[doc(hidden)]
pub(crate) mod utils;

#[doc(inline)]
pub use error::CalendarError;

/// The `gregorian_rs` result type
pub type CalendarResult<T> = Result<T, CalendarError>;

pub use crate::{
    calendar::GregorianCalendar,
    fields::CalendarFields,
    options::{ArithmeticOverflow, WeekRule, Weekday},
    time_point::TimePoint,
};

#[doc(hidden)]
#[macro_export]
macro_rules! calendar_assert {
    ($condition:expr $(,)*) => {
        if !$condition {
            return Err($crate::CalendarError::assert());
        }
    };
    ($condition:expr, $($args:tt)+) => {
        if !$condition {
            #[cfg(feature = "log")]
            log::error!($($args)+);
            return Err($crate::CalendarError::assert());
        }
    };
}

// Relevant calendar constants
/// The only era of the Gregorian calendar, Anno Domini.
pub const AD_ERA: u8 = 1;
/// The earliest supported year.
pub const MIN_YEAR: i32 = 1;
/// The latest supported year.
pub const MAX_YEAR: i32 = 9999;

// Relevant numeric constants
/// Ticks per millisecond constant: 1e+4
pub const TICKS_PER_MILLISECOND: i64 = 10_000;
/// Ticks per second constant: 1e+7
pub const TICKS_PER_SECOND: i64 = TICKS_PER_MILLISECOND * 1_000;
/// Ticks per minute constant: 6e+8
pub const TICKS_PER_MINUTE: i64 = TICKS_PER_SECOND * 60;
/// Ticks per hour constant: 3.6e+10
pub const TICKS_PER_HOUR: i64 = TICKS_PER_MINUTE * 60;
/// Ticks per day constant: 8.64e+11
pub const TICKS_PER_DAY: i64 = TICKS_PER_HOUR * 24;
/// Milliseconds per day constant: 8.64e+7
pub const MS_PER_DAY: u32 = 24 * 60 * 60 * 1000;
