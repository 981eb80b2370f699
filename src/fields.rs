//! This module implements `CalendarFields`, the decomposed view of a `TimePoint`.

use crate::{
    error::ErrorMessage,
    iso::{IsoDate, IsoDateTime, IsoTime},
    options::ArithmeticOverflow,
    CalendarError, CalendarResult, AD_ERA, TICKS_PER_MILLISECOND,
};

/// The calendar fields of a single instant.
///
/// `CalendarFields` is a plain record: building one performs no validation.
/// The fields are checked when the record is composed into a
/// [`TimePoint`](crate::TimePoint) by
/// [`GregorianCalendar::compose`](crate::GregorianCalendar::compose).
///
/// ```rust
/// use gregorian_rs::{CalendarFields, GregorianCalendar};
///
/// let calendar = GregorianCalendar::new();
/// let fields = CalendarFields::new(2024, 2, 29).with_time(10, 30, 12);
///
/// let t = calendar.compose(&fields).unwrap();
/// assert_eq!(calendar.decompose(t).unwrap(), fields);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarFields {
    /// The era, always `1` for values produced by the calendar.
    pub era: u8,
    /// The year, 1..=9999.
    pub year: i32,
    /// The month of the year, 1..=12.
    pub month: u8,
    /// The day of the month, 1..=31.
    pub day: u8,
    /// The hour of the day, 0..=23.
    pub hour: u8,
    /// The minute of the hour, 0..=59.
    pub minute: u8,
    /// The second of the minute, 0..=59.
    pub second: u8,
    /// The fractional second in 100-nanosecond ticks, 0..=9_999_999.
    pub subsecond: u32,
}

impl Default for CalendarFields {
    fn default() -> Self {
        Self::new(1, 1, 1)
    }
}

/// Convenience methods for building `CalendarFields`
impl CalendarFields {
    /// Creates fields for midnight on the given date.
    pub const fn new(year: i32, month: u8, day: u8) -> Self {
        Self {
            era: AD_ERA,
            year,
            month,
            day,
            hour: 0,
            minute: 0,
            second: 0,
            subsecond: 0,
        }
    }

    pub const fn with_era(mut self, era: u8) -> Self {
        self.era = era;
        self
    }

    pub const fn with_time(mut self, hour: u8, minute: u8, second: u8) -> Self {
        self.hour = hour;
        self.minute = minute;
        self.second = second;
        self
    }

    pub const fn with_subsecond(mut self, subsecond: u32) -> Self {
        self.subsecond = subsecond;
        self
    }

    /// Sets the fractional second to a whole number of milliseconds.
    pub const fn with_millisecond(mut self, millisecond: u16) -> Self {
        self.subsecond = millisecond as u32 * TICKS_PER_MILLISECOND as u32;
        self
    }

    /// Returns the whole milliseconds of the fractional second.
    pub const fn millisecond(&self) -> u16 {
        (self.subsecond / TICKS_PER_MILLISECOND as u32) as u16
    }
}

impl CalendarFields {
    pub(crate) fn from_iso(iso: IsoDateTime) -> Self {
        Self {
            era: AD_ERA,
            year: iso.date.year,
            month: iso.date.month,
            day: iso.date.day,
            hour: iso.time.hour,
            minute: iso.time.minute,
            second: iso.time.second,
            subsecond: iso.time.subsecond,
        }
    }

    /// Validates or regulates these fields into an `IsoDateTime`.
    ///
    /// The era and year are always validated.
    pub(crate) fn to_iso(self, overflow: ArithmeticOverflow) -> CalendarResult<IsoDateTime> {
        if self.era != AD_ERA {
            return Err(CalendarError::invalid_field().with_enum(ErrorMessage::InvalidEra));
        }
        let date = IsoDate::new_with_overflow(
            self.year,
            self.month.into(),
            self.day.into(),
            overflow,
        )?;
        let time = IsoTime::new(
            self.hour.into(),
            self.minute.into(),
            self.second.into(),
            self.subsecond.into(),
            overflow,
        )?;
        Ok(IsoDateTime::new_unchecked(date, time))
    }
}
