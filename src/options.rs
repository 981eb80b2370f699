//! Native implementation of the calendar options.
//!
//! The options here select behavior at the edges of the calendar:
//! how out-of-range fields are regulated, and how weeks are counted.

use core::{fmt, str::FromStr};

/// `ArithmeticOverflow` can also be used as an
/// assignment overflow and consists of the "constrain"
/// and "reject" options.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticOverflow {
    /// Constrain option
    #[default]
    Constrain,
    /// Reject option
    Reject,
}

/// A parsing error for `ArithemeticOverflow`
#[derive(Debug, Clone, Copy)]
pub struct ParseArithmeticOverflowError;

impl fmt::Display for ParseArithmeticOverflowError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("provided string was not a valid overflow value")
    }
}

impl FromStr for ArithmeticOverflow {
    type Err = ParseArithmeticOverflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "constrain" => Ok(Self::Constrain),
            "reject" => Ok(Self::Reject),
            _ => Err(ParseArithmeticOverflowError),
        }
    }
}

impl fmt::Display for ArithmeticOverflow {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Constrain => "constrain",
            Self::Reject => "reject",
        }
        .fmt(f)
    }
}

/// A day of the week, numbered from Monday (1) to Sunday (7).
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    Sunday = 7,
}

impl Weekday {
    /// Returns the `Weekday` for the given number of days after a Monday.
    #[inline]
    #[must_use]
    pub(crate) const fn from_days_after_monday(days: i64) -> Self {
        match days.rem_euclid(7) {
            0 => Self::Monday,
            1 => Self::Tuesday,
            2 => Self::Wednesday,
            3 => Self::Thursday,
            4 => Self::Friday,
            5 => Self::Saturday,
            _ => Self::Sunday,
        }
    }

    /// Returns the ISO weekday number, 1 for Monday through 7 for Sunday.
    #[inline]
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Returns the number of days since the previous Sunday, 0 for Sunday
    /// through 6 for Saturday.
    #[inline]
    #[must_use]
    pub const fn days_from_sunday(self) -> u8 {
        self as u8 % 7
    }
}

/// A parsing error for `Weekday`.
#[derive(Debug, Clone, Copy)]
pub struct ParseWeekdayError;

impl fmt::Display for ParseWeekdayError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("provided string was not a valid weekday")
    }
}

impl FromStr for Weekday {
    type Err = ParseWeekdayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "monday" => Ok(Self::Monday),
            "tuesday" => Ok(Self::Tuesday),
            "wednesday" => Ok(Self::Wednesday),
            "thursday" => Ok(Self::Thursday),
            "friday" => Ok(Self::Friday),
            "saturday" => Ok(Self::Saturday),
            "sunday" => Ok(Self::Sunday),
            _ => Err(ParseWeekdayError),
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
            Self::Sunday => "sunday",
        }
        .fmt(f)
    }
}

/// `WeekRule` determines which week is the first week of a year.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum WeekRule {
    /// The first week starts on January 1 and ends before the
    /// following first day of the week.
    #[default]
    FirstDay,
    /// The first week is the first full seven-day week of the year.
    FirstFullWeek,
    /// The first week is the first week with at least four days in
    /// the year.
    FirstFourDayWeek,
}

impl WeekRule {
    /// The number of days of a week that must fall in a year for the
    /// week to count as that year's first week.
    pub(crate) const fn full_days(self) -> Option<i32> {
        match self {
            Self::FirstDay => None,
            Self::FirstFullWeek => Some(7),
            Self::FirstFourDayWeek => Some(4),
        }
    }
}

/// A parsing error for `WeekRule`.
#[derive(Debug, Clone, Copy)]
pub struct ParseWeekRuleError;

impl fmt::Display for ParseWeekRuleError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("provided string was not a valid week rule")
    }
}

impl FromStr for WeekRule {
    type Err = ParseWeekRuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first-day" => Ok(Self::FirstDay),
            "first-full-week" => Ok(Self::FirstFullWeek),
            "first-four-day-week" => Ok(Self::FirstFourDayWeek),
            _ => Err(ParseWeekRuleError),
        }
    }
}

impl fmt::Display for WeekRule {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::FirstDay => "first-day",
            Self::FirstFullWeek => "first-full-week",
            Self::FirstFourDayWeek => "first-four-day-week",
        }
        .fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekday_numbering() {
        assert_eq!(Weekday::from_days_after_monday(0), Weekday::Monday);
        assert_eq!(Weekday::from_days_after_monday(6), Weekday::Sunday);
        assert_eq!(Weekday::from_days_after_monday(7), Weekday::Monday);
        assert_eq!(Weekday::from_days_after_monday(-1), Weekday::Sunday);
        assert_eq!(Weekday::Sunday.days_from_sunday(), 0);
        assert_eq!(Weekday::Saturday.days_from_sunday(), 6);
        assert_eq!(Weekday::Wednesday.number(), 3);
    }

    #[test]
    fn parse_options() {
        assert_eq!(
            "reject".parse::<ArithmeticOverflow>().ok(),
            Some(ArithmeticOverflow::Reject)
        );
        assert_eq!(
            "first-four-day-week".parse::<WeekRule>().ok(),
            Some(WeekRule::FirstFourDayWeek)
        );
        assert_eq!("friday".parse::<Weekday>().ok(), Some(Weekday::Friday));
        assert!("Friday".parse::<Weekday>().is_err());
        assert!("balance".parse::<ArithmeticOverflow>().is_err());
    }
}
