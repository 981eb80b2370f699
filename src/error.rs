//! This module implements `CalendarError`.

use core::fmt;

/// `CalendarError`'s error type.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Error.
    #[default]
    Generic,
    /// A query received a year, month or era outside representable bounds.
    InvalidArgument,
    /// A `CalendarFields` record violated a field bound.
    InvalidField,
    /// A result would fall outside the supported range.
    OutOfRange,
    /// An internal invariant did not hold.
    Assert,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generic => "Error",
            Self::InvalidArgument => "InvalidArgument",
            Self::InvalidField => "InvalidField",
            Self::OutOfRange => "OutOfRange",
            Self::Assert => "ImplementationError",
        }
        .fmt(f)
    }
}

/// The error type for `gregorian_rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarError {
    kind: ErrorKind,
    msg: ErrorMessageInner,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ErrorMessageInner {
    StaticStr(&'static str),
    Enum(ErrorMessage),
}

impl Default for ErrorMessageInner {
    fn default() -> Self {
        Self::StaticStr("")
    }
}

impl ErrorMessageInner {
    fn as_str(&self) -> &'static str {
        match self {
            Self::StaticStr(s) => s,
            Self::Enum(e) => e.to_str(),
        }
    }
}

impl CalendarError {
    #[inline]
    #[must_use]
    const fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            msg: ErrorMessageInner::StaticStr(""),
        }
    }

    /// Create a generic error
    #[inline]
    #[must_use]
    pub fn general(msg: &'static str) -> Self {
        Self::new(ErrorKind::Generic).with_message(msg)
    }

    /// Create an invalid argument error.
    #[inline]
    #[must_use]
    pub const fn invalid_argument() -> Self {
        Self::new(ErrorKind::InvalidArgument)
    }

    /// Create an invalid field error.
    #[inline]
    #[must_use]
    pub const fn invalid_field() -> Self {
        Self::new(ErrorKind::InvalidField)
    }

    /// Create an out of range error.
    #[inline]
    #[must_use]
    pub const fn out_of_range() -> Self {
        Self::new(ErrorKind::OutOfRange)
    }

    /// Create an assertion error.
    #[inline]
    #[must_use]
    pub fn assert() -> Self {
        Self::new(ErrorKind::Assert).with_enum(ErrorMessage::AssertionFailed)
    }

    /// Add a message to the error.
    #[inline]
    #[must_use]
    pub fn with_message(mut self, msg: &'static str) -> Self {
        self.msg = ErrorMessageInner::StaticStr(msg);
        self
    }

    /// Add a message enum to the error.
    #[inline]
    #[must_use]
    pub(crate) fn with_enum(mut self, msg: ErrorMessage) -> Self {
        self.msg = ErrorMessageInner::Enum(msg);
        self
    }

    /// Returns this error's kind.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error message.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &'static str {
        self.msg.as_str()
    }
}

impl fmt::Display for CalendarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        let msg = self.msg.as_str();
        if !msg.is_empty() {
            write!(f, ": {msg}")?;
        }

        Ok(())
    }
}

impl core::error::Error for CalendarError {}

/// The error message
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum ErrorMessage {
    // Argument errors
    YearOutOfRange,
    MonthOutOfRange,
    DayOutOfRange,
    EraNotSupported,
    NegativeYear,
    TwoDigitYearMaxOutOfRange,

    // Field errors
    InvalidEra,
    InvalidYear,
    InvalidMonth,
    InvalidDay,
    InvalidTime,

    // Range errors
    TimePointOutOfRange,
    ArithmeticOutOfRange,
    ArithmeticOverflow,

    // Assertion errors
    AssertionFailed,
}

impl ErrorMessage {
    pub fn to_str(self) -> &'static str {
        match self {
            Self::YearOutOfRange => "year must be between 1 and 9999.",
            Self::MonthOutOfRange => "month must be between 1 and 12.",
            Self::DayOutOfRange => "day is not valid for the given year and month.",
            Self::EraNotSupported => "the Gregorian calendar only supports era 1.",
            Self::NegativeYear => "year must not be negative.",
            Self::TwoDigitYearMaxOutOfRange => "two digit year max must be between 99 and 9999.",
            Self::InvalidEra => "era field must be 1.",
            Self::InvalidYear => "year field must be between 1 and 9999.",
            Self::InvalidMonth => "month field must be between 1 and 12.",
            Self::InvalidDay => "day field exceeds the days in the given month.",
            Self::InvalidTime => "time fields are not a valid time of day.",
            Self::TimePointOutOfRange => "time point is outside 0001-01-01 through 9999-12-31.",
            Self::ArithmeticOutOfRange => "result is outside the supported year range.",
            Self::ArithmeticOverflow => "arithmetic overflowed the tick range.",
            Self::AssertionFailed => "implementation error: invariant assertion failed.",
        }
    }
}
