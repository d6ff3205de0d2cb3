//! The [`DateTime`] struct and its associated `impl`s.

use core::fmt;

use crate::error;
use crate::util::MICROSECONDS_PER_DAY;
use crate::{Date, Time, Tz};

/// A calendar date combined with a clock time, optionally carrying a time zone.
///
/// The time zone is a label: period arithmetic reads only the date and time components, and
/// reattaches the period's own zone to anything it produces.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateTime {
    date: Date,
    time: Time,
    tz: Option<Tz>,
}

impl DateTime {
    /// The minimum valid `DateTime`: midnight on 0001-01-01, naive.
    pub const MIN: Self = Self {
        date: Date::MIN,
        time: Time::MIDNIGHT,
        tz: None,
    };

    /// The maximum valid `DateTime`: one microsecond before the year 10000, naive.
    pub const MAX: Self = Self {
        date: Date::MAX,
        time: Time::MAX,
        tz: None,
    };

    /// Create a naive `DateTime` from a date and time.
    pub const fn new(date: Date, time: Time) -> Self {
        Self {
            date,
            time,
            tz: None,
        }
    }

    /// Parse a `DateTime` from an ISO 8601 string such as `2024-06-15T13:47:30`.
    ///
    /// Components may be omitted from the right; each omitted component defaults to its first
    /// valid value. The date and time may be separated by `T`, `t`, or whitespace. A `Z` or
    /// `±HH:MM` suffix attaches a fixed-offset zone.
    ///
    /// ```rust
    /// # use period::DateTime;
    /// assert_eq!(DateTime::parse("1984")?, DateTime::parse("1984-01-01 00:00:00")?);
    /// # Ok::<_, period::Error>(())
    /// ```
    pub fn parse(input: &str) -> Result<Self, error::Parse> {
        crate::parsing::parse_date_time(input)
    }

    /// Replace the time zone, leaving the date and time components untouched.
    pub fn replace_tz(self, tz: Option<Tz>) -> Self {
        Self { tz, ..self }
    }

    /// Strip the time zone, leaving the date and time components untouched.
    pub fn naive(self) -> Self {
        self.replace_tz(None)
    }

    /// Get the date component.
    pub const fn date(&self) -> Date {
        self.date
    }

    /// Get the time component.
    pub const fn time(&self) -> Time {
        self.time
    }

    /// Get the time zone, if one is attached.
    pub const fn tz(&self) -> Option<&Tz> {
        self.tz.as_ref()
    }

    /// Get the year of the date component.
    pub const fn year(&self) -> i32 {
        self.date.year()
    }

    /// Get the month of the date component.
    pub const fn month(&self) -> u8 {
        self.date.month()
    }

    /// Get the day of the date component.
    pub const fn day(&self) -> u8 {
        self.date.day()
    }

    /// Get the hour of the time component.
    pub const fn hour(&self) -> u8 {
        self.time.hour()
    }

    /// Get the minute of the time component.
    pub const fn minute(&self) -> u8 {
        self.time.minute()
    }

    /// Get the second of the time component.
    pub const fn second(&self) -> u8 {
        self.time.second()
    }

    /// Get the microsecond of the time component.
    pub const fn microsecond(&self) -> u32 {
        self.time.microsecond()
    }

    /// Whether the date and time components equal those of `other`, disregarding both time
    /// zones.
    pub fn naive_eq(&self, other: &Self) -> bool {
        self.date == other.date && self.time == other.time
    }

    /// Get the number of whole seconds since the day epoch: midnight at the start of the day
    /// before 0001-01-01.
    pub(crate) const fn gregorian_seconds(&self) -> i64 {
        self.date.to_gregorian_day() * crate::util::SECONDS_PER_DAY + self.time.seconds_of_day()
    }

    /// Get the number of microseconds since the day epoch.
    pub(crate) const fn gregorian_microseconds(&self) -> i64 {
        self.date.to_gregorian_day() * MICROSECONDS_PER_DAY + self.time.microseconds_of_day()
    }

    /// Reconstruct a naive `DateTime` from a number of microseconds since the day epoch.
    pub(crate) fn from_gregorian_microseconds(
        microseconds: i64,
    ) -> Result<Self, error::ComponentRange> {
        let date = Date::from_gregorian_day(microseconds.div_euclid(MICROSECONDS_PER_DAY))?;
        let time = Time::from_microsecond_of_day(microseconds.rem_euclid(MICROSECONDS_PER_DAY));
        Ok(Self::new(date, time))
    }

    /// Add a signed number of microseconds, erroring if the result would leave the
    /// representable range. The time zone is preserved.
    pub fn checked_add_micros(self, microseconds: i64) -> Result<Self, error::ComponentRange> {
        if microseconds == 0 {
            return Ok(self);
        }
        let total = self
            .gregorian_microseconds()
            .checked_add(microseconds)
            .ok_or(error::ComponentRange::unconditional("microseconds"))?;
        Ok(Self::from_gregorian_microseconds(total)?.replace_tz(self.tz))
    }

    /// Shift by the given number of months, clamping the day-of-month to the target month. The
    /// time and time zone are preserved.
    pub fn shift_months(self, months: i64) -> Result<Self, error::ComponentRange> {
        Ok(Self {
            date: self.date.shift_months(months)?,
            ..self
        })
    }

    /// Shift by the given number of years, clamping February 29th in non-leap target years. The
    /// time and time zone are preserved.
    pub fn shift_years(self, years: i64) -> Result<Self, error::ComponentRange> {
        Ok(Self {
            date: self.date.shift_years(years)?,
            ..self
        })
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.date, self.time)?;
        match &self.tz {
            Some(tz) => tz.fmt(f),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
