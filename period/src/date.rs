//! The [`Date`] struct and its associated `impl`s.

use core::fmt;

use deranged::RangedI32;

use crate::error;
use crate::internal_macros::ensure_ranged;
use crate::util::{days_before_month, days_before_year, days_in_month};

/// The range of years representable by a [`Date`].
type Year = RangedI32<MIN_YEAR, MAX_YEAR>;

/// The minimum valid year.
pub(crate) const MIN_YEAR: i32 = 1;
/// The maximum valid year.
pub(crate) const MAX_YEAR: i32 = 9999;

/// Date in the proleptic Gregorian calendar.
///
/// Years 1 through 9999 inclusive are representable, matching the range over which period
/// ordinal arithmetic is defined.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Date {
    year: i32,
    month: u8,
    day: u8,
}

impl Date {
    /// The minimum valid `Date`: 0001-01-01.
    pub const MIN: Self = Self {
        year: MIN_YEAR,
        month: 1,
        day: 1,
    };

    /// The maximum valid `Date`: 9999-12-31.
    pub const MAX: Self = Self {
        year: MAX_YEAR,
        month: 12,
        day: 31,
    };

    /// Attempt to create a `Date` from the year, month, and day.
    ///
    /// ```rust
    /// # use period::Date;
    /// assert!(Date::from_calendar_date(2019, 12, 31).is_ok());
    /// assert!(Date::from_calendar_date(2019, 2, 29).is_err()); // 2019 isn't a leap year.
    /// ```
    pub const fn from_calendar_date(
        year: i32,
        month: u8,
        day: u8,
    ) -> Result<Self, error::ComponentRange> {
        ensure_ranged!(Year: year);
        match month {
            1..=12 => {}
            _ => return Err(error::ComponentRange::unconditional("month")),
        }
        match day {
            1..=28 => {}
            29..=31 if day <= days_in_month(year, month) => {}
            _ => return Err(error::ComponentRange::conditional("day")),
        }

        Ok(Self { year, month, day })
    }

    /// Create a `Date` from its day number in the proleptic Gregorian calendar, where
    /// 0001-01-01 is day one.
    ///
    /// ```rust
    /// # use period::Date;
    /// assert_eq!(Date::from_gregorian_day(1), Date::from_calendar_date(1, 1, 1));
    /// assert_eq!(Date::from_gregorian_day(739_052), Date::from_calendar_date(2024, 6, 15));
    /// ```
    pub const fn from_gregorian_day(day: i64) -> Result<Self, error::ComponentRange> {
        if day < 1 || day > Self::MAX.to_gregorian_day() {
            return Err(error::ComponentRange::unconditional("gregorian day"));
        }

        // The cycle decomposition used by most proleptic Gregorian conversions: 400-year,
        // 100-year, 4-year and 1-year cycles, in that order.
        let mut n = day - 1;
        let n400 = n / 146_097;
        n %= 146_097;
        let n100 = n / 36_524;
        n %= 36_524;
        let n4 = n / 1_461;
        n %= 1_461;
        let n1 = n / 365;
        n %= 365;

        let year = (n400 * 400 + n100 * 100 + n4 * 4 + n1) as i32 + 1;
        if n1 == 4 || n100 == 4 {
            // The last day of a 4-year or 400-year cycle is December 31st.
            return Ok(Self {
                year: year - 1,
                month: 12,
                day: 31,
            });
        }

        let mut month = 1;
        let mut ordinal0 = n;
        while ordinal0 >= days_in_month(year, month) as i64 {
            ordinal0 -= days_in_month(year, month) as i64;
            month += 1;
        }

        Ok(Self {
            year,
            month,
            day: ordinal0 as u8 + 1,
        })
    }

    /// Get the year of the date.
    pub const fn year(self) -> i32 {
        self.year
    }

    /// Get the month of the date, from 1 to 12.
    pub const fn month(self) -> u8 {
        self.month
    }

    /// Get the day of the date, from 1 to 31.
    pub const fn day(self) -> u8 {
        self.day
    }

    /// Get the day number of the date in the proleptic Gregorian calendar, where 0001-01-01 is
    /// day one.
    ///
    /// ```rust
    /// # use period::Date;
    /// assert_eq!(Date::MIN.to_gregorian_day(), 1);
    /// assert_eq!(Date::MAX.to_gregorian_day(), 3_652_059);
    /// ```
    pub const fn to_gregorian_day(self) -> i64 {
        days_before_year(self.year) + days_before_month(self.year, self.month) + self.day as i64
    }

    /// Shift the date by the given number of months, clamping the day to the last valid day of
    /// the target month when necessary.
    ///
    /// ```rust
    /// # use period::Date;
    /// assert_eq!(
    ///     Date::from_calendar_date(2020, 1, 31)?.shift_months(1),
    ///     Date::from_calendar_date(2020, 2, 29),
    /// );
    /// # Ok::<_, period::Error>(())
    /// ```
    pub fn shift_months(self, months: i64) -> Result<Self, error::ComponentRange> {
        if months == 0 {
            return Ok(self);
        }
        let months0 = (self.year as i64 * 12 + self.month as i64 - 1)
            .checked_add(months)
            .ok_or(error::ComponentRange::unconditional("month"))?;
        let year = months0.div_euclid(12);
        let month = months0.rem_euclid(12) as u8 + 1;
        if year < MIN_YEAR as i64 || year > MAX_YEAR as i64 {
            return Err(error::ComponentRange::unconditional("year"));
        }
        let year = year as i32;

        let day = if self.day <= 28 {
            self.day
        } else {
            let days_in_month = days_in_month(year, month);
            if self.day < days_in_month {
                self.day
            } else {
                days_in_month
            }
        };
        Ok(Self { year, month, day })
    }

    /// Shift the date by the given number of years, clamping February 29th to the 28th in
    /// non-leap target years.
    pub fn shift_years(self, years: i64) -> Result<Self, error::ComponentRange> {
        if years == 0 {
            return Ok(self);
        }
        let year = self.year as i64 + years;
        if year < MIN_YEAR as i64 || year > MAX_YEAR as i64 {
            return Err(error::ComponentRange::unconditional("year"));
        }
        let year = year as i32;

        let day = if self.day <= 28 {
            self.day
        } else {
            let days_in_month = days_in_month(year, self.month);
            if self.day < days_in_month {
                self.day
            } else {
                days_in_month
            }
        };
        Ok(Self {
            year,
            month: self.month,
            day,
        })
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl fmt::Debug for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
