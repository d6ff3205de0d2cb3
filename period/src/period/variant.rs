//! Concrete ordinal ↔ datetime implementations and their dispatch.

use num_conv::prelude::*;

use crate::date_time::DateTime;
use crate::error;
use crate::period::adjusters::Adjusters;
use crate::properties::{Properties, Step};
use crate::util::{
    MICROSECONDS_PER_DAY, MICROSECONDS_PER_SECOND, MONTHS_PER_YEAR, SECONDS_PER_DAY,
    SECONDS_PER_HOUR, SECONDS_PER_MINUTE,
};
use crate::{Date, Time};

/// Minutes per day, used by the minute-grid variants.
const MINUTES_PER_DAY: i64 = 1_440;
/// Hours per day, used by the hour-grid variants.
const HOURS_PER_DAY: i64 = 24;

/// One of the closed set of base ordinal ↔ datetime implementations.
///
/// Each kind holds its magnitude scaled into its own grid unit, so every `ordinal` call is a
/// handful of integer operations. All divisions are Euclidean, so pre-epoch values stay
/// well-defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BaseKind {
    /// Calendar years, one per interval.
    Year,
    /// A fixed number of whole years per interval.
    MultiYear { years: i64 },
    /// Calendar months, one per interval.
    Month,
    /// A fixed number of months per interval, not a whole number of years.
    MultiMonth { months: i64 },
    /// Calendar days, one per interval.
    Day,
    /// A fixed number of whole days per interval.
    MultiDay { days: i64 },
    /// A fixed number of whole hours per interval.
    MultiHour { hours: i64 },
    /// A fixed number of whole minutes per interval.
    MultiMinute { minutes: i64 },
    /// A fixed number of whole seconds per interval.
    MultiSecond { seconds: i64 },
    /// A fixed number of microseconds per interval.
    Microsecond { microseconds: i64 },
}

impl BaseKind {
    /// Select the cheapest implementation for the given step and multiplier.
    pub(crate) fn of(step: Step, multiplier: i64) -> Self {
        match step {
            Step::Months => {
                if multiplier == 1 {
                    Self::Month
                } else if multiplier % MONTHS_PER_YEAR == 0 {
                    let years = multiplier / MONTHS_PER_YEAR;
                    if years == 1 {
                        Self::Year
                    } else {
                        Self::MultiYear { years }
                    }
                } else {
                    Self::MultiMonth { months: multiplier }
                }
            }
            Step::Seconds => {
                if multiplier % SECONDS_PER_DAY == 0 {
                    let days = multiplier / SECONDS_PER_DAY;
                    if days == 1 {
                        Self::Day
                    } else {
                        Self::MultiDay { days }
                    }
                } else if multiplier % SECONDS_PER_HOUR == 0 {
                    Self::MultiHour {
                        hours: multiplier / SECONDS_PER_HOUR,
                    }
                } else if multiplier % SECONDS_PER_MINUTE == 0 {
                    Self::MultiMinute {
                        minutes: multiplier / SECONDS_PER_MINUTE,
                    }
                } else {
                    Self::MultiSecond {
                        seconds: multiplier,
                    }
                }
            }
            Step::Microseconds => Self::Microsecond {
                microseconds: multiplier,
            },
        }
    }

    /// The ordinal of the interval containing `date_time`. Any attached time zone is ignored.
    pub(crate) fn ordinal(self, date_time: &DateTime) -> i64 {
        match self {
            Self::Year => i64::from(date_time.year()),
            Self::MultiYear { years } => i64::from(date_time.year()).div_euclid(years),
            Self::Month => months0(date_time),
            Self::MultiMonth { months } => months0(date_time).div_euclid(months),
            Self::Day => date_time.date().to_gregorian_day(),
            Self::MultiDay { days } => date_time.date().to_gregorian_day().div_euclid(days),
            Self::MultiHour { hours } => {
                let hour_of_epoch = date_time.date().to_gregorian_day() * HOURS_PER_DAY
                    + i64::from(date_time.hour());
                hour_of_epoch.div_euclid(hours)
            }
            Self::MultiMinute { minutes } => {
                let minute_of_epoch = date_time.date().to_gregorian_day() * MINUTES_PER_DAY
                    + i64::from(date_time.hour()) * 60
                    + i64::from(date_time.minute());
                minute_of_epoch.div_euclid(minutes)
            }
            Self::MultiSecond { seconds } => date_time.gregorian_seconds().div_euclid(seconds),
            Self::Microsecond { microseconds } => {
                date_time.gregorian_microseconds().div_euclid(microseconds)
            }
        }
    }

    /// The naive datetime at which interval `ordinal` starts.
    pub(crate) fn date_time(self, ordinal: i64) -> Result<DateTime, error::ComponentRange> {
        let out_of_range = error::ComponentRange::unconditional("ordinal");
        match self {
            Self::Year => year_start(ordinal),
            Self::MultiYear { years } => year_start(ordinal.checked_mul(years).ok_or(out_of_range)?),
            Self::Month => month_start(ordinal),
            Self::MultiMonth { months } => {
                month_start(ordinal.checked_mul(months).ok_or(out_of_range)?)
            }
            Self::Day => day_micros(ordinal, 0),
            Self::MultiDay { days } => {
                day_micros(ordinal.checked_mul(days).ok_or(out_of_range)?, 0)
            }
            Self::MultiHour { hours } => {
                let hour_of_epoch = ordinal.checked_mul(hours).ok_or(out_of_range)?;
                day_micros(
                    hour_of_epoch.div_euclid(HOURS_PER_DAY),
                    hour_of_epoch.rem_euclid(HOURS_PER_DAY)
                        * SECONDS_PER_HOUR
                        * MICROSECONDS_PER_SECOND,
                )
            }
            Self::MultiMinute { minutes } => {
                let minute_of_epoch = ordinal.checked_mul(minutes).ok_or(out_of_range)?;
                day_micros(
                    minute_of_epoch.div_euclid(MINUTES_PER_DAY),
                    minute_of_epoch.rem_euclid(MINUTES_PER_DAY)
                        * SECONDS_PER_MINUTE
                        * MICROSECONDS_PER_SECOND,
                )
            }
            Self::MultiSecond { seconds } => {
                let second_of_epoch = ordinal.checked_mul(seconds).ok_or(out_of_range)?;
                day_micros(
                    second_of_epoch.div_euclid(SECONDS_PER_DAY),
                    second_of_epoch.rem_euclid(SECONDS_PER_DAY) * MICROSECONDS_PER_SECOND,
                )
            }
            Self::Microsecond { microseconds } => {
                let microsecond_of_epoch =
                    ordinal.checked_mul(microseconds).ok_or(out_of_range)?;
                day_micros(
                    microsecond_of_epoch.div_euclid(MICROSECONDS_PER_DAY),
                    microsecond_of_epoch.rem_euclid(MICROSECONDS_PER_DAY),
                )
            }
        }
    }
}

/// The zero-based month count since year zero used by the month-grid variants.
fn months0(date_time: &DateTime) -> i64 {
    i64::from(date_time.year()) * MONTHS_PER_YEAR + i64::from(date_time.month()) - 1
}

/// Midnight on January 1st of the given year.
fn year_start(year: i64) -> Result<DateTime, error::ComponentRange> {
    let year = i32::try_from(year).map_err(|_| error::ComponentRange::unconditional("year"))?;
    Ok(DateTime::new(Date::from_calendar_date(year, 1, 1)?, Time::MIDNIGHT))
}

/// Midnight on the first day of the given zero-based month count.
fn month_start(months0: i64) -> Result<DateTime, error::ComponentRange> {
    let year = i32::try_from(months0.div_euclid(MONTHS_PER_YEAR))
        .map_err(|_| error::ComponentRange::unconditional("year"))?;
    let month = months0.rem_euclid(MONTHS_PER_YEAR).truncate::<i8>() as u8 + 1;
    Ok(DateTime::new(
        Date::from_calendar_date(year, month, 1)?,
        Time::MIDNIGHT,
    ))
}

/// The datetime at the given day number plus a sub-day microsecond component.
fn day_micros(day: i64, microsecond_of_day: i64) -> Result<DateTime, error::ComponentRange> {
    let total = day
        .checked_mul(MICROSECONDS_PER_DAY)
        .and_then(|micros| micros.checked_add(microsecond_of_day))
        .ok_or(error::ComponentRange::unconditional("ordinal"))?;
    DateTime::from_gregorian_microseconds(total)
}

/// The pre-computed dispatch tag of a period: a base implementation, optionally wrapped by an
/// offset layer, optionally wrapped by an ordinal shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Variant {
    /// Intervals aligned to calendar boundaries.
    Base(BaseKind),
    /// Base intervals moved by a fixed month/microsecond offset.
    Offset {
        base: BaseKind,
        adjusters: Adjusters,
    },
    /// An offset (or base) period whose ordinals are relabelled by an additive shift.
    Shifted {
        base: BaseKind,
        adjusters: Option<Adjusters>,
        shift: i64,
    },
}

impl Variant {
    /// Examine a `Properties` record and select the matching implementation.
    pub(crate) fn of(properties: &Properties) -> Self {
        let base = BaseKind::of(properties.step(), properties.multiplier());
        let adjusters = if properties.has_offsets() {
            Some(Adjusters::of_offsets(
                properties.month_offset(),
                properties.microsecond_offset(),
            ))
        } else {
            None
        };

        match (properties.ordinal_shift(), adjusters) {
            (0, None) => Self::Base(base),
            (0, Some(adjusters)) => Self::Offset { base, adjusters },
            (shift, adjusters) => Self::Shifted {
                base,
                adjusters,
                shift,
            },
        }
    }

    /// The ordinal of the interval containing `date_time`.
    pub(crate) fn ordinal(&self, date_time: &DateTime) -> Result<i64, error::ComponentRange> {
        match *self {
            Self::Base(base) => Ok(base.ordinal(date_time)),
            Self::Offset { base, adjusters } => {
                Ok(base.ordinal(&adjusters.retreat(date_time.clone())?))
            }
            Self::Shifted {
                base,
                adjusters,
                shift,
            } => {
                let natural = match adjusters {
                    Some(adjusters) => base.ordinal(&adjusters.retreat(date_time.clone())?),
                    None => base.ordinal(date_time),
                };
                natural
                    .checked_add(shift)
                    .ok_or(error::ComponentRange::unconditional("ordinal"))
            }
        }
    }

    /// The ordinal that `date_time` would have if the offsets were ignored. Infallible, and
    /// used to recover a conservative bound when the offset calculation leaves the
    /// representable range.
    pub(crate) fn unoffset_ordinal(&self, date_time: &DateTime) -> i64 {
        match *self {
            Self::Base(base) | Self::Offset { base, .. } => base.ordinal(date_time),
            Self::Shifted { base, shift, .. } => base.ordinal(date_time).saturating_add(shift),
        }
    }

    /// The naive start of interval `ordinal`.
    pub(crate) fn date_time(&self, ordinal: i64) -> Result<DateTime, error::ComponentRange> {
        match *self {
            Self::Base(base) => base.date_time(ordinal),
            Self::Offset { base, adjusters } => adjusters.advance(base.date_time(ordinal)?),
            Self::Shifted {
                base,
                adjusters,
                shift,
            } => {
                let natural = ordinal
                    .checked_sub(shift)
                    .ok_or(error::ComponentRange::unconditional("ordinal"))?;
                let start = base.date_time(natural)?;
                match adjusters {
                    Some(adjusters) => adjusters.advance(start),
                    None => Ok(start),
                }
            }
        }
    }
}
