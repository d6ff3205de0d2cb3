//! The [`Step`] and [`Properties`] types underlying every [`Period`](crate::Period).

use core::fmt;
use core::time::Duration as StdDuration;

use num_conv::prelude::*;

use crate::error;
use crate::util::{
    MICROSECONDS_PER_SECOND, MONTHS_PER_YEAR, SECONDS_PER_DAY, SECONDS_PER_HOUR,
    SECONDS_PER_MINUTE,
};
use crate::Tz;

/// The coarsest unit from which a period is built.
///
/// Every period is anchored at exactly one step; a duration mixing months with seconds cannot
/// be a period. The ordering places sub-second before second before month, so that sorting
/// periods sorts broadly from fine to coarse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Step {
    /// Fixed-length sub-second intervals. The multiplier is deliberately never a whole number
    /// of seconds; such values normalize to [`Step::Seconds`].
    Microseconds,
    /// Fixed-length intervals of a whole number of seconds.
    Seconds,
    /// Calendar months, whose length in days varies.
    Months,
}

/// The basic properties of a period.
///
/// Each period wraps exactly one `Properties` record and derives everything else from it: the
/// concrete ordinal implementation, string renderings, equality, ordering, and hashing. The
/// record is always held in normalized form, where each offset has been reduced modulo the
/// interval length.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Properties {
    step: Step,
    multiplier: i64,
    month_offset: i64,
    microsecond_offset: i64,
    tzinfo: Option<Tz>,
    ordinal_shift: i64,
}

impl Properties {
    /// Return a `Properties` record for an `n`-year period.
    pub fn of_years(years: i64) -> Result<Self, error::Validation> {
        Self::of_months(checked_scale(years, MONTHS_PER_YEAR, "multiplier")?)
    }

    /// Return a `Properties` record for an `n`-month period.
    pub fn of_months(months: i64) -> Result<Self, error::Validation> {
        Self::of_step_and_multiplier(Step::Months, months)
    }

    /// Return a `Properties` record for an `n`-day period.
    pub fn of_days(days: i64) -> Result<Self, error::Validation> {
        Self::of_seconds(checked_scale(days, SECONDS_PER_DAY, "multiplier")?)
    }

    /// Return a `Properties` record for an `n`-hour period.
    pub fn of_hours(hours: i64) -> Result<Self, error::Validation> {
        Self::of_seconds(checked_scale(hours, SECONDS_PER_HOUR, "multiplier")?)
    }

    /// Return a `Properties` record for an `n`-minute period.
    pub fn of_minutes(minutes: i64) -> Result<Self, error::Validation> {
        Self::of_seconds(checked_scale(minutes, SECONDS_PER_MINUTE, "multiplier")?)
    }

    /// Return a `Properties` record for an `n`-second period.
    pub fn of_seconds(seconds: i64) -> Result<Self, error::Validation> {
        Self::of_step_and_multiplier(Step::Seconds, seconds)
    }

    /// Return a `Properties` record for an `n`-microsecond period.
    ///
    /// A count that is a whole number of seconds collapses to [`Step::Seconds`].
    pub fn of_microseconds(microseconds: i64) -> Result<Self, error::Validation> {
        if microseconds > 0 && microseconds % MICROSECONDS_PER_SECOND == 0 {
            return Self::of_seconds(microseconds / MICROSECONDS_PER_SECOND);
        }
        Self::of_step_and_multiplier(Step::Microseconds, microseconds)
    }

    /// Return a `Properties` record for a period of the given step and multiplier, with no
    /// offsets, no time zone, and no ordinal shift.
    pub fn of_step_and_multiplier(step: Step, multiplier: i64) -> Result<Self, error::Validation> {
        Self::new(step, multiplier, 0, 0, None, 0)
    }

    /// Validating constructor. Every externally-sourced record passes through here.
    pub(crate) fn new(
        step: Step,
        multiplier: i64,
        month_offset: i64,
        microsecond_offset: i64,
        tzinfo: Option<Tz>,
        ordinal_shift: i64,
    ) -> Result<Self, error::Validation> {
        if multiplier <= 0 {
            return Err(error::Validation::new("multiplier"));
        }
        if month_offset < 0 {
            return Err(error::Validation::new("month offset"));
        }
        if microsecond_offset < 0 {
            return Err(error::Validation::new("microsecond offset"));
        }
        if month_offset != 0 && !matches!(step, Step::Months) {
            return Err(error::Validation::new("month offset on non-month step"));
        }

        Ok(Self {
            step,
            multiplier,
            month_offset,
            microsecond_offset,
            tzinfo,
            ordinal_shift,
        })
    }

    /// Non-validating constructor for values whose invariants hold by construction.
    pub(crate) fn from_parts(
        step: Step,
        multiplier: i64,
        month_offset: i64,
        microsecond_offset: i64,
        tzinfo: Option<Tz>,
        ordinal_shift: i64,
    ) -> Self {
        debug_assert!(multiplier > 0);
        debug_assert!(month_offset >= 0);
        debug_assert!(microsecond_offset >= 0);
        debug_assert!(month_offset == 0 || matches!(step, Step::Months));

        Self {
            step,
            multiplier,
            month_offset,
            microsecond_offset,
            tzinfo,
            ordinal_shift,
        }
    }

    /// Reduce each offset modulo the interval length, zeroing the ordinal shift.
    ///
    /// A one-year period with an offset of thirteen months splits the timeline exactly as a
    /// one-year period with an offset of one month does, so the two must compare equal.
    pub(crate) fn normalized(self) -> Self {
        let (month_offset, microsecond_offset) = match self.step {
            Step::Months => (self.month_offset % self.multiplier, self.microsecond_offset),
            // An interval too long for its length in microseconds to be representable cannot
            // have an offset reaching it either, so the offset is already reduced.
            Step::Seconds => match self.multiplier.checked_mul(MICROSECONDS_PER_SECOND) {
                Some(interval) => (self.month_offset, self.microsecond_offset % interval),
                None => (self.month_offset, self.microsecond_offset),
            },
            Step::Microseconds => (self.month_offset, self.microsecond_offset % self.multiplier),
        };

        Self {
            month_offset,
            microsecond_offset,
            ordinal_shift: 0,
            ..self
        }
    }

    /// Multiply the magnitude, preserving and re-normalizing the offsets. The ordinal shift is
    /// reset to zero.
    ///
    /// A microsecond multiplier scaled up to a whole number of seconds collapses to the
    /// second step, keeping the step invariant intact.
    pub(crate) fn with_multiplier(&self, multiplier: i64) -> Result<Self, error::Validation> {
        if multiplier <= 0 {
            return Err(error::Validation::new("multiplier"));
        }
        let mut step = self.step;
        let mut multiplier = self
            .multiplier
            .checked_mul(multiplier)
            .ok_or(error::Validation::new("multiplier"))?;
        if matches!(step, Step::Microseconds) && multiplier % MICROSECONDS_PER_SECOND == 0 {
            step = Step::Seconds;
            multiplier /= MICROSECONDS_PER_SECOND;
        }
        Ok(Self::new(
            step,
            multiplier,
            self.month_offset,
            self.microsecond_offset,
            self.tzinfo.clone(),
            0,
        )?
        .normalized())
    }

    /// Add to the month offset. The ordinal shift is reset to zero, as the new offset renders
    /// the previous value meaningless.
    pub(crate) fn with_month_offset(&self, months: i64) -> Result<Self, error::Validation> {
        let month_offset = self
            .month_offset
            .checked_add(months)
            .ok_or(error::Validation::new("month offset"))?;
        Ok(Self::new(
            self.step,
            self.multiplier,
            month_offset,
            self.microsecond_offset,
            self.tzinfo.clone(),
            0,
        )?
        .normalized())
    }

    /// Add to the microsecond offset. The ordinal shift is reset to zero, as the new offset
    /// renders the previous value meaningless.
    pub(crate) fn with_microsecond_offset(
        &self,
        microseconds: i64,
    ) -> Result<Self, error::Validation> {
        let microsecond_offset = self
            .microsecond_offset
            .checked_add(microseconds)
            .ok_or(error::Validation::new("microsecond offset"))?;
        Ok(Self::new(
            self.step,
            self.multiplier,
            self.month_offset,
            microsecond_offset,
            self.tzinfo.clone(),
            0,
        )?
        .normalized())
    }

    /// Replace both offsets at once, normalizing. Used when parsing the extended offset
    /// grammar. The ordinal shift is reset to zero.
    pub(crate) fn with_offsets(
        &self,
        month_offset: i64,
        microsecond_offset: i64,
    ) -> Result<Self, error::Validation> {
        Ok(Self::new(
            self.step,
            self.multiplier,
            month_offset,
            microsecond_offset,
            self.tzinfo.clone(),
            0,
        )?
        .normalized())
    }

    /// Replace the time zone. The ordinal shift is deliberately preserved: a period pinned to
    /// an origin keeps that origin when reinterpreted in another zone.
    pub(crate) fn with_tzinfo(&self, tzinfo: Option<Tz>) -> Self {
        Self {
            tzinfo,
            ..self.clone()
        }
    }

    /// Replace the ordinal shift. No other field is touched.
    pub(crate) fn with_ordinal_shift(&self, ordinal_shift: i64) -> Self {
        Self {
            ordinal_shift,
            ..self.clone()
        }
    }

    /// Get the step.
    pub const fn step(&self) -> Step {
        self.step
    }

    /// Get the multiplier: the number of step units in one interval.
    pub const fn multiplier(&self) -> i64 {
        self.multiplier
    }

    /// Get the month offset.
    pub const fn month_offset(&self) -> i64 {
        self.month_offset
    }

    /// Get the microsecond offset.
    pub const fn microsecond_offset(&self) -> i64 {
        self.microsecond_offset
    }

    /// Get the time zone, if one is attached.
    pub const fn tzinfo(&self) -> Option<&Tz> {
        self.tzinfo.as_ref()
    }

    /// Get the ordinal shift.
    pub const fn ordinal_shift(&self) -> i64 {
        self.ordinal_shift
    }

    /// Whether either offset is non-zero.
    pub(crate) const fn has_offsets(&self) -> bool {
        self.month_offset != 0 || self.microsecond_offset != 0
    }

    /// The multiplier expressed in microseconds, for the fixed-length steps.
    ///
    /// Returns `None` for month steps and on overflow.
    pub(crate) const fn multiplier_microseconds(&self) -> Option<i64> {
        match self.step {
            Step::Microseconds => Some(self.multiplier),
            Step::Seconds => self.multiplier.checked_mul(MICROSECONDS_PER_SECOND),
            Step::Months => None,
        }
    }

    /// Return whether the way this period splits the timeline is independent of the epoch used
    /// to perform calculations, assuming the epoch always falls on the start of a calendar
    /// year.
    ///
    /// `P1Y`, `P1M`, `P1D`, and `PT15M` are epoch-agnostic. `P7D` is not: modulus arithmetic on
    /// the day number produces different seven-day groupings for different epochs.
    pub fn is_epoch_agnostic(&self) -> bool {
        let bound = match self.step {
            Step::Microseconds => MICROSECONDS_PER_SECOND,
            Step::Seconds => SECONDS_PER_DAY,
            Step::Months => MONTHS_PER_YEAR,
        };
        self.multiplier <= bound && bound % self.multiplier == 0
    }

    /// The canonical minimal ISO 8601 duration string for the step and multiplier.
    pub fn iso_duration(&self) -> String {
        IsoDuration(self).to_string()
    }

    /// A fixed-length duration matching one interval, or `None` for month steps, which have no
    /// fixed length.
    pub fn duration(&self) -> Option<StdDuration> {
        match self.step {
            Step::Microseconds => Some(StdDuration::from_micros(self.multiplier.cast_unsigned())),
            Step::Seconds => Some(StdDuration::from_secs(self.multiplier.cast_unsigned())),
            Step::Months => None,
        }
    }

    /// The step and multiplier in the Polars duration string language, e.g. `1500000us`,
    /// `3600s`, or `12mo`.
    pub fn pl_interval(&self) -> String {
        let unit = match self.step {
            Step::Microseconds => "us",
            Step::Seconds => "s",
            Step::Months => "mo",
        };
        format!("{}{unit}", self.multiplier)
    }

    /// Both offsets in the Polars duration string language, e.g. `9mo32400000000us`.
    pub fn pl_offset(&self) -> String {
        format!("{}mo{}us", self.month_offset, self.microsecond_offset)
    }

    /// Write the step and multiplier as ISO 8601 duration elements.
    fn fmt_step_elems(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.step {
            Step::Microseconds => {
                let seconds = self.multiplier / MICROSECONDS_PER_SECOND;
                let microseconds = self.multiplier % MICROSECONDS_PER_SECOND;
                fmt_second_elems(f, seconds, microseconds)
            }
            Step::Seconds => fmt_second_elems(f, self.multiplier, 0),
            Step::Months => fmt_month_elems(f, self.multiplier),
        }
    }

    /// Write the offsets as duration elements prefixed with `+`, or nothing when both offsets
    /// are zero.
    fn fmt_offset_elems(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.has_offsets() {
            return Ok(());
        }
        f.write_str("+")?;
        if self.month_offset > 0 {
            fmt_month_elems(f, self.month_offset)?;
        }
        if self.microsecond_offset > 0 {
            let seconds = self.microsecond_offset / MICROSECONDS_PER_SECOND;
            let microseconds = self.microsecond_offset % MICROSECONDS_PER_SECOND;
            fmt_offset_second_elems(f, seconds, microseconds)?;
        }
        Ok(())
    }

    /// Write the time zone as a bracketed suffix. The brackets are always present; only a
    /// fixed offset produces content between them.
    fn fmt_tz_elems(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        if let Some(tz) = &self.tzinfo {
            write!(f, "{tz}")?;
        }
        f.write_str("]")
    }
}

impl fmt::Display for Properties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("P")?;
        self.fmt_step_elems(f)?;
        self.fmt_offset_elems(f)
    }
}

/// The round-trippable debug form: the display form followed by the bracketed time zone and
/// the ordinal shift.
impl Properties {
    pub(crate) fn fmt_repr(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)?;
        self.fmt_tz_elems(f)?;
        if self.ordinal_shift != 0 {
            write!(f, "{}", self.ordinal_shift)?;
        }
        Ok(())
    }
}

/// Renders the canonical ISO 8601 duration of a `Properties` record.
struct IsoDuration<'a>(&'a Properties);

impl fmt::Display for IsoDuration<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("P")?;
        self.0.fmt_step_elems(f)
    }
}

/// Write a total number of months as ISO 8601 duration elements.
fn fmt_month_elems(f: &mut fmt::Formatter<'_>, months: i64) -> fmt::Result {
    let years = months / MONTHS_PER_YEAR;
    let months_in_year = months % MONTHS_PER_YEAR;
    if years > 0 {
        write!(f, "{years}Y")?;
    }
    if months_in_year > 0 {
        write!(f, "{months_in_year}M")?;
    }
    Ok(())
}

/// Write seconds and microseconds as a decimal seconds value with trailing zeros removed.
fn fmt_second_string(f: &mut fmt::Formatter<'_>, seconds: i64, microseconds: i64) -> fmt::Result {
    if microseconds == 0 {
        return write!(f, "{seconds}");
    }
    let fraction = format!("{microseconds:06}");
    write!(f, "{seconds}.{}", fraction.trim_end_matches('0'))
}

/// Write total seconds and microseconds as ISO 8601 duration elements, with the standard `T`
/// time designator.
fn fmt_second_elems(f: &mut fmt::Formatter<'_>, seconds: i64, microseconds: i64) -> fmt::Result {
    let days = seconds / SECONDS_PER_DAY;
    let seconds_in_day = seconds % SECONDS_PER_DAY;
    if days > 0 {
        write!(f, "{days}D")?;
    }
    if seconds_in_day > 0 || microseconds > 0 {
        f.write_str("T")?;
        fmt_time_elems(f, seconds_in_day, microseconds)?;
    }
    Ok(())
}

/// Write total seconds and microseconds as offset-section elements.
///
/// The time designator is dropped except where the section would otherwise begin with a
/// minutes element, which would re-parse as months.
fn fmt_offset_second_elems(
    f: &mut fmt::Formatter<'_>,
    seconds: i64,
    microseconds: i64,
) -> fmt::Result {
    let days = seconds / SECONDS_PER_DAY;
    let seconds_in_day = seconds % SECONDS_PER_DAY;
    if days > 0 {
        write!(f, "{days}D")?;
    }
    if seconds_in_day > 0 || microseconds > 0 {
        let hours = seconds_in_day / SECONDS_PER_HOUR;
        let minutes = seconds_in_day % SECONDS_PER_HOUR / SECONDS_PER_MINUTE;
        if days == 0 && hours == 0 && minutes > 0 {
            f.write_str("T")?;
        }
        fmt_time_elems(f, seconds_in_day, microseconds)?;
    }
    Ok(())
}

/// Write the hour, minute, and second elements of a duration's time section.
fn fmt_time_elems(f: &mut fmt::Formatter<'_>, seconds_in_day: i64, microseconds: i64) -> fmt::Result {
    let hours = seconds_in_day / SECONDS_PER_HOUR;
    let seconds_in_hour = seconds_in_day % SECONDS_PER_HOUR;
    if hours > 0 {
        write!(f, "{hours}H")?;
    }
    let minutes = seconds_in_hour / SECONDS_PER_MINUTE;
    let seconds_in_minute = seconds_in_hour % SECONDS_PER_MINUTE;
    if minutes > 0 {
        write!(f, "{minutes}M")?;
    }
    if seconds_in_minute > 0 || microseconds > 0 {
        fmt_second_string(f, seconds_in_minute, microseconds)?;
        f.write_str("S")?;
    }
    Ok(())
}

/// Scale a positive count by a unit size, reporting overflow as a validation failure against
/// the named field.
fn checked_scale(count: i64, unit: i64, name: &'static str) -> Result<i64, error::Validation> {
    count
        .checked_mul(unit)
        .ok_or(error::Validation::new(name))
}
