//! The [`Period`] struct and its associated `impl`s.

mod adjusters;
mod variant;

use core::fmt;
use core::hash::{Hash, Hasher};
use core::time::Duration as StdDuration;
use std::collections::HashSet;

use self::variant::Variant;
use crate::date_time::DateTime;
use crate::error;
use crate::formatting::DateTimeFormatter;
use crate::properties::{Properties, Step};
use crate::util::{
    MICROSECONDS_PER_DAY, MICROSECONDS_PER_SECOND, MONTHS_PER_YEAR, SECONDS_PER_HOUR,
    SECONDS_PER_MINUTE,
};
use crate::{Error, Tz};

/// A period in time that splits the proleptic Gregorian timeline into consecutive half-open
/// intervals, each identified by an integer ordinal.
///
/// [`ordinal`](Self::ordinal) returns the ordinal of the interval within which a datetime
/// lies; [`datetime`](Self::datetime) returns the inclusive start of an interval. For every
/// in-range datetime `t` and the ordinal `n` it maps to,
/// `datetime(n) <= t < datetime(n + 1)`.
///
/// Periods are immutable. Builder methods return new values and leave the original untouched.
/// Periods are hashable and sortable, with both notions derived from the normalized
/// [`Properties`] record, so equivalent periods created through different factories compare
/// equal.
///
/// ```rust
/// # use period::{DateTime, Period};
/// let fifteen_minutes = Period::of_minutes(15)?;
/// let n = fifteen_minutes.ordinal(&DateTime::parse("2024-06-15T13:47:30")?)?;
/// assert_eq!(fifteen_minutes.datetime(n)?, DateTime::parse("2024-06-15T13:45:00")?);
/// # Ok::<_, period::Error>(())
/// ```
#[derive(Clone)]
pub struct Period {
    properties: Properties,
    variant: Variant,
}

impl Period {
    /// Construct the period for a record, pre-computing the dispatch tag.
    pub(crate) fn from_properties(properties: Properties) -> Self {
        let variant = Variant::of(&properties);
        Self {
            properties,
            variant,
        }
    }

    // region: parsing factories
    /// Return a `Period` from a string in any accepted grammar.
    ///
    /// The grammars are attempted in order: plain ISO 8601 duration, extended offset duration,
    /// date-and-duration, and the round-trippable debug form. The first full match wins.
    ///
    /// ```rust
    /// # use period::Period;
    /// assert_eq!(Period::parse("P1Y")?, Period::of_years(1)?);
    /// assert_eq!(
    ///     Period::parse("P1Y+9M9H")?,
    ///     Period::of_years(1)?.with_month_offset(9)?.with_hour_offset(9)?,
    /// );
    /// # Ok::<_, period::Error>(())
    /// ```
    pub fn parse(input: &str) -> Result<Self, Error> {
        crate::parsing::parse_period(input)
    }

    /// Return a `Period` from an ISO 8601 duration string such as `P1Y` or `PT15M`.
    ///
    /// Zero-length durations are rejected: a period must span a positive amount of time.
    pub fn of_iso_duration(input: &str) -> Result<Self, Error> {
        crate::parsing::parse_iso_duration(input)
    }

    /// Return a `Period` from a plain or extended ISO 8601 duration string.
    ///
    /// The extended form `<duration>+<duration>` reads the second duration as the period's
    /// month and microsecond offsets, e.g. `P1Y+9M9H` for years starting in October at 09:00.
    pub fn of_duration(input: &str) -> Result<Self, Error> {
        crate::parsing::parse_duration(input)
    }

    /// Return a `Period` from a string of the form `<datetime>/<duration>`, such as
    /// `1980-10-01T09:00:00/P1Y`.
    ///
    /// The duration is anchored so that the named datetime starts an interval; the resulting
    /// period carries the derived offsets but no ordinal shift.
    pub fn of_date_and_duration(input: &str) -> Result<Self, Error> {
        crate::parsing::parse_date_and_duration(input)
    }

    /// Return a `Period` from the string produced by the `Debug` implementation.
    ///
    /// This round-trips everything except named time zones, which the debug form renders as an
    /// empty `[]`.
    pub fn of_repr(input: &str) -> Result<Self, Error> {
        crate::parsing::parse_repr(input)
    }
    // endregion parsing factories

    // region: unit factories
    /// Return an `n`-year period.
    pub fn of_years(years: i64) -> Result<Self, error::Validation> {
        Properties::of_years(years).map(Self::from_properties)
    }

    /// Return an `n`-month period.
    pub fn of_months(months: i64) -> Result<Self, error::Validation> {
        Properties::of_months(months).map(Self::from_properties)
    }

    /// Return an `n`-day period.
    pub fn of_days(days: i64) -> Result<Self, error::Validation> {
        Properties::of_days(days).map(Self::from_properties)
    }

    /// Return an `n`-hour period.
    pub fn of_hours(hours: i64) -> Result<Self, error::Validation> {
        Properties::of_hours(hours).map(Self::from_properties)
    }

    /// Return an `n`-minute period.
    pub fn of_minutes(minutes: i64) -> Result<Self, error::Validation> {
        Properties::of_minutes(minutes).map(Self::from_properties)
    }

    /// Return an `n`-second period.
    pub fn of_seconds(seconds: i64) -> Result<Self, error::Validation> {
        Properties::of_seconds(seconds).map(Self::from_properties)
    }

    /// Return an `n`-microsecond period. A whole number of seconds collapses to the second
    /// step.
    pub fn of_microseconds(microseconds: i64) -> Result<Self, error::Validation> {
        Properties::of_microseconds(microseconds).map(Self::from_properties)
    }

    /// Return a period of the given step and multiplier.
    pub fn of_step_and_multiplier(step: Step, multiplier: i64) -> Result<Self, error::Validation> {
        Properties::of_step_and_multiplier(step, multiplier).map(Self::from_properties)
    }

    /// Return a period whose interval matches the given duration.
    ///
    /// The duration must be a positive whole number of microseconds.
    pub fn of_std_duration(duration: StdDuration) -> Result<Self, error::Validation> {
        if duration.subsec_nanos() % 1_000 != 0 {
            return Err(error::Validation::new("sub-microsecond duration"));
        }
        let microseconds = i64::try_from(duration.as_micros())
            .map_err(|_| error::Validation::new("multiplier"))?;
        Self::of_microseconds(microseconds)
    }
    // endregion unit factories

    // region: queries
    /// Get the underlying normalized [`Properties`] record.
    pub const fn properties(&self) -> &Properties {
        &self.properties
    }

    /// Get the step of the period.
    pub const fn step(&self) -> Step {
        self.properties.step()
    }

    /// Get the multiplier: the number of step units making up one interval.
    pub const fn multiplier(&self) -> i64 {
        self.properties.multiplier()
    }

    /// Get the month offset of the period.
    pub const fn month_offset(&self) -> i64 {
        self.properties.month_offset()
    }

    /// Get the microsecond offset of the period.
    pub const fn microsecond_offset(&self) -> i64 {
        self.properties.microsecond_offset()
    }

    /// Get the time zone of the period, if one is attached.
    pub const fn tzinfo(&self) -> Option<&Tz> {
        self.properties.tzinfo()
    }

    /// Get the ordinal shift of the period.
    pub const fn ordinal_shift(&self) -> i64 {
        self.properties.ordinal_shift()
    }

    /// The standard ISO 8601 duration string of the period's step and multiplier.
    pub fn iso_duration(&self) -> String {
        self.properties.iso_duration()
    }

    /// A fixed-length duration matching one interval, or `None` for month-step periods, which
    /// have no fixed length.
    pub fn duration(&self) -> Option<StdDuration> {
        self.properties.duration()
    }

    /// The step and multiplier in the Polars duration string language, e.g. `900s`.
    pub fn pl_interval(&self) -> String {
        self.properties.pl_interval()
    }

    /// Both offsets in the Polars duration string language, e.g. `9mo32400000000us`.
    pub fn pl_offset(&self) -> String {
        self.properties.pl_offset()
    }

    /// Return whether the way this period splits the timeline is independent of the epoch used
    /// to perform calculations. See [`Properties::is_epoch_agnostic`].
    pub fn is_epoch_agnostic(&self) -> bool {
        self.properties.is_epoch_agnostic()
    }

    /// Get the minimum ordinal for which [`datetime`](Self::datetime) succeeds.
    ///
    /// When offsets push the natural calculation out of the representable range, the bound is
    /// recomputed without them and nudged until the inverse round-trip holds, so the returned
    /// value is conservative rather than exact.
    pub fn min_ordinal(&self) -> i64 {
        let mut ordinal = match self.variant.ordinal(&DateTime::MIN) {
            Ok(ordinal) => ordinal,
            Err(_) => self.variant.unoffset_ordinal(&DateTime::MIN),
        };
        if self.datetime(ordinal).is_err() {
            ordinal += 1;
        }
        ordinal
    }

    /// Get the maximum ordinal for which [`datetime`](Self::datetime) succeeds. As with
    /// [`min_ordinal`](Self::min_ordinal), the value is conservative.
    pub fn max_ordinal(&self) -> i64 {
        let mut ordinal = match self.variant.ordinal(&DateTime::MAX) {
            Ok(ordinal) => ordinal,
            Err(_) => self.variant.unoffset_ordinal(&DateTime::MAX),
        };
        if self.datetime(ordinal).is_err() {
            ordinal -= 1;
        }
        ordinal
    }
    // endregion queries

    // region: ordinal arithmetic
    /// Return the ordinal of the interval within which the supplied datetime lies.
    ///
    /// Any time zone attached to the datetime is ignored; ordinals are a property of the naive
    /// timeline. Ordinals are only meaningful to the period that produced them.
    pub fn ordinal(&self, date_time: &DateTime) -> Result<i64, error::ComponentRange> {
        self.variant.ordinal(date_time)
    }

    /// Return the datetime at which the interval with the supplied ordinal starts.
    ///
    /// The returned datetime carries the period's own time zone.
    pub fn datetime(&self, ordinal: i64) -> Result<DateTime, error::ComponentRange> {
        Ok(self
            .variant
            .date_time(ordinal)?
            .replace_tz(self.properties.tzinfo().cloned()))
    }

    /// Return whether the datetime lies exactly at the start of an interval.
    ///
    /// The time zones of both the period and the datetime are ignored; alignment is a property
    /// of the naive timeline.
    ///
    /// ```rust
    /// # use period::{DateTime, Period};
    /// let day = Period::of_days(1)?;
    /// assert!(day.is_aligned(&DateTime::parse("2020-05-04")?)?);
    /// assert!(!day.is_aligned(&DateTime::parse("2020-05-04T12:00:00")?)?);
    /// # Ok::<_, period::Error>(())
    /// ```
    pub fn is_aligned(&self, date_time: &DateTime) -> Result<bool, error::ComponentRange> {
        let start = self.datetime(self.ordinal(date_time)?)?;
        Ok(start.naive_eq(date_time))
    }
    // endregion ordinal arithmetic

    // region: builders
    /// Return an equivalent period with no date/time offset and no ordinal shift. Its
    /// intervals align to calendar boundaries.
    pub fn base_period(&self) -> Self {
        if !self.properties.has_offsets() && self.properties.ordinal_shift() == 0 {
            return self.clone();
        }
        Self::from_properties(Properties::from_parts(
            self.properties.step(),
            self.properties.multiplier(),
            0,
            0,
            self.properties.tzinfo().cloned(),
            0,
        ))
    }

    /// Return a period with the multiplier scaled by the given factor. Offsets are preserved
    /// and re-normalized; the ordinal shift is reset to zero.
    ///
    /// ```rust
    /// # use period::Period;
    /// assert_eq!(Period::of_years(1)?.with_multiplier(10)?, Period::of_years(10)?);
    /// # Ok::<_, period::Error>(())
    /// ```
    pub fn with_multiplier(&self, multiplier: i64) -> Result<Self, error::Validation> {
        self.properties
            .with_multiplier(multiplier)
            .map(Self::from_properties)
    }

    /// Return a period with the given number of years added to the month offset.
    pub fn with_year_offset(&self, years: i64) -> Result<Self, error::Validation> {
        self.with_month_offset(
            years
                .checked_mul(MONTHS_PER_YEAR)
                .ok_or(error::Validation::new("month offset"))?,
        )
    }

    /// Return a period with the given number of months added to the month offset. Fails unless
    /// the period's step is months.
    pub fn with_month_offset(&self, months: i64) -> Result<Self, error::Validation> {
        self.properties
            .with_month_offset(months)
            .map(Self::from_properties)
    }

    /// Return a period with the given number of days added to the microsecond offset.
    pub fn with_day_offset(&self, days: i64) -> Result<Self, error::Validation> {
        self.with_microsecond_offset(
            days.checked_mul(MICROSECONDS_PER_DAY)
                .ok_or(error::Validation::new("microsecond offset"))?,
        )
    }

    /// Return a period with the given number of hours added to the microsecond offset.
    pub fn with_hour_offset(&self, hours: i64) -> Result<Self, error::Validation> {
        self.with_microsecond_offset(
            hours
                .checked_mul(SECONDS_PER_HOUR * MICROSECONDS_PER_SECOND)
                .ok_or(error::Validation::new("microsecond offset"))?,
        )
    }

    /// Return a period with the given number of minutes added to the microsecond offset.
    pub fn with_minute_offset(&self, minutes: i64) -> Result<Self, error::Validation> {
        self.with_microsecond_offset(
            minutes
                .checked_mul(SECONDS_PER_MINUTE * MICROSECONDS_PER_SECOND)
                .ok_or(error::Validation::new("microsecond offset"))?,
        )
    }

    /// Return a period with the given number of seconds added to the microsecond offset.
    pub fn with_second_offset(&self, seconds: i64) -> Result<Self, error::Validation> {
        self.with_microsecond_offset(
            seconds
                .checked_mul(MICROSECONDS_PER_SECOND)
                .ok_or(error::Validation::new("microsecond offset"))?,
        )
    }

    /// Return a period with the given number of microseconds added to the microsecond offset.
    /// The ordinal shift is reset to zero.
    pub fn with_microsecond_offset(&self, microseconds: i64) -> Result<Self, error::Validation> {
        self.properties
            .with_microsecond_offset(microseconds)
            .map(Self::from_properties)
    }

    /// Return a period with the given time zone.
    ///
    /// This is the one builder that preserves the ordinal shift: a period pinned to an origin
    /// keeps `ordinal(origin) == 0` when reinterpreted in another zone.
    pub fn with_tzinfo(&self, tzinfo: Option<Tz>) -> Self {
        if self.properties.tzinfo() == tzinfo.as_ref() {
            return self.clone();
        }
        Self::from_properties(self.properties.with_tzinfo(tzinfo))
    }

    /// Return a period with both offsets removed. The ordinal shift is preserved.
    pub fn without_offset(&self) -> Self {
        if !self.properties.has_offsets() {
            return self.clone();
        }
        Self::from_properties(Properties::from_parts(
            self.properties.step(),
            self.properties.multiplier(),
            0,
            0,
            self.properties.tzinfo().cloned(),
            self.properties.ordinal_shift(),
        ))
    }

    /// Return a period with no ordinal shift. It splits the timeline exactly as this one does,
    /// but the ordinal values differ.
    pub fn without_ordinal_shift(&self) -> Self {
        if self.properties.ordinal_shift() == 0 {
            return self.clone();
        }
        Self::from_properties(self.properties.with_ordinal_shift(0))
    }

    /// Return a period anchored at the supplied origin.
    ///
    /// The existing offsets and ordinal shift are discarded and recalculated so that the
    /// origin starts an interval and has ordinal zero:
    ///
    /// ```rust
    /// # use period::{DateTime, Period};
    /// let origin = DateTime::parse("1980-10-01T09:00:00")?;
    /// let water_year = Period::of_years(1)?.with_origin(&origin)?;
    /// assert_eq!(water_year.ordinal(&origin)?, 0);
    /// assert!(water_year.is_aligned(&origin)?);
    /// # Ok::<_, period::Error>(())
    /// ```
    ///
    /// The new period takes its time zone from the origin datetime.
    pub fn with_origin(&self, origin: &DateTime) -> Result<Self, error::ComponentRange> {
        let base = self.base_period();
        let origin_ordinal = base.ordinal(origin)?;
        let floor = base.datetime(origin_ordinal)?;

        let (month_offset, microsecond_offset) = match self.properties.step() {
            Step::Seconds | Step::Microseconds => (
                0,
                origin.gregorian_microseconds() - floor.gregorian_microseconds(),
            ),
            Step::Months => {
                let months = (i64::from(origin.year()) - i64::from(floor.year()))
                    * MONTHS_PER_YEAR
                    + (i64::from(origin.month()) - i64::from(floor.month()));
                let in_month = origin.clone().shift_months(-months)?;
                (
                    months,
                    in_month.gregorian_microseconds() - floor.gregorian_microseconds(),
                )
            }
        };

        let properties = Properties::from_parts(
            self.properties.step(),
            self.properties.multiplier(),
            month_offset,
            microsecond_offset,
            origin.tz().cloned(),
            0,
        )
        .normalized()
        .with_ordinal_shift(-origin_ordinal);
        Ok(Self::from_properties(properties))
    }
    // endregion builders

    // region: algebra
    /// Return the number of intervals of this period that make up one interval of `outer`, or
    /// a sentinel describing the relationship.
    ///
    /// The result is `-1` when this period is not a subperiod of `outer`, and `0` when it is a
    /// subperiod without a fixed per-interval count, as for days inside calendar months.
    ///
    /// ```rust
    /// # use period::Period;
    /// assert_eq!(Period::of_minutes(15)?.count(&Period::of_hours(1)?), 4);
    /// assert_eq!(Period::of_days(1)?.count(&Period::of_months(1)?), 0);
    /// assert_eq!(Period::of_hours(7)?.count(&Period::of_days(1)?), -1);
    /// # Ok::<_, period::Error>(())
    /// ```
    pub fn count(&self, outer: &Self) -> i64 {
        if self.properties.tzinfo() != outer.properties.tzinfo() {
            return -1;
        }

        let inner = &self.properties;
        let outer = &outer.properties;
        match (inner.step(), outer.step()) {
            (Step::Months, Step::Months) => {
                if outer.multiplier() % inner.multiplier() != 0 {
                    return -1;
                }
                if outer.microsecond_offset() != inner.microsecond_offset() {
                    return -1;
                }
                if (outer.month_offset() - inner.month_offset()).rem_euclid(inner.multiplier())
                    != 0
                {
                    return -1;
                }
                outer.multiplier() / inner.multiplier()
            }
            // A month is not a fixed-length duration, so it cannot subdivide one.
            (Step::Months, _) => -1,
            (_, Step::Months) => {
                let Some(interval) = inner.multiplier_microseconds() else {
                    return -1;
                };
                // Month starts are a day apart in every residue class, so the inner grid must
                // repeat within the day and share the outer's sub-day phase.
                if MICROSECONDS_PER_DAY % interval != 0 {
                    return -1;
                }
                if (outer.microsecond_offset() - inner.microsecond_offset()).rem_euclid(interval)
                    != 0
                {
                    return -1;
                }
                0
            }
            _ => {
                let (Some(inner_interval), Some(outer_interval)) = (
                    inner.multiplier_microseconds(),
                    outer.multiplier_microseconds(),
                ) else {
                    return -1;
                };
                if outer_interval % inner_interval != 0 {
                    return -1;
                }
                if (outer.microsecond_offset() - inner.microsecond_offset())
                    .rem_euclid(inner_interval)
                    != 0
                {
                    return -1;
                }
                outer_interval / inner_interval
            }
        }
    }

    /// Return whether every interval boundary of `outer` coincides with a boundary of this
    /// period, so that each `outer` interval is an exact union of consecutive intervals of
    /// this period.
    ///
    /// This is the predicate the time-series layer uses to check that a dataset's resolution
    /// refines its periodicity.
    pub fn is_subperiod_of(&self, outer: &Self) -> bool {
        self.count(outer) >= 0
    }

    /// Return whether every supplied timestamp lies exactly on an interval boundary of this
    /// period.
    pub fn check_resolution<'a, I>(&self, timestamps: I) -> Result<bool, error::ComponentRange>
    where
        I: IntoIterator<Item = &'a DateTime>,
    {
        for timestamp in timestamps {
            if !self.is_aligned(timestamp)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Return whether no two supplied timestamps fall within the same interval of this period.
    pub fn check_periodicity<'a, I>(&self, timestamps: I) -> Result<bool, error::ComponentRange>
    where
        I: IntoIterator<Item = &'a DateTime>,
    {
        let mut seen = HashSet::new();
        for timestamp in timestamps {
            if !seen.insert(self.ordinal(timestamp)?) {
                return Ok(false);
            }
        }
        Ok(true)
    }
    // endregion algebra

    // region: formatters
    /// Return a formatter rendering naive datetimes at the minimum precision that
    /// distinguishes adjacent interval starts of this period.
    ///
    /// The separator between the date and time sections must be one of `' '`, `'T'`, or `'t'`.
    pub fn naive_formatter(&self, separator: char) -> Result<DateTimeFormatter, error::Validation> {
        DateTimeFormatter::naive(&self.properties, separator)
    }

    /// Return a formatter like [`naive_formatter`](Self::naive_formatter), but appending the
    /// timestamp's timezone suffix and never rendering coarser than hours.
    pub fn aware_formatter(&self, separator: char) -> Result<DateTimeFormatter, error::Validation> {
        DateTimeFormatter::aware(&self.properties, separator)
    }

    /// Return the formatter matching this period: aware when the period carries a time zone,
    /// naive otherwise.
    ///
    /// ```rust
    /// # use period::{DateTime, Period};
    /// let formatter = Period::of_years(1)?.formatter('T')?;
    /// assert_eq!(formatter.format(&DateTime::parse("1984-01-01")?), "1984");
    /// # Ok::<_, period::Error>(())
    /// ```
    pub fn formatter(&self, separator: char) -> Result<DateTimeFormatter, error::Validation> {
        if self.properties.tzinfo().is_some() {
            self.aware_formatter(separator)
        } else {
            self.naive_formatter(separator)
        }
    }
    // endregion formatters
}

impl fmt::Display for Period {
    /// The ISO 8601 duration of the period, extended with a `+offset` section when either
    /// offset is non-zero, e.g. `P1Y+9M9H`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.properties.fmt(f)
    }
}

impl fmt::Debug for Period {
    /// The round-trippable form: the display form followed by the bracketed time zone and any
    /// ordinal shift, e.g. `P1Y+9M9H[Z]-42`. [`Period::of_repr`] parses it back.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.properties.fmt_repr(f)
    }
}

impl PartialEq for Period {
    fn eq(&self, other: &Self) -> bool {
        self.properties == other.properties
    }
}

impl Eq for Period {}

impl Hash for Period {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.properties.hash(state);
    }
}

impl PartialOrd for Period {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Period {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.properties.cmp(&other.properties)
    }
}
