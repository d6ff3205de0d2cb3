//! Parsers for the building blocks of period and datetime strings, and the field records they
//! produce.

use crate::error;
use crate::parsing::combinator::{
    ascii_char, ascii_char_ignore_case, exactly_four_digits, fraction, number, one_or_two_digits,
    sign, Sign,
};
use crate::parsing::ParsedItem;
use crate::properties::{Properties, Step};
use crate::util::{
    MICROSECONDS_PER_SECOND, MONTHS_PER_YEAR, SECONDS_PER_DAY, SECONDS_PER_HOUR,
    SECONDS_PER_MINUTE,
};
use crate::{Date, DateTime, Time, Tz, UtcOffset};

/// The fields readable from an ISO 8601 duration string.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct DurationFields {
    years: i64,
    months: i64,
    days: i64,
    hours: i64,
    minutes: i64,
    seconds: i64,
    microseconds: i64,
}

impl DurationFields {
    /// Reduce the fields to total months, seconds, and sub-second microseconds.
    pub(crate) fn months_seconds(&self) -> Result<MonthsSeconds, error::Validation> {
        let overflow = error::Validation::new("multiplier");
        let months = self
            .years
            .checked_mul(MONTHS_PER_YEAR)
            .and_then(|months| months.checked_add(self.months))
            .ok_or(overflow)?;
        let seconds = self
            .days
            .checked_mul(SECONDS_PER_DAY)
            .and_then(|seconds| seconds.checked_add(self.hours.checked_mul(SECONDS_PER_HOUR)?))
            .and_then(|seconds| seconds.checked_add(self.minutes.checked_mul(SECONDS_PER_MINUTE)?))
            .and_then(|seconds| seconds.checked_add(self.seconds))
            .ok_or(overflow)?;
        MonthsSeconds::new(months, seconds, self.microseconds)
    }
}

/// A duration or duration offset reduced to months, whole seconds, and sub-second
/// microseconds. At least one part is non-zero.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MonthsSeconds {
    months: i64,
    seconds: i64,
    microseconds: i64,
}

impl MonthsSeconds {
    /// Validating constructor: a duration reducing to zero is rejected, as a zero-length
    /// interval is almost always a caller bug.
    fn new(months: i64, seconds: i64, microseconds: i64) -> Result<Self, error::Validation> {
        if months == 0 && seconds == 0 && microseconds == 0 {
            return Err(error::Validation::new("zero-length duration"));
        }

        Ok(Self {
            months,
            seconds,
            microseconds,
        })
    }

    /// Get the total number of months.
    pub(crate) const fn months(&self) -> i64 {
        self.months
    }

    /// The seconds and microseconds parts combined into total microseconds.
    pub(crate) fn total_microseconds(&self) -> Result<i64, error::Validation> {
        self.seconds
            .checked_mul(MICROSECONDS_PER_SECOND)
            .and_then(|micros| micros.checked_add(self.microseconds))
            .ok_or(error::Validation::new("microsecond offset"))
    }

    /// Reduce to a single step and multiplier. A duration mixing months with seconds has no
    /// step and is rejected.
    fn step_and_multiplier(&self) -> Result<(Step, i64), error::Validation> {
        if self.months > 0 && self.seconds == 0 && self.microseconds == 0 {
            return Ok((Step::Months, self.months));
        }
        if self.months == 0 && self.seconds > 0 && self.microseconds == 0 {
            return Ok((Step::Seconds, self.seconds));
        }
        if self.months == 0 && self.microseconds > 0 {
            let multiplier = self
                .total_microseconds()
                .map_err(|_| error::Validation::new("multiplier"))?;
            return Ok((Step::Microseconds, multiplier));
        }
        Err(error::Validation::new("mixed month and second duration"))
    }

    /// Build the base `Properties` record for a duration: no offsets, no zone, no shift.
    pub(crate) fn base_properties(&self) -> Result<Properties, error::Validation> {
        let (step, multiplier) = self.step_and_multiplier()?;
        Properties::of_step_and_multiplier(step, multiplier)
    }
}

/// Parse the fields of an ISO 8601 duration, without the leading `P`.
///
/// Every field is optional, so this always succeeds; the caller decides whether an empty or
/// partial match is acceptable. The `T` time designator is itself optional on input.
pub(crate) fn duration_fields(mut input: &[u8]) -> ParsedItem<'_, DurationFields> {
    let mut fields = DurationFields::default();
    if let Some(ParsedItem(remaining, value)) = unit_value::<b'Y'>(input) {
        fields.years = value;
        input = remaining;
    }
    if let Some(ParsedItem(remaining, value)) = unit_value::<b'M'>(input) {
        fields.months = value;
        input = remaining;
    }
    if let Some(ParsedItem(remaining, value)) = unit_value::<b'D'>(input) {
        fields.days = value;
        input = remaining;
    }
    if let Some(ParsedItem(remaining, ())) = ascii_char_ignore_case::<b'T'>(input) {
        input = remaining;
    }
    if let Some(ParsedItem(remaining, value)) = unit_value::<b'H'>(input) {
        fields.hours = value;
        input = remaining;
    }
    if let Some(ParsedItem(remaining, value)) = unit_value::<b'M'>(input) {
        fields.minutes = value;
        input = remaining;
    }
    if let Some(ParsedItem(remaining, (seconds, microseconds))) = seconds_value(input) {
        fields.seconds = seconds;
        fields.microseconds = microseconds;
        input = remaining;
    }
    ParsedItem(input, fields)
}

/// Consume a number followed by the given unit letter, case-insensitive.
fn unit_value<const UNIT: u8>(input: &[u8]) -> Option<ParsedItem<'_, i64>> {
    let ParsedItem(remaining, value) = number(input)?;
    let ParsedItem(remaining, ()) = ascii_char_ignore_case::<UNIT>(remaining)?;
    Some(ParsedItem(remaining, value))
}

/// Consume a seconds element with an optional fraction: `nS` or `n.fS`.
fn seconds_value(input: &[u8]) -> Option<ParsedItem<'_, (i64, i64)>> {
    let ParsedItem(remaining, seconds) = number(input)?;
    let (remaining, microseconds) = match ascii_char::<b'.'>(remaining) {
        Some(ParsedItem(remaining, ())) => {
            let ParsedItem(remaining, microseconds) = fraction(remaining)?;
            (remaining, microseconds)
        }
        None => (remaining, 0),
    };
    let ParsedItem(remaining, ()) = ascii_char_ignore_case::<b'S'>(remaining)?;
    Some(ParsedItem(remaining, (seconds, microseconds)))
}

/// The time-of-day section of a datetime string.
#[derive(Debug, Clone, Default)]
struct TimePart {
    hour: u8,
    minute: u8,
    second: u8,
    microsecond: i64,
    tz: Option<Tz>,
}

/// Parse an ISO 8601 datetime: `YYYY[-MM[-DD[<sep>HH[:MM[:SS[.f{1,6}][<tz>]]]]]]`.
///
/// Omitted components default to their first valid value. Structurally matched strings whose
/// component values are out of range do not match.
pub(crate) fn date_time(input: &[u8]) -> Option<ParsedItem<'_, DateTime>> {
    let ParsedItem(input, year) = exactly_four_digits(input)?;
    let mut month = 1;
    let mut day = 1;
    let mut time = TimePart::default();

    let input = match dash_number(input) {
        Some(ParsedItem(input, value)) => {
            month = value;
            match dash_number(input) {
                Some(ParsedItem(input, value)) => {
                    day = value;
                    match time_part(input) {
                        Some(ParsedItem(input, value)) => {
                            time = value;
                            input
                        }
                        None => input,
                    }
                }
                None => input,
            }
        }
        None => input,
    };

    let date = Date::from_calendar_date(year, month, day).ok()?;
    let clock =
        Time::from_hms_micro(time.hour, time.minute, time.second, time.microsecond as u32).ok()?;
    Some(ParsedItem(input, DateTime::new(date, clock).replace_tz(time.tz)))
}

/// Consume a `-` followed by one or two digits.
fn dash_number(input: &[u8]) -> Option<ParsedItem<'_, u8>> {
    let ParsedItem(remaining, ()) = ascii_char::<b'-'>(input)?;
    one_or_two_digits(remaining)
}

/// Consume a `:` followed by one or two digits.
fn colon_number(input: &[u8]) -> Option<ParsedItem<'_, u8>> {
    let ParsedItem(remaining, ()) = ascii_char::<b':'>(input)?;
    one_or_two_digits(remaining)
}

/// Consume the date/time separator: `T`, `t`, or a run of whitespace.
fn separator(input: &[u8]) -> Option<&[u8]> {
    match input {
        [b'T' | b't', remaining @ ..] => Some(remaining),
        [b' ' | b'\t', remaining @ ..] => {
            let mut remaining = remaining;
            while let [b' ' | b'\t', rest @ ..] = remaining {
                remaining = rest;
            }
            Some(remaining)
        }
        _ => None,
    }
}

/// Parse the time-of-day section of a datetime, including its optional zone suffix.
fn time_part(input: &[u8]) -> Option<ParsedItem<'_, TimePart>> {
    let input = separator(input)?;
    let ParsedItem(input, hour) = one_or_two_digits(input)?;
    let mut part = TimePart {
        hour,
        ..TimePart::default()
    };

    let input = match colon_number(input) {
        Some(ParsedItem(input, minute)) => {
            part.minute = minute;
            match colon_number(input) {
                Some(ParsedItem(input, second)) => {
                    part.second = second;
                    let input = match ascii_char::<b'.'>(input)
                        .and_then(|ParsedItem(input, ())| fraction(input))
                    {
                        Some(ParsedItem(input, microsecond)) => {
                            part.microsecond = microsecond;
                            input
                        }
                        None => input,
                    };
                    match tz(input) {
                        Some(ParsedItem(input, value)) => {
                            part.tz = Some(value);
                            input
                        }
                        None => input,
                    }
                }
                None => input,
            }
        }
        None => input,
    };
    Some(ParsedItem(input, part))
}

/// Parse a timezone suffix: `Z`, `±H`, `±HH`, `±H:M`, or `±HH:MM`. Offsets of a day or more
/// do not match.
pub(crate) fn tz(input: &[u8]) -> Option<ParsedItem<'_, Tz>> {
    if let Some(ParsedItem(remaining, ())) = ascii_char_ignore_case::<b'Z'>(input) {
        return Some(ParsedItem(remaining, Tz::UTC));
    }

    let ParsedItem(remaining, sign_value) = sign(input)?;
    let ParsedItem(mut remaining, hours) = one_or_two_digits(remaining)?;
    let mut minutes = 0;
    if let Some(ParsedItem(rest, value)) = colon_number(remaining) {
        minutes = value;
        remaining = rest;
    }

    let seconds =
        i32::from(hours) * SECONDS_PER_HOUR as i32 + i32::from(minutes) * SECONDS_PER_MINUTE as i32;
    let seconds = match sign_value {
        Sign::Negative => -seconds,
        Sign::Positive => seconds,
    };
    let offset = UtcOffset::from_whole_seconds(seconds).ok()?;
    Some(ParsedItem(remaining, Tz::Fixed(offset)))
}

/// Parse an optionally-negated integer ordinal shift.
pub(crate) fn ordinal_shift(input: &[u8]) -> Option<ParsedItem<'_, i64>> {
    match ascii_char::<b'-'>(input) {
        Some(ParsedItem(remaining, ())) => {
            let ParsedItem(remaining, value) = number(remaining)?;
            Some(ParsedItem(remaining, -value))
        }
        None => number(input),
    }
}
