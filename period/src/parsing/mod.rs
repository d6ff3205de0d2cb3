//! Parsing of period and datetime strings.
//!
//! Four grammars produce a [`Period`]: the plain ISO 8601 duration, the extended offset
//! duration, the date-and-duration anchor form, and the round-trippable debug form. Each
//! grammar either matches the whole input or declines, letting the next one try.

pub(crate) mod combinator;
mod component;

use self::combinator::{ascii_char, ascii_char_ignore_case};
use self::component::DurationFields;
use crate::error;
use crate::properties::Properties;
use crate::{DateTime, Error, Period, Tz};

/// A value, plus the remaining input after parsing it.
#[derive(Debug)]
pub(crate) struct ParsedItem<'a, T>(pub(crate) &'a [u8], pub(crate) T);

/// Parse a period from any accepted grammar, trying each in turn. The first grammar to match
/// the full input decides the outcome.
pub(crate) fn parse_period(input: &str) -> Result<Period, Error> {
    if let Some(result) = iso_duration(input) {
        return result;
    }
    if let Some(result) = offset_duration(input) {
        return result;
    }
    if let Some(result) = date_and_duration(input) {
        return result;
    }
    if let Some(result) = repr(input) {
        return result;
    }
    Err(error::Parse::new(input).into())
}

/// Parse a period from an ISO 8601 duration string only.
pub(crate) fn parse_iso_duration(input: &str) -> Result<Period, Error> {
    iso_duration(input).unwrap_or_else(|| Err(error::Parse::new(input).into()))
}

/// Parse a period from a plain or extended offset duration string.
pub(crate) fn parse_duration(input: &str) -> Result<Period, Error> {
    if let Some(result) = offset_duration(input) {
        return result;
    }
    if let Some(result) = iso_duration(input) {
        return result;
    }
    Err(error::Parse::new(input).into())
}

/// Parse a period from a `<datetime>/<duration>` string only.
pub(crate) fn parse_date_and_duration(input: &str) -> Result<Period, Error> {
    date_and_duration(input).unwrap_or_else(|| Err(error::Parse::new(input).into()))
}

/// Parse a period from the debug form only.
pub(crate) fn parse_repr(input: &str) -> Result<Period, Error> {
    repr(input).unwrap_or_else(|| Err(error::Parse::new(input).into()))
}

/// Parse an ISO 8601 datetime string.
pub(crate) fn parse_date_time(input: &str) -> Result<DateTime, error::Parse> {
    match component::date_time(input.as_bytes()) {
        Some(ParsedItem(remaining, date_time)) if remaining.is_empty() => Ok(date_time),
        _ => Err(error::Parse::new(input)),
    }
}

/// Grammar 1: `P<duration>`.
fn iso_duration(input: &str) -> Option<Result<Period, Error>> {
    let ParsedItem(remaining, ()) = ascii_char_ignore_case::<b'P'>(input.as_bytes())?;
    let ParsedItem(remaining, fields) = component::duration_fields(remaining);
    if !remaining.is_empty() {
        return None;
    }
    Some(base_properties(&fields).map(Period::from_properties))
}

/// Grammar 2: `P<duration>+<duration>`, the second duration giving the offsets.
fn offset_duration(input: &str) -> Option<Result<Period, Error>> {
    let ParsedItem(remaining, ()) = ascii_char_ignore_case::<b'P'>(input.as_bytes())?;
    let ParsedItem(remaining, fields) = component::duration_fields(remaining);
    let ParsedItem(remaining, ()) = ascii_char::<b'+'>(remaining)?;
    let ParsedItem(remaining, offset_fields) = component::duration_fields(remaining);
    if !remaining.is_empty() {
        return None;
    }
    Some(offset_properties(&fields, &offset_fields).map(Period::from_properties))
}

/// Grammar 3: `<datetime>/P<duration>`, anchoring the duration at the datetime.
fn date_and_duration(input: &str) -> Option<Result<Period, Error>> {
    let ParsedItem(remaining, origin) = component::date_time(input.as_bytes())?;
    let ParsedItem(remaining, ()) = ascii_char::<b'/'>(remaining)?;
    let ParsedItem(remaining, ()) = ascii_char_ignore_case::<b'P'>(remaining)?;
    let ParsedItem(remaining, fields) = component::duration_fields(remaining);
    if !remaining.is_empty() {
        return None;
    }
    Some(anchored_period(&origin, &fields))
}

/// Grammar 4: `P<duration>[+<duration>]"["<tz?>"]"<shift?>`, the round-trippable debug form.
fn repr(input: &str) -> Option<Result<Period, Error>> {
    let ParsedItem(remaining, ()) = ascii_char_ignore_case::<b'P'>(input.as_bytes())?;
    let ParsedItem(remaining, fields) = component::duration_fields(remaining);
    let (remaining, offset_fields) = match ascii_char::<b'+'>(remaining) {
        Some(ParsedItem(remaining, ())) => {
            let ParsedItem(remaining, offset_fields) = component::duration_fields(remaining);
            (remaining, Some(offset_fields))
        }
        None => (remaining, None),
    };
    let ParsedItem(remaining, ()) = ascii_char::<b'['>(remaining)?;
    let (remaining, tz) = match component::tz(remaining) {
        Some(ParsedItem(remaining, tz)) => (remaining, Some(tz)),
        None => (remaining, None),
    };
    let ParsedItem(remaining, ()) = ascii_char::<b']'>(remaining)?;
    let (remaining, shift) = match component::ordinal_shift(remaining) {
        Some(ParsedItem(remaining, shift)) => (remaining, shift),
        None => (remaining, 0),
    };
    if !remaining.is_empty() {
        return None;
    }
    Some(repr_period(&fields, offset_fields.as_ref(), tz, shift))
}

/// Build the period described by a parsed debug form.
fn repr_period(
    fields: &DurationFields,
    offset_fields: Option<&DurationFields>,
    tz: Option<Tz>,
    shift: i64,
) -> Result<Period, Error> {
    let mut properties = base_properties(fields)?;
    if let Some(offset_fields) = offset_fields {
        properties = with_offset_fields(properties, offset_fields)?;
    }
    if tz.is_some() {
        properties = properties.with_tzinfo(tz);
    }
    if shift != 0 {
        properties = properties.with_ordinal_shift(shift);
    }
    Ok(Period::from_properties(properties))
}

/// Build the base record for a parsed duration.
fn base_properties(fields: &DurationFields) -> Result<Properties, Error> {
    Ok(fields.months_seconds()?.base_properties()?)
}

/// Apply a parsed offset duration to a base record.
fn with_offset_fields(
    properties: Properties,
    offset_fields: &DurationFields,
) -> Result<Properties, Error> {
    let offsets = offset_fields.months_seconds()?;
    Ok(properties.with_offsets(offsets.months(), offsets.total_microseconds()?)?)
}

/// Build the offset-grammar period: a base duration with both offsets applied.
fn offset_properties(
    fields: &DurationFields,
    offset_fields: &DurationFields,
) -> Result<Properties, Error> {
    with_offset_fields(base_properties(fields)?, offset_fields)
}

/// Build the date-and-duration period: the duration anchored so the origin starts an
/// interval, with the resulting ordinal shift discarded.
fn anchored_period(origin: &DateTime, fields: &DurationFields) -> Result<Period, Error> {
    let period = Period::from_properties(base_properties(fields)?);
    Ok(period.with_origin(origin)?.without_ordinal_shift())
}
