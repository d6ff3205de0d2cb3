//! Granularity-aware timestamp formatting.
//!
//! A period knows how much precision a rendered interval start needs: yearly data reads best
//! as `1984`, fifteen-minute data as `2024-06-15 13:45`. The formatter walks from microsecond
//! precision down to year precision and stops at the first granularity that the period's
//! magnitude and offsets still require, so adjacent interval starts always render distinctly.

use core::fmt;

use crate::error;
use crate::properties::{Properties, Step};
use crate::util::{MONTHS_PER_YEAR, SECONDS_PER_MINUTE};
use crate::DateTime;

/// The ladder of rendering precisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Precision {
    Microsecond,
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    Month,
    Year,
}

/// Renders datetimes at the minimum precision consistent with a period's granularity.
///
/// Obtained from [`Period::formatter`](crate::Period::formatter) and its naive/aware
/// variants. An aware formatter appends the timestamp's own timezone suffix and never renders
/// coarser than hours, as the suffix would otherwise be detached from any time component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTimeFormatter {
    precision: Precision,
    separator: char,
    aware: bool,
}

impl DateTimeFormatter {
    /// Build the naive formatter for a record. The separator must be `' '`, `'T'`, or `'t'`.
    pub(crate) fn naive(
        properties: &Properties,
        separator: char,
    ) -> Result<Self, error::Validation> {
        Ok(Self {
            precision: naive_precision(properties),
            separator: validate_separator(separator)?,
            aware: false,
        })
    }

    /// Build the aware formatter for a record. The separator must be `' '`, `'T'`, or `'t'`.
    pub(crate) fn aware(
        properties: &Properties,
        separator: char,
    ) -> Result<Self, error::Validation> {
        Ok(Self {
            precision: aware_precision(properties),
            separator: validate_separator(separator)?,
            aware: true,
        })
    }

    /// Render the datetime at this formatter's precision.
    pub fn format(&self, date_time: &DateTime) -> String {
        Formatted {
            formatter: self,
            date_time,
        }
        .to_string()
    }
}

/// Check that the date/time separator is one of the accepted characters.
fn validate_separator(separator: char) -> Result<char, error::Validation> {
    match separator {
        ' ' | 'T' | 't' => Ok(separator),
        _ => Err(error::Validation::new("separator")),
    }
}

/// Select the minimum precision that distinguishes adjacent naive interval starts.
fn naive_precision(properties: &Properties) -> Precision {
    let offset = properties.microsecond_offset();
    if offset % 1_000 != 0 {
        return Precision::Microsecond;
    }
    let offset_millis = offset / 1_000;

    if properties.step() == Step::Microseconds {
        let multiplier = properties.multiplier();
        if multiplier % 1_000 != 0 {
            return Precision::Microsecond;
        }
        if multiplier / 1_000 % 1_000 != 0 || offset_millis % 1_000 != 0 {
            return Precision::Millisecond;
        }
        return Precision::Second;
    }
    if offset_millis % 1_000 != 0 {
        return Precision::Millisecond;
    }

    let offset_seconds = offset_millis / 1_000;
    if offset_seconds % SECONDS_PER_MINUTE != 0 {
        return Precision::Second;
    }
    let offset_minutes = offset_seconds / 60;
    let offset_hours = offset_minutes / 60;

    if properties.step() == Step::Seconds {
        let multiplier = properties.multiplier();
        if multiplier % 60 != 0 {
            return Precision::Second;
        }
        if multiplier / 60 % 60 != 0 || offset_minutes % 60 != 0 {
            return Precision::Minute;
        }
        if multiplier / 3_600 % 24 != 0 || offset_hours % 24 != 0 {
            return Precision::Hour;
        }
        return Precision::Day;
    }
    if offset_minutes % 60 != 0 {
        return Precision::Minute;
    }
    if offset_hours % 24 != 0 {
        return Precision::Hour;
    }
    if offset_hours / 24 > 0 {
        return Precision::Day;
    }

    if properties.multiplier() % MONTHS_PER_YEAR != 0
        || properties.month_offset() % MONTHS_PER_YEAR != 0
    {
        return Precision::Month;
    }
    Precision::Year
}

/// Select the minimum precision for aware rendering, which floors at hours so the timezone
/// suffix always follows a time component.
fn aware_precision(properties: &Properties) -> Precision {
    let offset = properties.microsecond_offset();
    if offset % 1_000 != 0 {
        return Precision::Microsecond;
    }
    let offset_millis = offset / 1_000;

    if properties.step() == Step::Microseconds {
        let multiplier = properties.multiplier();
        if multiplier % 1_000 != 0 {
            return Precision::Microsecond;
        }
        if multiplier / 1_000 % 1_000 != 0 || offset_millis % 1_000 != 0 {
            return Precision::Millisecond;
        }
        return Precision::Second;
    }
    if offset_millis % 1_000 != 0 {
        return Precision::Millisecond;
    }

    let offset_seconds = offset_millis / 1_000;
    if offset_seconds % SECONDS_PER_MINUTE != 0 {
        return Precision::Second;
    }
    let offset_minutes = offset_seconds / 60;
    let offset_hours = offset_minutes / 60;

    if properties.step() == Step::Seconds {
        let multiplier = properties.multiplier();
        if multiplier % 60 != 0 {
            return Precision::Second;
        }
        if multiplier / 60 % 60 != 0 || offset_minutes % 60 != 0 {
            return Precision::Minute;
        }
        return Precision::Hour;
    }
    if offset_minutes % 60 != 0 {
        return Precision::Minute;
    }
    Precision::Hour
}

/// A datetime paired with the formatter rendering it.
struct Formatted<'a> {
    formatter: &'a DateTimeFormatter,
    date_time: &'a DateTime,
}

impl fmt::Display for Formatted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let date_time = self.date_time;
        let separator = self.formatter.separator;

        match self.formatter.precision {
            Precision::Year => write!(f, "{:04}", date_time.year())?,
            Precision::Month => write!(f, "{:04}-{:02}", date_time.year(), date_time.month())?,
            Precision::Day => write!(
                f,
                "{:04}-{:02}-{:02}",
                date_time.year(),
                date_time.month(),
                date_time.day()
            )?,
            Precision::Hour => write!(
                f,
                "{:04}-{:02}-{:02}{separator}{:02}",
                date_time.year(),
                date_time.month(),
                date_time.day(),
                date_time.hour()
            )?,
            Precision::Minute => write!(
                f,
                "{:04}-{:02}-{:02}{separator}{:02}:{:02}",
                date_time.year(),
                date_time.month(),
                date_time.day(),
                date_time.hour(),
                date_time.minute()
            )?,
            Precision::Second => write!(
                f,
                "{:04}-{:02}-{:02}{separator}{:02}:{:02}:{:02}",
                date_time.year(),
                date_time.month(),
                date_time.day(),
                date_time.hour(),
                date_time.minute(),
                date_time.second()
            )?,
            Precision::Millisecond => write!(
                f,
                "{:04}-{:02}-{:02}{separator}{:02}:{:02}:{:02}.{:03}",
                date_time.year(),
                date_time.month(),
                date_time.day(),
                date_time.hour(),
                date_time.minute(),
                date_time.second(),
                date_time.microsecond() / 1_000
            )?,
            Precision::Microsecond => write!(
                f,
                "{:04}-{:02}-{:02}{separator}{:02}:{:02}:{:02}.{:06}",
                date_time.year(),
                date_time.month(),
                date_time.day(),
                date_time.hour(),
                date_time.minute(),
                date_time.second(),
                date_time.microsecond()
            )?,
        }

        if self.formatter.aware {
            if let Some(tz) = date_time.tz() {
                tz.fmt(f)?;
            }
        }
        Ok(())
    }
}
