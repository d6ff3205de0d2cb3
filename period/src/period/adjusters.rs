//! Composite datetime adjustment for offset periods.

use crate::date_time::DateTime;
use crate::error;
use crate::internal_macros::bug;
use crate::util::MONTHS_PER_YEAR;

/// Moves datetimes between the natural interval boundaries of a base period and the boundaries
/// of its offset counterpart.
///
/// Shifting by a month and shifting by a microsecond do not commute across month-end
/// boundaries, so the operand order is fixed: an advance applies the microsecond offset and
/// then the month offset, a retreat applies the month offset and then the microsecond offset.
/// With that pairing a retreat undoes an advance for any aligned input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Adjusters {
    month_offset: i64,
    microsecond_offset: i64,
}

impl Adjusters {
    /// Create the adjusters for the given offsets. At least one offset must be non-zero.
    pub(crate) fn of_offsets(month_offset: i64, microsecond_offset: i64) -> Self {
        if month_offset == 0 && microsecond_offset == 0 {
            bug!("adjusters require at least one non-zero offset");
        }

        Self {
            month_offset,
            microsecond_offset,
        }
    }

    /// Move a base-period boundary forwards onto the offset boundary.
    pub(crate) fn advance(self, date_time: DateTime) -> Result<DateTime, error::ComponentRange> {
        let date_time = date_time.checked_add_micros(self.microsecond_offset)?;
        shift_months(date_time, self.month_offset)
    }

    /// Move a datetime backwards into base-period coordinates.
    pub(crate) fn retreat(self, date_time: DateTime) -> Result<DateTime, error::ComponentRange> {
        let date_time = shift_months(date_time, -self.month_offset)?;
        date_time.checked_add_micros(-self.microsecond_offset)
    }
}

/// Shift by a number of months, short-circuiting whole years so that February 29th clamps
/// against the target year rather than an intermediate month.
fn shift_months(date_time: DateTime, months: i64) -> Result<DateTime, error::ComponentRange> {
    if months % MONTHS_PER_YEAR == 0 {
        date_time.shift_years(months / MONTHS_PER_YEAR)
    } else {
        date_time.shift_months(months)
    }
}
