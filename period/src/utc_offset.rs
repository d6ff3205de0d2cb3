//! The [`UtcOffset`] struct and its associated `impl`s.

use core::fmt;

use crate::error;
use crate::util::{SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};

/// A fixed offset from UTC.
///
/// Guaranteed to store values strictly between ±24 hours. Offsets are rendered as `Z` when zero
/// and `±HH:MM` otherwise; any seconds component is ignored when rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UtcOffset {
    seconds: i32,
}

impl UtcOffset {
    /// A `UtcOffset` that is UTC.
    ///
    /// ```rust
    /// # use period::UtcOffset;
    /// assert_eq!(UtcOffset::UTC.whole_seconds(), 0);
    /// ```
    pub const UTC: Self = Self { seconds: 0 };

    /// Create a `UtcOffset` representing an offset by the number of hours and minutes provided.
    ///
    /// The sign of both components should match. If they do not, the minutes will have its sign
    /// flipped.
    ///
    /// ```rust
    /// # use period::UtcOffset;
    /// assert_eq!(UtcOffset::from_hms(1, 2)?.whole_seconds(), 3_720);
    /// # Ok::<_, period::Error>(())
    /// ```
    pub const fn from_hms(hours: i8, mut minutes: i8) -> Result<Self, error::ComponentRange> {
        if hours < -23 || hours > 23 {
            return Err(error::ComponentRange::unconditional("hours"));
        }
        if minutes < -59 || minutes > 59 {
            return Err(error::ComponentRange::unconditional("minutes"));
        }
        if (hours > 0 && minutes < 0) || (hours < 0 && minutes > 0) {
            minutes *= -1;
        }

        Ok(Self {
            seconds: hours as i32 * SECONDS_PER_HOUR as i32 + minutes as i32 * 60,
        })
    }

    /// Create a `UtcOffset` representing an offset of the number of whole seconds provided.
    ///
    /// Offsets of a day or more are rejected.
    pub const fn from_whole_seconds(seconds: i32) -> Result<Self, error::ComponentRange> {
        if seconds <= -(SECONDS_PER_DAY as i32) || seconds >= SECONDS_PER_DAY as i32 {
            return Err(error::ComponentRange::unconditional("seconds"));
        }
        Ok(Self { seconds })
    }

    /// Obtain the number of seconds the offset is from UTC. A positive value indicates an offset
    /// to the east; a negative to the west.
    pub const fn whole_seconds(self) -> i32 {
        self.seconds
    }

    /// Whether the offset is exactly UTC.
    pub const fn is_utc(self) -> bool {
        self.seconds == 0
    }
}

impl fmt::Display for UtcOffset {
    /// Format the offset as it appears as a timestamp suffix: `Z`, `+HH:MM`, or `-HH:MM`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.seconds == 0 {
            return f.write_str("Z");
        }
        let sign = if self.seconds < 0 { '-' } else { '+' };
        let seconds = self.seconds.unsigned_abs() as i64;
        write!(
            f,
            "{sign}{:02}:{:02}",
            seconds / SECONDS_PER_HOUR,
            seconds % SECONDS_PER_HOUR / SECONDS_PER_MINUTE
        )
    }
}
