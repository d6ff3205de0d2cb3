//! The [`Tz`] enum and its associated `impl`s.

use core::fmt;

use crate::UtcOffset;

/// A time zone attached to a period or timestamp.
///
/// Only fixed offsets are ever interpreted. A named zone is carried opaquely: it participates in
/// equality and ordering by name, produces an empty timestamp suffix, and its rules are never
/// consulted by any arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tz {
    /// A fixed offset from UTC.
    Fixed(UtcOffset),
    /// An opaque zone name, such as an IANA identifier.
    Named(Box<str>),
}

impl Tz {
    /// The UTC time zone.
    pub const UTC: Self = Self::Fixed(UtcOffset::UTC);

    /// Create a `Tz` carrying an opaque zone name.
    pub fn named(name: impl Into<Box<str>>) -> Self {
        Self::Named(name.into())
    }

    /// The fixed offset of the zone, if it has one.
    pub const fn fixed_offset(&self) -> Option<UtcOffset> {
        match self {
            Self::Fixed(offset) => Some(*offset),
            Self::Named(_) => None,
        }
    }
}

impl From<UtcOffset> for Tz {
    fn from(offset: UtcOffset) -> Self {
        Self::Fixed(offset)
    }
}

impl fmt::Display for Tz {
    /// Format the zone as it appears as a timestamp suffix. Named zones have no offset to
    /// render and produce an empty suffix.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(offset) => offset.fmt(f),
            Self::Named(_) => Ok(()),
        }
    }
}
