//! Period validation error.

use core::fmt;

use crate::error;

/// An error type indicating that a parsed or constructed value violates a period invariant: a
/// non-positive multiplier, a negative offset, a month offset on a non-month step, a duration
/// that mixes months with seconds, or a zero-length duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Validation {
    /// Name of the field or rule that was violated.
    pub(crate) name: &'static str,
}

impl Validation {
    /// Create a new `Validation` error for the named field or rule.
    pub(crate) const fn new(name: &'static str) -> Self {
        Self { name }
    }

    /// Obtain the name of the field or rule that was violated.
    pub const fn name(self) -> &'static str {
        self.name
    }
}

impl fmt::Display for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid period: {}", self.name)
    }
}

impl From<Validation> for crate::Error {
    fn from(original: Validation) -> Self {
        Self::Validation(original)
    }
}

impl TryFrom<crate::Error> for Validation {
    type Error = error::DifferentVariant;

    fn try_from(err: crate::Error) -> Result<Self, Self::Error> {
        match err {
            crate::Error::Validation(err) => Ok(err),
            _ => Err(error::DifferentVariant),
        }
    }
}

impl std::error::Error for Validation {}
