//! Period string parsing error.

use core::fmt;

use crate::error;

/// An error type indicating that a string did not match any of the accepted period grammars, or
/// that a numeric field in the input overflowed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Parse {
    /// The input that could not be parsed.
    pub(crate) input: Box<str>,
}

impl Parse {
    /// Create a new `Parse` error for the given input.
    pub(crate) fn new(input: &str) -> Self {
        Self {
            input: input.into(),
        }
    }

    /// Obtain the input that could not be parsed.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for Parse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "string is not a valid period: {:?}", self.input)
    }
}

impl From<Parse> for crate::Error {
    fn from(original: Parse) -> Self {
        Self::Parse(original)
    }
}

impl TryFrom<crate::Error> for Parse {
    type Error = error::DifferentVariant;

    fn try_from(err: crate::Error) -> Result<Self, Self::Error> {
        match err {
            crate::Error::Parse(err) => Ok(err),
            _ => Err(error::DifferentVariant),
        }
    }
}

impl std::error::Error for Parse {}
