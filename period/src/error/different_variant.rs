//! A fallback error returned when attempting to convert [`Error`](crate::Error) to a more
//! specific variant fails.

use core::fmt;

/// An error type indicating that an [`Error`](crate::Error) was not of the expected variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DifferentVariant;

impl fmt::Display for DifferentVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error was not the expected variant")
    }
}

impl std::error::Error for DifferentVariant {}
