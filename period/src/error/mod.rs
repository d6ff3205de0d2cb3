//! Various error types returned by methods in the period crate.

mod component_range;
mod different_variant;
mod parse;
mod validation;

use core::fmt;

pub use self::component_range::ComponentRange;
pub use self::different_variant::DifferentVariant;
pub use self::parse::Parse;
pub use self::validation::Validation;

/// A unified error type for anything returned by a method in the period crate.
///
/// This can be used when you either don't know or don't care about the exact error returned.
/// `Result<_, period::Error>` will work in these situations.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A datetime component or arithmetic result was out of the representable range.
    ComponentRange(ComponentRange),
    /// A string did not match any accepted period grammar.
    Parse(Parse),
    /// A parsed or constructed value violated a period invariant.
    Validation(Validation),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ComponentRange(e) => e.fmt(f),
            Self::Parse(e) => e.fmt(f),
            Self::Validation(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ComponentRange(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::Validation(err) => Some(err),
        }
    }
}
