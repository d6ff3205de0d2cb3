//! Component range error.

use core::fmt;

use crate::error;

/// An error type indicating that a datetime component or arithmetic result was out of the
/// representable range, causing a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComponentRange {
    /// Name of the component.
    pub(crate) name: &'static str,
    /// Whether an input with the same value could have succeeded if the values of other
    /// components were different.
    pub(crate) conditional: bool,
}

impl ComponentRange {
    /// Create a new `ComponentRange` error that is not conditional.
    pub(crate) const fn unconditional(name: &'static str) -> Self {
        Self {
            name,
            conditional: false,
        }
    }

    /// Create a new `ComponentRange` error that is conditional.
    pub(crate) const fn conditional(name: &'static str) -> Self {
        Self {
            name,
            conditional: true,
        }
    }

    /// Obtain the name of the component whose value was out of range.
    pub const fn name(self) -> &'static str {
        self.name
    }

    /// Whether the value's permitted range is conditional, i.e. whether an input with this
    /// value could have succeeded if the values of other components were different.
    pub const fn is_conditional(self) -> bool {
        self.conditional
    }
}

impl fmt::Display for ComponentRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} was not in range", self.name)
    }
}

impl From<ComponentRange> for crate::Error {
    fn from(original: ComponentRange) -> Self {
        Self::ComponentRange(original)
    }
}

impl TryFrom<crate::Error> for ComponentRange {
    type Error = error::DifferentVariant;

    fn try_from(err: crate::Error) -> Result<Self, Self::Error> {
        match err {
            crate::Error::ComponentRange(err) => Ok(err),
            _ => Err(error::DifferentVariant),
        }
    }
}

impl std::error::Error for ComponentRange {}
