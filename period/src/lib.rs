//! Periods split the proleptic Gregorian timeline into a sequence of consecutive half-open
//! intervals, each identified by a signed integer ordinal.
//!
//! A [`Period`] answers two inverse queries in constant time: [`Period::ordinal`] maps a
//! timestamp to the index of the interval containing it, and [`Period::datetime`] maps an
//! index back to the inclusive start of that interval. Everything else — parsing and
//! rendering of the string forms, subperiod arithmetic, alignment checks, formatter
//! selection — is built on those two operations.
//!
//! ```rust
//! use period::{DateTime, Period};
//!
//! let water_year = Period::of_years(1)?
//!     .with_month_offset(9)?
//!     .with_hour_offset(9)?;
//! assert_eq!(
//!     water_year.ordinal(&DateTime::parse("2006-10-01T09:00:00")?)?,
//!     2006,
//! );
//! assert_eq!(
//!     water_year.ordinal(&DateTime::parse("2006-10-01T08:59:59")?)?,
//!     2005,
//! );
//! # Ok::<_, period::Error>(())
//! ```
//!
//! Periods are immutable values with no interior resources: sharing them across threads
//! requires no synchronization, and builder methods return fresh values.

mod date;
mod date_time;
pub mod error;
mod formatting;
mod internal_macros;
mod parsing;
mod period;
mod properties;
#[cfg(feature = "serde")]
mod serde;
mod time;
mod tz;
mod utc_offset;
mod util;

pub use crate::date::Date;
pub use crate::date_time::DateTime;
pub use crate::error::Error;
pub use crate::formatting::DateTimeFormatter;
pub use crate::period::Period;
pub use crate::properties::{Properties, Step};
pub use crate::time::Time;
pub use crate::tz::Tz;
pub use crate::utc_offset::UtcOffset;
