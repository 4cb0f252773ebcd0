//! `datealign` is a small library of calendar-aware timestamp utilities:
//! rounding an instant to the nearest multiple of a calendar field,
//! flooring finer-grained fields, searching a collection for the
//! timestamp closest to a target within a window, computing deltas over
//! timestamp sequences, and rendering timestamps from a pattern of typed
//! fields.
//!
//! ```rust
//! use datealign::{CalendarField, IsoCalendar, Timestamp};
//!
//! // Rounding to the nearest hour rolls across day and year boundaries.
//! let ts = Timestamp::from_utc(2021, 12, 31, 23, 50, 0).unwrap();
//! let rounded = ts.round(&IsoCalendar, 1, CalendarField::Hour).unwrap();
//! assert_eq!(rounded, Timestamp::from_utc(2022, 1, 1, 0, 0, 0).unwrap());
//! ```
//!
//! Every operation is a pure transformation over immutable inputs. The
//! calendar system is an explicit collaborator (the [`FieldAccessor`]
//! trait) rather than ambient global state; [`IsoCalendar`] provides a
//! proleptic Gregorian implementation in UTC.
#![no_std]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]

extern crate alloc;

pub mod error;
pub mod fmt;
pub mod iso;
pub mod options;
pub mod partial;
pub mod sequence;
pub mod window;

mod calendar;
mod duration;
mod timestamp;

#[doc(hidden)]
pub(crate) mod rounding;
#[doc(hidden)]
pub(crate) mod utils;

use core::cmp::Ordering;

#[doc(inline)]
pub use error::DateError;

/// The result type used throughout this crate.
pub type DateResult<T> = Result<T, DateError>;

pub use calendar::{FieldAccessor, IsoCalendar};
pub use duration::SignedDuration;
pub use options::{CalendarField, RoundingMode, RoundingOptions};
pub use timestamp::Timestamp;
pub use window::{closest, closest_by, within_window, Window};

/// A general sign type for signed quantities.
#[repr(i8)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Sign {
    #[default]
    Positive = 1,
    Zero = 0,
    Negative = -1,
}

impl From<i8> for Sign {
    fn from(value: i8) -> Self {
        match value.cmp(&0) {
            Ordering::Greater => Self::Positive,
            Ordering::Equal => Self::Zero,
            Ordering::Less => Self::Negative,
        }
    }
}

// Relevant numeric constants
/// Nanoseconds per day constant: 8.64e+13
pub const NS_PER_DAY: i64 = 86_400 * NS_PER_SECOND;
/// Nanoseconds per hour constant
pub(crate) const NS_PER_HOUR: i64 = 3_600 * NS_PER_SECOND;
/// Nanoseconds per minute constant
pub(crate) const NS_PER_MINUTE: i64 = 60 * NS_PER_SECOND;
/// Nanoseconds per second constant
pub(crate) const NS_PER_SECOND: i64 = 1_000_000_000;
/// Max valid timestamp nanosecond constant
pub(crate) const NS_MAX_TIMESTAMP: i128 = NS_PER_DAY as i128 * 100_000_000i128;
/// Min valid timestamp nanosecond constant
pub(crate) const NS_MIN_TIMESTAMP: i128 = -NS_MAX_TIMESTAMP;
