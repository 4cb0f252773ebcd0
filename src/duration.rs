//! A signed nanosecond duration.

use crate::{DateError, DateResult, Sign, NS_PER_DAY, NS_PER_HOUR, NS_PER_MINUTE, NS_PER_SECOND};

#[allow(unused_imports)]
use core_maths::*;
use num_traits::FromPrimitive;

const NS_PER_SECOND_F64: f64 = 1e9;

/// A signed quantity of time with nanosecond precision.
///
/// Durations may be negative; a negative duration is used as a "before"
/// offset when expressing a search window relative to a target.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SignedDuration(i128);

impl SignedDuration {
    /// The zero duration.
    pub const ZERO: Self = Self(0);

    /// Creates a duration from a nanosecond count.
    #[must_use]
    pub const fn from_nanoseconds(nanoseconds: i128) -> Self {
        Self(nanoseconds)
    }

    /// Creates a duration from a whole second count.
    #[must_use]
    pub const fn from_seconds(seconds: i64) -> Self {
        Self(seconds as i128 * NS_PER_SECOND as i128)
    }

    /// Creates a duration from a whole minute count.
    #[must_use]
    pub const fn from_minutes(minutes: i64) -> Self {
        Self(minutes as i128 * NS_PER_MINUTE as i128)
    }

    /// Creates a duration from a whole hour count.
    #[must_use]
    pub const fn from_hours(hours: i64) -> Self {
        Self(hours as i128 * NS_PER_HOUR as i128)
    }

    /// Creates a duration from a whole day count.
    #[must_use]
    pub const fn from_days(days: i64) -> Self {
        Self(days as i128 * NS_PER_DAY as i128)
    }

    /// Creates a duration from a fractional second count, rounding to the
    /// nearest nanosecond.
    ///
    /// Returns a range error when the value is not finite.
    pub fn try_from_seconds_f64(seconds: f64) -> DateResult<Self> {
        if !seconds.is_finite() {
            return Err(DateError::range().with_message("duration seconds must be a finite value"));
        }
        let nanos = i128::from_f64((seconds * NS_PER_SECOND_F64).round()).ok_or(
            DateError::range().with_message("duration seconds exceeded the representable range"),
        )?;
        Ok(Self(nanos))
    }

    /// Returns the nanosecond count of this duration.
    #[must_use]
    pub const fn as_nanoseconds(&self) -> i128 {
        self.0
    }

    /// Returns this duration as fractional seconds.
    #[must_use]
    pub fn as_seconds_f64(&self) -> f64 {
        self.0 as f64 / NS_PER_SECOND_F64
    }

    /// Returns this duration as a fractional day count.
    #[must_use]
    pub fn as_days_f64(&self) -> f64 {
        self.0 as f64 / NS_PER_DAY as f64
    }

    /// Returns the absolute value of this duration.
    #[must_use]
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Returns this duration with its sign flipped.
    #[must_use]
    pub const fn negated(&self) -> Self {
        Self(-self.0)
    }

    /// Returns the sign of this duration.
    #[must_use]
    pub fn sign(&self) -> Sign {
        Sign::from(self.0.signum() as i8)
    }

    /// Returns `true` for the zero duration.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Returns `true` for durations less than zero.
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Adds two durations, surfacing a range error on overflow.
    pub fn checked_add(&self, other: &Self) -> DateResult<Self> {
        let result = self
            .0
            .checked_add(other.0)
            .ok_or(DateError::range().with_message("duration addition overflowed"))?;
        Ok(Self(result))
    }
}
