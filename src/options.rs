//! Option and granularity types used by the rounding operations.

use crate::{DateError, NS_PER_DAY, NS_PER_HOUR, NS_PER_MINUTE, NS_PER_SECOND};
use core::{fmt, str::FromStr};

// ==== CalendarField ====

/// A calendar granularity, ordered from finest to coarsest.
///
/// The derived ordering is a total order over the granularities:
/// `Subsecond < Second < Minute < Hour < Day < Month < Year`. Flooring
/// "before" a field means flooring every field that compares strictly
/// less than it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CalendarField {
    /// The sub-second field, valued in nanoseconds of the second.
    Subsecond = 0,
    /// The second-of-minute field.
    Second,
    /// The minute-of-hour field.
    Minute,
    /// The hour-of-day field.
    Hour,
    /// The day-of-month field.
    Day,
    /// The month-of-year field.
    Month,
    /// The year field.
    Year,
}

impl CalendarField {
    /// Returns the next finer field, or `None` for [`CalendarField::Subsecond`].
    #[must_use]
    pub fn finer(self) -> Option<Self> {
        match self {
            Self::Year => Some(Self::Month),
            Self::Month => Some(Self::Day),
            Self::Day => Some(Self::Hour),
            Self::Hour => Some(Self::Minute),
            Self::Minute => Some(Self::Second),
            Self::Second => Some(Self::Subsecond),
            Self::Subsecond => None,
        }
    }

    /// Returns the floor value of this field: 1 for day-of-month and
    /// month-of-year, 0 for the time fields.
    #[must_use]
    pub fn minimum_value(self) -> i64 {
        match self {
            Self::Month | Self::Day => 1,
            _ => 0,
        }
    }

    /// Returns the fixed nanosecond length of this field, or `None` for
    /// the variable-length calendar fields.
    #[must_use]
    pub fn as_nanoseconds(self) -> Option<i64> {
        match self {
            Self::Year | Self::Month => None,
            Self::Day => Some(NS_PER_DAY),
            Self::Hour => Some(NS_PER_HOUR),
            Self::Minute => Some(NS_PER_MINUTE),
            Self::Second => Some(NS_PER_SECOND),
            Self::Subsecond => Some(1),
        }
    }
}

impl FromStr for CalendarField {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "year" | "years" => Ok(Self::Year),
            "month" | "months" => Ok(Self::Month),
            "day" | "days" => Ok(Self::Day),
            "hour" | "hours" => Ok(Self::Hour),
            "minute" | "minutes" => Ok(Self::Minute),
            "second" | "seconds" => Ok(Self::Second),
            "subsecond" | "subseconds" => Ok(Self::Subsecond),
            _ => Err(DateError::component()
                .with_message("provided string was not a valid calendar field")),
        }
    }
}

impl fmt::Display for CalendarField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
            Self::Hour => "hour",
            Self::Minute => "minute",
            Self::Second => "second",
            Self::Subsecond => "subsecond",
        }
        .fmt(f)
    }
}

// ==== RoundingMode ====

/// The rounding mode applied when a value falls between two multiples of
/// the rounding increment.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum RoundingMode {
    /// Round toward positive infinity.
    Ceil,
    /// Round toward negative infinity.
    Floor,
    /// Round away from zero.
    Expand,
    /// Round toward zero.
    Trunc,
    /// Ties round toward positive infinity.
    HalfCeil,
    /// Ties round toward negative infinity.
    HalfFloor,
    /// Ties round away from zero.
    #[default]
    HalfExpand,
    /// Ties round toward zero.
    HalfTrunc,
    /// Ties round toward the even multiple.
    HalfEven,
}

/// The unsigned rounding modes, applied to a magnitude once the sign of
/// the value is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum UnsignedRoundingMode {
    Infinity,
    Zero,
    HalfInfinity,
    HalfZero,
    HalfEven,
}

impl RoundingMode {
    pub(crate) fn get_unsigned_round_mode(self, is_positive: bool) -> UnsignedRoundingMode {
        use UnsignedRoundingMode::{HalfEven, HalfInfinity, HalfZero, Infinity, Zero};
        match self {
            Self::Ceil if is_positive => Infinity,
            Self::Ceil => Zero,
            Self::Floor if is_positive => Zero,
            Self::Floor | Self::Expand => Infinity,
            Self::Trunc => Zero,
            Self::HalfCeil if is_positive => HalfInfinity,
            Self::HalfCeil => HalfZero,
            Self::HalfFloor if is_positive => HalfZero,
            Self::HalfFloor | Self::HalfExpand => HalfInfinity,
            Self::HalfTrunc => HalfZero,
            Self::HalfEven => HalfEven,
        }
    }
}

impl FromStr for RoundingMode {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ceil" => Ok(Self::Ceil),
            "floor" => Ok(Self::Floor),
            "expand" => Ok(Self::Expand),
            "trunc" => Ok(Self::Trunc),
            "halfCeil" => Ok(Self::HalfCeil),
            "halfFloor" => Ok(Self::HalfFloor),
            "halfExpand" => Ok(Self::HalfExpand),
            "halfTrunc" => Ok(Self::HalfTrunc),
            "halfEven" => Ok(Self::HalfEven),
            _ => Err(DateError::range().with_message("provided string was not a valid rounding mode")),
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ceil => "ceil",
            Self::Floor => "floor",
            Self::Expand => "expand",
            Self::Trunc => "trunc",
            Self::HalfCeil => "halfCeil",
            Self::HalfFloor => "halfFloor",
            Self::HalfExpand => "halfExpand",
            Self::HalfTrunc => "halfTrunc",
            Self::HalfEven => "halfEven",
        }
        .fmt(f)
    }
}

// ==== RoundingOptions ====

/// Options for [`Timestamp::round_with`](crate::Timestamp::round_with).
#[non_exhaustive]
#[derive(Debug, Clone, Copy)]
pub struct RoundingOptions {
    /// The calendar field whose multiples form the rounding grid.
    pub field: CalendarField,
    /// The rounding increment; must be a positive integer.
    pub increment: u32,
    /// The rounding mode; defaults to [`RoundingMode::HalfExpand`].
    pub mode: Option<RoundingMode>,
}

impl RoundingOptions {
    /// Creates options that round to the nearest single unit of `field`.
    #[must_use]
    pub fn nearest(field: CalendarField) -> Self {
        Self {
            field,
            increment: 1,
            mode: None,
        }
    }

    /// Sets the rounding increment.
    #[must_use]
    pub fn with_increment(mut self, increment: u32) -> Self {
        self.increment = increment;
        self
    }

    /// Sets the rounding mode.
    #[must_use]
    pub fn with_mode(mut self, mode: RoundingMode) -> Self {
        self.mode = Some(mode);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::CalendarField;
    use core::str::FromStr;

    #[test]
    fn field_order_is_finest_to_coarsest() {
        use CalendarField::{Day, Hour, Minute, Month, Second, Subsecond, Year};
        let mut walk = alloc::vec::Vec::new();
        let mut current = Some(Year);
        while let Some(field) = current {
            walk.push(field);
            current = field.finer();
        }
        assert_eq!(walk, [Year, Month, Day, Hour, Minute, Second, Subsecond]);
        assert!(Subsecond < Second && Second < Minute && Minute < Hour);
        assert!(Hour < Day && Day < Month && Month < Year);
    }

    #[test]
    fn field_parsing_round_trips() {
        for name in [
            "year",
            "month",
            "day",
            "hour",
            "minute",
            "second",
            "subsecond",
        ] {
            let field = CalendarField::from_str(name).unwrap();
            assert_eq!(alloc::string::ToString::to_string(&field), name);
        }
        assert!(CalendarField::from_str("fortnight").is_err());
    }
}
