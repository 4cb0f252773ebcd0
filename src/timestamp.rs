//! An absolute point in time and its rounding operations.

use crate::{
    calendar::FieldAccessor,
    iso::{IsoDate, IsoDateTime, IsoTime},
    options::{CalendarField, RoundingOptions},
    rounding::{choose_boundary, Boundary},
    DateError, DateResult, SignedDuration, NS_MAX_TIMESTAMP, NS_MIN_TIMESTAMP,
};

/// An absolute point in time, stored as nanoseconds relative to the
/// Unix epoch.
///
/// A `Timestamp` is an instant, not a wall-clock value: it carries no
/// timezone or calendar of its own. Calendar fields are extracted
/// through an explicit [`FieldAccessor`] collaborator.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(pub(crate) i128);

// ==== Construction and accessors ====

impl Timestamp {
    /// Creates a new validated `Timestamp` from epoch nanoseconds.
    #[inline]
    pub fn try_new(nanoseconds: i128) -> DateResult<Self> {
        if !is_valid_epoch_nanos(&nanoseconds) {
            return Err(DateError::range()
                .with_message("timestamp nanoseconds are not within the valid epoch range"));
        }
        Ok(Self(nanoseconds))
    }

    /// Creates a `Timestamp` from epoch milliseconds.
    pub fn from_epoch_milliseconds(epoch_milliseconds: i64) -> DateResult<Self> {
        Self::try_new(i128::from(epoch_milliseconds) * 1_000_000)
    }

    /// Creates a `Timestamp` from epoch seconds.
    pub fn from_epoch_seconds(epoch_seconds: i64) -> DateResult<Self> {
        Self::try_new(i128::from(epoch_seconds) * 1_000_000_000)
    }

    /// Creates a `Timestamp` from a civil date and time interpreted in UTC.
    pub fn from_utc(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> DateResult<Self> {
        let date = IsoDate::try_new(year, month, day)?;
        let time = IsoTime::try_new(hour, minute, second, 0)?;
        Self::from_iso(IsoDateTime::new(date, time))
    }

    /// Creates a `Timestamp` from an [`IsoDateTime`] interpreted in UTC.
    pub fn from_iso(datetime: IsoDateTime) -> DateResult<Self> {
        Self::try_new(datetime.as_epoch_nanoseconds())
    }

    /// Returns this timestamp as a civil date-time in UTC.
    #[must_use]
    pub fn as_iso(&self) -> IsoDateTime {
        IsoDateTime::from_epoch_nanoseconds(self.0)
    }

    /// Returns the epoch nanoseconds of this timestamp.
    #[must_use]
    pub fn epoch_nanoseconds(&self) -> i128 {
        self.0
    }

    /// Returns the epoch milliseconds of this timestamp.
    #[must_use]
    pub fn epoch_milliseconds(&self) -> i64 {
        (self.0 / 1_000_000) as i64
    }

    /// Returns the epoch seconds of this timestamp.
    #[must_use]
    pub fn epoch_seconds(&self) -> i64 {
        (self.0 / 1_000_000_000) as i64
    }
}

// ==== Instant arithmetic ====

impl Timestamp {
    /// Adds a duration, surfacing a range error when the result leaves
    /// the valid epoch range.
    #[inline]
    pub fn checked_add(&self, duration: &SignedDuration) -> DateResult<Self> {
        let nanos = self.0.checked_add(duration.as_nanoseconds()).ok_or(
            DateError::range().with_message("timestamp arithmetic overflowed"),
        )?;
        Self::try_new(nanos)
    }

    /// Subtracts a duration, surfacing a range error when the result
    /// leaves the valid epoch range.
    #[inline]
    pub fn checked_sub(&self, duration: &SignedDuration) -> DateResult<Self> {
        self.checked_add(&duration.negated())
    }

    /// Returns the signed duration from `other` to this timestamp.
    #[must_use]
    pub fn since(&self, other: &Self) -> SignedDuration {
        SignedDuration::from_nanoseconds(self.0 - other.0)
    }

    /// Returns the absolute distance between this timestamp and `other`.
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> SignedDuration {
        self.since(other).abs()
    }
}

// ==== Rounding and flooring ====

impl Timestamp {
    /// Rounds this timestamp to the nearest multiple of `increment`
    /// units of `field`, then floors every finer field.
    ///
    /// Ties round away from zero. Equivalent to [`Timestamp::round_with`]
    /// with the default rounding mode.
    pub fn round<C: FieldAccessor>(
        &self,
        calendar: &C,
        increment: u32,
        field: CalendarField,
    ) -> DateResult<Self> {
        self.round_with(
            calendar,
            RoundingOptions {
                field,
                increment,
                mode: None,
            },
        )
    }

    /// Rounds this timestamp according to the provided options.
    ///
    /// The rounding grid is formed by the multiples of
    /// `options.increment` of the field's value; the result is the grid
    /// boundary selected by the rounding mode, with every field finer
    /// than `options.field` floored. Crossing a grid boundary rolls
    /// into coarser fields with calendar-correct arithmetic, so rounding
    /// `2021-12-31T23:50` to the nearest hour produces
    /// `2022-01-01T00:00`.
    pub fn round_with<C: FieldAccessor>(
        &self,
        calendar: &C,
        options: RoundingOptions,
    ) -> DateResult<Self> {
        if options.increment == 0 {
            return Err(DateError::argument()
                .with_message("rounding increment must be a positive integer"));
        }
        let field = options.field;
        let increment = i64::from(options.increment);
        let mode = options.mode.unwrap_or_default();

        let value = calendar.field_value(field, *self);
        let remainder = value.rem_euclid(increment);

        // The lower grid boundary: this timestamp floored to `field`,
        // pulled back to the previous multiple of the increment.
        let floored = self.floor_to(calendar, field)?;
        let lower = if remainder != 0 {
            calendar.checked_add(field, -remainder, floored)?
        } else {
            floored
        };
        if *self == lower {
            return Ok(lower);
        }
        let upper = calendar.checked_add(field, increment, lower)?;
        if !(lower < *self && *self < upper) {
            return Err(DateError::assert()
                .with_message("rounding boundaries failed to bracket the input"));
        }

        let lower_index = (value - remainder).div_euclid(increment);
        let choice = choose_boundary(
            self.0 - lower.0,
            upper.0 - self.0,
            lower_index % 2 == 0,
            mode,
            value >= 0,
        );
        match choice {
            Boundary::Lower => Ok(lower),
            Boundary::Upper => Ok(upper),
        }
    }

    /// Floors every field strictly finer than `field` to its minimum
    /// value, walking the granularities from coarsest to finest and
    /// subtracting each current value with calendar-correct arithmetic.
    ///
    /// Day and month floor to 1; the time fields floor to 0. Flooring
    /// before [`CalendarField::Subsecond`] is a no-op.
    pub fn floor_to<C: FieldAccessor>(
        &self,
        calendar: &C,
        field: CalendarField,
    ) -> DateResult<Self> {
        let mut result = *self;
        let mut current = field;
        while let Some(finer) = current.finer() {
            let value = calendar.field_value(finer, result);
            let delta = finer.minimum_value() - value;
            if delta != 0 {
                result = calendar.checked_add(finer, delta, result)?;
            }
            current = finer;
        }
        Ok(result)
    }
}

/// Utility for determining if the nanos are within a valid range.
#[inline]
#[must_use]
pub(crate) fn is_valid_epoch_nanos(nanos: &i128) -> bool {
    (NS_MIN_TIMESTAMP..=NS_MAX_TIMESTAMP).contains(nanos)
}

#[cfg(test)]
mod tests {
    use super::Timestamp;
    use crate::{
        error::ErrorKind, CalendarField, IsoCalendar, RoundingMode, RoundingOptions,
        SignedDuration, NS_MAX_TIMESTAMP, NS_MIN_TIMESTAMP,
    };

    fn ts(year: i32, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Timestamp {
        Timestamp::from_utc(year, month, day, hour, minute, second).unwrap()
    }

    #[test]
    fn max_and_minimum_timestamp_bounds() {
        assert!(Timestamp::try_new(NS_MAX_TIMESTAMP).is_ok());
        assert!(Timestamp::try_new(NS_MIN_TIMESTAMP).is_ok());
        assert!(Timestamp::try_new(NS_MAX_TIMESTAMP + 1).is_err());
        assert!(Timestamp::try_new(NS_MIN_TIMESTAMP - 1).is_err());
    }

    #[test]
    fn epoch_accessors() {
        let t = Timestamp::from_epoch_seconds(1_609_459_200).unwrap(); // 2021-01-01T00:00:00Z
        assert_eq!(t, ts(2021, 1, 1, 0, 0, 0));
        assert_eq!(t.epoch_milliseconds(), 1_609_459_200_000);
        assert_eq!(t.epoch_seconds(), 1_609_459_200);
    }

    #[test]
    fn instant_arithmetic() {
        let t = ts(2021, 6, 1, 12, 0, 0);
        let later = t.checked_add(&SignedDuration::from_minutes(90)).unwrap();
        assert_eq!(later, ts(2021, 6, 1, 13, 30, 0));
        assert_eq!(later.since(&t), SignedDuration::from_minutes(90));
        assert_eq!(t.since(&later), SignedDuration::from_minutes(-90));
        assert_eq!(t.distance_to(&later), SignedDuration::from_minutes(90));
    }

    #[test]
    fn round_rolls_across_year_boundary() {
        let t = ts(2021, 12, 31, 23, 50, 0);
        let rounded = t.round(&IsoCalendar, 1, CalendarField::Hour).unwrap();
        assert_eq!(rounded, ts(2022, 1, 1, 0, 0, 0));
    }

    #[test]
    fn round_on_boundary_is_identity() {
        let t = ts(2021, 1, 1, 0, 0, 0);
        let rounded = t.round(&IsoCalendar, 1, CalendarField::Hour).unwrap();
        assert_eq!(rounded, t);
    }

    #[test]
    fn round_floors_finer_fields() {
        let t = ts(2021, 12, 31, 23, 20, 17);
        let rounded = t.round(&IsoCalendar, 1, CalendarField::Hour).unwrap();
        assert_eq!(rounded, ts(2021, 12, 31, 23, 0, 0));
        use crate::FieldAccessor;
        for field in [
            CalendarField::Minute,
            CalendarField::Second,
            CalendarField::Subsecond,
        ] {
            assert_eq!(IsoCalendar.field_value(field, rounded), 0);
        }
    }

    #[test]
    fn round_is_idempotent() {
        let inputs = [
            ts(2021, 12, 31, 23, 50, 0),
            ts(2021, 7, 14, 11, 29, 31),
            ts(1969, 3, 2, 6, 45, 9),
        ];
        for t in inputs {
            for (increment, field) in [
                (1, CalendarField::Hour),
                (15, CalendarField::Minute),
                (2, CalendarField::Month),
                (10, CalendarField::Year),
            ] {
                let once = t.round(&IsoCalendar, increment, field).unwrap();
                let twice = once.round(&IsoCalendar, increment, field).unwrap();
                assert_eq!(once, twice, "rounding {t:?} on {field} was not idempotent");
            }
        }
    }

    #[test]
    fn round_to_increment_of_minutes() {
        // 11:52 to the nearest 15 minutes is 11:45; 11:53 is 12:00.
        let t = ts(2021, 5, 10, 11, 52, 0);
        assert_eq!(
            t.round(&IsoCalendar, 15, CalendarField::Minute).unwrap(),
            ts(2021, 5, 10, 11, 45, 0)
        );
        let t = ts(2021, 5, 10, 11, 53, 0);
        assert_eq!(
            t.round(&IsoCalendar, 15, CalendarField::Minute).unwrap(),
            ts(2021, 5, 10, 12, 0, 0)
        );
    }

    #[test]
    fn round_ties_away_from_zero_by_default() {
        // 10:30 sits exactly between 10:00 and 11:00.
        let t = ts(2021, 5, 10, 10, 30, 0);
        assert_eq!(
            t.round(&IsoCalendar, 1, CalendarField::Hour).unwrap(),
            ts(2021, 5, 10, 11, 0, 0)
        );
        // half-even picks the even hour index instead.
        let rounded = t
            .round_with(
                &IsoCalendar,
                RoundingOptions::nearest(CalendarField::Hour).with_mode(RoundingMode::HalfEven),
            )
            .unwrap();
        assert_eq!(rounded, ts(2021, 5, 10, 10, 0, 0));
    }

    #[test]
    fn round_trunc_and_expand_modes() {
        let t = ts(2021, 5, 10, 10, 10, 0);
        let trunc = t
            .round_with(
                &IsoCalendar,
                RoundingOptions::nearest(CalendarField::Hour).with_mode(RoundingMode::Trunc),
            )
            .unwrap();
        assert_eq!(trunc, ts(2021, 5, 10, 10, 0, 0));
        let expand = t
            .round_with(
                &IsoCalendar,
                RoundingOptions::nearest(CalendarField::Hour).with_mode(RoundingMode::Expand),
            )
            .unwrap();
        assert_eq!(expand, ts(2021, 5, 10, 11, 0, 0));
    }

    #[test]
    fn round_to_nearest_month() {
        // July 20th is past the midpoint of July, so the nearest month
        // boundary is August 1st.
        let t = ts(2021, 7, 20, 0, 0, 0);
        assert_eq!(
            t.round(&IsoCalendar, 1, CalendarField::Month).unwrap(),
            ts(2021, 8, 1, 0, 0, 0)
        );
        // July 10th rounds back to July 1st.
        let t = ts(2021, 7, 10, 0, 0, 0);
        assert_eq!(
            t.round(&IsoCalendar, 1, CalendarField::Month).unwrap(),
            ts(2021, 7, 1, 0, 0, 0)
        );
        // Mid-December rounds into the next year.
        let t = ts(2021, 12, 25, 0, 0, 0);
        assert_eq!(
            t.round(&IsoCalendar, 1, CalendarField::Month).unwrap(),
            ts(2022, 1, 1, 0, 0, 0)
        );
    }

    #[test]
    fn zero_increment_is_an_argument_error() {
        let t = ts(2021, 1, 1, 0, 0, 0);
        let err = t.round(&IsoCalendar, 0, CalendarField::Hour).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Argument);
    }

    #[test]
    fn floor_to_year_resets_to_january_first() {
        let t = ts(2021, 7, 14, 11, 29, 31);
        let floored = t.floor_to(&IsoCalendar, CalendarField::Year).unwrap();
        assert_eq!(floored, ts(2021, 1, 1, 0, 0, 0));
    }

    #[test]
    fn floor_to_subsecond_is_a_noop() {
        let t = ts(2021, 7, 14, 11, 29, 31);
        assert_eq!(
            t.floor_to(&IsoCalendar, CalendarField::Subsecond).unwrap(),
            t
        );
    }

    #[test]
    fn floor_to_month_keeps_day_one() {
        // Flooring must land on the first of the month, never on day
        // zero of the previous month.
        let t = ts(2021, 3, 15, 8, 0, 0);
        let floored = t.floor_to(&IsoCalendar, CalendarField::Month).unwrap();
        assert_eq!(floored, ts(2021, 3, 1, 0, 0, 0));
    }
}
