//! The ISO-8601 civil date and time records.
//!
//! These records are the plumbing between epoch nanoseconds and calendar
//! fields. They carry no timezone; conversions are UTC.

use crate::{
    utils, DateError, DateResult, NS_PER_DAY, NS_PER_HOUR, NS_PER_MINUTE, NS_PER_SECOND,
};

/// A calendar date in the proleptic Gregorian calendar.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct IsoDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl IsoDate {
    /// Creates a new `IsoDate`, rejecting out-of-range fields.
    pub fn try_new(year: i32, month: u8, day: u8) -> DateResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(DateError::range().with_message("month must be in the range 1 through 12"));
        }
        if day < 1 || day > utils::days_in_month(year, month) {
            return Err(DateError::range().with_message("day exceeds the length of the month"));
        }
        Ok(Self { year, month, day })
    }

    pub(crate) fn new_unchecked(year: i32, month: u8, day: u8) -> Self {
        debug_assert!((1..=12).contains(&month));
        debug_assert!(day >= 1 && day <= utils::days_in_month(year, month));
        Self { year, month, day }
    }

    /// Returns this date as a day count relative to the Unix epoch.
    #[must_use]
    pub fn to_epoch_days(self) -> i64 {
        utils::epoch_days_from_civil(i64::from(self.year), self.month, self.day)
    }

    /// Converts a day count relative to the Unix epoch to a date.
    #[must_use]
    pub fn from_epoch_days(days: i64) -> Self {
        let (year, month, day) = utils::civil_from_epoch_days(days);
        Self { year, month, day }
    }

    /// Returns the day of the week for this date, with 0 as Sunday.
    #[must_use]
    pub fn week_day(self) -> u8 {
        utils::epoch_days_to_week_day(self.to_epoch_days())
    }
}

/// A wall-clock time of day with nanosecond precision.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct IsoTime {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub nanosecond: u32,
}

impl IsoTime {
    /// Creates a new `IsoTime`, rejecting out-of-range fields.
    pub fn try_new(hour: u8, minute: u8, second: u8, nanosecond: u32) -> DateResult<Self> {
        if hour > 23 {
            return Err(DateError::range().with_message("hour must be in the range 0 through 23"));
        }
        if minute > 59 || second > 59 {
            return Err(DateError::range()
                .with_message("minute and second must be in the range 0 through 59"));
        }
        if nanosecond >= 1_000_000_000 {
            return Err(DateError::range().with_message("nanosecond must be less than 10^9"));
        }
        Ok(Self {
            hour,
            minute,
            second,
            nanosecond,
        })
    }

    /// Returns this time as nanoseconds elapsed since midnight.
    #[must_use]
    pub fn as_nanosecond_of_day(self) -> i64 {
        i64::from(self.hour) * NS_PER_HOUR
            + i64::from(self.minute) * NS_PER_MINUTE
            + i64::from(self.second) * NS_PER_SECOND
            + i64::from(self.nanosecond)
    }

    /// Converts nanoseconds elapsed since midnight to a time of day.
    #[must_use]
    pub fn from_nanosecond_of_day(nanoseconds: i64) -> Self {
        debug_assert!((0..NS_PER_DAY).contains(&nanoseconds));
        let hour = (nanoseconds / NS_PER_HOUR) as u8;
        let minute = (nanoseconds % NS_PER_HOUR / NS_PER_MINUTE) as u8;
        let second = (nanoseconds % NS_PER_MINUTE / NS_PER_SECOND) as u8;
        let nanosecond = (nanoseconds % NS_PER_SECOND) as u32;
        Self {
            hour,
            minute,
            second,
            nanosecond,
        }
    }

    /// Returns the millisecond-of-second for this time.
    #[must_use]
    pub fn millisecond(self) -> u16 {
        (self.nanosecond / 1_000_000) as u16
    }
}

/// A combined civil date and time of day.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct IsoDateTime {
    pub date: IsoDate,
    pub time: IsoTime,
}

impl IsoDateTime {
    /// Creates a new `IsoDateTime` from its halves.
    #[must_use]
    pub fn new(date: IsoDate, time: IsoTime) -> Self {
        Self { date, time }
    }

    /// Converts epoch nanoseconds to a civil date-time in UTC.
    #[must_use]
    pub fn from_epoch_nanoseconds(nanoseconds: i128) -> Self {
        let days = nanoseconds.div_euclid(i128::from(NS_PER_DAY)) as i64;
        let time_of_day = nanoseconds.rem_euclid(i128::from(NS_PER_DAY)) as i64;
        Self {
            date: IsoDate::from_epoch_days(days),
            time: IsoTime::from_nanosecond_of_day(time_of_day),
        }
    }

    /// Returns this date-time as epoch nanoseconds in UTC.
    #[must_use]
    pub fn as_epoch_nanoseconds(self) -> i128 {
        i128::from(self.date.to_epoch_days()) * i128::from(NS_PER_DAY)
            + i128::from(self.time.as_nanosecond_of_day())
    }
}

#[cfg(test)]
mod tests {
    use super::{IsoDate, IsoDateTime, IsoTime};

    #[test]
    fn date_validation() {
        assert!(IsoDate::try_new(2021, 2, 29).is_err());
        assert!(IsoDate::try_new(2020, 2, 29).is_ok());
        assert!(IsoDate::try_new(2021, 13, 1).is_err());
        assert!(IsoDate::try_new(2021, 0, 1).is_err());
        assert!(IsoDate::try_new(2021, 4, 31).is_err());
    }

    #[test]
    fn time_validation() {
        assert!(IsoTime::try_new(24, 0, 0, 0).is_err());
        assert!(IsoTime::try_new(23, 60, 0, 0).is_err());
        assert!(IsoTime::try_new(23, 59, 59, 999_999_999).is_ok());
        assert!(IsoTime::try_new(0, 0, 0, 1_000_000_000).is_err());
    }

    #[test]
    fn epoch_nanosecond_round_trip() {
        let dt = IsoDateTime::new(
            IsoDate::try_new(2021, 12, 31).unwrap(),
            IsoTime::try_new(23, 50, 0, 0).unwrap(),
        );
        let nanos = dt.as_epoch_nanoseconds();
        assert_eq!(IsoDateTime::from_epoch_nanoseconds(nanos), dt);

        // Negative epoch values resolve to pre-1970 dates.
        let before = IsoDateTime::from_epoch_nanoseconds(-1);
        assert_eq!(before.date, IsoDate::try_new(1969, 12, 31).unwrap());
        assert_eq!(before.time.hour, 23);
        assert_eq!(before.time.nanosecond, 999_999_999);
    }

    #[test]
    fn time_of_day_split() {
        let time = IsoTime::from_nanosecond_of_day(
            IsoTime::try_new(10, 20, 30, 123_000_000)
                .unwrap()
                .as_nanosecond_of_day(),
        );
        assert_eq!(time, IsoTime::try_new(10, 20, 30, 123_000_000).unwrap());
        assert_eq!(time.millisecond(), 123);
    }
}
