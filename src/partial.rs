//! Partial date-time records.
//!
//! A [`PartialDateTime`] collects an arbitrary subset of civil fields;
//! unset fields resolve to the epoch defaults (1970-01-01, midnight)
//! when the record is turned into a timestamp.

use crate::{
    iso::{IsoDate, IsoDateTime, IsoTime},
    DateResult, Timestamp,
};

/// A set of optionally provided civil date-time fields.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct PartialDateTime {
    pub year: Option<i32>,
    pub month: Option<u8>,
    pub day: Option<u8>,
    pub hour: Option<u8>,
    pub minute: Option<u8>,
    pub second: Option<u8>,
    pub nanosecond: Option<u32>,
}

impl PartialDateTime {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the year field.
    #[must_use]
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Sets the month field.
    #[must_use]
    pub fn with_month(mut self, month: u8) -> Self {
        self.month = Some(month);
        self
    }

    /// Sets the day field.
    #[must_use]
    pub fn with_day(mut self, day: u8) -> Self {
        self.day = Some(day);
        self
    }

    /// Sets the hour field.
    #[must_use]
    pub fn with_hour(mut self, hour: u8) -> Self {
        self.hour = Some(hour);
        self
    }

    /// Sets the minute field.
    #[must_use]
    pub fn with_minute(mut self, minute: u8) -> Self {
        self.minute = Some(minute);
        self
    }

    /// Sets the second field.
    #[must_use]
    pub fn with_second(mut self, second: u8) -> Self {
        self.second = Some(second);
        self
    }

    /// Sets the sub-second field, in nanoseconds of the second.
    #[must_use]
    pub fn with_nanosecond(mut self, nanosecond: u32) -> Self {
        self.nanosecond = Some(nanosecond);
        self
    }

    /// Sets the date fields together.
    #[must_use]
    pub fn with_date(self, year: i32, month: u8, day: u8) -> Self {
        self.with_year(year).with_month(month).with_day(day)
    }

    /// Sets the time fields together.
    #[must_use]
    pub fn with_time(self, hour: u8, minute: u8, second: u8) -> Self {
        self.with_hour(hour).with_minute(minute).with_second(second)
    }

    /// Resolves the record to a civil date-time, substituting the epoch
    /// defaults for unset fields and validating ranges.
    pub fn resolve(&self) -> DateResult<IsoDateTime> {
        let date = IsoDate::try_new(
            self.year.unwrap_or(1970),
            self.month.unwrap_or(1),
            self.day.unwrap_or(1),
        )?;
        let time = IsoTime::try_new(
            self.hour.unwrap_or(0),
            self.minute.unwrap_or(0),
            self.second.unwrap_or(0),
            self.nanosecond.unwrap_or(0),
        )?;
        Ok(IsoDateTime::new(date, time))
    }

    /// Resolves the record to a [`Timestamp`] in UTC.
    pub fn to_timestamp(&self) -> DateResult<Timestamp> {
        Timestamp::from_iso(self.resolve()?)
    }
}
