//! The calendar collaborator consumed by the rounding operations.

use crate::{
    iso::{IsoDate, IsoDateTime},
    options::CalendarField,
    timestamp::Timestamp,
    utils, DateError, DateResult, SignedDuration,
};

/// Field access and calendar-correct arithmetic over a calendar system.
///
/// The rounding and flooring operations extract field values and add
/// signed field deltas through this trait; implementations must honor
/// real calendar semantics, rolling into coarser fields on overflow and
/// accounting for month lengths and leap years. Implementations are
/// expected to be stateless or internally thread-safe.
pub trait FieldAccessor {
    /// Extracts the integer value of `field` from `timestamp`; for
    /// example, the hour-of-day in the range 0 through 23 for
    /// [`CalendarField::Hour`].
    fn field_value(&self, field: CalendarField, timestamp: Timestamp) -> i64;

    /// Adds a signed `delta` of `field` units to `timestamp` with
    /// calendar-correct rollover into coarser fields.
    fn checked_add(
        &self,
        field: CalendarField,
        delta: i64,
        timestamp: Timestamp,
    ) -> DateResult<Timestamp>;
}

/// The ISO-8601 calendar: proleptic Gregorian, interpreted in UTC.
///
/// Month and year addition constrain the day-of-month to the length of
/// the target month, so adding one month to January 31st produces the
/// last day of February. There is no timezone handling; callers that
/// need zone-local calendar fields supply their own [`FieldAccessor`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IsoCalendar;

impl IsoCalendar {
    fn add_months(&self, dt: IsoDateTime, delta: i64) -> DateResult<Timestamp> {
        let months = i64::from(dt.date.year) * 12 + i64::from(dt.date.month) - 1 + delta;
        let year = months.div_euclid(12);
        let month = (months.rem_euclid(12) + 1) as u8;
        if i32::try_from(year).is_err() {
            return Err(DateError::range().with_message("year exceeded the supported range"));
        }
        let year = year as i32;
        let max_day = utils::days_in_month(year, month);
        let day = if dt.date.day > max_day {
            #[cfg(feature = "log")]
            log::debug!(
                "constrained day {} to {} for {year}-{month:02}",
                dt.date.day,
                max_day
            );
            max_day
        } else {
            dt.date.day
        };
        let date = IsoDate::new_unchecked(year, month, day);
        Timestamp::try_new(IsoDateTime::new(date, dt.time).as_epoch_nanoseconds())
    }
}

impl FieldAccessor for IsoCalendar {
    fn field_value(&self, field: CalendarField, timestamp: Timestamp) -> i64 {
        let dt = IsoDateTime::from_epoch_nanoseconds(timestamp.epoch_nanoseconds());
        match field {
            CalendarField::Year => i64::from(dt.date.year),
            CalendarField::Month => i64::from(dt.date.month),
            CalendarField::Day => i64::from(dt.date.day),
            CalendarField::Hour => i64::from(dt.time.hour),
            CalendarField::Minute => i64::from(dt.time.minute),
            CalendarField::Second => i64::from(dt.time.second),
            CalendarField::Subsecond => i64::from(dt.time.nanosecond),
        }
    }

    fn checked_add(
        &self,
        field: CalendarField,
        delta: i64,
        timestamp: Timestamp,
    ) -> DateResult<Timestamp> {
        if delta == 0 {
            return Ok(timestamp);
        }
        match field {
            CalendarField::Year => {
                let dt = IsoDateTime::from_epoch_nanoseconds(timestamp.epoch_nanoseconds());
                self.add_months(dt, delta.checked_mul(12).ok_or(
                    DateError::range().with_message("year delta exceeded the supported range"),
                )?)
            }
            CalendarField::Month => {
                let dt = IsoDateTime::from_epoch_nanoseconds(timestamp.epoch_nanoseconds());
                self.add_months(dt, delta)
            }
            _ => {
                // The remaining fields have a fixed nanosecond length.
                let Some(unit) = field.as_nanoseconds() else {
                    return Err(DateError::assert());
                };
                let nanos = i128::from(delta) * i128::from(unit);
                timestamp.checked_add(&SignedDuration::from_nanoseconds(nanos))
            }
        }
    }
}
