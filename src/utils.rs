//! Utility date equations for the proleptic Gregorian calendar.
//!
//! The civil/epoch-day conversions below are the standard integer-only
//! equations over a calendar whose 400-year era is exactly 146097 days.

/// Returns whether the provided year is a Gregorian leap year.
pub(crate) fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns the number of days in the provided month of the provided year.
pub(crate) fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => unreachable!("month must be validated before a length lookup."),
    }
}

/// Converts a civil date to a day count relative to the Unix epoch.
pub(crate) fn epoch_days_from_civil(year: i64, month: u8, day: u8) -> i64 {
    let year = if month <= 2 { year - 1 } else { year };
    let era = year.div_euclid(400);
    let year_of_era = year - era * 400;
    let shifted_month = i64::from(if month > 2 { month - 3 } else { month + 9 });
    let day_of_year = (153 * shifted_month + 2) / 5 + i64::from(day) - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    era * 146_097 + day_of_era - 719_468
}

/// Converts a day count relative to the Unix epoch to a civil date.
pub(crate) fn civil_from_epoch_days(days: i64) -> (i32, u8, u8) {
    let shifted = days + 719_468;
    let era = shifted.div_euclid(146_097);
    let day_of_era = shifted.rem_euclid(146_097);
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
    let year = year_of_era + era * 400;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let shifted_month = (5 * day_of_year + 2) / 153;
    let day = (day_of_year - (153 * shifted_month + 2) / 5 + 1) as u8;
    let month = if shifted_month < 10 {
        shifted_month + 3
    } else {
        shifted_month - 9
    } as u8;
    ((year + i64::from(month <= 2)) as i32, month, day)
}

/// Returns the day of the week for an epoch day count, with 0 as Sunday.
pub(crate) fn epoch_days_to_week_day(days: i64) -> u8 {
    // The epoch day itself, 1970-01-01, was a Thursday.
    (days + 4).rem_euclid(7) as u8
}
