//! Pattern-based rendering of timestamps.
//!
//! A [`DateTimePattern`] is parsed from a template of typed field
//! tokens (`"MMM d, yyyy"`, `"HH:mm"`) and rendered through
//! [`writeable::Writeable`]. Names are English and times are UTC;
//! locale-aware rendering and timezone names are the host platform
//! formatter's job, not this crate's.

use crate::{iso::IsoDateTime, DateError, DateResult, Timestamp};
use alloc::{string::String, vec::Vec};
use core::fmt::{self, Write};
use core::str::FromStr;
use writeable::Writeable;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const QUARTER_NAMES: [&str; 4] = [
    "1st quarter",
    "2nd quarter",
    "3rd quarter",
    "4th quarter",
];

/// A single typed field of a date-time pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum PatternField {
    /// `y` — the year without padding.
    Year,
    /// `yy` — the year's final two digits, zero padded.
    YearTwoDigit,
    /// `yyyy` — the year, zero padded to four digits.
    YearPadded,
    /// `Q` — the quarter of the year.
    Quarter,
    /// `QQ` — the quarter, zero padded.
    QuarterPadded,
    /// `QQQ` — the quarter with a `Q` prefix.
    QuarterAbbrev,
    /// `QQQQ` — the quarter spelled out.
    QuarterWide,
    /// `M` — the numeric month without padding.
    Month,
    /// `MM` — the numeric month, zero padded.
    MonthPadded,
    /// `MMM` — the short month name.
    MonthAbbrev,
    /// `MMMM` — the full month name.
    MonthWide,
    /// `MMMMM` — the narrow month name.
    MonthNarrow,
    /// `d` — the day of the month without padding.
    Day,
    /// `dd` — the day of the month, zero padded.
    DayPadded,
    /// `E` — the short weekday name.
    WeekdayAbbrev,
    /// `EEEE` — the full weekday name.
    WeekdayWide,
    /// `EEEEE` — the narrow weekday name.
    WeekdayNarrow,
    /// `EEEEEE` — the two-letter weekday name.
    WeekdayShort,
    /// `h` — the 12-hour hour without padding.
    Hour12,
    /// `hh` — the 12-hour hour, zero padded.
    Hour12Padded,
    /// `H` — the 24-hour hour without padding.
    Hour24,
    /// `HH` — the 24-hour hour, zero padded.
    Hour24Padded,
    /// `a` — AM or PM.
    DayPeriod,
    /// `m` — the minute without padding.
    Minute,
    /// `mm` — the minute, zero padded.
    MinutePadded,
    /// `s` — the second without padding.
    Second,
    /// `ss` — the second, zero padded.
    SecondPadded,
    /// `SSS` — the millisecond, zero padded to three digits.
    Millisecond,
    /// A literal separator: `:`, space, or `,`.
    Literal(char),
}

impl PatternField {
    fn from_run(symbol: char, length: usize) -> DateResult<Self> {
        let field = match (symbol, length) {
            ('y', 1) => Self::Year,
            ('y', 2) => Self::YearTwoDigit,
            ('y', 4) => Self::YearPadded,
            ('Q', 1) => Self::Quarter,
            ('Q', 2) => Self::QuarterPadded,
            ('Q', 3) => Self::QuarterAbbrev,
            ('Q', 4) => Self::QuarterWide,
            ('M', 1) => Self::Month,
            ('M', 2) => Self::MonthPadded,
            ('M', 3) => Self::MonthAbbrev,
            ('M', 4) => Self::MonthWide,
            ('M', 5) => Self::MonthNarrow,
            ('d', 1) => Self::Day,
            ('d', 2) => Self::DayPadded,
            ('E', 1) => Self::WeekdayAbbrev,
            ('E', 4) => Self::WeekdayWide,
            ('E', 5) => Self::WeekdayNarrow,
            ('E', 6) => Self::WeekdayShort,
            ('h', 1) => Self::Hour12,
            ('h', 2) => Self::Hour12Padded,
            ('H', 1) => Self::Hour24,
            ('H', 2) => Self::Hour24Padded,
            ('a', 1) => Self::DayPeriod,
            ('m', 1) => Self::Minute,
            ('m', 2) => Self::MinutePadded,
            ('s', 1) => Self::Second,
            ('s', 2) => Self::SecondPadded,
            ('S', 3) => Self::Millisecond,
            _ => {
                return Err(DateError::syntax()
                    .with_message("unrecognized field in a date-time pattern"))
            }
        };
        Ok(field)
    }
}

/// A parsed date-time pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTimePattern {
    fields: Vec<PatternField>,
}

impl DateTimePattern {
    /// Creates a pattern directly from typed fields.
    #[must_use]
    pub fn from_fields(fields: Vec<PatternField>) -> Self {
        Self { fields }
    }

    /// Returns a [`Writeable`] rendering of `timestamp` under this
    /// pattern, interpreted in UTC.
    #[must_use]
    pub fn format(&self, timestamp: Timestamp) -> FormattedDateTime<'_> {
        FormattedDateTime {
            pattern: self,
            datetime: timestamp.as_iso(),
        }
    }

    /// Renders `timestamp` under this pattern into an owned string.
    #[must_use]
    pub fn apply(&self, timestamp: Timestamp) -> String {
        self.format(timestamp).write_to_string().into_owned()
    }
}

impl FromStr for DateTimePattern {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields = Vec::new();
        let mut chars = s.chars().peekable();
        while let Some(symbol) = chars.next() {
            match symbol {
                ':' | ' ' | ',' => fields.push(PatternField::Literal(symbol)),
                _ => {
                    let mut length = 1;
                    while chars.peek() == Some(&symbol) {
                        chars.next();
                        length += 1;
                    }
                    fields.push(PatternField::from_run(symbol, length)?);
                }
            }
        }
        Ok(Self { fields })
    }
}

/// A timestamp paired with the pattern rendering it.
#[derive(Debug, Clone, Copy)]
pub struct FormattedDateTime<'a> {
    pattern: &'a DateTimePattern,
    datetime: IsoDateTime,
}

impl Writeable for FormattedDateTime<'_> {
    fn write_to<W: Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        let date = self.datetime.date;
        let time = self.datetime.time;
        let month = usize::from(date.month) - 1;
        let weekday = usize::from(date.week_day());
        let quarter = month / 3;
        let hour12 = match time.hour % 12 {
            0 => 12,
            hour => hour,
        };
        for field in &self.pattern.fields {
            match field {
                PatternField::Year => write!(sink, "{}", date.year)?,
                PatternField::YearTwoDigit => write!(sink, "{:02}", date.year.rem_euclid(100))?,
                PatternField::YearPadded => write!(sink, "{:04}", date.year)?,
                PatternField::Quarter => write!(sink, "{}", quarter + 1)?,
                PatternField::QuarterPadded => write!(sink, "{:02}", quarter + 1)?,
                PatternField::QuarterAbbrev => write!(sink, "Q{}", quarter + 1)?,
                PatternField::QuarterWide => sink.write_str(QUARTER_NAMES[quarter])?,
                PatternField::Month => write!(sink, "{}", date.month)?,
                PatternField::MonthPadded => write!(sink, "{:02}", date.month)?,
                PatternField::MonthAbbrev => sink.write_str(&MONTH_NAMES[month][..3])?,
                PatternField::MonthWide => sink.write_str(MONTH_NAMES[month])?,
                PatternField::MonthNarrow => sink.write_str(&MONTH_NAMES[month][..1])?,
                PatternField::Day => write!(sink, "{}", date.day)?,
                PatternField::DayPadded => write!(sink, "{:02}", date.day)?,
                PatternField::WeekdayAbbrev => sink.write_str(&WEEKDAY_NAMES[weekday][..3])?,
                PatternField::WeekdayWide => sink.write_str(WEEKDAY_NAMES[weekday])?,
                PatternField::WeekdayNarrow => sink.write_str(&WEEKDAY_NAMES[weekday][..1])?,
                PatternField::WeekdayShort => sink.write_str(&WEEKDAY_NAMES[weekday][..2])?,
                PatternField::Hour12 => write!(sink, "{hour12}")?,
                PatternField::Hour12Padded => write!(sink, "{hour12:02}")?,
                PatternField::Hour24 => write!(sink, "{}", time.hour)?,
                PatternField::Hour24Padded => write!(sink, "{:02}", time.hour)?,
                PatternField::DayPeriod => {
                    sink.write_str(if time.hour < 12 { "AM" } else { "PM" })?;
                }
                PatternField::Minute => write!(sink, "{}", time.minute)?,
                PatternField::MinutePadded => write!(sink, "{:02}", time.minute)?,
                PatternField::Second => write!(sink, "{}", time.second)?,
                PatternField::SecondPadded => write!(sink, "{:02}", time.second)?,
                PatternField::Millisecond => write!(sink, "{:03}", time.millisecond())?,
                PatternField::Literal(symbol) => sink.write_char(*symbol)?,
            }
        }
        Ok(())
    }
}

writeable::impl_display_with_writeable!(FormattedDateTime<'_>);
