//! Civil date and date-time value types with month tables.

use crate::error::CalendarError;

/// Number of days in each standard month (index 0 unused, index 1 = January,
/// ..., index 12 = December). February is listed with 28 days; the mixed
/// Julian/Gregorian converter applies its leap rule on top of this table.
pub(crate) const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Day-of-year on which each standard month starts in a 365-day year
/// (index 0 unused, index 1 = January starts at day-of-year 1, ...).
pub(crate) const MONTH_START_DOY: [u16; 13] =
    [0, 1, 32, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335];

/// A civil calendar date with astronomical year numbering.
///
/// Year 0 exists (it is the historical 1 BC) and negative years count
/// backward from it. Which days actually exist for a given `(year, month)`
/// depends on the calendar; this type only enforces the bounds common to
/// every supported calendar (month 1..=12, day 1..=31). Each converter
/// applies its own month-length rules on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CivilDate {
    year: i32,
    month: u8,
    day: u8,
}

impl PartialOrd for CivilDate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CivilDate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day))
    }
}

impl CivilDate {
    /// Creates a new `CivilDate` from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
    /// Returns [`CalendarError::InvalidDay`] if `day` is not in 1..=31.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        if !(1..=31).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                max_day: 31,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Returns the year (astronomical numbering, year 0 = 1 BC).
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns `(month, day)` as a tuple.
    pub fn month_day(self) -> (u8, u8) {
        (self.month, self.day)
    }

    /// Attaches a time of day, producing a [`CivilDateTime`].
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidHour`], [`CalendarError::InvalidMinute`],
    /// or [`CalendarError::InvalidSecond`] for out-of-range clock fields.
    pub fn and_hms(self, hour: u8, minute: u8, second: u8) -> Result<CivilDateTime, CalendarError> {
        CivilDateTime::new(self, Some(hour), Some(minute), Some(second))
    }
}

impl std::fmt::Display for CivilDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// A civil date with an optional time of day.
///
/// Each clock field is independently optional. Missing fields encode as the
/// calendar zero (00:00:00); decoding always fills in all three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CivilDateTime {
    date: CivilDate,
    hour: Option<u8>,
    minute: Option<u8>,
    second: Option<u8>,
}

impl CivilDateTime {
    /// Creates a new `CivilDateTime` from a date and optional clock fields.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidHour`] if `hour` is not in 0..=23,
    /// [`CalendarError::InvalidMinute`] if `minute` is not in 0..=59, or
    /// [`CalendarError::InvalidSecond`] if `second` is not in 0..=59.
    pub fn new(
        date: CivilDate,
        hour: Option<u8>,
        minute: Option<u8>,
        second: Option<u8>,
    ) -> Result<Self, CalendarError> {
        if let Some(hour) = hour {
            if hour > 23 {
                return Err(CalendarError::InvalidHour { hour });
            }
        }
        if let Some(minute) = minute {
            if minute > 59 {
                return Err(CalendarError::InvalidMinute { minute });
            }
        }
        if let Some(second) = second {
            if second > 59 {
                return Err(CalendarError::InvalidSecond { second });
            }
        }
        Ok(Self {
            date,
            hour,
            minute,
            second,
        })
    }

    /// Returns the date part.
    pub fn date(self) -> CivilDate {
        self.date
    }

    /// Returns the hour (0..=23) if one was supplied or computed.
    pub fn hour(self) -> Option<u8> {
        self.hour
    }

    /// Returns the minute (0..=59) if one was supplied or computed.
    pub fn minute(self) -> Option<u8> {
        self.minute
    }

    /// Returns the second (0..=59) if one was supplied or computed.
    pub fn second(self) -> Option<u8> {
        self.second
    }
}

impl From<CivilDate> for CivilDateTime {
    fn from(date: CivilDate) -> Self {
        Self {
            date,
            hour: None,
            minute: None,
            second: None,
        }
    }
}

impl std::fmt::Display for CivilDateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.hour.is_none() && self.minute.is_none() && self.second.is_none() {
            return write!(f, "{}", self.date);
        }
        write!(
            f,
            "{} {:02}:{:02}:{:02}",
            self.date,
            self.hour.unwrap_or(0),
            self.minute.unwrap_or(0),
            self.second.unwrap_or(0)
        )
    }
}
