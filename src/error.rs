//! Error types for the julday crate.

/// Error type for all fallible operations in the julday crate.
///
/// This enum covers validation failures for civil date and time-of-day
/// fields, the nonexistent days of the Gregorian reform, malformed
/// CF-style units strings, and day numbers outside the convertible range.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the number of days in the given
    /// month for the selected calendar.
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The maximum valid day for the given month.
        max_day: u8,
    },

    /// Returned when an hour value is outside the valid range 0..=23.
    #[error("invalid hour: {hour} (must be 0..=23)")]
    InvalidHour {
        /// The invalid hour value that was provided.
        hour: u8,
    },

    /// Returned when a minute value is outside the valid range 0..=59.
    #[error("invalid minute: {minute} (must be 0..=59)")]
    InvalidMinute {
        /// The invalid minute value that was provided.
        minute: u8,
    },

    /// Returned when a second value is outside the valid range 0..=59.
    #[error("invalid second: {second} (must be 0..=59)")]
    InvalidSecond {
        /// The invalid second value that was provided.
        second: u8,
    },

    /// Returned when a date falls in the ten days (5–14 October 1582)
    /// skipped by the Gregorian reform. These dates never existed in the
    /// mixed Julian/Gregorian civil calendar.
    #[error("date {year:04}-{month:02}-{day:02} falls in the Gregorian reform gap (5-14 Oct 1582)")]
    GregorianGap {
        /// Year of the nonexistent date.
        year: i32,
        /// Month of the nonexistent date.
        month: u8,
        /// Day of the nonexistent date.
        day: u8,
    },

    /// Returned when a units string does not match
    /// `"<unit> since <YYYY-MM-DD>[ <hh:mm:ss>]"`.
    #[error("malformed units string '{input}': {reason}")]
    MalformedUnits {
        /// The units string that failed to parse.
        input: String,
        /// Description of what was wrong with it.
        reason: String,
    },

    /// Returned when a day number lies outside the range this crate can
    /// convert back to a civil date without overflowing the year field.
    #[error("day number {day_number} is outside the convertible range")]
    DayNumberOutOfRange {
        /// The offending day number.
        day_number: i64,
    },

    /// Returned when a fractional day value is NaN or infinite.
    #[error("fractional day value {value} is not finite")]
    NonFiniteValue {
        /// The offending value.
        value: f64,
    },
}
