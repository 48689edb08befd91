//! Synthetic 360-day calendar: twelve 30-day months, no cutover, no leap
//! rule. Negative years mirror positive ones about day number 0 = year 0,
//! 1 January.

use crate::date::{CivilDate, CivilDateTime};
use crate::error::CalendarError;
use crate::fracday;

const DAYS_PER_YEAR: i64 = 360;

/// Converts a civil date to its 360-day calendar day number.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDay`] if `day` exceeds 30.
pub(crate) fn day_number(date: CivilDate) -> Result<i64, CalendarError> {
    if date.day() > 30 {
        return Err(CalendarError::InvalidDay {
            day: date.day(),
            month: date.month(),
            max_day: 30,
        });
    }
    let magnitude = i64::from(date.year().unsigned_abs()) * DAYS_PER_YEAR
        + i64::from(date.month() - 1) * 30
        + i64::from(date.day() - 1);
    Ok(if date.year() < 0 { -magnitude } else { magnitude })
}

/// Converts a 360-day calendar day number back to a civil date.
///
/// # Errors
///
/// Returns [`CalendarError::DayNumberOutOfRange`] if the year does not fit
/// an `i32`.
pub(crate) fn date_from_day_number(n: i64) -> Result<CivilDate, CalendarError> {
    let out_of_range = CalendarError::DayNumberOutOfRange { day_number: n };
    let year = i32::try_from(n / DAYS_PER_YEAR).map_err(|_| out_of_range.clone())?;
    let remainder = n.checked_abs().ok_or(out_of_range)? % DAYS_PER_YEAR;
    let month = (remainder / 30) as u8 + 1;
    let day = (remainder % 30) as u8 + 1;
    CivilDate::new(year, month, day)
}

/// Converts a civil date-time to a fractional 360-day value (noon-based,
/// consistent with the Julian/Gregorian fractional form).
///
/// # Errors
///
/// Same conditions as [`day_number`].
pub(crate) fn fractional_day(datetime: CivilDateTime) -> Result<f64, CalendarError> {
    let n = day_number(datetime.date())?;
    Ok(fracday::nudge(n as f64 - 0.5 + fracday::day_fraction(datetime)))
}

/// Converts a fractional 360-day value back to a civil date-time.
///
/// # Errors
///
/// Returns [`CalendarError::NonFiniteValue`] for NaN/infinite input and
/// [`CalendarError::DayNumberOutOfRange`] outside the convertible range.
pub(crate) fn datetime_from_fractional(value: f64) -> Result<CivilDateTime, CalendarError> {
    let split = fracday::split_noon_aligned(value)?;
    let date = date_from_day_number(split.day_number)?;
    CivilDateTime::new(date, Some(split.hour), Some(split.minute), Some(split.second))
}
