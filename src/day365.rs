//! Synthetic 365-day calendar: standard month lengths, February always 28
//! days, no leap day under any circumstance, no cutover. Negative years
//! mirror positive ones about day number 0 = year 0, 1 January.

use crate::date::{CivilDate, CivilDateTime, DAYS_PER_MONTH, MONTH_START_DOY};
use crate::error::CalendarError;
use crate::fracday;

const DAYS_PER_YEAR: i64 = 365;

/// Converts a civil date to its 365-day calendar day number.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDay`] if the day does not exist in the
/// month (February caps at 28, always).
pub(crate) fn day_number(date: CivilDate) -> Result<i64, CalendarError> {
    let month = date.month();
    let max_day = DAYS_PER_MONTH[month as usize];
    if date.day() > max_day {
        return Err(CalendarError::InvalidDay {
            day: date.day(),
            month,
            max_day,
        });
    }
    let doy0 = i64::from(MONTH_START_DOY[month as usize]) + i64::from(date.day()) - 2;
    let magnitude = i64::from(date.year().unsigned_abs()) * DAYS_PER_YEAR + doy0;
    Ok(if date.year() < 0 { -magnitude } else { magnitude })
}

/// Converts a 365-day calendar day number back to a civil date.
///
/// Walks the month-length table until the in-year remainder fits within
/// the current month.
///
/// # Errors
///
/// Returns [`CalendarError::DayNumberOutOfRange`] if the year does not fit
/// an `i32`.
pub(crate) fn date_from_day_number(n: i64) -> Result<CivilDate, CalendarError> {
    let out_of_range = CalendarError::DayNumberOutOfRange { day_number: n };
    let year = i32::try_from(n / DAYS_PER_YEAR).map_err(|_| out_of_range.clone())?;
    let mut remainder = (n.checked_abs().ok_or(out_of_range)? % DAYS_PER_YEAR) as u16;
    let mut month = 1u8;
    while remainder >= u16::from(DAYS_PER_MONTH[month as usize]) {
        remainder -= u16::from(DAYS_PER_MONTH[month as usize]);
        month += 1;
    }
    CivilDate::new(year, month, remainder as u8 + 1)
}

/// Converts a civil date-time to a fractional 365-day value (noon-based,
/// consistent with the Julian/Gregorian fractional form).
///
/// # Errors
///
/// Same conditions as [`day_number`].
pub(crate) fn fractional_day(datetime: CivilDateTime) -> Result<f64, CalendarError> {
    let n = day_number(datetime.date())?;
    Ok(fracday::nudge(n as f64 - 0.5 + fracday::day_fraction(datetime)))
}

/// Converts a fractional 365-day value back to a civil date-time.
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
