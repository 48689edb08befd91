//! Lilian day count: an affine offset over the mixed Julian/Gregorian
//! converter, with day 1 = 15 October 1582 (the first Gregorian day).

use crate::date::{CivilDate, CivilDateTime};
use crate::error::CalendarError;
use crate::julian;

/// Integer offset between Julian and Lilian day numbers.
pub(crate) const LILIAN_OFFSET: i64 = 2_299_160;

/// Fractional offset; half a day smaller so the Lilian fractional value of
/// a midnight is the whole Lilian day number.
pub(crate) const LILIAN_FRACTIONAL_OFFSET: f64 = 2_299_159.5;

/// Converts a civil date to its Lilian day number.
///
/// # Errors
///
/// Same conditions as the Julian/Gregorian converter.
pub(crate) fn day_number(date: CivilDate) -> Result<i64, CalendarError> {
    Ok(julian::day_number(date)? - LILIAN_OFFSET)
}

/// Converts a Lilian day number back to a civil date.
///
/// # Errors
///
/// Returns [`CalendarError::DayNumberOutOfRange`] if `n` lies outside the
/// convertible range.
pub(crate) fn date_from_day_number(n: i64) -> Result<CivilDate, CalendarError> {
    let jdn = n
        .checked_add(LILIAN_OFFSET)
        .ok_or(CalendarError::DayNumberOutOfRange { day_number: n })?;
    julian::date_from_day_number(jdn)
}

/// Converts a civil date-time to a fractional Lilian day.
///
/// # Errors
///
/// Same conditions as the Julian/Gregorian converter.
pub(crate) fn fractional_day(datetime: CivilDateTime) -> Result<f64, CalendarError> {
    Ok(julian::fractional_day(datetime)? - LILIAN_FRACTIONAL_OFFSET)
}

/// Converts a fractional Lilian day back to a civil date-time.
///
/// # Errors
///
/// Same conditions as the Julian/Gregorian converter.
pub(crate) fn datetime_from_fractional(value: f64) -> Result<CivilDateTime, CalendarError> {
    julian::datetime_from_fractional(value + LILIAN_FRACTIONAL_OFFSET)
}
