//! Mixed Julian/Gregorian astronomical calendar converter.
//!
//! Encodes civil dates to Julian day numbers with the standard
//! shifted-month polynomial and decodes them back through the classic
//! integer inversion, switching between the pure Julian leap rule and the
//! Gregorian correction at the 15 October 1582 cutover. All intermediate
//! arithmetic uses `i64` with floor division so negative (BC) years work
//! without special cases.

use crate::date::{CivilDate, CivilDateTime, DAYS_PER_MONTH};
use crate::error::CalendarError;
use crate::fracday;

/// Day number of 15 October 1582, the first day of the Gregorian calendar.
/// Decoding selects the Gregorian branch at and past this value.
pub(crate) const GREGORIAN_EPOCH: i64 = 2_299_161;

/// Largest |day number| accepted by the decoder. Chosen so the decoded year
/// always fits an `i32` and none of the intermediate products overflow.
const MAX_DAY_NUMBER: i64 = 784_000_000_000;

/// Leap-year predicate for the mixed calendar: the pure Julian rule up to
/// the reform year, the Gregorian century rule after it.
pub(crate) fn is_leap(year: i32) -> bool {
    if year > 1582 {
        (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
    } else {
        year.rem_euclid(4) == 0
    }
}

/// True once `date` is at or past the first Gregorian day (15 Oct 1582).
fn after_reform(date: CivilDate) -> bool {
    (date.year(), date.month(), date.day()) >= (1582, 10, 15)
}

fn validate(date: CivilDate) -> Result<(), CalendarError> {
    let month = date.month();
    let max_day = if month == 2 && is_leap(date.year()) {
        29
    } else {
        DAYS_PER_MONTH[month as usize]
    };
    if date.day() > max_day {
        return Err(CalendarError::InvalidDay {
            day: date.day(),
            month,
            max_day,
        });
    }
    if date.year() == 1582 && month == 10 && (5..=14).contains(&date.day()) {
        return Err(CalendarError::GregorianGap {
            year: date.year(),
            month,
            day: date.day(),
        });
    }
    Ok(())
}

/// Converts a civil date to its integer Julian day number (midnight-based).
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDay`] if the day does not exist in the
/// date's month, or [`CalendarError::GregorianGap`] for the ten days
/// removed by the 1582 reform.
pub(crate) fn day_number(date: CivilDate) -> Result<i64, CalendarError> {
    validate(date)?;

    // January and February count as months 13 and 14 of the previous year.
    let (y, m) = if date.month() > 2 {
        (i64::from(date.year()), i64::from(date.month()))
    } else {
        (i64::from(date.year()) - 1, i64::from(date.month()) + 12)
    };

    // floor(365.25 * (y + 4716)) and floor(30.6001 * (m + 1)), kept exact
    // in integer arithmetic.
    let mut jd = (1461 * (y + 4716)).div_euclid(4)
        + (306_001 * (m + 1)).div_euclid(10_000)
        + i64::from(date.day())
        - 1524;

    if after_reform(date) {
        let a = y.div_euclid(100);
        jd += 2 - a + a.div_euclid(4);
    }
    Ok(jd)
}

/// Converts an integer Julian day number back to a civil date.
///
/// # Errors
///
/// Returns [`CalendarError::DayNumberOutOfRange`] if `n` lies outside the
/// convertible range.
pub(crate) fn date_from_day_number(n: i64) -> Result<CivilDate, CalendarError> {
    if !(-MAX_DAY_NUMBER..=MAX_DAY_NUMBER).contains(&n) {
        return Err(CalendarError::DayNumberOutOfRange { day_number: n });
    }

    let a = if n >= GREGORIAN_EPOCH {
        // alpha = floor((n - 1867216.25) / 36524.25)
        let alpha = (4 * n - 7_468_865).div_euclid(146_097);
        n + 1 + alpha - alpha.div_euclid(4)
    } else {
        n
    };
    let b = a + 1524;
    // c = floor((b - 122.1) / 365.25)
    let c = (20 * b - 2442).div_euclid(7305);
    // d = floor(365.25 * c)
    let d = (1461 * c).div_euclid(4);
    // e = floor((b - d) / 30.6001)
    let e = (10_000 * (b - d)).div_euclid(306_001);

    let day = b - d - (306_001 * e).div_euclid(10_000);
    let month = if e < 14 { e - 1 } else { e - 13 };
    let year = if month > 2 { c - 4716 } else { c - 4715 };

    let year =
        i32::try_from(year).map_err(|_| CalendarError::DayNumberOutOfRange { day_number: n })?;
    CivilDate::new(year, month as u8, day as u8)
}

/// Converts a civil date-time to a fractional Julian day (noon-based).
///
/// The result carries the epsilon nudge that makes the encoding decode back
/// to the same civil fields at second resolution.
///
/// # Errors
///
/// Same conditions as [`day_number`].
pub(crate) fn fractional_day(datetime: CivilDateTime) -> Result<f64, CalendarError> {
    let n = day_number(datetime.date())?;
    Ok(fracday::nudge(n as f64 - 0.5 + fracday::day_fraction(datetime)))
}

/// Converts a fractional Julian day back to a civil date-time.
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
