//! Calendar dispatcher: the public conversion API.
//!
//! Every function takes the calendar as an explicit parameter and pattern
//! matches to the owning converter; there is no ambient calendar state.

use crate::date::{CivilDate, CivilDateTime};
use crate::error::CalendarError;
use crate::kind::CalendarKind;
use crate::units::UnitsSpec;
use crate::{day360, day365, julian, lilian};

/// Converts a civil date to its integer day number under `kind`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDay`] if the day does not exist in the
/// date's month under `kind`, or [`CalendarError::GregorianGap`] for the
/// ten days removed by the 1582 reform (Julian/Gregorian and Lilian only).
pub fn to_day_number(date: CivilDate, kind: CalendarKind) -> Result<i64, CalendarError> {
    match kind {
        CalendarKind::JulianGregorian => julian::day_number(date),
        CalendarKind::Lilian => lilian::day_number(date),
        CalendarKind::Fixed360 => day360::day_number(date),
        CalendarKind::Fixed365 => day365::day_number(date),
    }
}

/// Converts an integer day number back to a civil date under `kind`.
///
/// # Errors
///
/// Returns [`CalendarError::DayNumberOutOfRange`] if `n` lies outside the
/// calendar's convertible range.
pub fn from_day_number(n: i64, kind: CalendarKind) -> Result<CivilDate, CalendarError> {
    match kind {
        CalendarKind::JulianGregorian => julian::date_from_day_number(n),
        CalendarKind::Lilian => lilian::date_from_day_number(n),
        CalendarKind::Fixed360 => day360::date_from_day_number(n),
        CalendarKind::Fixed365 => day365::date_from_day_number(n),
    }
}

/// Converts a civil date-time to a fractional day value under `kind`.
///
/// Missing clock fields encode as 00:00:00. The result is noon-based for
/// the Julian/Gregorian family and carries the epsilon nudge that makes it
/// decode back to the same civil fields at second resolution.
///
/// # Errors
///
/// Same conditions as [`to_day_number`].
pub fn to_fractional_day(datetime: CivilDateTime, kind: CalendarKind) -> Result<f64, CalendarError> {
    match kind {
        CalendarKind::JulianGregorian => julian::fractional_day(datetime),
        CalendarKind::Lilian => lilian::fractional_day(datetime),
        CalendarKind::Fixed360 => day360::fractional_day(datetime),
        CalendarKind::Fixed365 => day365::fractional_day(datetime),
    }
}

/// Converts a fractional day value back to a civil date-time under `kind`.
///
/// When `units` is given, `value` is an offset in the units' counting unit
/// relative to the units' reference date; it is resolved to an absolute
/// fractional day under the same `kind` before decoding. Decoding always
/// fills in all three clock fields, with the 60-second carry cascade
/// applied.
///
/// # Errors
///
/// Returns [`CalendarError::NonFiniteValue`] for NaN/infinite values,
/// [`CalendarError::DayNumberOutOfRange`] outside the calendar's
/// convertible range, and any error from encoding the units reference.
pub fn from_fractional_day(
    value: f64,
    kind: CalendarKind,
    units: Option<&UnitsSpec>,
) -> Result<CivilDateTime, CalendarError> {
    let absolute = match units {
        Some(spec) => spec.resolve(value, kind)?,
        None => value,
    };
    match kind {
        CalendarKind::JulianGregorian => julian::datetime_from_fractional(absolute),
        CalendarKind::Lilian => lilian::datetime_from_fractional(absolute),
        CalendarKind::Fixed360 => day360::datetime_from_fractional(absolute),
        CalendarKind::Fixed365 => day365::datetime_from_fractional(absolute),
    }
}
