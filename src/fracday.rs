//! Fractional-day codec shared by all calendar families.
//!
//! Converts between hour/minute/second and the sub-day fraction of a
//! fractional Julian day, including the 60-second carry cascade applied on
//! decode. Also owns the epsilon-nudging helper that keeps fractional
//! encodings reconstructible at second resolution.

use crate::date::CivilDateTime;
use crate::error::CalendarError;

/// The relative-to-magnitude epsilon used to nudge fractional encodings.
///
/// Without this correction the multiply/add chain of the fractional
/// polynomial loses the least-significant bit needed to reconstruct the
/// same civil fields at second resolution.
pub(crate) fn eps_of(value: f64) -> f64 {
    (f64::EPSILON * value.abs()).max(f64::EPSILON)
}

/// Applies the positive epsilon correction to an encoded value.
pub(crate) fn nudge(value: f64) -> f64 {
    value + eps_of(value)
}

/// Encodes the clock fields of `datetime` as a day fraction in [0, 1).
///
/// Missing fields count as zero.
pub(crate) fn day_fraction(datetime: CivilDateTime) -> f64 {
    f64::from(datetime.hour().unwrap_or(0)) / 24.0
        + f64::from(datetime.minute().unwrap_or(0)) / 1440.0
        + f64::from(datetime.second().unwrap_or(0)) / 86400.0
}

/// Result of splitting a noon-aligned fractional day: the midnight-aligned
/// integer day number plus normalized clock fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DaySplit {
    pub day_number: i64,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

/// Splits a noon-aligned fractional day into a day number and clock fields.
///
/// The `+0.5` shift realigns the noon-based fractional value to midnight
/// before the integer/fraction split. Seconds that round up to 60 carry
/// into the minute, then the hour, then the day number; the cascade runs
/// all the way so a value just below midnight lands on the next day at
/// 00:00:00.
///
/// # Errors
///
/// Returns [`CalendarError::NonFiniteValue`] if `value` is NaN or infinite.
pub(crate) fn split_noon_aligned(value: f64) -> Result<DaySplit, CalendarError> {
    if !value.is_finite() {
        return Err(CalendarError::NonFiniteValue { value });
    }
    let shifted = value + 0.5;
    let mut day_number = shifted.floor() as i64;
    let frac = shifted - shifted.floor();

    let mut hour = ((frac * 24.0).floor() as i64).clamp(0, 23) as u8;
    let mut remaining = frac - f64::from(hour) / 24.0;
    let mut minute = ((remaining * 1440.0).floor() as i64).clamp(0, 59) as u8;
    remaining -= f64::from(minute) / 1440.0;
    let mut second = ((remaining * 86400.0).round() as i64).max(0);

    if second >= 60 {
        second = 0;
        minute += 1;
    }
    if minute >= 60 {
        minute = 0;
        hour += 1;
    }
    if hour >= 24 {
        hour = 0;
        day_number += 1;
    }

    Ok(DaySplit {
        day_number,
        hour,
        minute,
        second: second as u8,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::CivilDate;
    use approx::assert_relative_eq;

    fn dt(hour: u8, minute: u8, second: u8) -> CivilDateTime {
        CivilDate::new(2000, 1, 1)
            .unwrap()
            .and_hms(hour, minute, second)
            .unwrap()
    }

    #[test]
    fn fraction_of_midnight_is_zero() {
        assert_eq!(day_fraction(dt(0, 0, 0)), 0.0);
    }

    #[test]
    fn fraction_of_noon_is_half() {
        assert_relative_eq!(day_fraction(dt(12, 0, 0)), 0.5);
    }

    #[test]
    fn fraction_of_last_second() {
        assert_relative_eq!(
            day_fraction(dt(23, 59, 59)),
            86399.0 / 86400.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn missing_fields_count_as_zero() {
        let date = CivilDate::new(2000, 1, 1).unwrap();
        let partial = CivilDateTime::new(date, Some(6), None, None).unwrap();
        assert_relative_eq!(day_fraction(partial), 0.25);
    }

    #[test]
    fn eps_is_relative_to_magnitude() {
        assert_eq!(eps_of(0.0), f64::EPSILON);
        assert_eq!(eps_of(1.0), f64::EPSILON);
        let big = 2_451_545.0;
        assert_eq!(eps_of(big), f64::EPSILON * big);
        assert_eq!(eps_of(-big), f64::EPSILON * big);
        assert!(nudge(big) > big);
    }

    #[test]
    fn split_noon_starts_day() {
        // A noon-aligned value of exactly n corresponds to day n, 12:00:00.
        let split = split_noon_aligned(100.0).unwrap();
        assert_eq!(split.day_number, 100);
        assert_eq!((split.hour, split.minute, split.second), (12, 0, 0));
    }

    #[test]
    fn split_midnight_boundary() {
        let split = split_noon_aligned(99.5).unwrap();
        assert_eq!(split.day_number, 100);
        assert_eq!((split.hour, split.minute, split.second), (0, 0, 0));
    }

    #[test]
    fn split_round_trips_every_clock_hour() {
        for hour in 0..24u8 {
            let value = -0.5 + f64::from(hour) / 24.0;
            let split = split_noon_aligned(nudge(value)).unwrap();
            assert_eq!(split.day_number, 0, "hour {hour}");
            assert_eq!(split.hour, hour);
            assert_eq!((split.minute, split.second), (0, 0));
        }
    }

    #[test]
    fn second_rounds_up_to_sixty_and_carries() {
        // 00:00:59.9996 rounds to the next minute.
        let value = -0.5 + 59.9996 / 86400.0;
        let split = split_noon_aligned(value).unwrap();
        assert_eq!(split.day_number, 0);
        assert_eq!((split.hour, split.minute, split.second), (0, 1, 0));
    }

    #[test]
    fn carry_cascades_across_the_day_boundary() {
        // 23:59:59.9996 lands on the next day at 00:00:00.
        let value = -0.5 + 86399.9996 / 86400.0;
        let split = split_noon_aligned(value).unwrap();
        assert_eq!(split.day_number, 1);
        assert_eq!((split.hour, split.minute, split.second), (0, 0, 0));
    }

    #[test]
    fn carry_cascades_across_the_hour_boundary() {
        // 00:59:59.9996 lands on 01:00:00 of the same day.
        let value = -0.5 + 3599.9996 / 86400.0;
        let split = split_noon_aligned(value).unwrap();
        assert_eq!(split.day_number, 0);
        assert_eq!((split.hour, split.minute, split.second), (1, 0, 0));
    }

    #[test]
    fn negative_values_split_correctly() {
        let split = split_noon_aligned(-404.25).unwrap();
        assert_eq!(split.day_number, -404);
        assert_eq!((split.hour, split.minute, split.second), (6, 0, 0));
    }

    #[test]
    fn split_compares_as_a_whole() {
        let a = split_noon_aligned(100.0).unwrap();
        let b = split_noon_aligned(100.0).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, split_noon_aligned(101.0).unwrap());
    }

    #[test]
    fn non_finite_rejected() {
        assert!(matches!(
            split_noon_aligned(f64::NAN).unwrap_err(),
            CalendarError::NonFiniteValue { .. }
        ));
        assert!(matches!(
            split_noon_aligned(f64::INFINITY).unwrap_err(),
            CalendarError::NonFiniteValue { .. }
        ));
    }
}
