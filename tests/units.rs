use julday::{CalendarError, CalendarKind, CivilDate, UnitsSpec, from_fractional_day};

fn date(year: i32, month: u8, day: u8) -> CivilDate {
    CivilDate::new(year, month, day).unwrap()
}

fn decode(value: f64, units: &str, kind: CalendarKind) -> julday::CivilDateTime {
    let spec = UnitsSpec::parse(units).unwrap();
    from_fractional_day(value, kind, Some(&spec)).unwrap()
}

#[test]
fn zero_offset_decodes_to_the_reference() {
    let dt = decode(0.0, "days since 1990-01-01", CalendarKind::JulianGregorian);
    assert_eq!(dt.date(), date(1990, 1, 1));
    assert_eq!(
        (dt.hour(), dt.minute(), dt.second()),
        (Some(0), Some(0), Some(0))
    );
}

#[test]
fn zero_offset_preserves_a_reference_time_of_day() {
    let dt = decode(
        0.0,
        "days since 1990-01-01 06:30:15",
        CalendarKind::JulianGregorian,
    );
    assert_eq!(dt.date(), date(1990, 1, 1));
    assert_eq!(
        (dt.hour(), dt.minute(), dt.second()),
        (Some(6), Some(30), Some(15))
    );
}

#[test]
fn half_day_offset_is_noon() {
    let dt = decode(0.5, "days since 1900-01-01", CalendarKind::JulianGregorian);
    assert_eq!(dt.date(), date(1900, 1, 1));
    assert_eq!(
        (dt.hour(), dt.minute(), dt.second()),
        (Some(12), Some(0), Some(0))
    );
}

#[test]
fn each_unit_scales_to_days() {
    for (units, value) in [
        ("days since 1970-01-01", 1.0),
        ("hours since 1970-01-01", 24.0),
        ("minutes since 1970-01-01", 1440.0),
        ("seconds since 1970-01-01", 86_400.0),
    ] {
        let dt = decode(value, units, CalendarKind::JulianGregorian);
        assert_eq!(dt.date(), date(1970, 1, 2), "{units}");
        assert_eq!(
            (dt.hour(), dt.minute(), dt.second()),
            (Some(0), Some(0), Some(0)),
            "{units}"
        );
    }
}

#[test]
fn sub_day_offsets_decode_to_clock_fields() {
    let dt = decode(90.0, "minutes since 2000-01-01", CalendarKind::JulianGregorian);
    assert_eq!(dt.date(), date(2000, 1, 1));
    assert_eq!(
        (dt.hour(), dt.minute(), dt.second()),
        (Some(1), Some(30), Some(0))
    );

    let dt = decode(59.0, "seconds since 2000-01-01", CalendarKind::JulianGregorian);
    assert_eq!(
        (dt.hour(), dt.minute(), dt.second()),
        (Some(0), Some(0), Some(59))
    );
}

#[test]
fn negative_offsets_go_backwards() {
    let dt = decode(-1.0, "days since 2000-03-01", CalendarKind::JulianGregorian);
    assert_eq!(dt.date(), date(2000, 2, 29));
}

#[test]
fn units_respect_the_calendar() {
    // One year of daily offsets lands differently per calendar.
    let dt = decode(360.0, "days since 1990-01-01", CalendarKind::Fixed360);
    assert_eq!(dt.date(), date(1991, 1, 1));

    let dt = decode(365.0, "days since 1990-01-01", CalendarKind::Fixed365);
    assert_eq!(dt.date(), date(1991, 1, 1));

    let dt = decode(365.0, "days since 1990-01-01", CalendarKind::JulianGregorian);
    assert_eq!(dt.date(), date(1991, 1, 1));

    // In the 365-day calendar there is no 29 Feb to cross in 2000.
    let dt = decode(59.0, "days since 2000-01-01", CalendarKind::Fixed365);
    assert_eq!(dt.date(), date(2000, 3, 1));
    let dt = decode(59.0, "days since 2000-01-01", CalendarKind::JulianGregorian);
    assert_eq!(dt.date(), date(2000, 2, 29));
}

#[test]
fn long_offset_series_stays_consistent() {
    let spec = UnitsSpec::parse("days since 1950-01-01").unwrap();
    let mut prev = from_fractional_day(0.0, CalendarKind::JulianGregorian, Some(&spec))
        .unwrap()
        .date();
    for k in 1..=1000 {
        let d = from_fractional_day(f64::from(k), CalendarKind::JulianGregorian, Some(&spec))
            .unwrap()
            .date();
        assert!(d > prev, "offset {k}: {d} not after {prev}");
        prev = d;
    }
}

#[test]
fn malformed_units_rejected() {
    for input in [
        "",
        "days",
        "days since",
        "days before 1990-01-01",
        "fortnights since 1990-01-01",
        "days since 1990/01/01",
        "days since 1990-1-1",
    ] {
        assert!(
            matches!(
                UnitsSpec::parse(input).unwrap_err(),
                CalendarError::MalformedUnits { .. }
            ),
            "accepted {input:?}"
        );
    }
}

#[test]
fn reference_in_gregorian_gap_fails_at_resolution() {
    let spec = UnitsSpec::parse("days since 1582-10-10").unwrap();
    let err = from_fractional_day(0.0, CalendarKind::JulianGregorian, Some(&spec)).unwrap_err();
    assert!(matches!(err, CalendarError::GregorianGap { .. }));

    // The same reference is fine under a calendar without the gap.
    assert!(from_fractional_day(0.0, CalendarKind::Fixed365, Some(&spec)).is_ok());
}

#[test]
fn trailing_timezone_designator_ignored() {
    let dt = decode(
        0.0,
        "seconds since 1970-01-01 00:00:00 +00:00",
        CalendarKind::JulianGregorian,
    );
    assert_eq!(dt.date(), date(1970, 1, 1));
}
