//! CF-style units strings: `"<unit> since <YYYY-MM-DD>[ <hh:mm:ss>]"`.
//!
//! Time-series files carry their time axis as numeric offsets relative to a
//! reference date, with the unit and reference packed into a single
//! attribute string. This module parses that string once into a
//! [`UnitsSpec`] and resolves numeric offsets against it.

use crate::date::{CivilDate, CivilDateTime};
use crate::dispatch;
use crate::error::CalendarError;
use crate::fracday;
use crate::kind::CalendarKind;

/// The unit a relative time axis counts in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    /// Whole days.
    Days,
    /// Hours (24 per day).
    Hours,
    /// Minutes (1440 per day).
    Minutes,
    /// Seconds (86400 per day).
    Seconds,
}

impl TimeUnit {
    fn parse(token: &str) -> Option<Self> {
        match token {
            "days" => Some(Self::Days),
            "hours" => Some(Self::Hours),
            "minutes" => Some(Self::Minutes),
            "seconds" => Some(Self::Seconds),
            _ => None,
        }
    }

    /// How many of this unit make up one day.
    pub fn per_day(self) -> f64 {
        match self {
            Self::Days => 1.0,
            Self::Hours => 24.0,
            Self::Minutes => 1440.0,
            Self::Seconds => 86_400.0,
        }
    }

    /// Returns the unit's token as it appears in a units string.
    pub fn token(self) -> &'static str {
        match self {
            Self::Days => "days",
            Self::Hours => "hours",
            Self::Minutes => "minutes",
            Self::Seconds => "seconds",
        }
    }
}

impl std::fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

/// A parsed units string: the counting unit plus the reference date-time
/// that offset zero refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnitsSpec {
    unit: TimeUnit,
    reference: CivilDateTime,
}

impl UnitsSpec {
    /// Creates a spec directly from its parts.
    pub fn new(unit: TimeUnit, reference: CivilDateTime) -> Self {
        Self { unit, reference }
    }

    /// Parses a units string of the exact form
    /// `"<unit> since <YYYY-MM-DD>[ <hh:mm:ss>]"`.
    ///
    /// Date fields must carry their full widths: two digits for month and
    /// day, at least four for the year (a leading minus sign selects a
    /// negative year). The time-of-day suffix defaults to 00:00:00 when
    /// absent. Anything
    /// after the seconds field (a trailing timezone designator, a
    /// fractional second) is ignored, not validated.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::MalformedUnits`] if the string does not
    /// match the grammar, plus the usual field-range errors for an invalid
    /// reference date or time.
    pub fn parse(input: &str) -> Result<Self, CalendarError> {
        let malformed = |reason: &str| CalendarError::MalformedUnits {
            input: input.to_string(),
            reason: reason.to_string(),
        };

        let mut tokens = input.split_whitespace();
        let unit_token = tokens.next().ok_or_else(|| malformed("empty string"))?;
        let unit = TimeUnit::parse(unit_token).ok_or_else(|| {
            malformed("unit must be one of days, hours, minutes, seconds")
        })?;

        if tokens.next() != Some("since") {
            return Err(malformed("missing 'since' keyword"));
        }

        let date_token = tokens
            .next()
            .ok_or_else(|| malformed("missing reference date"))?;
        let (year, month, day) = parse_date_fields(date_token)
            .ok_or_else(|| malformed("reference date must be YYYY-MM-DD"))?;
        let date = CivilDate::new(year, month, day)?;

        let reference = match tokens.next() {
            Some(time_token) => {
                let (hour, minute, second) = parse_time_fields(time_token)
                    .ok_or_else(|| malformed("reference time must be hh:mm:ss"))?;
                date.and_hms(hour, minute, second)?
            }
            None => CivilDateTime::from(date),
        };
        // Remaining tokens (e.g. a timezone designator) are ignored.

        Ok(Self { unit, reference })
    }

    /// Returns the counting unit.
    pub fn unit(self) -> TimeUnit {
        self.unit
    }

    /// Returns the reference date-time.
    pub fn reference(self) -> CivilDateTime {
        self.reference
    }

    /// Resolves a numeric offset against the reference into an absolute
    /// fractional day under `kind`.
    ///
    /// The reference is encoded with the usual nudge, then pulled back by
    /// one compensating epsilon so that offset zero decodes to the
    /// reference itself; the final sum is nudged once more before being
    /// handed to the decoder.
    ///
    /// # Errors
    ///
    /// Propagates any error from encoding the reference date under `kind`.
    pub(crate) fn resolve(&self, offset: f64, kind: CalendarKind) -> Result<f64, CalendarError> {
        let encoded = dispatch::to_fractional_day(self.reference, kind)?;
        let base = encoded - fracday::eps_of(encoded);
        let sum = base + offset / self.unit.per_day();
        Ok(fracday::nudge(sum))
    }
}

/// Splits `YYYY-MM-DD` into numeric fields, enforcing the widths: month
/// and day are exactly two digits, the year at least four (with an
/// optional leading minus sign). Splitting from the right keeps that minus
/// sign attached to negative years.
fn parse_date_fields(token: &str) -> Option<(i32, u8, u8)> {
    let mut parts = token.rsplitn(3, '-');
    let day_part = parts.next()?;
    let month_part = parts.next()?;
    let year_part = parts.next()?;
    if day_part.len() != 2 || month_part.len() != 2 {
        return None;
    }
    let year_digits = year_part.strip_prefix('-').unwrap_or(year_part);
    if year_digits.len() < 4 || !year_digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let day = day_part.parse::<u8>().ok()?;
    let month = month_part.parse::<u8>().ok()?;
    let year = year_part.parse::<i32>().ok()?;
    Some((year, month, day))
}

/// Splits `hh:mm:ss` into numeric fields. Characters after the last digits
/// of the seconds field are ignored.
fn parse_time_fields(token: &str) -> Option<(u8, u8, u8)> {
    let mut parts = token.splitn(3, ':');
    let hour = parts.next()?.parse::<u8>().ok()?;
    let minute = parts.next()?.parse::<u8>().ok()?;
    let second_part = parts.next()?;
    let digits: String = second_part
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    if digits.is_empty() {
        return None;
    }
    let second = digits.parse::<u8>().ok()?;
    Some((hour, minute, second))
}
