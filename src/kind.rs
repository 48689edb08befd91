//! Calendar selection.

use tracing::debug;

/// The calendar convention a conversion operates under.
///
/// Selected at the API boundary from a textual token via
/// [`CalendarKind::from_token`]; all internal arithmetic dispatches on this
/// enum rather than re-parsing strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CalendarKind {
    /// Mixed Julian/Gregorian astronomical calendar with the 1582 cutover.
    #[default]
    JulianGregorian,
    /// Lilian day count (day 1 = 15 October 1582).
    Lilian,
    /// Synthetic calendar of twelve 30-day months.
    Fixed360,
    /// Synthetic calendar with standard month lengths and no leap day, ever.
    Fixed365,
}

impl CalendarKind {
    /// Resolves a calendar-selector token.
    ///
    /// Recognized tokens are `"julian"`, `"lilian"`, `"360day"`, and
    /// `"365day"` (case-sensitive). A missing or unrecognized token selects
    /// [`CalendarKind::JulianGregorian`]; this fallback is a documented
    /// default of the calendar selector, not an error.
    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            None | Some("julian") => Self::JulianGregorian,
            Some("lilian") => Self::Lilian,
            Some("360day") => Self::Fixed360,
            Some("365day") => Self::Fixed365,
            Some(other) => {
                debug!(token = other, "unrecognized calendar token, using julian");
                Self::JulianGregorian
            }
        }
    }

    /// Returns the canonical selector token for this calendar.
    pub fn token(self) -> &'static str {
        match self {
            Self::JulianGregorian => "julian",
            Self::Lilian => "lilian",
            Self::Fixed360 => "360day",
            Self::Fixed365 => "365day",
        }
    }
}

impl std::fmt::Display for CalendarKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}
