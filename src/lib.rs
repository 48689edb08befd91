//! # julday
//!
//! Pure conversions between civil calendar dates and linear day counts
//! ("Julian days") across the calendar conventions used by climate and
//! geophysical time axes.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["calendar token"] -->|"CalendarKind::from_token()"| B["CalendarKind"]
//!     B --> C["dispatcher"]
//!     C --> D["julian / lilian / 360day / 365day converter"]
//!     D -->|"fractional forms"| E["fractional-day codec"]
//!     F["'days since ...' string"] -->|"UnitsSpec::parse()"| G["UnitsSpec"]
//!     G -->|"from_fractional_day(.., units)"| C
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use julday::{CalendarKind, CivilDate, UnitsSpec};
//!
//! // Integer day numbers
//! let d = CivilDate::new(1900, 1, 1)?;
//! let n = julday::to_day_number(d, CalendarKind::JulianGregorian)?; // 2415021
//! assert_eq!(julday::from_day_number(n, CalendarKind::JulianGregorian)?, d);
//!
//! // Fractional days with time of day
//! let dt = d.and_hms(12, 30, 0)?;
//! let f = julday::to_fractional_day(dt, CalendarKind::JulianGregorian)?;
//!
//! // Relative time axes ("CF units")
//! let units = UnitsSpec::parse("hours since 1900-01-01 00:00:00")?;
//! let decoded = julday::from_fractional_day(36.5, CalendarKind::JulianGregorian, Some(&units))?;
//! ```
//!
//! All operations are pure functions of their inputs: no shared state, no
//! I/O, no ambient "current calendar". The calendar is an explicit
//! parameter on every call, resolved once from its textual token at the
//! API boundary.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | Civil date / date-time value types and month tables |
//! | `kind` | Calendar selection and token parsing |
//! | `julian` | Mixed Julian/Gregorian converter with the 1582 cutover |
//! | `lilian` | Lilian day count (affine offset over julian) |
//! | `day360` | Synthetic 360-day calendar |
//! | `day365` | Synthetic 365-day calendar (no leap day, ever) |
//! | `fracday` | Fractional-day codec and epsilon nudging |
//! | `dispatch` | Public conversion API dispatching on `CalendarKind` |
//! | `units` | `"<unit> since <date>"` parsing and offset resolution |
//! | `error` | Error types |

mod date;
mod day360;
mod day365;
mod dispatch;
mod error;
mod fracday;
mod julian;
mod kind;
mod lilian;
mod units;

pub use date::{CivilDate, CivilDateTime};
pub use dispatch::{from_day_number, from_fractional_day, to_day_number, to_fractional_day};
pub use error::CalendarError;
pub use kind::CalendarKind;
pub use units::{TimeUnit, UnitsSpec};
