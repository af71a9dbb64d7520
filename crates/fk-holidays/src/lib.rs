//! # fk-holidays
//!
//! Public holidays for the 16 German states and for Austria, Austrian
//! school holidays for the 9 Austrian states, and multi-year aggregation.
//!
//! Every rule is a pure function of `(year, region)`.
//!
//! ```
//! use fk_holidays::calendars::germany::german_holidays;
//!
//! let holidays = german_holidays(2025, "Sachsen");
//! assert!(holidays.iter().any(|h| h.name_local == "Buß- und Bettag"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Multi-year aggregation and rolling windows.
pub mod aggregate;

/// `HolidayCalendar` trait.
pub mod calendar;

/// Country-specific public holiday tables.
pub mod calendars;

/// `Holiday` and `SchoolBreak` value types.
pub mod holiday;

/// German and Austrian federal states.
pub mod region;

/// Date rules shared by the holiday tables.
pub mod rule;

/// School holiday rules.
pub mod school;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use aggregate::{aggregate_over_years, try_aggregate_over_years, RollingWindow};
pub use calendar::HolidayCalendar;
pub use calendars::austria::{austrian_holidays, austrian_holidays_over_years, Austria};
pub use calendars::germany::{german_holidays, german_holidays_over_years, Germany};
pub use holiday::{CalendarEntry, Holiday, SchoolBreak};
pub use region::{AustrianState, GermanState};
pub use rule::DateRule;
pub use school::austria::{school_holidays, school_holidays_over_years};
