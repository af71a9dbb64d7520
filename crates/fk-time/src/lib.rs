//! # fk-time
//!
//! Calendar dates and the date rules every holiday table is built from:
//! the Easter computus, Advent Sundays, and nth-weekday-of-month rules.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Advent Sundays and the Day of Repentance and Prayer.
pub mod advent;

/// `Date` type.
pub mod date;

/// Easter Sunday and the feasts anchored on it.
pub mod easter;

/// `Month` — month of the year.
pub mod month;

/// Nth-weekday-of-month and first-weekday-in-range rules.
pub mod nth_weekday;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use advent::{first_advent, fourth_advent, repentance_day};
pub use date::Date;
pub use easter::{easter, easter_offset};
pub use month::Month;
pub use nth_weekday::{first_saturday_in_range, nth_monday_of_month, nth_weekday_of_month};
pub use weekday::Weekday;
