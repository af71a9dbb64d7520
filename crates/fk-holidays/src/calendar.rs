//! `HolidayCalendar` trait.
//!
//! A holiday calendar knows which public holidays fall in a given year
//! for one jurisdiction.

use fk_time::Date;

use crate::holiday::Holiday;

/// A public holiday calendar for one country or state.
pub trait HolidayCalendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"Germany (Sachsen)"`).
    fn name(&self) -> String;

    /// All holidays of `year`, sorted ascending by date.
    fn holidays(&self, year: i32) -> Vec<Holiday>;

    /// Return `true` if `date` is a public holiday in this calendar.
    fn is_holiday(&self, date: Date) -> bool {
        self.holidays(date.year()).iter().any(|h| h.date == date)
    }

    /// Holidays between `from` and `to` (both inclusive), sorted by date.
    fn holidays_between(&self, from: Date, to: Date) -> Vec<Holiday> {
        if from > to {
            return Vec::new();
        }
        (from.year()..=to.year())
            .flat_map(|year| self.holidays(year))
            .filter(|h| from <= h.date && h.date <= to)
            .collect()
    }
}
