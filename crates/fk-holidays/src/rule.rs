//! Date rules shared by the holiday tables.

use fk_time::{easter_offset, repentance_day, Date, Month};

/// How a holiday's date is derived from the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRule {
    /// Same month and day every year.
    Fixed(Month, u8),
    /// A fixed number of days from Easter Sunday.
    EasterOffset(i32),
    /// Buß- und Bettag, eleven days before the first Sunday of Advent.
    RepentanceDay,
}

impl DateRule {
    /// The date this rule yields in `year`.
    pub fn resolve(&self, year: i32) -> Date {
        match *self {
            DateRule::Fixed(month, day) => Date::new(year, month, day),
            DateRule::EasterOffset(days) => easter_offset(year, days),
            DateRule::RepentanceDay => repentance_day(year),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fk_time::easter::CORPUS_CHRISTI;

    #[test]
    fn resolve_each_kind() {
        assert_eq!(
            DateRule::Fixed(Month::October, 3).resolve(2025),
            Date::from_ymd(2025, 10, 3).unwrap()
        );
        assert_eq!(
            DateRule::EasterOffset(CORPUS_CHRISTI).resolve(2024),
            Date::from_ymd(2024, 5, 30).unwrap()
        );
        assert_eq!(
            DateRule::RepentanceDay.resolve(2025),
            Date::from_ymd(2025, 11, 19).unwrap()
        );
    }
}
