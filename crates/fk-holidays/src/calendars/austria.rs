//! Austrian public holidays.
//!
//! All thirteen statutory holidays apply nationwide; the Landespatron
//! days are school holidays only and live in
//! [`school::austria`](crate::school::austria).

use fk_time::easter::{ASCENSION, CORPUS_CHRISTI, EASTER_MONDAY, WHIT_MONDAY};
use fk_time::Month;

use crate::aggregate::aggregate_over_years;
use crate::calendar::HolidayCalendar;
use crate::holiday::Holiday;
use crate::rule::DateRule;

/// Scope string of every Austrian holiday.
pub const NATIONWIDE: &str = "bundesweit";

const RULES: [(DateRule, &str, &str); 13] = [
    (DateRule::Fixed(Month::January, 1), "Neujahr", "New Year's Day"),
    (DateRule::Fixed(Month::January, 6), "Heilige Drei Könige", "Epiphany"),
    (DateRule::Fixed(Month::May, 1), "Staatsfeiertag", "Labour Day"),
    (DateRule::Fixed(Month::August, 15), "Mariä Himmelfahrt", "Assumption of Mary"),
    (DateRule::Fixed(Month::October, 26), "Nationalfeiertag", "National Day"),
    (DateRule::Fixed(Month::November, 1), "Allerheiligen", "All Saints' Day"),
    (DateRule::Fixed(Month::December, 8), "Mariä Empfängnis", "Immaculate Conception"),
    (DateRule::Fixed(Month::December, 25), "Christtag", "Christmas Day"),
    (DateRule::Fixed(Month::December, 26), "Stefanitag", "St. Stephen's Day"),
    (DateRule::EasterOffset(EASTER_MONDAY), "Ostermontag", "Easter Monday"),
    (DateRule::EasterOffset(ASCENSION), "Christi Himmelfahrt", "Ascension Day"),
    (DateRule::EasterOffset(WHIT_MONDAY), "Pfingstmontag", "Whit Monday"),
    (DateRule::EasterOffset(CORPUS_CHRISTI), "Fronleichnam", "Corpus Christi"),
];

/// The 13 Austrian public holidays of `year`, sorted by date.
///
/// ```
/// use fk_holidays::austrian_holidays;
///
/// let h = austrian_holidays(2025);
/// assert_eq!(h.len(), 13);
/// assert_eq!(h[0].name_local, "Neujahr");
/// ```
pub fn austrian_holidays(year: i32) -> Vec<Holiday> {
    let mut holidays: Vec<Holiday> = RULES
        .iter()
        .map(|(rule, local, en)| Holiday::new(rule.resolve(year), *local, *en, NATIONWIDE))
        .collect();
    holidays.sort_by_key(|h| h.date);
    holidays
}

/// [`austrian_holidays`] for every year of `start_year ..= end_year`.
pub fn austrian_holidays_over_years(start_year: i32, end_year: i32) -> Vec<Holiday> {
    aggregate_over_years(start_year, end_year, austrian_holidays)
}

/// Austrian public holiday calendar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Austria;

impl HolidayCalendar for Austria {
    fn name(&self) -> String {
        "Austria".to_string()
    }

    fn holidays(&self, year: i32) -> Vec<Holiday> {
        austrian_holidays(year)
    }
}
