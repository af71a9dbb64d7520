//! German public holidays.
//!
//! Nine holidays are observed nationwide:
//! * New Year's Day (Jan 1)
//! * Good Friday (Easter − 2)
//! * Easter Monday (Easter + 1)
//! * Labour Day (May 1)
//! * Ascension Day (Easter + 39)
//! * Whit Monday (Easter + 50)
//! * German Unity Day (Oct 3)
//! * Christmas Day (Dec 25)
//! * St. Stephen's Day (Dec 26)
//!
//! Everything else is state law and lives in [`REGIONAL_RULES`].

use fk_time::easter::{ASCENSION, CORPUS_CHRISTI, EASTER_MONDAY, GOOD_FRIDAY, WHIT_MONDAY};
use fk_time::Month;
use tracing::warn;

use crate::aggregate::aggregate_over_years;
use crate::calendar::HolidayCalendar;
use crate::holiday::Holiday;
use crate::region::GermanState::{self, *};
use crate::rule::DateRule;

/// Scope string of the nationwide holidays.
pub const NATIONWIDE: &str = "bundesweit";

const REGIONAL: &str = "regional";

const NATIONWIDE_RULES: [(DateRule, &str, &str); 9] = [
    (DateRule::Fixed(Month::January, 1), "Neujahr", "New Year's Day"),
    (DateRule::EasterOffset(GOOD_FRIDAY), "Karfreitag", "Good Friday"),
    (DateRule::EasterOffset(EASTER_MONDAY), "Ostermontag", "Easter Monday"),
    (DateRule::Fixed(Month::May, 1), "Tag der Arbeit", "Labour Day"),
    (DateRule::EasterOffset(ASCENSION), "Christi Himmelfahrt", "Ascension Day"),
    (DateRule::EasterOffset(WHIT_MONDAY), "Pfingstmontag", "Whit Monday"),
    (DateRule::Fixed(Month::October, 3), "Tag der Deutschen Einheit", "German Unity Day"),
    (DateRule::Fixed(Month::December, 25), "1. Weihnachtsfeiertag", "Christmas Day"),
    (DateRule::Fixed(Month::December, 26), "2. Weihnachtsfeiertag", "St. Stephen's Day"),
];

/// A holiday observed in a subset of the German states.
#[derive(Debug, Clone, Copy)]
pub struct RegionalRule {
    /// How the date is derived.
    pub rule: DateRule,
    /// States observing the holiday.
    pub states: &'static [GermanState],
    /// German name.
    pub name_local: &'static str,
    /// English name.
    pub name_en: &'static str,
    /// Scope string attached to the resulting [`Holiday`].
    pub scope: &'static str,
}

impl RegionalRule {
    /// Return `true` if the state called `region` observes this holiday.
    pub fn applies_to(&self, region: &str) -> bool {
        self.states.iter().any(|s| s.name() == region)
    }

    fn holiday(&self, year: i32) -> Holiday {
        Holiday::new(self.rule.resolve(year), self.name_local, self.name_en, self.scope)
    }
}

/// State-level holidays, in the order they are appended to the
/// nationwide list.
pub const REGIONAL_RULES: [RegionalRule; 10] = [
    RegionalRule {
        rule: DateRule::Fixed(Month::January, 6),
        states: &[BadenWuerttemberg, Bayern, SachsenAnhalt],
        name_local: "Heilige Drei Könige",
        name_en: "Epiphany",
        scope: REGIONAL,
    },
    RegionalRule {
        rule: DateRule::Fixed(Month::March, 8),
        states: &[Berlin, MecklenburgVorpommern],
        name_local: "Internationaler Frauentag",
        name_en: "International Women's Day",
        scope: REGIONAL,
    },
    RegionalRule {
        rule: DateRule::EasterOffset(CORPUS_CHRISTI),
        states: &[BadenWuerttemberg, Bayern, Hessen, NordrheinWestfalen, RheinlandPfalz, Saarland],
        name_local: "Fronleichnam",
        name_en: "Corpus Christi",
        scope: REGIONAL,
    },
    RegionalRule {
        rule: DateRule::Fixed(Month::August, 8),
        states: &[Bayern],
        name_local: "Augsburger Friedensfest",
        name_en: "Augsburg Peace Festival",
        scope: "nur Stadt Augsburg",
    },
    RegionalRule {
        rule: DateRule::Fixed(Month::August, 15),
        states: &[Saarland],
        name_local: "Mariä Himmelfahrt",
        name_en: "Assumption of Mary",
        scope: REGIONAL,
    },
    RegionalRule {
        rule: DateRule::Fixed(Month::August, 15),
        states: &[Bayern],
        name_local: "Mariä Himmelfahrt",
        name_en: "Assumption of Mary",
        scope: "nur in überwiegend katholischen Gemeinden",
    },
    RegionalRule {
        rule: DateRule::Fixed(Month::September, 20),
        states: &[Thueringen],
        name_local: "Weltkindertag",
        name_en: "World Children's Day",
        scope: REGIONAL,
    },
    RegionalRule {
        rule: DateRule::Fixed(Month::October, 31),
        states: &[
            Brandenburg,
            MecklenburgVorpommern,
            Sachsen,
            SachsenAnhalt,
            Thueringen,
            Bremen,
            Hamburg,
            Niedersachsen,
            SchleswigHolstein,
        ],
        name_local: "Reformationstag",
        name_en: "Reformation Day",
        scope: REGIONAL,
    },
    RegionalRule {
        rule: DateRule::Fixed(Month::November, 1),
        states: &[BadenWuerttemberg, Bayern, NordrheinWestfalen, RheinlandPfalz, Saarland],
        name_local: "Allerheiligen",
        name_en: "All Saints' Day",
        scope: REGIONAL,
    },
    RegionalRule {
        rule: DateRule::RepentanceDay,
        states: &[Sachsen],
        name_local: "Buß- und Bettag",
        name_en: "Day of Repentance and Prayer",
        scope: REGIONAL,
    },
];

/// Public holidays of `year` in the German state called `region`.
///
/// The nine nationwide holidays come first, followed by every entry of
/// [`REGIONAL_RULES`] that lists `region`; the result is then stable-sorted
/// by date.  `region` must be a canonical state name.  Anything else yields
/// only the nationwide holidays and logs a warning.
pub fn german_holidays(year: i32, region: impl AsRef<str>) -> Vec<Holiday> {
    let region = region.as_ref();
    let mut holidays: Vec<Holiday> = NATIONWIDE_RULES
        .iter()
        .map(|(rule, local, en)| Holiday::new(rule.resolve(year), *local, *en, NATIONWIDE))
        .collect();

    if GermanState::from_name(region).is_none() {
        warn!(region, year, "unknown German state, returning nationwide holidays only");
    }

    holidays.extend(
        REGIONAL_RULES
            .iter()
            .filter(|r| r.applies_to(region))
            .map(|r| r.holiday(year)),
    );
    holidays.sort_by_key(|h| h.date);
    holidays
}

/// [`german_holidays`] for every year of `start_year ..= end_year`.
pub fn german_holidays_over_years(
    start_year: i32,
    end_year: i32,
    region: impl AsRef<str>,
) -> Vec<Holiday> {
    let region = region.as_ref();
    aggregate_over_years(start_year, end_year, |year| german_holidays(year, region))
}

/// Public holiday calendar of one German state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Germany {
    /// The state whose holidays are observed.
    pub state: GermanState,
}

impl Germany {
    /// Calendar for `state`.
    pub fn new(state: GermanState) -> Self {
        Germany { state }
    }
}

impl HolidayCalendar for Germany {
    fn name(&self) -> String {
        format!("Germany ({})", self.state)
    }

    fn holidays(&self, year: i32) -> Vec<Holiday> {
        german_holidays(year, self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fk_time::Date;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn names(holidays: &[Holiday]) -> Vec<&str> {
        holidays.iter().map(|h| h.name_local.as_str()).collect()
    }

    #[test]
    fn berlin_2025() {
        let h = german_holidays(2025, GermanState::Berlin);
        assert_eq!(h.len(), 10);
        assert_eq!(h[1].date, date(2025, 3, 8));
        assert_eq!(h[1].name_local, "Internationaler Frauentag");
        assert_eq!(h[1].scope, "regional");
    }

    #[test]
    fn bayern_has_both_scoped_entries() {
        let h = german_holidays(2024, "Bayern");
        let augsburg = h.iter().find(|h| h.name_local == "Augsburger Friedensfest").unwrap();
        assert_eq!(augsburg.date, date(2024, 8, 8));
        assert_eq!(augsburg.scope, "nur Stadt Augsburg");
        let assumption = h.iter().find(|h| h.date == date(2024, 8, 15)).unwrap();
        assert_eq!(assumption.scope, "nur in überwiegend katholischen Gemeinden");
        assert_eq!(h.len(), 9 + 5);
    }

    #[test]
    fn saarland_assumption_is_regional() {
        let h = german_holidays(2024, "Saarland");
        let assumption = h.iter().find(|h| h.date == date(2024, 8, 15)).unwrap();
        assert_eq!(assumption.scope, "regional");
    }

    #[test]
    fn sachsen_repentance_day() {
        let h = german_holidays(2024, GermanState::Sachsen);
        assert!(names(&h).contains(&"Buß- und Bettag"));
        assert!(h.iter().any(|h| h.date == date(2024, 11, 20)));
        assert!(!german_holidays(2024, GermanState::Bayern)
            .iter()
            .any(|h| h.name_local == "Buß- und Bettag"));
    }

    #[test]
    fn unknown_region_yields_nationwide_only() {
        let h = german_holidays(2025, "Atlantis");
        assert_eq!(h.len(), 9);
        assert!(h.iter().all(|h| h.scope == NATIONWIDE));
        // matching is exact
        assert_eq!(german_holidays(2025, "sachsen").len(), 9);
    }

    #[test]
    fn calendar_trait() {
        let cal = Germany::new(GermanState::Hessen);
        assert_eq!(cal.name(), "Germany (Hessen)");
        assert!(cal.is_holiday(date(2025, 6, 19))); // Fronleichnam
        assert!(!cal.is_holiday(date(2025, 10, 31)));
        let between = cal.holidays_between(date(2025, 12, 1), date(2026, 1, 31));
        assert_eq!(names(&between), ["1. Weihnachtsfeiertag", "2. Weihnachtsfeiertag", "Neujahr"]);
    }
}
