//! Integration tests for the German and Austrian public holiday tables.

use std::collections::HashSet;

use fk_holidays::{
    aggregate_over_years, austrian_holidays, austrian_holidays_over_years, german_holidays,
    german_holidays_over_years, Austria, GermanState, Germany, Holiday, HolidayCalendar,
};
use fk_time::{Date, Weekday};
use proptest::prelude::*;

fn date(y: i32, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn find<'a>(holidays: &'a [Holiday], name: &str) -> Option<&'a Holiday> {
    holidays.iter().find(|h| h.name_local == name)
}

fn assert_sorted_and_unique(holidays: &[Holiday]) {
    assert!(holidays.windows(2).all(|w| w[0].date <= w[1].date), "not sorted");
    let keys: HashSet<_> = holidays.iter().map(|h| (h.date, h.name_local.as_str())).collect();
    assert_eq!(keys.len(), holidays.len(), "duplicate (date, name)");
}

// ─── Germany ──────────────────────────────────────────────────────────────────

#[test]
fn nationwide_holidays_2024() {
    let h = german_holidays(2024, GermanState::Hamburg);
    assert_eq!(find(&h, "Karfreitag").unwrap().date, date(2024, 3, 29));
    assert_eq!(find(&h, "Ostermontag").unwrap().date, date(2024, 4, 1));
    assert_eq!(find(&h, "Christi Himmelfahrt").unwrap().date, date(2024, 5, 9));
    assert_eq!(find(&h, "Pfingstmontag").unwrap().date, date(2024, 5, 20));
    assert_eq!(find(&h, "Tag der Deutschen Einheit").unwrap().date, date(2024, 10, 3));
    assert_eq!(find(&h, "Reformationstag").unwrap().date, date(2024, 10, 31));
    assert_eq!(h.len(), 10);
}

#[test]
fn corpus_christi_states() {
    for state in GermanState::ALL {
        let h = german_holidays(2025, state);
        let expected = matches!(
            state,
            GermanState::BadenWuerttemberg
                | GermanState::Bayern
                | GermanState::Hessen
                | GermanState::NordrheinWestfalen
                | GermanState::RheinlandPfalz
                | GermanState::Saarland
        );
        assert_eq!(find(&h, "Fronleichnam").is_some(), expected, "{state}");
    }
}

#[test]
fn thueringen_world_childrens_day() {
    let h = german_holidays(2025, "Thüringen");
    assert_eq!(find(&h, "Weltkindertag").unwrap().date, date(2025, 9, 20));
    assert!(find(&german_holidays(2025, "Sachsen"), "Weltkindertag").is_none());
}

#[test]
fn repentance_day_in_sachsen() {
    for (year, expected) in [(2023, date(2023, 11, 22)), (2024, date(2024, 11, 20)), (2025, date(2025, 11, 19))] {
        let h = german_holidays(year, GermanState::Sachsen);
        let d = find(&h, "Buß- und Bettag").unwrap().date;
        assert_eq!(d, expected);
        assert_eq!(d.weekday(), Weekday::Wednesday);
    }
}

#[test]
fn every_state_has_sorted_unique_holidays_with_scope() {
    for year in 2020..=2030 {
        for state in GermanState::ALL {
            let h = german_holidays(year, state);
            assert!(h.len() >= 9, "{state} {year}");
            assert_sorted_and_unique(&h);
            assert!(h.iter().all(|h| !h.scope.is_empty()));
        }
    }
}

#[test]
fn unknown_german_region_is_not_an_error() {
    let h = german_holidays(2025, "Wien");
    assert_eq!(h.len(), 9);
    assert!(h.iter().all(|h| h.scope == "bundesweit"));
}

#[test]
fn german_rolling_window() {
    let all = german_holidays_over_years(2024, 2026, GermanState::Bayern);
    let mut expected: Vec<Holiday> = (2024..=2026).flat_map(|y| german_holidays(y, "Bayern")).collect();
    expected.sort_by_key(|h| h.date);
    assert_eq!(all, expected);
    assert_eq!(all.len(), 3 * 14);
}

// ─── Austria ──────────────────────────────────────────────────────────────────

#[test]
fn austria_has_thirteen_holidays() {
    for year in 2000..=2050 {
        let h = austrian_holidays(year);
        assert_eq!(h.len(), 13, "{year}");
        assert_sorted_and_unique(&h);
    }
}

#[test]
fn austria_movable_feasts_2024() {
    let h = austrian_holidays(2024);
    assert_eq!(find(&h, "Ostermontag").unwrap().date, date(2024, 4, 1));
    assert_eq!(find(&h, "Christi Himmelfahrt").unwrap().date, date(2024, 5, 9));
    assert_eq!(find(&h, "Pfingstmontag").unwrap().date, date(2024, 5, 20));
    assert_eq!(find(&h, "Fronleichnam").unwrap().date, date(2024, 5, 30));
    assert!(find(&h, "Karfreitag").is_none());
}

#[test]
fn austria_aggregate_equals_concatenation() {
    let merged = austrian_holidays_over_years(2024, 2026);
    let mut expected = austrian_holidays(2024);
    expected.extend(austrian_holidays(2025));
    expected.extend(austrian_holidays(2026));
    expected.sort_by_key(|h| h.date);
    assert_eq!(merged, expected);
    assert!(austrian_holidays_over_years(2026, 2024).is_empty());
}

// ─── HolidayCalendar ──────────────────────────────────────────────────────────

#[test]
fn calendars_agree_with_functions() {
    let calendars: Vec<Box<dyn HolidayCalendar>> = vec![
        Box::new(Austria),
        Box::new(Germany::new(GermanState::Sachsen)),
    ];
    for cal in &calendars {
        for h in cal.holidays(2025) {
            assert!(cal.is_holiday(h.date), "{}: {h}", cal.name());
        }
    }
    assert!(!Austria.is_holiday(date(2025, 4, 18))); // Karfreitag
    assert!(Germany::new(GermanState::Sachsen).is_holiday(date(2025, 4, 18)));
}

#[test]
fn holidays_between_crosses_years() {
    let got = Austria.holidays_between(date(2024, 12, 8), date(2025, 1, 6));
    let dates: Vec<_> = got.iter().map(|h| h.date).collect();
    assert_eq!(
        dates,
        [date(2024, 12, 8), date(2024, 12, 25), date(2024, 12, 26), date(2025, 1, 1), date(2025, 1, 6)]
    );
    assert!(Austria.holidays_between(date(2025, 2, 1), date(2025, 1, 1)).is_empty());
}

proptest! {
    #[test]
    fn aggregate_is_sorted(start in 1900i32..=2100, span in 0i32..=6) {
        let merged = aggregate_over_years(start, start + span, austrian_holidays);
        prop_assert_eq!(merged.len(), 13 * (span as usize + 1));
        prop_assert!(merged.windows(2).all(|w| w[0].date <= w[1].date));
    }

    #[test]
    fn german_offsets_follow_easter(year in 1900i32..=2100) {
        let h = german_holidays(year, GermanState::Bayern);
        let easter = fk_time::easter(year);
        prop_assert_eq!(find(&h, "Karfreitag").unwrap().date, easter - 2);
        prop_assert_eq!(find(&h, "Pfingstmontag").unwrap().date, easter + 50);
        prop_assert_eq!(find(&h, "Fronleichnam").unwrap().date, easter + 60);
    }
}
