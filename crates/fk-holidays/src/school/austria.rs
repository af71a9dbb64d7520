//! Austrian school holidays.
//!
//! Dates follow the Schulzeitgesetz: fixed days, weekday-of-month rules
//! for the semester break and the start of the school year, and Easter
//! offsets for the Easter and Whit breaks.
//!
//! State groups:
//! * semester break: NÖ, W on the 1st Monday of February; B, K, S, T, V on
//!   the 2nd; OÖ, St on the 3rd
//! * summer start: B, NÖ, W on the Saturday in June 28 – July 4, all
//!   others in July 5 – 11
//! * school year start: B, NÖ, W on the 1st Monday of September, all
//!   others on the 2nd

use fk_core::errors::{Error, Result};
use fk_time::easter::{EASTER_MONDAY, PALM_SUNDAY, WHIT_MONDAY, WHIT_SUNDAY};
use fk_time::{easter_offset, first_saturday_in_range, nth_monday_of_month, Date, Month};

use crate::aggregate::try_aggregate_over_years;
use crate::holiday::SchoolBreak;
use crate::region::AustrianState::{self, *};

const EASTERN_GROUP: [AustrianState; 3] = [Burgenland, Niederoesterreich, Wien];

fn is_one_of(region: &str, states: &[AustrianState]) -> bool {
    states.iter().any(|s| s.name() == region)
}

/// The Landespatron day of `region`, if it has one.
pub fn landespatron_day(year: i32, region: impl AsRef<str>) -> Option<SchoolBreak> {
    let state = AustrianState::from_name(region.as_ref())?;
    let (month, day, local, en) = match state {
        Kaernten | Steiermark | Tirol | Vorarlberg => (Month::March, 19, "Hl. Josef", "St. Joseph"),
        Oberoesterreich => (Month::May, 4, "Hl. Florian", "St. Florian"),
        Salzburg => (Month::September, 24, "Hl. Rupert", "St. Rupert"),
        Burgenland => (Month::November, 11, "Hl. Martin", "St. Martin"),
        Wien | Niederoesterreich => (Month::November, 15, "Hl. Leopold", "St. Leopold"),
    };
    Some(SchoolBreak::single_day(Date::new(year, month, day), local, en))
}

/// Tag der Volksabstimmung (October 10), observed in Kärnten only.
pub fn plebiscite_day(year: i32, region: impl AsRef<str>) -> Option<SchoolBreak> {
    (region.as_ref() == Kaernten.name()).then(|| {
        SchoolBreak::single_day(
            Date::new(year, Month::October, 10),
            "Tag der Volksabstimmung",
            "Carinthian Plebiscite Day",
        )
    })
}

/// Semesterferien: Monday to Saturday of a February week chosen by state.
///
/// # Errors
/// [`Error::UnknownRegion`] if `region` is not an Austrian state.
pub fn semester_break(year: i32, region: impl AsRef<str>) -> Result<SchoolBreak> {
    let region = region.as_ref();
    let week = if is_one_of(region, &[Niederoesterreich, Wien]) {
        1
    } else if is_one_of(region, &[Burgenland, Kaernten, Salzburg, Tirol, Vorarlberg]) {
        2
    } else if is_one_of(region, &[Oberoesterreich, Steiermark]) {
        3
    } else {
        return Err(Error::unknown_region("semester-break calculation", region));
    };
    let start = nth_monday_of_month(year, Month::February, week);
    Ok(SchoolBreak::new(start, start + 5, "Semesterferien", "Semester Break"))
}

/// Osterferien: Saturday before Palm Sunday to Easter Monday.
pub fn easter_break(year: i32) -> SchoolBreak {
    SchoolBreak::new(
        easter_offset(year, PALM_SUNDAY - 1),
        easter_offset(year, EASTER_MONDAY),
        "Osterferien",
        "Easter Break",
    )
}

/// Pfingstferien: Saturday before Whit Sunday to Whit Monday.
pub fn whit_break(year: i32) -> SchoolBreak {
    SchoolBreak::new(
        easter_offset(year, WHIT_SUNDAY - 1),
        easter_offset(year, WHIT_MONDAY),
        "Pfingstferien",
        "Whit Break",
    )
}

/// First day of the school year beginning in September of `year`.
///
/// Burgenland, Niederösterreich and Wien start on the first Monday of
/// September, everyone else on the second.
pub fn school_year_start(year: i32, region: impl AsRef<str>) -> Date {
    let week = if is_one_of(region.as_ref(), &EASTERN_GROUP) { 1 } else { 2 };
    nth_monday_of_month(year, Month::September, week)
}

/// Sommerferien: from a Saturday in late June or early July until the day
/// before [`school_year_start`].
pub fn summer_holidays(year: i32, region: impl AsRef<str>) -> SchoolBreak {
    let region = region.as_ref();
    let start = if is_one_of(region, &EASTERN_GROUP) {
        first_saturday_in_range(year, Month::June, 28, 4)
    } else {
        first_saturday_in_range(year, Month::July, 5, 11)
    };
    let end = school_year_start(year, region) - 1;
    SchoolBreak::new(start, end, "Sommerferien", "Summer Holidays")
}

/// Herbstferien: October 27 to October 31.
pub fn autumn_break(year: i32) -> SchoolBreak {
    SchoolBreak::new(
        Date::new(year, Month::October, 27),
        Date::new(year, Month::October, 31),
        "Herbstferien",
        "Autumn Break",
    )
}

/// Weihnachtsferien: December 24 to January 6 of the following year.
pub fn christmas_break(year: i32) -> SchoolBreak {
    SchoolBreak::new(
        Date::new(year, Month::December, 24),
        Date::new(year + 1, Month::January, 6),
        "Weihnachtsferien",
        "Christmas Break",
    )
}

/// Every school-free period starting in `year` for `region`, sorted by
/// start date.
///
/// The Christmas break is attributed to the year it starts in.
///
/// # Errors
/// [`Error::UnknownRegion`] if `region` is not an Austrian state.
pub fn school_holidays(year: i32, region: impl AsRef<str>) -> Result<Vec<SchoolBreak>> {
    let region = region.as_ref();
    let mut breaks: Vec<SchoolBreak> = landespatron_day(year, region)
        .into_iter()
        .chain(plebiscite_day(year, region))
        .collect();
    breaks.push(semester_break(year, region)?);
    breaks.push(easter_break(year));
    breaks.push(whit_break(year));
    breaks.push(summer_holidays(year, region));
    breaks.push(autumn_break(year));
    breaks.push(christmas_break(year));
    breaks.sort_by_key(|b| b.start);
    Ok(breaks)
}

/// [`school_holidays`] for every year of `start_year ..= end_year`, merged
/// and sorted by start date.
///
/// # Errors
/// [`Error::UnknownRegion`] if `region` is not an Austrian state.
pub fn school_holidays_over_years(
    start_year: i32,
    end_year: i32,
    region: impl AsRef<str>,
) -> Result<Vec<SchoolBreak>> {
    let region = region.as_ref();
    try_aggregate_over_years(start_year, end_year, |year| school_holidays(year, region))
}
