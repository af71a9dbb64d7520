//! Easter Sunday and the movable feasts anchored on it.
//!
//! [`easter`] implements Gauss's algorithm for the Gregorian calendar,
//! including the two exceptions that keep Easter on or before April 25.
//! The `*_OFFSET` constants give each movable feast as a day offset from
//! Easter Sunday.

use crate::date::Date;
use crate::month::Month;

/// Good Friday.
pub const GOOD_FRIDAY: i32 = -2;
/// Palm Sunday.
pub const PALM_SUNDAY: i32 = -7;
/// Easter Monday.
pub const EASTER_MONDAY: i32 = 1;
/// Ascension Day.
pub const ASCENSION: i32 = 39;
/// Whit Sunday (Pentecost).
pub const WHIT_SUNDAY: i32 = 49;
/// Whit Monday.
pub const WHIT_MONDAY: i32 = 50;
/// Corpus Christi.
pub const CORPUS_CHRISTI: i32 = 60;

/// Easter Sunday of `year` (Gregorian calendar, 1583 onwards).
///
/// ```
/// use fk_time::{easter, Date};
///
/// assert_eq!(easter(2024), Date::from_ymd(2024, 3, 31).unwrap());
/// assert_eq!(easter(2025), Date::from_ymd(2025, 4, 20).unwrap());
/// ```
pub fn easter(year: i32) -> Date {
    let a = year.rem_euclid(19);
    let b = year.rem_euclid(4);
    let c = year.rem_euclid(7);
    let k = year.div_euclid(100);
    let p = (13 + 8 * k).div_euclid(25);
    let q = k.div_euclid(4);
    let m = (15 - p + k - q).rem_euclid(30);
    let n = (4 + k - q).rem_euclid(7);
    let d = (19 * a + m).rem_euclid(30);
    let e = (2 * b + 4 * c + 6 * d + n).rem_euclid(7);

    let (month, mut day) = if d + e < 10 {
        (Month::March, d + e + 22)
    } else {
        (Month::April, d + e - 9)
    };

    if month == Month::April {
        if day == 26 {
            day = 19;
        } else if day == 25 && d == 28 && e == 6 && a > 10 {
            day = 18;
        }
    }

    // day is in 22..=31 for March and 1..=25 for April
    Date::new(year, month, day as u8)
}

/// Easter Sunday of `year` shifted by `days`.
pub fn easter_offset(year: i32, days: i32) -> Date {
    easter(year) + days
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weekday::Weekday;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn known_easter_sundays() {
        assert_eq!(easter(2000), date(2000, 4, 23));
        assert_eq!(easter(2019), date(2019, 4, 21));
        assert_eq!(easter(2023), date(2023, 4, 9));
        assert_eq!(easter(2024), date(2024, 3, 31));
        assert_eq!(easter(2025), date(2025, 4, 20));
        assert_eq!(easter(2026), date(2026, 4, 5));
        assert_eq!(easter(2027), date(2027, 3, 28));
    }

    #[test]
    fn april_exceptions() {
        // d + e = 35 would give April 26
        assert_eq!(easter(1981), date(1981, 4, 19));
        // d = 28, e = 6, a > 10 would give April 25
        assert_eq!(easter(1954), date(1954, 4, 18));
        // The latest possible Easter date
        assert_eq!(easter(1943), date(1943, 4, 25));
        assert_eq!(easter(2038), date(2038, 4, 25));
        // The earliest possible Easter date
        assert_eq!(easter(1818), date(1818, 3, 22));
        assert_eq!(easter(2285), date(2285, 3, 22));
    }

    #[test]
    fn offsets_land_on_expected_weekdays() {
        for year in [2023, 2024, 2025] {
            assert_eq!(easter_offset(year, GOOD_FRIDAY).weekday(), Weekday::Friday);
            assert_eq!(easter_offset(year, PALM_SUNDAY).weekday(), Weekday::Sunday);
            assert_eq!(easter_offset(year, EASTER_MONDAY).weekday(), Weekday::Monday);
            assert_eq!(easter_offset(year, ASCENSION).weekday(), Weekday::Thursday);
            assert_eq!(easter_offset(year, WHIT_SUNDAY).weekday(), Weekday::Sunday);
            assert_eq!(easter_offset(year, WHIT_MONDAY).weekday(), Weekday::Monday);
            assert_eq!(easter_offset(year, CORPUS_CHRISTI).weekday(), Weekday::Thursday);
        }
    }

    #[test]
    fn corpus_christi_2025() {
        assert_eq!(easter_offset(2025, CORPUS_CHRISTI), date(2025, 6, 19));
        assert_eq!(easter_offset(2025, ASCENSION), date(2025, 5, 29));
        assert_eq!(easter_offset(2025, WHIT_MONDAY), date(2025, 6, 9));
    }
}
