//! Weekday-of-month rules.
//!
//! Austrian school law fixes most term dates as "the n-th Monday of a
//! month" or "the Saturday falling in a given range of days"; these are the
//! building blocks for such rules.

use crate::date::Date;
use crate::month::Month;
use crate::weekday::Weekday;

/// The first `weekday` on or after `date`.
pub fn first_weekday_on_or_after(date: Date, weekday: Weekday) -> Date {
    date + i32::from(date.weekday().days_until(weekday))
}

/// The last `weekday` on or before `date`.
pub fn last_weekday_on_or_before(date: Date, weekday: Weekday) -> Date {
    date - i32::from(weekday.days_until(date.weekday()))
}

/// The `n`-th (1-based) `weekday` of `month` in `year`.
///
/// Computed as the first such weekday plus `n - 1` weeks, so an `n` past
/// the last occurrence continues into the following month.
pub fn nth_weekday_of_month(year: i32, month: Month, n: u8, weekday: Weekday) -> Date {
    debug_assert!(n >= 1, "n is 1-based");
    let first = first_weekday_on_or_after(Date::new(year, month, 1), weekday);
    first + 7 * i32::from(n.saturating_sub(1))
}

/// The `n`-th (1-based) Monday of `month` in `year`.
///
/// ```
/// use fk_time::{nth_monday_of_month, Date, Month};
///
/// // February 2025 starts on a Saturday
/// assert_eq!(nth_monday_of_month(2025, Month::February, 1), Date::from_ymd(2025, 2, 3).unwrap());
/// assert_eq!(nth_monday_of_month(2025, Month::February, 3), Date::from_ymd(2025, 2, 17).unwrap());
/// ```
pub fn nth_monday_of_month(year: i32, month: Month, n: u8) -> Date {
    nth_weekday_of_month(year, month, n, Weekday::Monday)
}

/// The earliest Saturday on or after `start_day` of `month` in the window
/// `start_day ..= end_day`.
///
/// An `end_day` smaller than `start_day` places the end of the window in
/// the following month (e.g. June 28 – July 4).  Should the first Saturday
/// fall past the end of the window, the search restarts from the 1st of
/// the following month.
pub fn first_saturday_in_range(year: i32, month: Month, start_day: u8, end_day: u8) -> Date {
    let start = Date::new(year, month, start_day);
    let next_month_year = if month == Month::December { year + 1 } else { year };
    let window_end = if end_day >= start_day {
        Date::new(year, month, end_day)
    } else {
        Date::new(next_month_year, month.succ(), end_day)
    };

    let candidate = first_weekday_on_or_after(start, Weekday::Saturday);
    if candidate <= window_end {
        candidate
    } else {
        first_weekday_on_or_after(Date::new(next_month_year, month.succ(), 1), Weekday::Saturday)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn first_monday_when_month_starts_on_monday() {
        // 2024-01-01 is a Monday
        assert_eq!(nth_monday_of_month(2024, Month::January, 1), date(2024, 1, 1));
        assert_eq!(nth_monday_of_month(2024, Month::January, 5), date(2024, 1, 29));
    }

    #[test]
    fn september_mondays() {
        // 2025-09-01 is a Monday, 2026-09-01 a Tuesday
        assert_eq!(nth_monday_of_month(2025, Month::September, 1), date(2025, 9, 1));
        assert_eq!(nth_monday_of_month(2025, Month::September, 2), date(2025, 9, 8));
        assert_eq!(nth_monday_of_month(2026, Month::September, 1), date(2026, 9, 7));
        assert_eq!(nth_monday_of_month(2026, Month::September, 2), date(2026, 9, 14));
    }

    #[test]
    fn nth_weekday_generic() {
        // 3rd Wednesday of March 2024 = March 20
        let d = nth_weekday_of_month(2024, Month::March, 3, Weekday::Wednesday);
        assert_eq!(d, date(2024, 3, 20));
    }

    #[test]
    fn weekday_search_both_directions() {
        let wed = date(2024, 11, 20);
        assert_eq!(first_weekday_on_or_after(wed, Weekday::Wednesday), wed);
        assert_eq!(first_weekday_on_or_after(wed, Weekday::Saturday), date(2024, 11, 23));
        assert_eq!(last_weekday_on_or_before(wed, Weekday::Sunday), date(2024, 11, 17));
        assert_eq!(last_weekday_on_or_before(wed, Weekday::Wednesday), wed);
    }

    #[test]
    fn saturday_window_across_month_end() {
        // 2025-06-28 is a Saturday
        assert_eq!(first_saturday_in_range(2025, Month::June, 28, 4), date(2025, 6, 28));
        // 2026-06-28 is a Sunday, so the window's Saturday is July 4
        assert_eq!(first_saturday_in_range(2026, Month::June, 28, 4), date(2026, 7, 4));
    }

    #[test]
    fn saturday_window_within_month() {
        assert_eq!(first_saturday_in_range(2025, Month::July, 5, 11), date(2025, 7, 5));
        assert_eq!(first_saturday_in_range(2026, Month::July, 5, 11), date(2026, 7, 11));
    }

    #[test]
    fn saturday_past_short_window_restarts_next_month() {
        // 2024-06-24 is a Monday; no Saturday in June 24–26
        assert_eq!(first_saturday_in_range(2024, Month::June, 24, 26), date(2024, 7, 6));
    }

    #[test]
    fn every_seven_day_window_contains_its_saturday() {
        for year in 2000..=2050 {
            let d = first_saturday_in_range(year, Month::June, 28, 4);
            assert_eq!(d.weekday(), Weekday::Saturday);
            assert!(d >= date(year, 6, 28) && d <= date(year, 7, 4), "{d}");
        }
    }
}
