//! Advent Sundays and the Day of Repentance and Prayer (Buß- und Bettag).

use crate::date::Date;
use crate::month::Month;

/// The fourth Sunday of Advent: the Sunday on or before December 25.
pub fn fourth_advent(year: i32) -> Date {
    let christmas = Date::new(year, Month::December, 25);
    christmas - i32::from(christmas.weekday().num_days_from_sunday())
}

/// The first Sunday of Advent, three weeks before the fourth.
pub fn first_advent(year: i32) -> Date {
    fourth_advent(year) - 21
}

/// Buß- und Bettag: the Wednesday eleven days before [`first_advent`].
///
/// Because [`fourth_advent`] may be December 25 itself, years in which
/// Christmas falls on a Sunday yield November 23.
///
/// ```
/// use fk_time::{repentance_day, Date};
///
/// assert_eq!(repentance_day(2024), Date::from_ymd(2024, 11, 20).unwrap());
/// ```
pub fn repentance_day(year: i32) -> Date {
    first_advent(year) - 11
}
