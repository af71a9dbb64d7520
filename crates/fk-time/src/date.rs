//! `Date` type.
//!
//! A date is stored as a serial number of days relative to the Unix epoch
//! (serial 0 = 1970-01-01, negative serials are earlier dates) in the
//! proleptic Gregorian calendar.  Day arithmetic is plain integer
//! arithmetic on the serial, so offsets such as "Easter + 60 days" never
//! fail.
//!
//! Only [`Date::from_ymd`] and [`str::parse`] validate their input; both
//! accept years in [`Date::MIN_YEAR`]`..=`[`Date::MAX_YEAR`].

use std::str::FromStr;

use fk_core::ensure;
use fk_core::errors::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::month::Month;
use crate::weekday::Weekday;

/// A calendar date without time component.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

impl Date {
    /// First year of the Gregorian calendar.
    pub const MIN_YEAR: i32 = 1583;

    /// Last year accepted by the validating constructors.
    pub const MAX_YEAR: i32 = 9999;

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from year, month (1–12), and day-of-month.
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self> {
        ensure!(
            (Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year),
            Date,
            "year {year} out of range [{}, {}]",
            Self::MIN_YEAR,
            Self::MAX_YEAR
        );
        ensure!((1..=12).contains(&month), Date, "month {month} out of range [1, 12]");
        let days_in = days_in_month(year, month);
        ensure!(
            (1..=days_in).contains(&day),
            Date,
            "day {day} out of range [1, {days_in}] for {year}-{month:02}"
        );
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    /// Create a date from a literal rule-table entry.
    ///
    /// The year is not range-checked, and a day past the end of the month
    /// rolls over into the following month (`February 30` is `March 1` or
    /// `March 2`).
    pub fn new(year: i32, month: Month, day: u8) -> Self {
        debug_assert!(day >= 1, "day must be >= 1");
        Date(serial_from_ymd(year, month.number(), 1) + i32::from(day) - 1)
    }

    /// Create a date from a serial number (days since 1970-01-01).
    pub fn from_serial(serial: i32) -> Self {
        Date(serial)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the year.
    pub fn year(&self) -> i32 {
        ymd_from_serial(self.0).0
    }

    /// Return the month number (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        (self.0 - serial_from_ymd(self.year(), 1, 1) + 1) as u16
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // 1970-01-01 was a Thursday (ordinal 4).
        let w = ((self.0 + 3).rem_euclid(7) + 1) as u8;
        Weekday::from_ordinal(w).unwrap_or(Weekday::Monday)
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days (negative `n` goes back).
    pub fn add_days(self, n: i32) -> Self {
        Date(self.0 + n)
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }

    /// Return the first day of the month containing this date.
    pub fn start_of_month(self) -> Self {
        let (y, m, _) = ymd_from_serial(self.0);
        Date(serial_from_ymd(y, m, 1))
    }

    /// Return the last day of the month containing this date.
    pub fn end_of_month(self) -> Self {
        let (y, m, _) = ymd_from_serial(self.0);
        Date(serial_from_ymd(y, m, days_in_month(y, m)))
    }

    /// Iterate over every date from `self` to `last`, both inclusive.
    pub fn iter_through(self, last: Date) -> impl Iterator<Item = Date> {
        (self.0..=last.0).map(Date)
    }

    // ── Formatting ────────────────────────────────────────────────────────────

    /// Format as `YYYYMMDD` (the iCalendar `DATE` value form).
    pub fn to_compact_string(&self) -> String {
        let (y, m, d) = ymd_from_serial(self.0);
        format!("{y:04}{m:02}{d:02}")
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs)
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs)
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

impl std::ops::AddAssign<i32> for Date {
    fn add_assign(&mut self, rhs: i32) {
        self.0 += rhs;
    }
}

impl std::ops::SubAssign<i32> for Date {
    fn sub_assign(&mut self, rhs: i32) {
        self.0 -= rhs;
    }
}

// ── Display / parsing ─────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "Date({y:04}-{m:02}-{d:02})")
    }
}

impl FromStr for Date {
    type Err = Error;

    /// Parse an ISO `YYYY-MM-DD` date.
    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.splitn(3, '-');
        let (Some(y), Some(m), Some(d)) = (parts.next(), parts.next(), parts.next()) else {
            return Err(Error::Date(format!("expected YYYY-MM-DD, got {s:?}")));
        };
        let well_formed = [(y, 4), (m, 2), (d, 2)]
            .iter()
            .all(|&(field, len)| field.len() == len && field.bytes().all(|b| b.is_ascii_digit()));
        ensure!(well_formed, Date, "expected YYYY-MM-DD, got {s:?}");
        let parse = |field: &str| {
            field
                .parse::<u16>()
                .map_err(|_| Error::Date(format!("expected YYYY-MM-DD, got {s:?}")))
        };
        Date::from_ymd(i32::from(parse(y)?), parse(m)? as u8, parse(d)? as u8)
    }
}

impl Serialize for Date {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 31,
    }
}

/// Convert (year, month, day) to a serial number.
///
/// Counts in 400-year eras starting on March 1, so that the leap day is
/// the last day of the computational year.
fn serial_from_ymd(year: i32, month: u8, day: u8) -> i32 {
    let m = i64::from(month);
    let y = i64::from(year) - i64::from(m <= 2);
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let mp = if m > 2 { m - 3 } else { m + 9 };
    let doy = (153 * mp + 2) / 5 + i64::from(day) - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    (era * 146_097 + doe - 719_468) as i32
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (i32, u8, u8) {
    let z = i64::from(serial) + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = yoe + era * 400 + i64::from(m <= 2);
    (y as i32, m as u8, d as u8)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
