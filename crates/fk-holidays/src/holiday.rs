//! `Holiday` and `SchoolBreak` value types.

use fk_time::Date;
use serde::{Deserialize, Serialize};

/// A single public holiday.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Holiday {
    /// The day of the holiday.
    pub date: Date,
    /// German name (`"Ostermontag"`).
    pub name_local: String,
    /// English name (`"Easter Monday"`).
    pub name_en: String,
    /// Where the holiday applies (`"bundesweit"`, `"regional"`,
    /// `"nur Stadt Augsburg"`, …).  Never empty.
    pub scope: String,
}

impl Holiday {
    /// Create a holiday.
    pub fn new(
        date: Date,
        name_local: impl Into<String>,
        name_en: impl Into<String>,
        scope: impl Into<String>,
    ) -> Self {
        Holiday {
            date,
            name_local: name_local.into(),
            name_en: name_en.into(),
            scope: scope.into(),
        }
    }
}

impl std::fmt::Display for Holiday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({:>9}) - {} ({})",
            self.date,
            self.date.weekday().to_string(),
            self.name_local,
            self.scope
        )
    }
}

/// A school-free period, both ends inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SchoolBreak {
    /// First school-free day.
    pub start: Date,
    /// Last school-free day (inclusive).
    pub end: Date,
    /// German name (`"Semesterferien"`).
    pub name_local: String,
    /// English name (`"Semester Break"`).
    pub name_en: String,
}

impl SchoolBreak {
    /// Create a break spanning `start ..= end`.
    pub fn new(
        start: Date,
        end: Date,
        name_local: impl Into<String>,
        name_en: impl Into<String>,
    ) -> Self {
        debug_assert!(start <= end, "school break ends before it starts");
        SchoolBreak {
            start,
            end,
            name_local: name_local.into(),
            name_en: name_en.into(),
        }
    }

    /// A break lasting exactly one day.
    pub fn single_day(date: Date, name_local: impl Into<String>, name_en: impl Into<String>) -> Self {
        Self::new(date, date, name_local, name_en)
    }

    /// Number of school-free days, counting both ends.
    pub fn duration_days(&self) -> i32 {
        self.end - self.start + 1
    }

    /// The day after the break, i.e. the exclusive end used by range-based
    /// calendar formats.
    pub fn end_exclusive(&self) -> Date {
        self.end + 1
    }

    /// Return `true` if `date` falls within the break.
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }
}

impl std::fmt::Display for SchoolBreak {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let days = self.duration_days();
        let unit = if days == 1 { "day" } else { "days" };
        write!(
            f,
            "{}: {} to {} ({days} {unit})",
            self.name_local, self.start, self.end
        )
    }
}

/// Anything placed on a calendar at a start date.
///
/// Used to sort merged multi-year results.
pub trait CalendarEntry {
    /// The first day of the entry.
    fn start_date(&self) -> Date;
}

impl CalendarEntry for Holiday {
    fn start_date(&self) -> Date {
        self.date
    }
}

impl CalendarEntry for SchoolBreak {
    fn start_date(&self) -> Date {
        self.start
    }
}
