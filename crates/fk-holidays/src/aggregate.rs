//! Multi-year aggregation.

use fk_core::config::WindowConfig;
use tracing::debug;

use crate::holiday::CalendarEntry;

/// Call `per_year` for every year of `start_year ..= end_year`, concatenate
/// the results and stable-sort them by start date.
///
/// Entries are not deduplicated.  An empty range (`start_year > end_year`)
/// yields an empty vector.
pub fn aggregate_over_years<T, F>(start_year: i32, end_year: i32, per_year: F) -> Vec<T>
where
    T: CalendarEntry,
    F: FnMut(i32) -> Vec<T>,
{
    let mut entries: Vec<T> = (start_year..=end_year).flat_map(per_year).collect();
    entries.sort_by_key(|e| e.start_date());
    debug!(start_year, end_year, entries = entries.len(), "aggregated calendar entries");
    entries
}

/// Fallible [`aggregate_over_years`]: stops at the first year whose rule
/// fails and returns that error.
pub fn try_aggregate_over_years<T, E, F>(
    start_year: i32,
    end_year: i32,
    mut per_year: F,
) -> Result<Vec<T>, E>
where
    T: CalendarEntry,
    F: FnMut(i32) -> Result<Vec<T>, E>,
{
    let mut entries = Vec::new();
    for year in start_year..=end_year {
        entries.extend(per_year(year)?);
    }
    entries.sort_by_key(|e: &T| e.start_date());
    debug!(start_year, end_year, entries = entries.len(), "aggregated calendar entries");
    Ok(entries)
}

/// A span of years around an anchor year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollingWindow {
    /// Years included before the anchor.
    pub years_before: u16,
    /// Years included after the anchor.
    pub years_after: u16,
}

impl Default for RollingWindow {
    fn default() -> Self {
        RollingWindow::from(&WindowConfig::default())
    }
}

impl From<&WindowConfig> for RollingWindow {
    fn from(config: &WindowConfig) -> Self {
        RollingWindow {
            years_before: config.years_before,
            years_after: config.years_after,
        }
    }
}

impl RollingWindow {
    /// Window spanning `years_before` years before and `years_after` years
    /// after the anchor.
    pub fn new(years_before: u16, years_after: u16) -> Self {
        RollingWindow {
            years_before,
            years_after,
        }
    }

    /// First and last year (inclusive) around `anchor`.
    pub fn resolve(&self, anchor: i32) -> (i32, i32) {
        (
            anchor - i32::from(self.years_before),
            anchor + i32::from(self.years_after),
        )
    }
}
