//! Global library settings.
//!
//! [`Settings`] holds the **reference year**, the anchor of every rolling
//! calendar window.  It is a process-wide singleton accessed via a
//! `std::sync::OnceLock`.  When no override is set, the reference year is
//! the current local calendar year.
//!
//! Tests that pin the reference year should do so through
//! [`ScopedReferenceYear`], which restores the previous value on drop.

use std::sync::{Mutex, OnceLock, PoisonError};

use chrono::Datelike;

use crate::Year;

/// Process-wide settings used by the ferienkalender crates.
pub struct Settings {
    reference_year: Mutex<Option<Year>>,
}

static INSTANCE: OnceLock<Settings> = OnceLock::new();

impl Settings {
    /// Return a reference to the global singleton.
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(|| Settings {
            reference_year: Mutex::new(None),
        })
    }

    /// The year rolling windows are anchored on.
    ///
    /// Returns the override if one is set, otherwise the current year.
    pub fn reference_year(&self) -> Year {
        self.reference_year_override()
            .unwrap_or_else(|| chrono::Local::now().year())
    }

    /// Return the override, if any.
    pub fn reference_year_override(&self) -> Option<Year> {
        *self
            .reference_year
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Pin the reference year.
    pub fn set_reference_year(&self, year: Year) {
        *self
            .reference_year
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(year);
    }

    /// Clear the override, resetting it to "use the current year".
    pub fn reset_reference_year(&self) {
        *self
            .reference_year
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = None;
    }
}

/// RAII guard that pins the reference year and restores the previous
/// setting when dropped.
#[must_use = "the reference year is restored as soon as the guard is dropped"]
pub struct ScopedReferenceYear {
    previous: Option<Year>,
}

impl ScopedReferenceYear {
    /// Pin the reference year to `year` for the lifetime of the guard.
    pub fn new(year: Year) -> Self {
        let settings = Settings::instance();
        let previous = settings.reference_year_override();
        settings.set_reference_year(year);
        ScopedReferenceYear { previous }
    }
}

impl Drop for ScopedReferenceYear {
    fn drop(&mut self) {
        let settings = Settings::instance();
        match self.previous {
            Some(year) => settings.set_reference_year(year),
            None => settings.reset_reference_year(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The singleton is shared by every test in this binary, so all
    // assertions on it live in a single test.
    #[test]
    fn scoped_override_is_restored() {
        let settings = Settings::instance();
        settings.reset_reference_year();
        assert_eq!(settings.reference_year_override(), None);
        assert!(settings.reference_year() >= 2024);

        {
            let _outer = ScopedReferenceYear::new(2030);
            assert_eq!(settings.reference_year(), 2030);
            {
                let _inner = ScopedReferenceYear::new(1999);
                assert_eq!(settings.reference_year(), 1999);
            }
            assert_eq!(settings.reference_year(), 2030);
        }
        assert_eq!(settings.reference_year_override(), None);
    }
}
