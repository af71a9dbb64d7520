//! # ferienkalender
//!
//! Public holidays for the German and Austrian federal states, Austrian
//! school holidays, and their publication as iCalendar feeds.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `fk-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! ferienkalender = "0.1"
//! ```
//!
//! ```rust
//! use ferienkalender::holidays::school::austria::semester_break;
//! use ferienkalender::time::Date;
//!
//! let b = semester_break(2025, "Wien").unwrap();
//! assert_eq!(b.start, Date::from_ymd(2025, 2, 3).unwrap());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Errors, settings, configuration.
pub use fk_core as core;

/// Dates, Easter, Advent, and weekday rules.
pub use fk_time as time;

/// Public and school holiday tables.
pub use fk_holidays as holidays;

/// iCalendar output and the publication catalog.
pub use fk_ics as ics;

/// Commonly used items.
pub mod prelude {
    pub use fk_core::{Error, GeneratorConfig, Result, Settings};
    pub use fk_holidays::{
        austrian_holidays, german_holidays, school_holidays, AustrianState, GermanState, Holiday,
        HolidayCalendar, SchoolBreak,
    };
    pub use fk_ics::{CalendarFile, Catalog};
    pub use fk_time::{easter, Date, Month, Weekday};
}
