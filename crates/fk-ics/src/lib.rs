//! # fk-ics
//!
//! iCalendar rendering for holiday feeds, and the [`Catalog`] of published
//! calendar files.
//!
//! ```
//! use chrono::Utc;
//! use fk_core::GeneratorConfig;
//! use fk_ics::Catalog;
//!
//! let catalog = Catalog::new(GeneratorConfig::default(), 2025, Utc::now()).unwrap();
//! let file = catalog.austrian_year(2025);
//! assert!(file.content.starts_with("BEGIN:VCALENDAR\r\n"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Publication catalog.
pub mod catalog;

/// RFC 5545 writer.
pub mod ics;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use catalog::{CalendarFile, Catalog};
pub use ics::{escape_text, fold_line, IcsCalendar, IcsEvent};
