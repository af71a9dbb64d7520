//! # fk-core
//!
//! Core error definitions, process-wide settings, and generator
//! configuration shared by the other `fk-*` crates.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Generator configuration (rolling window, iCalendar metadata).
pub mod config;

/// Error types and the `ensure!` macro.
pub mod errors;

/// Global settings (reference year).
pub mod settings;

/// Miscellaneous utilities.
pub mod utilities;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Calendar year as used by every rule function.
pub type Year = i32;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use config::{GeneratorConfig, IcsConfig, WindowConfig};
pub use errors::{Error, Result};
pub use settings::{ScopedReferenceYear, Settings};
