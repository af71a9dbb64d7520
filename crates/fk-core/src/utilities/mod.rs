//! Miscellaneous utilities.

/// String formatting helpers for file names and identifiers.
pub mod data_formatters;

pub use data_formatters::{normalize_filename, uid_token};
