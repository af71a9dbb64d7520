//! Error types for ferienkalender.
//!
//! All crates in the workspace report failures through the single
//! `thiserror`-derived [`Error`] enum.  The [`ensure!`](crate::ensure)
//! macro is the shorthand for an early return on a failed check.

use thiserror::Error;

/// The top-level error type used throughout ferienkalender.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Date construction or arithmetic error.
    #[error("date error: {0}")]
    Date(String),

    /// A region name that the rule at hand does not know.
    #[error("unrecognized region for {context}: {region}")]
    UnknownRegion {
        /// Which rule rejected the region (e.g. `"semester-break calculation"`).
        context: &'static str,
        /// The region name as passed by the caller.
        region: String,
    },

    /// Invalid or unreadable configuration.
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Build an [`Error::UnknownRegion`].
    pub fn unknown_region(context: &'static str, region: impl Into<String>) -> Self {
        Error::UnknownRegion {
            context,
            region: region.into(),
        }
    }
}

/// Shorthand `Result` type used throughout ferienkalender.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::<variant>(format!(...)))` if `$cond` is false.
///
/// The variant must be one that wraps a message (`Date` or `Config`).
///
/// # Example
/// ```
/// use fk_core::{ensure, errors::Error};
/// fn positive(x: i32) -> fk_core::errors::Result<i32> {
///     ensure!(x > 0, Config, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert!(matches!(positive(-1), Err(Error::Config(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $variant:ident, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::$variant(format!($($msg)*)));
        }
    };
}
