//! Country-specific public holiday calendars.

/// Austria.
pub mod austria;

/// Germany, per Bundesland.
pub mod germany;
