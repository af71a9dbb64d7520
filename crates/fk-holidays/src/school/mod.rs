//! School holiday rules.

/// Austrian school holidays per Bundesland.
pub mod austria;
