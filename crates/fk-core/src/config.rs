//! Generator configuration.
//!
//! Every field has a default, so an empty JSON object (`{}`) is a valid
//! configuration that reproduces the published calendars.

use serde::{Deserialize, Serialize};

use crate::ensure;
use crate::errors::{Error, Result};

/// Top-level configuration for calendar generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Span of the rolling public-holiday calendars.
    pub window: WindowConfig,
    /// Number of years after the reference year covered by the
    /// school-holiday calendars.
    pub school_years_ahead: u16,
    /// iCalendar metadata.
    pub ics: IcsConfig,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            window: WindowConfig::default(),
            school_years_ahead: 5,
            ics: IcsConfig::default(),
        }
    }
}

/// Years before and after the reference year in a rolling calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WindowConfig {
    /// Years included before the reference year.
    pub years_before: u16,
    /// Years included after the reference year.
    pub years_after: u16,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            years_before: 1,
            years_after: 5,
        }
    }
}

/// Values written into every generated `VCALENDAR`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IcsConfig {
    /// `PRODID` property.
    pub prod_id: String,
    /// `PRODID` of the rolling Austrian public-holiday calendar, which the
    /// published feed has always announced under its own product name.
    pub austrian_rolling_prod_id: String,
    /// `X-WR-TIMEZONE` property.
    pub timezone: String,
}

impl Default for IcsConfig {
    fn default() -> Self {
        IcsConfig {
            prod_id: "-//Public Holidays//AT".to_string(),
            austrian_rolling_prod_id: "-//Austrian Holidays//AT".to_string(),
            timezone: "Europe/Vienna".to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: GeneratorConfig =
            serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants serde cannot express.
    pub fn validate(&self) -> Result<()> {
        let ics = &self.ics;
        for (field, value) in [
            ("ics.prod_id", &ics.prod_id),
            ("ics.austrian_rolling_prod_id", &ics.austrian_rolling_prod_id),
            ("ics.timezone", &ics.timezone),
        ] {
            ensure!(!value.trim().is_empty(), Config, "{field} must not be empty");
            ensure!(
                !value.contains(['\r', '\n']),
                Config,
                "{field} must not contain line breaks"
            );
        }
        Ok(())
    }
}
