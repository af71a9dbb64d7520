//! German and Austrian federal states.
//!
//! Rule functions match regions by their canonical German name, so both
//! enums implement `AsRef<str>` and can be passed wherever a name is
//! expected.

use std::fmt;
use std::str::FromStr;

use fk_core::errors::{Error, Result};
use fk_core::utilities::normalize_filename;
use serde::{Deserialize, Serialize};

/// One of the 16 German Bundesländer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GermanState {
    /// Baden-Württemberg (BW)
    BadenWuerttemberg,
    /// Bayern (BY)
    Bayern,
    /// Berlin (BE)
    Berlin,
    /// Brandenburg (BB)
    Brandenburg,
    /// Bremen (HB)
    Bremen,
    /// Hamburg (HH)
    Hamburg,
    /// Hessen (HE)
    Hessen,
    /// Mecklenburg-Vorpommern (MV)
    MecklenburgVorpommern,
    /// Niedersachsen (NI)
    Niedersachsen,
    /// Nordrhein-Westfalen (NW)
    NordrheinWestfalen,
    /// Rheinland-Pfalz (RP)
    RheinlandPfalz,
    /// Saarland (SL)
    Saarland,
    /// Sachsen (SN)
    Sachsen,
    /// Sachsen-Anhalt (ST)
    SachsenAnhalt,
    /// Schleswig-Holstein (SH)
    SchleswigHolstein,
    /// Thüringen (TH)
    Thueringen,
}

impl GermanState {
    /// Every state, in alphabetical order of its German name.
    pub const ALL: [GermanState; 16] = [
        GermanState::BadenWuerttemberg,
        GermanState::Bayern,
        GermanState::Berlin,
        GermanState::Brandenburg,
        GermanState::Bremen,
        GermanState::Hamburg,
        GermanState::Hessen,
        GermanState::MecklenburgVorpommern,
        GermanState::Niedersachsen,
        GermanState::NordrheinWestfalen,
        GermanState::RheinlandPfalz,
        GermanState::Saarland,
        GermanState::Sachsen,
        GermanState::SachsenAnhalt,
        GermanState::SchleswigHolstein,
        GermanState::Thueringen,
    ];

    /// Canonical German name, e.g. `"Thüringen"`.
    pub fn name(&self) -> &'static str {
        match self {
            GermanState::BadenWuerttemberg => "Baden-Württemberg",
            GermanState::Bayern => "Bayern",
            GermanState::Berlin => "Berlin",
            GermanState::Brandenburg => "Brandenburg",
            GermanState::Bremen => "Bremen",
            GermanState::Hamburg => "Hamburg",
            GermanState::Hessen => "Hessen",
            GermanState::MecklenburgVorpommern => "Mecklenburg-Vorpommern",
            GermanState::Niedersachsen => "Niedersachsen",
            GermanState::NordrheinWestfalen => "Nordrhein-Westfalen",
            GermanState::RheinlandPfalz => "Rheinland-Pfalz",
            GermanState::Saarland => "Saarland",
            GermanState::Sachsen => "Sachsen",
            GermanState::SachsenAnhalt => "Sachsen-Anhalt",
            GermanState::SchleswigHolstein => "Schleswig-Holstein",
            GermanState::Thueringen => "Thüringen",
        }
    }

    /// Official two-letter abbreviation, e.g. `"TH"`.
    pub fn abbreviation(&self) -> &'static str {
        match self {
            GermanState::BadenWuerttemberg => "BW",
            GermanState::Bayern => "BY",
            GermanState::Berlin => "BE",
            GermanState::Brandenburg => "BB",
            GermanState::Bremen => "HB",
            GermanState::Hamburg => "HH",
            GermanState::Hessen => "HE",
            GermanState::MecklenburgVorpommern => "MV",
            GermanState::Niedersachsen => "NI",
            GermanState::NordrheinWestfalen => "NW",
            GermanState::RheinlandPfalz => "RP",
            GermanState::Saarland => "SL",
            GermanState::Sachsen => "SN",
            GermanState::SachsenAnhalt => "ST",
            GermanState::SchleswigHolstein => "SH",
            GermanState::Thueringen => "TH",
        }
    }

    /// ASCII file-name form of [`name`](Self::name), e.g. `"thueringen"`.
    pub fn slug(&self) -> String {
        normalize_filename(self.name())
    }

    /// Look a state up by its exact canonical name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }
}

impl fmt::Display for GermanState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl AsRef<str> for GermanState {
    fn as_ref(&self) -> &str {
        self.name()
    }
}

impl FromStr for GermanState {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| Error::unknown_region("German state lookup", s))
    }
}

/// One of the 9 Austrian Bundesländer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AustrianState {
    /// Burgenland (B)
    Burgenland,
    /// Kärnten (K)
    Kaernten,
    /// Niederösterreich (NÖ)
    Niederoesterreich,
    /// Oberösterreich (OÖ)
    Oberoesterreich,
    /// Salzburg (S)
    Salzburg,
    /// Steiermark (St)
    Steiermark,
    /// Tirol (T)
    Tirol,
    /// Vorarlberg (V)
    Vorarlberg,
    /// Wien (W)
    Wien,
}

impl AustrianState {
    /// Every state, in alphabetical order of its German name.
    pub const ALL: [AustrianState; 9] = [
        AustrianState::Burgenland,
        AustrianState::Kaernten,
        AustrianState::Niederoesterreich,
        AustrianState::Oberoesterreich,
        AustrianState::Salzburg,
        AustrianState::Steiermark,
        AustrianState::Tirol,
        AustrianState::Vorarlberg,
        AustrianState::Wien,
    ];

    /// Canonical German name, e.g. `"Niederösterreich"`.
    pub fn name(&self) -> &'static str {
        match self {
            AustrianState::Burgenland => "Burgenland",
            AustrianState::Kaernten => "Kärnten",
            AustrianState::Niederoesterreich => "Niederösterreich",
            AustrianState::Oberoesterreich => "Oberösterreich",
            AustrianState::Salzburg => "Salzburg",
            AustrianState::Steiermark => "Steiermark",
            AustrianState::Tirol => "Tirol",
            AustrianState::Vorarlberg => "Vorarlberg",
            AustrianState::Wien => "Wien",
        }
    }

    /// Customary abbreviation, e.g. `"NÖ"`.
    pub fn abbreviation(&self) -> &'static str {
        match self {
            AustrianState::Burgenland => "B",
            AustrianState::Kaernten => "K",
            AustrianState::Niederoesterreich => "NÖ",
            AustrianState::Oberoesterreich => "OÖ",
            AustrianState::Salzburg => "S",
            AustrianState::Steiermark => "St",
            AustrianState::Tirol => "T",
            AustrianState::Vorarlberg => "V",
            AustrianState::Wien => "W",
        }
    }

    /// ASCII file-name form of [`name`](Self::name), e.g. `"niederoesterreich"`.
    pub fn slug(&self) -> String {
        normalize_filename(self.name())
    }

    /// Look a state up by its exact canonical name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }
}

impl fmt::Display for AustrianState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl AsRef<str> for AustrianState {
    fn as_ref(&self) -> &str {
        self.name()
    }
}

impl FromStr for AustrianState {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| Error::unknown_region("Austrian state lookup", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_roundtrip() {
        for s in GermanState::ALL {
            assert_eq!(GermanState::from_name(s.name()), Some(s));
            assert_eq!(s.name().parse::<GermanState>(), Ok(s));
        }
        for s in AustrianState::ALL {
            assert_eq!(AustrianState::from_name(s.name()), Some(s));
            assert_eq!(s.to_string().parse::<AustrianState>(), Ok(s));
        }
    }

    #[test]
    fn matching_is_exact() {
        assert_eq!(GermanState::from_name("bayern"), None);
        assert_eq!(GermanState::from_name("Thueringen"), None);
        assert_eq!(AustrianState::from_name(" Wien"), None);
    }

    #[test]
    fn unknown_name_is_an_error() {
        let err = "Atlantis".parse::<AustrianState>().unwrap_err();
        assert_eq!(err, Error::unknown_region("Austrian state lookup", "Atlantis"));
        assert!(matches!(
            "Tirol".parse::<GermanState>(),
            Err(Error::UnknownRegion { .. })
        ));
    }

    #[test]
    fn slugs() {
        assert_eq!(GermanState::BadenWuerttemberg.slug(), "baden-wuerttemberg");
        assert_eq!(GermanState::Thueringen.slug(), "thueringen");
        assert_eq!(AustrianState::Kaernten.slug(), "kaernten");
        assert_eq!(AustrianState::Oberoesterreich.slug(), "oberoesterreich");
    }

    #[test]
    fn abbreviations_are_unique() {
        let mut abbrs: Vec<_> = GermanState::ALL.iter().map(|s| s.abbreviation()).collect();
        abbrs.sort_unstable();
        abbrs.dedup();
        assert_eq!(abbrs.len(), 16);
    }
}
