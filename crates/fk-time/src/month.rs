//! `Month` of the year.

/// Month of the year, numbered 1–12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Month {
    /// Januar
    January = 1,
    /// Februar
    February,
    /// März
    March,
    /// April
    April,
    /// Mai
    May,
    /// Juni
    June,
    /// Juli
    July,
    /// August
    August,
    /// September
    September,
    /// Oktober
    October,
    /// November
    November,
    /// Dezember
    December,
}

impl Month {
    /// All months in calendar order.
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// The month numbered `n` (1 = January), or `None` outside 1–12.
    pub fn from_number(n: u8) -> Option<Self> {
        Self::ALL.get(usize::from(n).checked_sub(1)?).copied()
    }

    /// 1-based month number.
    pub fn number(&self) -> u8 {
        *self as u8
    }

    /// The following month; December wraps to January.
    pub fn succ(&self) -> Month {
        Self::ALL[usize::from(self.number()) % 12]
    }

    /// Number of days in this month of `year`.
    pub fn days_in(&self, year: i32) -> u8 {
        crate::date::days_in_month(year, self.number())
    }

    /// German name (`"Januar"`, `"März"`, …).
    pub fn german_name(&self) -> &'static str {
        const NAMES: [&str; 12] = [
            "Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August", "September",
            "Oktober", "November", "Dezember",
        ];
        NAMES[usize::from(self.number()) - 1]
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.german_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip() {
        for n in 1..=12u8 {
            let m = Month::from_number(n).unwrap();
            assert_eq!(m.number(), n);
        }
    }

    #[test]
    fn out_of_range() {
        assert!(Month::from_number(0).is_none());
        assert!(Month::from_number(13).is_none());
    }

    #[test]
    fn succ_wraps_at_december() {
        assert_eq!(Month::June.succ(), Month::July);
        assert_eq!(Month::December.succ(), Month::January);
    }

    #[test]
    fn german_names() {
        assert_eq!(Month::March.to_string(), "März");
        assert_eq!(Month::December.german_name(), "Dezember");
    }

    #[test]
    fn february_length() {
        assert_eq!(Month::February.days_in(2024), 29);
        assert_eq!(Month::February.days_in(2025), 28);
        assert_eq!(Month::February.days_in(1900), 28);
        assert_eq!(Month::February.days_in(2000), 29);
    }
}
