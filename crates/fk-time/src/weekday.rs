//! `Weekday`.

/// Day of the week, numbered 1 (Monday) to 7 (Sunday) as in ISO 8601.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Weekday {
    /// Montag
    Monday = 1,
    /// Dienstag
    Tuesday,
    /// Mittwoch
    Wednesday,
    /// Donnerstag
    Thursday,
    /// Freitag
    Friday,
    /// Samstag
    Saturday,
    /// Sonntag
    Sunday,
}

impl Weekday {
    /// Monday through Sunday.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// The weekday with ISO ordinal `n`, or `None` outside 1–7.
    pub fn from_ordinal(n: u8) -> Option<Self> {
        Self::ALL.get(usize::from(n).checked_sub(1)?).copied()
    }

    /// ISO ordinal.
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// Days elapsed since the most recent Monday (Monday = 0 … Sunday = 6).
    pub fn num_days_from_monday(&self) -> u8 {
        self.ordinal() - 1
    }

    /// Days elapsed since the most recent Sunday (Sunday = 0 … Saturday = 6).
    pub fn num_days_from_sunday(&self) -> u8 {
        self.ordinal() % 7
    }

    /// Days to go forward from `self` to reach the next `target`
    /// (0 if they are equal).
    pub fn days_until(&self, target: Weekday) -> u8 {
        (target.ordinal() + 7 - self.ordinal()) % 7
    }

    /// German name (`"Montag"`, …).
    pub fn german_name(&self) -> &'static str {
        const NAMES: [&str; 7] = [
            "Montag", "Dienstag", "Mittwoch", "Donnerstag", "Freitag", "Samstag", "Sonntag",
        ];
        NAMES[usize::from(self.num_days_from_monday())]
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const NAMES: [&str; 7] = [
            "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
        ];
        f.write_str(NAMES[usize::from(self.num_days_from_monday())])
    }
}
