//! The set of published calendar files.
//!
//! A [`Catalog`] turns holiday rules into ready-to-write [`CalendarFile`]s.
//! It never touches the file system; paths are relative to whatever output
//! directory the caller chooses.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use fk_core::config::GeneratorConfig;
use fk_core::errors::Result;
use fk_core::utilities::uid_token;
use fk_core::Settings;
use fk_holidays::school::austria::school_holidays_over_years;
use fk_holidays::{
    austrian_holidays, austrian_holidays_over_years, german_holidays_over_years, AustrianState,
    GermanState, Holiday, RollingWindow, SchoolBreak,
};
use tracing::{debug, info};

use crate::ics::{IcsCalendar, IcsEvent};

/// A rendered calendar and the relative path it is published under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarFile {
    /// Path relative to the output directory.
    pub path: PathBuf,
    /// iCalendar text.
    pub content: String,
}

/// Builds every published calendar for one reference year.
#[derive(Debug, Clone)]
pub struct Catalog {
    config: GeneratorConfig,
    reference_year: i32,
    generated_at: DateTime<Utc>,
}

impl Catalog {
    /// Catalog anchored at `reference_year`, stamped with `generated_at`.
    ///
    /// # Errors
    /// [`Error::Config`](fk_core::Error::Config) if `config` fails validation.
    pub fn new(
        config: GeneratorConfig,
        reference_year: i32,
        generated_at: DateTime<Utc>,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Catalog {
            config,
            reference_year,
            generated_at,
        })
    }

    /// Catalog anchored at the process-wide reference year and stamped
    /// with the current time.
    ///
    /// # Errors
    /// [`Error::Config`](fk_core::Error::Config) if `config` fails validation.
    pub fn current(config: GeneratorConfig) -> Result<Self> {
        Self::new(config, Settings::instance().reference_year(), Utc::now())
    }

    /// The reference year.
    pub fn reference_year(&self) -> i32 {
        self.reference_year
    }

    /// First and last year of the rolling public-holiday calendars.
    pub fn rolling_range(&self) -> (i32, i32) {
        RollingWindow::from(&self.config.window).resolve(self.reference_year)
    }

    /// First and last year of the school-holiday calendars.
    pub fn school_range(&self) -> (i32, i32) {
        let start = self.reference_year;
        (start, start + i32::from(self.config.school_years_ahead))
    }

    fn calendar(&self, name: String, description: String) -> IcsCalendar {
        IcsCalendar::new(&self.config.ics, name, description)
    }

    fn file(&self, path: impl Into<PathBuf>, calendar: &IcsCalendar) -> CalendarFile {
        let path = path.into();
        debug!(path = %path.display(), events = calendar.events.len(), "built calendar file");
        CalendarFile {
            path,
            content: calendar.render(self.generated_at),
        }
    }

    /// Rolling public-holiday calendar of one German state.
    pub fn german_rolling(&self, state: GermanState) -> CalendarFile {
        let (start, end) = self.rolling_range();
        let mut cal = self.calendar(
            format!("Feiertage {state}"),
            format!("Gesetzliche Feiertage in {state}, Deutschland ({start}-{end})"),
        );
        cal.extend(
            german_holidays_over_years(start, end, state)
                .iter()
                .map(|h| german_event(h, state)),
        );
        self.file(format!("german_holidays_{}.ics", state.slug()), &cal)
    }

    /// Rolling Austrian public-holiday calendar.
    pub fn austrian_rolling(&self) -> CalendarFile {
        let (start, end) = self.rolling_range();
        let mut cal = self.calendar(
            "Österreichische Feiertage".to_string(),
            format!("Gesetzliche Feiertage in Österreich ({start}-{end})"),
        );
        cal.prod_id = self.config.ics.austrian_rolling_prod_id.clone();
        cal.extend(austrian_holidays_over_years(start, end).iter().map(austrian_event));
        self.file("austrian_holidays.ics", &cal)
    }

    /// Austrian public holidays of a single year.
    pub fn austrian_year(&self, year: i32) -> CalendarFile {
        let mut cal = self.calendar(
            "Österreichische Feiertage".to_string(),
            "Gesetzliche Feiertage in Österreich".to_string(),
        );
        cal.extend(austrian_holidays(year).iter().map(austrian_event));
        self.file(format!("austrian_holidays_{year}.ics"), &cal)
    }

    /// School-holiday calendar of one Austrian state.
    ///
    /// The description's end year is one past the last generated year
    /// because its Christmas break runs into January.
    ///
    /// # Errors
    /// Propagates rule failures from the school-holiday computation.
    pub fn austrian_school(&self, state: AustrianState) -> Result<CalendarFile> {
        let (start, end) = self.school_range();
        let mut cal = self.calendar(
            state.name().to_string(),
            format!("Schulferien in {state}, Österreich ({start}-{})", end + 1),
        );
        cal.extend(
            school_holidays_over_years(start, end, state)?
                .iter()
                .map(|b| school_event(b, state)),
        );
        Ok(self.file(
            PathBuf::from("school").join(format!("school_holidays_{}.ics", state.slug())),
            &cal,
        ))
    }

    /// Every published calendar: the 16 German states, the rolling
    /// Austrian calendar, then the 9 Austrian school calendars.
    ///
    /// # Errors
    /// Propagates the first failure from [`austrian_school`](Self::austrian_school).
    pub fn all(&self) -> Result<Vec<CalendarFile>> {
        let mut files: Vec<CalendarFile> =
            GermanState::ALL.iter().map(|&s| self.german_rolling(s)).collect();
        files.push(self.austrian_rolling());
        for state in AustrianState::ALL {
            files.push(self.austrian_school(state)?);
        }
        info!(
            reference_year = self.reference_year,
            files = files.len(),
            "built calendar catalog"
        );
        Ok(files)
    }
}

fn german_event(holiday: &Holiday, state: GermanState) -> IcsEvent {
    IcsEvent::single_day(
        holiday.date,
        format!(
            "{}-{}-{}@german-holidays.local",
            holiday.date.to_compact_string(),
            uid_token(&holiday.name_en),
            uid_token(state.name())
        ),
        &holiday.name_local,
        format!("{} - {}", holiday.name_en, holiday.scope),
    )
}

fn austrian_event(holiday: &Holiday) -> IcsEvent {
    IcsEvent::single_day(
        holiday.date,
        format!(
            "{}-{}@austrian-holidays.local",
            holiday.date.to_compact_string(),
            uid_token(&holiday.name_en)
        ),
        &holiday.name_local,
        format!("{} - Gesetzlicher Feiertag in Österreich", holiday.name_en),
    )
}

fn school_event(school_break: &SchoolBreak, state: AustrianState) -> IcsEvent {
    IcsEvent::spanning(
        school_break.start,
        school_break.end,
        format!(
            "{}-{}-{}@austrian-school-holidays.local",
            school_break.start.to_compact_string(),
            uid_token(&school_break.name_en),
            uid_token(state.name())
        ),
        &school_break.name_local,
        format!("{} - Schulferien in {state}", school_break.name_en),
    )
}
