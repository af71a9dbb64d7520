//! RFC 5545 rendering.
//!
//! Only the subset needed for all-day holiday feeds is produced: a
//! `VCALENDAR` with Apple/Google `X-WR-*` metadata and `VEVENT`s carrying
//! `DATE` values.  Every content line is CRLF-terminated and folded at
//! 75 octets.

use chrono::{DateTime, Utc};
use fk_core::config::IcsConfig;
use fk_time::Date;
use tracing::debug;

/// Maximum length of a content line in octets, excluding the CRLF.
pub const MAX_LINE_OCTETS: usize = 75;

const CRLF: &str = "\r\n";

/// Escape a `TEXT` value: backslash, semicolon, comma and line breaks.
///
/// ```
/// use fk_ics::ics::escape_text;
///
/// assert_eq!(escape_text("a;b,c\\d\ne"), "a\\;b\\,c\\\\d\\ne");
/// ```
pub fn escape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push_str("\\\\"),
            ';' => out.push_str("\\;"),
            ',' => out.push_str("\\,"),
            '\n' => out.push_str("\\n"),
            '\r' => {
                if chars.peek() != Some(&'\n') {
                    out.push_str("\\n");
                }
            }
            _ => out.push(c),
        }
    }
    out
}

/// Append `line` to `out`, folded so that no physical line exceeds
/// [`MAX_LINE_OCTETS`], followed by CRLF.
///
/// Continuation lines start with a single space.  Splits never fall
/// inside a UTF-8 sequence.
pub fn fold_line(line: &str, out: &mut String) {
    let mut used = 0;
    for c in line.chars() {
        let len = c.len_utf8();
        if used + len > MAX_LINE_OCTETS {
            out.push_str(CRLF);
            out.push(' ');
            used = 1;
        }
        out.push(c);
        used += len;
    }
    out.push_str(CRLF);
}

struct ContentWriter {
    buf: String,
}

impl ContentWriter {
    fn new() -> Self {
        ContentWriter { buf: String::new() }
    }

    fn line(&mut self, line: &str) {
        fold_line(line, &mut self.buf);
    }

    fn property(&mut self, name: &str, value: &str) {
        self.line(&format!("{name}:{value}"));
    }

    fn text(&mut self, name: &str, value: &str) {
        self.property(name, &escape_text(value));
    }

    fn date(&mut self, name: &str, value: Date) {
        self.line(&format!("{name};VALUE=DATE:{}", value.to_compact_string()));
    }

    fn finish(self) -> String {
        self.buf
    }
}

/// An all-day `VEVENT`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IcsEvent {
    /// `DTSTART`.
    pub start: Date,
    /// `DTEND`, the first day *after* the event.
    pub end_exclusive: Date,
    /// `UID`.
    pub uid: String,
    /// `SUMMARY`.
    pub summary: String,
    /// `DESCRIPTION`.
    pub description: String,
}

impl IcsEvent {
    /// An event covering `start ..= end` (both inclusive).
    pub fn spanning(
        start: Date,
        end: Date,
        uid: impl Into<String>,
        summary: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        IcsEvent {
            start,
            end_exclusive: end + 1,
            uid: uid.into(),
            summary: summary.into(),
            description: description.into(),
        }
    }

    /// An event covering the single day `date`.
    pub fn single_day(
        date: Date,
        uid: impl Into<String>,
        summary: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self::spanning(date, date, uid, summary, description)
    }

    fn write(&self, w: &mut ContentWriter, stamp: &str) {
        w.line("BEGIN:VEVENT");
        w.date("DTSTART", self.start);
        w.date("DTEND", self.end_exclusive);
        w.property("DTSTAMP", stamp);
        w.property("UID", &self.uid);
        w.text("SUMMARY", &self.summary);
        w.text("DESCRIPTION", &self.description);
        w.line("TRANSP:TRANSPARENT");
        w.line("STATUS:CONFIRMED");
        w.line("SEQUENCE:0");
        w.line("END:VEVENT");
    }
}

/// A `VCALENDAR` of all-day events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IcsCalendar {
    /// `PRODID`.
    pub prod_id: String,
    /// `X-WR-CALNAME`.
    pub name: String,
    /// `X-WR-TIMEZONE`.
    pub timezone: String,
    /// `X-WR-CALDESC`.
    pub description: String,
    /// Events in output order.
    pub events: Vec<IcsEvent>,
}

impl IcsCalendar {
    /// An empty calendar using the metadata from `config`.
    pub fn new(config: &IcsConfig, name: impl Into<String>, description: impl Into<String>) -> Self {
        IcsCalendar {
            prod_id: config.prod_id.clone(),
            name: name.into(),
            timezone: config.timezone.clone(),
            description: description.into(),
            events: Vec::new(),
        }
    }

    /// Append an event.
    pub fn push(&mut self, event: IcsEvent) {
        self.events.push(event);
    }

    /// Render the calendar.
    ///
    /// `generated_at` supplies both `X-GENERATION-TIME` and every event's
    /// `DTSTAMP`, so the output is a pure function of its inputs.
    pub fn render(&self, generated_at: DateTime<Utc>) -> String {
        let stamp = generated_at.format("%Y%m%dT%H%M%SZ").to_string();
        let mut w = ContentWriter::new();
        w.line("BEGIN:VCALENDAR");
        w.line("VERSION:2.0");
        w.property("PRODID", &self.prod_id);
        w.line("CALSCALE:GREGORIAN");
        w.line("METHOD:PUBLISH");
        w.text("X-WR-CALNAME", &self.name);
        w.property("X-WR-TIMEZONE", &self.timezone);
        w.text("X-WR-CALDESC", &self.description);
        w.property(
            "X-GENERATION-TIME",
            &generated_at.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
        );
        for event in &self.events {
            event.write(&mut w, &stamp);
        }
        w.line("END:VCALENDAR");
        debug!(calendar = %self.name, events = self.events.len(), "rendered iCalendar");
        w.finish()
    }
}

impl Extend<IcsEvent> for IcsCalendar {
    fn extend<I: IntoIterator<Item = IcsEvent>>(&mut self, iter: I) {
        self.events.extend(iter);
    }
}
