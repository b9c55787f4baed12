//! Calendar lookup over the precomputed liturgical dataset. The dataset is
//! the plain-text file the project has always shipped: one block per day,
//! a `📅` header line followed by `[Saints]`, `[Feasts]`, `[Fasting]` and
//! `[Readings]` fields. It covers a single fixed year; nothing here computes
//! movable feasts, the table already has them.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use tracing::{debug, warn};

use crate::error::LookupError;
use crate::models::{CalendarEntry, Citation};
use crate::paths;

/// The year the shipped dataset covers.
pub const DATASET_YEAR: i32 = 2026;

/// Field labels as they appear in the dataset.
const SAINTS: &str = "[Saints]:";
const FEASTS: &str = "[Feasts]:";
const FASTING: &str = "[Fasting]:";
const READINGS: &str = "[Readings]:";

/// Read-only map from (month, day) to the day's liturgical record, loaded
/// once at startup.
pub struct CalendarLookup {
    year: i32,
    entries: HashMap<(u32, u32), CalendarEntry>,
}

impl CalendarLookup {
    /// Parse the dataset text. Blocks with unreadable headers or a year
    /// other than `year` are skipped with a warning; one bad block never
    /// hides the rest of the calendar.
    pub fn parse(text: &str, year: i32) -> Self {
        let mut entries = HashMap::new();
        let mut current: Option<(NaiveDate, CalendarEntry)> = None;

        for line in text.lines() {
            let line = line.trim();
            if let Some(header) = line.strip_prefix("📅") {
                if let Some((date, entry)) = current.take() {
                    entries.insert((date.month(), date.day()), entry);
                }
                let header = header.trim();
                match NaiveDate::parse_from_str(header, "%A, %B %d, %Y") {
                    Ok(date) if date.year() == year => {
                        current = Some((
                            date,
                            CalendarEntry {
                                month: date.month(),
                                day: date.day(),
                                saints: String::new(),
                                feasts: String::new(),
                                fasting: String::new(),
                                readings: Vec::new(),
                            },
                        ));
                    }
                    Ok(date) => warn!(%date, expected = year, "skipping block for wrong year"),
                    Err(err) => warn!(header, %err, "skipping unparseable calendar header"),
                }
            } else if let Some((_, entry)) = current.as_mut() {
                if let Some(value) = line.strip_prefix(SAINTS) {
                    entry.saints = value.trim().to_string();
                } else if let Some(value) = line.strip_prefix(FEASTS) {
                    entry.feasts = value.trim().to_string();
                } else if let Some(value) = line.strip_prefix(FASTING) {
                    entry.fasting = value.trim().to_string();
                } else if let Some(value) = line.strip_prefix(READINGS) {
                    entry.readings = parse_readings(value);
                }
            }
        }
        if let Some((date, entry)) = current.take() {
            entries.insert((date.month(), date.day()), entry);
        }

        debug!(entries = entries.len(), year, "calendar dataset loaded");
        Self { year, entries }
    }

    /// Load the dataset from a file.
    pub fn from_path(path: &Path, year: i32) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read calendar dataset {}", path.display()))?;
        Ok(Self::parse(&text, year))
    }

    /// Load the dataset from its default location (working-tree `data/`,
    /// else the per-user install directory).
    pub fn open_default() -> Result<Self> {
        Self::from_path(&paths::calendar_path(DATASET_YEAR)?, DATASET_YEAR)
    }

    /// The liturgical record for a date. A date outside the supported
    /// dataset, including any year mismatch, is `NoEntry`; an ordinary day
    /// inside the dataset is a real entry with empty feast text. Readings
    /// stay raw citations until the caller resolves one by index.
    pub fn entry_for(&self, date: NaiveDate) -> Result<&CalendarEntry, LookupError> {
        if date.year() != self.year {
            return Err(LookupError::NoEntry { date });
        }
        self.entries
            .get(&(date.month(), date.day()))
            .ok_or(LookupError::NoEntry { date })
    }
}

/// Split the readings field into numbered citations. Items carry their own
/// `[<n>]` label; an item without one keeps its position as the index so the
/// rest of the day's readings stay selectable.
fn parse_readings(text: &str) -> Vec<Citation> {
    text.split('•')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .enumerate()
        .map(|(position, item)| match split_citation(item) {
            Some((index, reference)) => Citation {
                index,
                reference: reference.to_string(),
            },
            None => Citation {
                index: position as u32 + 1,
                reference: item.to_string(),
            },
        })
        .collect()
}

/// Strip the user-facing `[<n>] ` label off a citation, returning the index
/// and the bare reference text the parser understands.
fn split_citation(item: &str) -> Option<(u32, &str)> {
    let rest = item.strip_prefix('[')?;
    let (number, tail) = rest.split_once(']')?;
    let index = number.trim().parse().ok()?;
    Some((index, tail.trim()))
}
