//! Result history: persistence, streaks, and day-over-day comparison
//!
//! The stored history is a date-ascending list capped at 30 entries (oldest
//! evicted first). Streak and comparison are pure functions over a slice so
//! they can be tested without a database; [`HistoryTracker`] wires them to
//! the persisted record.

use crate::db::Database;
use crate::error::{Error, Result};
use crate::types::{Comparison, HistoryEntry};
use chrono::NaiveDate;

/// Maximum number of stored history entries.
pub const HISTORY_CAP: usize = 30;

/// Length of the maximal suffix of `entries` whose dates are exactly
/// consecutive calendar days ending at `as_of`.
///
/// Zero when the history is empty or its latest entry is not `as_of`.
pub fn compute_streak(entries: &[HistoryEntry], as_of: NaiveDate) -> u32 {
    let mut expected = as_of;
    let mut streak = 0u32;

    for entry in entries.iter().rev() {
        if entry.date != expected {
            break;
        }
        streak += 1;
        expected = match expected.pred_opt() {
            Some(d) => d,
            None => break,
        };
    }

    streak
}

/// Compare the two most recent entries; `None` under two entries.
pub fn compare(entries: &[HistoryEntry]) -> Option<Comparison> {
    match entries {
        [.., previous, latest] => Some(Comparison::between(latest, previous)),
        _ => None,
    }
}

/// Tracker over the persisted history record.
pub struct HistoryTracker<'a> {
    db: &'a Database,
}

impl<'a> HistoryTracker<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Stored history, oldest first. Corrupt storage degrades to empty.
    pub fn load(&self) -> Result<Vec<HistoryEntry>> {
        self.db.read_history()
    }

    /// Validate and append an entry, evict past the cap, refresh the streak
    /// cache, and return the updated streak (as of the entry's date).
    ///
    /// Invalid entries are rejected with [`Error::InvalidEntry`] and leave
    /// the stored history untouched. An entry dated the same day as the
    /// latest stored one replaces it; dates must otherwise be ascending.
    pub fn append(&self, entry: HistoryEntry) -> Result<u32> {
        if entry.title.trim().is_empty() {
            return Err(Error::InvalidEntry("title must be non-empty".to_string()));
        }
        if !entry.temperature.on_scale() {
            return Err(Error::InvalidEntry(format!(
                "temperature {} is off the scale",
                entry.temperature
            )));
        }

        let mut entries = self.load()?;

        match entries.last() {
            Some(last) if entry.date < last.date => {
                return Err(Error::InvalidEntry(format!(
                    "entry date {} precedes latest stored date {}",
                    entry.date, last.date
                )));
            }
            Some(last) if entry.date == last.date => {
                // Same-day retake updates today's record
                entries.pop();
            }
            _ => {}
        }

        let as_of = entry.date;
        entries.push(entry);

        // FIFO eviction, oldest first
        while entries.len() > HISTORY_CAP {
            entries.remove(0);
        }

        self.db.write_history(&entries)?;

        let streak = compute_streak(&entries, as_of);
        self.db.write_streak(streak)?;
        tracing::debug!(len = entries.len(), streak, "History updated");

        Ok(streak)
    }

    /// Day-over-day comparison of the two latest stored entries.
    pub fn latest_comparison(&self) -> Result<Option<Comparison>> {
        Ok(compare(&self.load()?))
    }
}
