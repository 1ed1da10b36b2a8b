//! Database repository layer
//!
//! A small named-record store over SQLite. Values are JSON; a value that no
//! longer parses is reported as [`RecordRead::Corrupt`] so callers can
//! recover to a default instead of failing the session.

use crate::error::Result;
use crate::types::HistoryEntry;
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;
use std::sync::Mutex;

/// Record key for the completed-session counter.
pub const REC_SESSION_COUNT: &str = "session_count";
/// Record key for the capped history list.
pub const REC_HISTORY: &str = "history";
/// Record key for the cached streak value.
pub const REC_STREAK: &str = "streak";

/// Outcome of reading a named record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordRead<T> {
    /// The record exists and parsed
    Value(T),
    /// No record stored under this key
    Missing,
    /// The stored value failed to parse
    Corrupt,
}

impl<T> RecordRead<T> {
    /// The parsed value, or a default for missing/corrupt records.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            RecordRead::Value(v) => v,
            _ => default,
        }
    }
}

/// Handle to the results database.
pub struct Database {
    conn: Mutex<Connection>,
}

impl Database {
    /// Open or create a database at the given path
    pub fn open(path: &Path) -> Result<Self> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            ",
        )?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Run migrations on this database
    pub fn migrate(&self) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        super::schema::run_migrations(&conn)
    }

    // ============================================
    // Generic record operations
    // ============================================

    /// Read and parse a named record.
    pub fn read_record<T: DeserializeOwned>(&self, key: &str) -> Result<RecordRead<T>> {
        let conn = self.conn.lock().unwrap();
        let raw: Option<String> = conn
            .query_row("SELECT value FROM records WHERE key = ?1", [key], |r| {
                r.get(0)
            })
            .optional()?;

        match raw {
            None => Ok(RecordRead::Missing),
            Some(json) => match serde_json::from_str(&json) {
                Ok(value) => Ok(RecordRead::Value(value)),
                Err(e) => {
                    tracing::warn!(key, error = %e, "Stored record failed to parse");
                    Ok(RecordRead::Corrupt)
                }
            },
        }
    }

    /// Write a named record, replacing any existing value.
    pub fn write_record<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string(value)?;
        let conn = self.conn.lock().unwrap();
        conn.execute(
            r#"
            INSERT INTO records (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
            params![key, json, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    /// Overwrite a record with raw text, bypassing serialization.
    ///
    /// Only useful for simulating corrupt storage in tests.
    pub fn write_record_raw(&self, key: &str, raw: &str) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            r#"
            INSERT INTO records (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
            params![key, raw, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    // ============================================
    // Quiz records
    // ============================================

    /// Stored history, oldest first. Missing or corrupt data degrades to
    /// an empty list; it is never an error.
    pub fn read_history(&self) -> Result<Vec<HistoryEntry>> {
        Ok(self
            .read_record::<Vec<HistoryEntry>>(REC_HISTORY)?
            .unwrap_or_default_with_note(REC_HISTORY))
    }

    /// Replace the stored history.
    pub fn write_history(&self, entries: &[HistoryEntry]) -> Result<()> {
        self.write_record(REC_HISTORY, &entries)
    }

    /// Number of completed sessions. Missing or corrupt counts as zero.
    pub fn session_count(&self) -> Result<u64> {
        Ok(self
            .read_record::<u64>(REC_SESSION_COUNT)?
            .unwrap_or_default_with_note(REC_SESSION_COUNT))
    }

    /// Increment and return the completed-session counter.
    pub fn increment_session_count(&self) -> Result<u64> {
        let next = self.session_count()? + 1;
        self.write_record(REC_SESSION_COUNT, &next)?;
        Ok(next)
    }

    /// Cached streak value. Recomputable, so missing or corrupt is zero.
    pub fn read_streak(&self) -> Result<u32> {
        Ok(self
            .read_record::<u32>(REC_STREAK)?
            .unwrap_or_default_with_note(REC_STREAK))
    }

    /// Store the streak cache.
    pub fn write_streak(&self, streak: u32) -> Result<()> {
        self.write_record(REC_STREAK, &streak)
    }
}

impl<T: Default> RecordRead<T> {
    /// Default for missing records silently; corrupt records log a warning
    /// first (recoverable, never surfaced to the caller).
    fn unwrap_or_default_with_note(self, key: &str) -> T {
        match self {
            RecordRead::Value(v) => v,
            RecordRead::Missing => T::default(),
            RecordRead::Corrupt => {
                tracing::warn!(key, "Resetting corrupt record to default");
                T::default()
            }
        }
    }
}
