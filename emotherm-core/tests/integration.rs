//! Integration tests for the emotherm scoring and persistence pipeline
//!
//! These run against a real on-disk SQLite database in a temp directory to
//! verify the end-to-end quiz flow and the storage recovery behavior.

use chrono::NaiveDate;
use emotherm_core::db::repo::REC_HISTORY;
use emotherm_core::db::Database;
use emotherm_core::history::{HistoryTracker, HISTORY_CAP};
use emotherm_core::questions::question_bank;
use emotherm_core::types::{HistoryEntry, Temperature, Trend};
use emotherm_core::{compose_result, score_to_temperature, QuizSession};
use tempfile::TempDir;

fn open_db(dir: &TempDir) -> Database {
    let db = Database::open(&dir.path().join("emotherm.db")).unwrap();
    db.migrate().unwrap();
    db
}

fn day(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

/// Answer the full bank picking weights that sum to `target`.
fn run_quiz_with_total(target: i64) -> QuizSession {
    let mut session = QuizSession::new();
    session.start().unwrap();

    let mut remaining = target;
    while let Some(question) = session.current_question() {
        // Greedy: biggest weight that doesn't overshoot
        let weight = question
            .options
            .iter()
            .map(|o| o.weight)
            .filter(|&w| (w as i64) <= remaining)
            .max()
            .unwrap_or(0);
        remaining -= weight as i64;
        session.record_answer(weight).unwrap();
    }
    assert_eq!(remaining, 0, "bank cannot express total {}", target);
    session
}

// ============================================
// End-to-end quiz flow
// ============================================

#[test]
fn test_full_quiz_is_deterministic() {
    let dir = TempDir::new().unwrap();
    let db = open_db(&dir);

    let first = run_quiz_with_total(25).complete().unwrap();
    let second = run_quiz_with_total(25).complete().unwrap();

    assert_eq!(first, second);
    assert_eq!(first.temperature, score_to_temperature(25));
    assert_eq!(first.profile().title, second.profile().title);

    let bundle = compose_result(&db, first, day("2026-08-30"), None).unwrap();
    assert_eq!(bundle.temperature, Temperature(15));
    assert_eq!(bundle.profile.title, "The Steady Harmonizer");
}

#[test]
fn test_bundle_reflects_history_across_days() {
    let dir = TempDir::new().unwrap();
    let db = open_db(&dir);

    let cold = compose_result(&db, run_quiz_with_total(20).complete().unwrap(), day("2026-08-29"), None).unwrap();
    assert!(cold.comparison.is_none());
    assert_eq!(cold.streak, 1);
    assert_eq!(cold.session_count, 1);

    let warm = compose_result(&db, run_quiz_with_total(25).complete().unwrap(), day("2026-08-30"), None).unwrap();
    let cmp = warm.comparison.unwrap();
    assert_eq!(cmp.delta, 5);
    assert_eq!(cmp.trend, Trend::Warmer);
    assert_eq!(warm.streak, 2);
    assert_eq!(warm.session_count, 2);
}

#[test]
fn test_bank_extremes_cover_scale_ends() {
    let coldest: i64 = 0;
    let hottest: i64 = question_bank()
        .iter()
        .map(|q| q.options.iter().map(|o| o.weight as i64).max().unwrap())
        .sum();

    assert_eq!(score_to_temperature(coldest), Temperature::MIN);
    assert_eq!(score_to_temperature(hottest), Temperature::MAX);
}

// ============================================
// History persistence
// ============================================

#[test]
fn test_history_cap_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("emotherm.db");

    {
        let db = Database::open(&path).unwrap();
        db.migrate().unwrap();
        let tracker = HistoryTracker::new(&db);
        let start = day("2026-01-01");
        for i in 0..35 {
            tracker
                .append(HistoryEntry {
                    date: start + chrono::Duration::days(i),
                    temperature: Temperature(10),
                    title: format!("day {}", i),
                })
                .unwrap();
        }
    }

    // Reopen: capped list persisted, oldest five gone
    let db = Database::open(&path).unwrap();
    db.migrate().unwrap();
    let entries = db.read_history().unwrap();
    assert_eq!(entries.len(), HISTORY_CAP);
    assert_eq!(entries[0].title, "day 5");
    assert_eq!(entries.last().unwrap().title, "day 34");
}

#[test]
fn test_corrupt_history_recovers_to_empty_pipeline_still_works() {
    let dir = TempDir::new().unwrap();
    let db = open_db(&dir);

    db.write_record_raw(REC_HISTORY, "this is not a list").unwrap();

    // A full run still completes against the recovered-empty history
    let outcome = run_quiz_with_total(30).complete().unwrap();
    let bundle = compose_result(&db, outcome, day("2026-08-30"), None).unwrap();

    assert!(bundle.comparison.is_none());
    assert_eq!(bundle.streak, 1);
    assert_eq!(db.read_history().unwrap().len(), 1);
}

#[test]
fn test_streak_with_gap_counts_suffix_only() {
    let dir = TempDir::new().unwrap();
    let db = open_db(&dir);
    let tracker = HistoryTracker::new(&db);

    for date in ["2026-08-25", "2026-08-29", "2026-08-30"] {
        tracker
            .append(HistoryEntry {
                date: day(date),
                temperature: Temperature(12),
                title: "entry".to_string(),
            })
            .unwrap();
    }

    assert_eq!(db.read_streak().unwrap(), 2);
}
