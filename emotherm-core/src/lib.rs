//! # emotherm-core
//!
//! Core library for emotherm - an emotional temperature quiz.
//!
//! This library provides:
//! - The static question bank and an explicit per-run session state machine
//! - The deterministic scoring pipeline: answer weights → total score →
//!   temperature → result profile
//! - A persisted, capped result history with streak and day-over-day
//!   comparison analytics
//! - Monthly and emotion-pattern advice with localization fallback
//! - Configuration and logging infrastructure
//!
//! The UI (screen transitions, rendering, share images) lives outside this
//! crate; it drives a [`QuizSession`] one answer at a time and consumes the
//! composed [`ResultBundle`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use emotherm_core::{compose_result, Config, Database, QuizSession};
//!
//! let config = Config::load().expect("failed to load config");
//! let db = Database::open(&config.database_path()).expect("failed to open database");
//! db.migrate().expect("failed to run migrations");
//!
//! let mut session = QuizSession::new();
//! session.start().expect("fresh session");
//! while let Some(question) = session.current_question() {
//!     // a real UI would ask the user; here: always the first option
//!     let weight = question.options[0].weight;
//!     session.record_answer(weight).expect("answering state");
//! }
//!
//! let outcome = session.complete().expect("all questions answered");
//! let today = chrono::Local::now().date_naive();
//! let bundle = compose_result(&db, outcome, today, Some(&config.locale)).unwrap();
//! println!("{} {}", bundle.temperature, bundle.profile.title);
//! ```

// Re-export commonly used items at the crate root
pub use config::Config;
pub use db::Database;
pub use error::{Error, Result};
pub use profile::{resolve, Band, ResultProfile};
pub use scoring::score_to_temperature;
pub use session::{compose_result, QuizOutcome, QuizSession, ResultBundle, SessionState};
pub use types::*;

// Public modules
pub mod advisor;
pub mod config;
pub mod db;
pub mod error;
pub mod format;
pub mod history;
pub mod logging;
pub mod profile;
pub mod questions;
pub mod scoring;
pub mod session;
pub mod types;
