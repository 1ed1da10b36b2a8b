//! Quiz session state machine and result composition
//!
//! A session is an explicit object owning its answer trace; there is no
//! module-level state, so independent sessions can run side by side (and in
//! tests). Transitions: NotStarted → Answering(index) → ResultReady, with
//! retry back to NotStarted. The compute step between the last answer and
//! ResultReady is the pure scoring pipeline inside [`QuizSession::complete`].

use crate::advisor::{self, LocaleOverrides};
use crate::db::Database;
use crate::error::{Error, Result};
use crate::history::HistoryTracker;
use crate::profile::{Band, ResultProfile};
use crate::questions::question_bank;
use crate::scoring::score_to_temperature;
use crate::types::{Comparison, HistoryEntry, Question, Temperature};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Where a session currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Created or reset, no answers yet
    NotStarted,
    /// Waiting for the answer to the question at this index
    Answering(usize),
    /// All questions answered and the outcome computed
    ResultReady,
}

/// Result of the pure scoring pipeline for one finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizOutcome {
    /// Mapped temperature
    pub temperature: Temperature,
    /// Resolved band
    pub band: Band,
}

impl QuizOutcome {
    /// The static profile for the resolved band.
    pub fn profile(&self) -> &'static ResultProfile {
        self.band.profile()
    }
}

/// One run through the quiz.
pub struct QuizSession {
    bank: &'static [Question],
    trace: Vec<i32>,
    state: SessionState,
}

impl QuizSession {
    /// New session over the built-in question bank.
    pub fn new() -> Self {
        Self::with_bank(question_bank())
    }

    /// New session over an explicit bank (tests use short banks).
    pub fn with_bank(bank: &'static [Question]) -> Self {
        Self {
            bank,
            trace: Vec::with_capacity(bank.len()),
            state: SessionState::NotStarted,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Begin answering. Valid only from NotStarted.
    pub fn start(&mut self) -> Result<()> {
        match self.state {
            SessionState::NotStarted => {
                self.state = SessionState::Answering(0);
                Ok(())
            }
            _ => Err(Error::SessionState(
                "start is only valid before the first answer".to_string(),
            )),
        }
    }

    /// The question currently awaiting an answer.
    pub fn current_question(&self) -> Option<&'static Question> {
        match self.state {
            SessionState::Answering(i) => self.bank.get(i),
            _ => None,
        }
    }

    /// Zero-based index of the question being answered.
    pub fn progress(&self) -> Option<(usize, usize)> {
        match self.state {
            SessionState::Answering(i) => Some((i, self.bank.len())),
            _ => None,
        }
    }

    /// Record the weight of the chosen option and advance.
    ///
    /// The weight, not the option's displayed position, is what counts;
    /// callers are free to shuffle options for presentation.
    pub fn record_answer(&mut self, weight: i32) -> Result<()> {
        let index = match self.state {
            SessionState::Answering(i) => i,
            _ => {
                return Err(Error::SessionState(
                    "no question is awaiting an answer".to_string(),
                ))
            }
        };

        self.trace.push(weight);

        self.state = if index + 1 < self.bank.len() {
            SessionState::Answering(index + 1)
        } else {
            SessionState::ResultReady
        };
        Ok(())
    }

    /// Sum of all recorded weights so far.
    pub fn total_score(&self) -> i64 {
        self.trace.iter().map(|&w| w as i64).sum()
    }

    /// Whether every question has been answered.
    pub fn is_complete(&self) -> bool {
        self.state == SessionState::ResultReady
    }

    /// Run the scoring pipeline over the full answer trace.
    pub fn complete(&self) -> Result<QuizOutcome> {
        if !self.is_complete() {
            return Err(Error::SessionState(format!(
                "{} of {} questions answered",
                self.trace.len(),
                self.bank.len()
            )));
        }

        let temperature = score_to_temperature(self.total_score());
        let band = Band::for_temperature(temperature);
        tracing::info!(total = self.total_score(), %temperature, ?band, "Quiz completed");

        Ok(QuizOutcome { temperature, band })
    }

    /// Discard the answer trace and return to NotStarted.
    pub fn retry(&mut self) {
        self.trace.clear();
        self.state = SessionState::NotStarted;
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything the renderer needs for one completed quiz.
#[derive(Debug, Serialize)]
pub struct ResultBundle {
    /// Mapped temperature
    pub temperature: Temperature,
    /// Resolved band
    pub band: Band,
    /// Static profile for the band
    pub profile: &'static ResultProfile,
    /// Calendar advice for the completion month
    pub monthly_advice: String,
    /// Coarse emotion-pattern description
    pub emotion_pattern: String,
    /// Day-over-day comparison, when at least two results exist
    pub comparison: Option<Comparison>,
    /// Ready-made wording for the comparison, total even without data
    pub comparison_text: String,
    /// Consecutive-day streak ending on the completion date
    pub streak: u32,
    /// Completed sessions on this device, this run included
    pub session_count: u64,
}

/// Persist the outcome and compose the full result bundle.
///
/// Updates the history (and its streak cache), bumps the session counter,
/// and derives the advisor strings for `today`.
pub fn compose_result(
    db: &Database,
    outcome: QuizOutcome,
    today: NaiveDate,
    overrides: Option<&LocaleOverrides>,
) -> Result<ResultBundle> {
    let profile = outcome.profile();

    let tracker = HistoryTracker::new(db);
    let streak = tracker.append(HistoryEntry {
        date: today,
        temperature: outcome.temperature,
        title: profile.title.to_string(),
    })?;
    let comparison = tracker.latest_comparison()?;

    let session_count = db.increment_session_count()?;

    Ok(ResultBundle {
        temperature: outcome.temperature,
        band: outcome.band,
        profile,
        monthly_advice: advisor::monthly_advice(today.month0(), overrides),
        emotion_pattern: advisor::emotion_pattern(outcome.temperature, overrides),
        comparison_text: crate::format::format_comparison_opt(comparison),
        comparison,
        streak,
        session_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AnswerOption;

    static TINY_BANK: &[Question] = &[
        Question {
            text: "q1",
            options: &[
                AnswerOption { text: "a", weight: 0 },
                AnswerOption { text: "b", weight: 5 },
            ],
        },
        Question {
            text: "q2",
            options: &[
                AnswerOption { text: "a", weight: 1 },
                AnswerOption { text: "b", weight: 4 },
            ],
        },
    ];

    #[test]
    fn test_state_machine_happy_path() {
        let mut session = QuizSession::with_bank(TINY_BANK);
        assert_eq!(session.state(), SessionState::NotStarted);

        session.start().unwrap();
        assert_eq!(session.state(), SessionState::Answering(0));
        assert_eq!(session.current_question().unwrap().text, "q1");

        session.record_answer(5).unwrap();
        assert_eq!(session.state(), SessionState::Answering(1));

        session.record_answer(4).unwrap();
        assert_eq!(session.state(), SessionState::ResultReady);
        assert_eq!(session.total_score(), 9);

        let outcome = session.complete().unwrap();
        assert_eq!(outcome.temperature, score_to_temperature(9));
    }

    #[test]
    fn test_answer_outside_answering_state_is_rejected() {
        let mut session = QuizSession::with_bank(TINY_BANK);
        assert!(matches!(
            session.record_answer(3),
            Err(Error::SessionState(_))
        ));

        session.start().unwrap();
        session.record_answer(0).unwrap();
        session.record_answer(1).unwrap();
        // ResultReady: further answers rejected, trace preserved
        assert!(matches!(
            session.record_answer(5),
            Err(Error::SessionState(_))
        ));
        assert_eq!(session.total_score(), 1);
    }

    #[test]
    fn test_complete_before_finishing_is_rejected() {
        let mut session = QuizSession::with_bank(TINY_BANK);
        session.start().unwrap();
        session.record_answer(5).unwrap();
        assert!(matches!(session.complete(), Err(Error::SessionState(_))));
    }

    #[test]
    fn test_retry_resets_session() {
        let mut session = QuizSession::with_bank(TINY_BANK);
        session.start().unwrap();
        session.record_answer(5).unwrap();
        session.retry();

        assert_eq!(session.state(), SessionState::NotStarted);
        assert_eq!(session.total_score(), 0);
        assert!(session.start().is_ok());
    }

    #[test]
    fn test_same_answers_same_outcome() {
        let run = || {
            let mut session = QuizSession::with_bank(TINY_BANK);
            session.start().unwrap();
            session.record_answer(5).unwrap();
            session.record_answer(4).unwrap();
            session.complete().unwrap()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_compose_result_bundle() {
        let db = Database::open_in_memory().unwrap();
        db.migrate().unwrap();

        let mut session = QuizSession::with_bank(TINY_BANK);
        session.start().unwrap();
        session.record_answer(5).unwrap();
        session.record_answer(4).unwrap();
        let outcome = session.complete().unwrap();

        let today: NaiveDate = "2026-08-30".parse().unwrap();
        let bundle = compose_result(&db, outcome, today, None).unwrap();

        assert_eq!(bundle.temperature, outcome.temperature);
        assert_eq!(bundle.profile.title, outcome.profile().title);
        assert_eq!(bundle.streak, 1);
        assert_eq!(bundle.session_count, 1);
        assert!(bundle.comparison.is_none());
        assert_eq!(bundle.comparison_text, "no comparison available yet");
        assert!(!bundle.monthly_advice.is_empty());
        assert!(!bundle.emotion_pattern.is_empty());
    }
}
