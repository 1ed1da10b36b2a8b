//! Core domain types for emotherm
//!
//! ## Terminology
//!
//! | Term | Definition |
//! |------|------------|
//! | **Temperature** | Signed value on a fixed scale summarizing a quiz outcome |
//! | **Band** | Half-open temperature interval with one ResultProfile (see [`crate::profile`]) |
//! | **Pattern bucket** | Coarser four-way partition used by the advisor (see [`crate::advisor`]) |
//! | **History entry** | One persisted result at day granularity |
//! | **Streak** | Consecutive calendar days, ending today, with a history entry |
//!
//! Band and pattern bucket both key off temperature but encode different
//! policies and must not be merged.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================
// Temperature
// ============================================

/// A temperature value on the fixed −10..=40 scale.
///
/// Derived from a total quiz score via [`crate::scoring::score_to_temperature`];
/// never constructed from unchecked user input.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Temperature(pub i32);

impl Temperature {
    /// Coldest representable value on the display scale
    pub const MIN: Temperature = Temperature(-10);
    /// Hottest representable value on the display scale
    pub const MAX: Temperature = Temperature(40);

    /// Raw degrees Celsius
    pub fn value(self) -> i32 {
        self.0
    }

    /// Whether the value lies on the display scale
    pub fn on_scale(self) -> bool {
        (Self::MIN.0..=Self::MAX.0).contains(&self.0)
    }

    /// Position on the thermometer as a percentage, floored at 5 so the
    /// bulb never renders empty.
    pub fn fill_percent(self) -> f64 {
        let pct = (self.0 - Self::MIN.0) as f64 / (Self::MAX.0 - Self::MIN.0) as f64 * 100.0;
        pct.clamp(5.0, 100.0)
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°C", self.0)
    }
}

// ============================================
// Question bank
// ============================================

/// One answer option with its scoring weight.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AnswerOption {
    /// Display text
    pub text: &'static str,
    /// Weight added to the total score when chosen
    pub weight: i32,
}

/// A quiz question with an ordered set of options.
///
/// Display order of options may be shuffled by the UI; the recorded value
/// is always the option's weight, never its position.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Question {
    /// Question text
    pub text: &'static str,
    /// Answer options in canonical order
    pub options: &'static [AnswerOption],
}

// ============================================
// History
// ============================================

/// One persisted quiz result, at day granularity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Calendar date the quiz was completed (local to the device)
    pub date: NaiveDate,
    /// Resulting temperature
    pub temperature: Temperature,
    /// Title of the resolved profile at the time
    pub title: String,
}

/// Direction of a day-over-day temperature change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Warmer,
    Cooler,
    Unchanged,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Warmer => "warmer",
            Trend::Cooler => "cooler",
            Trend::Unchanged => "unchanged",
        }
    }
}

/// Signed delta between the two most recent history entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    /// `latest.temperature - previous.temperature` in degrees
    pub delta: i32,
    /// Classification of the delta
    pub trend: Trend,
}

impl Comparison {
    /// Compare the latest entry against the previous one.
    pub fn between(latest: &HistoryEntry, previous: &HistoryEntry) -> Self {
        let delta = latest.temperature.0 - previous.temperature.0;
        let trend = match delta {
            d if d > 0 => Trend::Warmer,
            d if d < 0 => Trend::Cooler,
            _ => Trend::Unchanged,
        };
        Comparison { delta, trend }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(date: &str, temp: i32) -> HistoryEntry {
        HistoryEntry {
            date: date.parse().unwrap(),
            temperature: Temperature(temp),
            title: "t".to_string(),
        }
    }

    #[test]
    fn test_temperature_display() {
        assert_eq!(Temperature(25).to_string(), "25°C");
        assert_eq!(Temperature(-3).to_string(), "-3°C");
    }

    #[test]
    fn test_fill_percent_clamped() {
        assert_eq!(Temperature::MAX.fill_percent(), 100.0);
        assert_eq!(Temperature::MIN.fill_percent(), 5.0);
        assert_eq!(Temperature(15).fill_percent(), 50.0);
    }

    #[test]
    fn test_comparison_trends() {
        let warmer = Comparison::between(&entry("2026-01-02", 15), &entry("2026-01-01", 10));
        assert_eq!(warmer.delta, 5);
        assert_eq!(warmer.trend, Trend::Warmer);

        let cooler = Comparison::between(&entry("2026-01-02", 3), &entry("2026-01-01", 10));
        assert_eq!(cooler.delta, -7);
        assert_eq!(cooler.trend, Trend::Cooler);

        let flat = Comparison::between(&entry("2026-01-02", 10), &entry("2026-01-01", 10));
        assert_eq!(flat.delta, 0);
        assert_eq!(flat.trend, Trend::Unchanged);
    }

    #[test]
    fn test_history_entry_round_trips_as_json() {
        let e = entry("2026-08-30", 21);
        let json = serde_json::to_string(&e).unwrap();
        let back: HistoryEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, e);
    }
}
