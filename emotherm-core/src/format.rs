//! Formatting helpers shared across UIs.

use crate::types::{Comparison, Temperature, Trend};

/// Format a day-over-day comparison (e.g., "+5°C warmer than yesterday").
pub fn format_comparison(cmp: Comparison) -> String {
    match cmp.trend {
        Trend::Warmer => format!("+{}°C warmer than last time", cmp.delta),
        Trend::Cooler => format!("{}°C cooler than last time", cmp.delta),
        Trend::Unchanged => "same temperature as last time".to_string(),
    }
}

/// Format an optional comparison, with the no-data wording when absent.
pub fn format_comparison_opt(cmp: Option<Comparison>) -> String {
    match cmp {
        Some(cmp) => format_comparison(cmp),
        None => "no comparison available yet".to_string(),
    }
}

/// Plain-text share blurb for a completed quiz.
pub fn share_text(temperature: Temperature, title: &str, emoji: &str, subtitle: &str) -> String {
    format!(
        "🌡️ My emotional temperature is {}!\n\n\"{}\" {}\n{}\n\nWhat's yours?",
        temperature, title, emoji, subtitle
    )
}
