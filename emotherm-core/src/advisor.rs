//! Monthly and pattern advice
//!
//! Two pure lookups: a 12-entry calendar table and a coarse four-bucket
//! classification of the temperature. The pattern buckets (≤0, ≤10, ≤20,
//! >20) are intentionally a different partition from the result bands in
//! [`crate::profile`]; they are separate domain policies and stay separate.
//!
//! Both lookups accept optional localization overrides and fall back to the
//! built-in strings, so every input always resolves to some text.

use crate::types::Temperature;
use serde::Deserialize;

/// Coarse emotion-pattern classification of a temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternBucket {
    /// 0°C and below
    Inward,
    /// Above 0°C, up to 10°C
    Balanced,
    /// Above 10°C, up to 20°C
    Empathic,
    /// Above 20°C
    Passionate,
}

impl PatternBucket {
    /// Classify a temperature; closed upper bounds, unlike result bands.
    pub fn for_temperature(temp: Temperature) -> PatternBucket {
        match temp.value() {
            t if t <= 0 => PatternBucket::Inward,
            t if t <= 10 => PatternBucket::Balanced,
            t if t <= 20 => PatternBucket::Empathic,
            _ => PatternBucket::Passionate,
        }
    }
}

/// Localization overrides for advisor strings.
///
/// Any missing or empty slot falls back to the built-in default, so a
/// partially translated table is always safe to load.
#[derive(Debug, Deserialize, Default)]
pub struct LocaleOverrides {
    /// Month advice, index 0 = January; may hold fewer than 12 entries
    #[serde(default)]
    pub months: Vec<String>,

    /// Pattern descriptions by bucket
    #[serde(default)]
    pub patterns: PatternOverrides,
}

/// Optional per-bucket pattern description overrides.
#[derive(Debug, Deserialize, Default)]
pub struct PatternOverrides {
    pub inward: Option<String>,
    pub balanced: Option<String>,
    pub empathic: Option<String>,
    pub passionate: Option<String>,
}

const DEFAULT_MONTHLY: [&str; 12] = [
    "Use the new year's energy. It's a good month to set emotional goals.",
    "Winter's end, spring's beginning. Enjoy the anticipation of change.",
    "Start a new relationship along with the spring air.",
    "Like cherry blossoms, feelings bloom wide open this month.",
    "An energetic month! Work feelings out through time outdoors.",
    "Mid-year checkpoint. Look back on the first half's emotional weather.",
    "Feelings can overheat like the summer. Schedule cool-down time.",
    "Self-care matters most in the deep heat. Rest properly.",
    "Autumn begins; the best season for sorting out your feelings.",
    "Reading season. Pick up a book that stirs something in you.",
    "The year is winding down. Tell someone you're grateful for them.",
    "Close out the year gently and set your heart up for the next one.",
];

fn default_pattern(bucket: PatternBucket) -> &'static str {
    match bucket {
        PatternBucket::Inward => {
            "You process emotion deeply and inwardly. You look calm on the \
             outside while a rich inner life runs underneath. Try opening up, \
             a little at a time, to someone you trust."
        }
        PatternBucket::Balanced => {
            "You balance head and heart unusually well and handle most \
             situations with poise. Just take care not to lose track of what \
             you actually feel while managing everything so smoothly."
        }
        PatternBucket::Empathic => {
            "You pick up on other people's feelings quickly and offer comfort \
             without being asked. Remember to manage your own emotional \
             energy, not only everyone else's."
        }
        PatternBucket::Passionate => {
            "You feel everything deeply and express it at full scale. That \
             intensity is a real strength, but regular self-care is essential \
             to keep it from burning you out."
        }
    }
}

/// One suggested emotion-care activity per weekday, Monday first.
pub const WEEKLY_ROUTINE: [&str; 7] = [
    "Mon: write a five-minute feelings journal",
    "Tue: listen to music you love for fifteen minutes",
    "Wed: take a walk and let your thoughts settle",
    "Thu: send a friend a how-are-you message",
    "Fri: buy yourself one small treat",
    "Sat: try one brand-new experience",
    "Sun: set an emotional goal for next week",
];

/// Pick the override when present and non-empty, else the default.
fn resolve_string(override_val: Option<&str>, default_val: &str) -> String {
    match override_val {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => default_val.to_string(),
    }
}

/// Advice for a calendar month, index 0 = January.
///
/// Total over all of `u32`: out-of-range indices wrap modulo 12.
pub fn monthly_advice(month0: u32, overrides: Option<&LocaleOverrides>) -> String {
    let idx = (month0 % 12) as usize;
    let override_val = overrides.and_then(|o| o.months.get(idx)).map(String::as_str);
    resolve_string(override_val, DEFAULT_MONTHLY[idx])
}

/// Emotion-pattern description for a temperature.
pub fn emotion_pattern(temp: Temperature, overrides: Option<&LocaleOverrides>) -> String {
    let bucket = PatternBucket::for_temperature(temp);
    let override_val = overrides.and_then(|o| match bucket {
        PatternBucket::Inward => o.patterns.inward.as_deref(),
        PatternBucket::Balanced => o.patterns.balanced.as_deref(),
        PatternBucket::Empathic => o.patterns.empathic.as_deref(),
        PatternBucket::Passionate => o.patterns.passionate.as_deref(),
    });
    resolve_string(override_val, default_pattern(bucket))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_month_has_advice() {
        for m in 0..12 {
            assert!(!monthly_advice(m, None).is_empty());
        }
    }

    #[test]
    fn test_out_of_range_month_wraps() {
        assert_eq!(monthly_advice(12, None), monthly_advice(0, None));
        assert_eq!(monthly_advice(25, None), monthly_advice(1, None));
    }

    #[test]
    fn test_pattern_buckets_use_closed_upper_bounds() {
        assert_eq!(PatternBucket::for_temperature(Temperature(0)), PatternBucket::Inward);
        assert_eq!(PatternBucket::for_temperature(Temperature(1)), PatternBucket::Balanced);
        assert_eq!(PatternBucket::for_temperature(Temperature(10)), PatternBucket::Balanced);
        assert_eq!(PatternBucket::for_temperature(Temperature(20)), PatternBucket::Empathic);
        assert_eq!(PatternBucket::for_temperature(Temperature(21)), PatternBucket::Passionate);
    }

    #[test]
    fn test_pattern_partition_differs_from_result_bands() {
        use crate::profile::Band;
        // 0°C: Chilly band but Inward bucket; 20°C: Warm band but Empathic bucket.
        assert_eq!(Band::for_temperature(Temperature(0)), Band::Chilly);
        assert_eq!(PatternBucket::for_temperature(Temperature(0)), PatternBucket::Inward);
        assert_eq!(Band::for_temperature(Temperature(20)), Band::Warm);
        assert_eq!(PatternBucket::for_temperature(Temperature(20)), PatternBucket::Empathic);
    }

    #[test]
    fn test_override_wins_when_present() {
        let overrides = LocaleOverrides {
            months: vec!["Janvier!".to_string()],
            patterns: PatternOverrides {
                inward: Some("tout doux".to_string()),
                ..Default::default()
            },
        };
        assert_eq!(monthly_advice(0, Some(&overrides)), "Janvier!");
        assert_eq!(emotion_pattern(Temperature(-5), Some(&overrides)), "tout doux");
    }

    #[test]
    fn test_missing_or_empty_override_falls_back() {
        let overrides = LocaleOverrides {
            months: vec!["".to_string()],
            ..Default::default()
        };
        // Empty string override falls back; month 1 has no override at all.
        assert_eq!(monthly_advice(0, Some(&overrides)), DEFAULT_MONTHLY[0]);
        assert_eq!(monthly_advice(1, Some(&overrides)), DEFAULT_MONTHLY[1]);
        assert_eq!(
            emotion_pattern(Temperature(35), Some(&overrides)),
            default_pattern(PatternBucket::Passionate)
        );
    }
}
