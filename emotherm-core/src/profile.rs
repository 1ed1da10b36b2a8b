//! Result resolution: temperature bands and their profiles
//!
//! Bands partition the whole temperature axis into half-open `[low, high)`
//! intervals with open ends, so every temperature resolves to exactly one
//! profile. This partition is finer than, and independent from, the
//! advisor's four pattern buckets; the two encode different policies.

use crate::types::Temperature;
use serde::Serialize;

/// Temperature band, from coldest to hottest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Band {
    /// Below 0°C
    Frozen,
    /// 0°C up to (not including) 10°C
    Chilly,
    /// 10°C up to (not including) 20°C
    Mild,
    /// 20°C up to (not including) 30°C
    Warm,
    /// 30°C and above
    Blazing,
}

impl Band {
    /// Resolve a temperature to its band.
    ///
    /// Boundary values belong to the band whose lower bound equals them:
    /// 0 is Chilly, 10 is Mild, 20 is Warm, 30 is Blazing.
    pub fn for_temperature(temp: Temperature) -> Band {
        match temp.value() {
            t if t < 0 => Band::Frozen,
            t if t < 10 => Band::Chilly,
            t if t < 20 => Band::Mild,
            t if t < 30 => Band::Warm,
            _ => Band::Blazing,
        }
    }

    /// The static profile for this band.
    pub fn profile(&self) -> &'static ResultProfile {
        match self {
            Band::Frozen => &FROZEN,
            Band::Chilly => &CHILLY,
            Band::Mild => &MILD,
            Band::Warm => &WARM,
            Band::Blazing => &BLAZING,
        }
    }
}

/// Resolve a temperature directly to its result profile.
pub fn resolve(temp: Temperature) -> &'static ResultProfile {
    Band::for_temperature(temp).profile()
}

/// The static descriptive bundle shown for one temperature band.
#[derive(Debug, Serialize)]
pub struct ResultProfile {
    /// Headline name, e.g. "The Polar Analyst"
    pub title: &'static str,
    /// One-line tagline under the title
    pub subtitle: &'static str,
    /// Longer description paragraph
    pub description: &'static str,
    /// Emoji shown beside the temperature
    pub emoji: &'static str,
    /// Gradient start color (CSS hex)
    pub primary_color: &'static str,
    /// Gradient end color (CSS hex)
    pub secondary_color: &'static str,
    /// Defining traits
    pub traits: &'static [&'static str],
    /// Recommended activities
    pub activities: &'static [&'static str],
    /// Things to watch out for
    pub warnings: &'static [&'static str],
    /// Which temperatures this type pairs well with
    pub compatibility: &'static str,
    /// Personal advice paragraph
    pub advice: &'static str,
    /// Optional quote that fits the type
    pub quote: Option<&'static str>,
    /// Optional share of takers landing in this band, in percent
    pub share_percent: Option<u8>,
}

static FROZEN: ResultProfile = ResultProfile {
    title: "The Polar Analyst",
    subtitle: "Cool head, hidden depths",
    description: "Your emotions run deep below a calm, frozen surface. You process \
        everything internally and rarely let feelings steer a decision. People may \
        read you as distant, but those who earn your trust find surprising warmth \
        underneath the ice.",
    emoji: "🧊",
    primary_color: "#4facfe",
    secondary_color: "#00f2fe",
    traits: &[
        "Thinks before feeling, always",
        "Unshakeable in a crisis",
        "Keeps a very small inner circle",
    ],
    activities: &[
        "Journaling to surface buried feelings",
        "One-on-one conversations over crowds",
        "Long solo walks without a destination",
    ],
    warnings: &[
        "Bottled feelings leak out eventually",
        "Silence can read as rejection to others",
    ],
    compatibility: "You thaw best next to warm types (20°C and up) who are patient \
        enough not to rush you.",
    advice: "Try naming one feeling out loud each day, even just to yourself. \
        Emotions you can name stop running the show from the basement.",
    quote: Some("Still waters run deep."),
    share_percent: Some(11),
};

static CHILLY: ResultProfile = ResultProfile {
    title: "The Composed Realist",
    subtitle: "Feelings on a need-to-know basis",
    description: "You feel plenty, but you ration what you show. Logic gets the \
        first word and emotion gets the last one, usually in private. You are the \
        friend people call when they need clarity rather than comfort.",
    emoji: "🌬️",
    primary_color: "#667eea",
    secondary_color: "#764ba2",
    traits: &[
        "Calm under pressure",
        "Gives honest, unsweetened advice",
        "Slow to open up, loyal once open",
    ],
    activities: &[
        "Structured downtime like reading or chess",
        "Deep talks with one trusted person",
        "Solo hobbies that quiet the mind",
    ],
    warnings: &[
        "People may mistake composure for indifference",
        "Practical fixes aren't always what friends need",
    ],
    compatibility: "Mild and warm types (10–25°C) balance you without overwhelming \
        you.",
    advice: "Once in a while, lead with how you feel instead of what you think. \
        It gives the people who love you something to hold on to.",
    quote: None,
    share_percent: Some(19),
};

static MILD: ResultProfile = ResultProfile {
    title: "The Steady Harmonizer",
    subtitle: "Room temperature, in the best way",
    description: "You sit at the comfortable middle of the emotional scale. You can \
        sit with someone's tears and still get them laughing an hour later. \
        Balanced, adaptable, and easy to be around, you are the thermostat of \
        your friend group.",
    emoji: "🌤️",
    primary_color: "#43e97b",
    secondary_color: "#38f9d7",
    traits: &[
        "Reads the room quickly",
        "Balances logic and feeling",
        "Comfortable with most personality types",
    ],
    activities: &[
        "Small gatherings where everyone talks",
        "Trying a new hobby each season",
        "Being the designated mediator, in moderation",
    ],
    warnings: &[
        "Balancing everyone else can mute your own needs",
        "\"I'm fine\" is not always true",
    ],
    compatibility: "You genuinely pair well across the whole scale; extreme types \
        (below 0°C or above 30°C) especially benefit from your steadiness.",
    advice: "Check your own temperature before adjusting everyone else's. Your \
        needs count as much as the ones you're busy harmonizing.",
    quote: Some("Balance is not something you find, it's something you create."),
    share_percent: Some(34),
};

static WARM: ResultProfile = ResultProfile {
    title: "The Golden Retriever Heart",
    subtitle: "Warmth people can feel from across the room",
    description: "Affection comes naturally to you and you spend it freely. You \
        remember birthdays, notice haircuts, and text first. Being around you \
        feels like sitting in the sun, and people seek you out for exactly that.",
    emoji: "🌞",
    primary_color: "#fa709a",
    secondary_color: "#fee140",
    traits: &[
        "Expresses affection without embarrassment",
        "Quick to comfort, quicker to celebrate",
        "Makes strangers feel like old friends",
    ],
    activities: &[
        "Hosting, feeding, and gathering people",
        "Volunteering or mentoring",
        "Handwritten notes nobody expected",
    ],
    warnings: &[
        "Not everyone returns warmth at your rate",
        "You take on other people's weather",
    ],
    compatibility: "Cooler heads (0–10°C) ground you, and fellow warm types make \
        every day a festival, budget your energy accordingly.",
    advice: "Keep some warmth for yourself. You can't pour sunshine from an empty \
        sky, and the people who love you would rather have you rested.",
    quote: None,
    share_percent: Some(26),
};

static BLAZING: ResultProfile = ResultProfile {
    title: "The Supernova",
    subtitle: "Feels everything at full volume",
    description: "There is no dimmer switch on your heart. Joy, grief, excitement, \
        outrage: you feel each one completely and everyone nearby knows it. Your \
        intensity is magnetic and your loyalty is absolute, which makes you \
        unforgettable to everyone you let close.",
    emoji: "🔥",
    primary_color: "#f83600",
    secondary_color: "#f9d423",
    traits: &[
        "All-in on everything and everyone",
        "Contagious enthusiasm",
        "Fierce defender of the people they love",
    ],
    activities: &[
        "Creative outlets that can take the voltage",
        "High-energy exercise to burn the excess",
        "Scheduled quiet days, treated as sacred",
    ],
    warnings: &[
        "Burnout arrives fast at this wattage",
        "Big reactions can drown out quieter voices",
    ],
    compatibility: "Frozen and chilly types (below 10°C) are your unlikely best \
        match; their cool balances your blaze and your fire thaws their frost.",
    advice: "Intensity is a gift with a fuel gauge. Build cooldown rituals into \
        every week so the fire stays a hearth and not a wildfire.",
    quote: Some("A candle loses nothing by lighting another candle."),
    share_percent: Some(10),
};
