//! The emotional temperature question bank
//!
//! Static, ordered, process-wide data. Ten questions, four options each,
//! option weights 0..=5, so total scores span 0..=50.

use crate::types::{AnswerOption, Question};

const QUESTIONS: &[Question] = &[
    Question {
        text: "A friend messages you out of the blue just to say hi. What do you do?",
        options: &[
            AnswerOption { text: "Call them back immediately, voice notes and all", weight: 5 },
            AnswerOption { text: "Reply warmly and ask how they've been", weight: 3 },
            AnswerOption { text: "Send a short reply when I get around to it", weight: 1 },
            AnswerOption { text: "Leave it on read for now", weight: 0 },
        ],
    },
    Question {
        text: "You watch a sad scene in a film. How do you react?",
        options: &[
            AnswerOption { text: "Full tears, every time", weight: 5 },
            AnswerOption { text: "I get a lump in my throat", weight: 3 },
            AnswerOption { text: "I notice it's sad but stay composed", weight: 2 },
            AnswerOption { text: "I'm mostly thinking about the plot holes", weight: 0 },
        ],
    },
    Question {
        text: "A coworker seems down today. What's your move?",
        options: &[
            AnswerOption { text: "Pull them aside and ask what's wrong", weight: 5 },
            AnswerOption { text: "Quietly do something nice for them", weight: 4 },
            AnswerOption { text: "Give them space but keep an eye out", weight: 2 },
            AnswerOption { text: "It's not really my business", weight: 0 },
        ],
    },
    Question {
        text: "How do you handle being angry?",
        options: &[
            AnswerOption { text: "Everyone within a mile knows about it", weight: 5 },
            AnswerOption { text: "I talk it out with someone I trust", weight: 3 },
            AnswerOption { text: "I go quiet and process it alone", weight: 1 },
            AnswerOption { text: "Angry? I don't really do angry", weight: 0 },
        ],
    },
    Question {
        text: "Your ideal weekend looks like...",
        options: &[
            AnswerOption { text: "A big gathering with everyone I love", weight: 5 },
            AnswerOption { text: "A long dinner with one or two close friends", weight: 3 },
            AnswerOption { text: "A solo trip somewhere quiet", weight: 1 },
            AnswerOption { text: "Home, phone off, door closed", weight: 0 },
        ],
    },
    Question {
        text: "Someone compliments you sincerely. You...",
        options: &[
            AnswerOption { text: "Light up and compliment them right back", weight: 5 },
            AnswerOption { text: "Smile and say thank you", weight: 3 },
            AnswerOption { text: "Get flustered and change the subject", weight: 2 },
            AnswerOption { text: "Wonder what they want from me", weight: 0 },
        ],
    },
    Question {
        text: "A friend cancels plans at the last minute. Honest first reaction?",
        options: &[
            AnswerOption { text: "Worried something happened to them", weight: 5 },
            AnswerOption { text: "Disappointed, and I tell them so", weight: 4 },
            AnswerOption { text: "Mildly annoyed but it passes", weight: 2 },
            AnswerOption { text: "Relieved, honestly", weight: 0 },
        ],
    },
    Question {
        text: "How often do you say \"I love you\" to the people who matter?",
        options: &[
            AnswerOption { text: "Constantly, they're probably sick of it", weight: 5 },
            AnswerOption { text: "On the big occasions", weight: 3 },
            AnswerOption { text: "Rarely, but I show it in other ways", weight: 2 },
            AnswerOption { text: "Words like that don't come easily to me", weight: 0 },
        ],
    },
    Question {
        text: "You're given a surprise gift. Your reaction is...",
        options: &[
            AnswerOption { text: "Loud delight, maybe happy tears", weight: 5 },
            AnswerOption { text: "Genuinely touched, and it shows", weight: 4 },
            AnswerOption { text: "Grateful but a little awkward", weight: 2 },
            AnswerOption { text: "Suspicious of the occasion", weight: 0 },
        ],
    },
    Question {
        text: "When a friend vents to you about a problem, you mostly...",
        options: &[
            AnswerOption { text: "Feel it with them like it's my own problem", weight: 5 },
            AnswerOption { text: "Listen and comfort first, advise later", weight: 3 },
            AnswerOption { text: "Jump straight to practical fixes", weight: 1 },
            AnswerOption { text: "Struggle to know what to say", weight: 0 },
        ],
    },
];

/// The full ordered question bank.
pub fn question_bank() -> &'static [Question] {
    QUESTIONS
}
