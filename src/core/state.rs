//! # Session State
//!
//! Everything one play-through of the quiz knows about itself.
//!
//! ```text
//! Session
//! ├── bank: &[Question]              // question bank, never mutated
//! ├── index: usize                   // current question; == bank.len() once completed
//! ├── selection: Option<char>        // chosen option for the current question
//! ├── score: u32                     // count of correct answers
//! ├── completed: bool
//! ├── explanation_visible: bool      // set on choose, cleared on advance
//! └── answers: Vec<AnswerRecord>     // answering order
//! ```
//!
//! Fields are private. The only way to change a session is
//! `update(session, action)` in action.rs; this module adds read-only queries
//! the presentation layer needs (progress, feedback, stars, review).

use crate::core::bank::{QUESTIONS, Question};

/// Number of stars shown on the summary screen.
pub const MAX_STARS: u32 = 5;

/// Logged when a question is answered. Captures the correct id at answer
/// time so the review never has to look it up again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerRecord {
    pub question_id: u32,
    pub chosen: char,
    pub correct: char,
}

impl AnswerRecord {
    pub fn is_correct(&self) -> bool {
        self.chosen == self.correct
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Answering,
    Completed,
}

/// Visual feedback for one option of the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionFeedback {
    /// Nothing revealed for this option.
    Neutral,
    /// The correct option, shown once any selection is made.
    Correct,
    /// The user's choice, and it was wrong.
    WrongChoice,
}

/// One row of the end-of-quiz review.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewEntry {
    pub question: &'static Question,
    /// `None` if the question was never answered.
    pub chosen: Option<char>,
    pub correct: char,
}

impl ReviewEntry {
    pub fn is_correct(&self) -> bool {
        self.chosen == Some(self.correct)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    bank: &'static [Question],
    pub(crate) index: usize,
    pub(crate) selection: Option<char>,
    pub(crate) score: u32,
    pub(crate) completed: bool,
    pub(crate) explanation_visible: bool,
    pub(crate) answers: Vec<AnswerRecord>,
}

impl Session {
    /// Starts a session over the given bank at the first question.
    pub fn new(bank: &'static [Question]) -> Self {
        Self {
            bank,
            index: 0,
            selection: None,
            score: 0,
            completed: false,
            explanation_visible: false,
            answers: Vec::new(),
        }
    }

    /// A session over the built-in [`QUESTIONS`].
    pub fn builtin() -> Self {
        Self::new(QUESTIONS)
    }

    pub fn bank(&self) -> &'static [Question] {
        self.bank
    }

    pub fn total(&self) -> usize {
        self.bank.len()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn selection(&self) -> Option<char> {
        self.selection
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn explanation_visible(&self) -> bool {
        self.explanation_visible
    }

    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    pub fn phase(&self) -> Phase {
        if self.completed {
            Phase::Completed
        } else {
            Phase::Answering
        }
    }

    /// The question awaiting (or holding) an answer. `None` once completed.
    pub fn current_question(&self) -> Option<&'static Question> {
        if self.completed {
            return None;
        }
        self.bank.get(self.index)
    }

    pub fn is_last_question(&self) -> bool {
        !self.completed && self.index + 1 == self.bank.len()
    }

    /// `(position, total)` for the progress indicator. Position is 1-based
    /// while answering and equals `total` once completed.
    pub fn progress(&self) -> (usize, usize) {
        let total = self.total();
        let position = if self.completed {
            total
        } else {
            (self.index + 1).min(total)
        };
        (position, total)
    }

    /// Fraction of questions already behind the user, in `[0, 1]`.
    pub fn progress_ratio(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        (self.index.min(total) as f64) / (total as f64)
    }

    pub fn option_feedback(&self, option_id: char) -> OptionFeedback {
        let (Some(chosen), Some(question)) = (self.selection, self.current_question()) else {
            return OptionFeedback::Neutral;
        };
        if question.is_correct(option_id) {
            OptionFeedback::Correct
        } else if chosen == option_id {
            OptionFeedback::WrongChoice
        } else {
            OptionFeedback::Neutral
        }
    }

    /// `round(score / total * MAX_STARS)`, halves rounding up.
    pub fn star_rating(&self) -> u32 {
        let total = self.total() as u32;
        if total == 0 {
            return 0;
        }
        // floor(x + 1/2) with x = score * MAX_STARS / total, kept in integers
        let rating = (2 * self.score * MAX_STARS + total) / (2 * total);
        rating.min(MAX_STARS)
    }

    /// One entry per question in bank order, pairing it with the recorded answer.
    pub fn review(&self) -> Vec<ReviewEntry> {
        self.bank
            .iter()
            .map(|question| ReviewEntry {
                question,
                chosen: self
                    .answers
                    .iter()
                    .find(|a| a.question_id == question.id)
                    .map(|a| a.chosen),
                correct: question.correct,
            })
            .collect()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::builtin()
    }
}
