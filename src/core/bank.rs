//! # Question Bank
//!
//! The fixed, ordered list of questions the quiz walks through. Questions are
//! plain `'static` data: they are defined once as a literal and never mutated.
//!
//! ```text
//! Question
//! ├── id: u32                      // unique, ordinal
//! ├── text: &str
//! ├── options: &[QuizOption]       // 2..N, ids unique within the question
//! ├── correct: char                // must name one of the options
//! └── explanation: &str
//! ```
//!
//! [`validate`] checks those shape rules. The binary runs it once at startup
//! so a typo in [`QUESTIONS`] fails loudly instead of producing an
//! unanswerable question.

use std::collections::HashSet;
use std::fmt;

/// A single answer choice. `id` is the letter shown next to the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizOption {
    pub id: char,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub id: u32,
    pub text: &'static str,
    pub options: &'static [QuizOption],
    pub correct: char,
    pub explanation: &'static str,
}

impl Question {
    /// Looks up an option of this question by id.
    pub fn option(&self, id: char) -> Option<&QuizOption> {
        self.options.iter().find(|opt| opt.id == id)
    }

    /// Looks up an option by its 1-based display position.
    pub fn option_at(&self, position: usize) -> Option<&QuizOption> {
        position.checked_sub(1).and_then(|i| self.options.get(i))
    }

    pub fn is_correct(&self, id: char) -> bool {
        self.correct == id
    }
}

const fn opt(id: char, label: &'static str) -> QuizOption {
    QuizOption { id, label }
}

/// The built-in question bank.
pub static QUESTIONS: &[Question] = &[
    Question {
        id: 1,
        text: "What is the first month of the Islamic lunar calendar?",
        options: &[
            opt('A', "Muharram"),
            opt('B', "Ramadan"),
            opt('C', "Shawwal"),
            opt('D', "Dhu al-Hijjah"),
        ],
        correct: 'A',
        explanation: "Muharram is the first month of the Islamic lunar calendar.",
    },
    Question {
        id: 2,
        text: "How many daily prayers (Salah) are obligatory for an adult Muslim?",
        options: &[
            opt('A', "Three"),
            opt('B', "Five"),
            opt('C', "Seven"),
            opt('D', "Two"),
        ],
        correct: 'B',
        explanation: "There are five obligatory daily prayers: Fajr, Dhuhr, Asr, Maghrib, and Isha.",
    },
    Question {
        id: 3,
        text: "What is the Arabic word for fasting during Ramadan?",
        options: &[
            opt('A', "Zakat"),
            opt('B', "Hajj"),
            opt('C', "Sawm"),
            opt('D', "Salat"),
        ],
        correct: 'C',
        explanation: "Sawm means fasting, observed especially during Ramadan.",
    },
    Question {
        id: 4,
        text: "Which city is considered the holiest in Islam?",
        options: &[
            opt('A', "Jerusalem"),
            opt('B', "Medina"),
            opt('C', "Mecca"),
            opt('D', "Cairo"),
        ],
        correct: 'C',
        explanation: "Mecca (Makkah) is the holiest city in Islam; the Kaaba is located there.",
    },
    Question {
        id: 5,
        text: "What is Zakat?",
        options: &[
            opt('A', "Pilgrimage to Mecca"),
            opt('B', "Almsgiving/charitable tax"),
            opt('C', "The testimony of faith"),
            opt('D', "A ritual prayer"),
        ],
        correct: 'B',
        explanation: "Zakat is a form of almsgiving and religious tax in Islam.",
    },
];

// ============================================================================
// Validation
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BankError {
    Empty,
    DuplicateQuestion(u32),
    TooFewOptions { question: u32, count: usize },
    DuplicateOption { question: u32, option: char },
    UnknownCorrect { question: u32, correct: char },
}

impl fmt::Display for BankError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BankError::Empty => write!(f, "question bank is empty"),
            BankError::DuplicateQuestion(id) => write!(f, "duplicate question id {id}"),
            BankError::TooFewOptions { question, count } => {
                write!(f, "question {question} has {count} option(s), need at least 2")
            }
            BankError::DuplicateOption { question, option } => {
                write!(f, "question {question} repeats option id '{option}'")
            }
            BankError::UnknownCorrect { question, correct } => {
                write!(f, "question {question} marks '{correct}' correct but has no such option")
            }
        }
    }
}

impl std::error::Error for BankError {}

/// Checks the shape rules every bank must satisfy. Stops at the first problem.
pub fn validate(bank: &[Question]) -> Result<(), BankError> {
    if bank.is_empty() {
        return Err(BankError::Empty);
    }

    let mut question_ids = HashSet::new();
    for question in bank {
        if !question_ids.insert(question.id) {
            return Err(BankError::DuplicateQuestion(question.id));
        }
        if question.options.len() < 2 {
            return Err(BankError::TooFewOptions {
                question: question.id,
                count: question.options.len(),
            });
        }

        let mut option_ids = HashSet::new();
        for option in question.options {
            if !option_ids.insert(option.id) {
                return Err(BankError::DuplicateOption {
                    question: question.id,
                    option: option.id,
                });
            }
        }

        if question.option(question.correct).is_none() {
            return Err(BankError::UnknownCorrect {
                question: question.id,
                correct: question.correct,
            });
        }
    }
    Ok(())
}
