//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use ratatui::Terminal;
use ratatui::backend::TestBackend;

use crate::core::action::{Action, update};
use crate::core::bank::{QuizOption, Question};
use crate::core::state::Session;

/// A two-question bank where "T" is always right.
pub static TRUE_FALSE_BANK: &[Question] = &[
    Question {
        id: 1,
        text: "The sky is blue.",
        options: &[
            QuizOption { id: 'T', label: "True" },
            QuizOption { id: 'F', label: "False" },
        ],
        correct: 'T',
        explanation: "Rayleigh scattering.",
    },
    Question {
        id: 2,
        text: "Water is wet.",
        options: &[
            QuizOption { id: 'T', label: "True" },
            QuizOption { id: 'F', label: "False" },
        ],
        correct: 'T',
        explanation: "By most accounts.",
    },
];

/// Applies actions in order to a fresh built-in session.
pub fn run(actions: &[Action]) -> Session {
    actions
        .iter()
        .fold(Session::builtin(), |session, &action| update(session, action))
}

/// Answers the first `choices.len()` built-in questions, advancing after each.
pub fn answered(choices: &[char]) -> Session {
    choices.iter().fold(Session::builtin(), |session, &choice| {
        update(update(session, Action::Choose(choice)), Action::Advance)
    })
}

/// A built-in session with the score forced to `score`.
pub fn with_score(score: u32) -> Session {
    let mut session = Session::builtin();
    session.score = score;
    session
}

/// Renders with `draw` into a fresh `TestBackend` and returns every row as text.
pub fn render_lines<F>(width: u16, height: u16, draw: F) -> Vec<String>
where
    F: FnOnce(&mut ratatui::Frame),
{
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(draw).unwrap();

    let buffer = terminal.backend().buffer();
    (0..buffer.area.height)
        .map(|y| {
            (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

/// Same as [`render_lines`] but joined into one string for `contains` checks.
pub fn render_text<F>(width: u16, height: u16, draw: F) -> String
where
    F: FnOnce(&mut ratatui::Frame),
{
    render_lines(width, height, draw).join("\n")
}
