//! # Intents
//!
//! Translates a `TuiEvent` into what it means for the current screen.
//!
//! Only three things ever reach the core: `Choose`, `Advance` and `Restart`,
//! wrapped in [`Intent::Apply`]. Everything else (highlight movement, review
//! scrolling, quitting) is presentation state owned by the TUI.
//!
//! Affordances that the quiz wouldn't accept are disabled here: once an
//! option is chosen, option keys do nothing, and "next" does nothing until
//! one is.

use crate::core::Action;
use crate::core::state::{Phase, Session};
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Apply(Action),
    HighlightUp,
    HighlightDown,
    ScrollReview(ReviewScroll),
    Quit,
    Ignore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewScroll {
    Up,
    Down,
    PageUp,
    PageDown,
}

pub fn resolve_intent(session: &Session, highlight: usize, event: &TuiEvent) -> Intent {
    match event {
        TuiEvent::ForceQuit | TuiEvent::Escape => return Intent::Quit,
        TuiEvent::Resize => return Intent::Ignore,
        _ => {}
    }
    match session.phase() {
        Phase::Answering => answering_intent(session, highlight, event),
        Phase::Completed => completed_intent(event),
    }
}

fn answering_intent(session: &Session, highlight: usize, event: &TuiEvent) -> Intent {
    let Some(question) = session.current_question() else {
        return Intent::Ignore;
    };
    let has_selection = session.selection().is_some();

    let choose = |id: Option<char>| match id {
        Some(id) if !has_selection => Intent::Apply(Action::Choose(id)),
        _ => Intent::Ignore,
    };
    let advance = || {
        if has_selection {
            Intent::Apply(Action::Advance)
        } else {
            Intent::Ignore
        }
    };

    match event {
        TuiEvent::Submit | TuiEvent::InputChar(' ') => {
            if has_selection {
                advance()
            } else {
                choose(question.options.get(highlight).map(|o| o.id))
            }
        }
        TuiEvent::CursorUp | TuiEvent::InputChar('k') if !has_selection => Intent::HighlightUp,
        TuiEvent::CursorDown | TuiEvent::InputChar('j') if !has_selection => {
            Intent::HighlightDown
        }
        TuiEvent::InputChar(c) => {
            if let Some(digit) = c.to_digit(10) {
                return choose(question.option_at(digit as usize).map(|o| o.id));
            }
            if let Some(option) = question.options.iter().find(|o| o.id.eq_ignore_ascii_case(c)) {
                return choose(Some(option.id));
            }
            match *c {
                'n' | 'N' => advance(),
                'r' | 'R' => Intent::Apply(Action::Restart),
                'q' | 'Q' => Intent::Quit,
                _ => Intent::Ignore,
            }
        }
        _ => Intent::Ignore,
    }
}

fn completed_intent(event: &TuiEvent) -> Intent {
    match event {
        TuiEvent::Submit | TuiEvent::InputChar(' ' | 'r' | 'R') => {
            Intent::Apply(Action::Restart)
        }
        TuiEvent::InputChar('q' | 'Q') => Intent::Quit,
        TuiEvent::CursorUp | TuiEvent::InputChar('k') => Intent::ScrollReview(ReviewScroll::Up),
        TuiEvent::CursorDown | TuiEvent::InputChar('j') => {
            Intent::ScrollReview(ReviewScroll::Down)
        }
        TuiEvent::PageUp => Intent::ScrollReview(ReviewScroll::PageUp),
        TuiEvent::PageDown => Intent::ScrollReview(ReviewScroll::PageDown),
        _ => Intent::Ignore,
    }
}
