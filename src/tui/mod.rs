//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Data Flow
//!
//! ```text
//! key press → TuiEvent → resolve_intent() → Action → update() → Session → draw_ui()
//! ```
//!
//! The session is owned by [`run`] and replaced wholesale by each `update`.
//! `TuiState` only holds what the core doesn't care about: which option is
//! highlighted and how far the review list is scrolled.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps up to 500ms waiting for input and
//! only redraws after an event (including terminal resize).

mod component;
mod components;
mod event;
mod intent;
mod ui;

pub use event::TuiEvent;
pub use intent::{Intent, ReviewScroll, resolve_intent};

use log::{debug, info};
use std::io::{self, stdout};
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::config::DisplaySettings;
use crate::core::{Action, Session, update};
use crate::tui::components::ReviewState;
use crate::tui::event::{poll_event_immediate, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of the quiz itself)
pub struct TuiState {
    /// Highlighted option of the current question.
    pub highlight: usize,
    pub review: ReviewState,
    /// `(index, completed)` the highlight and scroll belong to.
    seen: (usize, bool),
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            highlight: 0,
            review: ReviewState::new(),
            seen: (0, false),
        }
    }

    /// Resets the highlight and review scroll whenever the screen changed
    /// underneath them (new question, completion).
    pub fn sync(&mut self, session: &Session) {
        let now = (session.index(), session.is_completed());
        if now != self.seen {
            self.reset();
            self.seen = now;
        }
    }

    /// Back to the first option and the top of the review.
    pub fn reset(&mut self) {
        self.highlight = 0;
        self.review.reset();
    }

    pub fn move_highlight(&mut self, session: &Session, up: bool) {
        let count = session
            .current_question()
            .map_or(0, |question| question.options.len());
        if count == 0 {
            return;
        }
        self.highlight = if up {
            self.highlight.checked_sub(1).unwrap_or(count - 1)
        } else {
            (self.highlight + 1) % count
        };
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

/// What the run loop should do after an intent is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Applies one intent, returning the next session. Pure apart from logging,
/// so the whole key-to-state path is testable without a terminal.
pub fn apply_intent(session: Session, tui: &mut TuiState, intent: Intent) -> (Session, Flow) {
    let session = match intent {
        Intent::Apply(action) => {
            debug!("Action: {:?}", action);
            // Restarting on the first question leaves `seen` unchanged
            if action == Action::Restart {
                tui.reset();
            }
            update(session, action)
        }
        Intent::HighlightUp => {
            tui.move_highlight(&session, true);
            session
        }
        Intent::HighlightDown => {
            tui.move_highlight(&session, false);
            session
        }
        Intent::ScrollReview(direction) => {
            tui.review.scroll(direction);
            session
        }
        Intent::Quit => return (session, Flow::Quit),
        Intent::Ignore => session,
    };
    tui.sync(&session);
    (session, Flow::Continue)
}

/// One-line description of where the user left the quiz.
fn quit_summary(session: &Session) -> String {
    let (position, total) = session.progress();
    if session.is_completed() {
        format!(
            "Quitting after completing all {} questions with score {}",
            total,
            session.score()
        )
    } else {
        format!(
            "Quitting at question {} of {} with score {}",
            position,
            total,
            session.score()
        )
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        execute!(stdout(), Hide)?;
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show);
    }
}

pub fn run(display: DisplaySettings) -> io::Result<()> {
    let mut terminal = ratatui::init();
    let result = TerminalModeGuard::new().and_then(|_guard| event_loop(&mut terminal, &display));
    ratatui::restore();
    result
}

fn event_loop(terminal: &mut DefaultTerminal, display: &DisplaySettings) -> io::Result<()> {
    let mut session = Session::builtin();
    let mut tui = TuiState::new();
    let mut needs_redraw = true; // Force first frame

    info!("Quiz started with {} questions", session.total());

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &session, &mut tui, display))?;
            needs_redraw = false;
        }

        let Some(first_event) = poll_event_timeout(IDLE_POLL)? else {
            continue;
        };
        needs_redraw = true;

        // Drain everything pending before the next draw
        let mut pending = vec![first_event];
        while let Some(event) = poll_event_immediate()? {
            pending.push(event);
        }

        for event in pending {
            let intent = resolve_intent(&session, tui.highlight, &event);
            let (next, flow) = apply_intent(session, &mut tui, intent);
            session = next;
            if flow == Flow::Quit {
                info!("{}", quit_summary(&session));
                return Ok(());
            }
        }
    }
}
