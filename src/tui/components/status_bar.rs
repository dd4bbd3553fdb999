//! # StatusBar Component
//!
//! Bottom line listing the keys that do something right now.
//!
//! Purely presentational: it receives the phase and whether an option has
//! been chosen as props and picks one of three hint strings.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::core::state::Phase;
use crate::tui::component::Component;

pub struct StatusBar {
    pub phase: Phase,
    pub has_selection: bool,
}

impl StatusBar {
    pub fn new(phase: Phase, has_selection: bool) -> Self {
        Self {
            phase,
            has_selection,
        }
    }

    pub fn hint(&self) -> &'static str {
        match (self.phase, self.has_selection) {
            (Phase::Completed, _) => "↑↓ scroll review · Enter/r try again · q quit",
            (Phase::Answering, false) => "↑↓ move · A-D or 1-4 choose · Enter select · r restart · q quit",
            (Phase::Answering, true) => "Enter/n next · r restart · q quit",
        }
    }
}

impl Component for StatusBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(
            Span::styled(self.hint(), Style::default().fg(Color::DarkGray)),
            area,
        );
    }
}
