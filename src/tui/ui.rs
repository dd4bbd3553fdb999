use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::core::config::DisplaySettings;
use crate::core::state::{Phase, Session};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{Header, QuestionCard, StatusBar, Summary};

/// Renders one frame from the current session snapshot.
pub fn draw_ui(frame: &mut Frame, session: &Session, tui: &mut TuiState, display: &DisplaySettings) {
    let [header_area, main_area, status_area] = layout(frame.area(), display.show_progress_bar);

    Header {
        title: &display.title,
        subtitle: &display.subtitle,
        progress: session.progress(),
        ratio: session.progress_ratio(),
        accent: display.accent,
        show_progress_bar: display.show_progress_bar,
    }
    .render(frame, header_area);

    match session.phase() {
        Phase::Answering => QuestionCard {
            session,
            highlight: tui.highlight,
            accent: display.accent,
        }
        .render(frame, main_area),
        Phase::Completed => Summary {
            session,
            state: &mut tui.review,
            accent: display.accent,
        }
        .render(frame, main_area),
    }

    StatusBar::new(session.phase(), session.selection().is_some()).render(frame, status_area);
}

fn layout(area: Rect, show_progress_bar: bool) -> [Rect; 3] {
    use Constraint::{Length, Min};
    // Header, one blank spacer row, main panel, status line
    let [header, _spacer, main, status] = Layout::vertical([
        Length(Header::height(show_progress_bar)),
        Length(1),
        Min(0),
        Length(1),
    ])
    .areas(area);
    [header, main, status]
}
