//! # Header Component
//!
//! Title, subtitle and progress through the quiz.
//!
//! ```text
//! Islam Quiz                                   Progress 2 / 5
//! Test your knowledge with friendly, bite-sized questions.
//! ━━━━━━━━━━━━━━━━──────────────────────────────────────────
//! ```
//!
//! Stateless: every field is a prop copied out of the session and the
//! display settings each frame. The bar row is omitted when
//! `show_progress_bar` is off, so [`Header::height`] is what the parent
//! layout must reserve.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{LineGauge, Paragraph};

use crate::tui::component::Component;

pub struct Header<'a> {
    pub title: &'a str,
    pub subtitle: &'a str,
    /// `(position, total)`
    pub progress: (usize, usize),
    /// Filled fraction of the bar, in `[0, 1]`.
    pub ratio: f64,
    pub accent: Color,
    pub show_progress_bar: bool,
}

impl Header<'_> {
    pub fn height(show_progress_bar: bool) -> u16 {
        if show_progress_bar { 3 } else { 2 }
    }

    fn progress_label(&self) -> String {
        format!("Progress {} / {}", self.progress.0, self.progress.1)
    }
}

impl Component for Header<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::Length;
        let [title_row, subtitle_row, bar_row] =
            Layout::vertical([Length(1), Length(1), Length(1)]).areas(area);

        let label = self.progress_label();
        let [title_area, progress_area] =
            Layout::horizontal([Constraint::Min(0), Length(label.len() as u16)]).areas(title_row);

        let title = Paragraph::new(Line::from(Span::styled(
            self.title,
            Style::default().add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(title, title_area);

        let progress = Paragraph::new(label)
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Right);
        frame.render_widget(progress, progress_area);

        let subtitle = Paragraph::new(Span::styled(
            self.subtitle,
            Style::default().fg(Color::DarkGray),
        ));
        frame.render_widget(subtitle, subtitle_row);

        if self.show_progress_bar {
            let bar = LineGauge::default()
                .ratio(self.ratio.clamp(0.0, 1.0))
                .label("")
                .filled_style(Style::default().fg(self.accent))
                .unfilled_style(Style::default().fg(Color::DarkGray));
            frame.render_widget(bar, bar_row);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render_lines;

    fn header(show_progress_bar: bool) -> Header<'static> {
        Header {
            title: "Islam Quiz",
            subtitle: "Bite-sized questions.",
            progress: (2, 5),
            ratio: 0.2,
            accent: Color::Blue,
            show_progress_bar,
        }
    }

    #[test]
    fn test_height_depends_on_bar() {
        assert_eq!(Header::height(true), 3);
        assert_eq!(Header::height(false), 2);
    }

    #[test]
    fn test_renders_title_subtitle_and_progress() {
        let lines = render_lines(60, 3, |f| header(true).render(f, f.area()));
        assert!(lines[0].starts_with("Islam Quiz"));
        assert!(lines[0].trim_end().ends_with("Progress 2 / 5"));
        assert!(lines[1].contains("Bite-sized questions."));
    }

    #[test]
    fn test_bar_row_blank_when_disabled() {
        let lines = render_lines(60, 3, |f| header(false).render(f, f.area()));
        assert!(lines[2].trim().is_empty());
    }

    #[test]
    fn test_bar_row_drawn_when_enabled() {
        let lines = render_lines(60, 3, |f| header(true).render(f, f.area()));
        assert!(!lines[2].trim().is_empty());
    }
}
