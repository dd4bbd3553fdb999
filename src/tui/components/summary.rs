//! # Summary Component
//!
//! Shown once the quiz is completed: score, star rating and a scrollable
//! review pairing every question with the recorded and correct answers.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ReviewState` lives in `TuiState` (scroll offset survives redraws)
//! - `Summary` is created each frame with borrowed state
//!
//! Review rows are rendered into a `ScrollView`, which needs the canvas
//! height before rendering, so [`ReviewItem::calculate_height`] predicts
//! each row's wrapped height with `textwrap`.

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::state::{MAX_STARS, ReviewEntry, Session};
use crate::tui::component::Component;
use crate::tui::intent::ReviewScroll;

/// Rows above the review list: heading, score, stars, blank, "Review".
const TOP_HEIGHT: u16 = 5;
/// Blank line under each review row.
const ROW_GAP: u16 = 1;

/// Persistent scroll position of the review list.
#[derive(Default)]
pub struct ReviewState {
    pub scroll_state: ScrollViewState,
}

impl ReviewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scroll(&mut self, direction: ReviewScroll) {
        match direction {
            ReviewScroll::Up => self.scroll_state.scroll_up(),
            ReviewScroll::Down => self.scroll_state.scroll_down(),
            ReviewScroll::PageUp => self.scroll_state.scroll_page_up(),
            ReviewScroll::PageDown => self.scroll_state.scroll_page_down(),
        }
    }

    pub fn reset(&mut self) {
        self.scroll_state.scroll_to_top();
    }
}

pub struct Summary<'a> {
    pub session: &'a Session,
    pub state: &'a mut ReviewState,
    pub accent: Color,
}

impl Component for Summary<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::{Length, Min};
        let [top_area, review_area, hint_area] =
            Layout::vertical([Length(TOP_HEIGHT), Min(0), Length(1)]).areas(area);

        let (_, total) = self.session.progress();
        let top = Paragraph::new(vec![
            Line::from(Span::styled(
                "Well done!",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::raw("You scored "),
                Span::styled(
                    self.session.score().to_string(),
                    Style::default().fg(self.accent).add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!(" out of {total}")),
            ]),
            star_line(self.session.star_rating(), self.accent),
            Line::default(),
            Line::from(Span::styled(
                "Review",
                Style::default().add_modifier(Modifier::UNDERLINED),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(top, top_area);

        self.render_review(frame, review_area);

        let hint = Paragraph::new(Span::styled(
            "[Enter] Try again   [q] Quit",
            Style::default().fg(Color::DarkGray),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(hint, hint_area);
    }
}

impl Summary<'_> {
    fn render_review(&mut self, frame: &mut Frame, area: Rect) {
        // One column for the scrollbar
        let content_width = area.width.saturating_sub(1);
        let entries = self.session.review();

        let heights: Vec<u16> = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| ReviewItem::new(i + 1, entry).calculate_height(content_width) + ROW_GAP)
            .collect();
        let canvas_height: u16 = heights.iter().sum();

        let mut scroll_view = ScrollView::new(Size::new(content_width, canvas_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y = 0;
        for ((i, entry), height) in entries.iter().enumerate().zip(&heights) {
            let rect = Rect::new(0, y, content_width, height - ROW_GAP);
            scroll_view.render_widget(ReviewItem::new(i + 1, entry), rect);
            y += height;
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

/// `★★★☆☆` with the filled stars in the accent colour.
pub fn star_line(filled: u32, accent: Color) -> Line<'static> {
    let filled = filled.min(MAX_STARS) as usize;
    let empty = MAX_STARS as usize - filled;
    Line::from(vec![
        Span::styled("★ ".repeat(filled), Style::default().fg(accent)),
        Span::styled("☆ ".repeat(empty), Style::default().fg(Color::DarkGray)),
    ])
}

const YOUR_ANSWER: &str = "   Your answer: ";
const CORRECT: &str = "   Correct: ";

/// One row of the review: "N. question" then "Your answer: X   Correct: Y".
#[derive(Clone, Copy)]
pub struct ReviewItem<'a> {
    pub number: usize,
    pub entry: &'a ReviewEntry,
}

impl<'a> ReviewItem<'a> {
    pub fn new(number: usize, entry: &'a ReviewEntry) -> Self {
        Self { number, entry }
    }

    fn heading(&self) -> String {
        format!("{}. {}", self.number, self.entry.question.text)
    }

    fn chosen_text(&self) -> String {
        self.entry
            .chosen
            .map(String::from)
            .unwrap_or_else(|| "-".to_string())
    }

    /// The answer line as plain text, as laid out by `render`.
    fn answer_text(&self) -> String {
        format!(
            "{YOUR_ANSWER}{}{CORRECT}{}",
            self.chosen_text(),
            self.entry.correct
        )
    }

    /// Height of this row at `width`, matching `Paragraph`'s word wrapping.
    pub fn calculate_height(&self, width: u16) -> u16 {
        if width == 0 {
            return 1;
        }
        let wrapped = |text: &str| {
            let options = textwrap::Options::new(width as usize)
                .break_words(true)
                .word_separator(textwrap::WordSeparator::AsciiSpace);
            textwrap::wrap(text, options).len().max(1) as u16
        };
        wrapped(&self.heading()) + wrapped(&self.answer_text())
    }
}

impl Widget for ReviewItem<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chosen = self.chosen_text();
        let answer_style = if self.entry.is_correct() {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        };

        let lines = vec![
            Line::from(Span::styled(
                self.heading(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled(YOUR_ANSWER, Style::default().fg(Color::Gray)),
                Span::styled(chosen, answer_style),
                Span::styled(CORRECT, Style::default().fg(Color::Gray)),
                Span::styled(
                    self.entry.correct.to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]),
        ];

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
