//! # Question Card Component
//!
//! The main panel while answering: question text, the options, feedback after
//! a choice, the explanation, and the restart / next affordances.
//!
//! ```text
//! ┌Question 2──────────────────────────────────────Score: 1┐
//! │How many daily prayers (Salah) are obligatory ...?       │
//! │                                                         │
//! │  [A] Three                               Your choice    │
//! │  [B] Five                                Correct        │
//! │  ...                                                    │
//! │Explanation: There are five obligatory daily prayers ... │
//! │                                                         │
//! │Take your time, the quiz is non-timed.                   │
//! │[r] Restart   [Enter] Next                               │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! Before a choice, the highlighted option carries a `›` marker. After a
//! choice the highlight disappears and the correct option turns green; a
//! wrong choice turns red. The next affordance reads "Finish" on the last
//! question and is dimmed until something is chosen.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Wrap};

use crate::core::bank::QuizOption;
use crate::core::state::{OptionFeedback, Session};
use crate::tui::component::Component;

/// Width reserved for the feedback label column ("Your choice" + gap).
const LABEL_COLUMN: usize = 13;

pub struct QuestionCard<'a> {
    pub session: &'a Session,
    /// Index of the highlighted option (ignored once a choice exists).
    pub highlight: usize,
    pub accent: Color,
}

impl QuestionCard<'_> {
    fn lines(&self, inner_width: u16) -> Vec<Line<'static>> {
        let Some(question) = self.session.current_question() else {
            return Vec::new();
        };
        let has_selection = self.session.selection().is_some();

        let mut lines = vec![
            Line::from(Span::styled(
                question.text,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::default(),
        ];

        for (i, option) in question.options.iter().enumerate() {
            let feedback = self.session.option_feedback(option.id);
            let highlighted = !has_selection && i == self.highlight;
            let chosen = self.session.selection() == Some(option.id);
            lines.push(option_line(
                option,
                feedback,
                chosen,
                highlighted,
                self.accent,
                inner_width,
            ));
        }

        if self.session.explanation_visible() {
            lines.push(Line::default());
            lines.push(Line::from(vec![
                Span::styled("Explanation: ", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(question.explanation),
            ]));
        }

        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Take your time, the quiz is non-timed.",
            Style::default().fg(Color::DarkGray),
        )));

        let next_label = if self.session.is_last_question() {
            "[Enter] Finish"
        } else {
            "[Enter] Next"
        };
        let next_style = if has_selection {
            Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
        };
        lines.push(Line::from(vec![
            Span::raw("[r] Restart   "),
            Span::styled(next_label, next_style),
        ]));

        lines
    }
}

impl Component for QuestionCard<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let (position, _) = self.session.progress();
        let block = Block::bordered()
            .title(Line::from(format!("Question {position}")))
            .title(Line::from(format!("Score: {}", self.session.score())).right_aligned())
            .border_style(Style::default().fg(self.accent))
            .padding(Padding::horizontal(1));

        let inner_width = block.inner(area).width;
        let paragraph = Paragraph::new(self.lines(inner_width))
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }
}

/// One option row: marker, id, label, and the feedback label pushed right.
pub fn option_line(
    option: &QuizOption,
    feedback: OptionFeedback,
    chosen: bool,
    highlighted: bool,
    accent: Color,
    inner_width: u16,
) -> Line<'static> {
    let marker = if highlighted { "› " } else { "  " };
    let body = format!("[{}] {}", option.id, option.label);
    let label = feedback_label(feedback, chosen);

    let style = match feedback {
        OptionFeedback::Neutral if highlighted => Style::default().fg(accent).add_modifier(Modifier::BOLD),
        other => feedback_style(other),
    };

    let used = marker.chars().count() + body.chars().count();
    let gap = (inner_width as usize)
        .saturating_sub(used + LABEL_COLUMN)
        .max(1);

    Line::from(vec![
        Span::styled(marker, style),
        Span::styled(body, style),
        Span::raw(" ".repeat(gap)),
        Span::styled(label, style.add_modifier(Modifier::ITALIC)),
    ])
}

/// Text shown next to an option once a choice has been made.
pub fn feedback_label(feedback: OptionFeedback, chosen: bool) -> &'static str {
    match feedback {
        OptionFeedback::Correct => "Correct",
        OptionFeedback::WrongChoice if chosen => "Your choice",
        _ => "",
    }
}

pub fn feedback_style(feedback: OptionFeedback) -> Style {
    match feedback {
        OptionFeedback::Neutral => Style::default(),
        OptionFeedback::Correct => Style::default().fg(Color::Green),
        OptionFeedback::WrongChoice => Style::default().fg(Color::Red),
    }
}
