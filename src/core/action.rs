//! # Actions
//!
//! Everything the user can do to a quiz becomes an `Action`.
//! Clicking an option? That's `Action::Choose('B')`.
//! Moving on? That's `Action::Advance`.
//!
//! The `update()` function takes the current session and an action, then
//! returns the next session. No side effects here beyond logging.
//!
//! ```text
//! Session + Action  →  update()  →  New Session
//! ```
//!
//! Every action is total: a precondition that doesn't hold (choosing twice,
//! advancing with nothing chosen, anything but restart after completion)
//! leaves the session untouched instead of failing.

use log::{debug, info, warn};

use crate::core::state::{AnswerRecord, Session};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Pick an option of the current question by id.
    Choose(char),
    /// Move to the next question, or to the summary after the last one.
    Advance,
    /// Throw away all progress and start again at question 1.
    Restart,
}

pub fn update(session: Session, action: Action) -> Session {
    debug!("Applying {:?} at index {}", action, session.index);
    match action {
        Action::Choose(option_id) => choose(session, option_id),
        Action::Advance => advance(session),
        Action::Restart => {
            info!("Restarting quiz (score was {})", session.score);
            Session::new(session.bank())
        }
    }
}

fn choose(mut session: Session, option_id: char) -> Session {
    if session.selection.is_some() {
        return session;
    }
    let Some(question) = session.current_question() else {
        return session;
    };
    if question.option(option_id).is_none() {
        warn!(
            "Ignoring choice '{}': question {} has no such option",
            option_id, question.id
        );
        return session;
    }

    let record = AnswerRecord {
        question_id: question.id,
        chosen: option_id,
        correct: question.correct,
    };
    if record.is_correct() {
        session.score += 1;
    }
    debug!(
        "Question {} answered '{}' (correct '{}'), score now {}",
        record.question_id, record.chosen, record.correct, session.score
    );

    session.selection = Some(option_id);
    session.explanation_visible = true;
    session.answers.push(record);
    session
}

fn advance(mut session: Session) -> Session {
    if session.completed || session.selection.is_none() {
        return session;
    }

    session.index += 1;
    session.selection = None;
    session.explanation_visible = false;

    if session.index >= session.total() {
        session.index = session.total();
        session.completed = true;
        info!(
            "Quiz completed: {}/{} correct",
            session.score,
            session.total()
        );
    }
    session
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::Phase;
    use crate::test_support::{TRUE_FALSE_BANK, answered, run};

    #[test]
    fn test_choose_correct_increments_score() {
        let session = update(Session::builtin(), Action::Choose('A'));
        assert_eq!(session.selection(), Some('A'));
        assert_eq!(session.score(), 1);
        assert!(session.explanation_visible());
        assert_eq!(
            session.answers(),
            &[AnswerRecord { question_id: 1, chosen: 'A', correct: 'A' }]
        );
    }

    #[test]
    fn test_choose_wrong_keeps_score() {
        let session = update(Session::builtin(), Action::Choose('D'));
        assert_eq!(session.selection(), Some('D'));
        assert_eq!(session.score(), 0);
        assert!(session.explanation_visible());
        assert_eq!(session.answers().len(), 1);
        assert!(!session.answers()[0].is_correct());
    }

    #[test]
    fn test_second_choose_is_noop() {
        let first = update(Session::builtin(), Action::Choose('B'));
        let second = update(first.clone(), Action::Choose('A'));
        assert_eq!(first, second);
    }

    #[test]
    fn test_choose_unknown_option_is_noop() {
        let session = update(Session::builtin(), Action::Choose('Z'));
        assert_eq!(session, Session::builtin());
    }

    #[test]
    fn test_advance_without_selection_is_noop() {
        let session = update(Session::builtin(), Action::Advance);
        assert_eq!(session, Session::builtin());
        assert_eq!(session.index(), 0);
    }

    #[test]
    fn test_advance_clears_selection_and_explanation() {
        let session = run(&[Action::Choose('A'), Action::Advance]);
        assert_eq!(session.index(), 1);
        assert_eq!(session.selection(), None);
        assert!(!session.explanation_visible());
        assert_eq!(session.score(), 1);
        assert_eq!(session.phase(), Phase::Answering);
    }

    #[test]
    fn test_advance_past_last_completes() {
        let session = answered(&['A', 'B', 'C', 'C']);
        assert!(session.is_last_question());
        let session = update(session, Action::Choose('B'));
        let session = update(session, Action::Advance);
        assert_eq!(session.phase(), Phase::Completed);
        assert_eq!(session.index(), session.total());
        assert_eq!(session.selection(), None);
    }

    #[test]
    fn test_completed_ignores_choose_and_advance() {
        let done = answered(&['A', 'B', 'C', 'C', 'B']);
        assert_eq!(update(done.clone(), Action::Choose('A')), done);
        assert_eq!(update(done.clone(), Action::Advance), done);
    }

    #[test]
    fn test_restart_resets_everything() {
        let done = answered(&['A', 'A', 'C', 'C', 'A']);
        let session = update(done, Action::Restart);
        assert_eq!(session, Session::builtin());
    }

    #[test]
    fn test_restart_mid_question_resets() {
        let session = run(&[Action::Choose('A'), Action::Advance, Action::Choose('C')]);
        let session = update(session, Action::Restart);
        assert_eq!(session, Session::builtin());
    }

    #[test]
    fn test_restart_before_any_answer() {
        let session = update(Session::builtin(), Action::Restart);
        assert_eq!(session.score(), 0);
        assert_eq!(session.index(), 0);
        assert!(session.answers().is_empty());
        assert_eq!(session, Session::builtin());
    }

    #[test]
    fn test_restart_keeps_bank() {
        let session = Session::new(TRUE_FALSE_BANK);
        let session = update(update(session, Action::Choose('T')), Action::Restart);
        assert_eq!(session, Session::new(TRUE_FALSE_BANK));
    }

    #[test]
    fn test_mixed_run_scores_three_of_five() {
        // Q1 right (A), Q2 wrong (A vs B), Q3 right, Q4 right, Q5 wrong
        let session = answered(&['A', 'A', 'C', 'C', 'A']);
        assert!(session.is_completed());
        assert_eq!(session.score(), 3);
        assert_eq!(session.star_rating(), 3);

        let review = session.review();
        assert_eq!(review.len(), 5);
        let pairs: Vec<(Option<char>, char)> =
            review.iter().map(|e| (e.chosen, e.correct)).collect();
        assert_eq!(
            pairs,
            vec![
                (Some('A'), 'A'),
                (Some('A'), 'B'),
                (Some('C'), 'C'),
                (Some('C'), 'C'),
                (Some('A'), 'B'),
            ]
        );
    }

    #[test]
    fn test_score_matches_history_at_every_step() {
        let script = [
            Action::Choose('B'),
            Action::Choose('A'),
            Action::Advance,
            Action::Advance,
            Action::Choose('B'),
            Action::Advance,
            Action::Choose('D'),
            Action::Advance,
            Action::Choose('C'),
            Action::Advance,
            Action::Choose('B'),
            Action::Advance,
            Action::Choose('A'),
            Action::Advance,
        ];
        let mut session = Session::builtin();
        for action in script {
            session = update(session, action);
            let correct = session.answers().iter().filter(|a| a.is_correct()).count();
            assert_eq!(session.score() as usize, correct);
            if session.selection().is_none() {
                assert!(!session.explanation_visible());
            }
        }
        assert!(session.is_completed());
    }
}
