use quiz_tui::core::bank::{QUESTIONS, validate};
use quiz_tui::core::state::{OptionFeedback, Phase};
use quiz_tui::core::{Action, Session, update};
use quiz_tui::tui::{Flow, Intent, TuiEvent, TuiState, apply_intent, resolve_intent};

// ============================================================================
// Helper Functions
// ============================================================================

fn apply_all(session: Session, actions: &[Action]) -> Session {
    actions.iter().fold(session, |s, &a| update(s, a))
}

/// Choose then advance for each letter.
fn answer_all(choices: &[char]) -> Session {
    choices.iter().fold(Session::builtin(), |s, &c| {
        update(update(s, Action::Choose(c)), Action::Advance)
    })
}

fn type_keys(session: Session, tui: &mut TuiState, events: &[TuiEvent]) -> (Session, Flow) {
    let mut session = session;
    for event in events {
        let intent = resolve_intent(&session, tui.highlight, event);
        let (next, flow) = apply_intent(session, tui, intent);
        session = next;
        if flow == Flow::Quit {
            return (session, flow);
        }
    }
    (session, Flow::Continue)
}

// ============================================================================
// State machine scenarios
// ============================================================================

#[test]
fn test_builtin_bank_validates() {
    assert!(validate(QUESTIONS).is_ok());
}

#[test]
fn test_three_of_five_scenario() {
    let session = answer_all(&['A', 'A', 'C', 'C', 'A']);

    assert_eq!(session.phase(), Phase::Completed);
    assert_eq!(session.score(), 3);
    assert_eq!(session.total(), 5);
    assert_eq!(session.star_rating(), 3);

    let review = session.review();
    assert_eq!(review.len(), 5);
    assert_eq!(
        review.iter().filter(|entry| entry.is_correct()).count(),
        3
    );
    for (entry, record) in review.iter().zip(session.answers()) {
        assert_eq!(entry.question.id, record.question_id);
        assert_eq!(entry.chosen, Some(record.chosen));
        assert_eq!(entry.correct, record.correct);
    }
}

#[test]
fn test_immediate_restart() {
    let session = update(Session::builtin(), Action::Restart);
    assert_eq!(session.score(), 0);
    assert_eq!(session.index(), 0);
    assert!(session.answers().is_empty());
    assert_eq!(session, Session::builtin());
}

#[test]
fn test_choose_twice_is_idempotent() {
    let once = update(Session::builtin(), Action::Choose('C'));
    let twice = update(once.clone(), Action::Choose('A'));
    assert_eq!(once, twice);
    assert_eq!(twice.option_feedback('C'), OptionFeedback::WrongChoice);
    assert_eq!(twice.option_feedback('A'), OptionFeedback::Correct);
}

#[test]
fn test_advance_without_choice_keeps_index() {
    let session = apply_all(Session::builtin(), &[Action::Advance, Action::Advance]);
    assert_eq!(session.index(), 0);
    assert_eq!(session, Session::builtin());
}

#[test]
fn test_completed_only_restart_changes_state() {
    let done = answer_all(&['B', 'B', 'B', 'B', 'B']);
    assert_eq!(done.score(), 2);

    let still_done = apply_all(done.clone(), &[Action::Choose('A'), Action::Advance]);
    assert_eq!(still_done, done);

    let restarted = update(done, Action::Restart);
    assert_eq!(restarted, Session::builtin());
}

#[test]
fn test_score_tracks_history_after_every_action() {
    let script = [
        Action::Advance,
        Action::Choose('A'),
        Action::Choose('B'),
        Action::Advance,
        Action::Choose('D'),
        Action::Advance,
        Action::Restart,
        Action::Choose('D'),
        Action::Advance,
        Action::Choose('B'),
    ];
    let mut session = Session::builtin();
    for action in script {
        session = update(session, action);
        let correct = session
            .answers()
            .iter()
            .filter(|record| record.is_correct())
            .count();
        assert_eq!(session.score() as usize, correct);
    }
    assert_eq!(session.index(), 1);
    assert_eq!(session.score(), 1);
}

// ============================================================================
// Keyboard-driven scenarios
// ============================================================================

#[test]
fn test_keyboard_play_through_and_try_again() {
    let mut tui = TuiState::new();
    let keys = [
        TuiEvent::InputChar('1'),
        TuiEvent::Submit,
        TuiEvent::InputChar('a'),
        TuiEvent::Submit,
        TuiEvent::InputChar('c'),
        TuiEvent::Submit,
        TuiEvent::InputChar('c'),
        TuiEvent::Submit,
        TuiEvent::InputChar('a'),
        TuiEvent::Submit,
    ];
    let (session, flow) = type_keys(Session::builtin(), &mut tui, &keys);
    assert_eq!(flow, Flow::Continue);
    assert!(session.is_completed());
    assert_eq!(session.score(), 3);

    let (session, _) = type_keys(session, &mut tui, &[TuiEvent::InputChar('r')]);
    assert_eq!(session, Session::builtin());
}

#[test]
fn test_escape_quits_mid_quiz() {
    let mut tui = TuiState::new();
    let (session, flow) = type_keys(
        Session::builtin(),
        &mut tui,
        &[TuiEvent::InputChar('b'), TuiEvent::Escape, TuiEvent::Submit],
    );
    assert_eq!(flow, Flow::Quit);
    // Submit after Escape never ran
    assert_eq!(session.index(), 0);
    assert_eq!(session.selection(), Some('B'));
}

#[test]
fn test_next_key_disabled_until_choice() {
    let session = Session::builtin();
    assert_eq!(
        resolve_intent(&session, 0, &TuiEvent::InputChar('n')),
        Intent::Ignore
    );
}
