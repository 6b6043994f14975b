use crate::domain::rules::MAX_PLAYERS;
use crate::domain::test_state_helpers::{fixed_wheel, make_multiplayer, make_single};
use crate::domain::{GameState, PlayerId, SecretPhrase, TurnOrder};
use crate::errors::domain::GameError;

fn phrase() -> SecretPhrase {
    SecretPhrase::new("WHEEL").unwrap()
}

#[test]
fn rotating_order_wraps_to_first_slot() {
    let mut state = make_multiplayer("HELLO", 3, fixed_wheel(500));
    assert_eq!(state.current_player(), PlayerId::new(0));
    assert_eq!(state.advance_turn(), PlayerId::new(1));
    assert_eq!(state.advance_turn(), PlayerId::new(2));
    assert_eq!(state.advance_turn(), PlayerId::new(0));
}

#[test]
fn fixed_order_never_moves() {
    let mut state = make_single("HELLO", fixed_wheel(500));
    assert!(state.is_single_player());
    assert_eq!(state.turn_order(), TurnOrder::Fixed);
    for _ in 0..5 {
        assert_eq!(state.advance_turn(), PlayerId::new(0));
    }
}

#[test]
fn roster_above_five_is_rejected() {
    let names = (0..=MAX_PLAYERS).map(|i| format!("N{i}"));
    let err = GameState::multiplayer(phrase(), fixed_wheel(1), names).unwrap_err();
    assert_eq!(
        err,
        GameError::InvalidRosterSize {
            actual: 6,
            min: 1,
            max: 5
        }
    );
}

#[test]
fn empty_roster_is_rejected() {
    let err = GameState::multiplayer(phrase(), fixed_wheel(1), Vec::<String>::new()).unwrap_err();
    assert!(matches!(
        err,
        GameError::InvalidRosterSize { actual: 0, .. }
    ));
}

#[test]
fn five_players_are_accepted() {
    let state = GameState::multiplayer(phrase(), fixed_wheel(1), ["A", "B", "C", "D", "E"]).unwrap();
    assert_eq!(state.player_count(), 5);
    assert_eq!(state.turn_order(), TurnOrder::Rotating { roster_size: 5 });
}

#[test]
fn scoring_and_guessing_never_move_the_turn() {
    let mut state = make_multiplayer("HELLO", 2, fixed_wheel(500));
    let before = state.current_player();
    state.spin_wheel();
    state.reveal('L');
    state.record_guess('L');
    state.adjust_score(before, 1000).unwrap();
    assert_eq!(state.current_player(), before);
}
