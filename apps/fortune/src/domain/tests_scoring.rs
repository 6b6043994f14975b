use crate::domain::test_state_helpers::{fixed_wheel, make_multiplayer, make_single};
use crate::domain::PlayerId;
use crate::errors::domain::GameError;

#[test]
fn scores_start_at_zero() {
    let state = make_multiplayer("HELLO", 3, fixed_wheel(500));
    assert!(state.players().iter().all(|p| p.score() == 0));
}

#[test]
fn adjust_score_adds_delta() {
    let mut state = make_multiplayer("HELLO", 2, fixed_wheel(500));
    let p1 = PlayerId::new(1);
    assert_eq!(state.adjust_score(p1, 500), Ok(500));
    assert_eq!(state.adjust_score(p1, 1000), Ok(1500));
    assert_eq!(state.score_of(p1), Ok(1500));
    assert_eq!(state.score_of(PlayerId::new(0)), Ok(0));
}

#[test]
fn record_score_overwrites_and_returns_immediately() {
    let mut state = make_multiplayer("HELLO", 2, fixed_wheel(500));
    let p0 = PlayerId::new(0);
    assert_eq!(state.record_score(p0, 42), Ok(()));
    assert_eq!(state.score_of(p0), Ok(42));
}

#[test]
fn unknown_player_is_rejected() {
    let mut state = make_multiplayer("HELLO", 2, fixed_wheel(500));
    let ghost = PlayerId::new(2);
    assert_eq!(
        state.record_score(ghost, 1),
        Err(GameError::UnknownPlayer(ghost))
    );
    assert_eq!(
        state.adjust_score(ghost, 1),
        Err(GameError::UnknownPlayer(ghost))
    );
    assert_eq!(state.bankrupt(ghost), Err(GameError::UnknownPlayer(ghost)));
}

#[test]
fn bankrupt_resets_to_exactly_zero() {
    let mut state = make_single("HELLO", fixed_wheel(500));
    let solo = state.current_player();
    state.adjust_score(solo, 2750).unwrap();
    state.bankrupt(solo).unwrap();
    assert_eq!(state.score_of(solo), Ok(0));
    state.bankrupt(solo).unwrap();
    assert_eq!(state.score_of(solo), Ok(0));
}

#[test]
fn bankrupt_does_not_move_the_turn() {
    let mut state = make_multiplayer("HELLO", 3, fixed_wheel(500));
    state.bankrupt(PlayerId::new(0)).unwrap();
    assert_eq!(state.current_player(), PlayerId::new(0));
}

#[test]
fn record_guess_is_permissive() {
    let mut state = make_single("HELLO", fixed_wheel(500));
    state.record_guess('L');
    state.record_guess('L');
    assert_eq!(state.guessed_letters(), &['L', 'L']);
}

#[test]
fn has_guessed_is_accent_insensitive() {
    let mut state = make_single("ŘEKA", fixed_wheel(500));
    state.record_guess('R');
    assert!(state.has_guessed('Ř'));
    assert!(state.has_guessed('r'));
    assert!(!state.has_guessed('E'));
}

#[test]
fn standings_sort_by_score_and_keep_roster_order_on_ties() {
    let mut state = make_multiplayer("HELLO", 3, fixed_wheel(500));
    state.adjust_score(PlayerId::new(1), 100).unwrap();
    state.adjust_score(PlayerId::new(2), 100).unwrap();
    let order: Vec<usize> = state.standings().iter().map(|r| r.id().slot()).collect();
    assert_eq!(order, vec![1, 2, 0]);
    assert_eq!(state.winners(), vec![PlayerId::new(1), PlayerId::new(2)]);
}

#[test]
fn spinning_a_single_segment_wheel_is_deterministic() {
    let mut state = make_single("HELLO", fixed_wheel(650));
    for _ in 0..10 {
        assert_eq!(state.spin_wheel().multiplier(), 650);
    }
}
