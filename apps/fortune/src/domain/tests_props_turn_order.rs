//! Property-based tests for turn rotation.

use proptest::prelude::*;

use crate::domain::test_state_helpers::{fixed_wheel, make_multiplayer, make_single};
use crate::domain::{test_gens, test_prelude, PlayerId};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: N advances over N players return to the starting player,
    /// visiting every slot in roster order on the way.
    #[test]
    fn prop_round_robin_cycle(players in test_gens::roster_size(), laps in 1usize..4) {
        let mut state = make_multiplayer("ROUND ROBIN", players, fixed_wheel(100));
        let start = state.current_player();
        for lap in 0..laps {
            for step in 1..=players {
                let next = state.advance_turn();
                prop_assert_eq!(next, PlayerId::new(step % players), "lap {}", lap);
            }
            prop_assert_eq!(state.current_player(), start);
        }
    }

    /// Property: the single-player pointer is constant.
    #[test]
    fn prop_fixed_pointer_constant(advances in 0usize..50) {
        let mut state = make_single("SOLO", fixed_wheel(100));
        for _ in 0..advances {
            state.advance_turn();
        }
        prop_assert_eq!(state.current_player(), PlayerId::new(0));
    }
}
