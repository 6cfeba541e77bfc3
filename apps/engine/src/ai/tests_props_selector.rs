use proptest::prelude::*;

use super::scoring::{attack_score, defense_score, DefenseContext, ScoringStrategy};
use super::select_move;
use crate::domain::cards_logic::{can_attack_with, can_beat};
use crate::domain::{test_gens, test_prelude, Role};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: fanning out attack scoring never changes the chosen score.
    #[test]
    fn prop_parallel_attack_matches_serial_score(
        pos in test_gens::attack_position(),
        workers in 2usize..=6,
    ) {
        let serial = select_move(&pos.hand, &pos.table, pos.trump, Role::Attack, 1);
        let parallel = select_move(&pos.hand, &pos.table, pos.trump, Role::Attack, workers);
        prop_assert_eq!(serial.is_some(), parallel.is_some());
        if let (Some(s), Some(p)) = (serial, parallel) {
            prop_assert!(can_attack_with(pos.hand[p], &pos.table));
            prop_assert_eq!(
                attack_score(pos.hand[s], &pos.table, pos.trump),
                attack_score(pos.hand[p], &pos.table, pos.trump)
            );
        }
    }

    /// Property: the parallel defence reconciles to the serial strategic score.
    #[test]
    fn prop_parallel_defense_matches_serial_score(
        pos in test_gens::defense_position(),
        workers in 2usize..=6,
    ) {
        let serial = select_move(&pos.hand, &pos.table, pos.trump, Role::Defend, 1);
        let parallel = select_move(&pos.hand, &pos.table, pos.trump, Role::Defend, workers);
        prop_assert_eq!(serial.is_some(), parallel.is_some());
        if let (Some(s), Some(p)) = (serial, parallel) {
            let target = pos.table.target_card().unwrap();
            prop_assert!(can_beat(target, pos.hand[p], pos.trump));
            let ctx = DefenseContext::new(&pos.hand, target, pos.trump);
            prop_assert_eq!(
                defense_score(pos.hand[s], &ctx, ScoringStrategy::Strategic),
                defense_score(pos.hand[p], &ctx, ScoringStrategy::Strategic)
            );
        }
    }

    /// Property: no selection exactly when no hand card is legal.
    #[test]
    fn prop_none_iff_no_legal_defense(pos in test_gens::defense_position()) {
        let target = pos.table.target_card().unwrap();
        let any_legal = pos.hand.iter().any(|c| can_beat(target, *c, pos.trump));
        let chosen = select_move(&pos.hand, &pos.table, pos.trump, Role::Defend, 4);
        prop_assert_eq!(chosen.is_some(), any_legal);
    }
}
