use proptest::prelude::*;

use crate::domain::cards_logic::{can_attack_with, can_beat, is_trump, legal_defenses, rank_value};
use crate::domain::{test_gens, test_prelude, Card, Table};

/// Rebuild `table` with its slots pushed in `order`; indices past the last slot are skipped.
fn reordered(table: &Table, order: &[usize]) -> Table {
    let slots = table.slots();
    let mut out = Table::new();
    for &i in order.iter().filter(|&&i| i < slots.len()) {
        out.push_attack(slots[i].attack);
        if let Some(defense) = slots[i].defense() {
            out.beat_target(defense).unwrap();
        }
    }
    out
}

fn rank_on_table(card: Card, table: &Table) -> bool {
    table
        .slots()
        .iter()
        .flat_map(|slot| std::iter::once(slot.attack).chain(slot.defense()))
        .any(|c| c.rank == card.rank)
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: two ordinary cards never beat each other both ways.
    #[test]
    fn prop_beat_is_asymmetric(
        a in test_gens::trump_card(),
        b in test_gens::trump_card(),
        trump in test_gens::trump_card(),
    ) {
        prop_assert!(!(can_beat(a, b, trump) && can_beat(b, a, trump)),
            "{} and {} beat each other under {}", a, b, trump);
    }

    /// Property: nothing beats itself.
    #[test]
    fn prop_beat_is_irreflexive_for_ordinary_cards(
        a in test_gens::card(),
        trump in test_gens::trump_card(),
    ) {
        prop_assert_eq!(can_beat(a, a, trump), a.is_joker());
    }

    /// Property: a joker defence always beats; a joker attack only falls to a joker.
    #[test]
    fn prop_joker_rules(
        a in test_gens::card(),
        d in test_gens::card(),
        trump in test_gens::trump_card(),
    ) {
        if d.is_joker() {
            prop_assert!(can_beat(a, d, trump));
        } else if a.is_joker() {
            prop_assert!(!can_beat(a, d, trump));
        }
    }

    /// Property: a successful ordinary defence is either a trump over a
    /// non-trump, or the same suit with a strictly higher value.
    #[test]
    fn prop_ordinary_beat_oracle(
        a in test_gens::trump_card(),
        d in test_gens::trump_card(),
        trump in test_gens::trump_card(),
    ) {
        let oracle = (is_trump(d, trump) && !is_trump(a, trump))
            || (d.suit == a.suit && rank_value(d.rank) > rank_value(a.rank));
        prop_assert_eq!(can_beat(a, d, trump), oracle);
    }

    /// Property: legal defences are exactly the hand cards that beat the target.
    #[test]
    fn prop_legal_defenses_match_filter(pos in test_gens::defense_position()) {
        let target = pos.table.target_card().unwrap();
        let legal = legal_defenses(&pos.hand, &pos.table, pos.trump);
        for (i, c) in pos.hand.iter().enumerate() {
            prop_assert_eq!(legal.contains(&i), can_beat(target, *c, pos.trump));
        }
    }

    /// Property: attack legality depends only on which ranks are on the
    /// table, not on the order the slots were played in.
    #[test]
    fn prop_attack_legality_ignores_slot_order(
        pos in test_gens::attack_position(),
        order in Just(vec![0usize, 1, 2]).prop_shuffle(),
    ) {
        let shuffled = reordered(&pos.table, &order);
        prop_assert_eq!(shuffled.card_count(), pos.table.card_count());
        for card in &pos.hand {
            let expected = pos.table.is_empty() || rank_on_table(*card, &pos.table);
            prop_assert_eq!(can_attack_with(*card, &pos.table), expected, "{}", card);
            prop_assert_eq!(can_attack_with(*card, &shuffled), expected, "{}", card);
            prop_assert!(can_attack_with(*card, &Table::new()));
        }
    }
}
