// Proptest generators for domain types.
// Positions are carved out of one shuffled deck so cards are unique by construction.

use proptest::prelude::*;

use super::dealing::full_deck;
use crate::domain::{Card, Table};

/// Any card of the full deck, jokers included.
pub fn card() -> impl Strategy<Value = Card> {
    let deck = full_deck(true);
    (0..deck.len()).prop_map(move |i| deck[i])
}

/// Any ordinary (non-joker) card; also every card that can serve as trump.
pub fn trump_card() -> impl Strategy<Value = Card> {
    let deck = full_deck(false);
    (0..deck.len()).prop_map(move |i| deck[i])
}

/// The full deck in a random order.
pub fn shuffled_deck() -> impl Strategy<Value = Vec<Card>> {
    Just(full_deck(true)).prop_shuffle()
}

/// A defending position: trump, a hand and a table whose last slot is an
/// unanswered attack. All cards are distinct.
#[derive(Debug, Clone)]
pub struct DefensePosition {
    pub trump: Card,
    pub hand: Vec<Card>,
    pub table: Table,
}

pub fn defense_position() -> impl Strategy<Value = DefensePosition> {
    (shuffled_deck(), 1usize..=8).prop_map(|(deck, hand_len)| {
        let trump_pos = deck.iter().position(|c| !c.is_joker()).unwrap_or(0);
        let trump = deck[trump_pos];
        let rest: Vec<Card> = deck
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != trump_pos)
            .map(|(_, c)| *c)
            .collect();
        let mut table = Table::new();
        table.push_attack(rest[0]);
        DefensePosition {
            trump,
            hand: rest[1..=hand_len].to_vec(),
            table,
        }
    })
}

/// An attacking position: a hand and a table of fully beaten slots.
#[derive(Debug, Clone)]
pub struct AttackPosition {
    pub trump: Card,
    pub hand: Vec<Card>,
    pub table: Table,
}

pub fn attack_position() -> impl Strategy<Value = AttackPosition> {
    (shuffled_deck(), 1usize..=8, 0usize..=3).prop_map(|(deck, hand_len, pairs)| {
        let trump_pos = deck.iter().position(|c| !c.is_joker()).unwrap_or(0);
        let trump = deck[trump_pos];
        let rest: Vec<Card> = deck
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != trump_pos)
            .map(|(_, c)| *c)
            .collect();
        let mut table = Table::new();
        for pair in rest[..pairs * 2].chunks(2) {
            table.push_attack(pair[0]);
            table.beat_target(pair[1]).ok();
        }
        AttackPosition {
            trump,
            hand: rest[pairs * 2..pairs * 2 + hand_len].to_vec(),
            table,
        }
    })
}
