//! Card game logic: rank values, trump membership, beat and attack legality

use super::cards_types::{Card, Rank};
use super::table::Table;

/// Highest value any card can have (jokers).
pub const MAX_RANK_VALUE: u8 = 15;

pub fn rank_value(rank: Rank) -> u8 {
    match rank {
        Rank::Two => 2,
        Rank::Ten => 10,
        Rank::Jack => 11,
        Rank::Queen => 12,
        Rank::King => 13,
        Rank::Ace => 14,
        Rank::Joker => MAX_RANK_VALUE,
    }
}

/// True when `card` belongs to the trump suit. Jokers never do.
pub fn is_trump(card: Card, trump: Card) -> bool {
    !card.is_joker() && card.suit == trump.suit
}

/// Whether `defend` beats `attack` under `trump`.
///
/// A joker beats anything; nothing but a joker beats a joker. A trump beats
/// any non-trump, and a higher trump beats a lower one. Otherwise the defence
/// must follow the attack's suit with a higher value.
pub fn can_beat(attack: Card, defend: Card, trump: Card) -> bool {
    if defend.is_joker() {
        return true;
    }
    if attack.is_joker() {
        return false;
    }
    let attack_trump = is_trump(attack, trump);
    let defend_trump = is_trump(defend, trump);
    if defend_trump && !attack_trump {
        return true;
    }
    if attack_trump && !defend_trump {
        return false;
    }
    defend.suit == attack.suit && rank_value(defend.rank) > rank_value(attack.rank)
}

/// Any card may open an empty table; afterwards the rank must already be on it.
pub fn can_attack_with(card: Card, table: &Table) -> bool {
    table.is_empty() || table.contains_rank(card.rank)
}

/// Hand indices that are legal attacks against `table`.
pub fn legal_attacks(hand: &[Card], table: &Table) -> Vec<usize> {
    hand.iter()
        .enumerate()
        .filter(|(_, c)| can_attack_with(**c, table))
        .map(|(i, _)| i)
        .collect()
}

/// Hand indices that beat the current target. Empty when nothing is unanswered.
pub fn legal_defenses(hand: &[Card], table: &Table, trump: Card) -> Vec<usize> {
    let Some(target) = table.target_card() else {
        return Vec::new();
    };
    hand.iter()
        .enumerate()
        .filter(|(_, c)| can_beat(target, **c, trump))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cards_parsing::try_parse_cards;
    use crate::domain::dealing::full_deck;

    fn card(token: &str) -> Card {
        token.parse().unwrap()
    }

    #[test]
    fn values_are_ordered_two_to_joker() {
        let values: Vec<u8> = [
            Rank::Two,
            Rank::Ten,
            Rank::Jack,
            Rank::Queen,
            Rank::King,
            Rank::Ace,
            Rank::Joker,
        ]
        .into_iter()
        .map(rank_value)
        .collect();
        assert_eq!(values, vec![2, 10, 11, 12, 13, 14, 15]);
    }

    #[test]
    fn test_can_beat_logic() {
        let trump = card("AS");

        // same suit, higher value
        assert!(can_beat(card("TH"), card("QH"), trump));
        assert!(!can_beat(card("QH"), card("TH"), trump));
        assert!(!can_beat(card("QH"), card("QH"), trump));

        // off-suit non-trump never beats
        assert!(!can_beat(card("2H"), card("AD"), trump));

        // trump over non-trump, even a low one
        assert!(can_beat(card("AH"), card("2S"), trump));
        assert!(!can_beat(card("2S"), card("AH"), trump));

        // trump against trump compares values
        assert!(can_beat(card("2S"), card("QS"), trump));
        assert!(!can_beat(card("KS"), card("QS"), trump));
    }

    #[test]
    fn jokers_beat_everything_and_only_jokers_beat_them() {
        let trump = card("AC");
        let red = card("JR");
        let black = card("JB");

        for tok in ["2S", "AC", "KH", "TD"] {
            assert!(can_beat(card(tok), red, trump));
            assert!(!can_beat(red, card(tok), trump));
        }
        assert!(can_beat(red, black, trump));
        assert!(can_beat(black, red, trump));
    }

    #[test]
    fn beat_relation_holds_for_every_trump_attack_defend_triple() {
        let mut checked = 0;
        for trump in full_deck(false) {
            for attack in full_deck(true) {
                for defend in full_deck(true) {
                    let beats = can_beat(attack, defend, trump);
                    let ordinary = !attack.is_joker() && !defend.is_joker();
                    let attack_trump = is_trump(attack, trump);
                    let defend_trump = is_trump(defend, trump);

                    if defend.is_joker() {
                        assert!(beats, "{defend} must beat {attack} under {trump}");
                    }
                    if ordinary
                        && !defend_trump
                        && defend.suit == attack.suit
                        && rank_value(defend.rank) <= rank_value(attack.rank)
                    {
                        assert!(!beats, "{defend} must not beat {attack} under {trump}");
                    }
                    if ordinary && !attack_trump && defend_trump {
                        assert!(beats, "trump {defend} must beat {attack} under {trump}");
                    }
                    if ordinary && !attack_trump && !defend_trump && attack.suit != defend.suit {
                        assert!(!beats, "{defend} must not beat {attack} under {trump}");
                        assert!(!can_beat(defend, attack, trump));
                    }
                    checked += 1;
                }
            }
        }
        assert_eq!(checked, 24 * 26 * 26);
    }

    #[test]
    fn jokers_are_never_trump() {
        assert!(!is_trump(card("JR"), card("2S")));
        assert!(is_trump(card("TS"), card("2S")));
        assert!(!is_trump(card("TH"), card("2S")));
    }

    #[test]
    fn attack_legality_follows_table_ranks() {
        let mut table = Table::new();
        assert!(can_attack_with(card("2H"), &table));

        table.push_attack(card("QH"));
        assert!(can_attack_with(card("QD"), &table));
        assert!(!can_attack_with(card("KD"), &table));

        table.beat_target(card("KH")).unwrap();
        assert!(can_attack_with(card("KD"), &table));
    }

    #[test]
    fn legal_index_sets() {
        let hand = try_parse_cards(["2D", "QD", "AH", "JR"]).unwrap();
        let trump = card("TS");
        let mut table = Table::new();

        assert_eq!(legal_attacks(&hand, &table), vec![0, 1, 2, 3]);
        assert!(legal_defenses(&hand, &table, trump).is_empty());

        table.push_attack(card("TD"));
        assert_eq!(legal_attacks(&hand, &table), Vec::<usize>::new());
        assert_eq!(legal_defenses(&hand, &table, trump), vec![1, 3]);
    }
}
