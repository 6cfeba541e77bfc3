use proptest::prelude::*;

use crate::domain::dealing::{deal, full_deck, Deck};
use crate::domain::test_prelude;
use crate::domain::Card;

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: dealing neither creates nor loses cards, for any seed.
    #[test]
    fn prop_deal_conserves_the_deck(
        seed in any::<u64>(),
        jokers in any::<bool>(),
        hand_size in 1usize..=8,
    ) {
        let deal = deal(Deck::shuffled(jokers, seed), hand_size).unwrap();
        prop_assert_eq!(deal.player.len(), hand_size);
        prop_assert_eq!(deal.computer.len(), hand_size);
        prop_assert!(!deal.trump.is_joker());

        let mut all: Vec<Card> = deal.player.clone();
        all.extend(&deal.computer);
        all.extend(deal.deck.cards());
        all.push(deal.trump);
        all.sort();
        prop_assert_eq!(all, full_deck(jokers));
    }

    /// Property: the same seed always produces the same deal.
    #[test]
    fn prop_deal_is_deterministic(seed in any::<u64>()) {
        let a = deal(Deck::shuffled(true, seed), 6).unwrap();
        let b = deal(Deck::shuffled(true, seed), 6).unwrap();
        prop_assert_eq!(a, b);
    }
}
