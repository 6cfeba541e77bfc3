//! Deck construction, seeded shuffling and the opening deal.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::cards_types::{Card, Rank, Suit};
use super::rules::deck_size;
use crate::errors::domain::{DomainError, ValidationKind};

/// Generate the deck in canonical order: ordinary suits by rank, then jokers.
pub fn full_deck(include_jokers: bool) -> Vec<Card> {
    let mut deck = Vec::with_capacity(deck_size(include_jokers));
    for suit in Suit::ORDINARY {
        for rank in Rank::ORDINARY {
            deck.extend(Card::new(suit, rank));
        }
    }
    if include_jokers {
        for colour in Suit::JOKERS {
            deck.extend(Card::new(colour, Rank::Joker));
        }
    }
    deck
}

/// Draw pile. The top of the pile is the end of the vector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Unshuffled deck in canonical order.
    pub fn new(include_jokers: bool) -> Self {
        Self {
            cards: full_deck(include_jokers),
        }
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Canonical deck shuffled deterministically from `seed`.
    pub fn shuffled(include_jokers: bool, seed: u64) -> Self {
        let mut deck = Self::new(include_jokers);
        deck.shuffle(seed);
        deck
    }

    pub fn shuffle(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    /// Remove the top card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Remove the trump indicator: the first non-joker scanning up from the
    /// bottom of the pile.
    pub fn take_trump(&mut self) -> Option<Card> {
        let pos = self.cards.iter().position(|c| !c.is_joker())?;
        Some(self.cards.remove(pos))
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

/// Opening position: both hands, the trump and the remaining draw pile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deal {
    pub player: Vec<Card>,
    pub computer: Vec<Card>,
    pub trump: Card,
    pub deck: Deck,
}

impl Deal {
    /// A hand-arranged position. Every card of the deck not named in the
    /// hands or as trump goes to the draw pile, shuffled from `seed`.
    pub fn arranged(
        player: Vec<Card>,
        computer: Vec<Card>,
        trump: Card,
        include_jokers: bool,
        seed: u64,
    ) -> Result<Deal, DomainError> {
        if trump.is_joker() {
            return Err(DomainError::validation(
                ValidationKind::InvalidDeal,
                "a joker cannot be the trump card",
            ));
        }
        let mut named: Vec<Card> = player.iter().chain(&computer).copied().collect();
        named.push(trump);
        named.sort();
        if named.windows(2).any(|w| w[0] == w[1]) {
            return Err(DomainError::validation(
                ValidationKind::InvalidDeal,
                "a card appears more than once in the deal",
            ));
        }
        if !include_jokers && named.iter().any(|c| c.is_joker()) {
            return Err(DomainError::validation(
                ValidationKind::InvalidDeal,
                "jokers named in a deal without jokers",
            ));
        }
        let rest: Vec<Card> = full_deck(include_jokers)
            .into_iter()
            .filter(|c| named.binary_search(c).is_err())
            .collect();
        let mut deck = Deck::from_cards(rest);
        deck.shuffle(seed);
        Ok(Deal {
            player,
            computer,
            trump,
            deck,
        })
    }
}

/// Deal `hand_size` cards to each seat, alternating from the top of the
/// pile with the player first, then reveal the trump from the bottom.
pub fn deal(mut deck: Deck, hand_size: usize) -> Result<Deal, DomainError> {
    if deck.remaining() < hand_size * 2 + 1 {
        return Err(DomainError::validation(
            ValidationKind::InvalidDeal,
            format!(
                "cannot deal {hand_size} cards per seat from {} cards",
                deck.remaining()
            ),
        ));
    }
    let mut player = Vec::with_capacity(hand_size);
    let mut computer = Vec::with_capacity(hand_size);
    for _ in 0..hand_size {
        player.extend(deck.draw());
        computer.extend(deck.draw());
    }
    let trump = deck.take_trump().ok_or_else(|| {
        DomainError::validation(ValidationKind::InvalidDeal, "no card can serve as trump")
    })?;
    Ok(Deal {
        player,
        computer,
        trump,
        deck,
    })
}
