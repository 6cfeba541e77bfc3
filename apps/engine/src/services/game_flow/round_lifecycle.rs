use tracing::{debug, info};

use super::GameFlow;
use crate::domain::dealing::{deal, full_deck};
use crate::domain::rules::refill_order;
use crate::domain::{Card, CardId, Deal, Deck, Phase, Side};
use crate::errors::domain::DomainError;

impl GameFlow {
    /// Shuffle, deal both hands and reveal the trump.
    pub(super) fn start_game(&mut self) -> Result<Phase, DomainError> {
        let seed = self.config.seed.unwrap_or_else(rand::random::<u64>);
        let deck = Deck::shuffled(self.config.include_jokers, seed);
        let dealt = deal(deck, self.config.hand_size)?;
        info!(
            seed,
            trump = %dealt.trump,
            jokers = self.config.include_jokers,
            ai = self.computer.name(),
            "game started"
        );
        self.install_deal(dealt);
        Ok(Phase::PlayerAttack)
    }

    pub(super) fn install_deal(&mut self, dealt: Deal) {
        self.player_hand = dealt.player;
        self.computer_hand = dealt.computer;
        self.trump = Some(dealt.trump);
        self.deck = dealt.deck;
        self.table = Default::default();
        self.discard.clear();
    }

    pub(super) fn require_trump(&self, ctx: &'static str) -> Result<Card, DomainError> {
        self.trump.ok_or_else(|| {
            DomainError::invariant(format!("trump must be set ({ctx})"))
        })
    }

    pub(super) fn hand(&self, side: Side) -> &[Card] {
        match side {
            Side::Player => &self.player_hand,
            Side::Computer => &self.computer_hand,
        }
    }

    fn hand_mut(&mut self, side: Side) -> &mut Vec<Card> {
        match side {
            Side::Player => &mut self.player_hand,
            Side::Computer => &mut self.computer_hand,
        }
    }

    /// The attacker stops: the table leaves play and both hands refill.
    pub(super) fn end_attack(&mut self, attacker: Side) {
        let cleared = self.table.take_all();
        debug!(?attacker, cards = cleared.len(), "table discarded");
        self.discard.extend(cleared);
        self.stats.discards += 1;
        self.refill(attacker);
    }

    /// The defender gives up: the table joins their hand and both hands refill.
    pub(super) fn take_table(&mut self, taker: Side) {
        let taken = self.table.take_all();
        debug!(?taker, cards = taken.len(), "table taken");
        self.hand_mut(taker).extend(taken);
        match taker {
            Side::Player => self.stats.player_takes += 1,
            Side::Computer => self.stats.computer_takes += 1,
        }
        self.refill(taker.opponent());
    }

    /// Draw one card at a time, attacker first, until both hands reach the
    /// hand size or the deck runs out.
    pub(super) fn refill(&mut self, attacker: Side) {
        let target = self.config.hand_size;
        loop {
            let mut drew = false;
            for side in refill_order(attacker) {
                if self.hand(side).len() >= target {
                    continue;
                }
                if let Some(card) = self.deck.draw() {
                    self.hand_mut(side).push(card);
                    drew = true;
                }
            }
            if !drew {
                break;
            }
        }
    }

    /// Every card of the deck is in exactly one place: draw pile, a hand,
    /// the table, the discard pile or the trump slot.
    pub fn check_conservation(&self) -> Result<(), DomainError> {
        if self.phase == Phase::StartGame {
            return Ok(());
        }
        let table_cards = self.table.cards();
        let mut ids: Vec<CardId> = self
            .deck
            .cards()
            .iter()
            .chain(&self.player_hand)
            .chain(&self.computer_hand)
            .chain(&table_cards)
            .chain(&self.discard)
            .chain(self.trump.iter())
            .map(|c| c.id)
            .collect();
        ids.sort();

        let expected: Vec<CardId> = full_deck(self.config.include_jokers)
            .iter()
            .map(|c| c.id)
            .collect();
        if ids != expected {
            return Err(DomainError::invariant(format!(
                "card conservation violated: {} cards tracked, {} expected",
                ids.len(),
                expected.len()
            )));
        }
        Ok(())
    }
}
