//! The shared battlefield: an ordered list of attack slots.

use super::cards_types::{Card, Rank};
use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    Unanswered,
    Beaten { by: Card },
}

/// One attack card and, once answered, the card that beat it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSlot {
    pub attack: Card,
    pub state: SlotState,
}

impl TableSlot {
    pub fn defense(&self) -> Option<Card> {
        match self.state {
            SlotState::Unanswered => None,
            SlotState::Beaten { by } => Some(by),
        }
    }

    pub fn is_beaten(&self) -> bool {
        matches!(self.state, SlotState::Beaten { .. })
    }
}

/// Cards in play during one exchange.
///
/// Only the most recently pushed slot can be unanswered; every earlier slot
/// has been beaten.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    slots: Vec<TableSlot>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[TableSlot] {
        &self.slots
    }

    /// Number of cards on the table, attacks and defences together.
    pub fn card_count(&self) -> usize {
        self.slots
            .iter()
            .map(|s| if s.is_beaten() { 2 } else { 1 })
            .sum()
    }

    pub fn push_attack(&mut self, card: Card) {
        self.slots.push(TableSlot {
            attack: card,
            state: SlotState::Unanswered,
        });
    }

    /// The slot a defender must answer: the last one, if still unanswered.
    pub fn target(&self) -> Option<&TableSlot> {
        self.slots.last().filter(|s| !s.is_beaten())
    }

    pub fn target_card(&self) -> Option<Card> {
        self.target().map(|s| s.attack)
    }

    /// Record `card` as the defence of the current target.
    pub fn beat_target(&mut self, card: Card) -> Result<(), DomainError> {
        match self.slots.last_mut() {
            Some(slot) if !slot.is_beaten() => {
                slot.state = SlotState::Beaten { by: card };
                Ok(())
            }
            _ => Err(DomainError::validation(
                ValidationKind::NoTarget,
                "no unanswered attack on the table",
            )),
        }
    }

    /// Whether any card on the table, attack or defence, has `rank`.
    pub fn contains_rank(&self, rank: Rank) -> bool {
        self.slots
            .iter()
            .any(|s| s.attack.rank == rank || s.defense().is_some_and(|d| d.rank == rank))
    }

    pub fn cards(&self) -> Vec<Card> {
        let mut out = Vec::with_capacity(self.card_count());
        for slot in &self.slots {
            out.push(slot.attack);
            if let Some(d) = slot.defense() {
                out.push(d);
            }
        }
        out
    }

    /// Remove every card, leaving the table empty.
    pub fn take_all(&mut self) -> Vec<Card> {
        let cards = self.cards();
        self.slots.clear();
        cards
    }
}
