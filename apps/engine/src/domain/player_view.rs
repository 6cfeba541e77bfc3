//! What each seat, and the renderer, can see of a game in progress.

use serde::Serialize;

use super::cards_logic::{legal_attacks, legal_defenses};
use super::cards_types::Card;
use super::outcome::Outcome;
use super::state::Phase;
use super::table::Table;

/// Information visible to one seat at a decision point.
///
/// This is the interface between the turn state machine and AI players: it
/// carries the seat's own hand, the shared table and the public facts about
/// the opponent and the draw pile.
///
/// # For AI Developers
///
/// Use [`legal_attacks()`](Self::legal_attacks) and
/// [`legal_defenses()`](Self::legal_defenses) instead of re-implementing the
/// rules. Any index you return must come from one of those lists.
#[derive(Debug, Clone, Copy)]
pub struct SeatView<'a> {
    pub hand: &'a [Card],
    pub table: &'a Table,
    pub trump: Card,
    pub deck_remaining: usize,
    pub opponent_hand_size: usize,
}

impl<'a> SeatView<'a> {
    pub fn legal_attacks(&self) -> Vec<usize> {
        legal_attacks(self.hand, self.table)
    }

    pub fn legal_defenses(&self) -> Vec<usize> {
        legal_defenses(self.hand, self.table, self.trump)
    }
}

/// A card as the renderer should draw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub card: Card,
    pub face_up: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlotView {
    pub attack: Card,
    pub defense: Option<Card>,
}

/// Read-only snapshot for presentation. The player's hand is face up, the
/// computer's face down; table cards and the trump are always face up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderView {
    pub phase: Phase,
    pub player_hand: Vec<CardView>,
    pub computer_hand: Vec<CardView>,
    pub table: Vec<SlotView>,
    pub trump: Option<Card>,
    pub deck_remaining: usize,
    pub discard_size: usize,
    pub outcome: Outcome,
}

impl RenderView {
    pub fn hand_views(hand: &[Card], face_up: bool) -> Vec<CardView> {
        hand.iter().map(|&card| CardView { card, face_up }).collect()
    }

    pub fn slot_views(table: &Table) -> Vec<SlotView> {
        table
            .slots()
            .iter()
            .map(|s| SlotView {
                attack: s.attack,
                defense: s.defense(),
            })
            .collect()
    }
}
