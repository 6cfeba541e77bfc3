//! Candidate scoring for the computer opponent.
//!
//! Higher scores are better. Attack scoring prefers cheap, non-trump cards
//! that also add pressure by repeating a rank already on the table. Defence
//! scoring prefers the cheapest beater, holding trumps back while an ordinary
//! beater exists.

use crate::domain::cards_logic::{can_beat, is_trump, rank_value, MAX_RANK_VALUE};
use crate::domain::{Card, Table};

pub const ATTACK_VALUE_WEIGHT: i32 = 10;
pub const NON_TRUMP_BONUS: i32 = 15;
pub const TRUMP_PENALTY: i32 = 25;
pub const TABLE_MATCH_BONUS: i32 = 8;

pub const DEFENSE_VALUE_WEIGHT: i32 = 15;
pub const TRUMP_WASTE_PENALTY: i32 = 40;
pub const LAST_RESORT_TRUMP_BONUS: i32 = 10;
pub const HIGH_CARD_THRESHOLD: u8 = 10;
pub const HIGH_CARD_PENALTY: i32 = 5;
pub const SUIT_MATCH_BONUS: i32 = 12;

/// How a defender ranks its beaters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoringStrategy {
    /// Lowest value wins, nothing else considered.
    Minimal,
    /// Value plus trump conservation, high-card and suit-match adjustments.
    Strategic,
}

fn inverted_value(card: Card) -> i32 {
    i32::from(MAX_RANK_VALUE + 1 - rank_value(card.rank))
}

pub fn attack_score(card: Card, table: &Table, trump: Card) -> i32 {
    let mut score = inverted_value(card) * ATTACK_VALUE_WEIGHT;
    if is_trump(card, trump) {
        score -= TRUMP_PENALTY;
    } else {
        score += NON_TRUMP_BONUS;
    }
    if table.contains_rank(card.rank) {
        score += TABLE_MATCH_BONUS;
    }
    score
}

/// Facts about the defending hand that do not depend on the candidate.
#[derive(Debug, Clone, Copy)]
pub struct DefenseContext {
    pub attack: Card,
    pub trump: Card,
    /// Some non-trump card in hand beats the attack.
    pub ordinary_beater: bool,
}

impl DefenseContext {
    pub fn new(hand: &[Card], attack: Card, trump: Card) -> Self {
        let ordinary_beater = hand
            .iter()
            .any(|c| !is_trump(*c, trump) && can_beat(attack, *c, trump));
        Self {
            attack,
            trump,
            ordinary_beater,
        }
    }
}

pub fn defense_score(candidate: Card, ctx: &DefenseContext, strategy: ScoringStrategy) -> i32 {
    match strategy {
        ScoringStrategy::Minimal => -i32::from(rank_value(candidate.rank)),
        ScoringStrategy::Strategic => {
            let mut score = inverted_value(candidate) * DEFENSE_VALUE_WEIGHT;
            if is_trump(candidate, ctx.trump) {
                if ctx.ordinary_beater {
                    score -= TRUMP_WASTE_PENALTY;
                } else {
                    score += LAST_RESORT_TRUMP_BONUS;
                }
            }
            let value = rank_value(candidate.rank);
            if value > HIGH_CARD_THRESHOLD {
                score -= HIGH_CARD_PENALTY * i32::from(value - HIGH_CARD_THRESHOLD);
            }
            if candidate.suit == ctx.attack.suit {
                score += SUIT_MATCH_BONUS;
            }
            score
        }
    }
}
