//! `select_move`: the one entry point for computer move selection.
//!
//! Small hands and `concurrency <= 1` are scored with a single linear scan.
//! Otherwise attacks are scored over contiguous hand partitions on the rayon
//! pool, and defences run the minimal and strategic scorers side by side.
//! Every path only reads the hand and table; the caller mutates afterwards.

use std::ops::Range;

use rayon::prelude::*;
use tracing::trace;

use super::scoring::{attack_score, defense_score, DefenseContext, ScoringStrategy};
use crate::domain::cards_logic::{can_attack_with, can_beat, rank_value};
use crate::domain::{Card, Role, Table};

/// Hands this small are always scored serially.
pub const SERIAL_HAND_THRESHOLD: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Candidate {
    index: usize,
    score: i32,
    value: u8,
}

impl Candidate {
    fn new(index: usize, card: Card, score: i32) -> Self {
        Self {
            index,
            score,
            value: rank_value(card.rank),
        }
    }

    /// Higher score, then lower value, then lower index.
    fn beats(&self, other: &Candidate) -> bool {
        (other.score, self.value, self.index) < (self.score, other.value, other.index)
    }
}

fn keep_better(best: Option<Candidate>, next: Candidate) -> Option<Candidate> {
    match best {
        Some(b) if !next.beats(&b) => Some(b),
        _ => Some(next),
    }
}

/// Pick a hand index for `role`, or `None` when no card is legal.
pub fn select_move(
    hand: &[Card],
    table: &Table,
    trump: Card,
    role: Role,
    concurrency: usize,
) -> Option<usize> {
    let parallel = concurrency > 1 && hand.len() > SERIAL_HAND_THRESHOLD;
    let chosen = match (role, parallel) {
        (Role::Attack, false) => best_attack(hand, 0..hand.len(), table, trump),
        (Role::Attack, true) => parallel_attack(hand, table, trump, concurrency),
        (Role::Defend, false) => best_defense(hand, table, trump, ScoringStrategy::Strategic),
        (Role::Defend, true) => parallel_defense(hand, table, trump),
    };
    trace!(?role, concurrency, parallel, chosen = ?chosen.map(|c| c.index), "move selected");
    chosen.map(|c| c.index)
}

fn best_attack(
    hand: &[Card],
    range: Range<usize>,
    table: &Table,
    trump: Card,
) -> Option<Candidate> {
    hand[range.clone()]
        .iter()
        .zip(range)
        .filter(|(card, _)| can_attack_with(**card, table))
        .map(|(card, i)| Candidate::new(i, *card, attack_score(*card, table, trump)))
        .fold(None, keep_better)
}

fn best_defense(
    hand: &[Card],
    table: &Table,
    trump: Card,
    strategy: ScoringStrategy,
) -> Option<Candidate> {
    let attack = table.target_card()?;
    let ctx = DefenseContext::new(hand, attack, trump);
    hand.iter()
        .enumerate()
        .filter(|(_, card)| can_beat(attack, **card, trump))
        .map(|(i, card)| Candidate::new(i, *card, defense_score(*card, &ctx, strategy)))
        .fold(None, keep_better)
}

/// Split `0..len` into at most `parts` contiguous, non-empty ranges.
pub(crate) fn partitions(len: usize, parts: usize) -> Vec<Range<usize>> {
    let parts = parts.clamp(1, len.max(1));
    let base = len / parts;
    let extra = len % parts;
    let mut out = Vec::with_capacity(parts);
    let mut start = 0;
    for p in 0..parts {
        let size = base + usize::from(p < extra);
        out.push(start..start + size);
        start += size;
    }
    out
}

fn parallel_attack(
    hand: &[Card],
    table: &Table,
    trump: Card,
    concurrency: usize,
) -> Option<Candidate> {
    partitions(hand.len(), concurrency)
        .into_par_iter()
        .map(|range| best_attack(hand, range, table, trump))
        .collect::<Vec<_>>()
        .into_iter()
        .flatten()
        .fold(None, keep_better)
}

fn parallel_defense(hand: &[Card], table: &Table, trump: Card) -> Option<Candidate> {
    let attack = table.target_card()?;
    let (minimal, strategic) = rayon::join(
        || best_defense(hand, table, trump, ScoringStrategy::Minimal),
        || best_defense(hand, table, trump, ScoringStrategy::Strategic),
    );
    // Re-score both winners on the strategic scale; ties keep the strategic pick.
    let ctx = DefenseContext::new(hand, attack, trump);
    let rescore = |c: Candidate| Candidate {
        score: defense_score(hand[c.index], &ctx, ScoringStrategy::Strategic),
        ..c
    };
    match (minimal.map(rescore), strategic.map(rescore)) {
        (Some(m), Some(s)) if m.score > s.score => Some(m),
        (_, Some(s)) => Some(s),
        (m, None) => m,
    }
}
