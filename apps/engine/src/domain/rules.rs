use super::state::Side;

/// Cards dealt to each seat at the start, and the refill target.
pub const HAND_SIZE: usize = 6;
/// Six ranks in four suits.
pub const ORDINARY_DECK_SIZE: usize = 24;
/// Ordinary deck plus two jokers.
pub const FULL_DECK_SIZE: usize = 26;

pub fn deck_size(include_jokers: bool) -> usize {
    if include_jokers {
        FULL_DECK_SIZE
    } else {
        ORDINARY_DECK_SIZE
    }
}

/// Whether `hand_size` cards per seat plus the trump can be dealt from the deck.
pub fn hand_size_fits(hand_size: usize, include_jokers: bool) -> bool {
    hand_size >= 1 && hand_size * 2 < deck_size(include_jokers)
}

/// Refill order after an exchange: the attacker draws first, then the defender.
pub fn refill_order(attacker: Side) -> [Side; 2] {
    [attacker, attacker.opponent()]
}
