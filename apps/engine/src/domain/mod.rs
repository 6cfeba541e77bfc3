//! Domain layer: pure game logic types and helpers.

pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod outcome;
pub mod player_view;
pub mod rules;
pub mod seed_derivation;
pub mod state;
pub mod table;

#[cfg(test)]
pub(crate) mod test_gens;
#[cfg(test)]
pub(crate) mod test_prelude;
#[cfg(test)]
mod tests_props_beats;
#[cfg(test)]
mod tests_props_dealing;

// Re-exports for ergonomics
pub use cards_logic::{
    can_attack_with, can_beat, is_trump, legal_attacks, legal_defenses, rank_value,
};
pub use cards_parsing::try_parse_cards;
pub use cards_types::{Card, CardId, Rank, Suit};
pub use dealing::{deal, full_deck, Deal, Deck};
pub use outcome::{is_over, winner, Outcome};
pub use player_view::{CardView, RenderView, SeatView, SlotView};
pub use rules::HAND_SIZE;
pub use seed_derivation::{derive_ai_seed, derive_game_seed};
pub use state::{Phase, Role, Side};
pub use table::{SlotState, Table, TableSlot};
