//! RNG seed derivation utilities for deterministic batches of games.
//!
//! A simulation run has one base seed; each game and each AI seat within it
//! gets a derived seed so runs are reproducible game by game.

use super::state::Side;

/// Derive the shuffle seed for the `game_no`-th game of a run.
pub fn derive_game_seed(base_seed: u64, game_no: u32) -> u64 {
    // Different multiplier from the AI seed to keep the streams apart
    base_seed
        .wrapping_add((game_no as u64).wrapping_mul(1_000_003))
        .wrapping_add(2)
}

/// Derive the seed handed to the AI sitting in `side` for one game.
pub fn derive_ai_seed(game_seed: u64, side: Side) -> u64 {
    let seat = match side {
        Side::Player => 0u64,
        Side::Computer => 1u64,
    };
    game_seed.wrapping_add(seat.wrapping_mul(10_007)).wrapping_add(1)
}
