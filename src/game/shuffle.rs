//! Shuffle planner
//!
//! Runs once per entry into `Shuffling`: draws a swap count from the
//! configured range, then that many independent uniform picks from the three
//! unordered place pairs. Consecutive duplicates are legal draws; a repeated
//! pair simply swaps the same two places back.

use rand::Rng;
use rand_pcg::Pcg32;

use super::action::Action;
use super::state::{GameState, PlaceId, Shell, ShellStatus, SwapPair};
use crate::config::Config;

/// The three unordered pairs over {a, b, c}
pub const SWAP_OPTIONS: [SwapPair; 3] = [
    (PlaceId::A, PlaceId::B),
    (PlaceId::B, PlaceId::C),
    (PlaceId::A, PlaceId::C),
];

/// Draw a randomized swap plan
pub fn plan(rng: &mut Pcg32, config: &Config) -> Vec<SwapPair> {
    let count = rng.random_range(config.swap_count.clone());
    (0..count)
        .map(|_| SWAP_OPTIONS[rng.random_range(0..SWAP_OPTIONS.len())])
        .collect()
}

/// Build the shuffling-entry action: close every shell and queue the plan
pub fn start_shuffle(state: &GameState, shuffles: Vec<SwapPair>) -> Action {
    let shells: Vec<Shell> = state
        .shells
        .iter()
        .map(|s| Shell {
            status: ShellStatus::Closed,
            ..s.clone()
        })
        .collect();

    log::info!("planned {} swaps", shuffles.len());
    Action::StartShuffle { shells, shuffles }
}
