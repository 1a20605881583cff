//! Deterministic game core
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Discrete ticks only (one interpolation step per frame counter value)
//! - Seeded RNG only
//! - Stable iteration order (shells sorted by id)
//! - No rendering or platform dependencies

pub mod action;
pub mod animate;
pub mod session;
pub mod shuffle;
pub mod state;
pub mod swap;

pub use action::{Action, GameError, reduce};
pub use animate::{move_patch, shell_step};
pub use session::Session;
pub use shuffle::SWAP_OPTIONS;
pub use state::{
    Ball, GameState, Place, PlaceId, Shell, ShellStatus, ShuffleState, ShuffleStatus, Stage,
    SwapPair,
};
pub use swap::begin_swap;
