//! Shell Game - find the ball under the shell
//!
//! Core modules:
//! - `game`: Deterministic game core (state machine, shuffle plan, swap animation)
//! - `config`: Data-driven difficulty and animation tuning
//! - `input`: Pointer hit-testing against shell bounds
//! - `view`: Stage-appropriate status text for any renderer
//!
//! The crate is a library driven by a thin host: the host forwards a frame
//! counter to [`game::Session::tick`], translates pointer clicks through
//! [`input::hit_test`], and draws whatever [`game::Session::state`] holds.

pub mod config;
pub mod game;
pub mod input;
pub mod view;

pub use config::Config;
pub use game::{Action, GameError, GameState, Session, Stage, reduce};

/// Game layout constants
pub mod consts {
    /// Side length of a shell's square bounding box, in layout units
    pub const SHELL_SIZE: f32 = 50.0;

    /// Remaining distance below which a shell counts as arrived at its slot
    pub const ARRIVAL_EPSILON: f32 = 1.0;

    /// Fixed x coordinates of the three places, left to right
    pub const PLACE_XS: [f32; 3] = [200.0, 300.0, 400.0];
    /// Shared y coordinate of the three places
    pub const PLACE_Y: f32 = 100.0;

    /// Shell fill colors as packed 0xRRGGBB, indexed by shell id - 1
    pub const SHELL_COLORS: [u32; 3] = [0x72d586, 0x6674c8, 0x76cfd5];
}
