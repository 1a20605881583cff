//! Game state and core types
//!
//! Everything a renderer or the session loop needs to observe lives here.
//! The state is replaced wholesale on every transition (see `action`), never
//! mutated in place, so any snapshot a collaborator holds stays internally
//! consistent.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{PLACE_XS, PLACE_Y, SHELL_COLORS};

/// One of the three fixed slots a shell can occupy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlaceId {
    A,
    B,
    C,
}

impl PlaceId {
    /// All places in stable left-to-right order
    pub const ALL: [PlaceId; 3] = [PlaceId::A, PlaceId::B, PlaceId::C];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlaceId::A => "a",
            PlaceId::B => "b",
            PlaceId::C => "c",
        }
    }
}

impl std::fmt::Display for PlaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fixed slot with its constant layout position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: PlaceId,
    pub position: Vec2,
}

/// Whether a shell is lifted (ball visible if present) or covering its slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShellStatus {
    Open,
    Closed,
}

/// A shell entity
///
/// `id` is permanent for the lifetime of the state. Swaps permute `place`,
/// and the animator chases `position` after that; neither ever touches `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shell {
    pub id: u32,
    pub status: ShellStatus,
    /// Current on-screen position (interpolated during swaps)
    pub position: Vec2,
    /// Logical slot the shell is headed for (or resting at)
    pub place: PlaceId,
    /// Fill color as packed 0xRRGGBB
    pub color: u32,
}

/// The hidden ball, tracked by the id of the shell concealing it
///
/// Assigned once per game. Swaps move places, not shell identities, so this
/// reference stays correct through any number of swaps without being touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ball {
    pub position: u32,
}

/// An unordered pair of places to exchange
pub type SwapPair = (PlaceId, PlaceId);

/// Progress of the in-flight swap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShuffleStatus {
    /// A swap is queued but not yet started
    Ready,
    /// Shell positions are interpolating toward the post-swap slots
    Swapping,
    /// The in-flight swap's interpolation has completed
    Finished,
}

/// The remaining swap plan plus the in-flight swap's progress
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShuffleState {
    pub status: ShuffleStatus,
    pub shuffles: Vec<SwapPair>,
}

/// Current phase of play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    /// Waiting for the player to start; ball shell is shown open
    Idle,
    /// Swap plan is being executed
    Shuffling,
    /// Waiting for the player to pick a shell
    Guessing,
    /// Guess resolved; guessed and true shells are open
    ShowingResult,
}

/// Complete session snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub stage: Stage,
    pub shuffle: ShuffleState,
    /// Shells sorted by id for stable iteration
    pub shells: Vec<Shell>,
    pub places: [Place; 3],
    pub ball: Ball,
    pub guess: Option<u32>,
}

impl GameState {
    /// Canonical initial state: shells 1..3 resting on places a..c, ball
    /// under shell 2 which starts open so the player sees where it is.
    pub fn initial() -> Self {
        let places = Self::layout();
        let shells = places
            .iter()
            .enumerate()
            .map(|(i, place)| Shell {
                id: i as u32 + 1,
                status: if i == 1 { ShellStatus::Open } else { ShellStatus::Closed },
                position: place.position,
                place: place.id,
                color: SHELL_COLORS[i],
            })
            .collect();

        Self {
            stage: Stage::Idle,
            shuffle: ShuffleState {
                status: ShuffleStatus::Finished,
                shuffles: Vec::new(),
            },
            shells,
            places,
            ball: Ball { position: 2 },
            guess: None,
        }
    }

    fn layout() -> [Place; 3] {
        let mut places = [Place {
            id: PlaceId::A,
            position: Vec2::ZERO,
        }; 3];
        for (i, id) in PlaceId::ALL.into_iter().enumerate() {
            places[i] = Place {
                id,
                position: Vec2::new(PLACE_XS[i], PLACE_Y),
            };
        }
        places
    }

    /// Shell with the given id
    pub fn shell(&self, id: u32) -> Option<&Shell> {
        self.shells.iter().find(|s| s.id == id)
    }

    /// Shell currently assigned to the given place
    ///
    /// Lookup is by `place` field, never by array index: shell identity is
    /// decoupled from slot.
    pub fn shell_at(&self, place: PlaceId) -> Option<&Shell> {
        self.shells.iter().find(|s| s.place == place)
    }

    /// Constant layout position of a place
    ///
    /// `places` always holds the fixed triple in `PlaceId::ALL` order.
    pub fn place_position(&self, id: PlaceId) -> Vec2 {
        self.places[id as usize].position
    }

    /// True once no shell has distance left to travel to its slot
    pub fn settled(&self, epsilon: f32) -> bool {
        self.shells.iter().all(|shell| {
            let target = self.place_position(shell.place);
            (target - shell.position).length() < epsilon
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::ARRIVAL_EPSILON;

    #[test]
    fn test_initial_layout_is_settled_bijection() {
        let state = GameState::initial();
        assert_eq!(state.stage, Stage::Idle);
        assert!(state.settled(ARRIVAL_EPSILON));

        // Each place has exactly one resident shell
        for place in PlaceId::ALL {
            assert!(state.shell_at(place).is_some(), "no shell at {place}");
        }
        assert_eq!(state.shells.len(), 3);
    }

    #[test]
    fn test_initial_ball_shell_is_open() {
        let state = GameState::initial();
        let ball_shell = state.shell(state.ball.position).unwrap();
        assert_eq!(ball_shell.status, ShellStatus::Open);
        assert_eq!(ball_shell.place, PlaceId::B);

        for shell in state.shells.iter().filter(|s| s.id != state.ball.position) {
            assert_eq!(shell.status, ShellStatus::Closed);
        }
    }

    #[test]
    fn test_shell_lookup_by_place_follows_place_field() {
        let mut state = GameState::initial();
        // Exchange shells 1 and 3 logically without touching the vec order
        state.shells[0].place = PlaceId::C;
        state.shells[2].place = PlaceId::A;

        assert_eq!(state.shell_at(PlaceId::A).unwrap().id, 3);
        assert_eq!(state.shell_at(PlaceId::C).unwrap().id, 1);
    }
}
