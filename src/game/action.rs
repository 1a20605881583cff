//! Transition engine: pure `(state, action) -> state`
//!
//! The sole mutator of game state. Each action is a closed variant carrying
//! exactly the payload it needs, so a malformed payload is unrepresentable;
//! the only contract errors left are references to entities that do not
//! exist, and those abort the transition with no partial application.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::state::{
    GameState, PlaceId, Shell, ShellStatus, ShuffleState, ShuffleStatus, Stage, SwapPair,
};

/// Broken-invariant conditions
///
/// These are programmer errors, not user-facing ones: in a correct
/// integration they never occur, and there is no retry path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("no shell with id {0}")]
    UnknownShell(u32),
    #[error("no shell occupies place {0}")]
    VacantPlace(PlaceId),
}

/// Every state transition the game supports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Return to the canonical initial state, unconditionally
    Reset,
    /// Replace the stage; nothing else changes
    ChangeStage(Stage),
    /// Queue a fresh swap plan and replace the shells wholesale
    /// (the patch carries all shells, marked closed)
    StartShuffle { shells: Vec<Shell>, shuffles: Vec<SwapPair> },
    /// Lift one shell
    OpenShell { shell: u32 },
    /// Begin animating the head swap: merge the two re-placed shells and
    /// store the remaining queue
    StartSwapping { shells: Vec<Shell>, shuffles: Vec<SwapPair> },
    /// The in-flight swap's interpolation has completed
    StopSwapping,
    /// Advance to the next queued swap
    StartNextSwap,
    /// Merge interpolated positions for the shells that moved this tick
    RenderMove { shells: Vec<Shell> },
    /// Record the player's pick
    SaveGuess { shell: u32 },
}

/// Apply one action, producing a fresh state
///
/// Never mutates `state`; on error the input state is still the current one.
pub fn reduce(state: &GameState, action: Action) -> Result<GameState, GameError> {
    match action {
        Action::Reset => Ok(GameState::initial()),

        Action::ChangeStage(stage) => {
            let mut next = state.clone();
            next.stage = stage;
            Ok(next)
        }

        Action::StartShuffle { shells, shuffles } => {
            let mut next = state.clone();
            next.shells = shells;
            next.shells.sort_by_key(|s| s.id);
            next.shuffle = ShuffleState {
                status: ShuffleStatus::Ready,
                shuffles,
            };
            Ok(next)
        }

        Action::OpenShell { shell } => {
            let mut next = state.clone();
            let target = next
                .shells
                .iter_mut()
                .find(|s| s.id == shell)
                .ok_or(GameError::UnknownShell(shell))?;
            target.status = ShellStatus::Open;
            Ok(next)
        }

        Action::StartSwapping { shells, shuffles } => {
            let mut next = state.clone();
            merge_shells(&mut next.shells, shells)?;
            next.shuffle = ShuffleState {
                status: ShuffleStatus::Swapping,
                shuffles,
            };
            Ok(next)
        }

        Action::StopSwapping => {
            let mut next = state.clone();
            next.shuffle.status = ShuffleStatus::Finished;
            Ok(next)
        }

        Action::StartNextSwap => {
            let mut next = state.clone();
            next.shuffle.status = ShuffleStatus::Ready;
            Ok(next)
        }

        Action::RenderMove { shells } => {
            let mut next = state.clone();
            merge_shells(&mut next.shells, shells)?;
            Ok(next)
        }

        Action::SaveGuess { shell } => {
            if state.shell(shell).is_none() {
                return Err(GameError::UnknownShell(shell));
            }
            let mut next = state.clone();
            next.guess = Some(shell);
            Ok(next)
        }
    }
}

/// Merge a patch into the shell list, matching by id
fn merge_shells(shells: &mut [Shell], patch: Vec<Shell>) -> Result<(), GameError> {
    for patched in patch {
        let slot = shells
            .iter_mut()
            .find(|s| s.id == patched.id)
            .ok_or(GameError::UnknownShell(patched.id))?;
        *slot = patched;
    }
    Ok(())
}
