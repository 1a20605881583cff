//! Swap sub-machine
//!
//! One swap at a time: pop the head pair off the plan, find the two resident
//! shells by their `place` field, exchange the places, and hand the rest of
//! the queue back to the transition engine. Interpolation toward the new
//! slots is the animator's job (`animate`); sequencing through
//! Ready -> Swapping -> Finished is the session loop's.

use super::action::{Action, GameError};
use super::state::{GameState, Shell};

/// Build the `StartSwapping` action for the head of the queue
///
/// Caller guarantees the queue is non-empty and `shuffle.status` is `Ready`.
/// A swap pair naming a place with no resident shell means the place
/// bijection is broken; that is fatal, never skipped.
pub fn begin_swap(state: &GameState) -> Result<Action, GameError> {
    let (p1, p2) = state.shuffle.shuffles[0];

    let first = state.shell_at(p1).ok_or(GameError::VacantPlace(p1))?;
    let second = state.shell_at(p2).ok_or(GameError::VacantPlace(p2))?;

    let shells = vec![
        Shell {
            place: p2,
            ..first.clone()
        },
        Shell {
            place: p1,
            ..second.clone()
        },
    ];

    log::debug!("swap {p1}<->{p2}: shells {} and {}", first.id, second.id);
    Ok(Action::StartSwapping {
        shells,
        shuffles: state.shuffle.shuffles[1..].to_vec(),
    })
}
