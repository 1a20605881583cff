//! Position animator
//!
//! Fixed-step interpolation toward each shell's slot. Speed is a per-tick
//! step, not a per-second rate: one call per distinct frame counter value.

use glam::Vec2;

use super::action::Action;
use super::state::{GameState, Shell};
use crate::consts::ARRIVAL_EPSILON;

/// One interpolation step for a single shell
///
/// Returns `None` once the shell has arrived (remaining distance below
/// epsilon). The final step clamps to the target instead of overshooting.
pub fn shell_step(shell: &Shell, target: Vec2, speed: f32) -> Option<Shell> {
    let delta = target - shell.position;
    let distance = delta.length();

    if distance < ARRIVAL_EPSILON {
        return None;
    }

    let position = if distance <= speed {
        target
    } else {
        shell.position + delta / distance * speed
    };

    Some(Shell {
        position,
        ..shell.clone()
    })
}

/// Per-tick patch of every shell that still has distance to travel
///
/// All steps are computed against the same pre-tick snapshot. An empty patch
/// means the in-flight swap is done and the caller should `StopSwapping`.
pub fn move_patch(state: &GameState, speed: f32) -> Vec<Shell> {
    state
        .shells
        .iter()
        .filter_map(|shell| shell_step(shell, state.place_position(shell.place), speed))
        .collect()
}

/// The tick action while a swap is in flight
pub fn tick_action(state: &GameState, speed: f32) -> Action {
    let shells = move_patch(state, speed);
    if shells.is_empty() {
        Action::StopSwapping
    } else {
        Action::RenderMove { shells }
    }
}
