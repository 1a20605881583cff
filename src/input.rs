//! Pointer hit-testing
//!
//! Translates a raw pointer position into at most one shell id by
//! point-in-rectangle testing each shell's bounding box. The core never sees
//! coordinates; it consumes the resolved id via `Session::submit_guess`.

use glam::Vec2;

use crate::consts::SHELL_SIZE;
use crate::game::Shell;

/// First shell (in iteration order) whose box contains the point, if any
///
/// Boxes are `SHELL_SIZE` squares anchored at the shell's current position,
/// bounds exclusive.
pub fn hit_test(shells: &[Shell], point: Vec2) -> Option<u32> {
    shells
        .iter()
        .find(|shell| {
            let p = shell.position;
            point.x > p.x && point.x < p.x + SHELL_SIZE && point.y > p.y && point.y < p.y + SHELL_SIZE
        })
        .map(|shell| shell.id)
}
