//! Stage-appropriate status text
//!
//! Pure read-only view of the game state: the strings a renderer paints each
//! frame, and the win/lose resolution once a guess is in. No drawing happens
//! here; any canvas, terminal, or test harness can consume these.

use crate::game::{GameState, Stage};

/// Result of a resolved guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

/// Guess resolution, available once the stage is `ShowingResult`
pub fn outcome(state: &GameState) -> Option<Outcome> {
    if state.stage != Stage::ShowingResult {
        return None;
    }
    state.guess.map(|guess| {
        if guess == state.ball.position {
            Outcome::Won
        } else {
            Outcome::Lost
        }
    })
}

/// Headline status line for the current stage
pub fn status_line(state: &GameState) -> &'static str {
    match state.stage {
        Stage::Idle => "Click to start shuffling!",
        Stage::Shuffling => "Shuffling...!",
        Stage::Guessing => "Click on the shell!",
        Stage::ShowingResult => match outcome(state) {
            Some(Outcome::Won) => "Awesome! Click to start again!",
            _ => "Maybe next time. Click to start again!",
        },
    }
}
