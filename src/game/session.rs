//! Session orchestrator
//!
//! The only component that knows *when* to act. It owns the current state
//! plus the seeded RNG, watches the stage / swap sub-state / tick counter,
//! and feeds actions to the transition engine. Collaborators get read-only
//! snapshots and submit resolved inputs (a start click, a guessed shell id).

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::action::{Action, GameError, reduce};
use super::animate;
use super::shuffle;
use super::state::{GameState, ShuffleStatus, Stage};
use super::swap;
use crate::config::Config;

/// One game session: explicitly constructed, one instance per game
#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
    rng: Pcg32,
    config: Config,
    /// Last frame counter value consumed; each distinct value is one step
    last_frame: Option<u64>,
}

impl Session {
    pub fn new(seed: u64, config: Config) -> Self {
        Self {
            state: GameState::initial(),
            rng: Pcg32::seed_from_u64(seed),
            config,
            last_frame: None,
        }
    }

    /// Latest settled snapshot, for rendering and hit-testing
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Start shuffling (idle only; anything else is ignored)
    pub fn start(&mut self) -> Result<(), GameError> {
        if self.state.stage != Stage::Idle {
            return Ok(());
        }

        log::debug!("stage idle -> shuffling");
        self.apply(Action::ChangeStage(Stage::Shuffling))?;

        // Shuffling entry: close all shells and queue a fresh plan
        let plan = shuffle::plan(&mut self.rng, &self.config);
        self.apply(shuffle::start_shuffle(&self.state, plan))?;
        self.settle()
    }

    /// Abort whatever is happening and restore the canonical initial state
    pub fn reset(&mut self) -> Result<(), GameError> {
        log::debug!("reset");
        self.apply(Action::Reset)
    }

    /// One animation tick, keyed by the host's frame counter
    ///
    /// Each distinct, increasing counter value is exactly one interpolation
    /// step; repeats and stale values are ignored.
    pub fn tick(&mut self, frame: u64) -> Result<(), GameError> {
        if self.last_frame.is_some_and(|last| frame <= last) {
            return Ok(());
        }
        self.last_frame = Some(frame);

        if self.state.shuffle.status == ShuffleStatus::Swapping {
            self.apply(animate::tick_action(&self.state, self.config.swap_speed))?;
        }
        self.settle()
    }

    /// Resolve the player's pick (guessing only; otherwise ignored)
    ///
    /// The shell id arrives pre-validated from the hit-test collaborator.
    pub fn submit_guess(&mut self, shell_id: u32) -> Result<(), GameError> {
        if self.state.stage != Stage::Guessing {
            return Ok(());
        }

        log::debug!("guess: shell {shell_id}");
        self.apply(Action::SaveGuess { shell: shell_id })?;
        self.apply(Action::OpenShell { shell: shell_id })?;
        self.apply(Action::ChangeStage(Stage::ShowingResult))?;

        // Showing-result entry: reveal the true shell no matter the guess
        self.apply(Action::OpenShell {
            shell: self.state.ball.position,
        })
    }

    fn apply(&mut self, action: Action) -> Result<(), GameError> {
        self.state = reduce(&self.state, action)?;
        Ok(())
    }

    /// Re-evaluate the swap sub-machine until nothing more can fire
    fn settle(&mut self) -> Result<(), GameError> {
        loop {
            let queue_empty = self.state.shuffle.shuffles.is_empty();

            match self.state.shuffle.status {
                ShuffleStatus::Ready if !queue_empty => {
                    self.apply(swap::begin_swap(&self.state)?)?;
                }
                ShuffleStatus::Finished if !queue_empty => {
                    self.apply(Action::StartNextSwap)?;
                }
                _ if queue_empty && self.state.stage == Stage::Shuffling => {
                    log::debug!("plan exhausted, stage shuffling -> guessing");
                    self.apply(Action::ChangeStage(Stage::Guessing))?;
                }
                _ => return Ok(()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::state::{PlaceId, ShellStatus};
    use crate::view::{self, Outcome};

    /// Drive ticks until all animation is done and the stage settles
    fn run_until_guessing(session: &mut Session) {
        let mut frame = 0;
        while session.state().stage != Stage::Guessing
            || session.state().shuffle.status == ShuffleStatus::Swapping
        {
            frame += 1;
            session.tick(frame).unwrap();
            assert!(frame < 100_000, "session never reached guessing");
        }
    }

    fn place_set(state: &GameState) -> Vec<PlaceId> {
        let mut places: Vec<PlaceId> = state.shells.iter().map(|s| s.place).collect();
        places.sort_by_key(|p| *p as u8);
        places
    }

    #[test]
    fn test_full_round_reaches_guessing_with_plan_exhausted() {
        let mut session = Session::new(1234, Config::default());
        session.start().unwrap();
        assert_eq!(session.state().stage, Stage::Shuffling);
        assert!(session.state().shells.iter().all(|s| s.status == ShellStatus::Closed));

        run_until_guessing(&mut session);

        let state = session.state();
        assert_eq!(state.stage, Stage::Guessing);
        assert!(state.shuffle.shuffles.is_empty());
        assert_eq!(state.shuffle.status, ShuffleStatus::Finished);
        assert!(state.settled(crate::consts::ARRIVAL_EPSILON));
    }

    #[test]
    fn test_bijection_and_identity_hold_for_many_seeds() {
        for seed in 0..50 {
            let mut session = Session::new(seed, Config::default());
            session.start().unwrap();
            run_until_guessing(&mut session);

            let state = session.state();
            assert_eq!(place_set(state), PlaceId::ALL.to_vec(), "seed {seed}");
            let ids: Vec<u32> = state.shells.iter().map(|s| s.id).collect();
            assert_eq!(ids, vec![1, 2, 3], "seed {seed}");
        }
    }

    #[test]
    fn test_ball_follows_its_shell_across_swap_counts() {
        for (seed, swaps) in [(9, 0u32), (10, 1), (11, 5), (12, 100)] {
            let config = Config {
                swap_count: swaps..=swaps,
                ..Config::default()
            };
            let mut session = Session::new(seed, config);
            session.start().unwrap();
            run_until_guessing(&mut session);

            // The winning shell is still the one assigned at session start
            assert_eq!(session.state().ball.position, 2, "seed {seed}");
            session.submit_guess(2).unwrap();
            assert_eq!(view::outcome(session.state()), Some(Outcome::Won));
        }
    }

    #[test]
    fn test_wrong_guess_reveals_both_shells() {
        let mut session = Session::new(5, Config::default());
        session.start().unwrap();
        run_until_guessing(&mut session);

        session.submit_guess(1).unwrap();
        let state = session.state();

        assert_eq!(state.stage, Stage::ShowingResult);
        assert_eq!(state.guess, Some(1));
        assert_eq!(state.shell(1).unwrap().status, ShellStatus::Open);
        assert_eq!(state.shell(2).unwrap().status, ShellStatus::Open);
        assert_eq!(state.shell(3).unwrap().status, ShellStatus::Closed);
        assert_eq!(view::outcome(state), Some(Outcome::Lost));
    }

    #[test]
    fn test_guess_outside_guessing_stage_is_ignored() {
        let mut session = Session::new(5, Config::default());
        session.submit_guess(1).unwrap();
        assert_eq!(session.state().guess, None);
        assert_eq!(session.state().stage, Stage::Idle);
    }

    #[test]
    fn test_start_is_idle_only() {
        let mut session = Session::new(5, Config::default());
        session.start().unwrap();
        let mid_shuffle = session.state().clone();

        session.start().unwrap();
        assert_eq!(session.state(), &mid_shuffle);
    }

    #[test]
    fn test_repeated_frame_value_is_one_step() {
        let mut session = Session::new(6, Config::default());
        session.start().unwrap();

        session.tick(1).unwrap();
        let after_first = session.state().clone();
        session.tick(1).unwrap();
        assert_eq!(session.state(), &after_first);

        session.tick(2).unwrap();
        assert_ne!(session.state(), &after_first);
    }

    #[test]
    fn test_reset_restores_initial_state_mid_shuffle() {
        let mut session = Session::new(7, Config::default());
        session.start().unwrap();
        session.tick(1).unwrap();

        session.reset().unwrap();
        assert_eq!(session.state(), &GameState::initial());
    }

    #[test]
    fn test_same_seed_same_game() {
        let mut a = Session::new(77, Config::default());
        let mut b = Session::new(77, Config::default());
        a.start().unwrap();
        b.start().unwrap();

        for frame in 1..500 {
            a.tick(frame).unwrap();
            b.tick(frame).unwrap();
            assert_eq!(a.state(), b.state());
        }
    }
}
