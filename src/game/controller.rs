//! One running game: state, rules, display and timer in one place

use super::{
    action::{Direction, InputAction},
    engine::{GameEngine, TickOutcome},
    presenter::{PAUSE_LABEL, Presenter, RESUME_LABEL},
    scheduler::Scheduler,
    state::GameState,
};
use tracing::info;

/// Owns a game and drives its presenter and scheduler
pub struct GameController<P: Presenter, S: Scheduler> {
    engine: GameEngine,
    state: GameState,
    presenter: P,
    scheduler: S,
}

impl<P: Presenter, S: Scheduler> GameController<P, S> {
    /// Build the initial game without drawing or starting the timer
    pub fn new(mut engine: GameEngine, presenter: P, scheduler: S) -> Self {
        let state = engine.reset();
        Self {
            engine,
            state,
            presenter,
            scheduler,
        }
    }

    /// Show the first frame and start ticking
    pub fn start(&mut self) {
        self.show_pause_label();
        self.redraw();
        self.scheduler.start(self.engine.config().tick_interval());
    }

    /// Advance the game by one step
    ///
    /// A finished game stops the timer, reports its score and starts over.
    pub fn tick(&mut self) -> TickOutcome {
        let outcome = self.engine.tick(&mut self.state);

        match outcome {
            TickOutcome::Paused => {}
            TickOutcome::Moved { .. } => self.redraw(),
            TickOutcome::GameOver { collision, score } => {
                info!(score, ?collision, "game over");
                self.finish(score);
            }
            TickOutcome::BoardFilled { score } => {
                info!(score, "board filled");
                self.finish(score);
            }
        }

        outcome
    }

    /// Queue a turn for the next tick; returns false if it was rejected
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        self.engine.set_direction(&mut self.state, direction)
    }

    /// Pause or resume, returning the new pause flag
    pub fn toggle_pause(&mut self) -> bool {
        let paused = self.engine.toggle_pause(&mut self.state);
        self.show_pause_label();
        paused
    }

    /// Start a new game, cancelling the running timer first
    pub fn reset(&mut self) {
        self.scheduler.stop();
        self.state = self.engine.reset();
        info!(food = self.state.food, "game reset");

        self.show_pause_label();
        self.redraw();
        self.scheduler.start(self.engine.config().tick_interval());
    }

    /// Start a fresh tick period, dropping any tick that fell due meanwhile
    pub fn restart_timer(&mut self) {
        self.scheduler.stop();
        self.scheduler.start(self.engine.config().tick_interval());
    }

    /// Apply a mapped input. Returns false when the player asked to quit.
    pub fn apply(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::Turn(direction) => {
                self.set_direction(direction);
            }
            InputAction::TogglePause => {
                self.toggle_pause();
            }
            InputAction::Reset => self.reset(),
            InputAction::Quit => return false,
            InputAction::None => {}
        }
        true
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    fn finish(&mut self, score: u32) {
        self.scheduler.stop();
        self.presenter.notify_game_over(score);
        self.reset();
    }

    fn redraw(&mut self) {
        self.presenter
            .render(&self.state.snake.body, self.state.food, self.state.score);
    }

    fn show_pause_label(&mut self) {
        let label = if self.state.paused {
            RESUME_LABEL
        } else {
            PAUSE_LABEL
        };
        self.presenter.set_pause_label(label);
    }
}
