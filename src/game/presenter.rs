//! Interface between the game and whatever draws it

use super::state::Cell;

/// Label for the pause control while the game runs
pub const PAUSE_LABEL: &str = "Pause";
/// Label for the pause control while the game is paused
pub const RESUME_LABEL: &str = "Resume";

/// Receives everything the game wants shown to the player
pub trait Presenter {
    /// Repaint the grid. `snake` is head first.
    fn render(&mut self, snake: &[Cell], food: Cell, score: u32);

    /// Update the text of the pause/resume control
    fn set_pause_label(&mut self, label: &str);

    /// Show the final score of a finished game
    fn notify_game_over(&mut self, score: u32);
}

/// Presenter that remembers every call, for headless runs and tests
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RecordingPresenter {
    pub frames: Vec<Frame>,
    pub pause_labels: Vec<String>,
    pub game_overs: Vec<u32>,
}

/// One `render` call
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub snake: Vec<Cell>,
    pub food: Cell,
    pub score: u32,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_frame(&self) -> Option<&Frame> {
        self.frames.last()
    }

    pub fn last_pause_label(&self) -> Option<&str> {
        self.pause_labels.last().map(String::as_str)
    }
}

impl Presenter for RecordingPresenter {
    fn render(&mut self, snake: &[Cell], food: Cell, score: u32) {
        self.frames.push(Frame {
            snake: snake.to_vec(),
            food,
            score,
        });
    }

    fn set_pause_label(&mut self, label: &str) {
        self.pause_labels.push(label.to_string());
    }

    fn notify_game_over(&mut self, score: u32) {
        self.game_overs.push(score);
    }
}
