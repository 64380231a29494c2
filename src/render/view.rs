use crate::game::presenter::{PAUSE_LABEL, Presenter};
use crate::game::Cell;

/// What the terminal shows, as last reported by the game
#[derive(Debug, Clone, PartialEq)]
pub struct TuiView {
    pub grid_size: usize,
    pub snake: Vec<Cell>,
    pub food: Cell,
    pub score: u32,
    pub pause_label: String,
    /// Final score of the last game while its notice is still on screen
    pub game_over: Option<u32>,
}

impl TuiView {
    pub fn new(grid_size: usize) -> Self {
        Self {
            grid_size,
            snake: Vec::new(),
            food: 0,
            score: 0,
            pause_label: PAUSE_LABEL.to_string(),
            game_over: None,
        }
    }

    pub fn has_modal(&self) -> bool {
        self.game_over.is_some()
    }

    pub fn dismiss_modal(&mut self) {
        self.game_over = None;
    }
}

impl Presenter for TuiView {
    fn render(&mut self, snake: &[Cell], food: Cell, score: u32) {
        self.snake.clear();
        self.snake.extend_from_slice(snake);
        self.food = food;
        self.score = score;
    }

    fn set_pause_label(&mut self, label: &str) {
        self.pause_label = label.to_string();
    }

    fn notify_game_over(&mut self, score: u32) {
        self.game_over = Some(score);
    }
}
