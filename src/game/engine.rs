use super::{
    action::Direction,
    config::GameConfig,
    state::{Cell, CollisionType, GameState, Snake, column_of},
};
use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::{debug, trace};

/// Result of a game tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The game is paused; nothing changed
    Paused,
    /// The snake moved one cell
    Moved { ate_food: bool },
    /// The move was illegal; the state is left as it was before the tick
    GameOver { collision: CollisionType, score: u32 },
    /// The snake ate the last free cell, so no food can be placed
    BoardFilled { score: u32 },
}

impl TickOutcome {
    /// Whether this tick ended the game
    pub fn is_terminal(&self) -> bool {
        self.final_score().is_some()
    }

    /// Score of the game this tick ended, if it ended one
    pub fn final_score(&self) -> Option<u32> {
        match self {
            TickOutcome::GameOver { score, .. } | TickOutcome::BoardFilled { score } => {
                Some(*score)
            }
            TickOutcome::Paused | TickOutcome::Moved { .. } => None,
        }
    }
}

/// The game engine that handles all game logic
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: StdRng::from_entropy(),
        }
    }

    /// Create an engine whose food placement is reproducible
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Reset the game to initial state
    ///
    /// The snake starts on the second row: head in the second column, tail
    /// in the first, moving right.
    pub fn reset(&mut self) -> GameState {
        let grid_size = self.config.grid_size;
        let snake = Snake::new(vec![grid_size + 1, grid_size]);

        // A fresh two-cell snake always leaves room on a valid grid.
        let food = self.spawn_food_avoid_snake(&snake).unwrap_or(0);

        GameState::new(snake, Direction::Right, food, grid_size)
    }

    /// Execute one step of the game
    pub fn tick(&mut self, state: &mut GameState) -> TickOutcome {
        if state.paused {
            return TickOutcome::Paused;
        }

        let direction = state.direction;
        let new_head = match self.next_head(state, direction) {
            Ok(cell) => cell,
            Err(collision) => {
                return TickOutcome::GameOver {
                    collision,
                    score: state.score,
                };
            }
        };

        let ate_food = new_head == state.food;
        state.snake.advance(new_head, ate_food);
        state.heading = direction;
        state.steps += 1;

        if ate_food {
            state.score += self.config.score_per_food;
            debug!(score = state.score, length = state.snake.len(), "food eaten");

            match self.spawn_food_avoid_snake(&state.snake) {
                Some(food) => state.food = food,
                None => return TickOutcome::BoardFilled { score: state.score },
            }
        }

        TickOutcome::Moved { ate_food }
    }

    /// Request a new direction for the next tick
    ///
    /// Rejects the exact opposite of the pending direction, and of the
    /// direction the snake last moved in. Returns whether it was accepted.
    pub fn set_direction(&self, state: &mut GameState, requested: Direction) -> bool {
        if requested.is_opposite(state.direction) || requested.is_opposite(state.heading) {
            trace!(
                ?requested,
                pending = ?state.direction,
                heading = ?state.heading,
                "turn rejected"
            );
            return false;
        }

        state.direction = requested;
        true
    }

    /// Flip the pause flag, returning the new value
    pub fn toggle_pause(&self, state: &mut GameState) -> bool {
        state.paused = !state.paused;
        debug!(paused = state.paused, "pause toggled");
        state.paused
    }

    /// Cell the head moves into, or the collision that stops it
    fn next_head(&self, state: &GameState, direction: Direction) -> Result<Cell, CollisionType> {
        let grid_size = state.grid_size;
        let head = state.snake.head();

        // Horizontal steps can land on a valid index in the neighbouring row,
        // so the row edges need their own check. Vertical ones only need the
        // range check below.
        let column = column_of(head, grid_size);
        let hit_left_wall = direction == Direction::Left && column == 0;
        let hit_right_wall = direction == Direction::Right && column == grid_size - 1;
        if hit_left_wall || hit_right_wall {
            return Err(CollisionType::Wall);
        }

        let new_head = head as isize + direction.offset(grid_size);
        if new_head < 0 || new_head >= state.total_cells() as isize {
            return Err(CollisionType::Wall);
        }

        let new_head = new_head as Cell;
        if state.snake.occupies(new_head) {
            return Err(CollisionType::SelfCollision);
        }

        Ok(new_head)
    }

    /// Spawn food at a random empty cell, or `None` if the snake covers the grid
    fn spawn_food_avoid_snake(&mut self, snake: &Snake) -> Option<Cell> {
        let total_cells = self.config.total_cells();
        if snake.len() >= total_cells {
            return None;
        }

        loop {
            let cell = self.rng.gen_range(0..total_cells);

            if !snake.occupies(cell) {
                return Some(cell);
            }
        }
    }
}
