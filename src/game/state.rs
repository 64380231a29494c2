use super::action::Direction;

/// Index of a cell on the flat grid: `row * grid_size + col`
pub type Cell = usize;

/// Column of `cell` on a grid of side `grid_size`
pub fn column_of(cell: Cell, grid_size: usize) -> usize {
    cell % grid_size
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Occupied cells, with head at index 0
    pub body: Vec<Cell>,
}

impl Snake {
    /// Create a snake from its cells, head first
    pub fn new(body: Vec<Cell>) -> Self {
        Self { body }
    }

    /// Get the head cell
    pub fn head(&self) -> Cell {
        self.body[0]
    }

    /// Get the tail cell (last segment)
    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    /// Check if any segment, head and tail included, occupies `cell`
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Put `new_head` in front; drop the tail unless the snake grows
    pub fn advance(&mut self, new_head: Cell, grow: bool) {
        self.body.insert(0, new_head);

        if !grow {
            self.body.pop();
        }
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Type of collision that ended a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake left the grid or crossed a row edge
    Wall,
    /// Snake ran into one of its own cells
    SelfCollision,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    /// Pending direction, applied by the next tick
    pub direction: Direction,
    /// Direction of the last move actually made
    pub heading: Direction,
    pub food: Cell,
    pub grid_size: usize,
    pub score: u32,
    pub steps: u32,
    pub paused: bool,
}

impl GameState {
    /// Create a new game state moving in `direction`
    pub fn new(snake: Snake, direction: Direction, food: Cell, grid_size: usize) -> Self {
        Self {
            snake,
            direction,
            heading: direction,
            food,
            grid_size,
            score: 0,
            steps: 0,
            paused: false,
        }
    }

    pub fn total_cells(&self) -> usize {
        self.grid_size * self.grid_size
    }

    /// Check if a cell is occupied by the snake
    pub fn is_occupied_by_snake(&self, cell: Cell) -> bool {
        self.snake.occupies(cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_of() {
        assert_eq!(column_of(0, 20), 0);
        assert_eq!(column_of(19, 20), 19);
        assert_eq!(column_of(20, 20), 0);
        assert_eq!(column_of(21, 20), 1);
    }

    #[test]
    fn test_snake_accessors() {
        let snake = Snake::new(vec![22, 21, 20]);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), 22);
        assert_eq!(snake.tail(), 20);
        assert!(!snake.is_empty());
    }

    #[test]
    fn test_snake_advance() {
        let mut snake = Snake::new(vec![21, 20]);

        // Move without growing
        snake.advance(22, false);
        assert_eq!(snake.body, vec![22, 21]);

        // Move with growing
        snake.advance(23, true);
        assert_eq!(snake.body, vec![23, 22, 21]);
    }

    #[test]
    fn test_occupancy_includes_head_and_tail() {
        let state = GameState::new(Snake::new(vec![21, 20]), Direction::Right, 50, 20);
        assert!(state.is_occupied_by_snake(21));
        assert!(state.is_occupied_by_snake(20));
        assert!(!state.is_occupied_by_snake(50));
    }

    #[test]
    fn test_new_state_defaults() {
        let state = GameState::new(Snake::new(vec![21, 20]), Direction::Right, 50, 20);
        assert_eq!(state.heading, Direction::Right);
        assert_eq!(state.score, 0);
        assert_eq!(state.steps, 0);
        assert!(!state.paused);
        assert_eq!(state.total_cells(), 400);
    }
}
