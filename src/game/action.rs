/// Direction the snake can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
                | (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
        )
    }

    /// Signed step this direction applies to a cell index on a grid of
    /// side `grid_size`
    pub fn offset(&self, grid_size: usize) -> isize {
        let row = grid_size as isize;
        match self {
            Direction::Up => -row,
            Direction::Down => row,
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

/// What a mapped input asks the game to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Request a new heading; the engine may still reject it
    Turn(Direction),
    TogglePause,
    Reset,
    Quit,
    None,
}

impl From<Direction> for InputAction {
    fn from(direction: Direction) -> Self {
        InputAction::Turn(direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_directions() {
        assert!(Direction::Up.is_opposite(Direction::Down));
        assert!(Direction::Down.is_opposite(Direction::Up));
        assert!(Direction::Left.is_opposite(Direction::Right));
        assert!(Direction::Right.is_opposite(Direction::Left));

        assert!(!Direction::Up.is_opposite(Direction::Left));
        assert!(!Direction::Up.is_opposite(Direction::Up));
    }

    #[test]
    fn test_offsets_on_default_grid() {
        assert_eq!(Direction::Up.offset(20), -20);
        assert_eq!(Direction::Down.offset(20), 20);
        assert_eq!(Direction::Left.offset(20), -1);
        assert_eq!(Direction::Right.offset(20), 1);
    }

    #[test]
    fn test_opposite_offsets_negate() {
        for dir in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
            let opposite = [Direction::Up, Direction::Down, Direction::Left, Direction::Right]
                .into_iter()
                .find(|d| dir.is_opposite(*d))
                .unwrap();
            assert_eq!(dir.offset(7), -opposite.offset(7));
        }
    }

    #[test]
    fn test_direction_into_action() {
        assert_eq!(InputAction::from(Direction::Left), InputAction::Turn(Direction::Left));
    }
}
