use crate::game::Direction;

/// Turns a drag into at most one direction
///
/// A gesture starts with [`begin`](Self::begin). Once the pointer has moved
/// further than the threshold along either axis, the larger displacement
/// picks the axis and its sign picks the direction. The gesture is then
/// spent, so one long drag cannot keep flipping the snake.
#[derive(Debug, Clone, PartialEq)]
pub struct SwipeTracker {
    threshold: f32,
    start: Option<(f32, f32)>,
}

impl SwipeTracker {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            start: None,
        }
    }

    pub fn begin(&mut self, x: f32, y: f32) {
        self.start = Some((x, y));
    }

    /// Feed a pointer position; returns a direction once the swipe resolves
    pub fn update(&mut self, x: f32, y: f32) -> Option<Direction> {
        let (start_x, start_y) = self.start?;
        let dx = x - start_x;
        let dy = y - start_y;

        if dx.abs() <= self.threshold && dy.abs() <= self.threshold {
            return None;
        }

        self.start = None;

        // Ties go to the vertical axis.
        let direction = if dx.abs() > dy.abs() {
            if dx > 0.0 { Direction::Right } else { Direction::Left }
        } else if dy > 0.0 {
            Direction::Down
        } else {
            Direction::Up
        };
        Some(direction)
    }

    pub fn cancel(&mut self) {
        self.start = None;
    }

    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }
}
