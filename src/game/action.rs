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
        self.opposite() == other
    }

    /// The direction pointing the other way
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Unit offset (dx, dy) in grid steps; y grows downwards
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Returns true when `requested` would reverse either the queued or the last
/// applied heading. Both start out as `None` before the first input of a round.
pub fn is_reversal(
    requested: Direction,
    queued: Option<Direction>,
    applied: Option<Direction>,
) -> bool {
    queued.is_some_and(|d| d.is_opposite(requested))
        || applied.is_some_and(|d| d.is_opposite(requested))
}
