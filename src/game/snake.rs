use std::collections::{HashSet, VecDeque};

use super::{action::Direction, error::GameError, grid::Cell};

/// The snake, stored tail first: index 0 is the tail, the last cell the head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Cell>,
}

impl Snake {
    /// A one-cell snake
    pub fn new(start: Cell) -> Self {
        Self {
            body: VecDeque::from([start]),
        }
    }

    /// Build a snake from cells ordered tail to head
    pub fn from_cells(cells: impl IntoIterator<Item = Cell>) -> Result<Self, GameError> {
        let body: VecDeque<Cell> = cells.into_iter().collect();
        if body.is_empty() {
            return Err(GameError::EmptySnake);
        }
        Ok(Self { body })
    }

    pub fn head(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    /// The cell right behind the head, if any
    pub fn neck(&self) -> Option<Cell> {
        self.body.len().checked_sub(2).map(|i| self.body[i])
    }

    pub fn tail(&self) -> Cell {
        self.body[0]
    }

    /// Cells from tail to head
    pub fn cells(&self) -> impl ExactSizeIterator<Item = &Cell> {
        self.body.iter()
    }

    /// Everything except the head and the neck
    pub fn trailing_body(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter().take(self.body.len().saturating_sub(2))
    }

    pub fn occupied_cells(&self) -> HashSet<Cell> {
        self.body.iter().copied().collect()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Where the head would land after one step
    pub fn next_head(&self, direction: Direction, step: i32) -> Cell {
        self.head().stepped(direction, step)
    }

    /// Move one step, keeping the tail when `grow` is set.
    ///
    /// Returns the new head, or `None` when there is no direction yet.
    pub fn advance(&mut self, direction: Option<Direction>, step: i32, grow: bool) -> Option<Cell> {
        let direction = direction?;
        let new_head = self.next_head(direction, step);
        self.body.push_back(new_head);

        if !grow {
            self.body.pop_front();
        }

        Some(new_head)
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; a snake holds at least one cell
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}
