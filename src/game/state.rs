use std::collections::HashSet;

use super::{
    action::Direction,
    food::Food,
    grid::{Cell, Grid},
    snake::Snake,
};

/// Lifecycle of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    /// Terminal until the next restart
    GameOver,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub grid: Grid,
    /// Direction the next tick moves in; `None` until the first input
    pub direction: Option<Direction>,
    /// Direction of the last step actually taken
    pub heading: Option<Direction>,
    pub score: u32,
    pub ticks: u32,
    pub phase: Phase,
}

impl GameState {
    /// Create a new game state
    pub fn new(snake: Snake, food: Food, grid: Grid) -> Self {
        Self {
            snake,
            food,
            grid,
            direction: None,
            heading: None,
            score: 0,
            ticks: 0,
            phase: Phase::Running,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Check if a cell is inside the board
    pub fn is_in_bounds(&self, cell: Cell) -> bool {
        self.grid.is_in_bounds(cell)
    }

    /// Check if a cell is occupied by the snake
    pub fn is_occupied_by_snake(&self, cell: Cell) -> bool {
        self.snake.contains(cell)
    }

    pub fn occupied_cells(&self) -> HashSet<Cell> {
        self.snake.occupied_cells()
    }
}
