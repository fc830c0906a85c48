use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::{error::GameError, grid::Cell, grid::Grid};

/// Widest board the terminal view can lay out
pub const MAX_COLUMNS: usize = 100;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of one cell, in board units
    pub cell_size: i32,
    /// Side length of the square board, in board units
    pub board_size: i32,
    /// Where the single-cell snake starts each round
    pub initial_cell: Cell,
    /// Points awarded per food eaten
    pub score_per_food: u32,
    /// Delay between the end of one tick and the start of the next
    pub tick_interval_ms: u64,
    /// Random food samples tried before falling back to scanning free cells
    pub max_food_attempts: u32,
    /// Fixed RNG seed for reproducible rounds
    pub seed: Option<u64>,
    /// Ring the terminal bell when food is eaten
    pub sound: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cell_size: 30,
            board_size: 600,
            initial_cell: Cell::new(270, 240),
            score_per_food: 10,
            tick_interval_ms: 300,
            max_food_attempts: 10_000,
            seed: None,
            sound: true,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a custom board, keeping the snake
    /// start at the cell nearest the board centre
    pub fn new(cell_size: i32, board_size: i32) -> Self {
        let centre = board_size.checked_div(cell_size).unwrap_or(0) / 2 * cell_size;
        Self {
            cell_size,
            board_size,
            initial_cell: Cell::new(centre, centre),
            ..Default::default()
        }
    }

    /// Read a JSON config file; missing fields take their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.cell_size, self.board_size)
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.cell_size <= 0 {
            return Err(GameError::InvalidConfig(format!(
                "cell_size must be positive, got {}",
                self.cell_size
            )));
        }
        if self.board_size <= 0 || self.board_size % self.cell_size != 0 {
            return Err(GameError::InvalidConfig(format!(
                "board_size {} must be a positive multiple of cell_size {}",
                self.board_size, self.cell_size
            )));
        }
        let grid = self.grid();
        if grid.columns() > MAX_COLUMNS {
            return Err(GameError::InvalidConfig(format!(
                "board is {} cells wide, at most {MAX_COLUMNS} are supported",
                grid.columns()
            )));
        }
        if grid.cell_count() < 2 {
            return Err(GameError::InvalidConfig(
                "board must hold at least two cells".to_string(),
            ));
        }
        if !grid.is_in_bounds(self.initial_cell) || !grid.is_aligned(self.initial_cell) {
            return Err(GameError::InvalidConfig(format!(
                "initial cell ({}, {}) is not an aligned cell on the board",
                self.initial_cell.x, self.initial_cell.y
            )));
        }
        if self.tick_interval_ms == 0 {
            return Err(GameError::InvalidConfig(
                "tick_interval_ms must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}
