use thiserror::Error;

/// Errors raised by the game core.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    /// No free cell is left for food.
    #[error("board is full: no free cell for food after {attempts} random samples")]
    BoardFull { attempts: u32 },

    /// Rejected configuration value.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A snake must occupy at least one cell.
    #[error("snake must contain at least one cell")]
    EmptySnake,
}
