//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! Timing lives in the driver; everything here advances only when asked to.

pub mod action;
pub mod collision;
pub mod config;
pub mod engine;
pub mod error;
pub mod food;
pub mod grid;
pub mod snake;
pub mod state;

// Re-export commonly used types
pub use action::Direction;
pub use collision::{check_collision, check_eat, CollisionKind};
pub use config::GameConfig;
pub use engine::{GameEngine, TickOutcome};
pub use error::GameError;
pub use food::{Food, FoodPlacer, Rgb};
pub use grid::{Cell, Grid};
pub use snake::Snake;
pub use state::{GameState, Phase};
