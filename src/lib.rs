//! Grid Snake - single-screen snake arcade game for the terminal
//!
//! This library provides:
//! - Core game logic: grid, snake, food, collision and scoring (game module)
//! - The fixed-delay tick driver and its presentation interface (driver module)
//! - TUI rendering (render module) and keyboard mapping (input module)
//! - The interactive terminal mode (modes module)

pub mod driver;
pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
