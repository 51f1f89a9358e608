//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The board wraps at every edge; running into your own body restarts the run.

pub mod config;
pub mod direction;
pub mod error;
pub mod food;
pub mod grid;
pub mod session;
pub mod snake;

// Re-export commonly used types
pub use config::GameConfig;
pub use direction::Direction;
pub use error::GameError;
pub use food::Food;
pub use grid::{Grid, Position};
pub use session::{Session, TickOutcome};
pub use snake::Snake;
