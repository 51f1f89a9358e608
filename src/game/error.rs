use thiserror::Error;

use super::grid::Position;

/// Failures the game core can report
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Grid dimensions must be non-zero and fit the coordinate type
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    /// Every cell is occupied, so there is nowhere to put the food
    #[error("no free cell left on the {width}x{height} board")]
    BoardFull { width: usize, height: usize },

    #[error("a snake needs at least one segment")]
    EmptyBody,

    #[error("food at {0} overlaps the snake")]
    FoodOnSnake(Position),
}
