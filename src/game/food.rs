use std::collections::HashSet;

use rand::Rng;

use super::error::GameError;
use super::grid::{Grid, Position};

/// The single food pellet on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    position: Position,
}

impl Food {
    /// Food at a fixed position
    pub fn new(position: Position) -> Self {
        Self { position }
    }

    /// Food on a random cell outside `occupied`
    pub fn spawn<R: Rng + ?Sized>(
        grid: &Grid,
        occupied: &HashSet<Position>,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        grid.random_cell(occupied, rng).map(Self::new)
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Move to a random cell outside `occupied`. On failure the food stays put.
    pub fn place<R: Rng + ?Sized>(
        &mut self,
        grid: &Grid,
        occupied: &HashSet<Position>,
        rng: &mut R,
    ) -> Result<(), GameError> {
        self.position = grid.random_cell(occupied, rng)?;
        Ok(())
    }
}
