use std::collections::HashSet;
use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::direction::Direction;
use super::error::GameError;

/// Random draws tried before falling back to enumerating the free cells
const MAX_REJECTION_SAMPLES: usize = 64;

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction (no wrapping)
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Board dimensions in cells, with toroidal topology
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Result<Self, GameError> {
        let fits = |n: usize| n > 0 && i32::try_from(n).is_ok();
        if !fits(width) || !fits(height) {
            return Err(GameError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Cell where a fresh snake starts
    pub fn center(&self) -> Position {
        Position::new((self.width / 2) as i32, (self.height / 2) as i32)
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width as i32 && pos.y >= 0 && pos.y < self.height as i32
    }

    /// Map any coordinate pair onto the board, reappearing at the opposite edge
    pub fn wrap(&self, pos: Position) -> Position {
        Position::new(
            pos.x.rem_euclid(self.width as i32),
            pos.y.rem_euclid(self.height as i32),
        )
    }

    /// One step from `pos` in `direction`, wrapped onto the board
    pub fn step(&self, pos: Position, direction: Direction) -> Position {
        self.wrap(pos.moved_in_direction(direction))
    }

    /// All cells, row by row
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.height as i32)
            .flat_map(move |y| (0..self.width as i32).map(move |x| Position::new(x, y)))
    }

    /// Pick a uniformly random cell that is not in `excluding`
    pub fn random_cell<R: Rng + ?Sized>(
        &self,
        excluding: &HashSet<Position>,
        rng: &mut R,
    ) -> Result<Position, GameError> {
        let blocked = excluding.iter().filter(|pos| self.contains(**pos)).count();
        let free = self.cell_count() - blocked;
        if free == 0 {
            return Err(self.board_full());
        }

        for _ in 0..MAX_REJECTION_SAMPLES {
            let pos = Position::new(
                rng.gen_range(0..self.width) as i32,
                rng.gen_range(0..self.height) as i32,
            );
            if !excluding.contains(&pos) {
                return Ok(pos);
            }
        }

        // Crowded board: choose among the free cells directly
        let index = rng.gen_range(0..free);
        self.cells()
            .filter(|pos| !excluding.contains(pos))
            .nth(index)
            .ok_or_else(|| self.board_full())
    }

    fn board_full(&self) -> GameError {
        GameError::BoardFull {
            width: self.width,
            height: self.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_position_movement() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.moved_by(1, 0), Position::new(6, 5));
        assert_eq!(pos.moved_by(-1, 0), Position::new(4, 5));
        assert_eq!(pos.moved_in_direction(Direction::Down), Position::new(5, 6));
        assert_eq!(pos.moved_in_direction(Direction::Up), Position::new(5, 4));
    }

    #[test]
    fn test_position_display() {
        assert_eq!(Position::new(3, -1).to_string(), "(3, -1)");
    }

    #[test]
    fn test_invalid_dimensions() {
        assert_eq!(
            Grid::new(0, 5),
            Err(GameError::InvalidDimensions { width: 0, height: 5 })
        );
        assert!(Grid::new(5, 0).is_err());
        assert!(Grid::new(1, 1).is_ok());
    }

    #[test]
    fn test_center() {
        assert_eq!(Grid::new(4, 4).unwrap().center(), Position::new(2, 2));
        assert_eq!(Grid::new(32, 24).unwrap().center(), Position::new(16, 12));
        assert_eq!(Grid::new(5, 3).unwrap().center(), Position::new(2, 1));
    }

    #[test]
    fn test_wrap_all_edges() {
        let grid = Grid::new(10, 8).unwrap();

        assert_eq!(grid.step(Position::new(0, 3), Direction::Left), Position::new(9, 3));
        assert_eq!(grid.step(Position::new(9, 3), Direction::Right), Position::new(0, 3));
        assert_eq!(grid.step(Position::new(4, 0), Direction::Up), Position::new(4, 7));
        assert_eq!(grid.step(Position::new(4, 7), Direction::Down), Position::new(4, 0));
    }

    #[test]
    fn test_wrap_far_out_of_range() {
        let grid = Grid::new(4, 4).unwrap();
        assert_eq!(grid.wrap(Position::new(-5, 9)), Position::new(3, 1));
        assert_eq!(grid.wrap(Position::new(4, -4)), Position::new(0, 0));
    }

    #[test]
    fn test_cells_cover_board() {
        let grid = Grid::new(3, 2).unwrap();
        let cells: Vec<_> = grid.cells().collect();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[0], Position::new(0, 0));
        assert_eq!(cells[5], Position::new(2, 1));
        assert!(cells.iter().all(|pos| grid.contains(*pos)));
    }

    #[test]
    fn test_random_cell_avoids_excluded() {
        let grid = Grid::new(5, 5).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let excluding: HashSet<_> = grid.cells().filter(|pos| pos.x != 2).collect();

        for _ in 0..50 {
            let pos = grid.random_cell(&excluding, &mut rng).unwrap();
            assert_eq!(pos.x, 2);
            assert!(grid.contains(pos));
        }
    }

    #[test]
    fn test_random_cell_single_free_cell() {
        let grid = Grid::new(6, 6).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let hole = Position::new(5, 0);
        let excluding: HashSet<_> = grid.cells().filter(|pos| *pos != hole).collect();

        assert_eq!(grid.random_cell(&excluding, &mut rng), Ok(hole));
    }

    #[test]
    fn test_random_cell_board_full() {
        let grid = Grid::new(2, 2).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let excluding: HashSet<_> = grid.cells().collect();

        assert_eq!(
            grid.random_cell(&excluding, &mut rng),
            Err(GameError::BoardFull { width: 2, height: 2 })
        );
    }

    #[test]
    fn test_random_cell_ignores_off_board_exclusions() {
        let grid = Grid::new(1, 1).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let excluding: HashSet<_> = [Position::new(5, 5)].into_iter().collect();

        assert_eq!(grid.random_cell(&excluding, &mut rng), Ok(Position::new(0, 0)));
    }
}
