use rand::SeedableRng;
use rand::rngs::StdRng;

use super::{
    config::GameConfig,
    direction::Direction,
    error::GameError,
    food::Food,
    grid::{Grid, Position},
    snake::Snake,
};

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    /// The head landed on the food this tick
    pub ate_food: bool,
    /// The head hit the body and the run was reset
    pub collided: bool,
    /// Score of the run that just ended, when `collided` is set
    pub final_score: Option<u32>,
    /// Cell the tail moved off, if the snake did not lengthen
    pub vacated: Option<Position>,
}

/// One game on one board: the snake, the food and the score
///
/// A session never ends. A self-collision resets the snake and the score in
/// place and play continues from the board center.
#[derive(Debug, Clone)]
pub struct Session {
    grid: Grid,
    snake: Snake,
    food: Food,
    score: u32,
    ticks: u64,
    rng: StdRng,
}

impl Session {
    /// Start a session, seeding food placement from the config or from entropy
    pub fn new(config: &GameConfig) -> Result<Self, GameError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config.grid()?, rng)
    }

    /// Start a session with a fixed seed, for reproducible runs
    pub fn with_seed(config: &GameConfig, seed: u64) -> Result<Self, GameError> {
        Self::with_rng(config.grid()?, StdRng::seed_from_u64(seed))
    }

    /// Assemble a session from an existing snake and food
    pub fn from_parts(
        config: &GameConfig,
        snake: Snake,
        food: Food,
        seed: u64,
    ) -> Result<Self, GameError> {
        if snake.contains(food.position()) {
            return Err(GameError::FoodOnSnake(food.position()));
        }

        Ok(Self {
            grid: config.grid()?,
            snake,
            food,
            score: 0,
            ticks: 0,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    fn with_rng(grid: Grid, mut rng: StdRng) -> Result<Self, GameError> {
        let snake = Snake::new(grid.center());
        let food = Food::spawn(&grid, &snake.occupied(), &mut rng)?;

        Ok(Self {
            grid,
            snake,
            food,
            score: 0,
            ticks: 0,
            rng,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Ticks executed since the session started
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Buffer a turn to be applied on the next tick
    pub fn queue_direction(&mut self, direction: Direction) {
        self.snake.queue_direction(direction);
    }

    /// Execute one step of the game
    ///
    /// `BoardFull` means the snake filled every cell and the food has nowhere
    /// to go. The food may overlap the snake until `reset`, which the caller
    /// should do before ticking again.
    pub fn tick(&mut self, request: Option<Direction>) -> Result<TickOutcome, GameError> {
        if let Some(direction) = request {
            self.snake.queue_direction(direction);
        }
        self.snake.apply_pending_direction();
        let vacated = self.snake.advance(&self.grid);
        self.ticks += 1;

        let mut outcome = TickOutcome {
            vacated,
            ..TickOutcome::default()
        };

        if self.snake.head() == self.food.position() {
            self.snake.grow();
            self.score += 1;
            outcome.ate_food = true;
            tracing::debug!(score = self.score, head = ?self.snake.head(), "food eaten");

            if let Err(err) = self
                .food
                .place(&self.grid, &self.snake.occupied(), &mut self.rng)
            {
                tracing::warn!(score = self.score, "no room left for food");
                return Err(err);
            }
        }

        if self.snake.has_self_collision() {
            outcome.collided = true;
            outcome.final_score = Some(self.score);
            tracing::debug!(final_score = self.score, ticks = self.ticks, "self collision");
            self.reset()?;
        }

        Ok(outcome)
    }

    /// Put the snake back at the board center and zero the score
    pub fn reset(&mut self) -> Result<(), GameError> {
        self.snake.reset_state(&self.grid);
        self.score = 0;

        if self.snake.contains(self.food.position()) {
            self.food
                .place(&self.grid, &self.snake.occupied(), &mut self.rng)?;
        }
        Ok(())
    }
}
