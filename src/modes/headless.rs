use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::game::{Direction, GameConfig, GameError, Session};
use crate::metrics::GameMetrics;

/// Settings for an unattended run
#[derive(Debug, Clone)]
pub struct HeadlessConfig {
    /// Number of ticks to simulate
    pub ticks: u64,
    /// Chance per tick of requesting a random turn
    pub turn_probability: f64,
    /// Seed for the simulated player (independent of food placement)
    pub seed: u64,
}

impl Default for HeadlessConfig {
    fn default() -> Self {
        Self {
            ticks: 10_000,
            turn_probability: 0.2,
            seed: 0,
        }
    }
}

/// Totals from a headless run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadlessSummary {
    pub ticks: u64,
    pub food_eaten: u64,
    pub collisions: u64,
    pub board_fills: u64,
    pub final_score: u32,
    pub best_score: u32,
}

/// Drives a session without a terminal, feeding it random turns
pub struct HeadlessMode {
    config: HeadlessConfig,
    session: Session,
    metrics: GameMetrics,
    player: StdRng,
}

impl HeadlessMode {
    pub fn new(game_config: &GameConfig, config: HeadlessConfig) -> Result<Self> {
        let session = Session::new(game_config).context("Failed to start game session")?;

        Ok(Self {
            player: StdRng::seed_from_u64(config.seed),
            config,
            session,
            metrics: GameMetrics::new(),
        })
    }

    pub fn run(&mut self) -> Result<HeadlessSummary> {
        let mut summary = HeadlessSummary::default();

        for _ in 0..self.config.ticks {
            let request = self.next_request();

            match self.session.tick(request) {
                Ok(outcome) => {
                    if outcome.ate_food {
                        summary.food_eaten += 1;
                    }
                    if let Some(final_score) = outcome.final_score {
                        summary.collisions += 1;
                        self.metrics.on_run_over(final_score);
                        tracing::info!(
                            final_score,
                            tick = self.session.ticks(),
                            "run ended by self collision"
                        );
                    } else {
                        self.metrics.observe_score(self.session.score());
                    }
                }
                Err(GameError::BoardFull { .. }) => {
                    summary.board_fills += 1;
                    self.metrics.on_run_over(self.session.score());
                    tracing::info!(score = self.session.score(), "board filled");
                    self.session.reset().context("Failed to reset game")?;
                }
                Err(err) => return Err(err).context("Game tick failed"),
            }

            summary.ticks += 1;
        }

        summary.final_score = self.session.score();
        summary.best_score = self.metrics.best_score;
        Ok(summary)
    }

    fn next_request(&mut self) -> Option<Direction> {
        if self.player.gen_bool(self.config.turn_probability.clamp(0.0, 1.0)) {
            Direction::ALL.choose(&mut self.player).copied()
        } else {
            None
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }
}

pub fn print_summary(summary: &HeadlessSummary) {
    println!("{}", "=".repeat(40));
    println!("Headless run complete");
    println!("{}", "=".repeat(40));
    println!("Ticks:        {}", summary.ticks);
    println!("Food eaten:   {}", summary.food_eaten);
    println!("Collisions:   {}", summary.collisions);
    println!("Board fills:  {}", summary.board_fills);
    println!("Final score:  {}", summary.final_score);
    println!("Best score:   {}", summary.best_score);
}
