//! Torus Snake - a Snake game on a board that wraps at every edge
//!
//! This library provides:
//! - Core game logic (game module): grid, snake, food and the tick-driven session
//! - Terminal input mapping (input module)
//! - TUI rendering (render module)
//! - Per-launch statistics (metrics module)
//! - Execution modes (interactive and headless)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
