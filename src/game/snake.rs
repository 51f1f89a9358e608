use std::collections::{HashSet, VecDeque};

use super::direction::Direction;
use super::error::GameError;
use super::grid::{Grid, Position};

/// The snake in the game
///
/// Segments are kept head first in a deque so the crawl is a push at the
/// front and a pop at the back.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    segments: VecDeque<Position>,
    /// Direction applied on every advance
    heading: Direction,
    /// Most recent request since the last tick
    pending_heading: Option<Direction>,
    /// Length the body grows toward
    target_length: usize,
}

impl Snake {
    /// Create a one-segment snake at `head`, heading right
    pub fn new(head: Position) -> Self {
        Self {
            segments: VecDeque::from([head]),
            heading: Direction::Right,
            pending_heading: None,
            target_length: 1,
        }
    }

    /// Build a snake with an arbitrary body; `target_length` is raised to the
    /// segment count if it is smaller
    pub fn from_segments(
        segments: impl IntoIterator<Item = Position>,
        heading: Direction,
        target_length: usize,
    ) -> Result<Self, GameError> {
        let segments: VecDeque<Position> = segments.into_iter().collect();
        if segments.is_empty() {
            return Err(GameError::EmptyBody);
        }
        let target_length = target_length.max(segments.len());

        Ok(Self {
            segments,
            heading,
            pending_heading: None,
            target_length,
        })
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.segments[0]
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Position {
        self.segments[self.segments.len() - 1]
    }

    pub fn segments(&self) -> &VecDeque<Position> {
        &self.segments
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn pending_heading(&self) -> Option<Direction> {
        self.pending_heading
    }

    pub fn target_length(&self) -> usize {
        self.target_length
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false; a snake keeps at least its head
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.segments.contains(&pos)
    }

    /// Cells covered by the body, for food placement
    pub fn occupied(&self) -> HashSet<Position> {
        self.segments.iter().copied().collect()
    }

    /// Buffer a turn for the next tick, replacing any earlier request
    pub fn queue_direction(&mut self, direction: Direction) {
        self.pending_heading = Some(direction);
    }

    /// Take the buffered turn unless it would reverse the snake. The buffer
    /// is emptied either way.
    pub fn apply_pending_direction(&mut self) {
        if let Some(next) = self.pending_heading.take() {
            if !self.heading.is_opposite(next) {
                self.heading = next;
            }
        }
    }

    /// Move one cell along the heading, wrapping at the edges. Returns the
    /// tail cell given up, if the body was already at its target length.
    pub fn advance(&mut self, grid: &Grid) -> Option<Position> {
        let new_head = grid.step(self.head(), self.heading);
        self.segments.push_front(new_head);

        if self.segments.len() > self.target_length {
            self.segments.pop_back()
        } else {
            None
        }
    }

    /// Lengthen by one segment, starting with the next advance
    pub fn grow(&mut self) {
        self.target_length += 1;
    }

    /// True if the head shares a cell with any other segment
    pub fn has_self_collision(&self) -> bool {
        let head = self.head();
        self.segments.iter().skip(1).any(|&pos| pos == head)
    }

    /// Back to a single segment at the board center, heading right
    pub fn reset_state(&mut self, grid: &Grid) {
        self.segments.clear();
        self.segments.push_back(grid.center());
        self.heading = Direction::Right;
        self.pending_heading = None;
        self.target_length = 1;
    }
}
