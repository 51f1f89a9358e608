use std::collections::HashSet;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{Position, Session};
use crate::metrics::GameMetrics;

/// What occupies a cell, from the renderer's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Head,
    Body,
    Food,
    Empty,
}

/// Board contents captured once per frame, so each cell is a set lookup
pub struct BoardCells {
    head: Position,
    body: HashSet<Position>,
    food: Position,
}

impl BoardCells {
    pub fn new(session: &Session) -> Self {
        Self {
            head: session.snake().head(),
            body: session.snake().occupied(),
            food: session.food().position(),
        }
    }

    pub fn kind(&self, pos: Position) -> CellKind {
        if pos == self.head {
            CellKind::Head
        } else if self.body.contains(&pos) {
            CellKind::Body
        } else if pos == self.food {
            CellKind::Food
        } else {
            CellKind::Empty
        }
    }
}

impl CellKind {
    fn glyph(self) -> char {
        match self {
            CellKind::Head => '■',
            CellKind::Body => '□',
            CellKind::Food => 'O',
            CellKind::Empty => '.',
        }
    }

    fn style(self) -> Style {
        match self {
            CellKind::Head => Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            CellKind::Body => Style::default().fg(Color::Green),
            CellKind::Food => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            CellKind::Empty => Style::default().fg(Color::DarkGray),
        }
    }
}

/// Glyph padded out to `width` terminal columns
fn cell_text(kind: CellKind, width: u16) -> String {
    let mut text = String::with_capacity(width as usize + 2);
    text.push(kind.glyph());
    text.extend(std::iter::repeat_n(' ', width.saturating_sub(1) as usize));
    text
}

pub struct Renderer {
    cell_size: u16,
}

impl Renderer {
    pub fn new(cell_size: u16) -> Self {
        Self {
            cell_size: cell_size.max(1),
        }
    }

    pub fn render(&self, frame: &mut Frame, session: &Session, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(session, metrics);
        frame.render_widget(stats, chunks[0]);

        // Center the game grid horizontally
        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        let grid = self.render_grid(session);
        frame.render_widget(grid, game_area);

        let controls = self.render_controls();
        frame.render_widget(controls, chunks[2]);
    }

    fn render_grid(&self, session: &Session) -> Paragraph<'static> {
        let grid = session.grid();
        let cells = BoardCells::new(session);
        let lines: Vec<Line> = (0..grid.height() as i32)
            .map(|y| {
                let spans: Vec<Span> = (0..grid.width() as i32)
                    .map(|x| {
                        let kind = cells.kind(Position::new(x, y));
                        Span::styled(cell_text(kind, self.cell_size), kind.style())
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, session: &Session, metrics: &GameMetrics) -> Paragraph<'static> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default().fg(Color::White);

        let text = vec![Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(session.score().to_string(), value.add_modifier(Modifier::BOLD)),
            Span::raw("    "),
            Span::styled("Best: ", label),
            Span::styled(metrics.best_score.to_string(), value),
            Span::raw("    "),
            Span::styled("Runs: ", label),
            Span::styled(metrics.runs_ended.to_string(), value),
            Span::raw("    "),
            Span::styled("Time: ", label),
            Span::styled(metrics.format_time(), value),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_controls(&self) -> Paragraph<'static> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" to restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(2)
    }
}
