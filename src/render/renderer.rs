use std::collections::HashSet;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{Cell, GameState, Rgb};
use crate::metrics::SessionStats;

const SNAKE_BODY: Color = Color::Rgb(0xdd, 0xdd, 0xdd);
const SNAKE_HEAD: Color = Color::Blue;

/// Overlay shown instead of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Menu {
    Hidden,
    GameOver { final_score: u32 },
}

/// Everything on screen that is not part of the game state
#[derive(Debug, Clone, Copy)]
pub struct View<'a> {
    pub score: u32,
    pub menu: Menu,
    pub stats: &'a SessionStats,
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, state: &GameState, view: &View) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Board
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(view), chunks[0]);

        // Two terminal columns per cell keep cells roughly square
        let (width, height) = board_extent(state.grid.columns());
        let board_area = centered(chunks[1], width, height);

        match view.menu {
            Menu::Hidden => frame.render_widget(self.render_grid(state), board_area),
            Menu::GameOver { final_score } => {
                frame.render_widget(self.render_game_over(final_score, view.stats), board_area)
            }
        }

        frame.render_widget(self.render_controls(), chunks[2]);
    }

    fn render_grid(&self, state: &GameState) -> Paragraph<'_> {
        let cell_size = state.grid.cell_size();
        let columns = state.grid.columns() as i32;
        let body: HashSet<Cell> = state.occupied_cells();
        let head = state.snake.head();
        let Rgb(r, g, b) = state.food.color;

        let lines: Vec<Line> = (0..columns)
            .map(|row| {
                let spans: Vec<Span> = (0..columns)
                    .map(|col| {
                        let cell = Cell::new(col * cell_size, row * cell_size);

                        if cell == head {
                            Span::styled(
                                "■ ",
                                Style::default()
                                    .fg(SNAKE_HEAD)
                                    .add_modifier(Modifier::BOLD),
                            )
                        } else if body.contains(&cell) {
                            Span::styled("■ ", Style::default().fg(SNAKE_BODY))
                        } else if cell == state.food.cell {
                            Span::styled(
                                "● ",
                                Style::default()
                                    .fg(Color::Rgb(r, g, b))
                                    .add_modifier(Modifier::BOLD),
                            )
                        } else {
                            Span::styled("· ", Style::default().fg(Color::DarkGray))
                        }
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::White))
                .title(" Snake "),
        )
    }

    fn render_stats(&self, view: &View) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                format!("{:02}", view.score),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Best: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                format!("{:02}", view.stats.best_score),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(view.stats.format_time(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(&self, final_score: u32, stats: &SessionStats) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    format!("{:02}", final_score),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![Span::styled(
                format!("Rounds played: {}", stats.rounds_played),
                Style::default().fg(Color::Gray),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Enter",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to play again", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("Enter", Style::default().fg(Color::Green)),
            Span::raw(" to restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Terminal width and height of a board `columns` cells wide, border included
fn board_extent(columns: usize) -> (u16, u16) {
    let columns = u16::try_from(columns).unwrap_or(u16::MAX);
    (
        columns.saturating_mul(2).saturating_add(2),
        columns.saturating_add(2),
    )
}

/// `width` x `height` rect centred in `area`, clipped to fit
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
