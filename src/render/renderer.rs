use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use super::view::TuiView;
use crate::input::Button;
use crate::metrics::GameMetrics;

const BUTTON_WIDTH: u16 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CellKind {
    Empty,
    Head,
    Body,
    Food,
}

/// Screen areas of the fixed parts of the layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub board: Rect,
    pub pause_button: Rect,
    pub reset_button: Rect,
    pub hint: Rect,
}

impl ScreenLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(area);

        let footer = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(BUTTON_WIDTH),
                Constraint::Length(BUTTON_WIDTH),
                Constraint::Min(0),
            ])
            .split(chunks[2]);

        Self {
            header: chunks[0],
            board: chunks[1],
            pause_button: footer[0],
            reset_button: footer[1],
            hint: footer[2],
        }
    }

    /// Whether the whole board of a `grid_size` grid fits between header and footer
    pub fn fits_board(&self, grid_size: usize) -> bool {
        let (width, height) = board_size(grid_size);
        width <= self.board.width && height <= self.board.height
    }

    /// Button under the given terminal cell, if any
    pub fn button_at(&self, column: u16, row: u16) -> Option<Button> {
        if contains(self.pause_button, column, row) {
            Some(Button::Pause)
        } else if contains(self.reset_button, column, row) {
            Some(Button::Reset)
        } else {
            None
        }
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.x + rect.width && row >= rect.y && row < rect.y + rect.height
}

/// Terminal cells a bordered board needs: two columns per cell
fn board_size(grid_size: usize) -> (u16, u16) {
    let side = u16::try_from(grid_size).unwrap_or(u16::MAX);
    (side.saturating_mul(2).saturating_add(2), side.saturating_add(2))
}

/// Rect of at most `width` x `height`, centred in `area`
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, view: &TuiView, metrics: &GameMetrics) {
        let layout = ScreenLayout::new(frame.area());

        frame.render_widget(self.render_stats(view, metrics), layout.header);

        if layout.fits_board(view.grid_size) {
            let (width, height) = board_size(view.grid_size);
            frame.render_widget(self.render_grid(view), centered(layout.board, width, height));
        } else {
            let notice = self.render_too_small(view.grid_size, frame.area());
            frame.render_widget(notice, layout.board);
        }

        if let Some(score) = view.game_over {
            let popup = centered(layout.board, 34, 8);
            frame.render_widget(Clear, popup);
            frame.render_widget(self.render_game_over(score), popup);
        }

        frame.render_widget(
            self.render_button(&view.pause_label, Color::Yellow),
            layout.pause_button,
        );
        frame.render_widget(self.render_button("Reset", Color::Green), layout.reset_button);
        frame.render_widget(self.render_controls(), layout.hint);
    }

    fn cell_kinds(view: &TuiView) -> Vec<CellKind> {
        let mut kinds = vec![CellKind::Empty; view.grid_size * view.grid_size];

        if let Some(food) = kinds.get_mut(view.food) {
            *food = CellKind::Food;
        }
        for (i, &cell) in view.snake.iter().enumerate() {
            if let Some(kind) = kinds.get_mut(cell) {
                *kind = if i == 0 { CellKind::Head } else { CellKind::Body };
            }
        }

        kinds
    }

    fn render_grid(&self, view: &TuiView) -> Paragraph<'_> {
        let kinds = Self::cell_kinds(view);
        let size = view.grid_size.max(1);

        let lines: Vec<Line> = kinds
            .chunks(size)
            .map(|row| {
                let spans: Vec<Span> = row
                    .iter()
                    .map(|kind| match kind {
                        // Snake head - distinct color
                        CellKind::Head => Span::styled(
                            "■ ",
                            Style::default()
                                .fg(Color::Cyan)
                                .add_modifier(Modifier::BOLD),
                        ),
                        CellKind::Body => Span::styled("□ ", Style::default().fg(Color::Green)),
                        CellKind::Food => Span::styled(
                            "O ",
                            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                        ),
                        CellKind::Empty => {
                            Span::styled(". ", Style::default().fg(Color::DarkGray))
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

    fn render_too_small(&self, grid_size: usize, area: Rect) -> Paragraph<'_> {
        let (width, height) = board_size(grid_size);
        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Terminal too small",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(format!(
                "Need {}x{}, have {}x{}",
                width,
                height.saturating_add(6),
                area.width,
                area.height
            )),
            Line::from(Span::styled(
                "The game waits until the window is larger",
                Style::default().fg(Color::Gray),
            )),
        ];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_stats(&self, view: &TuiView, metrics: &GameMetrics) -> Paragraph<'_> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default().fg(Color::White);

        let text = vec![Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(view.score.to_string(), value.add_modifier(Modifier::BOLD)),
            Span::raw("    "),
            Span::styled("Best: ", label),
            Span::styled(metrics.best_score.to_string(), value),
            Span::raw("    "),
            Span::styled("Games: ", label),
            Span::styled(metrics.games_played.to_string(), value),
            Span::raw("    "),
            Span::styled("Time: ", label),
            Span::styled(metrics.format_time(), value),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(&self, score: u32) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "Press any key to play again",
                Style::default().fg(Color::Gray),
            )),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_button<'a>(&self, label: &'a str, color: Color) -> Paragraph<'a> {
        Paragraph::new(Line::from(Span::styled(
            label,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
                Span::raw("/"),
                Span::styled("WASD", Style::default().fg(Color::Cyan)),
                Span::raw(" or drag to turn | "),
                Span::styled("Space", Style::default().fg(Color::Yellow)),
                Span::raw(" pause | "),
                Span::styled("R", Style::default().fg(Color::Green)),
                Span::raw(" reset | "),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::raw(" quit"),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
