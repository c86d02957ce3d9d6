use std::collections::{HashMap, HashSet};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use tracing::warn;

use crate::game::{FoodEntity, SessionSnapshot, Vector2i};
use crate::metrics::GameMetrics;

/// How a food asset is drawn in the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub symbol: &'static str,
    pub color: Color,
}

const FALLBACK_GLYPH: Glyph = Glyph {
    symbol: "? ",
    color: Color::Magenta,
};

pub struct Renderer {
    glyphs: HashMap<String, Glyph>,
    reported_missing: HashSet<String>,
}

impl Renderer {
    pub fn new() -> Self {
        let glyphs = [
            ("img/apple.png", "a ", Color::Red),
            ("img/banana.svg", "b ", Color::Yellow),
            ("img/cherry.png", "c ", Color::LightRed),
        ]
        .into_iter()
        .map(|(asset, symbol, color)| (asset.to_string(), Glyph { symbol, color }))
        .collect();

        Self {
            glyphs,
            reported_missing: HashSet::new(),
        }
    }

    pub fn render(&mut self, frame: &mut Frame, view: &SessionSnapshot, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(view, metrics), chunks[0]);

        // The grid stays visible under the game over banner
        let board = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(if view.game_over { 7 } else { 0 })])
            .split(chunks[1]);

        let grid = self.render_grid(view);
        frame.render_widget(grid, board[0]);
        if view.game_over {
            frame.render_widget(self.render_game_over(view), board[1]);
        }

        frame.render_widget(self.render_controls(), chunks[2]);
    }

    /// Resolve the glyph for a food, warning once per unresolvable asset
    pub fn food_glyph(&mut self, view: &SessionSnapshot, food: &FoodEntity) -> Glyph {
        let asset = view
            .catalog
            .get(food.kind)
            .and_then(|kind| kind.asset.as_deref());

        if let Some(glyph) = asset.and_then(|asset| self.glyphs.get(asset)) {
            return *glyph;
        }

        let key = asset.unwrap_or("<none>").to_string();
        if self.reported_missing.insert(key.clone()) {
            warn!(asset = %key, kind = food.kind, "no glyph for food asset, drawing fallback");
        }
        FALLBACK_GLYPH
    }

    fn render_grid(&mut self, view: &SessionSnapshot) -> Paragraph<'static> {
        let width = view.grid.width();
        let height = view.grid.height();

        let mut cells: Vec<Span<'static>> =
            vec![Span::styled(". ", Style::default().fg(Color::DarkGray)); width * height];
        let index = |pos: Vector2i| -> Option<usize> {
            view.grid
                .contains(pos)
                .then(|| pos.y as usize * width + pos.x as usize)
        };

        for food in view.foods {
            let glyph = self.food_glyph(view, food);
            if let Some(i) = index(food.position) {
                cells[i] = Span::styled(
                    glyph.symbol,
                    Style::default().fg(glyph.color).add_modifier(Modifier::BOLD),
                );
            }
        }

        // Body first so the head wins when it overlaps a segment
        for part in view.parts.iter().skip(1) {
            if let Some(i) = index(*part) {
                cells[i] = Span::styled("□ ", Style::default().fg(Color::Green));
            }
        }
        if let Some(i) = view.parts.first().and_then(|head| index(*head)) {
            cells[i] = Span::styled(
                "■ ",
                Style::default()
                    .fg(Color::LightGreen)
                    .add_modifier(Modifier::BOLD),
            );
        }

        let lines: Vec<Line<'static>> = cells
            .chunks(width)
            .take(height)
            .map(|row| Line::from(row.to_vec()))
            .collect();

        let border = if view.game_over { Color::Red } else { Color::White };
        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(border))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, view: &SessionSnapshot, metrics: &GameMetrics) -> Paragraph<'static> {
        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                view.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Best: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                metrics.high_score.max(view.score).to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(&self, view: &SessionSnapshot) -> Paragraph<'static> {
        let text = vec![
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    view.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Space",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to restart or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self) -> Paragraph<'static> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
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
