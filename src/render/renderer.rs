use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::canvas::Canvas;
use crate::game::{Cell, ColorTag, GameState, Palette, Rgb};
use crate::metrics::GameMetrics;

fn rgb(color: Rgb) -> Color {
    Color::Rgb(color[0], color[1], color[2])
}

pub struct Renderer {
    palette: Palette,
}

impl Renderer {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        canvas: &Canvas,
        state: &GameState,
        metrics: &GameMetrics,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Stats
                Constraint::Min(0),    // Board
                Constraint::Length(1), // Controls
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(state, metrics), chunks[0]);
        frame.render_widget(self.render_board(canvas), chunks[1]);
        frame.render_widget(self.render_controls(), chunks[2]);
    }

    fn style_for(&self, tag: ColorTag) -> (&'static str, Style) {
        match tag {
            ColorTag::Head => (
                "██",
                Style::default()
                    .fg(rgb(self.palette.head))
                    .add_modifier(Modifier::BOLD),
            ),
            ColorTag::Body => ("██", Style::default().fg(rgb(self.palette.body))),
            ColorTag::Food => ("██", Style::default().fg(rgb(self.palette.food))),
            ColorTag::Background => ("  ", Style::default().bg(rgb(self.palette.background))),
        }
    }

    fn render_board(&self, canvas: &Canvas) -> Paragraph<'_> {
        let lines: Vec<Line> = (0..canvas.height())
            .map(|y| {
                let spans: Vec<Span> = (0..canvas.width())
                    .map(|x| {
                        let (symbol, style) = self.style_for(canvas.get(Cell::new(x, y)));
                        Span::styled(symbol, style)
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
                    .border_style(Style::default().fg(rgb(self.palette.border)))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, state: &GameState, metrics: &GameMetrics) -> Paragraph<'_> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default().fg(Color::White);

        let text = Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(state.score().to_string(), value.add_modifier(Modifier::BOLD)),
            Span::raw("    "),
            Span::styled("Best: ", label),
            Span::styled(metrics.high_score.to_string(), value),
            Span::raw("    "),
            Span::styled("Resets: ", label),
            Span::styled(state.resets.to_string(), value),
            Span::raw("    "),
            Span::styled("Time: ", label),
            Span::styled(metrics.format_time(), value),
        ]);

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" to restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ]);

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(Palette::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameConfig, GameEngine};
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_render_board_and_stats() {
        let config = GameConfig::small();
        let engine = GameEngine::seeded(config.clone(), 3).unwrap();
        let mut canvas = Canvas::new(config.grid_width, config.grid_height);
        canvas.apply(&engine.frame());
        let metrics = GameMetrics::new();
        let renderer = Renderer::new(config.palette.clone());

        let mut terminal = Terminal::new(TestBackend::new(60, 16)).unwrap();
        terminal
            .draw(|frame| renderer.render(frame, &canvas, engine.state(), &metrics))
            .unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Score: 0"));
        assert!(text.contains("Snake"));
        assert!(text.contains("quit"));
    }

    #[test]
    fn test_head_uses_palette_colour() {
        let renderer = Renderer::default();
        let (_, style) = renderer.style_for(ColorTag::Head);
        assert_eq!(style.fg, Some(rgb(Palette::default().head)));

        let (symbol, style) = renderer.style_for(ColorTag::Background);
        assert_eq!(symbol, "  ");
        assert_eq!(style.bg, Some(Color::Rgb(0, 0, 0)));
    }
}
