//! Game over screen.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the end-of-run screen with the final score and key hints.
pub fn render_game_over_scene(frame: &mut Frame, area: Rect, score: u32, best: u32, new_best: bool) {
    let block = Block::default()
        .title(" Imp ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let best_line = if new_best {
        Line::from(Span::styled(
            format!("New Best: {}!", best),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(Span::styled(
            format!("Best: {}", best),
            Style::default().fg(Color::DarkGray),
        ))
    };

    let content_height = 7.min(inner.height);
    let y_offset = inner.y + (inner.height.saturating_sub(content_height)) / 2;

    let lines = vec![
        Line::from(Span::styled(
            "Game Over!",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Score: {}", score),
            Style::default().fg(Color::White),
        )),
        best_line,
        Line::from(""),
        Line::from(Span::styled(
            "Press R to Replay",
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            "Press ESC to Exit",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(
        text,
        Rect::new(inner.x, y_offset, inner.width, content_height),
    );
}
