//! Playfield rendering for an active run.
//!
//! Cell buffer approach: the 400x600 logical space is scaled onto the
//! terminal area, background, pillars, imp, and score are stamped into a
//! 2D grid, and the grid is emitted row-by-row as Paragraph widgets.

use crate::constants::{IMP_X, PILLAR_GAP, PILLAR_WIDTH, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::game::Run;
use crate::ui::sprites::SpriteSet;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

// ── Pillar rendering characters ─────────────────────────────────────
const PILLAR_BODY: char = '█';
const PILLAR_CAP: char = '▒';

// Static night-sky backdrop, in logical pixel positions.
const BACKDROP: &[(f64, f64, char)] = &[
    (40.0, 60.0, '.'),
    (130.0, 180.0, '+'),
    (210.0, 90.0, '.'),
    (300.0, 240.0, '.'),
    (360.0, 140.0, '*'),
    (90.0, 420.0, '.'),
    (250.0, 500.0, '.'),
    (340.0, 450.0, '.'),
];

/// Render the play scene: bordered playfield with pillars, imp, and score.
pub fn render_play_scene(frame: &mut Frame, area: Rect, run: &Run, sprites: &SpriteSet) {
    let block = Block::default()
        .title(" Imp ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    render_play_field(frame, inner, run, sprites);
}

/// Cell in the render buffer with foreground and background colors.
#[derive(Clone, Copy)]
struct Cell {
    ch: char,
    fg: Color,
    bg: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::Reset,
            bg: Color::Reset,
        }
    }
}

fn render_play_field(frame: &mut Frame, area: Rect, run: &Run, sprites: &SpriteSet) {
    if area.height < 2 || area.width < 10 {
        return;
    }

    let render_width = area.width as usize;
    let render_height = area.height as usize;

    let mut buffer: Vec<Vec<Cell>> = vec![vec![Cell::default(); render_width]; render_height];

    let x_scale = render_width as f64 / SCREEN_WIDTH;
    let y_scale = render_height as f64 / SCREEN_HEIGHT;

    // ── Background: sparse static night sky ───────────────────────────
    for &(x, y, ch) in BACKDROP {
        let col = (x * x_scale) as usize;
        let row = (y * y_scale) as usize;
        if row < render_height && col < render_width {
            buffer[row][col] = Cell {
                ch,
                fg: Color::Rgb(60, 60, 75),
                bg: Color::Reset,
            };
        }
    }

    // ── Pillars ───────────────────────────────────────────────────────
    for pillar in &run.pillars {
        let left = (pillar.x * x_scale).round() as i32;
        let width = (PILLAR_WIDTH * x_scale).round().max(1.0) as i32;
        let gap_top_row = (pillar.gap_top * y_scale).round() as i32;
        let gap_bottom_row = ((pillar.gap_top + PILLAR_GAP) * y_scale).round() as i32;

        for dx in 0..width {
            let col = left + dx;
            if col < 0 || col >= render_width as i32 {
                continue;
            }
            let col = col as usize;

            // Top half hangs from the ceiling, mirrored: its cap row faces
            // the gap, matching the bottom half's cap.
            for row in 0..gap_top_row.min(render_height as i32) {
                let ch = if row == gap_top_row - 1 {
                    PILLAR_CAP
                } else {
                    PILLAR_BODY
                };
                buffer[row as usize][col] = Cell {
                    ch,
                    fg: Color::Green,
                    bg: Color::Reset,
                };
            }

            // Bottom half rises from the floor.
            for row in gap_bottom_row.max(0)..render_height as i32 {
                let ch = if row == gap_bottom_row {
                    PILLAR_CAP
                } else {
                    PILLAR_BODY
                };
                buffer[row as usize][col] = Cell {
                    ch,
                    fg: Color::Green,
                    bg: Color::Reset,
                };
            }
        }
    }

    // ── Imp ───────────────────────────────────────────────────────────
    let imp_col = (IMP_X * x_scale).round() as i32;
    let imp_row = (run.imp.y * y_scale).round() as i32;

    for (dy, line) in sprites.frame(run.imp.frame_index).iter().enumerate() {
        let row = imp_row + dy as i32;
        if row < 0 || row >= render_height as i32 {
            continue;
        }
        for (dx, ch) in line.chars().enumerate() {
            if ch == ' ' {
                continue;
            }
            let col = imp_col + dx as i32;
            if col >= 0 && col < render_width as i32 {
                buffer[row as usize][col as usize] = Cell {
                    ch,
                    fg: Color::LightRed,
                    bg: Color::Reset,
                };
            }
        }
    }

    // ── Score display (top-left) ──────────────────────────────────────
    let score_text = format!("Score: {}", run.score);
    for (i, ch) in score_text.chars().enumerate() {
        let col = 1 + i;
        if col < render_width {
            buffer[0][col] = Cell {
                ch,
                fg: Color::White,
                bg: Color::Reset,
            };
        }
    }

    // ── Render buffer to terminal ─────────────────────────────────────
    let x_offset = area.x;
    let y_offset = area.y;

    for (row_idx, row_data) in buffer.iter().enumerate() {
        let mut spans: Vec<Span> = Vec::new();
        let mut current_fg = Color::Reset;
        let mut current_bg = Color::Reset;
        let mut current_text = String::new();

        for &cell in row_data.iter() {
            if (cell.fg != current_fg || cell.bg != current_bg) && !current_text.is_empty() {
                spans.push(Span::styled(
                    std::mem::take(&mut current_text),
                    Style::default().fg(current_fg).bg(current_bg),
                ));
            }
            current_fg = cell.fg;
            current_bg = cell.bg;
            current_text.push(cell.ch);
        }
        if !current_text.is_empty() {
            spans.push(Span::styled(
                current_text,
                Style::default().fg(current_fg).bg(current_bg),
            ));
        }

        let line = Paragraph::new(Line::from(spans));
        let row_area = Rect::new(x_offset, y_offset + row_idx as u16, area.width, 1);
        if row_area.y < area.y + area.height {
            frame.render_widget(line, row_area);
        }
    }
}
