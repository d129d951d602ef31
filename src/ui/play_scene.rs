//! The in-flight scene: world scaled onto the terminal cell grid.

use crate::app::App;
use crate::ui::render_status_bar;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Skyward ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(2)])
        .split(inner);

    render_world(frame, chunks[0], app);
    render_status_bar(
        frame,
        chunks[1],
        &format!("Score: {}", app.session.score),
        Color::Green,
        &[("[Space/Up]", "Flap"), ("[Esc]", "Quit")],
    );
}

/// Draw bird and pipes by sampling the world at each cell center. The
/// block's bottom border doubles as the ground line.
fn render_world(frame: &mut Frame, area: Rect, app: &App) {
    let width = area.width as usize;
    let height = area.height as usize;
    if width == 0 || height == 0 {
        return;
    }

    let cfg = &app.config;
    let session = &app.session;
    let x_scale = cfg.screen_width / width as f64;
    let y_scale = cfg.screen_height / height as f64;

    let bird_rect = session.bird.rect(cfg);
    let bird_char = if session.bird.velocity < -0.5 {
        "▲"
    } else if session.bird.velocity > 1.0 {
        "▼"
    } else {
        "►"
    };

    // The bird's box can be smaller than one cell, so its center cell is
    // always drawn even when no sample point lands inside the box.
    let bird_col = (cfg.bird_x / x_scale) as usize;
    let bird_row = ((bird_rect.y + bird_rect.height / 2.0) / y_scale) as usize;

    let mut lines = Vec::with_capacity(height);
    for row in 0..height {
        let gy = (row as f64 + 0.5) * y_scale;
        let mut spans = Vec::with_capacity(width);

        for col in 0..width {
            let gx = (col as f64 + 0.5) * x_scale;

            if (row == bird_row && col == bird_col) || bird_rect.contains(gx, gy) {
                spans.push(Span::styled(
                    bird_char,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ));
                continue;
            }

            let in_pipe = session.pipes.iter().any(|pipe| {
                pipe.top_rect(cfg).contains(gx, gy) || pipe.bottom_rect(cfg).contains(gx, gy)
            });
            if in_pipe {
                spans.push(Span::styled("█", Style::default().fg(Color::Green)));
            } else {
                spans.push(Span::raw(" "));
            }
        }

        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}
