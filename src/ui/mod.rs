//! Terminal rendering.
//!
//! One scene per screen, plus the shared status-bar and score-table
//! helpers. Scenes only read the [`App`]; all mutation happens in the
//! state machine.

use crate::app::{App, Screen};
use crate::scores::HighScores;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub mod game_over_scene;
pub mod play_scene;
pub mod start_scene;

/// Top-level draw dispatch.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.size();
    match app.screen {
        Screen::Start => start_scene::render(frame, area, app),
        Screen::Playing => play_scene::render(frame, area, app),
        Screen::EnterName | Screen::GameOver => game_over_scene::render(frame, area, app),
    }
}

/// Render a 2-line status bar: status message, then key hints.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_text: &str,
    status_color: Color,
    controls: &[(&str, &str)],
) {
    if area.height < 1 {
        return;
    }

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center);
    frame.render_widget(status, Rect { height: 1, ..area });

    if area.height >= 2 && !controls.is_empty() {
        let mut spans = Vec::new();
        for (i, (key, action)) in controls.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", Style::default()));
            }
            spans.push(Span::styled(*key, Style::default().fg(Color::White)));
            spans.push(Span::styled(
                format!(" {}", action),
                Style::default().fg(Color::DarkGray),
            ));
        }

        let controls_line = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(
            controls_line,
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );
    }
}

/// Format the high-score table as display lines, header included.
pub fn score_table_lines(scores: &HighScores) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        "High Scores",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))];

    if scores.is_empty() {
        lines.push(Line::from(Span::styled(
            "none yet",
            Style::default().fg(Color::DarkGray),
        )));
        return lines;
    }

    for (i, entry) in scores.entries().iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{}. ", i + 1),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                format!("{:<16}", entry.name),
                Style::default().fg(Color::White),
            ),
            Span::styled(
                format!("{:>5}", entry.score),
                Style::default().fg(Color::Yellow),
            ),
        ]));
    }
    lines
}
