//! The crash overlay: name entry for a table-worthy score, then the
//! final results.

use crate::app::{App, Screen};
use crate::game::CrashCause;
use crate::scores::MAX_NAME_LEN;
use crate::ui::score_table_lines;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = match app.screen {
        Screen::EnterName => name_entry_lines(app),
        _ => results_lines(app),
    };

    let content_height = (lines.len() as u16).min(inner.height);
    let y_offset = inner.y + (inner.height.saturating_sub(content_height)) / 2;
    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(
        text,
        Rect::new(inner.x, y_offset, inner.width, content_height),
    );
}

fn crash_message(app: &App) -> &'static str {
    match app.session.crash {
        Some(CrashCause::Ground) => "You hit the ground.",
        Some(CrashCause::Pipe) => "You flew into a pipe.",
        None => "",
    }
}

fn name_entry_lines(app: &App) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            "NEW HIGH SCORE!",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} Score: {}", crash_message(app), app.session.score),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Enter your name:",
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            format!("{}_", app.name_input),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(
                "1-{} characters: letters, numbers, hyphens, underscores",
                MAX_NAME_LEN
            ),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[Enter] Confirm    [Esc] Quit",
            Style::default().fg(Color::DarkGray),
        )),
    ]
}

fn results_lines(app: &App) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            "GAME OVER",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} Score: {}", crash_message(app), app.session.score),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
    ];
    lines.extend(score_table_lines(&app.scores));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[Space] Retry    [Q] Quit",
        Style::default().fg(Color::DarkGray),
    )));
    lines
}
