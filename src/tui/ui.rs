//! UI rendering for the timer surface.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

/// Render the surface from the current row state.
pub fn render(frame: &mut Frame<'_>, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Command help
            Constraint::Length(1), // Phase title
            Constraint::Length(1), // Remaining time
            Constraint::Min(0),    // Filler
            Constraint::Length(1), // Task description
            Constraint::Length(1), // Notice
        ])
        .split(frame.area());

    if let Some(ref commands) = app.commands {
        let help = Paragraph::new(commands.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, chunks[0]);
    }

    if let Some(ref title) = app.title {
        let title = Paragraph::new(title.as_str())
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            );
        frame.render_widget(title, chunks[1]);
    }

    if let Some(ref remaining) = app.remaining {
        let remaining = Paragraph::new(remaining.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().add_modifier(Modifier::BOLD));
        frame.render_widget(remaining, chunks[2]);
    }

    if let Some(ref task) = app.task {
        let task = Paragraph::new(task.as_str()).alignment(Alignment::Center);
        frame.render_widget(task, chunks[4]);
    }

    if let Some(ref notice) = app.notice {
        let notice = Paragraph::new(notice.as_str()).style(Style::default().fg(Color::Yellow));
        frame.render_widget(notice, chunks[5]);
    }
}
