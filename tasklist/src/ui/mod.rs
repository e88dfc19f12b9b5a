//! Terminal UI rendering.

pub mod input_box;
pub mod status_bar;
pub mod task_panel;
pub mod theme;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    text::Line,
    widgets::Paragraph,
};

use crate::app::App;

/// Main draw function for the entire UI.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(3), // New-task input
            Constraint::Min(3),    // Task list
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    let header = Paragraph::new(Line::styled(
        app.title.as_str(),
        theme::panel_title(theme::HEADER),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(header, chunks[0]);

    input_box::render(frame, chunks[1], app);
    task_panel::render(frame, chunks[2], app);
    status_bar::render(frame, chunks[3], app);
}

/// Returns `text` with a block cursor drawn at character index `cursor`.
#[must_use]
pub fn with_cursor(text: &str, cursor: usize) -> String {
    let at = text.char_indices().nth(cursor).map_or(text.len(), |(i, _)| i);
    let mut display = String::with_capacity(text.len() + 3);
    display.push_str(&text[..at]);
    display.push('█');
    display.push_str(&text[at..]);
    display
}
