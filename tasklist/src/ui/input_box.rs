//! New-task input box rendering.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::theme;
use crate::app::{App, PanelFocus};

/// Render the new-task input with its "Add Task" hint.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.focus == PanelFocus::Input && !app.is_editing();

    let input_line = if app.input.is_empty() && !is_focused {
        Line::from(Span::styled(app.placeholder.as_str(), theme::dimmed()))
    } else if is_focused {
        Line::from(Span::styled(
            super::with_cursor(&app.input, app.cursor_position),
            theme::normal(),
        ))
    } else {
        Line::from(Span::styled(app.input.as_str(), theme::normal()))
    };

    let block = Block::default()
        .title("New task")
        .title_bottom(Line::styled(" Enter: Add Task ", theme::action(theme::ADD)).right_aligned())
        .borders(Borders::ALL)
        .border_style(if is_focused {
            theme::highlighted()
        } else {
            theme::normal()
        });

    let paragraph = Paragraph::new(input_line).block(block);

    frame.render_widget(paragraph, area);
}
