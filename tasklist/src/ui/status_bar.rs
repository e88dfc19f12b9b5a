//! Status bar rendering.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::theme;
use crate::app::{App, PanelFocus};

/// Key help for the current mode.
#[must_use]
pub const fn help_text(app: &App) -> &'static str {
    if app.is_editing() {
        return "Enter: save | ←→: move cursor | Ctrl-C: quit";
    }
    match app.focus {
        PanelFocus::Input => "Enter: add task | Tab: switch panel | Esc: quit | ←→: move cursor",
        PanelFocus::List => {
            "↑↓/jk: navigate | Enter/e: edit | d: delete | Tab: switch panel | Esc: quit"
        }
    }
}

/// Render the status bar at the bottom of the screen.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let count = app.store().len();
    let noun = if count == 1 { "task" } else { "tasks" };

    let status_line = Line::from(vec![
        Span::styled(concat!("Tasklist v", env!("CARGO_PKG_VERSION")), theme::bold()),
        Span::raw(" | "),
        Span::raw(format!("{count} {noun}")),
        Span::raw(" | "),
        Span::styled(help_text(app), theme::dimmed()),
    ]);

    let paragraph = Paragraph::new(status_line).style(theme::status_bar_bg());
    frame.render_widget(paragraph, area);
}
