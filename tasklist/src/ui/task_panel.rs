//! Task list rendering.
//!
//! The row under edit shows the draft with a cursor and a save hint; the
//! selected row shows the edit/delete hints when the list has focus.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use super::theme;
use crate::app::{App, PanelFocus};

/// Render the task list.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let snapshot = app.snapshot();
    let is_focused = app.focus == PanelFocus::List || app.is_editing();

    let block = Block::default()
        .title(Span::styled(
            format!("Tasks ({})", snapshot.tasks().len()),
            theme::panel_title(theme::TASKS_TITLE),
        ))
        .borders(Borders::ALL)
        .border_style(if is_focused {
            theme::highlighted()
        } else {
            theme::normal()
        });

    if snapshot.tasks().is_empty() {
        let empty = Paragraph::new(Line::styled("No tasks yet", theme::dimmed())).block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = snapshot
        .tasks()
        .iter()
        .enumerate()
        .map(|(index, task)| {
            if snapshot.is_editing(task.id()) {
                let draft = snapshot.draft().unwrap_or_default();
                return ListItem::new(Line::from(vec![
                    Span::styled("✎ ", theme::action(theme::SAVE)),
                    Span::styled(super::with_cursor(draft, app.edit_cursor), theme::input_cursor()),
                    Span::raw("  "),
                    Span::styled("[Enter] Save", theme::action(theme::SAVE)),
                ]));
            }

            let mut spans = vec![Span::raw("  "), Span::styled(task.text(), theme::normal())];
            if is_focused && index == app.selected && !app.is_editing() {
                spans.push(Span::raw("  "));
                spans.push(Span::styled("[e] Edit", theme::action(theme::EDIT)));
                spans.push(Span::raw(" "));
                spans.push(Span::styled("[d] Delete", theme::action(theme::DELETE)));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let selected = snapshot
        .editing_target()
        .and_then(|id| app.store().position(id))
        .unwrap_or(app.selected);
    let mut state = ListState::default().with_selected(Some(selected));

    let list = List::new(items)
        .block(block)
        .highlight_style(if is_focused {
            theme::selected()
        } else {
            theme::normal()
        });

    frame.render_stateful_widget(list, area, &mut state);
}
