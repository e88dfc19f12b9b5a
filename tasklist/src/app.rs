//! Application state and event handling.
//!
//! `App` is the presentation layer around a [`TaskListStore`]: it owns the
//! new-task input buffer, the list selection and panel focus, and turns key
//! presses into store operations. Task data and the edit session live only
//! in the store.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tasklist_core::{Snapshot, TaskId, TaskListStore};

/// Which panel is currently focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelFocus {
    /// New-task input box is focused (default).
    Input,
    /// Task list is focused.
    List,
}

/// Main application state.
pub struct App {
    store: TaskListStore,
    /// Text typed into the new-task input.
    pub input: String,
    /// Cursor position in `input` (character index).
    pub cursor_position: usize,
    /// Cursor position in the edit draft (character index).
    pub edit_cursor: usize,
    /// Which panel is focused.
    pub focus: PanelFocus,
    /// Selected row in the task list.
    pub selected: usize,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Header title.
    pub title: String,
    /// Placeholder for the empty new-task input.
    pub placeholder: String,
}

impl App {
    /// Create an app with an empty task list.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: TaskListStore::new(),
            input: String::new(),
            cursor_position: 0,
            edit_cursor: 0,
            focus: PanelFocus::Input,
            selected: 0,
            should_quit: false,
            title: "Task Manager".to_string(),
            placeholder: "Enter a new task".to_string(),
        }
    }

    /// Set the header title.
    #[must_use]
    pub fn with_title(mut self, title: &str) -> Self {
        title.clone_into(&mut self.title);
        self
    }

    /// Set the input placeholder.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        placeholder.clone_into(&mut self.placeholder);
        self
    }

    /// The underlying store.
    #[must_use]
    pub const fn store(&self) -> &TaskListStore {
        &self.store
    }

    /// Current tasks and edit state, for rendering.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot<'_> {
        self.store.snapshot()
    }

    /// Whether a task is being edited.
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        !self.store.edit_state().is_idle()
    }

    /// Handle a key event.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if let (KeyCode::Char('c'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
            self.should_quit = true;
            return;
        }

        if self.is_editing() {
            self.handle_edit_key(key);
            return;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) => {
                self.should_quit = true;
                return;
            }
            (KeyCode::Tab, KeyModifiers::SHIFT) | (KeyCode::BackTab, _) => {
                self.cycle_focus_backward();
                return;
            }
            (KeyCode::Tab, _) => {
                self.cycle_focus_forward();
                return;
            }
            _ => {}
        }

        match self.focus {
            PanelFocus::Input => self.handle_input_key(key),
            PanelFocus::List => self.handle_list_key(key),
        }
    }

    /// Handle key event when the new-task input is focused.
    fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_task(),
            KeyCode::Char(c) => {
                insert_char(&mut self.input, self.cursor_position, c);
                self.cursor_position += 1;
            }
            KeyCode::Backspace => {
                if remove_char_before(&mut self.input, self.cursor_position) {
                    self.cursor_position -= 1;
                }
            }
            KeyCode::Left => self.cursor_position = self.cursor_position.saturating_sub(1),
            KeyCode::Right => {
                self.cursor_position = (self.cursor_position + 1).min(self.input.chars().count());
            }
            KeyCode::Home => self.cursor_position = 0,
            KeyCode::End => self.cursor_position = self.input.chars().count(),
            _ => {}
        }
    }

    /// Handle key event when the task list is focused.
    fn handle_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < self.store.len() {
                    self.selected += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char('e') => self.begin_edit_selected(),
            KeyCode::Delete | KeyCode::Char('d') => self.delete_selected(),
            _ => {}
        }
    }

    /// Handle key event while a task is being edited.
    fn handle_edit_key(&mut self, key: KeyEvent) {
        let Some(draft) = self.store.edit_state().draft() else {
            return;
        };
        let mut draft = draft.to_string();
        let len = draft.chars().count();

        match key.code {
            KeyCode::Enter => {
                self.store.commit_edit();
                self.edit_cursor = 0;
                return;
            }
            KeyCode::Char(c) => {
                insert_char(&mut draft, self.edit_cursor, c);
                self.edit_cursor += 1;
            }
            KeyCode::Backspace => {
                if !remove_char_before(&mut draft, self.edit_cursor) {
                    return;
                }
                self.edit_cursor -= 1;
            }
            KeyCode::Left => {
                self.edit_cursor = self.edit_cursor.saturating_sub(1);
                return;
            }
            KeyCode::Right => {
                self.edit_cursor = (self.edit_cursor + 1).min(len);
                return;
            }
            KeyCode::Home => {
                self.edit_cursor = 0;
                return;
            }
            KeyCode::End => {
                self.edit_cursor = len;
                return;
            }
            _ => return,
        }

        self.store.update_draft(&draft);
    }

    /// Add the current input as a task. The input is cleared only when the
    /// task was accepted.
    fn submit_task(&mut self) {
        if self.store.add(&self.input) {
            tracing::info!(count = self.store.len(), "task added");
            self.input.clear();
            self.cursor_position = 0;
        }
    }

    /// Id of the selected task, if the list is non-empty.
    #[must_use]
    pub fn selected_id(&self) -> Option<TaskId> {
        self.snapshot()
            .tasks()
            .get(self.selected)
            .map(|task| task.id().clone())
    }

    fn begin_edit_selected(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        self.store.begin_edit(&id);
        self.edit_cursor = self
            .store
            .edit_state()
            .draft()
            .map_or(0, |draft| draft.chars().count());
    }

    fn delete_selected(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        self.store.delete(&id);
        tracing::info!(count = self.store.len(), "task deleted");
        self.selected = self.selected.min(self.store.len().saturating_sub(1));
    }

    /// Cycle focus forward: Input -> List -> Input.
    const fn cycle_focus_forward(&mut self) {
        self.focus = match self.focus {
            PanelFocus::Input => PanelFocus::List,
            PanelFocus::List => PanelFocus::Input,
        };
    }

    /// With two panels, backward and forward cycling coincide.
    const fn cycle_focus_backward(&mut self) {
        self.cycle_focus_forward();
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Byte offset of the `char_index`-th character, or the end of `s`.
fn byte_offset(s: &str, char_index: usize) -> usize {
    s.char_indices().nth(char_index).map_or(s.len(), |(i, _)| i)
}

fn insert_char(s: &mut String, char_index: usize, c: char) {
    let at = byte_offset(s, char_index);
    s.insert(at, c);
}

/// Removes the character before `char_index`. Returns whether one was removed.
fn remove_char_before(s: &mut String, char_index: usize) -> bool {
    if char_index == 0 || char_index > s.chars().count() {
        return false;
    }
    let at = byte_offset(s, char_index - 1);
    s.remove(at);
    true
}
