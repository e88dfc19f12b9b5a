//! Task list store: the ordered task collection plus the single edit session.
//!
//! `TaskListStore` is the only place task data changes. Every operation
//! either applies its transition or is rejected without touching state, so
//! the store's invariants hold after every call:
//!
//! - task ids are unique and never reused;
//! - tasks stay in insertion order;
//! - an active edit session always targets a task that is still present.
//!
//! The plain operations (`add`, `begin_edit`, ...) never fail from the
//! caller's point of view. The `try_*` variants expose the [`Rejection`]
//! for callers that want to know why nothing happened.

use thiserror::Error;
use tracing::debug;

use crate::task::{Task, TaskId};

/// Reasons a store operation left the state unchanged.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Rejection {
    /// New task text was empty or whitespace-only.
    #[error("task text is blank")]
    BlankText,
    /// No task with the given ID is in the list.
    #[error("task not found: {0}")]
    UnknownTask(TaskId),
    /// The operation needs an active edit session and there is none.
    #[error("no edit in progress")]
    NotEditing,
}

/// Which task, if any, is being renamed right now.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditState {
    /// No task is being edited.
    #[default]
    Idle,
    /// A task is being edited.
    Editing {
        /// The task under edit.
        target: TaskId,
        /// In-progress text, independent of the stored task text until commit.
        draft: String,
    },
}

impl EditState {
    /// Returns the id of the task under edit, if any.
    #[must_use]
    pub const fn target(&self) -> Option<&TaskId> {
        match self {
            Self::Idle => None,
            Self::Editing { target, .. } => Some(target),
        }
    }

    /// Returns the current draft text, if an edit is active.
    #[must_use]
    pub fn draft(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::Editing { draft, .. } => Some(draft),
        }
    }

    /// Whether no edit is active.
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

/// Read-only view of the store for rendering.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    tasks: &'a [Task],
    edit: &'a EditState,
}

impl<'a> Snapshot<'a> {
    /// Tasks in insertion order.
    #[must_use]
    pub const fn tasks(&self) -> &'a [Task] {
        self.tasks
    }

    /// Current edit state.
    #[must_use]
    pub const fn edit(&self) -> &'a EditState {
        self.edit
    }

    /// Whether the given task is the one being edited.
    #[must_use]
    pub fn is_editing(&self, id: &TaskId) -> bool {
        self.edit.target() == Some(id)
    }

    /// The draft text of the active edit, if any.
    #[must_use]
    pub fn draft(&self) -> Option<&'a str> {
        self.edit.draft()
    }

    /// The id of the task under edit, if any.
    #[must_use]
    pub const fn editing_target(&self) -> Option<&'a TaskId> {
        self.edit.target()
    }
}

/// Owns the task collection and the edit session.
#[derive(Debug, Default)]
pub struct TaskListStore {
    tasks: Vec<Task>,
    edit: EditState,
}

impl TaskListStore {
    /// Creates an empty store in the idle state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a task unless `raw_text` is blank. Returns whether a task
    /// was added.
    pub fn add(&mut self, raw_text: &str) -> bool {
        self.try_add(raw_text)
            .inspect_err(|r| log_rejection("add", r))
            .is_ok()
    }

    /// Appends a task and returns its id.
    ///
    /// Blankness is judged on the trimmed text, but the text is stored
    /// exactly as given.
    ///
    /// # Errors
    ///
    /// Returns [`Rejection::BlankText`] if `raw_text` is empty after trimming.
    pub fn try_add(&mut self, raw_text: &str) -> Result<TaskId, Rejection> {
        if raw_text.trim().is_empty() {
            return Err(Rejection::BlankText);
        }
        let task = Task::new(raw_text.to_string());
        let id = task.id().clone();
        self.tasks.push(task);
        debug!(task_id = %id, count = self.tasks.len(), "task added");
        Ok(id)
    }

    /// Starts editing `id`, discarding any uncommitted draft.
    pub fn begin_edit(&mut self, id: &TaskId) {
        if let Err(r) = self.try_begin_edit(id) {
            log_rejection("begin_edit", &r);
        }
    }

    /// Starts editing `id` with a draft copied from the task's text.
    ///
    /// # Errors
    ///
    /// Returns [`Rejection::UnknownTask`] if `id` is not in the list.
    pub fn try_begin_edit(&mut self, id: &TaskId) -> Result<(), Rejection> {
        let draft = self
            .get(id)
            .map(|task| task.text().to_string())
            .ok_or_else(|| Rejection::UnknownTask(id.clone()))?;
        if let Some(previous) = self.edit.target()
            && previous != id
        {
            debug!(previous = %previous, "uncommitted edit discarded");
        }
        self.edit = EditState::Editing {
            target: id.clone(),
            draft,
        };
        debug!(task_id = %id, "edit started");
        Ok(())
    }

    /// Replaces the draft of the active edit. No-op when idle.
    pub fn update_draft(&mut self, new_text: &str) {
        if let Err(r) = self.try_update_draft(new_text) {
            log_rejection("update_draft", &r);
        }
    }

    /// Replaces the draft verbatim. Empty text is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`Rejection::NotEditing`] when no edit is active.
    pub fn try_update_draft(&mut self, new_text: &str) -> Result<(), Rejection> {
        match &mut self.edit {
            EditState::Editing { draft, .. } => {
                new_text.clone_into(draft);
                Ok(())
            }
            EditState::Idle => Err(Rejection::NotEditing),
        }
    }

    /// Writes the draft into the task under edit and returns to idle.
    /// No-op when idle.
    pub fn commit_edit(&mut self) {
        if let Err(r) = self.try_commit_edit() {
            log_rejection("commit_edit", &r);
        }
    }

    /// Writes the draft verbatim into the target task and returns its id.
    ///
    /// Unlike [`try_add`](Self::try_add), a blank draft is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`Rejection::NotEditing`] when no edit is active.
    pub fn try_commit_edit(&mut self) -> Result<TaskId, Rejection> {
        let EditState::Editing { target, draft } = std::mem::take(&mut self.edit) else {
            return Err(Rejection::NotEditing);
        };
        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.id() == &target)
            .ok_or_else(|| Rejection::UnknownTask(target.clone()))?;
        task.set_text(draft);
        debug!(task_id = %target, "edit committed");
        Ok(target)
    }

    /// Removes `id` if present, ending its edit session if it had one.
    pub fn delete(&mut self, id: &TaskId) {
        if let Err(r) = self.try_delete(id) {
            log_rejection("delete", &r);
        }
    }

    /// Removes `id` and returns the removed task.
    ///
    /// If the removed task was under edit, the session is cleared in the
    /// same call.
    ///
    /// # Errors
    ///
    /// Returns [`Rejection::UnknownTask`] if `id` is not in the list.
    pub fn try_delete(&mut self, id: &TaskId) -> Result<Task, Rejection> {
        let index = self
            .position(id)
            .ok_or_else(|| Rejection::UnknownTask(id.clone()))?;
        let removed = self.tasks.remove(index);
        if self.edit.target() == Some(id) {
            self.edit = EditState::Idle;
            debug!(task_id = %id, "edit session cleared by delete");
        }
        debug!(task_id = %id, count = self.tasks.len(), "task deleted");
        Ok(removed)
    }

    /// Returns a read-only view of tasks and edit state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            tasks: &self.tasks,
            edit: &self.edit,
        }
    }

    /// Looks up a task by id.
    #[must_use]
    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Index of `id` in the list.
    #[must_use]
    pub fn position(&self, id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id() == id)
    }

    /// Current edit state.
    #[must_use]
    pub const fn edit_state(&self) -> &EditState {
        &self.edit
    }

    /// Number of tasks.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the list is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

fn log_rejection(op: &'static str, rejection: &Rejection) {
    debug!(op, %rejection, "operation rejected");
}
