//! Core state for `Tasklist`: the ordered task collection and the
//! single "currently editing" slot.

pub mod store;
pub mod task;

pub use store::{EditState, Rejection, Snapshot, TaskListStore};
pub use task::{Task, TaskId};
