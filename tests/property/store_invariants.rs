//! Property-based tests for `TaskListStore`.
//!
//! Uses proptest to verify, over random operation sequences:
//! 1. The store matches a simple reference model after every step.
//! 2. Task ids are pairwise distinct and never reused.
//! 3. An active edit always targets a task that is still present.
//! 4. Blank text never grows the collection.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::collections::HashSet;

use proptest::prelude::*;
use tasklist_core::{EditState, TaskId, TaskListStore};

/// One user action against the store. Indices pick an existing task
/// modulo the current length; `None` means "an id that was never issued".
#[derive(Debug, Clone)]
enum Op {
    Add(String),
    BeginEdit(Option<usize>),
    UpdateDraft(String),
    Commit,
    Delete(Option<usize>),
}

/// Strategy for task text, including blank and padded strings.
fn arb_text() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[ \t]{1,4}",
        "[a-zA-Z ]{1,16}",
        ".{0,24}",
    ]
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => arb_text().prop_map(Op::Add),
        2 => proptest::option::weighted(0.9, any::<usize>()).prop_map(Op::BeginEdit),
        2 => arb_text().prop_map(Op::UpdateDraft),
        2 => Just(Op::Commit),
        1 => proptest::option::weighted(0.9, any::<usize>()).prop_map(Op::Delete),
    ]
}

/// Reference model: `(id, text)` pairs plus the edit slot.
#[derive(Debug, Default)]
struct Model {
    tasks: Vec<(TaskId, String)>,
    edit: Option<(TaskId, String)>,
}

fn pick(model: &Model, index: Option<usize>) -> TaskId {
    match index {
        Some(i) if !model.tasks.is_empty() => model.tasks[i % model.tasks.len()].0.clone(),
        _ => TaskId::new(),
    }
}

fn apply(store: &mut TaskListStore, model: &mut Model, issued: &mut HashSet<TaskId>, op: &Op) {
    match op {
        Op::Add(text) => {
            let added = store.add(text);
            assert_eq!(added, !text.trim().is_empty());
            if added {
                let id = store.snapshot().tasks().last().unwrap().id().clone();
                assert!(issued.insert(id.clone()), "id reused: {id}");
                model.tasks.push((id, text.clone()));
            }
        }
        Op::BeginEdit(index) => {
            let id = pick(model, *index);
            store.begin_edit(&id);
            if let Some((_, text)) = model.tasks.iter().find(|(t, _)| *t == id) {
                model.edit = Some((id, text.clone()));
            }
        }
        Op::UpdateDraft(text) => {
            store.update_draft(text);
            if let Some((_, draft)) = model.edit.as_mut() {
                draft.clone_from(text);
            }
        }
        Op::Commit => {
            store.commit_edit();
            if let Some((target, draft)) = model.edit.take() {
                let entry = model.tasks.iter_mut().find(|(t, _)| *t == target).unwrap();
                entry.1 = draft;
            }
        }
        Op::Delete(index) => {
            let id = pick(model, *index);
            store.delete(&id);
            model.tasks.retain(|(t, _)| *t != id);
            if model.edit.as_ref().is_some_and(|(t, _)| *t == id) {
                model.edit = None;
            }
        }
    }
}

fn assert_matches_model(store: &TaskListStore, model: &Model) {
    let snapshot = store.snapshot();
    let actual: Vec<(TaskId, String)> = snapshot
        .tasks()
        .iter()
        .map(|t| (t.id().clone(), t.text().to_string()))
        .collect();
    assert_eq!(actual, model.tasks);

    match (&model.edit, snapshot.edit()) {
        (None, EditState::Idle) => {}
        (Some((id, text)), EditState::Editing { target, draft }) => {
            assert_eq!(id, target);
            assert_eq!(text, draft);
        }
        (expected, actual) => panic!("edit mismatch: model {expected:?}, store {actual:?}"),
    }
}

proptest! {
    #[test]
    fn store_follows_reference_model(ops in prop::collection::vec(arb_op(), 0..64)) {
        let mut store = TaskListStore::new();
        let mut model = Model::default();
        let mut issued = HashSet::new();
        for op in &ops {
            apply(&mut store, &mut model, &mut issued, op);
            assert_matches_model(&store, &model);
        }
    }

    #[test]
    fn edit_target_is_always_live(ops in prop::collection::vec(arb_op(), 0..64)) {
        let mut store = TaskListStore::new();
        let mut model = Model::default();
        let mut issued = HashSet::new();
        for op in &ops {
            apply(&mut store, &mut model, &mut issued, op);
            if let Some(target) = store.snapshot().editing_target() {
                prop_assert!(store.get(target).is_some());
            }
        }
    }

    #[test]
    fn ids_are_pairwise_distinct(texts in prop::collection::vec("[a-z]{1,8}", 1..50)) {
        let mut store = TaskListStore::new();
        for text in &texts {
            prop_assert!(store.add(text));
        }
        let ids: HashSet<&TaskId> = store.snapshot().tasks().iter().map(|t| t.id()).collect();
        prop_assert_eq!(ids.len(), texts.len());
    }

    #[test]
    fn blank_text_never_adds(blank in "[ \t\n\r]{0,8}", seed in prop::collection::vec("[a-z]{1,8}", 0..8)) {
        let mut store = TaskListStore::new();
        for text in &seed {
            store.add(text);
        }
        let before: Vec<String> = store.snapshot().tasks().iter().map(|t| t.text().to_string()).collect();
        prop_assert!(!store.add(&blank));
        let after: Vec<String> = store.snapshot().tasks().iter().map(|t| t.text().to_string()).collect();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn edits_never_reorder(texts in prop::collection::vec("[a-z]{1,8}", 1..16), picks in prop::collection::vec(any::<usize>(), 0..16)) {
        let mut store = TaskListStore::new();
        for text in &texts {
            store.add(text);
        }
        let order: Vec<TaskId> = store.snapshot().tasks().iter().map(|t| t.id().clone()).collect();
        for (n, pick) in picks.iter().enumerate() {
            let id = order[pick % order.len()].clone();
            store.begin_edit(&id);
            store.update_draft(&format!("edit {n}"));
            store.commit_edit();
        }
        let after: Vec<TaskId> = store.snapshot().tasks().iter().map(|t| t.id().clone()).collect();
        prop_assert_eq!(order, after);
    }
}
