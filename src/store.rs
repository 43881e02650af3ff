//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! The store is a read model: it mirrors `kanban_core::Board` through a
//! board subscription and is never mutated by components directly.

use kanban_core::{BoardView, Column, ColumnId, DragState, Task, TaskId};
use leptos::prelude::*;
use reactive_stores::Store;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Columns in display order
    pub columns: Vec<Column>,
    /// All tasks in board order
    pub tasks: Vec<Task>,
    /// Current drag gesture, with a snapshot of the dragged entity
    pub drag: DragState,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace columns and tasks with the board's current state
pub fn store_sync_board(store: &AppStore, view: BoardView<'_>) {
    store.columns().set(view.columns.to_vec());
    store.tasks().set(view.tasks.to_vec());
}

pub fn store_set_drag(store: &AppStore, drag: DragState) {
    store.drag().set(drag);
}

/// Column title by ID, if the column still exists
pub fn store_column_title(store: &AppStore, id: ColumnId) -> Option<String> {
    store
        .columns()
        .with(|cols| cols.iter().find(|c| c.id == id).map(|c| c.title.clone()))
}

/// Tasks of one column, in board order
pub fn store_column_tasks(store: &AppStore, id: ColumnId) -> Vec<Task> {
    store
        .tasks()
        .with(|tasks| tasks.iter().filter(|t| t.column_id == id).cloned().collect())
}

/// Task content by ID
pub fn store_task_content(store: &AppStore, id: TaskId) -> Option<String> {
    store
        .tasks()
        .with(|tasks| tasks.iter().find(|t| t.id == id).map(|t| t.content.clone()))
}
