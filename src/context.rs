//! Board Context
//!
//! Owns the core board and drag controller, provided via the Leptos Context
//! API. Every mutation goes through here; the store picks the result up from
//! the board subscription.

use std::cell::RefCell;
use std::rc::Rc;

use kanban_core::{Board, BoardConfig, BoardEvent, Column, ColumnId, DragController, DragItem, TaskId};
use leptos::prelude::*;

use crate::store::{store_set_drag, store_sync_board, AppStore};

/// Board and gesture state. Borrowed only for the duration of one call,
/// never while the reactive arena is being accessed.
struct Inner {
    board: Board,
    drag: DragController,
}

#[derive(Clone, Copy)]
pub struct BoardContext {
    inner: StoredValue<Rc<RefCell<Inner>>, LocalStorage>,
    store: AppStore,
    activation_distance_px: i32,
}

impl BoardContext {
    pub fn new(config: BoardConfig, store: AppStore) -> Self {
        let activation_distance_px = config.activation_distance_px;
        let drag = DragController::new(config.drag_policies());

        let mut board = Board::with_config(config);
        board.subscribe(move |event, view| {
            log_change(event, view.columns);
            store_sync_board(&store, view);
        });
        store_sync_board(&store, board.view());

        Self {
            inner: StoredValue::new_local(Rc::new(RefCell::new(Inner { board, drag }))),
            store,
            activation_distance_px,
        }
    }

    fn inner(&self) -> Rc<RefCell<Inner>> {
        self.inner.get_value()
    }

    pub fn activation_distance_px(&self) -> i32 {
        self.activation_distance_px
    }

    pub fn create_column(&self) {
        self.inner().borrow_mut().board.create_column();
    }

    pub fn delete_column(&self, id: ColumnId) {
        self.inner().borrow_mut().board.delete_column(id);
    }

    pub fn update_column(&self, id: ColumnId, title: String) {
        self.inner().borrow_mut().board.update_column(id, title);
    }

    pub fn create_task(&self, column_id: ColumnId) {
        self.inner().borrow_mut().board.create_task(column_id);
    }

    pub fn delete_task(&self, id: TaskId) {
        self.inner().borrow_mut().board.delete_task(id);
    }

    pub fn update_task(&self, id: TaskId, content: String) {
        self.inner().borrow_mut().board.update_task(id, content);
    }

    // ========================
    // Drag gesture
    // ========================

    pub fn drag_start(&self, item: DragItem) {
        let inner = self.inner();
        let state = {
            let mut guard = inner.borrow_mut();
            let Inner { board, drag } = &mut *guard;
            drag.start(board, item);
            drag.state().clone()
        };
        store_set_drag(&self.store, state);
    }

    pub fn drag_over(&self, target: DragItem) {
        let inner = self.inner();
        let state = {
            let mut guard = inner.borrow_mut();
            let Inner { board, drag } = &mut *guard;
            let outcome = drag.over(board, Some(target));
            tracing::debug!(?target, ?outcome, "[DND] over");
            drag.state().clone()
        };
        store_set_drag(&self.store, state);
    }

    pub fn drag_end(&self, active: DragItem, over: Option<DragItem>) {
        let inner = self.inner();
        let state = {
            let mut guard = inner.borrow_mut();
            let Inner { board, drag } = &mut *guard;
            let outcome = drag.end(board, over);
            tracing::debug!(?active, ?over, ?outcome, "[DND] end");
            drag.state().clone()
        };
        store_set_drag(&self.store, state);
    }
}

fn log_change(event: &BoardEvent, columns: &[Column]) {
    match serde_json::to_string(columns) {
        Ok(json) => tracing::debug!(?event, columns = %json, "[BOARD] changed"),
        Err(e) => tracing::warn!(?event, error = %e, "[BOARD] changed, snapshot failed"),
    }
}

/// Get the board context
pub fn use_board() -> BoardContext {
    expect_context::<BoardContext>()
}
