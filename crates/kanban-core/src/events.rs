//! Change Notification
//!
//! Listeners registered on a `Board` are called once per successful mutation
//! with the event and a read-only view of the state after the change.

use std::fmt;

use crate::model::{Column, ColumnId, Task, TaskId};

/// A single committed change to the board
#[derive(Debug, Clone, PartialEq)]
pub enum BoardEvent {
    ColumnCreated(ColumnId),
    ColumnUpdated(ColumnId),
    /// Column removed together with the tasks that referenced it
    ColumnDeleted { id: ColumnId, removed_tasks: Vec<TaskId> },
    ColumnMoved { id: ColumnId, from: usize, to: usize },
    TaskCreated(TaskId),
    TaskUpdated(TaskId),
    TaskDeleted(TaskId),
    /// Task reparented and/or repositioned in the task list
    TaskMoved {
        id: TaskId,
        from_column: ColumnId,
        to_column: ColumnId,
        from: usize,
        to: usize,
    },
}

/// Borrowed board state handed to listeners
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    pub columns: &'a [Column],
    pub tasks: &'a [Task],
}

/// Handle returned by `Board::subscribe`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&BoardEvent, BoardView<'_>)>;

#[derive(Default)]
pub(crate) struct Listeners {
    next_id: u64,
    entries: Vec<(SubscriptionId, Listener)>,
}

impl Listeners {
    pub(crate) fn add(&mut self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    pub(crate) fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(sid, _)| *sid != id);
        self.entries.len() != before
    }

    pub(crate) fn notify(&mut self, event: &BoardEvent, view: BoardView<'_>) {
        for (_, listener) in self.entries.iter_mut() {
            listener(event, view);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.entries.len())
            .finish()
    }
}
