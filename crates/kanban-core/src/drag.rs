//! Drag Interaction Handler
//!
//! Turns drag start/over/end notifications into board mutations.
//! When a move is committed is decided per entity kind by `CommitPolicy`:
//! `Live` applies on every drag-over, `OnRelease` only at drag end.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::Board;
use crate::model::{Column, ColumnId, Task, TaskId};

/// Something that can be dragged or hovered
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "id")]
pub enum DragItem {
    Column(ColumnId),
    Task(TaskId),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DragKind {
    Column,
    Task,
}

impl DragItem {
    pub fn kind(&self) -> DragKind {
        match self {
            DragItem::Column(_) => DragKind::Column,
            DragItem::Task(_) => DragKind::Task,
        }
    }
}

/// When a drag commits its reorder
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommitPolicy {
    /// Apply on every drag-over
    Live,
    /// Apply once, at drag end
    OnRelease,
}

/// Commit policy per entity kind
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DragPolicies {
    pub column: CommitPolicy,
    pub task: CommitPolicy,
}

impl Default for DragPolicies {
    /// Columns settle on drop, tasks snap while dragging
    fn default() -> Self {
        Self {
            column: CommitPolicy::OnRelease,
            task: CommitPolicy::Live,
        }
    }
}

impl DragPolicies {
    pub fn for_kind(&self, kind: DragKind) -> CommitPolicy {
        match kind {
            DragKind::Column => self.column,
            DragKind::Task => self.task,
        }
    }
}

/// Gesture state. The dragging variants carry a snapshot of the dragged
/// entity for overlay rendering.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    DraggingColumn(Column),
    DraggingTask(Task),
}

impl DragState {
    pub fn active_item(&self) -> Option<DragItem> {
        match self {
            DragState::Idle => None,
            DragState::DraggingColumn(c) => Some(DragItem::Column(c.id)),
            DragState::DraggingTask(t) => Some(DragItem::Task(t.id)),
        }
    }

    pub fn active_column(&self) -> Option<&Column> {
        match self {
            DragState::DraggingColumn(c) => Some(c),
            _ => None,
        }
    }

    pub fn active_task(&self) -> Option<&Task> {
        match self {
            DragState::DraggingTask(t) => Some(t),
            _ => None,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, DragState::Idle)
    }
}

/// What a drag-over or drag-end did to the board
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragOutcome {
    Unchanged,
    ColumnMoved(ColumnId),
    /// Task moved onto another task's column and position
    TaskMoved(TaskId),
    /// Task took a column's id, position kept
    TaskReparented(TaskId),
}

#[derive(Debug, Default)]
pub struct DragController {
    state: DragState,
    policies: DragPolicies,
}

impl DragController {
    pub fn new(policies: DragPolicies) -> Self {
        Self {
            state: DragState::Idle,
            policies,
        }
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn policies(&self) -> DragPolicies {
        self.policies
    }

    /// Enter a dragging state. Ids that are not on the board leave the
    /// controller idle and return false.
    pub fn start(&mut self, board: &Board, item: DragItem) -> bool {
        self.state = match item {
            DragItem::Column(id) => board
                .column(id)
                .cloned()
                .map_or(DragState::Idle, DragState::DraggingColumn),
            DragItem::Task(id) => board
                .task(id)
                .cloned()
                .map_or(DragState::Idle, DragState::DraggingTask),
        };
        debug!(?item, idle = self.state.is_idle(), "drag start");
        !self.state.is_idle()
    }

    /// Pointer moved over `target`. Applies the move only under a `Live` policy.
    pub fn over(&mut self, board: &mut Board, target: Option<DragItem>) -> DragOutcome {
        let Some(active) = self.state.active_item() else {
            return DragOutcome::Unchanged;
        };
        let Some(target) = target else {
            return DragOutcome::Unchanged;
        };
        if self.policies.for_kind(active.kind()) != CommitPolicy::Live {
            return DragOutcome::Unchanged;
        }
        let outcome = apply(board, active, target);
        if outcome != DragOutcome::Unchanged {
            self.refresh(board);
        }
        outcome
    }

    /// Gesture released over `target` (None = no valid drop target).
    /// Always returns to idle; applies the move only under `OnRelease`.
    pub fn end(&mut self, board: &mut Board, target: Option<DragItem>) -> DragOutcome {
        let state = std::mem::take(&mut self.state);
        let (Some(active), Some(target)) = (state.active_item(), target) else {
            debug!("drag end without target");
            return DragOutcome::Unchanged;
        };
        if self.policies.for_kind(active.kind()) != CommitPolicy::OnRelease {
            return DragOutcome::Unchanged;
        }
        apply(board, active, target)
    }

    /// Drop the gesture without touching the board
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }

    fn refresh(&mut self, board: &Board) {
        match &mut self.state {
            DragState::DraggingColumn(c) => {
                if let Some(current) = board.column(c.id) {
                    *c = current.clone();
                }
            }
            DragState::DraggingTask(t) => {
                if let Some(current) = board.task(t.id) {
                    *t = current.clone();
                }
            }
            DragState::Idle => {}
        }
    }
}

/// Reorder rules for one (active, target) pair
fn apply(board: &mut Board, active: DragItem, target: DragItem) -> DragOutcome {
    if active == target {
        return DragOutcome::Unchanged;
    }
    let changed = match (active, target) {
        (DragItem::Column(a), DragItem::Column(o)) => board.move_column_over(a, o),
        (DragItem::Task(a), DragItem::Task(o)) => board.move_task_over(a, o),
        (DragItem::Task(a), DragItem::Column(c)) => board.move_task_to_column(a, c),
        // a task is covered by its column; resolve to that column
        (DragItem::Column(a), DragItem::Task(o)) => match board.task(o).map(|t| t.column_id) {
            Some(c) => board.move_column_over(a, c),
            None => false,
        },
    };
    match (changed, active, target) {
        (false, _, _) => DragOutcome::Unchanged,
        (true, DragItem::Column(a), _) => DragOutcome::ColumnMoved(a),
        (true, DragItem::Task(a), DragItem::Task(_)) => DragOutcome::TaskMoved(a),
        (true, DragItem::Task(a), DragItem::Column(_)) => DragOutcome::TaskReparented(a),
    }
}
