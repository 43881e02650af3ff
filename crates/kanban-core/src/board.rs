//! Board State Store
//!
//! Single source of truth for columns and tasks. Mutations come in two
//! flavours: `try_*` methods report missing ids as `BoardError`, the plain
//! methods ignore them (logged at debug) so UI callbacks never have to care.

use tracing::{debug, info};

use crate::config::BoardConfig;
use crate::error::{BoardError, BoardResult};
use crate::events::{BoardEvent, BoardView, Listeners, SubscriptionId};
use crate::model::{Column, ColumnId, Task, TaskId};
use crate::reorder::{array_move, position_of};

#[derive(Debug, Default)]
pub struct Board {
    columns: Vec<Column>,
    tasks: Vec<Task>,
    config: BoardConfig,
    listeners: Listeners,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: BoardConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    // ========================
    // Queries
    // ========================

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn column(&self, id: ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == id)
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn column_ids(&self) -> Vec<ColumnId> {
        self.columns.iter().map(|c| c.id).collect()
    }

    /// Tasks of one column, in board order
    pub fn tasks_in_column(&self, column_id: ColumnId) -> impl Iterator<Item = &Task> + '_ {
        self.tasks.iter().filter(move |t| t.column_id == column_id)
    }

    pub fn task_count(&self, column_id: ColumnId) -> usize {
        self.tasks_in_column(column_id).count()
    }

    /// Tasks whose column no longer exists (only reachable through `create_task`)
    pub fn orphaned_tasks(&self) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| self.column(t.column_id).is_none())
            .collect()
    }

    pub fn view(&self) -> BoardView<'_> {
        BoardView {
            columns: &self.columns,
            tasks: &self.tasks,
        }
    }

    // ========================
    // Subscriptions
    // ========================

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&BoardEvent, BoardView<'_>) + 'static,
    {
        self.listeners.add(Box::new(listener))
    }

    /// Returns false if the subscription was already gone
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.remove(id)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn emit(&mut self, event: BoardEvent) {
        debug!(?event, "board changed");
        let view = BoardView {
            columns: &self.columns,
            tasks: &self.tasks,
        };
        self.listeners.notify(&event, view);
    }

    // ========================
    // Columns
    // ========================

    /// Append a column titled "<prefix> N", N being the new column count
    pub fn create_column(&mut self) -> ColumnId {
        let id = ColumnId::generate();
        let title = format!("{} {}", self.config.column_title_prefix, self.columns.len() + 1);
        info!(%id, %title, "create column");
        self.columns.push(Column::new(id, title));
        self.emit(BoardEvent::ColumnCreated(id));
        id
    }

    /// Remove a column and every task that references it
    pub fn try_delete_column(&mut self, id: ColumnId) -> BoardResult<(Column, Vec<Task>)> {
        let index = position_of(&self.columns, id).ok_or(BoardError::ColumnNotFound(id))?;
        let column = self.columns.remove(index);

        let (removed, kept): (Vec<Task>, Vec<Task>) =
            std::mem::take(&mut self.tasks).into_iter().partition(|t| t.column_id == id);
        self.tasks = kept;

        info!(%id, removed_tasks = removed.len(), "delete column");
        self.emit(BoardEvent::ColumnDeleted {
            id,
            removed_tasks: removed.iter().map(|t| t.id).collect(),
        });
        Ok((column, removed))
    }

    pub fn delete_column(&mut self, id: ColumnId) {
        if let Err(e) = self.try_delete_column(id) {
            debug!(error = %e, "delete column ignored");
        }
    }

    pub fn try_update_column(&mut self, id: ColumnId, title: impl Into<String>) -> BoardResult<()> {
        let column = self
            .columns
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(BoardError::ColumnNotFound(id))?;
        column.title = title.into();
        self.emit(BoardEvent::ColumnUpdated(id));
        Ok(())
    }

    pub fn update_column(&mut self, id: ColumnId, title: impl Into<String>) {
        if let Err(e) = self.try_update_column(id, title) {
            debug!(error = %e, "update column ignored");
        }
    }

    /// Move a column to `to_index` in the column list
    pub fn move_column(&mut self, id: ColumnId, to_index: usize) -> bool {
        let Some(from) = position_of(&self.columns, id) else {
            return false;
        };
        if !array_move(&mut self.columns, from, to_index) {
            return false;
        }
        self.emit(BoardEvent::ColumnMoved {
            id,
            from,
            to: to_index,
        });
        true
    }

    /// Move `active` to where `over` currently sits
    pub fn move_column_over(&mut self, active: ColumnId, over: ColumnId) -> bool {
        match position_of(&self.columns, over) {
            Some(to) => self.move_column(active, to),
            None => false,
        }
    }

    // ========================
    // Tasks
    // ========================

    /// Append a task under `column_id`, refusing unknown columns
    pub fn try_create_task(&mut self, column_id: ColumnId) -> BoardResult<TaskId> {
        if self.column(column_id).is_none() {
            return Err(BoardError::ColumnNotFound(column_id));
        }
        Ok(self.create_task(column_id))
    }

    /// Append a task titled "<prefix> N", N being the new total task count.
    /// The column is not checked, so this can create an orphan.
    pub fn create_task(&mut self, column_id: ColumnId) -> TaskId {
        let id = TaskId::generate();
        let content = format!("{} {}", self.config.task_content_prefix, self.tasks.len() + 1);
        info!(%id, column = %column_id, "create task");
        self.tasks.push(Task::new(id, column_id, content));
        self.emit(BoardEvent::TaskCreated(id));
        id
    }

    pub fn try_delete_task(&mut self, id: TaskId) -> BoardResult<Task> {
        let index = position_of(&self.tasks, id).ok_or(BoardError::TaskNotFound(id))?;
        let task = self.tasks.remove(index);
        info!(%id, "delete task");
        self.emit(BoardEvent::TaskDeleted(id));
        Ok(task)
    }

    pub fn delete_task(&mut self, id: TaskId) {
        if let Err(e) = self.try_delete_task(id) {
            debug!(error = %e, "delete task ignored");
        }
    }

    pub fn try_update_task(&mut self, id: TaskId, content: impl Into<String>) -> BoardResult<()> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(BoardError::TaskNotFound(id))?;
        task.content = content.into();
        self.emit(BoardEvent::TaskUpdated(id));
        Ok(())
    }

    pub fn update_task(&mut self, id: TaskId, content: impl Into<String>) {
        if let Err(e) = self.try_update_task(id, content) {
            debug!(error = %e, "update task ignored");
        }
    }

    /// Give `active` the column of `over`, then move it to `over`'s index
    pub fn move_task_over(&mut self, active: TaskId, over: TaskId) -> bool {
        let (Some(from), Some(to)) = (position_of(&self.tasks, active), position_of(&self.tasks, over))
        else {
            return false;
        };
        let from_column = self.tasks[from].column_id;
        let to_column = self.tasks[to].column_id;

        self.tasks[from].column_id = to_column;
        let moved = array_move(&mut self.tasks, from, to);
        if !moved && from_column == to_column {
            return false;
        }
        self.emit(BoardEvent::TaskMoved {
            id: active,
            from_column,
            to_column,
            from,
            to: if moved { to } else { from },
        });
        true
    }

    /// Give `active` a new column without touching its list position
    pub fn move_task_to_column(&mut self, active: TaskId, column_id: ColumnId) -> bool {
        if self.column(column_id).is_none() {
            return false;
        }
        let Some(index) = position_of(&self.tasks, active) else {
            return false;
        };
        let from_column = self.tasks[index].column_id;
        if from_column == column_id {
            return false;
        }
        self.tasks[index].column_id = column_id;
        self.emit(BoardEvent::TaskMoved {
            id: active,
            from_column,
            to_column: column_id,
            from: index,
            to: index,
        });
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn titles(board: &Board) -> Vec<String> {
        board.columns().iter().map(|c| c.title.clone()).collect()
    }

    #[test]
    fn test_create_column_numbers_titles() {
        let mut board = Board::new();
        board.create_column();
        board.create_column();
        board.create_column();
        assert_eq!(titles(&board), vec!["Column 1", "Column 2", "Column 3"]);
    }

    #[test]
    fn test_create_column_uses_configured_prefix() {
        let config = BoardConfig {
            column_title_prefix: "Lane".to_string(),
            task_content_prefix: "Card".to_string(),
            ..Default::default()
        };
        let mut board = Board::with_config(config);
        let col = board.create_column();
        let task = board.create_task(col);
        assert_eq!(board.column(col).unwrap().title, "Lane 1");
        assert_eq!(board.task(task).unwrap().content, "Card 1");
    }

    #[test]
    fn test_task_numbering_is_global() {
        let mut board = Board::new();
        let a = board.create_column();
        let b = board.create_column();
        board.create_task(a);
        let second = board.create_task(b);
        assert_eq!(board.task(second).unwrap().content, "Task 2");
    }

    #[test]
    fn test_delete_column_cascades_to_tasks() {
        let mut board = Board::new();
        let a = board.create_column();
        let b = board.create_column();
        board.create_task(a);
        board.create_task(a);
        let keep = board.create_task(b);

        let (column, removed) = board.try_delete_column(a).unwrap();
        assert_eq!(column.id, a);
        assert_eq!(removed.len(), 2);
        assert_eq!(board.tasks().len(), 1);
        assert_eq!(board.tasks()[0].id, keep);
    }

    #[test]
    fn test_missing_ids_are_ignored_by_permissive_ops() {
        let mut board = Board::new();
        let col = board.create_column();
        let task = board.create_task(col);

        board.delete_column(ColumnId(u64::MAX));
        board.update_column(ColumnId(u64::MAX), "X");
        board.delete_task(TaskId(u64::MAX));
        board.update_task(TaskId(u64::MAX), "X");

        assert_eq!(board.columns().len(), 1);
        assert_eq!(board.column(col).unwrap().title, "Column 1");
        assert_eq!(board.task(task).unwrap().content, "Task 1");
    }

    #[test]
    fn test_strict_ops_report_missing_ids() {
        let mut board = Board::new();
        let missing_col = ColumnId(u64::MAX);
        let missing_task = TaskId(u64::MAX);

        assert_eq!(board.try_update_column(missing_col, "X"), Err(BoardError::ColumnNotFound(missing_col)));
        assert_eq!(board.try_create_task(missing_col), Err(BoardError::ColumnNotFound(missing_col)));
        assert_eq!(board.try_delete_task(missing_task), Err(BoardError::TaskNotFound(missing_task)));
        assert_eq!(board.try_update_task(missing_task, "X"), Err(BoardError::TaskNotFound(missing_task)));
        assert!(board.tasks().is_empty());
    }

    #[test]
    fn test_create_task_can_orphan() {
        let mut board = Board::new();
        let task = board.create_task(ColumnId(u64::MAX));
        assert_eq!(board.orphaned_tasks().len(), 1);
        assert_eq!(board.orphaned_tasks()[0].id, task);
    }

    #[test]
    fn test_tasks_in_column_keeps_board_order() {
        let mut board = Board::new();
        let a = board.create_column();
        let b = board.create_column();
        let t1 = board.create_task(a);
        board.create_task(b);
        let t3 = board.create_task(a);

        let ids: Vec<TaskId> = board.tasks_in_column(a).map(|t| t.id).collect();
        assert_eq!(ids, vec![t1, t3]);
        assert_eq!(board.task_count(a), 2);
        assert_eq!(board.task_count(b), 1);
    }

    #[test]
    fn test_move_column_over() {
        let mut board = Board::new();
        let a = board.create_column();
        let b = board.create_column();
        let c = board.create_column();

        assert!(board.move_column_over(a, c));
        assert_eq!(board.column_ids(), vec![b, c, a]);
        assert!(!board.move_column_over(a, a));
    }

    #[test]
    fn test_move_task_over_same_column_only_reorders() {
        let mut board = Board::new();
        let col = board.create_column();
        let t1 = board.create_task(col);
        let t2 = board.create_task(col);

        assert!(board.move_task_over(t2, t1));
        let ids: Vec<TaskId> = board.tasks().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![t2, t1]);
        assert_eq!(board.task(t2).unwrap().column_id, col);
    }

    #[test]
    fn test_move_task_to_column_requires_existing_column() {
        let mut board = Board::new();
        let col = board.create_column();
        let task = board.create_task(col);
        assert!(!board.move_task_to_column(task, ColumnId(u64::MAX)));
        assert!(!board.move_task_to_column(task, col));
        assert_eq!(board.task(task).unwrap().column_id, col);
    }

    #[test]
    fn test_listeners_receive_one_event_per_mutation() {
        let mut board = Board::new();
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = events.clone();
        let sub = board.subscribe(move |event, view| {
            sink.borrow_mut().push((event.clone(), view.columns.len(), view.tasks.len()));
        });

        let col = board.create_column();
        let task = board.create_task(col);
        board.update_task(task, "Renamed");
        board.delete_task(TaskId(u64::MAX));

        assert_eq!(
            *events.borrow(),
            vec![
                (BoardEvent::ColumnCreated(col), 1, 0),
                (BoardEvent::TaskCreated(task), 1, 1),
                (BoardEvent::TaskUpdated(task), 1, 1),
            ]
        );

        assert!(board.unsubscribe(sub));
        assert!(!board.unsubscribe(sub));
        board.create_column();
        assert_eq!(events.borrow().len(), 3);
        assert_eq!(board.listener_count(), 0);
    }

    #[test]
    fn test_delete_column_event_lists_removed_tasks() {
        let mut board = Board::new();
        let col = board.create_column();
        let task = board.create_task(col);
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = events.clone();
        board.subscribe(move |event, _| sink.borrow_mut().push(event.clone()));

        board.delete_column(col);
        assert_eq!(
            *events.borrow(),
            vec![BoardEvent::ColumnDeleted {
                id: col,
                removed_tasks: vec![task]
            }]
        );
    }

    fn record(board: &mut Board) -> Rc<RefCell<Vec<BoardEvent>>> {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = events.clone();
        board.subscribe(move |event, _| sink.borrow_mut().push(event.clone()));
        events
    }

    #[test]
    fn test_column_move_event_carries_indices() {
        let mut board = Board::new();
        let a = board.create_column();
        let b = board.create_column();
        let c = board.create_column();
        let events = record(&mut board);

        assert!(board.move_column_over(a, c));
        assert_eq!(*events.borrow(), vec![BoardEvent::ColumnMoved { id: a, from: 0, to: 2 }]);

        // already in place
        assert!(!board.move_column_over(b, b));
        assert!(!board.move_column(a, 2));
        assert_eq!(events.borrow().len(), 1);
    }

    #[test]
    fn test_task_move_across_columns_event() {
        let mut board = Board::new();
        let c1 = board.create_column();
        let c2 = board.create_column();
        let t1 = board.create_task(c1);
        let t2 = board.create_task(c2);
        let events = record(&mut board);

        assert!(board.move_task_over(t1, t2));
        assert_eq!(
            *events.borrow(),
            vec![BoardEvent::TaskMoved {
                id: t1,
                from_column: c1,
                to_column: c2,
                from: 0,
                to: 1,
            }]
        );

        // same column, same slot
        assert!(!board.move_task_over(t1, t1));
        assert_eq!(events.borrow().len(), 1);
    }

    #[test]
    fn test_update_with_same_value_still_emits() {
        let mut board = Board::new();
        let col = board.create_column();
        let events = record(&mut board);

        board.update_column(col, "Backlog");
        board.update_column(col, "Backlog");
        assert_eq!(
            *events.borrow(),
            vec![BoardEvent::ColumnUpdated(col), BoardEvent::ColumnUpdated(col)]
        );
        assert_eq!(board.column(col).unwrap().title, "Backlog");
    }
}
