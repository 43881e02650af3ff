//! Board Scenario Tests
//!
//! End-to-end behaviour of the store and the drag controller together.

use kanban_core::{Board, DragController, DragItem, DragOutcome, TaskId};

fn task_ids(board: &Board) -> Vec<TaskId> {
    board.tasks().iter().map(|t| t.id).collect()
}

#[test]
fn test_delete_one_of_n_columns_keeps_others_and_their_titles() {
    let mut board = Board::new();
    let cols: Vec<_> = (0..5).map(|_| board.create_column()).collect();
    for col in &cols {
        board.create_task(*col);
        board.create_task(*col);
    }

    board.delete_column(cols[2]);

    let titles: Vec<&str> = board.columns().iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["Column 1", "Column 2", "Column 4", "Column 5"]);
    assert_eq!(board.tasks().len(), 8);
    assert!(board.tasks().iter().all(|t| t.column_id != cols[2]));
}

#[test]
fn test_update_column_touches_only_matching_column() {
    let mut board = Board::new();
    let cols: Vec<_> = (0..3).map(|_| board.create_column()).collect();

    board.update_column(cols[1], "X");

    assert_eq!(board.column_ids(), cols);
    let titles: Vec<&str> = board.columns().iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["Column 1", "X", "Column 3"]);
}

#[test]
fn test_task_over_column_reparents_only_active_task() {
    let mut board = Board::new();
    let a = board.create_column();
    let b = board.create_column();
    let moving = board.create_task(a);
    let stay_a = board.create_task(a);
    let stay_b = board.create_task(b);
    let order = task_ids(&board);

    let mut ctl = DragController::default();
    ctl.start(&board, DragItem::Task(moving));
    let outcome = ctl.over(&mut board, Some(DragItem::Column(b)));
    ctl.end(&mut board, Some(DragItem::Column(b)));

    assert_eq!(outcome, DragOutcome::TaskReparented(moving));
    assert_eq!(board.task(moving).unwrap().column_id, b);
    assert_eq!(board.task(stay_a).unwrap().column_id, a);
    assert_eq!(board.task(stay_b).unwrap().column_id, b);
    assert_eq!(task_ids(&board), order);
}

#[test]
fn test_column_reorder_preserves_the_set() {
    let mut board = Board::new();
    let cols: Vec<_> = (0..4).map(|_| board.create_column()).collect();

    let mut ctl = DragController::default();
    ctl.start(&board, DragItem::Column(cols[3]));
    ctl.end(&mut board, Some(DragItem::Column(cols[1])));

    assert_eq!(board.column_ids(), vec![cols[0], cols[3], cols[1], cols[2]]);
    let mut sorted = board.column_ids();
    sorted.sort();
    let mut expected = cols.clone();
    expected.sort();
    assert_eq!(sorted, expected);
}

#[test]
fn test_task_over_task_across_columns() {
    let mut board = Board::new();
    let c1 = board.create_column();
    let c2 = board.create_column();
    let t1 = board.create_task(c1);
    let t2 = board.create_task(c2);

    let mut ctl = DragController::default();
    ctl.start(&board, DragItem::Task(t1));
    let outcome = ctl.over(&mut board, Some(DragItem::Task(t2)));
    ctl.end(&mut board, Some(DragItem::Task(t2)));

    assert_eq!(outcome, DragOutcome::TaskMoved(t1));
    assert_eq!(board.task(t1).unwrap().column_id, c2);
    let order = task_ids(&board);
    let p1 = order.iter().position(|id| *id == t1).unwrap();
    let p2 = order.iter().position(|id| *id == t2).unwrap();
    assert_eq!(p1.abs_diff(p2), 1);
    let in_c2: Vec<TaskId> = board.tasks_in_column(c2).map(|t| t.id).collect();
    assert_eq!(in_c2.len(), 2);
}

#[test]
fn test_delete_column_leaves_exactly_other_tasks() {
    let mut board = Board::new();
    let c1 = board.create_column();
    let c2 = board.create_column();
    board.create_task(c1);
    let t2 = board.create_task(c2);

    board.delete_column(c1);

    assert_eq!(board.tasks().len(), 1);
    assert_eq!(board.tasks()[0].id, t2);
    assert_eq!(board.tasks()[0].column_id, c2);
}

#[test]
fn test_update_task_is_idempotent() {
    let mut board = Board::new();
    let col = board.create_column();
    let task = board.create_task(col);

    board.update_task(task, "Same");
    let first = board.tasks().to_vec();
    board.update_task(task, "Same");
    board.update_task(task, "Same");

    assert_eq!(board.tasks(), first.as_slice());
}
