//! Board errors
//!
//! Only the strict `try_*` operations surface these. The permissive board
//! operations log them and carry on.

use crate::model::{ColumnId, TaskId};

/// Common result type for board operations
pub type BoardResult<T> = Result<T, BoardError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("column not found: {0}")]
    ColumnNotFound(ColumnId),
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
