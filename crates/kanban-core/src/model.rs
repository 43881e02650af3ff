//! Board Models
//!
//! Columns and tasks as held by the board store.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Core trait for everything stored in an ordered board list
pub trait Entity: Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash + fmt::Debug;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Column identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnId(pub u64);

/// Task identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "column#{}", self.0)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "task#{}", self.0)
    }
}

/// A board column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
}

impl Column {
    pub fn new(id: ColumnId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }
}

impl Entity for Column {
    type Id = ColumnId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// A task card. `column_id` is a plain reference; the board does not own
/// tasks through their column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    #[serde(rename = "columnId")]
    pub column_id: ColumnId,
    pub content: String,
}

impl Task {
    pub fn new(id: TaskId, column_id: ColumnId, content: impl Into<String>) -> Self {
        Self {
            id,
            column_id,
            content: content.into(),
        }
    }
}

impl Entity for Task {
    type Id = TaskId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_serializes_column_id_in_camel_case() {
        let task = Task::new(TaskId(7), ColumnId(3), "Write docs");
        let json = serde_json::to_value(&task).unwrap();

        assert_eq!(json["id"], 7);
        assert_eq!(json["columnId"], 3);
        assert_eq!(json["content"], "Write docs");
    }

    #[test]
    fn test_ids_display_with_kind() {
        assert_eq!(ColumnId(4).to_string(), "column#4");
        assert_eq!(TaskId(9).to_string(), "task#9");
    }
}
