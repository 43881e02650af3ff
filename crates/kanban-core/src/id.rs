//! Identifier generation
//!
//! One process-wide counter backs both id kinds, so a column id is never
//! reused as a task id and two boards never hand out the same id.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::model::{ColumnId, TaskId};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

fn next_raw() -> u64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

impl ColumnId {
    /// Allocate a fresh column id
    pub fn generate() -> Self {
        Self(next_raw())
    }
}

impl TaskId {
    /// Allocate a fresh task id
    pub fn generate() -> Self {
        Self(next_raw())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generated_ids_are_unique_across_kinds() {
        let mut seen = HashSet::new();
        for _ in 0..1000 {
            assert!(seen.insert(ColumnId::generate().0));
            assert!(seen.insert(TaskId::generate().0));
        }
    }

    #[test]
    fn test_generated_ids_increase() {
        let a = TaskId::generate();
        let b = TaskId::generate();
        assert!(b > a);
    }
}
