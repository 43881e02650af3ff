//! List reordering helpers
//!
//! Display order is the order of the backing `Vec`, so every reorder is a
//! splice-move inside one list.

use crate::model::Entity;

/// Move the element at `from` to index `to`, shifting everything in between
/// by one. Returns false when either index is out of bounds or they are equal.
pub fn array_move<T>(list: &mut [T], from: usize, to: usize) -> bool {
    if from >= list.len() || to >= list.len() || from == to {
        return false;
    }
    if from < to {
        list[from..=to].rotate_left(1);
    } else {
        list[to..=from].rotate_right(1);
    }
    true
}

/// Index of the entity with `id`
pub fn position_of<E: Entity>(list: &[E], id: E::Id) -> Option<usize> {
    list.iter().position(|e| e.id() == id)
}
