//! Kanban Core
//!
//! Renderer-independent board state for the Kanban UI:
//! - model: columns, tasks and their identifiers
//! - board: the state store with change notification
//! - drag: the drag gesture state machine and its reorder rules
//! - config: user-tunable settings loaded from JSON

mod board;
mod config;
mod drag;
mod error;
mod events;
mod id;
mod model;
pub mod reorder;

pub use board::Board;
pub use config::BoardConfig;
pub use drag::{CommitPolicy, DragController, DragItem, DragKind, DragOutcome, DragPolicies, DragState};
pub use error::{BoardError, BoardResult};
pub use events::{BoardEvent, BoardView, SubscriptionId};
pub use model::{Column, ColumnId, Entity, Task, TaskId};
