//! UI Components
//!
//! Reusable Leptos components.

mod activity_log;
mod column_container;
mod drag_overlay;
mod kanban_board;
mod task_card;

pub use activity_log::ActivityLog;
pub use column_container::ColumnContainer;
pub use drag_overlay::DragOverlay;
pub use kanban_board::KanbanBoard;
pub use task_card::TaskCard;
