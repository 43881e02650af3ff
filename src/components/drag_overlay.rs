//! Drag Overlay Component
//!
//! Read-only preview of the dragged column or task that follows the pointer.

use kanban_core::{DragItem, DragState};
use leptos::prelude::*;
use leptos_dragdrop::DndSignals;

use crate::store::{store_column_tasks, use_app_store, AppStateStoreFields};

#[component]
pub fn DragOverlay(dnd: DndSignals<DragItem>) -> impl IntoView {
    let store = use_app_store();

    let style = move || {
        let (x, y) = dnd.pointer_read.get();
        format!("left: {}px; top: {}px;", x, y)
    };

    move || match store.drag().get() {
        DragState::Idle => ().into_any(),
        DragState::DraggingColumn(column) => {
            let tasks = store_column_tasks(&store, column.id);
            view! {
                <div class="drag-overlay" style=style>
                    <div class="column overlay-column">
                        <div class="column-header">
                            <div class="column-title">
                                <span class="task-count">{tasks.len()}</span>
                                <span>{column.title}</span>
                            </div>
                        </div>
                        <div class="column-tasks">
                            {tasks
                                .into_iter()
                                .map(|task| view! { <div class="task-card"><p class="task-content">{task.content}</p></div> })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            }
            .into_any()
        }
        DragState::DraggingTask(task) => view! {
            <div class="drag-overlay" style=style>
                <div class="task-card overlay-task">
                    <p class="task-content">{task.content}</p>
                </div>
            </div>
        }
        .into_any(),
    }
}
