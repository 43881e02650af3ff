//! Task Card Component
//!
//! Single task inside a column. Click to edit, hover to reveal delete.

use kanban_core::{ColumnId, DragItem, TaskId};
use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::context::use_board;
use crate::store::{store_task_content, use_app_store, AppStateStoreFields};

#[component]
pub fn TaskCard(
    task_id: TaskId,
    /// Column the card is rendered in; hover falls back to it on leave
    column_id: ColumnId,
    dnd: DndSignals<DragItem>,
    on_over: Callback<DragItem>,
) -> impl IntoView {
    let ctx = use_board();
    let store = use_app_store();
    let item = DragItem::Task(task_id);

    let (edit_mode, set_edit_mode) = signal(false);
    let (mouse_is_over, set_mouse_is_over) = signal(false);

    let content = move || store_task_content(&store, task_id).unwrap_or_default();

    // DnD handlers
    let on_mousedown = make_on_mousedown(dnd, item);
    let on_target_enter = make_on_target_mouseenter(dnd, item, on_over);
    let on_target_leave = make_on_mouseleave(dnd, Some(DragItem::Column(column_id)), on_over);

    let is_dragging = move || store.drag().with(|d| d.active_item() == Some(item));

    let set_editing = move |editing: bool| {
        set_edit_mode.set(editing);
        set_mouse_is_over.set(false);
    };

    view! {
        <div
            class=move || if is_dragging() { "task-card dragging" } else { "task-card" }
            on:mousedown=move |ev| {
                if !edit_mode.get_untracked() {
                    on_mousedown(ev);
                }
            }
            on:mouseenter=move |ev| {
                set_mouse_is_over.set(true);
                on_target_enter(ev);
            }
            on:mouseleave=move |ev| {
                set_mouse_is_over.set(false);
                on_target_leave(ev);
            }
            on:click=move |_| {
                if !edit_mode.get_untracked() && !dnd.drag_just_ended_read.get_untracked() {
                    set_editing(true);
                }
            }
        >
            <Show
                when=move || edit_mode.get()
                fallback=move || view! {
                    <p class="task-content">{content}</p>
                    <Show when=move || mouse_is_over.get() && !is_dragging()>
                        <button
                            class="task-delete-btn"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                ctx.delete_task(task_id);
                            }
                        >
                            "🗑"
                        </button>
                    </Show>
                }
            >
                <textarea
                    class="task-content-input"
                    placeholder="Task content here"
                    autofocus=true
                    prop:value=content
                    on:input=move |ev| ctx.update_task(task_id, event_target_value(&ev))
                    on:blur=move |_| set_editing(false)
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ends_edit(&ev.key(), ev.shift_key()) {
                            ev.prevent_default();
                            set_editing(false);
                        }
                    }
                ></textarea>
            </Show>
        </div>
    }
}

/// Enter commits the edit; Shift+Enter inserts a newline
fn ends_edit(key: &str, shift: bool) -> bool {
    key == "Enter" && !shift
}
