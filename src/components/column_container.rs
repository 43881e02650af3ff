//! Column Container Component
//!
//! Header (drag handle, task count, editable title, delete), task list and
//! "Add Task" footer for one column.

use kanban_core::{ColumnId, DragItem};
use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::components::TaskCard;
use crate::context::use_board;
use crate::store::{store_column_tasks, store_column_title, use_app_store, AppStateStoreFields};

#[component]
pub fn ColumnContainer(
    column_id: ColumnId,
    dnd: DndSignals<DragItem>,
    on_over: Callback<DragItem>,
) -> impl IntoView {
    let ctx = use_board();
    let store = use_app_store();
    let item = DragItem::Column(column_id);

    let (edit_mode, set_edit_mode) = signal(false);

    let title = move || store_column_title(&store, column_id).unwrap_or_default();
    let tasks = Memo::new(move |_| store_column_tasks(&store, column_id));
    let task_count = move || tasks.with(|t| t.len());

    // DnD handlers
    let on_mousedown = make_on_mousedown(dnd, item);
    let on_mouseenter = make_on_target_mouseenter(dnd, item, on_over);
    let on_mouseleave = make_on_mouseleave(dnd, None, on_over);

    // Visual state
    let is_dragging = move || store.drag().with(|d| d.active_item() == Some(item));
    let is_drop_target = move || dnd.over_read.get() == Some(item);

    let container_class = move || {
        let mut c = String::from("column");
        if is_dragging() { c.push_str(" dragging"); }
        if is_drop_target() { c.push_str(" drop-target"); }
        c
    };

    view! {
        <div
            class=container_class
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        >
            <Show
                when=move || !is_dragging()
                fallback=|| view! { <div class="column-placeholder"></div> }
            >
                <div
                    class="column-header"
                    on:mousedown=move |ev| {
                        // no dragging while the title is being edited
                        if !edit_mode.get_untracked() {
                            on_mousedown(ev);
                        }
                    }
                    on:click=move |_| {
                        if !dnd.drag_just_ended_read.get_untracked() {
                            set_edit_mode.set(true);
                        }
                    }
                >
                    <div class="column-title">
                        <span class="task-count">{task_count}</span>
                        <Show
                            when=move || edit_mode.get()
                            fallback=move || view! { <span>{title}</span> }
                        >
                            <input
                                class="column-title-input"
                                prop:value=title
                                autofocus=true
                                on:input=move |ev| ctx.update_column(column_id, event_target_value(&ev))
                                on:blur=move |_| set_edit_mode.set(false)
                                on:keydown=move |ev: web_sys::KeyboardEvent| {
                                    if ev.key() == "Enter" {
                                        set_edit_mode.set(false);
                                    }
                                }
                            />
                        </Show>
                    </div>
                    <button
                        class="column-delete-btn"
                        title="Delete column"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            ctx.delete_column(column_id);
                        }
                    >
                        "🗑"
                    </button>
                </div>

                <div class="column-tasks">
                    <For
                        each=move || tasks.get()
                        key=|task| task.id
                        children=move |task| {
                            view! {
                                <TaskCard
                                    task_id=task.id
                                    column_id=column_id
                                    dnd=dnd
                                    on_over=on_over
                                />
                            }
                        }
                    />
                </div>

                <button class="add-task-btn" on:click=move |_| ctx.create_task(column_id)>
                    <span class="icon">"+"</span>
                    " Add Task"
                </button>
            </Show>
        </div>
    }
}
