//! Kanban Board Component
//!
//! Row of columns plus the "Add Column" button. Owns the DnD signals and
//! wires the pointer layer to the board context.

use kanban_core::DragItem;
use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::components::{ColumnContainer, DragOverlay};
use crate::context::use_board;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn KanbanBoard() -> impl IntoView {
    let ctx = use_board();
    let store = use_app_store();

    // Create DnD signals
    let dnd = create_dnd_signals::<DragItem>();

    let callbacks = DndCallbacks {
        on_start: Callback::new(move |item: DragItem| ctx.drag_start(item)),
        on_over: Callback::new(move |target: DragItem| ctx.drag_over(target)),
        on_end: Callback::new(move |(active, over): (DragItem, Option<DragItem>)| {
            ctx.drag_end(active, over)
        }),
    };
    bind_global_handlers(dnd, ctx.activation_distance_px(), callbacks);

    let column_ids = move || store.columns().with(|cols| cols.iter().map(|c| c.id).collect::<Vec<_>>());

    view! {
        <div class="board-scroll">
            <div class="board">
                <div class="board-columns">
                    <For
                        each=column_ids
                        key=|id| *id
                        children=move |id| {
                            view! {
                                <ColumnContainer
                                    column_id=id
                                    dnd=dnd
                                    on_over=callbacks.on_over
                                />
                            }
                        }
                    />
                </div>

                <button class="add-column-btn" on:click=move |_| ctx.create_column()>
                    <span class="icon">"⊕"</span>
                    " Add Column"
                </button>
            </div>

            <DragOverlay dnd=dnd />
        </div>
    }
}
