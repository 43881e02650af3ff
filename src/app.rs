//! Kanban Board App
//!
//! Root component: provides the store and board context, then renders the
//! board and the activity log.

use kanban_core::BoardConfig;
use leptos::prelude::*;
use reactive_stores::Store;
use rolling_logger::LogBuffer;

use crate::components::{ActivityLog, KanbanBoard};
use crate::context::BoardContext;
use crate::store::{AppState, AppStore};

#[component]
pub fn App(config: BoardConfig, log_buffer: Option<LogBuffer>) -> impl IntoView {
    let store: AppStore = Store::new(AppState::default());
    provide_context(store);
    provide_context(BoardContext::new(config, store));

    view! {
        <div class="app-layout">
            <KanbanBoard />
            {log_buffer.map(|buffer| view! { <ActivityLog buffer=buffer /> })}
        </div>
    }
}
