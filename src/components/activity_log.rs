//! Activity Log Component
//!
//! Collapsible footer listing the most recent log lines.

use leptos::prelude::*;
use rolling_logger::LogBuffer;

use crate::store::{use_app_store, AppStateStoreFields};

/// Lines shown when expanded
const VISIBLE_LINES: usize = 20;

#[component]
pub fn ActivityLog(buffer: LogBuffer) -> impl IntoView {
    let store = use_app_store();
    let (expanded, set_expanded) = signal(false);

    // The buffer is not reactive; board changes are the refresh trigger
    let lines = Memo::new(move |_| {
        store.columns().track();
        store.tasks().track();
        store.drag().track();
        let all = buffer.lines();
        let skip = all.len().saturating_sub(VISIBLE_LINES);
        all.into_iter().skip(skip).collect::<Vec<_>>()
    });

    view! {
        <footer class="activity-log">
            <button class="activity-toggle" on:click=move |_| set_expanded.update(|v| *v = !*v)>
                {move || if expanded.get() { "▼ Activity" } else { "▶ Activity" }}
            </button>
            <Show when=move || expanded.get()>
                <ul class="activity-lines">
                    {move || lines.get().into_iter().map(|line| view! { <li>{line}</li> }).collect_view()}
                </ul>
            </Show>
        </footer>
    }
}
