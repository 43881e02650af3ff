//! Leptos DragDrop Utilities
//!
//! Simple drag-and-drop for Leptos using mouse events.
//! Uses movement threshold to distinguish click from drag.
//!
//! Generic over the drag key `K`: the same key type names both what is
//! dragged and what is hovered, so callers can tell columns from tasks.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// How long the post-drop click suppression flag stays raised
const JUST_ENDED_MS: u32 = 100;

/// DnD state signals
pub struct DndSignals<K: Send + Sync + 'static> {
    pub dragging_read: ReadSignal<Option<K>>,
    pub dragging_write: WriteSignal<Option<K>>,
    /// Key currently under the pointer while dragging
    pub over_read: ReadSignal<Option<K>>,
    pub over_write: WriteSignal<Option<K>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending key (mousedown but not yet dragging)
    pub pending_read: ReadSignal<Option<K>>,
    pub pending_write: WriteSignal<Option<K>>,
    /// Start position for movement detection
    pub start_read: ReadSignal<(i32, i32)>,
    pub start_write: WriteSignal<(i32, i32)>,
    /// Last pointer position, for overlays that follow the cursor
    pub pointer_read: ReadSignal<(i32, i32)>,
    pub pointer_write: WriteSignal<(i32, i32)>,
}

impl<K: Send + Sync + 'static> Clone for DndSignals<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: Send + Sync + 'static> Copy for DndSignals<K> {}

/// Gesture callbacks. `on_end` gets the dragged key and the hovered key,
/// `None` when released over no target.
pub struct DndCallbacks<K: Send + Sync + 'static> {
    pub on_start: Callback<K>,
    pub on_over: Callback<K>,
    pub on_end: Callback<(K, Option<K>)>,
}

impl<K: Send + Sync + 'static> Clone for DndCallbacks<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: Send + Sync + 'static> Copy for DndCallbacks<K> {}

pub fn create_dnd_signals<K>() -> DndSignals<K>
where
    K: Copy + PartialEq + Send + Sync + 'static,
{
    let (dragging_read, dragging_write) = signal(None::<K>);
    let (over_read, over_write) = signal(None::<K>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_read, pending_write) = signal(None::<K>);
    let (start_read, start_write) = signal((0i32, 0i32));
    let (pointer_read, pointer_write) = signal((0i32, 0i32));
    DndSignals {
        dragging_read,
        dragging_write,
        over_read,
        over_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_read,
        pending_write,
        start_read,
        start_write,
        pointer_read,
        pointer_write,
    }
}

/// True once the pointer has travelled more than `threshold` on either axis
pub fn exceeds_threshold(start: (i32, i32), current: (i32, i32), threshold: i32) -> bool {
    let dx = (current.0 - start.0).abs();
    let dy = (current.1 - start.1).abs();
    dx > threshold || dy > threshold
}

/// Hover target after the pointer leaves a nested target: the enclosing
/// target, unless that is the dragged key itself
pub fn hover_after_leave<K: PartialEq>(fallback: Option<K>, dragging: &K) -> Option<K> {
    fallback.filter(|k| k != dragging)
}

/// End drag operation
pub fn end_drag<K>(dnd: &DndSignals<K>)
where
    K: Copy + PartialEq + Send + Sync + 'static,
{
    dnd.dragging_write.set(None);
    dnd.over_write.set(None);
    dnd.pending_write.set(None);
    dnd.drag_just_ended_write.set(true);

    let clear = dnd.drag_just_ended_write;
    gloo_timers::callback::Timeout::new(JUST_ENDED_MS, move || {
        clear.set(false);
    })
    .forget();
}

/// Create mousedown handler for draggable elements
/// Records pending drag with start position
pub fn make_on_mousedown<K>(dnd: DndSignals<K>, key: K) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    K: Copy + PartialEq + Send + Sync + 'static,
{
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        // Ignore if target is an editable control or button
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlTextAreaElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
        }
        // Inner draggables win over their containers
        ev.stop_propagation();
        dnd.pending_write.set(Some(key));
        dnd.start_write.set((ev.client_x(), ev.client_y()));
    }
}

/// Create mouseenter handler for drop targets
pub fn make_on_target_mouseenter<K>(
    dnd: DndSignals<K>,
    key: K,
    on_over: Callback<K>,
) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    K: Copy + PartialEq + Send + Sync + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        let Some(dragging) = dnd.dragging_read.get_untracked() else {
            return;
        };
        // Don't report hovering over self
        if dragging != key {
            dnd.over_write.set(Some(key));
            on_over.run(key);
        }
    }
}

/// Create mouseleave handler. `fallback` is the enclosing target, if any.
pub fn make_on_mouseleave<K>(
    dnd: DndSignals<K>,
    fallback: Option<K>,
    on_over: Callback<K>,
) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    K: Copy + PartialEq + Send + Sync + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        let Some(dragging) = dnd.dragging_read.get_untracked() else {
            return;
        };
        // Nested targets fall back to their container
        let next = hover_after_leave(fallback, &dragging);
        dnd.over_write.set(next);
        if let Some(key) = next {
            on_over.run(key);
        }
    }
}

/// Bind global mousemove: starts the drag once the threshold is crossed and
/// tracks the pointer while dragging
fn bind_global_mousemove<K>(dnd: DndSignals<K>, threshold: i32, on_start: Callback<K>)
where
    K: Copy + PartialEq + Send + Sync + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let current = (ev.client_x(), ev.client_y());

        if dnd.dragging_read.get_untracked().is_some() {
            dnd.pointer_write.set(current);
            return;
        }

        // Pending drag that hasn't started yet
        if let Some(pending) = dnd.pending_read.get_untracked() {
            if exceeds_threshold(dnd.start_read.get_untracked(), current, threshold) {
                dnd.pointer_write.set(current);
                dnd.dragging_write.set(Some(pending));
                on_start.run(pending);
            }
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Bind global mouseup (drop detection) and mousemove (drag detection)
pub fn bind_global_handlers<K>(dnd: DndSignals<K>, threshold: i32, callbacks: DndCallbacks<K>)
where
    K: Copy + PartialEq + Send + Sync + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging = dnd.dragging_read.get_untracked();
        let over = dnd.over_read.get_untracked();

        // Clear pending state first
        dnd.pending_write.set(None);

        match dragging {
            // Actually dragging (not just clicking)
            Some(dragged) => {
                end_drag(&dnd);
                callbacks.on_end.run((dragged, over));
            }
            // Plain click; let the click event fire on the element
            None => end_drag(&dnd),
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();

    bind_global_mousemove(dnd, threshold, callbacks.on_start);
}
