//! Leptos DragDrop Utilities
//!
//! Row reordering for Leptos lists using mouse events.
//! Uses movement threshold to distinguish click from drag.

pub mod gesture;

use leptos::prelude::*;
use wasm_bindgen::JsCast;

pub use gesture::Gesture;

/// Row key usable in DnD signals
pub trait DragKey: Copy + PartialEq + Send + Sync + 'static {}

impl<T: Copy + PartialEq + Send + Sync + 'static> DragKey for T {}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals<K: DragKey> {
    /// Gesture state machine; rows read it for styling
    pub gesture: RwSignal<Gesture<K>>,
    /// True briefly after a drag so the trailing click can be ignored
    pub drag_just_ended: RwSignal<bool>,
    /// Row under mousedown that has not moved far enough to drag yet
    pending: RwSignal<Option<K>>,
    /// Mousedown position for movement detection
    start: RwSignal<(i32, i32)>,
}

impl<K: DragKey> DndSignals<K> {
    pub fn is_dragging(&self, id: K) -> bool {
        self.gesture.with(|g| g.dragging_id() == Some(id))
    }

    pub fn is_drop_target(&self, id: K) -> bool {
        self.gesture.with(|g| g.drop_target() == Some(id))
    }

    /// Drags are disabled while this is true
    pub fn is_reordering(&self) -> bool {
        self.gesture.with(|g| g.is_reordering())
    }

    /// Enter the reordering state for a move not started by a drop.
    /// Returns false if a drag or another reorder holds the list.
    pub fn begin_reorder(&self) -> bool {
        let mut claimed = false;
        self.gesture.update(|g| claimed = g.begin());
        claimed
    }

    /// Call once the moves for a released drag or [`DndSignals::begin_reorder`] have completed or failed
    pub fn finish_reorder(&self) {
        self.gesture.update(|g| g.finish());
    }
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

pub fn create_dnd_signals<K: DragKey>() -> DndSignals<K> {
    DndSignals {
        gesture: RwSignal::new(Gesture::Idle),
        drag_just_ended: RwSignal::new(false),
        pending: RwSignal::new(None),
        start: RwSignal::new((0, 0)),
    }
}

/// Mark the end of a drag and clear the flag after the trailing click
fn mark_drag_ended<K: DragKey>(dnd: &DndSignals<K>) {
    dnd.drag_just_ended.set(true);

    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), 100);
        cb.forget();
    }
}

/// Abandon the current drag without dropping
pub fn end_drag<K: DragKey>(dnd: &DndSignals<K>) {
    dnd.pending.set(None);
    if dnd.gesture.with_untracked(|g| g.is_dragging()) {
        dnd.gesture.update(|g| g.cancel());
        mark_drag_ended(dnd);
    }
}

/// Create mousedown handler for draggable rows
/// Records pending drag with start position
pub fn make_on_mousedown<K: DragKey>(dnd: DndSignals<K>, id: K) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 || dnd.gesture.with_untracked(|g| g.is_reordering()) {
            return;
        }
        // Ignore if target is input or button
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
        }
        dnd.pending.set(Some(id));
        dnd.start.set((ev.client_x(), ev.client_y()));
    }
}

/// Bind mousemove on document - starts drag if moved enough
fn bind_global_mousemove<K: DragKey>(dnd: DndSignals<K>) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let Some(pending) = dnd.pending.get_untracked() else { return };
        if dnd.gesture.with_untracked(|g| g.is_dragging()) {
            return;
        }

        let (start_x, start_y) = dnd.start.get_untracked();
        let dx = (ev.client_x() - start_x).abs();
        let dy = (ev.client_y() - start_y).abs();
        if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
            let mut started = false;
            dnd.gesture.update(|g| started = g.start(pending));
            if !started {
                dnd.pending.set(None);
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

/// Create mouseenter handler for rows (become drop target)
pub fn make_on_row_mouseenter<K: DragKey>(dnd: DndSignals<K>, id: K) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        dnd.gesture.maybe_update(|g| g.hover(id));
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave<K: DragKey>(dnd: DndSignals<K>) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        dnd.gesture.maybe_update(|g| {
            let marked = g.drop_target().is_some();
            g.leave();
            marked
        });
    }
}

/// Bind global mouseup handler for drop detection.
///
/// `on_drop(dragged, target)` runs when a drag is released over another row;
/// the gesture is then `Reordering` until [`DndSignals::finish_reorder`].
pub fn bind_global_mouseup<K, F>(dnd: DndSignals<K>, on_drop: F)
where
    K: DragKey,
    F: Fn(K, K) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        dnd.pending.set(None);
        if !dnd.gesture.with_untracked(|g| g.is_dragging()) {
            // Not dragging - click event will fire naturally on the element
            return;
        }

        let mut released = None;
        dnd.gesture.update(|g| released = g.release());
        mark_drag_ended(&dnd);
        if let Some((dragged, target)) = released {
            on_drop(dragged, target);
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();

    // Also bind global mousemove
    bind_global_mousemove(dnd);
}
