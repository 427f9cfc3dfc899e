//! Task Row Component
//!
//! One table row with edit, delete and up/down controls.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::{make_on_mousedown, make_on_mouseleave, make_on_row_mouseenter, DndSignals};
use task_core::date::display_date;
use task_core::format::{format_currency, is_high_cost};
use task_core::reorder::move_controls;
use task_core::{Direction, ReorderController, Task, TaskId};

use crate::commands;
use crate::context::AppContext;
use crate::store::{use_task_store, TaskListStateStoreFields};

#[component]
pub fn TaskRow(
    task: Task,
    index: usize,
    len: usize,
    dnd: DndSignals<TaskId>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_task_store();

    let id = task.id;
    let controls = move_controls(index, len);
    let high_cost = is_high_cost(task.cost);

    // DnD handlers
    let on_mousedown = make_on_mousedown(dnd, id);
    let on_mouseenter = make_on_row_mouseenter(dnd, id);
    let on_mouseleave = make_on_mouseleave(dnd);

    // Visual state only; the list itself is untouched until the re-fetch
    let row_class = move || {
        let mut c = String::from("task-row");
        if high_cost { c.push_str(" high-cost"); }
        if dnd.is_dragging(id) { c.push_str(" dragging"); }
        if dnd.is_drop_target(id) { c.push_str(" drop-target"); }
        if dnd.is_reordering() { c.push_str(" locked"); }
        c
    };

    // Arrow moves share the drag's in-progress state, so only one sequence runs
    let move_task = move |direction: Direction| {
        if !dnd.begin_reorder() {
            log::debug!("[MOVE] Task {} ignored, reorder in progress", id);
            return;
        }
        let snapshot = store.tasks().get_untracked();
        ctx.set_action_message(None);
        spawn_local(async move {
            let api = commands::api();
            let report = ReorderController::new(&api).move_one_step(&snapshot, id, direction).await;
            ctx.apply_reorder(report);
            dnd.finish_reorder();
        });
    };

    let name = task.name.clone();
    let cost = format_currency(task.cost);
    let due_date = display_date(task.due_date);

    view! {
        <tr
            class=row_class
            on:mousedown=on_mousedown
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        >
            <td class="name-cell">{name}</td>
            <td>{cost}</td>
            <td>{due_date}</td>
            <td>
                <div class="row-actions">
                    <button
                        type="button"
                        class="ghost-btn"
                        on:click=move |_| {
                            // Swallow the click that ends a drag
                            if !dnd.drag_just_ended.get_untracked() {
                                ctx.open_edit(&task);
                            }
                        }
                    >
                        "Editar"
                    </button>
                    <button type="button" class="danger-btn" on:click=move |_| ctx.request_delete(id)>
                        "Excluir"
                    </button>
                    <Show when=move || controls.up>
                        <button
                            type="button"
                            class="arrow-btn"
                            disabled=move || dnd.is_reordering()
                            on:click=move |_| move_task(Direction::Up)
                        >
                            "↑"
                        </button>
                    </Show>
                    <Show when=move || controls.down>
                        <button
                            type="button"
                            class="arrow-btn"
                            disabled=move || dnd.is_reordering()
                            on:click=move |_| move_task(Direction::Down)
                        >
                            "↓"
                        </button>
                    </Show>
                </div>
            </td>
        </tr>
    }
}
