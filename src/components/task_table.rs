//! Task Table Component
//!
//! Tasks in priority order with drag-to-reorder.
//! Uses leptos-dragdrop; a drop is turned into single-step moves by the
//! reorder controller and the list is re-fetched afterwards.

use leptos::prelude::*;
use leptos::task::spawn_local;
use task_core::{ReorderController, TaskId};

use crate::commands;
use crate::components::TaskRow;
use crate::context::AppContext;
use crate::store::{use_task_store, TaskListStateStoreFields};

use leptos_dragdrop::*;

#[component]
pub fn TaskTable() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_task_store();

    // Create DnD signals
    let dnd = create_dnd_signals::<TaskId>();

    // Bind global mouseup handler for dropping
    bind_global_mouseup(dnd, move |dragged_id, target_id| {
        let snapshot = store.tasks().get_untracked();
        ctx.set_action_message(None);
        log::debug!("[DND] Drop: dragged={}, target={}", dragged_id, target_id);
        spawn_local(async move {
            let api = commands::api();
            let report = ReorderController::new(&api).drop_on(&snapshot, dragged_id, target_id).await;
            log::debug!("[DND] Reorder done after {} steps", report.steps_applied);
            ctx.apply_reorder(report);
            dnd.finish_reorder();
        });
    });

    // Escape abandons a drag in progress
    let escape = window_event_listener(leptos::ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            end_drag(&dnd);
        }
    });
    on_cleanup(move || escape.remove());

    let rows = move || {
        let tasks = store.tasks().get();
        let len = tasks.len();
        tasks
            .into_iter()
            .enumerate()
            .map(|(index, task)| (index, len, task))
            .collect::<Vec<_>>()
    };

    view! {
        <div class=move || if dnd.is_reordering() { "table-wrap busy" } else { "table-wrap" }>
            <Show when=move || dnd.is_reordering()>
                <span class="busy-indicator">"Reordenando..."</span>
            </Show>
            <table class="task-table">
                <thead>
                    <tr>
                        <th>"Nome"</th>
                        <th>"Custo"</th>
                        <th>"Data limite"</th>
                        <th class="actions-col">"Acoes"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=rows
                        key=|(index, len, task)| {
                            // Position and length decide which move buttons a row offers
                            (
                                *index,
                                *len,
                                task.id,
                                task.name.clone(),
                                task.cost.to_bits(),
                                task.due_date,
                            )
                        }
                        children=move |(index, len, task)| {
                            view! { <TaskRow task=task index=index len=len dnd=dnd /> }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
