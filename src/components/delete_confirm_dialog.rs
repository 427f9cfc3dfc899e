//! Delete Confirm Dialog Component
//!
//! Asks before removing the task in `AppContext::pending_delete`.

use leptos::prelude::*;
use leptos::task::spawn_local;
use task_core::api::DELETE_FAILED;
use task_core::TaskApi;

use crate::commands;
use crate::context::AppContext;
use crate::store::{use_task_store, TaskListStateStoreFields};

#[component]
pub fn DeleteConfirmDialog() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_task_store();
    let (deleting, set_deleting) = signal(false);

    let task_name = move || {
        let id = ctx.pending_delete.get()?;
        store.tasks().with(|tasks| tasks.iter().find(|t| t.id == id).map(|t| t.name.clone()))
    };

    let confirm = move |_: web_sys::MouseEvent| {
        let Some(id) = ctx.pending_delete.get_untracked() else { return };
        set_deleting.set(true);
        ctx.set_action_message(None);
        spawn_local(async move {
            let result = commands::api().delete(id).await;
            set_deleting.set(false);
            match result {
                Ok(()) => {
                    log::info!("[DELETE] Removed task {}", id);
                    ctx.close_delete();
                    ctx.reload();
                }
                Err(err) => {
                    log::warn!("[DELETE] Task {} failed: {}", id, err);
                    ctx.set_action_message(Some(err.user_message(DELETE_FAILED)));
                }
            }
        });
    };

    view! {
        <Show when=move || ctx.pending_delete.with(|p| p.is_some())>
            <div class="modal-backdrop">
                <div class="modal modal-small">
                    <h2>"Excluir tarefa"</h2>
                    <p>
                        "Deseja realmente excluir "
                        <strong>{move || task_name().unwrap_or_default()}</strong>
                        "?"
                    </p>
                    <div class="modal-actions">
                        <button
                            type="button"
                            class="ghost-btn"
                            disabled=move || deleting.get()
                            on:click=move |_| ctx.close_delete()
                        >
                            "Nao"
                        </button>
                        <button
                            type="button"
                            class="danger-btn"
                            disabled=move || deleting.get()
                            on:click=confirm
                        >
                            "Sim"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
