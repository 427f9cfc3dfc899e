//! Priority Task List App
//!
//! Page layout, list loading and the modals.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use task_core::api::LOAD_FAILED;
use task_core::TaskApi;

use crate::commands;
use crate::components::{DeleteConfirmDialog, StatusBanner, TaskForm, TaskTable};
use crate::context::AppContext;
use crate::store::{store_replace_tasks, store_set_load_error, store_set_loading, TaskListState, TaskListStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(TaskListState::default());
    let ctx = AppContext::new(signal(0u32), store);

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Load tasks on mount and whenever the trigger changes; late responses are dropped
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        let ticket = ctx.begin_load();
        log::debug!("[APP] Loading tasks, trigger={}, ticket={}", trigger, ticket);
        store_set_loading(&store, true);
        store_set_load_error(&store, None);
        spawn_local(async move {
            let result = commands::api().list().await;
            if !ctx.is_current_load(ticket) {
                log::debug!("[APP] Dropping stale load, ticket={}", ticket);
                return;
            }
            match result {
                Ok(loaded) => {
                    log::debug!("[APP] Loaded {} tasks", loaded.len());
                    store_replace_tasks(&store, loaded);
                }
                Err(err) => {
                    log::warn!("[APP] Loading tasks failed: {}", err);
                    store_set_load_error(&store, Some(err.user_message(LOAD_FAILED)));
                }
            }
            store_set_loading(&store, false);
        });
    });

    view! {
        <div class="page">
            <div class="page-inner">
                <header class="page-header">
                    <div>
                        <p class="eyebrow">"Lista de prioridades"</p>
                        <h1>"Gestao de tarefas"</h1>
                    </div>
                    <button type="button" class="primary-btn" on:click=move |_| ctx.open_create()>
                        "Nova tarefa"
                    </button>
                </header>

                <StatusBanner kind="error" message=Signal::derive(move || store.load_error().get()) />
                <StatusBanner kind="warning" message=Signal::derive(move || store.action_message().get()) />

                <section class="card">
                    <div class="card-header">
                        <h2>"Tarefas cadastradas"</h2>
                        <Show when=move || store.loading().get()>
                            <span class="muted">"Carregando..."</span>
                        </Show>
                    </div>
                    <TaskTable />
                </section>
            </div>

            <TaskForm />
            <DeleteConfirmDialog />
        </div>
    }
}
