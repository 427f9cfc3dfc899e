//! Task Form Component
//!
//! Modal for creating a task or editing one.

use leptos::prelude::*;
use leptos::task::spawn_local;
use task_core::{submit_draft, EditorMode, Field, FieldErrors, SubmitOutcome};

use crate::commands;
use crate::components::DateField;
use crate::context::AppContext;
use crate::store::{use_task_store, TaskListStateStoreFields};

/// Label, control and the error under it
#[component]
fn FieldBlock(label: &'static str, field: Field, children: Children) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let error = move || ctx.field_errors.with(|errors| errors.get(field).map(str::to_string));

    view! {
        <div class=move || if error().is_some() { "field has-error" } else { "field" }>
            <span class="field-label">{label}</span>
            {children()}
            {move || error().map(|message| view! { <span class="field-error">{message}</span> })}
        </div>
    }
}

#[component]
pub fn TaskForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_task_store();
    let (saving, set_saving) = signal(false);

    // Masked date text mirrored out of the draft for the date field
    let due_date = RwSignal::new(String::new());
    Effect::new(move |_| {
        let masked = ctx.draft.with(|d| d.due_date.clone());
        due_date.set(masked);
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(mode) = ctx.editor.get_untracked() else { return };
        if saving.get_untracked() {
            return;
        }
        let draft = ctx.draft.get_untracked();
        let tasks = store.tasks().get_untracked();
        set_saving.set(true);
        ctx.set_action_message(None);
        ctx.field_errors.set(FieldErrors::new());

        spawn_local(async move {
            let api = commands::api();
            let outcome = submit_draft(&api, &draft, mode, &tasks).await;
            set_saving.set(false);
            ctx.field_errors.set(outcome.field_errors());
            match outcome {
                SubmitOutcome::Saved(_) => {
                    ctx.close_editor();
                    ctx.reload();
                }
                SubmitOutcome::Failure(message) => ctx.set_action_message(Some(message)),
                SubmitOutcome::ValidationFailed(_) | SubmitOutcome::Conflict(_) => {}
            }
        });
    };

    let title = move || match ctx.editor.get() {
        Some(EditorMode::Edit(_)) => "Editar tarefa",
        _ => "Nova tarefa",
    };

    view! {
        <Show when=move || ctx.editor.with(|e| e.is_some())>
            <div class="modal-backdrop">
                <form class="modal" on:submit=on_submit novalidate=true>
                    <h2>{title}</h2>

                    <FieldBlock label="Nome" field=Field::Name>
                        <input
                            type="text"
                            prop:value=move || ctx.draft.with(|d| d.name.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                ctx.draft.update(|d| d.name = value);
                            }
                        />
                    </FieldBlock>

                    <FieldBlock label="Custo (R$)" field=Field::Cost>
                        <input
                            type="number"
                            min="0"
                            step="0.01"
                            prop:value=move || ctx.draft.with(|d| d.cost.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                ctx.draft.update(|d| d.cost = value);
                            }
                        />
                    </FieldBlock>

                    <FieldBlock label="Data limite" field=Field::DueDate>
                        <DateField
                            value=due_date
                            on_input=move |raw: String| {
                                ctx.draft.update(|d| d.set_due_date_input(&raw));
                                due_date.set(ctx.draft.with_untracked(|d| d.due_date.clone()));
                            }
                            on_pick=move |iso: String| ctx.draft.update(|d| d.set_due_date_from_picker(&iso))
                            picker_value=Signal::derive(move || ctx.draft.with(|d| d.picker_value()))
                        />
                    </FieldBlock>

                    <div class="modal-actions">
                        <button type="button" class="ghost-btn" on:click=move |_| ctx.close_editor()>
                            "Cancelar"
                        </button>
                        <button type="submit" class="primary-btn" disabled=move || saving.get()>
                            {move || if saving.get() { "Salvando..." } else { "Salvar" }}
                        </button>
                    </div>
                </form>
            </div>
        </Show>
    }
}
