//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use task_core::api::LOAD_FAILED;
use task_core::{Draft, EditorMode, FieldErrors, ReorderReport, Task, TaskId};

use crate::store::{store_replace_tasks, store_set_action_message, store_set_load_error, store_set_loading, TaskStore};

/// Numbers list fetches so only the newest response is applied
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct LoadSequence {
    latest: u64,
}

impl LoadSequence {
    /// Start a fetch; any response for an earlier ticket becomes stale
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.latest
    }
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload tasks from the API - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload tasks from the API - write
    set_reload_trigger: WriteSignal<u32>,
    /// Open create/edit form, if any
    pub editor: RwSignal<Option<EditorMode>>,
    /// Form contents while the editor is open
    pub draft: RwSignal<Draft>,
    /// Errors shown under the form fields
    pub field_errors: RwSignal<FieldErrors>,
    /// Task awaiting delete confirmation
    pub pending_delete: RwSignal<Option<TaskId>>,
    loads: StoredValue<LoadSequence>,
    store: TaskStore,
}

impl AppContext {
    pub fn new(reload_trigger: (ReadSignal<u32>, WriteSignal<u32>), store: TaskStore) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            editor: RwSignal::new(None),
            draft: RwSignal::new(Draft::empty()),
            field_errors: RwSignal::new(FieldErrors::new()),
            pending_delete: RwSignal::new(None),
            loads: StoredValue::new(LoadSequence::default()),
            store,
        }
    }

    /// Trigger a reload of tasks
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Ticket for a list fetch about to start
    pub fn begin_load(&self) -> u64 {
        let mut ticket = 0;
        self.loads.update_value(|seq| ticket = seq.begin());
        ticket
    }

    /// Whether the fetch holding `ticket` is still the newest one
    pub fn is_current_load(&self, ticket: u64) -> bool {
        self.loads.with_value(|seq| seq.is_current(ticket))
    }

    pub fn set_action_message(&self, message: Option<String>) {
        store_set_action_message(&self.store, message);
    }

    /// Open the form with an empty draft
    pub fn open_create(&self) {
        self.open_editor(EditorMode::Create, Draft::empty());
    }

    /// Open the form prefilled from `task`
    pub fn open_edit(&self, task: &Task) {
        self.open_editor(EditorMode::Edit(task.id), Draft::from_task(task));
    }

    fn open_editor(&self, mode: EditorMode, draft: Draft) {
        self.draft.set(draft);
        self.field_errors.set(FieldErrors::new());
        self.set_action_message(None);
        self.editor.set(Some(mode));
    }

    /// Close the form and discard the draft
    pub fn close_editor(&self) {
        self.editor.set(None);
        self.draft.set(Draft::empty());
        self.field_errors.set(FieldErrors::new());
    }

    pub fn request_delete(&self, id: TaskId) {
        self.pending_delete.set(Some(id));
        self.set_action_message(None);
    }

    pub fn close_delete(&self) {
        self.pending_delete.set(None);
    }

    /// Show the outcome of a reorder and take the re-fetched list, if any
    pub fn apply_reorder(&self, report: ReorderReport) {
        if let Some(message) = report.error_message() {
            self.set_action_message(Some(message));
        }
        if report.refreshed.is_some() {
            // The re-fetch is newer than any list load still in flight
            self.begin_load();
            store_set_loading(&self.store, false);
        }
        match report.refreshed {
            Some(Ok(tasks)) => {
                store_set_load_error(&self.store, None);
                store_replace_tasks(&self.store, tasks);
            }
            Some(Err(err)) => store_set_load_error(&self.store, Some(err.user_message(LOAD_FAILED))),
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_load_is_current() {
        let mut seq = LoadSequence::default();
        let first = seq.begin();
        let second = seq.begin();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn test_stale_response_after_newer_start() {
        let mut seq = LoadSequence::default();
        let slow = seq.begin();
        // A newer list arrives through another path before the slow one returns
        seq.begin();
        assert!(!seq.is_current(slow));
        assert!(!seq.is_current(0));
    }
}
