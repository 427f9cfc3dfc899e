//! Task List State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use task_core::Task;

/// Page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TaskListState {
    /// Tasks in priority order, exactly as last fetched
    pub tasks: Vec<Task>,
    /// A list fetch is in flight
    pub loading: bool,
    /// Why the last fetch failed
    pub load_error: Option<String>,
    /// Result of the last create/edit/delete/move, cleared by the next action
    pub action_message: Option<String>,
}

/// Type alias for the store
pub type TaskStore = Store<TaskListState>;

/// Get the task store from context
pub fn use_task_store() -> TaskStore {
    expect_context::<TaskStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the list with a fetched one; the only way the list changes
pub fn store_replace_tasks(store: &TaskStore, tasks: Vec<Task>) {
    *store.tasks().write() = tasks;
}

pub fn store_set_loading(store: &TaskStore, loading: bool) {
    *store.loading().write() = loading;
}

pub fn store_set_action_message(store: &TaskStore, message: Option<String>) {
    *store.action_message().write() = message;
}

pub fn store_set_load_error(store: &TaskStore, message: Option<String>) {
    *store.load_error().write() = message;
}
