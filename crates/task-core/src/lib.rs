//! Task List Core
//!
//! Browser-independent logic behind the priority task list:
//! - task: wire model
//! - date: typing mask and display/canonical date conversion
//! - draft: create/edit form state and validation
//! - submit: validation + create/update as one outcome
//! - reorder: move planning, step execution, re-fetch
//! - api: the remote collaborator and its error classes

pub mod api;
pub mod date;
pub mod draft;
pub mod format;
pub mod reorder;
pub mod submit;
pub mod task;

#[cfg(test)]
pub(crate) mod testing;

pub use api::{ApiError, ApiResult, TaskApi};
pub use draft::{Draft, EditorMode, Field, FieldErrors};
pub use reorder::{ReorderController, ReorderError, ReorderReport};
pub use submit::{submit_draft, SubmitOutcome};
pub use task::{Direction, Task, TaskId, TaskPayload};
