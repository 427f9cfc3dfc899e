//! Reorder Controller
//!
//! Turns button presses and drops into server-side moves, then re-fetches.
//! The local list is never reordered here; callers replace it with the
//! re-fetched one.

mod executor;
mod plan;

use thiserror::Error;

use crate::api::{ApiError, ApiResult, TaskApi, MOVE_FAILED};
use crate::task::{Direction, Task, TaskId};

pub use executor::execute_plan;
pub use plan::{move_controls, plan_move, plan_step, resolve_drop, MoveControls, MovePlan, MoveStep};

pub const MOVE_OUT_OF_RANGE: &str = "Tarefa nao pode ser movida nessa direcao.";
pub const MOVE_UNKNOWN_TASK: &str = "Tarefa nao encontrada.";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReorderError {
    #[error("task {0} is not in the list")]
    UnknownTask(TaskId),
    #[error("task {id} at index {index} cannot move {direction}")]
    OutOfRange { id: TaskId, index: usize, direction: Direction },
    #[error("target index {target} is outside a list of {len} tasks")]
    TargetOutOfRange { target: usize, len: usize },
    #[error("move failed after {applied} applied steps: {source}")]
    Remote { applied: usize, source: ApiError },
}

impl ReorderError {
    pub fn user_message(&self) -> String {
        match self {
            ReorderError::UnknownTask(_) => MOVE_UNKNOWN_TASK.to_string(),
            ReorderError::OutOfRange { .. } | ReorderError::TargetOutOfRange { .. } => MOVE_OUT_OF_RANGE.to_string(),
            ReorderError::Remote { source, .. } => source.user_message(MOVE_FAILED),
        }
    }
}

/// What a reorder action did and what the list should become
#[derive(Debug)]
pub struct ReorderReport {
    /// Steps the server accepted
    pub steps_applied: usize,
    pub error: Option<ReorderError>,
    /// Result of the re-fetch, when one was made
    pub refreshed: Option<ApiResult<Vec<Task>>>,
}

impl ReorderReport {
    fn unchanged() -> Self {
        Self { steps_applied: 0, error: None, refreshed: None }
    }

    fn rejected(error: ReorderError) -> Self {
        Self { steps_applied: 0, error: Some(error), refreshed: None }
    }

    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ReorderError::user_message)
    }
}

/// Runs reorder actions against a [`TaskApi`], one gesture at a time
pub struct ReorderController<'a, A: ?Sized> {
    api: &'a A,
}

impl<'a, A> ReorderController<'a, A>
where
    A: TaskApi + ?Sized,
{
    pub fn new(api: &'a A) -> Self {
        Self { api }
    }

    /// Up/down button: one adjacent swap, then a re-fetch.
    ///
    /// Out-of-range requests are reported without calling the API. A failed
    /// swap leaves the list as it is.
    pub async fn move_one_step(&self, snapshot: &[Task], id: TaskId, direction: Direction) -> ReorderReport {
        let plan = match plan_step(snapshot, id, direction) {
            Ok(plan) => plan,
            Err(err) => {
                log::warn!("rejected move: {}", err);
                return ReorderReport::rejected(err);
            }
        };

        match execute_plan(self.api, &plan).await {
            Ok(applied) => ReorderReport {
                steps_applied: applied,
                error: None,
                refreshed: Some(self.refresh().await),
            },
            Err(err) => ReorderReport::rejected(err),
        }
    }

    /// Drag-and-drop: move `id` to `target` and re-fetch, even after a partial failure.
    pub async fn move_to_position(&self, snapshot: &[Task], id: TaskId, target: usize) -> ReorderReport {
        let plan = match plan_move(snapshot, id, target) {
            Ok(plan) => plan,
            Err(err) => {
                log::warn!("rejected move: {}", err);
                return ReorderReport::rejected(err);
            }
        };
        if plan.is_empty() {
            return ReorderReport::unchanged();
        }

        let result = if self.api.supports_move_to() {
            log::debug!("moving task {} directly to index {}", id, target);
            self.api
                .move_to(id, target)
                .await
                .map(|()| plan.len())
                .map_err(|source| ReorderError::Remote { applied: 0, source })
        } else {
            execute_plan(self.api, &plan).await
        };

        let (steps_applied, error) = match result {
            Ok(applied) => {
                log::info!("moved task {} from {} to {}", id, plan.from, plan.to);
                (applied, None)
            }
            Err(err) => {
                let applied = match &err {
                    ReorderError::Remote { applied, .. } => *applied,
                    _ => 0,
                };
                (applied, Some(err))
            }
        };

        ReorderReport {
            steps_applied,
            error,
            refreshed: Some(self.refresh().await),
        }
    }

    /// A finished drop of `dragged` onto the row of `target`
    pub async fn drop_on(&self, snapshot: &[Task], dragged: TaskId, target: TaskId) -> ReorderReport {
        match resolve_drop(snapshot, dragged, target) {
            Some((_, to)) => self.move_to_position(snapshot, dragged, to).await,
            None => {
                log::debug!("drop of {} on {} ignored", dragged, target);
                ReorderReport::unchanged()
            }
        }
    }

    async fn refresh(&self) -> ApiResult<Vec<Task>> {
        let result = self.api.list().await;
        if let Err(err) = &result {
            log::warn!("re-fetch after move failed: {}", err);
        }
        result
    }
}
