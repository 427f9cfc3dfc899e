//! Plan Execution
//!
//! Runs a [`MovePlan`] against the API one step at a time.

use crate::api::TaskApi;

use super::plan::MovePlan;
use super::ReorderError;

/// Issue each step in order, waiting for its response before the next.
///
/// Stops at the first failure; steps already applied stay applied. Returns
/// the number of steps the server accepted.
pub async fn execute_plan<A>(api: &A, plan: &MovePlan) -> Result<usize, ReorderError>
where
    A: TaskApi + ?Sized,
{
    for (index, step) in plan.steps.iter().enumerate() {
        log::debug!("move step {}/{}: task {} {}", index + 1, plan.len(), step.id, step.direction);
        if let Err(source) = api.move_step(step.id, step.direction).await {
            log::warn!("move step {}/{} for task {} failed: {}", index + 1, plan.len(), step.id, source);
            return Err(ReorderError::Remote { applied: index, source });
        }
    }
    Ok(plan.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reorder::plan::plan_move;
    use crate::task::{Direction, TaskId};
    use crate::testing::{numbered_tasks, Call, FakeApi};
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_steps_run_in_order() {
        let api = FakeApi::new(numbered_tasks(5));
        let plan = plan_move(&api.snapshot(), TaskId(2), 4).unwrap();
        assert_eq!(execute_plan(&api, &plan).await, Ok(3));
        assert_eq!(api.calls(), vec![Call::MoveStep(TaskId(2), Direction::Down); 3]);
        assert_eq!(api.ids(), vec![1, 3, 4, 5, 2]);
    }

    #[tokio::test]
    async fn test_stops_at_first_failure() {
        let api = FakeApi::new(numbered_tasks(5));
        api.fail_move_call(2);
        let plan = plan_move(&api.snapshot(), TaskId(2), 4).unwrap();
        let err = execute_plan(&api, &plan).await.unwrap_err();
        assert!(matches!(err, ReorderError::Remote { applied: 1, .. }));
        assert_eq!(api.calls().len(), 2);
        assert_eq!(api.ids(), vec![1, 3, 2, 4, 5]);
    }

    #[tokio::test]
    async fn test_empty_plan_makes_no_calls() {
        let api = FakeApi::new(numbered_tasks(2));
        let plan = plan_move(&api.snapshot(), TaskId(1), 0).unwrap();
        assert_eq!(execute_plan(&api, &plan).await, Ok(0));
        assert!(api.calls().is_empty());
    }
}
