//! Move Planning
//!
//! Pure translation of a position change into single-step moves, computed
//! from a snapshot of the list taken when the gesture happened.

use crate::task::{index_of, Direction, Task, TaskId};

use super::ReorderError;

/// One adjacent swap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveStep {
    pub id: TaskId,
    pub direction: Direction,
}

/// Ordered steps that take `id` from index `from` to index `to`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovePlan {
    pub id: TaskId,
    pub from: usize,
    pub to: usize,
    pub steps: Vec<MoveStep>,
}

impl MovePlan {
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }
}

/// Which move controls a row may offer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveControls {
    pub up: bool,
    pub down: bool,
}

/// The first row never moves up, the last never moves down
pub fn move_controls(index: usize, len: usize) -> MoveControls {
    MoveControls {
        up: index > 0 && index < len,
        down: index + 1 < len,
    }
}

/// Plan a single button-press move, rejecting moves past either end
pub fn plan_step(tasks: &[Task], id: TaskId, direction: Direction) -> Result<MovePlan, ReorderError> {
    let from = index_of(tasks, id).ok_or(ReorderError::UnknownTask(id))?;
    let controls = move_controls(from, tasks.len());
    let to = match direction {
        Direction::Up if controls.up => from - 1,
        Direction::Down if controls.down => from + 1,
        _ => return Err(ReorderError::OutOfRange { id, index: from, direction }),
    };
    Ok(MovePlan {
        id,
        from,
        to,
        steps: vec![MoveStep { id, direction }],
    })
}

/// Plan moving `id` to `target` as `|target - from|` steps in one direction
pub fn plan_move(tasks: &[Task], id: TaskId, target: usize) -> Result<MovePlan, ReorderError> {
    let from = index_of(tasks, id).ok_or(ReorderError::UnknownTask(id))?;
    if target >= tasks.len() {
        return Err(ReorderError::TargetOutOfRange { target, len: tasks.len() });
    }
    let direction = if target > from { Direction::Down } else { Direction::Up };
    let steps = vec![MoveStep { id, direction }; from.abs_diff(target)];
    Ok(MovePlan { id, from, to: target, steps })
}

/// Resolve a drop of `dragged` onto the row of `target` to `(from, to)` indices.
///
/// `None` when the gesture should do nothing: dropped on itself, or either
/// task is no longer in the list.
pub fn resolve_drop(tasks: &[Task], dragged: TaskId, target: TaskId) -> Option<(usize, usize)> {
    if dragged == target {
        return None;
    }
    Some((index_of(tasks, dragged)?, index_of(tasks, target)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::numbered_tasks;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plan_move_down() {
        let tasks = numbered_tasks(5);
        let plan = plan_move(&tasks, TaskId(2), 4).unwrap();
        assert_eq!((plan.from, plan.to), (1, 4));
        assert_eq!(plan.steps, vec![MoveStep { id: TaskId(2), direction: Direction::Down }; 3]);
    }

    #[test]
    fn test_plan_move_up() {
        let tasks = numbered_tasks(5);
        let plan = plan_move(&tasks, TaskId(5), 0).unwrap();
        assert_eq!(plan.len(), 4);
        assert!(plan.steps.iter().all(|s| s.direction == Direction::Up && s.id == TaskId(5)));
    }

    #[test]
    fn test_plan_move_in_place_is_empty() {
        let tasks = numbered_tasks(3);
        assert!(plan_move(&tasks, TaskId(2), 1).unwrap().is_empty());
    }

    #[test]
    fn test_plan_move_rejects_bad_input() {
        let tasks = numbered_tasks(3);
        assert_eq!(plan_move(&tasks, TaskId(9), 0), Err(ReorderError::UnknownTask(TaskId(9))));
        assert_eq!(plan_move(&tasks, TaskId(1), 3), Err(ReorderError::TargetOutOfRange { target: 3, len: 3 }));
    }

    #[test]
    fn test_plan_step_at_boundaries() {
        let tasks = numbered_tasks(3);
        assert_eq!(
            plan_step(&tasks, TaskId(1), Direction::Up),
            Err(ReorderError::OutOfRange { id: TaskId(1), index: 0, direction: Direction::Up })
        );
        assert_eq!(
            plan_step(&tasks, TaskId(3), Direction::Down),
            Err(ReorderError::OutOfRange { id: TaskId(3), index: 2, direction: Direction::Down })
        );
        let plan = plan_step(&tasks, TaskId(3), Direction::Up).unwrap();
        assert_eq!((plan.from, plan.to, plan.len()), (2, 1, 1));
    }

    #[test]
    fn test_move_controls_never_offer_edges() {
        for len in 0..6 {
            for index in 0..len {
                let controls = move_controls(index, len);
                assert_eq!(controls.up, index != 0, "up at {index}/{len}");
                assert_eq!(controls.down, index != len - 1, "down at {index}/{len}");
            }
        }
        assert_eq!(move_controls(0, 1), MoveControls { up: false, down: false });
    }

    #[test]
    fn test_resolve_drop() {
        let tasks = numbered_tasks(5);
        assert_eq!(resolve_drop(&tasks, TaskId(2), TaskId(5)), Some((1, 4)));
        assert_eq!(resolve_drop(&tasks, TaskId(2), TaskId(2)), None);
        assert_eq!(resolve_drop(&tasks, TaskId(2), TaskId(42)), None);
        assert_eq!(resolve_drop(&tasks, TaskId(42), TaskId(2)), None);
    }
}
