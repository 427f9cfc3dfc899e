//! In-memory API double for unit tests.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::api::{ApiError, ApiResult, TaskApi};
use crate::task::{index_of, Direction, Task, TaskId, TaskPayload};

pub fn task(id: u64, name: &str) -> Task {
    Task {
        id: TaskId(id),
        name: name.to_string(),
        cost: 10.0,
        due_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
    }
}

/// Tasks with ids `1..=n` named "Task N", in id order
pub fn numbered_tasks(n: u64) -> Vec<Task> {
    (1..=n).map(|id| task(id, &format!("Task {}", id))).collect()
}

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List,
    Create(String),
    Update(TaskId, String),
    Delete(TaskId),
    MoveStep(TaskId, Direction),
    MoveTo(TaskId, usize),
}

/// Records every call and keeps a server-side ordering that moves actually change
pub struct FakeApi {
    tasks: RefCell<Vec<Task>>,
    calls: RefCell<Vec<Call>>,
    next_id: Cell<u64>,
    move_calls: Cell<usize>,
    fail_move_call: Cell<Option<usize>>,
    save_error: RefCell<Option<ApiError>>,
    move_to: bool,
}

impl FakeApi {
    pub fn new(tasks: Vec<Task>) -> Self {
        let next_id = tasks.iter().map(|t| t.id.0).max().unwrap_or(0) + 1;
        Self {
            tasks: RefCell::new(tasks),
            calls: RefCell::new(Vec::new()),
            next_id: Cell::new(next_id),
            move_calls: Cell::new(0),
            fail_move_call: Cell::new(None),
            save_error: RefCell::new(None),
            move_to: false,
        }
    }

    pub fn with_move_to(mut self) -> Self {
        self.move_to = true;
        self
    }

    /// Make the `n`th move call (1-based) fail
    pub fn fail_move_call(&self, n: usize) {
        self.fail_move_call.set(Some(n));
    }

    /// Make the next create/update fail with `err`
    pub fn fail_next_save(&self, err: ApiError) {
        *self.save_error.borrow_mut() = Some(err);
    }

    /// Current server order, without recording a call
    pub fn snapshot(&self) -> Vec<Task> {
        self.tasks.borrow().clone()
    }

    pub fn ids(&self) -> Vec<u64> {
        self.tasks.borrow().iter().map(|t| t.id.0).collect()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn next_move_fails(&self) -> bool {
        let n = self.move_calls.get() + 1;
        self.move_calls.set(n);
        self.fail_move_call.get() == Some(n)
    }
}

#[async_trait(?Send)]
impl TaskApi for FakeApi {
    async fn list(&self) -> ApiResult<Vec<Task>> {
        self.record(Call::List);
        Ok(self.snapshot())
    }

    async fn create(&self, payload: &TaskPayload) -> ApiResult<Task> {
        self.record(Call::Create(payload.name.clone()));
        if let Some(err) = self.save_error.borrow_mut().take() {
            return Err(err);
        }
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let task = Task {
            id: TaskId(id),
            name: payload.name.clone(),
            cost: payload.cost,
            due_date: payload.due_date,
        };
        self.tasks.borrow_mut().push(task.clone());
        Ok(task)
    }

    async fn update(&self, id: TaskId, payload: &TaskPayload) -> ApiResult<Task> {
        self.record(Call::Update(id, payload.name.clone()));
        if let Some(err) = self.save_error.borrow_mut().take() {
            return Err(err);
        }
        let mut tasks = self.tasks.borrow_mut();
        let task = tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| ApiError::NotFound(format!("task {}", id)))?;
        task.name = payload.name.clone();
        task.cost = payload.cost;
        task.due_date = payload.due_date;
        Ok(task.clone())
    }

    async fn delete(&self, id: TaskId) -> ApiResult<()> {
        self.record(Call::Delete(id));
        let mut tasks = self.tasks.borrow_mut();
        let index = index_of(&tasks, id).ok_or_else(|| ApiError::NotFound(format!("task {}", id)))?;
        tasks.remove(index);
        Ok(())
    }

    async fn move_step(&self, id: TaskId, direction: Direction) -> ApiResult<()> {
        self.record(Call::MoveStep(id, direction));
        if self.next_move_fails() {
            return Err(ApiError::Transport("connection reset".to_string()));
        }
        let mut tasks = self.tasks.borrow_mut();
        let index = index_of(&tasks, id).ok_or_else(|| ApiError::NotFound(format!("task {}", id)))?;
        let other = match direction {
            Direction::Up if index > 0 => index - 1,
            Direction::Down if index + 1 < tasks.len() => index + 1,
            _ => return Err(ApiError::Failure("invalid move".to_string())),
        };
        tasks.swap(index, other);
        Ok(())
    }

    fn supports_move_to(&self) -> bool {
        self.move_to
    }

    async fn move_to(&self, id: TaskId, target: usize) -> ApiResult<()> {
        self.record(Call::MoveTo(id, target));
        if !self.move_to {
            return Err(ApiError::Unsupported);
        }
        let mut tasks = self.tasks.borrow_mut();
        let index = index_of(&tasks, id).ok_or_else(|| ApiError::NotFound(format!("task {}", id)))?;
        let task = tasks.remove(index);
        tasks.insert(target, task);
        Ok(())
    }
}
