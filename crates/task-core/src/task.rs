//! Task Entity
//!
//! Wire-level task record and the move direction used by the API.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Opaque server-assigned task identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A prioritized task as returned by the API.
///
/// Priority is the task's index in the fetched list; there is no position field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "custo")]
    pub cost: f64,
    /// Canonical YYYY-MM-DD on the wire
    #[serde(rename = "data_limite")]
    pub due_date: NaiveDate,
}

/// Body of a create or update request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskPayload {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "custo")]
    pub cost: f64,
    #[serde(rename = "data_limite")]
    pub due_date: NaiveDate,
}

/// Single-step move direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Index of `id` in an ordered task list
pub fn index_of(tasks: &[Task], id: TaskId) -> Option<usize> {
    tasks.iter().position(|t| t.id == id)
}
