//! Task API Collaborator
//!
//! The remote service the core talks to, and the classification of its
//! failure responses.

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::draft::FieldErrors;
use crate::task::{Direction, Task, TaskId, TaskPayload};

pub const LOAD_FAILED: &str = "Erro ao carregar tarefas.";
pub const SAVE_FAILED: &str = "Erro ao salvar tarefa.";
pub const DELETE_FAILED: &str = "Erro ao excluir tarefa.";
pub const MOVE_FAILED: &str = "Erro ao reordenar tarefa.";

pub type ApiResult<T> = Result<T, ApiError>;

/// Classified failure of an API call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Malformed input, with the server's per-field messages
    #[error("invalid task data ({} fields)", .0.len())]
    Validation(FieldErrors),
    /// Another task already uses the name
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("{0}")]
    Failure(String),
    /// The request never produced a response
    #[error("transport error: {0}")]
    Transport(String),
    /// A success response whose body could not be read
    #[error("decode error: {0}")]
    Decode(String),
    #[error("operation not supported by this API")]
    Unsupported,
}

/// Error body shape; every field is optional and unreadable bodies become the default
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    error: Option<String>,
    errors: Option<BTreeMap<String, String>>,
}

impl ApiError {
    /// Classify a non-success response.
    ///
    /// `default_message` is used whenever the body carries no `error` text.
    pub fn from_response(status: u16, body: &[u8], default_message: &str) -> Self {
        let body: ErrorBody = serde_json::from_slice(body).unwrap_or_default();
        let message = body
            .error
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| default_message.to_string());

        match (status, body.errors) {
            (400, Some(errors)) => {
                let errors = FieldErrors::from_server(errors);
                if errors.is_empty() {
                    ApiError::Failure(message)
                } else {
                    ApiError::Validation(errors)
                }
            }
            (404, _) => ApiError::NotFound(message),
            (409, _) => ApiError::Conflict(message),
            _ => ApiError::Failure(message),
        }
    }

    /// Text for the status banner
    pub fn user_message(&self, default_message: &str) -> String {
        match self {
            ApiError::Conflict(m) | ApiError::NotFound(m) | ApiError::Failure(m) => m.clone(),
            ApiError::Validation(_) | ApiError::Transport(_) | ApiError::Decode(_) | ApiError::Unsupported => {
                default_message.to_string()
            }
        }
    }
}

/// Decode a list response; any non-array body counts as an empty list
pub fn decode_task_list(body: &[u8]) -> ApiResult<Vec<Task>> {
    let value: serde_json::Value = serde_json::from_slice(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    if !value.is_array() {
        log::warn!("task list body is not an array, treating as empty");
        return Ok(Vec::new());
    }
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Remote task service.
///
/// Calls resolve on the caller's thread, so implementations need not be `Send`.
#[async_trait(?Send)]
pub trait TaskApi {
    /// All tasks in priority order
    async fn list(&self) -> ApiResult<Vec<Task>>;

    async fn create(&self, payload: &TaskPayload) -> ApiResult<Task>;

    async fn update(&self, id: TaskId, payload: &TaskPayload) -> ApiResult<Task>;

    async fn delete(&self, id: TaskId) -> ApiResult<()>;

    /// Swap the task with its neighbour; the new order is only visible through [`TaskApi::list`]
    async fn move_step(&self, id: TaskId, direction: Direction) -> ApiResult<()>;

    /// Whether [`TaskApi::move_to`] is available
    fn supports_move_to(&self) -> bool {
        false
    }

    /// Place the task at an absolute index in one call
    async fn move_to(&self, _id: TaskId, _index: usize) -> ApiResult<()> {
        Err(ApiError::Unsupported)
    }
}
