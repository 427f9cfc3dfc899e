//! Task Commands
//!
//! HTTP bindings for the task API.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use task_core::api::{decode_task_list, DELETE_FAILED, LOAD_FAILED, MOVE_FAILED, SAVE_FAILED};
use task_core::{ApiError, ApiResult, Direction, Task, TaskApi, TaskId, TaskPayload};

use crate::config::ApiConfig;

// ========================
// Request Bodies
// ========================

#[derive(Serialize)]
struct MoveArgs {
    direction: Direction,
}

// ========================
// Client
// ========================

/// [`TaskApi`] over the REST endpoints under `/api/tarefas`
pub struct HttpTaskApi {
    client: Client,
    config: ApiConfig,
}

impl HttpTaskApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn task_url(&self, id: TaskId) -> String {
        self.config.url(&format!("/api/tarefas/{}", id))
    }

    /// Send and return the body of a 2xx response; anything else is classified
    async fn send(&self, request: RequestBuilder, default_message: &str) -> ApiResult<Vec<u8>> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status();

        if status.is_success() {
            let body = response
                .bytes()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))?;
            Ok(body.to_vec())
        } else {
            // An unreadable error body is treated as empty
            let body = response.bytes().await.unwrap_or_default();
            let err = ApiError::from_response(status.as_u16(), &body, default_message);
            log::warn!("[API] {} -> {}", status, err);
            Err(err)
        }
    }
}

fn decode_task(body: &[u8]) -> ApiResult<Task> {
    serde_json::from_slice(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl TaskApi for HttpTaskApi {
    async fn list(&self) -> ApiResult<Vec<Task>> {
        let request = self.client.get(self.config.url("/api/tarefas"));
        let body = self.send(request, LOAD_FAILED).await?;
        decode_task_list(&body)
    }

    async fn create(&self, payload: &TaskPayload) -> ApiResult<Task> {
        let request = self.client.post(self.config.url("/api/tarefas")).json(payload);
        let body = self.send(request, SAVE_FAILED).await?;
        decode_task(&body)
    }

    async fn update(&self, id: TaskId, payload: &TaskPayload) -> ApiResult<Task> {
        let request = self.client.put(self.task_url(id)).json(payload);
        let body = self.send(request, SAVE_FAILED).await?;
        decode_task(&body)
    }

    async fn delete(&self, id: TaskId) -> ApiResult<()> {
        let request = self.client.delete(self.task_url(id));
        self.send(request, DELETE_FAILED).await?;
        Ok(())
    }

    async fn move_step(&self, id: TaskId, direction: Direction) -> ApiResult<()> {
        let url = format!("{}/mover", self.task_url(id));
        let request = self.client.patch(url).json(&MoveArgs { direction });
        self.send(request, MOVE_FAILED).await?;
        Ok(())
    }
}
