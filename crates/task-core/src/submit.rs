//! Draft Submission
//!
//! Local validation followed by create/update, with every outcome reduced to
//! one of four cases the form can match on.

use crate::api::{ApiError, TaskApi, SAVE_FAILED};
use crate::draft::{Draft, EditorMode, Field, FieldErrors};
use crate::task::Task;

/// Result of submitting the create/edit form
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Stored by the server; the form closes and the list is re-fetched
    Saved(Task),
    /// Local or server field errors; replaces whatever the form showed
    ValidationFailed(FieldErrors),
    /// The server rejected a unique field
    Conflict(Field),
    /// Anything else, shown as the action message
    Failure(String),
}

impl SubmitOutcome {
    /// Field errors to show under the inputs after this outcome.
    ///
    /// Empty for saves and general failures, so errors from an earlier
    /// attempt never outlive a later one.
    pub fn field_errors(&self) -> FieldErrors {
        match self {
            SubmitOutcome::ValidationFailed(errors) => errors.clone(),
            SubmitOutcome::Conflict(Field::Name) => FieldErrors::duplicate_name(),
            SubmitOutcome::Conflict(field) => {
                let mut errors = FieldErrors::new();
                errors.insert(*field, SAVE_FAILED);
                errors
            }
            SubmitOutcome::Saved(_) | SubmitOutcome::Failure(_) => FieldErrors::new(),
        }
    }
}

/// Validate `draft` against the current list and, if clean, send it.
///
/// No request is made when local validation fails.
pub async fn submit_draft<A>(api: &A, draft: &Draft, mode: EditorMode, tasks: &[Task]) -> SubmitOutcome
where
    A: TaskApi + ?Sized,
{
    let payload = match draft.validate(tasks, mode.editing_id()) {
        Ok(payload) => payload,
        Err(errors) => {
            log::debug!("draft rejected locally: {} field errors", errors.len());
            return SubmitOutcome::ValidationFailed(errors);
        }
    };

    let result = match mode {
        EditorMode::Create => api.create(&payload).await,
        EditorMode::Edit(id) => api.update(id, &payload).await,
    };

    match result {
        Ok(task) => {
            log::info!("saved task {} ({:?})", task.id, mode);
            SubmitOutcome::Saved(task)
        }
        Err(ApiError::Validation(errors)) => {
            log::warn!("server rejected task data: {} field errors", errors.len());
            SubmitOutcome::ValidationFailed(errors)
        }
        Err(ApiError::Conflict(message)) => {
            log::warn!("server reported a name conflict: {}", message);
            SubmitOutcome::Conflict(Field::Name)
        }
        Err(err) => {
            log::warn!("saving task failed: {}", err);
            SubmitOutcome::Failure(err.user_message(SAVE_FAILED))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::{COST_REQUIRED, NAME_DUPLICATE};
    use crate::task::TaskId;
    use crate::testing::{task, Call, FakeApi};

    fn draft(name: &str, cost: &str, due_date: &str) -> Draft {
        Draft {
            name: name.to_string(),
            cost: cost.to_string(),
            due_date: due_date.to_string(),
        }
    }

    #[tokio::test]
    async fn test_local_errors_skip_the_network() {
        let api = FakeApi::new(vec![task(1, "Pay rent")]);
        let outcome = submit_draft(&api, &draft("x", "", "01/01/2026"), EditorMode::Create, &api.snapshot()).await;
        match outcome {
            SubmitOutcome::ValidationFailed(errors) => assert_eq!(errors.get(Field::Cost), Some(COST_REQUIRED)),
            other => panic!("unexpected {other:?}"),
        }
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_create_sends_trimmed_payload() {
        let api = FakeApi::new(vec![task(1, "Pay rent")]);
        let outcome = submit_draft(&api, &draft(" Buy milk ", "3.5", "02/03/2026"), EditorMode::Create, &api.snapshot()).await;
        let SubmitOutcome::Saved(created) = outcome else {
            panic!("expected Saved, got {outcome:?}");
        };
        assert_eq!(created.name, "Buy milk");
        assert_eq!(created.cost, 3.5);
        assert_eq!(api.calls(), vec![Call::Create("Buy milk".to_string())]);
    }

    #[tokio::test]
    async fn test_update_targets_edited_task() {
        let api = FakeApi::new(vec![task(1, "Pay rent"), task(2, "Buy milk")]);
        let outcome = submit_draft(&api, &draft("Pay rent", "10", "02/03/2026"), EditorMode::Edit(TaskId(1)), &api.snapshot()).await;
        assert!(matches!(outcome, SubmitOutcome::Saved(_)));
        assert_eq!(api.calls(), vec![Call::Update(TaskId(1), "Pay rent".to_string())]);
    }

    #[tokio::test]
    async fn test_server_validation_replaces_errors() {
        let api = FakeApi::new(vec![]);
        let mut server = FieldErrors::new();
        server.insert(Field::DueDate, "Data no passado.");
        api.fail_next_save(ApiError::Validation(server.clone()));
        let outcome = submit_draft(&api, &draft("A", "1", "01/01/2020"), EditorMode::Create, &[]).await;
        assert_eq!(outcome, SubmitOutcome::ValidationFailed(server));
    }

    #[tokio::test]
    async fn test_server_conflict_maps_to_name() {
        let api = FakeApi::new(vec![]);
        api.fail_next_save(ApiError::Conflict("dup".to_string()));
        let outcome = submit_draft(&api, &draft("A", "1", "01/01/2026"), EditorMode::Create, &[]).await;
        assert_eq!(outcome, SubmitOutcome::Conflict(Field::Name));
        let errors = outcome.field_errors();
        assert_eq!(errors.get(Field::Name), Some(NAME_DUPLICATE));
    }

    #[tokio::test]
    async fn test_other_failures_become_messages() {
        let api = FakeApi::new(vec![]);
        api.fail_next_save(ApiError::Transport("offline".to_string()));
        let outcome = submit_draft(&api, &draft("A", "1", "01/01/2026"), EditorMode::Create, &[]).await;
        assert_eq!(outcome, SubmitOutcome::Failure(SAVE_FAILED.to_string()));
        assert!(outcome.field_errors().is_empty());

        api.fail_next_save(ApiError::NotFound("Tarefa nao encontrada.".to_string()));
        let outcome = submit_draft(&api, &draft("A", "1", "01/01/2026"), EditorMode::Edit(TaskId(9)), &[]).await;
        assert_eq!(outcome, SubmitOutcome::Failure("Tarefa nao encontrada.".to_string()));
    }

    #[tokio::test]
    async fn test_failure_after_local_errors_shows_no_field_errors() {
        let api = FakeApi::new(vec![]);
        let first = submit_draft(&api, &draft("A", "", "01/01/2026"), EditorMode::Create, &[]).await;
        assert_eq!(first.field_errors().get(Field::Cost), Some(COST_REQUIRED));

        api.fail_next_save(ApiError::Failure("Erro interno.".to_string()));
        let second = submit_draft(&api, &draft("A", "5", "01/01/2026"), EditorMode::Create, &[]).await;
        assert_eq!(second, SubmitOutcome::Failure("Erro interno.".to_string()));
        assert!(second.field_errors().is_empty());
        assert_eq!(second.field_errors().get(Field::Cost), None);
    }

    #[tokio::test]
    async fn test_saved_shows_no_field_errors() {
        let api = FakeApi::new(vec![]);
        let outcome = submit_draft(&api, &draft("A", "5", "01/01/2026"), EditorMode::Create, &[]).await;
        assert!(matches!(outcome, SubmitOutcome::Saved(_)));
        assert!(outcome.field_errors().is_empty());
    }
}
