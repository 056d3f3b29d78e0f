use tracing::{debug, info};
use validator::Validate;

use crate::error::{AppError, Result};
use crate::task::task_dto::{CreateTaskRequest, UpdateTaskRequest};
use crate::task::task_models::{Task, TaskChanges};
use crate::task::task_repository::TaskRepository;

/// Service layer for task business rules.
///
/// Update and toggle are read-modify-write against the store. Two callers
/// racing on the same id resolve as last write wins.
#[derive(Clone)]
pub struct TaskService {
    repo: TaskRepository,
}

impl TaskService {
    pub fn new(repo: TaskRepository) -> Self {
        Self { repo }
    }

    pub async fn list_tasks(&self) -> Result<Vec<Task>> {
        self.repo.find_all().await
    }

    pub async fn get_task(&self, task_id: i64) -> Result<Task> {
        self.repo.find_by_id(task_id).await
    }

    /// New tasks always start incomplete, whatever the payload says.
    pub async fn create_task(&self, payload: CreateTaskRequest) -> Result<Task> {
        payload.validate()?;

        let title = payload
            .title
            .ok_or_else(|| AppError::Validation("title is required".into()))?;
        let description = payload.description.unwrap_or_default();
        if payload.completed == Some(true) {
            debug!("Ignoring completed flag on create");
        }

        let task = self.repo.create(&title, &description, false).await?;
        info!(task_id = task.id, "Created task");
        Ok(task)
    }

    pub async fn update_task(&self, task_id: i64, payload: UpdateTaskRequest) -> Result<Task> {
        let mut task = self.repo.find_by_id(task_id).await?;
        payload.validate()?;

        let changes = TaskChanges::from(payload);
        if changes.is_empty() {
            debug!(task_id, "Update carried no fields");
            return Ok(task);
        }

        changes.apply_to(&mut task);
        let task = self.repo.update(&task).await?;
        debug!(task_id, "Updated task");
        Ok(task)
    }

    pub async fn toggle_task(&self, task_id: i64) -> Result<Task> {
        let mut task = self.repo.find_by_id(task_id).await?;
        task.toggle();

        let task = self.repo.update(&task).await?;
        debug!(task_id, completed = task.completed, "Toggled task");
        Ok(task)
    }

    pub async fn delete_task(&self, task_id: i64) -> Result<()> {
        self.repo.delete(task_id).await?;
        info!(task_id, "Deleted task");
        Ok(())
    }

    pub async fn clear_completed(&self) -> Result<u64> {
        let removed = self.repo.delete_completed().await?;
        info!(removed, "Cleared completed tasks");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;

    async fn service() -> TaskService {
        TaskService::new(TaskRepository::new(test_pool().await))
    }

    fn create(title: &str) -> CreateTaskRequest {
        CreateTaskRequest {
            title: Some(title.to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_applies_defaults() {
        let service = service().await;
        let task = service.create_task(create("A")).await.unwrap();

        assert_eq!(task.title, "A");
        assert_eq!(task.description, "");
        assert!(!task.completed);
    }

    #[tokio::test]
    async fn test_create_forces_incomplete() {
        let service = service().await;
        let task = service
            .create_task(CreateTaskRequest {
                title: Some("A".into()),
                description: Some("details".into()),
                completed: Some(true),
            })
            .await
            .unwrap();

        assert!(!task.completed);
        assert_eq!(task.description, "details");
    }

    #[tokio::test]
    async fn test_create_without_title_is_rejected() {
        let service = service().await;

        let missing = service.create_task(CreateTaskRequest::default()).await;
        assert!(matches!(missing, Err(AppError::Validation(_))));

        let empty = service.create_task(create("")).await;
        assert!(matches!(empty, Err(AppError::Validation(_))));

        assert!(service.list_tasks().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_merges_present_fields() {
        let service = service().await;
        let task = service
            .create_task(CreateTaskRequest {
                title: Some("A".into()),
                description: Some("keep me".into()),
                completed: None,
            })
            .await
            .unwrap();

        let updated = service
            .update_task(
                task.id,
                UpdateTaskRequest {
                    completed: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert!(updated.completed);
        assert_eq!(updated.title, "A");
        assert_eq!(updated.description, "keep me");
        assert_eq!(service.get_task(task.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_update_replaces_title_and_description() {
        let service = service().await;
        let task = service.create_task(create("A")).await.unwrap();

        let updated = service
            .update_task(
                task.id,
                UpdateTaskRequest {
                    title: Some("B".into()),
                    description: Some("new".into()),
                    completed: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.title, "B");
        assert_eq!(updated.description, "new");
        assert!(!updated.completed);
    }

    #[tokio::test]
    async fn test_update_rejects_blank_title() {
        let service = service().await;
        let task = service.create_task(create("A")).await.unwrap();

        let result = service
            .update_task(
                task.id,
                UpdateTaskRequest {
                    title: Some(String::new()),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(service.get_task(task.id).await.unwrap().title, "A");
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let service = service().await;
        let result = service.update_task(99, UpdateTaskRequest::default()).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));

        let invalid = service
            .update_task(
                99,
                UpdateTaskRequest {
                    title: Some(String::new()),
                    ..Default::default()
                },
            )
            .await;
        assert!(matches!(invalid, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_can_reopen_completed_task() {
        let service = service().await;
        let task = service
            .create_task(CreateTaskRequest {
                title: Some("A".into()),
                description: Some("keep me".into()),
                completed: None,
            })
            .await
            .unwrap();
        assert!(service.toggle_task(task.id).await.unwrap().completed);

        let reopened = service
            .update_task(
                task.id,
                UpdateTaskRequest {
                    completed: Some(false),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(reopened, task);
        assert_eq!(service.get_task(task.id).await.unwrap(), task);
    }

    #[tokio::test]
    async fn test_blank_title_is_rejected() {
        let service = service().await;

        let created = service.create_task(create("   ")).await;
        assert!(matches!(created, Err(AppError::Validation(_))));
        assert!(service.list_tasks().await.unwrap().is_empty());

        let task = service.create_task(create("A")).await.unwrap();
        let updated = service
            .update_task(
                task.id,
                UpdateTaskRequest {
                    title: Some(" \t ".into()),
                    ..Default::default()
                },
            )
            .await;
        assert!(matches!(updated, Err(AppError::Validation(_))));
        assert_eq!(service.get_task(task.id).await.unwrap().title, "A");
    }

    #[tokio::test]
    async fn test_double_toggle_restores_completed() {
        let service = service().await;
        let task = service.create_task(create("A")).await.unwrap();

        let once = service.toggle_task(task.id).await.unwrap();
        assert!(once.completed);
        assert_eq!(once.title, task.title);

        let twice = service.toggle_task(task.id).await.unwrap();
        assert_eq!(twice, task);
    }

    #[tokio::test]
    async fn test_toggle_missing_is_not_found() {
        let service = service().await;
        assert!(matches!(
            service.toggle_task(5).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_get_deleted_is_not_found() {
        let service = service().await;
        let task = service.create_task(create("A")).await.unwrap();

        service.delete_task(task.id).await.unwrap();

        assert!(matches!(
            service.get_task(task.id).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_clear_with_nothing_completed() {
        let service = service().await;
        service.create_task(create("A")).await.unwrap();

        assert_eq!(service.clear_completed().await.unwrap(), 0);
        assert_eq!(service.list_tasks().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_clear_completed_scenario() {
        let service = service().await;

        let a = service.create_task(create("Buy milk")).await.unwrap();
        assert!(!a.completed);
        let a = service.toggle_task(a.id).await.unwrap();
        assert!(a.completed);
        let b = service.create_task(create("Pay bills")).await.unwrap();
        assert!(!b.completed);

        assert_eq!(service.clear_completed().await.unwrap(), 1);
        assert_eq!(service.list_tasks().await.unwrap(), vec![b]);
    }
}
