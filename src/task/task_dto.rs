use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use super::task_models::{Task, TaskChanges};

/// `title` is optional here so a missing title is reported as a validation
/// error rather than a JSON rejection. `completed` is accepted and ignored.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct CreateTaskRequest {
    #[validate(
        length(min = 1, max = 100, message = "title must be 1-100 characters"),
        custom(function = "not_blank")
    )]
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateTaskRequest {
    #[validate(
        length(min = 1, max = 100, message = "title must be 1-100 characters"),
        custom(function = "not_blank")
    )]
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

fn not_blank(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("title must not be blank".into());
        return Err(err);
    }
    Ok(())
}

impl From<UpdateTaskRequest> for TaskChanges {
    fn from(req: UpdateTaskRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            completed: req.completed,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TaskListResponse {
    pub tasks: Vec<Task>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_request_absent_fields_stay_none() {
        let req: UpdateTaskRequest = serde_json::from_str(r#"{"completed": true}"#).unwrap();
        let changes = TaskChanges::from(req);
        assert_eq!(changes.completed, Some(true));
        assert!(changes.title.is_none());
        assert!(changes.description.is_none());
    }

    #[test]
    fn test_create_request_title_length() {
        let empty = CreateTaskRequest {
            title: Some(String::new()),
            ..Default::default()
        };
        assert!(empty.validate().is_err());

        let long = CreateTaskRequest {
            title: Some("x".repeat(101)),
            ..Default::default()
        };
        assert!(long.validate().is_err());

        let blank = UpdateTaskRequest {
            title: Some("   ".into()),
            ..Default::default()
        };
        assert!(blank.validate().is_err());

        let ok = CreateTaskRequest {
            title: Some("A".into()),
            ..Default::default()
        };
        assert!(ok.validate().is_ok());
    }
}
