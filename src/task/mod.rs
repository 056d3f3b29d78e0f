pub mod task_models;
pub mod task_dto;
pub mod task_repository;
pub mod task_handlers;
pub mod task_service;

pub use task_models::Task;
pub use task_dto::{CreateTaskRequest, UpdateTaskRequest, TaskListResponse, MessageResponse};
pub use task_repository::TaskRepository;
pub use task_handlers::{
    get_tasks, get_task, create_task, update_task, delete_task, toggle_task, clear_completed_tasks,
};
pub use task_service::TaskService;
