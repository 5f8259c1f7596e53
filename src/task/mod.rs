pub mod task_dto;
pub mod task_handlers;
pub mod task_models;
pub mod task_repository;
pub mod task_service;

pub use task_dto::{CreateTaskRequest, TaskFilters, UpdateTaskRequest};
pub use task_handlers::{create_task, delete_task, get_task, get_tasks, toggle_task, update_task};
pub use task_models::{ReminderOffset, Task, TaskPriority};
pub use task_repository::TaskRepository;
pub use task_service::TaskService;
