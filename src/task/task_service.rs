use validator::Validate;

use super::{
    task_dto::{CreateTaskRequest, TaskFilters, UpdateTaskRequest},
    task_models::Task,
    task_repository::TaskRepository,
};
use crate::{
    error::{AppError, Result},
    reminder::schedule,
};

/// Service layer for task-related business logic.
#[derive(Clone)]
pub struct TaskService {
    repo: TaskRepository,
}

/// Forms send an empty string when the time field is cleared.
fn normalize_due_time(due_time: Option<String>) -> Option<String> {
    due_time.filter(|t| !t.trim().is_empty())
}

fn validate_schedule(due_date: &str, due_time: Option<&str>) -> Result<()> {
    schedule::parse_due_date(due_date)?;
    if let Some(time) = due_time {
        schedule::parse_due_time(time)?;
    }
    Ok(())
}

impl TaskService {
    pub fn new(repo: TaskRepository) -> Self {
        Self { repo }
    }

    pub async fn list_tasks(&self, filters: TaskFilters) -> Vec<Task> {
        self.repo.find_all(&filters).await
    }

    pub async fn get_task(&self, task_id: &str) -> Result<Task> {
        self.repo
            .find_by_id(task_id)
            .await
            .ok_or_else(|| AppError::NotFound("Task not found".into()))
    }

    pub async fn create_task(&self, payload: CreateTaskRequest) -> Result<Task> {
        payload.validate()?;
        let due_time = normalize_due_time(payload.due_time);
        validate_schedule(&payload.due_date, due_time.as_deref())?;

        let task = Task {
            id: format!("task_{}", uuid::Uuid::new_v4().simple()),
            title: payload.title,
            due_date: payload.due_date,
            due_time,
            completed: false,
            related_to: payload.related_to,
            priority: payload.priority.unwrap_or_default(),
            reminder: payload.reminder.unwrap_or_default(),
        };

        Ok(self.repo.create(task).await)
    }

    pub async fn update_task(&self, task_id: &str, payload: UpdateTaskRequest) -> Result<Task> {
        payload.validate()?;

        self.repo
            .try_update(task_id, move |task| {
                if let Some(due_date) = payload.due_date {
                    task.due_date = due_date;
                }
                if let Some(due_time) = payload.due_time {
                    task.due_time = normalize_due_time(Some(due_time));
                }
                validate_schedule(&task.due_date, task.due_time.as_deref())?;

                if let Some(title) = payload.title {
                    task.title = title;
                }
                if let Some(completed) = payload.completed {
                    task.completed = completed;
                }
                if let Some(related_to) = payload.related_to {
                    task.related_to = related_to;
                }
                if let Some(priority) = payload.priority {
                    task.priority = priority;
                }
                if let Some(reminder) = payload.reminder {
                    task.reminder = reminder;
                }
                Ok(())
            })
            .await?
            .ok_or_else(|| AppError::NotFound("Task not found".into()))
    }

    pub async fn toggle_completed(&self, task_id: &str) -> Result<Task> {
        self.repo
            .update(task_id, |task| task.completed = !task.completed)
            .await
            .ok_or_else(|| AppError::NotFound("Task not found".into()))
    }

    pub async fn delete_task(&self, task_id: &str) -> u64 {
        self.repo.delete(task_id).await
    }
}
