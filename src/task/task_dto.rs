use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::task_models::{ReminderOffset, TaskPriority};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    #[validate(length(min = 1, max = 500))]
    pub title: String,
    pub due_date: String,
    pub due_time: Option<String>,
    #[serde(default)]
    pub related_to: String,
    pub priority: Option<TaskPriority>,
    pub reminder: Option<ReminderOffset>,
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskRequest {
    #[validate(length(min = 1, max = 500))]
    pub title: Option<String>,
    pub due_date: Option<String>,
    pub due_time: Option<String>,
    pub completed: Option<bool>,
    pub related_to: Option<String>,
    pub priority: Option<TaskPriority>,
    pub reminder: Option<ReminderOffset>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TaskFilters {
    pub completed: Option<bool>,
    pub priority: Option<TaskPriority>,
    pub search: Option<String>,
}
