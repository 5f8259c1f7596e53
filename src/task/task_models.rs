use chrono::Duration;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum TaskPriority {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskPriority::High => write!(f, "High"),
            TaskPriority::Medium => write!(f, "Medium"),
            TaskPriority::Low => write!(f, "Low"),
        }
    }
}

impl Default for TaskPriority {
    fn default() -> Self {
        TaskPriority::Medium
    }
}

/// How long before the due instant a reminder should fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub enum ReminderOffset {
    #[default]
    #[serde(rename = "none")]
    None,
    #[serde(rename = "5m")]
    FiveMinutes,
    #[serde(rename = "15m")]
    FifteenMinutes,
    #[serde(rename = "1h")]
    OneHour,
    #[serde(rename = "1d")]
    OneDay,
}

impl ReminderOffset {
    /// Lead time before the due instant, or `None` when reminders are off.
    pub fn lead_time(self) -> Option<Duration> {
        match self {
            ReminderOffset::None => None,
            ReminderOffset::FiveMinutes => Some(Duration::minutes(5)),
            ReminderOffset::FifteenMinutes => Some(Duration::minutes(15)),
            ReminderOffset::OneHour => Some(Duration::hours(1)),
            ReminderOffset::OneDay => Some(Duration::days(1)),
        }
    }
}

impl std::fmt::Display for ReminderOffset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReminderOffset::None => write!(f, "none"),
            ReminderOffset::FiveMinutes => write!(f, "5m"),
            ReminderOffset::FifteenMinutes => write!(f, "15m"),
            ReminderOffset::OneHour => write!(f, "1h"),
            ReminderOffset::OneDay => write!(f, "1d"),
        }
    }
}

/// A to-do item as edited by the task forms.
///
/// Dates and times are kept as the strings the forms submit (`YYYY-MM-DD`,
/// `HH:MM`); the reminder poll parses them on every pass and skips records
/// that do not parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub due_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_time: Option<String>,
    pub completed: bool,
    pub related_to: String,
    pub priority: TaskPriority,
    #[serde(default)]
    pub reminder: ReminderOffset,
}
