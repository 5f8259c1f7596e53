use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Lead,
    Deal,
    Task,
    General,
}

/// One entry of the notification feed.
///
/// Ids are derived from the source entity (`notif_task_<id>`, ...), so two
/// builds over the same data yield the same ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_id: Option<String>,
    pub read: bool,
    pub timestamp: DateTime<Utc>,
}

/// Payload published on the reminder stream whenever a reminder is delivered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReminderEvent {
    pub task_id: String,
    pub title: String,
    pub body: String,
    pub due_at: String,
}
