use serde::Serialize;
use utoipa::ToSchema;

use super::notification_models::Notification;
use crate::lead::lead_models::Lead;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Leads,
    Deals,
    Tasks,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NotificationResponse {
    #[serde(flatten)]
    pub notification: Notification,
    pub time_ago: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NotificationFeedResponse {
    pub notifications: Vec<NotificationResponse>,
    pub unread_count: usize,
}

/// Result of opening a notification: the updated record and where to go next.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NotificationClickResponse {
    pub notification: Notification,
    pub navigate_to: Option<View>,
    pub lead: Option<Lead>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MarkAllReadResponse {
    pub updated: usize,
}
