use axum::{
    extract::{Path, State},
    response::sse::{Event, KeepAlive, Sse},
    Json,
};
use chrono::Utc;
use futures::stream::{Stream, StreamExt};
use std::convert::Infallible;

use super::notification_dto::{MarkAllReadResponse, NotificationClickResponse, NotificationFeedResponse};
use crate::{error::Result, state::AppState};

/// Get the notification feed with its unread count
#[utoipa::path(
    get,
    path = "/api/notifications",
    responses((status = 200, description = "Notification feed", body = NotificationFeedResponse)),
    tag = "notifications"
)]
pub async fn get_notifications(State(state): State<AppState>) -> Json<NotificationFeedResponse> {
    Json(state.notification_service.list(Utc::now()).await)
}

/// Open a notification: marks it read and tells the client where to navigate
#[utoipa::path(
    patch,
    path = "/api/notifications/{id}/read",
    params(("id" = String, Path, description = "Notification ID")),
    responses(
        (status = 200, description = "Notification marked as read", body = NotificationClickResponse),
        (status = 404, description = "Notification not found")
    ),
    tag = "notifications"
)]
pub async fn mark_notification_read(
    State(state): State<AppState>,
    Path(notification_id): Path<String>,
) -> Result<Json<NotificationClickResponse>> {
    let opened = state.notification_service.open(&notification_id).await?;
    Ok(Json(opened))
}

/// Mark every notification as read
#[utoipa::path(
    patch,
    path = "/api/notifications/read-all",
    responses((status = 200, description = "Notifications marked as read", body = MarkAllReadResponse)),
    tag = "notifications"
)]
pub async fn mark_all_notifications_read(State(state): State<AppState>) -> Json<MarkAllReadResponse> {
    let updated = state.notification_service.mark_all_read().await;
    Json(MarkAllReadResponse { updated })
}

/// Subscribe to task reminders via Server-Sent Events
#[utoipa::path(
    get,
    path = "/api/notifications/stream",
    responses((status = 200, description = "SSE stream of task reminders")),
    tag = "notifications"
)]
pub async fn notification_stream(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = std::result::Result<Event, Infallible>>> {
    let rx = state.reminder_tx.subscribe();

    let stream = tokio_stream::wrappers::BroadcastStream::new(rx).filter_map(|msg| async move {
        match msg {
            Ok(reminder) => {
                let json = serde_json::to_string(&reminder).ok()?;
                Some(Ok(Event::default().event("reminder").data(json)))
            }
            Err(_) => None,
        }
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}
