use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use utoipa::ToSchema;

use crate::{
    error::{AppError, Result},
    notification::notification_service::NotificationService,
    reminder::{start_reminder_service, ReminderNotifier, ReminderServiceHandle},
    store::CrmStore,
};

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatus {
    pub active: bool,
    pub reminder_permission: String,
}

/// Simulated sign-in. A session owns the reminder poller: login seeds the
/// feed and starts polling, logout cancels the timer and forgets which
/// reminders were already shown.
#[derive(Clone)]
pub struct SessionService {
    store: CrmStore,
    notification_service: NotificationService,
    notifier: Arc<dyn ReminderNotifier>,
    poll_interval: Duration,
    reminders: Arc<Mutex<Option<ReminderServiceHandle>>>,
}

impl SessionService {
    pub fn new(
        store: CrmStore,
        notification_service: NotificationService,
        notifier: Arc<dyn ReminderNotifier>,
        poll_interval: Duration,
    ) -> Self {
        Self {
            store,
            notification_service,
            notifier,
            poll_interval,
            reminders: Arc::new(Mutex::new(None)),
        }
    }

    pub async fn status(&self) -> SessionStatus {
        SessionStatus {
            active: self.reminders.lock().await.is_some(),
            reminder_permission: self.notifier.permission().to_string(),
        }
    }

    pub async fn login(&self) -> Result<SessionStatus> {
        let mut slot = self.reminders.lock().await;
        if slot.is_some() {
            return Err(AppError::Conflict("Session already active".to_string()));
        }

        self.notification_service.seed_feed(Utc::now()).await;
        let handle =
            start_reminder_service(self.store.clone(), self.notifier.clone(), self.poll_interval).await?;
        *slot = Some(handle);
        drop(slot);

        tracing::info!("Session started");
        Ok(self.status().await)
    }

    pub async fn logout(&self) -> Result<SessionStatus> {
        let handle = self
            .reminders
            .lock()
            .await
            .take()
            .ok_or_else(|| AppError::Conflict("No active session".to_string()))?;

        handle.stop().await?;
        self.store.clear_fired_reminders().await;

        tracing::info!("Session ended");
        Ok(self.status().await)
    }
}
