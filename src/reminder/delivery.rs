use std::sync::RwLock;
use tokio::sync::broadcast;

use crate::{
    error::{AppError, Result},
    notification::notification_models::ReminderEvent,
    reminder::schedule,
    task::task_models::Task,
};

pub const REMINDER_TITLE: &str = "Task Reminder";

/// Whether the user has allowed out-of-band reminders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionState {
    Granted,
    Denied,
    Unknown,
}

impl std::str::FromStr for PermissionState {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "granted" => Ok(PermissionState::Granted),
            "denied" => Ok(PermissionState::Denied),
            "unknown" | "default" => Ok(PermissionState::Unknown),
            other => Err(AppError::BadRequest(format!("Unknown permission state: {}", other))),
        }
    }
}

impl std::fmt::Display for PermissionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PermissionState::Granted => write!(f, "granted"),
            PermissionState::Denied => write!(f, "denied"),
            PermissionState::Unknown => write!(f, "unknown"),
        }
    }
}

/// Out-of-band channel that shows a reminder to the user.
pub trait ReminderNotifier: Send + Sync {
    fn permission(&self) -> PermissionState;

    /// Ask the user for permission. Called once when the reminder service starts.
    fn request_permission(&self) -> PermissionState;

    /// Show a reminder for `task`. Failures are reported but never retried.
    fn deliver(&self, task: &Task) -> Result<()>;
}

pub fn reminder_body(task: &Task) -> String {
    format!("Reminder: \"{}\" is due soon.", task.title)
}

/// Publishes reminders on the broadcast channel behind the SSE stream.
pub struct BroadcastNotifier {
    tx: broadcast::Sender<ReminderEvent>,
    permission: RwLock<PermissionState>,
    grant_on_request: bool,
}

impl BroadcastNotifier {
    pub fn new(
        tx: broadcast::Sender<ReminderEvent>,
        permission: PermissionState,
        grant_on_request: bool,
    ) -> Self {
        Self {
            tx,
            permission: RwLock::new(permission),
            grant_on_request,
        }
    }
}

impl ReminderNotifier for BroadcastNotifier {
    fn permission(&self) -> PermissionState {
        self.permission
            .read()
            .map(|state| *state)
            .unwrap_or(PermissionState::Denied)
    }

    fn request_permission(&self) -> PermissionState {
        let Ok(mut state) = self.permission.write() else {
            return PermissionState::Denied;
        };
        if *state == PermissionState::Unknown {
            *state = if self.grant_on_request {
                PermissionState::Granted
            } else {
                PermissionState::Denied
            };
        }
        *state
    }

    fn deliver(&self, task: &Task) -> Result<()> {
        let due_at = schedule::due_instant(task)
            .map(|instant| instant.format("%Y-%m-%dT%H:%M:%S").to_string())
            .unwrap_or_else(|_| task.due_date.clone());

        let event = ReminderEvent {
            task_id: task.id.clone(),
            title: REMINDER_TITLE.to_string(),
            body: reminder_body(task),
            due_at,
        };

        self.tx
            .send(event)
            .map(|_| ())
            .map_err(|_| AppError::Delivery("No reminder subscribers connected".to_string()))
    }
}
