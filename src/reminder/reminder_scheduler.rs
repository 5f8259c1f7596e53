use chrono::NaiveDateTime;
use tracing::{debug, info};

use crate::{
    reminder::{
        delivery::{PermissionState, ReminderNotifier},
        schedule,
    },
    store::FiredReminderSet,
    task::task_models::Task,
};

/// One pass of the reminder poller.
///
/// Delivers a reminder for every task whose reminder window contains `now`
/// and which has not fired yet this session. Returns the grown fired set when
/// at least one reminder went out, `None` otherwise, so the caller only writes
/// state back when something changed. A task that cannot be evaluated is
/// skipped without affecting the others.
pub fn poll_reminders(
    tasks: &[Task],
    fired: &FiredReminderSet,
    now: NaiveDateTime,
    notifier: &dyn ReminderNotifier,
) -> Option<FiredReminderSet> {
    if notifier.permission() != PermissionState::Granted {
        return None;
    }

    let mut updated: Option<FiredReminderSet> = None;

    for task in tasks {
        if task.completed || fired.contains(&task.id) {
            continue;
        }

        let window = match schedule::reminder_window(task) {
            Ok(Some(window)) => window,
            Ok(None) => continue,
            Err(e) => {
                debug!("Skipping reminder for task {}: {}", task.id, e);
                continue;
            }
        };

        if !window.contains(now) {
            continue;
        }

        match notifier.deliver(task) {
            Ok(()) => info!("Sent reminder for task: {}", task.title),
            Err(e) => debug!("Reminder delivery for task {} failed: {}", task.id, e),
        }

        updated
            .get_or_insert_with(|| fired.clone())
            .insert(task.id.clone());
    }

    updated
}
