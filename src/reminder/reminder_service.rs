use chrono::{Local, NaiveDateTime};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio_cron_scheduler::{Job, JobScheduler};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::{
    error::Result,
    reminder::{
        delivery::{PermissionState, ReminderNotifier},
        reminder_scheduler::poll_reminders,
    },
    store::CrmStore,
};

/// Running reminder poller. Dropping the handle does not stop the job;
/// call [`ReminderServiceHandle::stop`].
pub struct ReminderServiceHandle {
    scheduler: JobScheduler,
    job_id: Uuid,
    poll_guard: Arc<Mutex<()>>,
}

impl ReminderServiceHandle {
    /// Cancel the timer and wait for a poll that is still in flight.
    pub async fn stop(mut self) -> Result<()> {
        self.scheduler.remove(&self.job_id).await?;
        self.scheduler.shutdown().await?;
        let _idle = self.poll_guard.lock().await;

        info!("Reminder service stopped");
        Ok(())
    }
}

/// Resolve the delivery permission, asking once if the user has not decided yet.
pub fn ensure_permission(notifier: &dyn ReminderNotifier) -> PermissionState {
    let state = match notifier.permission() {
        PermissionState::Unknown => notifier.request_permission(),
        state => state,
    };

    if state != PermissionState::Granted {
        warn!("Notification permission was not granted. Task reminders will not be shown.");
    }
    state
}

pub async fn start_reminder_service(
    store: CrmStore,
    notifier: Arc<dyn ReminderNotifier>,
    interval: Duration,
) -> Result<ReminderServiceHandle> {
    ensure_permission(notifier.as_ref());

    let scheduler = JobScheduler::new().await?;
    let poll_guard = Arc::new(Mutex::new(()));
    let job_guard = poll_guard.clone();

    let job = Job::new_repeated_async(interval, move |_uuid, _l| {
        let store = store.clone();
        let notifier = notifier.clone();
        let guard = job_guard.clone();

        Box::pin(async move {
            let Ok(_running) = guard.try_lock() else {
                debug!("Previous reminder poll still running, skipping tick");
                return;
            };
            run_reminder_poll(&store, notifier.as_ref(), Local::now().naive_local()).await;
        })
    })?;

    let job_id = scheduler.add(job).await?;
    scheduler.start().await?;

    info!("Reminder service started, polling every {}s", interval.as_secs());
    Ok(ReminderServiceHandle {
        scheduler,
        job_id,
        poll_guard,
    })
}

/// Evaluate the live task list once and write the fired set back if it grew.
/// Returns how many reminders fired.
pub async fn run_reminder_poll(
    store: &CrmStore,
    notifier: &dyn ReminderNotifier,
    now: NaiveDateTime,
) -> usize {
    let (tasks, fired) = {
        let data = store.read().await;
        (data.tasks.clone(), data.fired_reminders.clone())
    };

    match poll_reminders(&tasks, &fired, now, notifier) {
        Some(updated) => {
            let count = updated.len() - fired.len();
            store.replace_fired_reminders(updated).await;
            count
        }
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reminder::delivery::testing::RecordingNotifier;
    use crate::store::CrmData;
    use crate::task::task_models::{ReminderOffset, Task, TaskPriority};
    use chrono::Duration as ChronoDuration;

    fn store_with(tasks: Vec<Task>) -> CrmStore {
        CrmStore::new(CrmData {
            tasks,
            ..CrmData::default()
        })
    }

    fn task(id: &str, reminder: ReminderOffset) -> Task {
        Task {
            id: id.to_string(),
            title: format!("Task {}", id),
            due_date: "2025-09-21".to_string(),
            due_time: Some("10:00".to_string()),
            completed: false,
            related_to: "General".to_string(),
            priority: TaskPriority::High,
            reminder,
        }
    }

    fn due() -> NaiveDateTime {
        NaiveDateTime::parse_from_str("2025-09-21 10:00:00", "%Y-%m-%d %H:%M:%S").unwrap()
    }

    #[tokio::test]
    async fn test_poll_writes_fired_set_back() {
        let store = store_with(vec![
            task("t1", ReminderOffset::FifteenMinutes),
            task("t2", ReminderOffset::OneDay),
            task("t3", ReminderOffset::None),
        ]);
        let notifier = RecordingNotifier::granted();

        let count = run_reminder_poll(&store, &notifier, due() - ChronoDuration::minutes(10)).await;

        assert_eq!(count, 2);
        let fired = store.fired_reminders().await;
        assert!(fired.contains("t1"));
        assert!(fired.contains("t2"));
        assert!(!fired.contains("t3"));

        let again = run_reminder_poll(&store, &notifier, due() - ChronoDuration::minutes(5)).await;
        assert_eq!(again, 0);
        assert_eq!(notifier.delivered().len(), 2);
    }

    #[tokio::test]
    async fn test_poll_sees_task_edits() {
        let store = store_with(vec![task("t1", ReminderOffset::None)]);
        let notifier = RecordingNotifier::granted();
        let now = due() - ChronoDuration::minutes(3);

        assert_eq!(run_reminder_poll(&store, &notifier, now).await, 0);

        store.write().await.tasks[0].reminder = ReminderOffset::FiveMinutes;
        assert_eq!(run_reminder_poll(&store, &notifier, now).await, 1);
    }

    #[test]
    fn test_ensure_permission_requests_only_when_unknown() {
        let notifier = RecordingNotifier::with_permission(PermissionState::Unknown, true);
        assert_eq!(ensure_permission(&notifier), PermissionState::Granted);
        assert_eq!(*notifier.permission_requests.lock().unwrap(), 1);

        let notifier = RecordingNotifier::with_permission(PermissionState::Granted, true);
        assert_eq!(ensure_permission(&notifier), PermissionState::Granted);
        assert_eq!(*notifier.permission_requests.lock().unwrap(), 0);

        let notifier = RecordingNotifier::with_permission(PermissionState::Unknown, false);
        assert_eq!(ensure_permission(&notifier), PermissionState::Denied);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_service_starts_and_stops() {
        let store = store_with(Vec::new());
        let notifier: Arc<dyn ReminderNotifier> = Arc::new(RecordingNotifier::granted());

        let handle = start_reminder_service(store, notifier, Duration::from_secs(30))
            .await
            .unwrap();
        handle.stop().await.unwrap();
    }
}
