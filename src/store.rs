use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{
    contact::contact_models::Contact, deal::deal_models::Deal, lead::lead_models::Lead,
    notification::notification_models::Notification, task::task_models::Task,
};

/// Task ids whose reminder has already been delivered in this session.
pub type FiredReminderSet = HashSet<String>;

/// Everything the dashboard holds for the lifetime of the process.
#[derive(Debug, Default, Clone)]
pub struct CrmData {
    pub leads: Vec<Lead>,
    pub contacts: Vec<Contact>,
    pub deals: Vec<Deal>,
    pub tasks: Vec<Task>,
    pub notifications: Vec<Notification>,
    pub fired_reminders: FiredReminderSet,
}

/// Shared handle to the in-memory state container.
///
/// Repositories clone this handle the way they would clone a connection
/// pool; all mutation goes through the lock.
#[derive(Debug, Clone, Default)]
pub struct CrmStore {
    inner: Arc<RwLock<CrmData>>,
}

impl CrmStore {
    pub fn new(data: CrmData) -> Self {
        Self {
            inner: Arc::new(RwLock::new(data)),
        }
    }

    pub async fn read(&self) -> tokio::sync::RwLockReadGuard<'_, CrmData> {
        self.inner.read().await
    }

    pub async fn write(&self) -> tokio::sync::RwLockWriteGuard<'_, CrmData> {
        self.inner.write().await
    }

    /// Snapshot of the fired set, taken at the start of a poll.
    pub async fn fired_reminders(&self) -> FiredReminderSet {
        self.inner.read().await.fired_reminders.clone()
    }

    /// Swap in the set produced by a poll.
    pub async fn replace_fired_reminders(&self, fired: FiredReminderSet) {
        self.inner.write().await.fired_reminders = fired;
    }

    /// Forget every delivered reminder, as when a session ends.
    pub async fn clear_fired_reminders(&self) {
        self.inner.write().await.fired_reminders.clear();
    }
}

pub fn create_store(seed_demo_data: bool) -> CrmStore {
    if seed_demo_data {
        let today = chrono::Utc::now().date_naive();
        tracing::info!("Seeding demo data relative to {}", today);
        CrmStore::new(crate::seed::demo_data(today))
    } else {
        CrmStore::default()
    }
}
