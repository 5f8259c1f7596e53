use super::notification_models::Notification;
use crate::store::CrmStore;

#[derive(Clone)]
pub struct NotificationRepository {
    store: CrmStore,
}

impl NotificationRepository {
    pub fn new(store: CrmStore) -> Self {
        Self { store }
    }

    pub async fn find_all(&self) -> Vec<Notification> {
        self.store.read().await.notifications.clone()
    }

    /// Replace the visible feed with a freshly built one.
    pub async fn replace_all(&self, feed: Vec<Notification>) {
        self.store.write().await.notifications = feed;
    }

    pub async fn mark_as_read(&self, id: &str) -> Option<Notification> {
        let mut data = self.store.write().await;
        let notification = data.notifications.iter_mut().find(|n| n.id == id)?;
        notification.read = true;
        Some(notification.clone())
    }

    /// Returns how many notifications changed from unread to read.
    pub async fn mark_all_as_read(&self) -> usize {
        let mut data = self.store.write().await;
        let mut changed = 0;
        for notification in data.notifications.iter_mut().filter(|n| !n.read) {
            notification.read = true;
            changed += 1;
        }
        changed
    }
}
