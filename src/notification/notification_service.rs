use chrono::{DateTime, Utc};

use super::{
    notification_dto::{NotificationClickResponse, NotificationFeedResponse, NotificationResponse, View},
    notification_feed::build_feed,
    notification_models::{Notification, NotificationKind},
    notification_repository::NotificationRepository,
};
use crate::{
    error::{AppError, Result},
    lead::{lead_models::Lead, lead_repository::LeadRepository},
    store::CrmStore,
};

/// Service layer for the notification feed.
#[derive(Clone)]
pub struct NotificationService {
    store: CrmStore,
    repo: NotificationRepository,
    lead_repo: LeadRepository,
}

impl NotificationService {
    pub fn new(store: CrmStore, repo: NotificationRepository, lead_repo: LeadRepository) -> Self {
        Self {
            store,
            repo,
            lead_repo,
        }
    }

    /// Rebuild the feed from the current collections and make it the visible one.
    pub async fn seed_feed(&self, now: DateTime<Utc>) -> usize {
        let feed = {
            let data = self.store.read().await;
            build_feed(&data.leads, &data.deals, &data.tasks, now)
        };
        let count = feed.len();
        self.repo.replace_all(feed).await;
        tracing::debug!("Notification feed seeded with {} entries", count);
        count
    }

    pub async fn list(&self, now: DateTime<Utc>) -> NotificationFeedResponse {
        let notifications: Vec<NotificationResponse> = self
            .repo
            .find_all()
            .await
            .into_iter()
            .map(|notification| NotificationResponse {
                time_ago: time_since(notification.timestamp, now),
                notification,
            })
            .collect();
        let unread_count = notifications.iter().filter(|n| !n.notification.read).count();

        NotificationFeedResponse {
            notifications,
            unread_count,
        }
    }

    pub async fn open(&self, id: &str) -> Result<NotificationClickResponse> {
        let notification = self
            .repo
            .mark_as_read(id)
            .await
            .ok_or_else(|| AppError::NotFound("Notification not found".into()))?;

        let (navigate_to, lead) = self.resolve_navigation(&notification).await;
        Ok(NotificationClickResponse {
            notification,
            navigate_to,
            lead,
        })
    }

    pub async fn mark_all_read(&self) -> usize {
        self.repo.mark_all_as_read().await
    }

    /// Lead notifications open the lead itself when it still exists.
    async fn resolve_navigation(&self, notification: &Notification) -> (Option<View>, Option<Lead>) {
        match notification.kind {
            NotificationKind::Lead => {
                let Some(lead_id) = notification.related_id.as_deref() else {
                    return (None, None);
                };
                match self.lead_repo.find_by_id(lead_id).await {
                    Some(lead) => (Some(View::Leads), Some(lead)),
                    None => (None, None),
                }
            }
            NotificationKind::Deal => (Some(View::Deals), None),
            NotificationKind::Task => (Some(View::Tasks), None),
            NotificationKind::General => (None, None),
        }
    }
}

/// Coarse "how long ago" label for a feed entry.
pub fn time_since(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - timestamp).num_seconds() as f64;

    let units = [
        (31_536_000.0, "years"),
        (2_592_000.0, "months"),
        (86_400.0, "days"),
        (3_600.0, "hours"),
        (60.0, "minutes"),
    ];
    for (unit_seconds, label) in units {
        let interval = seconds / unit_seconds;
        if interval > 1.0 {
            return format!("{} {} ago", interval.floor() as i64, label);
        }
    }
    "Just now".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use crate::store::CrmData;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 9, 21, 12, 0, 0).unwrap()
    }

    fn service(store: CrmStore) -> NotificationService {
        NotificationService::new(
            store.clone(),
            NotificationRepository::new(store.clone()),
            LeadRepository::new(store),
        )
    }

    #[test]
    fn test_time_since_labels() {
        assert_eq!(time_since(now(), now()), "Just now");
        assert_eq!(time_since(now() - Duration::seconds(30), now()), "Just now");
        assert_eq!(time_since(now() - Duration::seconds(90), now()), "1 minutes ago");
        assert_eq!(time_since(now() - Duration::minutes(5), now()), "5 minutes ago");
        assert_eq!(time_since(now() - Duration::minutes(60), now()), "60 minutes ago");
        assert_eq!(time_since(now() - Duration::hours(5), now()), "5 hours ago");
        assert_eq!(time_since(now() - Duration::days(1), now()), "24 hours ago");
        assert_eq!(time_since(now() - Duration::days(3), now()), "3 days ago");
        assert_eq!(time_since(now() - Duration::days(65), now()), "2 months ago");
        assert_eq!(time_since(now() - Duration::days(800), now()), "2 years ago");
    }

    #[tokio::test]
    async fn test_seed_and_list() {
        let store = CrmStore::new(seed::demo_data(now().date_naive()));
        let service = service(store);

        assert_eq!(service.seed_feed(now()).await, 4);
        let feed = service.list(now()).await;

        assert_eq!(feed.notifications.len(), 4);
        assert_eq!(feed.unread_count, 2);
        assert_eq!(feed.notifications[0].time_ago, "Just now");
        assert_eq!(feed.notifications[3].time_ago, "24 hours ago");
    }

    #[tokio::test]
    async fn test_open_resolves_navigation() {
        let store = CrmStore::new(seed::demo_data(now().date_naive()));
        let service = service(store.clone());
        service.seed_feed(now()).await;

        let opened = service.open("notif_lead_lead_002").await.unwrap();
        assert!(opened.notification.read);
        assert_eq!(opened.navigate_to, Some(View::Leads));
        assert_eq!(opened.lead.unwrap().name, "Jane Doe");

        let opened = service.open("notif_deal_deal_002").await.unwrap();
        assert_eq!(opened.navigate_to, Some(View::Deals));

        let opened = service.open("notif_task_task_002").await.unwrap();
        assert_eq!(opened.navigate_to, Some(View::Tasks));

        let opened = service.open("notif_welcome").await.unwrap();
        assert_eq!(opened.navigate_to, None);

        assert!(matches!(service.open("nope").await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_open_lead_that_was_deleted() {
        let store = CrmStore::new(seed::demo_data(now().date_naive()));
        let service = service(store.clone());
        service.seed_feed(now()).await;
        store.write().await.leads.clear();

        let opened = service.open("notif_lead_lead_002").await.unwrap();
        assert!(opened.notification.read);
        assert_eq!(opened.navigate_to, None);
        assert!(opened.lead.is_none());
    }

    #[tokio::test]
    async fn test_empty_store_feed() {
        let service = service(CrmStore::new(CrmData::default()));
        service.seed_feed(now()).await;

        let feed = service.list(now()).await;
        assert_eq!(feed.notifications.len(), 1);
        assert_eq!(feed.unread_count, 0);
        assert_eq!(service.mark_all_read().await, 0);
    }
}
